//! Player module: the aircraft entity, its movement, sounds, combat, and
//! explosion.
//!
//! ## Sub-module layout
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`state`] | ECS components (`Player`, `Position`, `Velocity`, `EngineSound`, `ExplosionAnim`, `Projectile`) and resources (`MoveIntent`, `FireCooldown`) |
//! | [`movement`] | Direction intent, viewport edge clamps, motion integration |
//! | [`sound`] | The STOPPED/RUNNING engine-sound state machine |
//! | [`combat`] | Projectile firing, fire-rate cooldown, off-screen culling |
//! | [`explosion`] | Detonation trigger + 16-frame explosion animation |
//! | [`rendering`] | Sprite visibility, atlas frame selection, screen→world transform sync |
//!
//! All public items are re-exported at this level so that the rest of the
//! crate can use flat `crate::player::*` imports without knowing the
//! sub-module layout.

pub mod combat;
pub mod explosion;
pub mod movement;
pub mod rendering;
pub mod sound;
pub mod state;

// ── Flat re-exports ───────────────────────────────────────────────────────────

pub use combat::{
    cull_projectiles_system, projectile_fire_system, tick_fire_cooldown_system, try_fire,
};
pub use explosion::{
    advance_explosion_system, detonation_system, keyboard_detonate_system, DetonationRequest,
};
pub use movement::{
    apply_move_intent_system, clamp_to_viewport, integrate_motion_system,
    keyboard_to_intent_system,
};
pub use rendering::{
    attach_projectile_sprite_system, sync_screen_transforms_system,
    sync_sprite_visibility_system,
};
pub use sound::{engine_sound_system, step_engine_sound};
pub use state::{
    Cannon, DirectionMask, EngineSound, EngineState, ExplosionAnim, FireCooldown, FireDir,
    MoveIntent, Player, PlayerVariant, Position, Projectile, SpriteExtent, Velocity,
};

// ── Aircraft spawn ────────────────────────────────────────────────────────────

use crate::config::GameplayConfig;
use crate::constants::{
    EXPLOSION_ATLAS_COLUMNS, EXPLOSION_ATLAS_ROWS, EXPLOSION_DISPLAY_SIZE, EXPLOSION_FRAME_SIZE,
};
use crate::graphics::ViewportMetrics;
use bevy::prelude::*;

/// Spawn the player aircraft and its (hidden) explosion sprite.
///
/// The cockpit variant from config selects the skin image and the cannon's
/// fire direction in one place.  Both entities carry screen-space
/// [`Position`]s; the aircraft starts centered, one sprite-height above the
/// bottom edge.
///
/// Asset handles resolve lazily — a missing image is a fatal engine-level
/// asset error, not a condition this code recovers from.
pub fn spawn_player(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut layouts: ResMut<Assets<TextureAtlasLayout>>,
    config: Res<GameplayConfig>,
    metrics: Res<ViewportMetrics>,
) {
    let variant = PlayerVariant::from_index(config.variant);
    let size = Vec2::new(config.plane_width, config.plane_height);
    let start = Vec2::new(metrics.width / 2.0, metrics.height - size.y);

    commands.spawn((
        Player,
        Position(start),
        Velocity::default(),
        SpriteExtent { size },
        EngineSound::default(),
        Cannon {
            dir: variant.fire_dir(),
        },
        Sprite {
            image: asset_server.load(variant.skin_path()),
            custom_size: Some(size),
            ..Default::default()
        },
        Transform::default(),
        Visibility::Visible,
    ));

    let layout = layouts.add(TextureAtlasLayout::from_grid(
        UVec2::splat(EXPLOSION_FRAME_SIZE),
        EXPLOSION_ATLAS_COLUMNS,
        EXPLOSION_ATLAS_ROWS,
        None,
        None,
    ));
    let mut explosion_sprite = Sprite::from_atlas_image(
        asset_server.load("sprites/explosion.png"),
        TextureAtlas { layout, index: 0 },
    );
    explosion_sprite.custom_size = Some(Vec2::splat(EXPLOSION_DISPLAY_SIZE));

    commands.spawn((
        ExplosionAnim::default(),
        Position(start),
        explosion_sprite,
        Transform::default(),
        Visibility::Hidden,
    ));

    println!("✓ Player aircraft spawned ({variant:?} variant)");
}
