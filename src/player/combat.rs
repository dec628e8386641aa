//! Projectile firing, the fire-rate cooldown, and projectile culling.
//!
//! ## Cooldown model
//!
//! [`FireCooldown`] counts frames, not seconds: [`tick_fire_cooldown_system`]
//! decrements it once per frame while it exceeds 1, independent of whether
//! anything is rendered.  A shot is permitted only while the counter is
//! strictly below `fire_ready_below`; spawning resets it to
//! `fire_cooldown_frames`.  An on-cooldown fire request is a silent no-op.
//!
//! ## Projectile lifecycle
//!
//! Rounds spawn at the muzzle (aircraft center offset by half its height in
//! the cannon direction) with a constant velocity along the cannon axis, are
//! integrated by the shared motion system, and are despawned by
//! [`cull_projectiles_system`] once their bounding box leaves the viewport
//! (plus a margin).

use super::state::{
    Cannon, FireCooldown, Player, Position, Projectile, SpriteExtent, Velocity,
};
use crate::collision::{overlaps_viewport, Aabb};
use crate::config::GameplayConfig;
use crate::graphics::ViewportMetrics;
use bevy::prelude::*;

// ── Cooldown tick ─────────────────────────────────────────────────────────────

/// Count the fire cooldown down one frame, flooring at 1.
///
/// Scheduled once per frame in the core chain; rendering plays no part in it.
pub fn tick_fire_cooldown_system(mut cooldown: ResMut<FireCooldown>) {
    if cooldown.frames > 1 {
        cooldown.frames -= 1;
    }
}

// ── Firing ────────────────────────────────────────────────────────────────────

/// Fire one projectile if the cooldown gate is open.
///
/// Returns `true` when a round was spawned.  The round carries only gameplay
/// components; its sprite is attached later by
/// [`super::rendering::attach_projectile_sprite_system`], keeping this path
/// renderer-free and headless-testable.
pub fn try_fire(
    commands: &mut Commands,
    cooldown: &mut FireCooldown,
    config: &GameplayConfig,
    aircraft_pos: Vec2,
    aircraft_extent: &SpriteExtent,
    cannon: &Cannon,
) -> bool {
    if cooldown.frames >= config.fire_ready_below {
        return false;
    }

    let sign = cannon.dir.screen_y_sign();
    let muzzle = Vec2::new(
        aircraft_pos.x,
        aircraft_pos.y + sign * aircraft_extent.half_height(),
    );

    commands.spawn((
        Projectile,
        Position(muzzle),
        Velocity(Vec2::new(0.0, sign * config.projectile_speed)),
        SpriteExtent::new(config.projectile_width, config.projectile_height),
        Transform::default(),
        Visibility::default(),
    ));
    cooldown.frames = config.fire_cooldown_frames;
    true
}

/// Fire on Space, rate-limited by [`FireCooldown`].
pub fn projectile_fire_system(
    mut commands: Commands,
    keys: Res<ButtonInput<KeyCode>>,
    mut cooldown: ResMut<FireCooldown>,
    config: Res<GameplayConfig>,
    q_player: Query<(&Position, &SpriteExtent, &Cannon), With<Player>>,
) {
    if !keys.pressed(KeyCode::Space) {
        return;
    }
    let Ok((pos, extent, cannon)) = q_player.single() else {
        return;
    };
    try_fire(&mut commands, &mut cooldown, &config, pos.0, extent, cannon);
}

// ── Culling ───────────────────────────────────────────────────────────────────

/// Despawn every projectile whose bounding box no longer overlaps the
/// viewport, with `projectile_cull_margin` of slack on each side.
pub fn cull_projectiles_system(
    mut commands: Commands,
    metrics: Res<ViewportMetrics>,
    config: Res<GameplayConfig>,
    q: Query<(Entity, &Position, &SpriteExtent), With<Projectile>>,
) {
    for (entity, pos, extent) in q.iter() {
        let padded = Aabb::from_center_half_extents(pos.0, extent.half())
            .inflate(config.projectile_cull_margin);
        if !overlaps_viewport(&padded, &metrics) {
            commands.entity(entity).despawn();
        }
    }
}
