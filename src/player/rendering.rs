//! Player-specific rendering glue: sprite visibility, explosion atlas frame
//! selection, projectile sprite attachment, and the screen→world transform
//! sync.
//!
//! Gameplay systems never write `Transform` or `Visibility` directly; these
//! systems project the screen-space state onto the renderer once per frame.

use super::state::{ExplosionAnim, Player, Position, Projectile, SpriteExtent};
use crate::graphics::ViewportMetrics;
use bevy::prelude::*;

/// Show exactly one of {aircraft sprite, explosion sprite} and select the
/// explosion's atlas frame.
///
/// Runs before the animation advance so the frame selected here is the one
/// the counter currently points at (0..frame_count−1 over a full sweep).
pub fn sync_sprite_visibility_system(
    mut q_explosion: Query<(&ExplosionAnim, &mut Sprite, &mut Visibility), Without<Player>>,
    mut q_plane: Query<&mut Visibility, (With<Player>, Without<ExplosionAnim>)>,
) {
    let Ok((anim, mut sprite, mut explosion_vis)) = q_explosion.single_mut() else {
        return;
    };
    let Ok(mut plane_vis) = q_plane.single_mut() else {
        return;
    };

    if anim.active {
        *plane_vis = Visibility::Hidden;
        *explosion_vis = Visibility::Visible;
        if let Some(atlas) = sprite.texture_atlas.as_mut() {
            atlas.index = anim.frame.min(anim.frame_count.saturating_sub(1));
        }
    } else {
        *plane_vis = Visibility::Visible;
        *explosion_vis = Visibility::Hidden;
    }
}

/// Attach a sprite to every newly-fired projectile.
///
/// Firing spawns gameplay components only (see
/// [`super::combat::try_fire`]); this system adds the renderable sprite one
/// frame later via [`Added<Projectile>`], the same split the aircraft uses
/// between logic and drawing.
pub fn attach_projectile_sprite_system(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    q: Query<(Entity, &SpriteExtent), Added<Projectile>>,
) {
    for (entity, extent) in q.iter() {
        commands.entity(entity).insert(Sprite {
            image: asset_server.load("sprites/tracer.png"),
            custom_size: Some(extent.size),
            ..Default::default()
        });
    }
}

/// Map screen-space positions (origin top-left, +y down) onto centered world
/// transforms for every positioned entity.
pub fn sync_screen_transforms_system(
    metrics: Res<ViewportMetrics>,
    mut q: Query<(&Position, &mut Transform)>,
) {
    for (pos, mut transform) in q.iter_mut() {
        transform.translation.x = pos.0.x - metrics.width / 2.0;
        transform.translation.y = metrics.height / 2.0 - pos.0.y;
    }
}
