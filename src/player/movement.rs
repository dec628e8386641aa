//! Movement: direction intent, viewport edge clamps, and motion integration.
//!
//! ## Pipeline (runs in order every `Update` frame)
//!
//! 1. [`keyboard_to_intent_system`] — arrow keys / WASD → [`MoveIntent`].
//! 2. [`apply_move_intent_system`] — clamp against the viewport edges, then
//!    apply fixed velocity increments per held flag.
//! 3. [`integrate_motion_system`] — position += velocity · dt for every
//!    mobile entity (aircraft and projectiles alike).
//!
//! The intent abstraction keeps the movement logic fully testable: tests
//! populate [`MoveIntent`] directly and run only the apply system.
//!
//! ## Edge clamp semantics
//!
//! The clamp is inelastic (the velocity component is zeroed) and the edges
//! are deliberately asymmetric: the left/top edges *mirror* the position
//! (`pos = extent − pos`) and the bottom edge keeps a full sprite-height
//! margin.  [`MIRRORED_EDGE_CLAMP`](crate::constants::MIRRORED_EDGE_CLAMP)
//! switches the mirror off in favour of plain half-extent clamping.

use super::state::{DirectionMask, MoveIntent, Player, Position, SpriteExtent, Velocity};
use crate::config::GameplayConfig;
use crate::constants::MIRRORED_EDGE_CLAMP;
use crate::graphics::ViewportMetrics;
use bevy::prelude::*;

// ── Step 1: Keyboard → Intent ─────────────────────────────────────────────────

/// Translate held arrow / WASD keys into this frame's [`MoveIntent`].
///
/// The mask is rebuilt from scratch each frame; opposing keys held together
/// simply set both flags and their velocity increments cancel.
pub fn keyboard_to_intent_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut intent: ResMut<MoveIntent>,
) {
    let mut mask = DirectionMask::NONE;
    if keys.pressed(KeyCode::ArrowLeft) || keys.pressed(KeyCode::KeyA) {
        mask.insert(DirectionMask::LEFT);
    }
    if keys.pressed(KeyCode::ArrowRight) || keys.pressed(KeyCode::KeyD) {
        mask.insert(DirectionMask::RIGHT);
    }
    if keys.pressed(KeyCode::ArrowUp) || keys.pressed(KeyCode::KeyW) {
        mask.insert(DirectionMask::FORWARD);
    }
    if keys.pressed(KeyCode::ArrowDown) || keys.pressed(KeyCode::KeyS) {
        mask.insert(DirectionMask::BACKWARD);
    }
    intent.0 = mask;
}

// ── Step 2: Clamp + accelerate ────────────────────────────────────────────────

/// Clamp the aircraft against the viewport edges, then apply the per-frame
/// velocity increments for each held direction flag.
///
/// Clamping runs first: a frame that both clamps and accelerates leaves the
/// clamped velocity component at ±one step rather than zero.
pub fn apply_move_intent_system(
    intent: Res<MoveIntent>,
    metrics: Res<ViewportMetrics>,
    config: Res<GameplayConfig>,
    mut q: Query<(&mut Position, &mut Velocity, &SpriteExtent), With<Player>>,
) {
    let Ok((mut pos, mut vel, extent)) = q.single_mut() else {
        return;
    };

    clamp_to_viewport(&mut pos.0, &mut vel.0, extent.size, &metrics);

    let step = config.velocity_step;
    let mask = intent.0;
    if mask.contains(DirectionMask::LEFT) {
        vel.0.x -= step;
    }
    if mask.contains(DirectionMask::RIGHT) {
        vel.0.x += step;
    }
    if mask.contains(DirectionMask::FORWARD) {
        vel.0.y -= step;
    }
    if mask.contains(DirectionMask::BACKWARD) {
        vel.0.y += step;
    }
}

/// Inelastic clamp of a sprite center against the four viewport edges.
///
/// Each violated edge rewrites the position and zeroes that velocity
/// component.  Legacy arithmetic, kept auditable behind
/// `MIRRORED_EDGE_CLAMP`:
///
/// - left/top: trigger `pos < extent − pos`; the mirrored write
///   `pos = extent − pos`
/// - right: half-extent margin against the far edge
/// - bottom: **full**-extent margin against the far edge
pub fn clamp_to_viewport(pos: &mut Vec2, vel: &mut Vec2, sprite: Vec2, metrics: &ViewportMetrics) {
    if pos.x < sprite.x - pos.x {
        pos.x = if MIRRORED_EDGE_CLAMP {
            sprite.x - pos.x
        } else {
            sprite.x / 2.0
        };
        vel.x = 0.0;
    }

    if pos.x > metrics.width - sprite.x / 2.0 {
        pos.x = metrics.width - sprite.x / 2.0;
        vel.x = 0.0;
    }

    if pos.y < sprite.y - pos.y {
        pos.y = if MIRRORED_EDGE_CLAMP {
            sprite.y - pos.y
        } else {
            sprite.y / 2.0
        };
        vel.y = 0.0;
    }

    if pos.y > metrics.height - sprite.y {
        pos.y = metrics.height - sprite.y;
        vel.y = 0.0;
    }
}

// ── Step 3: Integration ───────────────────────────────────────────────────────

/// Advance every mobile entity by its velocity over the frame delta.
pub fn integrate_motion_system(time: Res<Time>, mut q: Query<(&mut Position, &Velocity)>) {
    let dt = time.delta_secs();
    for (mut pos, vel) in q.iter_mut() {
        pos.0 = integrate(pos.0, vel.0, dt);
    }
}

/// One Euler step: `pos + vel · dt`.
#[inline]
pub fn integrate(pos: Vec2, vel: Vec2, dt: f32) -> Vec2 {
    pos + vel * dt
}
