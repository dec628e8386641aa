//! Detonation trigger and explosion animation advance.
//!
//! A detonation is requested through the buffered [`DetonationRequest`]
//! message — gameplay hazards and the demo key binding both write the same
//! channel.  Triggering copies the aircraft's position into the explosion
//! entity, rewinds the animation to frame 0, and fires the detonation cue;
//! re-triggering mid-sweep restarts the animation without cancelling the
//! in-flight sample.
//!
//! [`advance_explosion_system`] steps the counter once per frame.  The step
//! that completes the sweep also zeroes the aircraft's velocity and forces
//! the engine state machine to STOPPED, atomically with the deactivation.

use super::state::{EngineSound, EngineState, ExplosionAnim, Player, Position, Velocity};
use crate::audio::SoundCue;
use bevy::prelude::*;

/// Request to detonate the player aircraft.
#[derive(Message, Debug, Clone, Copy, Default)]
pub struct DetonationRequest;

/// Demo binding: `E` detonates the aircraft.
///
/// Host-side hazards (enemy fire, terrain) write the same message; this
/// system only exists so the subsystem is exercisable standalone.
pub fn keyboard_detonate_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut requests: MessageWriter<DetonationRequest>,
) {
    if keys.just_pressed(KeyCode::KeyE) {
        requests.write(DetonationRequest);
    }
}

/// Consume pending detonation requests: park the explosion sprite on the
/// aircraft, rewind to frame 0, and fire the detonation cue.
pub fn detonation_system(
    mut requests: MessageReader<DetonationRequest>,
    mut cues: MessageWriter<SoundCue>,
    q_player: Query<&Position, (With<Player>, Without<ExplosionAnim>)>,
    mut q_explosion: Query<(&mut ExplosionAnim, &mut Position), Without<Player>>,
) {
    for _ in requests.read() {
        let Ok(player_pos) = q_player.single() else {
            continue;
        };
        let Ok((mut anim, mut pos)) = q_explosion.single_mut() else {
            continue;
        };
        pos.0 = player_pos.0;
        anim.restart();
        cues.write(SoundCue::Detonation);
        info!("[player] Detonation at {:?}", player_pos.0);
    }
}

/// Step the explosion animation once per frame.
///
/// On the completing step the aircraft is reset: velocity zeroed and engine
/// forced to STOPPED, so the respawned plane sits silent and still.
pub fn advance_explosion_system(
    mut q_explosion: Query<&mut ExplosionAnim>,
    mut q_player: Query<(&mut Velocity, &mut EngineSound), With<Player>>,
) {
    let Ok(mut anim) = q_explosion.single_mut() else {
        return;
    };
    if !anim.active {
        return;
    }
    if !anim.advance() {
        if let Ok((mut vel, mut engine)) = q_player.single_mut() {
            vel.0 = Vec2::ZERO;
            engine.state = EngineState::Stopped;
        }
    }
}
