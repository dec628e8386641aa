//! The engine-sound state machine.
//!
//! A two-state FSM (STOPPED / RUNNING) keyed on the aircraft's speed drives
//! the propulsion cues.  The thresholds are deliberately asymmetric — spin-up
//! above `engine_start_speed`, spin-down below `engine_stop_speed` — so the
//! band between them is a hysteresis zone in which no transition (and no cue
//! spam) occurs.  While running, a cabin-hum cue repeats every
//! `cabin_loop_secs` seconds.
//!
//! The FSM itself is the pure function [`step_engine_sound`]; the system
//! wrapper feeds it the frame delta and forwards any cue to the audio
//! channel.

use super::state::{EngineSound, EngineState, Player, Velocity};
use crate::audio::SoundCue;
use crate::config::GameplayConfig;
use bevy::prelude::*;

/// Advance the engine-sound machine by one frame.
///
/// Returns the cue to play this frame, if any.  The internal timer counts
/// seconds since the last state-relevant sound event and resets on every
/// transition and on every cabin-hum trigger.
pub fn step_engine_sound(
    engine: &mut EngineSound,
    speed: f32,
    dt: f32,
    config: &GameplayConfig,
) -> Option<SoundCue> {
    engine.timer += dt;

    match engine.state {
        EngineState::Stopped => {
            if speed > config.engine_start_speed {
                engine.state = EngineState::Running;
                engine.timer = 0.0;
                return Some(SoundCue::EngineStart);
            }
            None
        }
        EngineState::Running => {
            if speed < config.engine_stop_speed {
                engine.state = EngineState::Stopped;
                engine.timer = 0.0;
                Some(SoundCue::EngineStop)
            } else if engine.timer > config.cabin_loop_secs {
                engine.timer = 0.0;
                Some(SoundCue::CabinHum)
            } else {
                None
            }
        }
    }
}

/// Per-frame system: run the FSM on the player's current speed and forward
/// any resulting cue to the playback channel.
pub fn engine_sound_system(
    time: Res<Time>,
    config: Res<GameplayConfig>,
    mut cues: MessageWriter<SoundCue>,
    mut q: Query<(&mut EngineSound, &Velocity), With<Player>>,
) {
    let Ok((mut engine, vel)) = q.single_mut() else {
        return;
    };
    if let Some(cue) = step_engine_sound(&mut engine, vel.speed(), time.delta_secs(), &config) {
        cues.write(cue);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GameplayConfig {
        GameplayConfig::default()
    }

    fn running_engine() -> EngineSound {
        EngineSound {
            state: EngineState::Running,
            timer: 0.0,
        }
    }

    #[test]
    fn stopped_engine_stays_stopped_below_start_threshold() {
        let mut engine = EngineSound::default();
        for _ in 0..100 {
            let cue = step_engine_sound(&mut engine, 35.0, 0.1, &config());
            assert_eq!(cue, None);
            assert_eq!(engine.state, EngineState::Stopped);
        }
    }

    #[test]
    fn crossing_start_threshold_spins_up_once() {
        let mut engine = EngineSound::default();
        engine.timer = 0.7;

        let cue = step_engine_sound(&mut engine, 40.0, 0.1, &config());
        assert_eq!(cue, Some(SoundCue::EngineStart));
        assert_eq!(engine.state, EngineState::Running);
        assert_eq!(engine.timer, 0.0, "timer must reset on transition");

        // Holding the same speed produces no further start cue.
        let cue = step_engine_sound(&mut engine, 40.0, 0.1, &config());
        assert_eq!(cue, None);
    }

    #[test]
    fn dropping_below_stop_threshold_spins_down() {
        let mut engine = running_engine();
        engine.timer = 0.5;

        let cue = step_engine_sound(&mut engine, 20.0, 0.1, &config());
        assert_eq!(cue, Some(SoundCue::EngineStop));
        assert_eq!(engine.state, EngineState::Stopped);
        assert_eq!(engine.timer, 0.0);
    }

    #[test]
    fn speed_held_inside_hysteresis_band_never_transitions() {
        // From either side, a constant speed in [25, 35] changes nothing.
        let mut stopped = EngineSound::default();
        let mut running = running_engine();
        for _ in 0..20 {
            step_engine_sound(&mut stopped, 30.0, 0.01, &config());
            step_engine_sound(&mut running, 30.0, 0.01, &config());
            assert_eq!(stopped.state, EngineState::Stopped);
            assert_eq!(running.state, EngineState::Running);
        }
    }

    #[test]
    fn cabin_hum_repeats_after_the_loop_interval() {
        let mut engine = running_engine();

        // Nine 0.1 s frames: timer reaches 0.9, no hum yet.
        for _ in 0..9 {
            assert_eq!(step_engine_sound(&mut engine, 40.0, 0.1, &config()), None);
        }
        // Two more pushes past 1.0 s and the hum fires, resetting the timer.
        step_engine_sound(&mut engine, 40.0, 0.1, &config());
        let cue = step_engine_sound(&mut engine, 40.0, 0.1, &config());
        assert_eq!(cue, Some(SoundCue::CabinHum));
        assert_eq!(engine.timer, 0.0);
    }

    #[test]
    fn cabin_hum_only_fires_while_running() {
        let mut engine = EngineSound::default();
        // A stopped engine accumulates timer forever without humming.
        for _ in 0..50 {
            assert_eq!(step_engine_sound(&mut engine, 10.0, 0.1, &config()), None);
        }
    }

    #[test]
    fn spin_down_takes_priority_over_pending_hum() {
        let mut engine = running_engine();
        engine.timer = 5.0; // hum long overdue

        let cue = step_engine_sound(&mut engine, 10.0, 0.1, &config());
        assert_eq!(cue, Some(SoundCue::EngineStop));
    }
}
