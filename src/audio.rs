//! Fire-and-forget sound playback.
//!
//! Gameplay systems never touch the audio device: they write [`SoundCue`]
//! messages, and [`sound_playback_system`] drains the channel into one-shot
//! [`AudioPlayer`] entities that despawn when the sample ends.  Tests observe
//! cues by reading the same message channel with a recording system instead
//! of adding the playback system.
//!
//! One audible channel is assumed: a new cue may cut off a playing one, and
//! no completion signal is observed.  This is an accepted limitation, not
//! something the gameplay layer works around.

use bevy::audio::AudioSource;
use bevy::prelude::*;

/// A request to play one sound sample, fire-and-forget.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Engine spin-up, on the STOPPED → RUNNING transition.
    EngineStart,
    /// Engine spin-down, on the RUNNING → STOPPED transition.
    EngineStop,
    /// Recurring cabin hum while the engine stays running.
    CabinHum,
    /// Aircraft explosion.
    Detonation,
}

/// Loaded handles for every playable sample.
///
/// Created empty and filled by [`load_sound_bank`] at startup; handles
/// resolve lazily, so a missing file surfaces as a hard asset error from the
/// engine rather than a recoverable path here.
#[derive(Resource, Default)]
pub struct SoundBank {
    pub engine_start: Handle<AudioSource>,
    pub engine_stop: Handle<AudioSource>,
    pub cabin_hum: Handle<AudioSource>,
    pub detonation: Handle<AudioSource>,
}

/// Load every sound sample from assets at startup.
pub fn load_sound_bank(mut bank: ResMut<SoundBank>, asset_server: Res<AssetServer>) {
    bank.engine_start = asset_server.load("sounds/jet-start.ogg");
    bank.engine_stop = asset_server.load("sounds/jet-stop.ogg");
    bank.cabin_hum = asset_server.load("sounds/jet-cabin.ogg");
    bank.detonation = asset_server.load("sounds/explosion.ogg");
    eprintln!("[SETUP] Sound bank loaded");
}

/// Drain pending [`SoundCue`]s into one-shot playback entities.
pub fn sound_playback_system(
    mut commands: Commands,
    mut cues: MessageReader<SoundCue>,
    bank: Res<SoundBank>,
) {
    for cue in cues.read() {
        let handle = match cue {
            SoundCue::EngineStart => bank.engine_start.clone(),
            SoundCue::EngineStop => bank.engine_stop.clone(),
            SoundCue::CabinHum => bank.cabin_hum.clone(),
            SoundCue::Detonation => bank.detonation.clone(),
        };
        commands.spawn((AudioPlayer::new(handle), PlaybackSettings::DESPAWN));
    }
}
