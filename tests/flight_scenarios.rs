//! Headless multi-frame scenarios for the player aircraft.
//!
//! These tests use [`MinimalPlugins`] — no window, no rendering, no audio
//! device — so they run fast and deterministically in CI.  Sound output is
//! observed by recording the `SoundCue` channel instead of adding the
//! playback system.
//!
//! Covered scenarios:
//! 1. An aircraft at rest stays STOPPED with no cues across many frames.
//! 2. A speed jump to 40 spins the engine up exactly once.
//! 3. Rapid-fire input spawns exactly one round per cooldown window.
//! 4. A detonation sweep runs 16 frames and leaves the aircraft reset.

use bevy::prelude::*;

use skystrike::audio::SoundCue;
use skystrike::config::GameplayConfig;
use skystrike::player::{
    advance_explosion_system, detonation_system, engine_sound_system, projectile_fire_system,
    tick_fire_cooldown_system, Cannon, DetonationRequest, EngineSound, EngineState,
    ExplosionAnim, FireCooldown, FireDir, Player, Position, Projectile, SpriteExtent, Velocity,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Every cue written this run, in order.  The recording system stands in for
/// the playback system, which is exactly how the audio seam is meant to be
/// substituted.
#[derive(Resource, Default)]
struct RecordedCues(Vec<SoundCue>);

fn record_cues_system(mut cues: MessageReader<SoundCue>, mut recorded: ResMut<RecordedCues>) {
    recorded.0.extend(cues.read());
}

/// Build a minimal headless app with the player resources, the sound channel,
/// and the cue recorder in place.
fn build_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(GameplayConfig::default());
    app.insert_resource(FireCooldown::default());
    app.insert_resource(RecordedCues::default());
    app.add_message::<SoundCue>();
    app.add_message::<DetonationRequest>();
    app
}

fn spawn_aircraft(app: &mut App, velocity: Vec2) {
    app.world_mut().spawn((
        Player,
        Position(Vec2::new(600.0, 550.0)),
        Velocity(velocity),
        SpriteExtent::new(96.0, 64.0),
        EngineSound::default(),
        Cannon { dir: FireDir::Up },
    ));
}

fn spawn_explosion(app: &mut App) {
    app.world_mut()
        .spawn((ExplosionAnim::default(), Position(Vec2::ZERO)));
}

fn recorded(app: &App) -> &[SoundCue] {
    &app.world().resource::<RecordedCues>().0
}

fn engine_state(app: &mut App) -> EngineState {
    let world = app.world_mut();
    let mut q = world.query_filtered::<&EngineSound, With<Player>>();
    q.single(world).unwrap().state
}

// ── Scenario 1: at rest ───────────────────────────────────────────────────────

#[test]
fn aircraft_at_rest_stays_stopped_and_silent() {
    let mut app = build_app();
    app.add_systems(Update, (engine_sound_system, record_cues_system).chain());
    spawn_aircraft(&mut app, Vec2::ZERO);

    for _ in 0..10 {
        app.update();
    }

    assert_eq!(engine_state(&mut app), EngineState::Stopped);
    assert!(recorded(&app).is_empty(), "no cue may fire at rest");
}

// ── Scenario 2: speed jump ────────────────────────────────────────────────────

#[test]
fn speed_jump_spins_engine_up_exactly_once() {
    let mut app = build_app();
    app.add_systems(Update, (engine_sound_system, record_cues_system).chain());
    spawn_aircraft(&mut app, Vec2::new(40.0, 0.0));

    app.update();
    assert_eq!(engine_state(&mut app), EngineState::Running);
    assert_eq!(recorded(&app), &[SoundCue::EngineStart]);

    // Further frames at the same speed add no cues (the cabin hum needs a
    // full second, far longer than these frames take).
    app.update();
    app.update();
    assert_eq!(recorded(&app), &[SoundCue::EngineStart]);

    let world = app.world_mut();
    let mut q = world.query_filtered::<&EngineSound, With<Player>>();
    let engine = q.single(world).unwrap();
    assert!(
        engine.timer < 0.5,
        "timer must have been reset by the transition"
    );
}

// ── Scenario 3: rapid fire ────────────────────────────────────────────────────

#[test]
fn rapid_fire_is_rate_limited_to_one_round() {
    let mut app = build_app();
    let mut keys = ButtonInput::<KeyCode>::default();
    keys.press(KeyCode::Space);
    app.insert_resource(keys);
    app.add_systems(
        Update,
        (tick_fire_cooldown_system, projectile_fire_system).chain(),
    );
    spawn_aircraft(&mut app, Vec2::ZERO);

    // Hold fire for a dozen frames: the first spawns (cooldown 0 < 25) and
    // resets the counter to 100; every following frame is silently refused.
    for _ in 0..12 {
        app.update();
    }

    let world = app.world_mut();
    let count = world
        .query_filtered::<Entity, With<Projectile>>()
        .iter(world)
        .count();
    assert_eq!(count, 1, "cooldown must limit the burst to a single round");

    // 100 minus the eleven post-spawn ticks.
    assert_eq!(app.world().resource::<FireCooldown>().frames, 89);
}

// ── Scenario 4: detonation sweep ──────────────────────────────────────────────

#[test]
fn detonation_sweep_runs_sixteen_frames_and_resets() {
    let mut app = build_app();
    app.add_systems(
        Update,
        (
            detonation_system,
            advance_explosion_system,
            record_cues_system,
        )
            .chain(),
    );
    spawn_aircraft(&mut app, Vec2::new(40.0, 0.0));
    spawn_explosion(&mut app);

    app.world_mut().write_message(DetonationRequest);

    // Frames 1..=15: animation active.
    for frame in 1..=15 {
        app.update();
        let world = app.world_mut();
        let mut q = world.query::<&ExplosionAnim>();
        let anim = q.single(world).unwrap();
        assert!(anim.active, "frame {frame} should still be exploding");
    }

    // Frame 16 completes the sweep.
    app.update();
    let world = app.world_mut();
    let mut q = world.query::<&ExplosionAnim>();
    let anim = q.single(world).unwrap();
    assert!(!anim.active);
    assert_eq!(anim.frame, 0);

    let mut q = world.query_filtered::<(&Velocity, &EngineSound), With<Player>>();
    let (vel, engine) = q.single(world).unwrap();
    assert_eq!(vel.0, Vec2::ZERO);
    assert_eq!(engine.state, EngineState::Stopped);

    assert_eq!(recorded(&app), &[SoundCue::Detonation]);
}
