use bevy::prelude::*;
use bevy::window::WindowResolution;

use skystrike::audio::{self, SoundBank, SoundCue};
use skystrike::config::{self, GameplayConfig};
use skystrike::graphics::{self, ViewportMetrics};
use skystrike::player::{self, DetonationRequest, FireCooldown, MoveIntent};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Skystrike".into(),
                resolution: WindowResolution::new(1200, 680),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .insert_resource(ClearColor(Color::srgb(0.25, 0.55, 0.80)))
        // Insert GameplayConfig with compiled defaults; load_gameplay_config
        // will overwrite it from assets/gameplay.toml (if present) in the
        // Startup schedule.
        .insert_resource(GameplayConfig::default())
        .insert_resource(ViewportMetrics::default())
        .insert_resource(MoveIntent::default())
        .insert_resource(FireCooldown::default())
        .init_resource::<SoundBank>()
        .add_message::<SoundCue>()
        .add_message::<DetonationRequest>()
        .add_systems(
            Startup,
            (
                // Load config first so every other startup system sees the
                // final values.
                config::load_gameplay_config,
                graphics::init_viewport_metrics.after(config::load_gameplay_config),
                graphics::setup_camera.after(config::load_gameplay_config),
                audio::load_sound_bank,
                player::spawn_player.after(graphics::init_viewport_metrics),
            ),
        )
        // The per-frame pipeline is one explicit chain so the observable
        // ordering matches the classic update → move → draw → shoot →
        // advance-explosion frame sequence.
        .add_systems(
            Update,
            (
                graphics::sync_viewport_metrics_system,
                player::keyboard_to_intent_system,
                player::keyboard_detonate_system,
                player::tick_fire_cooldown_system,
                player::apply_move_intent_system,
                player::integrate_motion_system,
                player::engine_sound_system,
                player::projectile_fire_system,
                player::cull_projectiles_system,
                player::detonation_system,
                // Visibility/frame selection reads the counter the advance
                // step is about to move, so a sweep shows frames 0..15.
                player::sync_sprite_visibility_system,
                player::advance_explosion_system,
                player::attach_projectile_sprite_system,
                player::sync_screen_transforms_system,
                audio::sound_playback_system,
            )
                .chain(),
        )
        .run();
}
