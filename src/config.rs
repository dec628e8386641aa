//! Runtime gameplay configuration loaded from `assets/gameplay.toml`.
//!
//! [`GameplayConfig`] is a Bevy [`Resource`] that mirrors every constant in
//! [`crate::constants`].  At startup, [`load_gameplay_config`] reads
//! `assets/gameplay.toml` and overwrites the defaults with any values present
//! in the file.  Missing keys fall back to the compile-time defaults, so a
//! minimal TOML can override just the values you care about.
//!
//! ## Usage in systems
//!
//! Add `config: Res<GameplayConfig>` to any system parameter list and read
//! values with `config.velocity_step`, `config.fire_cooldown_frames`, etc.
//!
//! Keep `src/constants.rs` in sync: it remains the **authoritative default**
//! source used by `GameplayConfig::default()`.

use crate::constants::*;
use crate::error::{validate_engine_thresholds, validate_fire_cooldown};
use bevy::prelude::*;
use serde::Deserialize;

/// Runtime-tunable gameplay configuration.
///
/// All fields default to the corresponding compile-time constant from
/// `src/constants.rs`.  Override any subset by setting the value in
/// `assets/gameplay.toml`.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameplayConfig {
    // ── Viewport ─────────────────────────────────────────────────────────────
    pub viewport_width: f32,
    pub viewport_height: f32,

    // ── Aircraft ─────────────────────────────────────────────────────────────
    pub plane_width: f32,
    pub plane_height: f32,
    /// Cockpit variant: 1 = skin A firing upward, anything else = skin B
    /// firing downward.
    pub variant: u32,

    // ── Movement ─────────────────────────────────────────────────────────────
    pub velocity_step: f32,

    // ── Engine sound ─────────────────────────────────────────────────────────
    pub engine_start_speed: f32,
    pub engine_stop_speed: f32,
    pub cabin_loop_secs: f32,

    // ── Combat ───────────────────────────────────────────────────────────────
    pub fire_cooldown_frames: u32,
    pub fire_ready_below: u32,
    pub projectile_speed: f32,
    pub projectile_width: f32,
    pub projectile_height: f32,
    pub projectile_cull_margin: f32,
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            // Viewport
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            // Aircraft
            plane_width: PLANE_WIDTH,
            plane_height: PLANE_HEIGHT,
            variant: DEFAULT_VARIANT,
            // Movement
            velocity_step: VELOCITY_STEP,
            // Engine sound
            engine_start_speed: ENGINE_START_SPEED,
            engine_stop_speed: ENGINE_STOP_SPEED,
            cabin_loop_secs: CABIN_LOOP_SECS,
            // Combat
            fire_cooldown_frames: FIRE_COOLDOWN_FRAMES,
            fire_ready_below: FIRE_READY_BELOW,
            projectile_speed: PROJECTILE_SPEED,
            projectile_width: PROJECTILE_WIDTH,
            projectile_height: PROJECTILE_HEIGHT,
            projectile_cull_margin: PROJECTILE_CULL_MARGIN,
        }
    }
}

/// Startup system: attempt to load `assets/gameplay.toml` and overwrite the
/// `GameplayConfig` resource with any values present in the file.
///
/// Missing keys retain their compiled defaults.  TOML parse errors are
/// reported but do not abort the game.  A missing file is silently ignored
/// (defaults are already in place from `insert_resource`).  Loaded values
/// that would break a system invariant are rejected back to defaults.
pub fn load_gameplay_config(mut config: ResMut<GameplayConfig>) {
    let path = "assets/gameplay.toml";
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<GameplayConfig>(&contents) {
            Ok(loaded) => {
                *config = sanitize(loaded);
                println!("✓ Loaded gameplay config from {path}");
            }
            Err(e) => {
                eprintln!("⚠ Failed to parse {path}: {e}; using defaults");
            }
        },
        Err(_) => {
            // File not present — defaults are already in place; not an error.
            println!("ℹ No {path} found; using compiled defaults");
        }
    }
}

/// Reject loaded value groups that violate system invariants, reverting the
/// offending group to its compiled defaults.
fn sanitize(mut loaded: GameplayConfig) -> GameplayConfig {
    if let Err(e) =
        validate_engine_thresholds(loaded.engine_start_speed, loaded.engine_stop_speed)
    {
        warn!("gameplay.toml: {e}; reverting engine thresholds to defaults");
        loaded.engine_start_speed = ENGINE_START_SPEED;
        loaded.engine_stop_speed = ENGINE_STOP_SPEED;
    }
    if let Err(e) = validate_fire_cooldown(loaded.fire_ready_below, loaded.fire_cooldown_frames) {
        warn!("gameplay.toml: {e}; reverting fire cooldown to defaults");
        loaded.fire_ready_below = FIRE_READY_BELOW;
        loaded.fire_cooldown_frames = FIRE_COOLDOWN_FRAMES;
    }
    loaded
}
