//! Camera setup and the screen-metrics capability.

use crate::config::GameplayConfig;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

/// Current playfield dimensions in pixels.
///
/// Synced from the primary window every frame by
/// [`sync_viewport_metrics_system`]; headless runs (tests) keep whatever was
/// inserted, so boundary logic never needs a window to exist.
#[derive(Resource, Debug, Clone, Copy)]
pub struct ViewportMetrics {
    pub width: f32,
    pub height: f32,
}

impl Default for ViewportMetrics {
    fn default() -> Self {
        Self {
            width: crate::constants::VIEWPORT_WIDTH,
            height: crate::constants::VIEWPORT_HEIGHT,
        }
    }
}

/// Startup system: seed the viewport metrics from the loaded config.
///
/// Must run after `load_gameplay_config` so overridden dimensions apply.
pub fn init_viewport_metrics(config: Res<GameplayConfig>, mut metrics: ResMut<ViewportMetrics>) {
    metrics.width = config.viewport_width;
    metrics.height = config.viewport_height;
}

/// Refresh the viewport metrics from the primary window each frame so
/// boundary clamps and culling track live resizes.
pub fn sync_viewport_metrics_system(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut metrics: ResMut<ViewportMetrics>,
) {
    if let Ok(window) = windows.single() {
        metrics.width = window.width();
        metrics.height = window.height();
    }
}

/// Setup camera for 2D rendering
pub fn setup_camera(mut commands: Commands) {
    // Default Camera2d with default scale shows roughly the full window area
    commands.spawn(Camera2d);
    eprintln!("[SETUP] Camera spawned");
}
