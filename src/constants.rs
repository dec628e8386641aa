//! Centralised gameplay constants.
//!
//! All tuneable values live here so they can be found, reasoned-about, and
//! modified in one place without source-diving across multiple modules.
//! Every constant is mirrored by a field on
//! [`crate::config::GameplayConfig`], which can override it at startup from
//! `assets/gameplay.toml`.

// ── Viewport ──────────────────────────────────────────────────────────────────

/// Fallback playfield width in pixels, used when no window is available
/// (headless tests) and as the initial window resolution.
pub const VIEWPORT_WIDTH: f32 = 1200.0;

/// Fallback playfield height in pixels.
pub const VIEWPORT_HEIGHT: f32 = 680.0;

// ── Aircraft sprite ───────────────────────────────────────────────────────────

/// Rendered width of the aircraft sprite in pixels.
///
/// Also the horizontal extent used by the edge clamps in
/// `apply_move_intent_system`, so shrinking the art without updating this
/// loosens the boundary.
pub const PLANE_WIDTH: f32 = 96.0;

/// Rendered height of the aircraft sprite in pixels.
///
/// Half of this is the muzzle offset applied when a projectile spawns.
pub const PLANE_HEIGHT: f32 = 64.0;

// ── Movement ──────────────────────────────────────────────────────────────────

/// Velocity gained per held direction flag per frame (pixels/second of speed
/// added each frame).
///
/// Direction flags combine, so a diagonal hold gains this much on both axes.
/// There is no damping: releasing the keys leaves the aircraft coasting.
pub const VELOCITY_STEP: f32 = 0.1;

/// Edge-clamp convention switch, kept for auditability.
///
/// When `true`, a violated lower edge clamps by *mirroring*: the write is
/// `pos = extent − pos` rather than the half-extent `extent / 2`. The
/// trigger condition is identical under both conventions
/// (`pos < extent − pos ⇔ pos < extent / 2`); only the clamped value
/// differs, and the mirror can jump the sprite well past the midline.
/// Set to `false` for plain half-extent clamping.
pub const MIRRORED_EDGE_CLAMP: bool = true;

// ── Engine sound ──────────────────────────────────────────────────────────────

/// Speed (velocity magnitude, pixels/second) above which a stopped engine
/// spins up and the start cue plays.
///
/// Must stay above [`ENGINE_STOP_SPEED`]; the gap is the hysteresis band that
/// prevents cue spam at borderline speeds.
pub const ENGINE_START_SPEED: f32 = 35.0;

/// Speed below which a running engine spins down and the stop cue plays.
pub const ENGINE_STOP_SPEED: f32 = 25.0;

/// Seconds between cabin-hum cues while the engine stays running.
pub const CABIN_LOOP_SECS: f32 = 1.0;

// ── Combat ────────────────────────────────────────────────────────────────────

/// Cooldown value (in frames) set when a projectile spawns.
pub const FIRE_COOLDOWN_FRAMES: u32 = 100;

/// A shot is permitted only while the cooldown counter is strictly below
/// this value.
///
/// The per-frame tick floors the counter at 1, so after a shot the gate
/// reopens `FIRE_COOLDOWN_FRAMES − FIRE_READY_BELOW + 1` frames later.
pub const FIRE_READY_BELOW: u32 = 25;

/// Projectile speed along the cannon axis, pixels/second.
pub const PROJECTILE_SPEED: f32 = 300.0;

/// Rendered width of a projectile sprite in pixels.
pub const PROJECTILE_WIDTH: f32 = 8.0;

/// Rendered height of a projectile sprite in pixels.
pub const PROJECTILE_HEIGHT: f32 = 16.0;

/// Extra slack (pixels) beyond the viewport before a projectile is culled.
///
/// Keeps rounds alive briefly off-screen so edge kills don't pop visibly.
pub const PROJECTILE_CULL_MARGIN: f32 = 32.0;

// ── Explosion animation ───────────────────────────────────────────────────────

/// Number of frames in the explosion sheet. One frame is shown per update.
pub const EXPLOSION_FRAME_COUNT: usize = 16;

/// Source crop size of one explosion frame, pixels.
pub const EXPLOSION_FRAME_SIZE: u32 = 128;

/// Explosion sheet grid: 4 columns × 4 rows of 128×128 frames.
pub const EXPLOSION_ATLAS_COLUMNS: u32 = 4;
pub const EXPLOSION_ATLAS_ROWS: u32 = 4;

/// On-screen size of the explosion sprite, pixels.
pub const EXPLOSION_DISPLAY_SIZE: f32 = 128.0;

// ── Player variant ────────────────────────────────────────────────────────────

/// Default cockpit variant: 1 selects skin A firing upward, anything else
/// selects skin B firing downward.
pub const DEFAULT_VARIANT: u32 = 1;
