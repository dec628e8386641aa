//! Gameplay-specific error types.
//!
//! The frame loop itself has no recoverable failures — asset problems are
//! fatal at startup and rate-limiting is a silent no-op — so these types
//! exist for the configuration seam: validating tunable values before they
//! reach the systems that assume them.

use std::fmt;

/// Top-level error enum for the Skystrike gameplay layer.
#[derive(Debug)]
pub enum GameError {
    /// The engine-sound hysteresis band is inverted or collapsed: the start
    /// threshold must sit strictly above the stop threshold.
    InvertedHysteresis {
        /// Speed above which the engine spins up.
        start: f32,
        /// Speed below which the engine spins down.
        stop: f32,
    },

    /// The fire-ready gate is not below the cooldown reset value, which
    /// would let every frame fire.
    CooldownGateTooHigh {
        /// Counter value below which a shot is permitted.
        gate: u32,
        /// Counter value set after a shot.
        reset: u32,
    },

    /// An animation was configured with no frames to show.
    EmptyAnimation {
        /// Human-readable description of which animation was rejected.
        context: &'static str,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvertedHysteresis { start, stop } => write!(
                f,
                "engine sound thresholds inverted: start {} must be greater than stop {}",
                start, stop
            ),
            GameError::CooldownGateTooHigh { gate, reset } => write!(
                f,
                "fire-ready gate {} must be below the cooldown reset {}",
                gate, reset
            ),
            GameError::EmptyAnimation { context } => {
                write!(f, "animation '{}' has zero frames", context)
            }
        }
    }
}

impl std::error::Error for GameError {}

/// Convenience alias: a `Result` using `GameError` as the error type.
pub type GameResult<T> = Result<T, GameError>;

// ── Validation helpers ────────────────────────────────────────────────────────

/// Returns an error unless `start > stop`, i.e. the hysteresis band has
/// positive width (or at least is not inverted).
pub fn validate_engine_thresholds(start: f32, stop: f32) -> GameResult<()> {
    if start > stop {
        Ok(())
    } else {
        Err(GameError::InvertedHysteresis { start, stop })
    }
}

/// Returns an error unless the fire-ready gate sits below the cooldown reset.
pub fn validate_fire_cooldown(gate: u32, reset: u32) -> GameResult<()> {
    if gate < reset {
        Ok(())
    } else {
        Err(GameError::CooldownGateTooHigh { gate, reset })
    }
}
