//! Skystrike player-entity subsystem
//!
//! Models one controllable aircraft sprite for a 2D arcade shooter: its
//! movement physics, propulsion-sound state machine, projectile spawning,
//! explosion animation, and bounding-box overlap testing, on top of Bevy's
//! renderer, input, and audio.

pub mod audio;
pub mod collision;
pub mod config;
pub mod constants;
pub mod error;
pub mod graphics;
pub mod player;
