//! Player components and resources.
//!
//! All ECS components and Bevy resources that describe aircraft state live
//! here.  Systems that mutate this state are in the sibling modules:
//! - [`super::movement`] — direction intent, edge clamps, integration
//! - [`super::sound`] — the engine-sound state machine
//! - [`super::combat`] — projectile firing, cooldown, culling
//! - [`super::explosion`] — detonation trigger + animation advance
//!
//! Gameplay positions are **screen space**: origin at the top-left of the
//! viewport, +y down, pixel units.  [`super::rendering`] maps them to world
//! transforms.

use crate::constants::{EXPLOSION_FRAME_COUNT, PLANE_HEIGHT, PLANE_WIDTH};
use bevy::prelude::*;
use std::ops::BitOr;

// ── Components ─────────────────────────────────────────────────────────────────

/// Marker component for the player aircraft entity.
#[derive(Component)]
pub struct Player;

/// Screen-space position of a sprite's center, pixels.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct Position(pub Vec2);

/// Screen-space velocity, pixels/second.  +y moves down-screen.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct Velocity(pub Vec2);

impl Velocity {
    /// Current speed (Euclidean magnitude); drives the engine-sound machine.
    #[inline]
    pub fn speed(&self) -> f32 {
        self.0.length()
    }
}

/// Pixel dimensions of a sprite, used for edge clamps, muzzle offsets, and
/// bounding boxes.
#[derive(Component, Debug, Clone, Copy)]
pub struct SpriteExtent {
    pub size: Vec2,
}

impl SpriteExtent {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn half_width(&self) -> f32 {
        self.size.x / 2.0
    }

    #[inline]
    pub fn half_height(&self) -> f32 {
        self.size.y / 2.0
    }

    #[inline]
    pub fn half(&self) -> Vec2 {
        self.size / 2.0
    }
}

impl Default for SpriteExtent {
    fn default() -> Self {
        Self::new(PLANE_WIDTH, PLANE_HEIGHT)
    }
}

/// Propulsion sound states.  Transitions are driven by speed thresholds with
/// a hysteresis band between them (see [`super::sound`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineState {
    #[default]
    Stopped,
    Running,
}

/// The engine-sound state machine: current state plus seconds since the last
/// state-relevant sound event.
#[derive(Component, Debug, Default)]
pub struct EngineSound {
    pub state: EngineState,
    /// Reset to 0 on every transition and on every cabin-hum trigger.
    pub timer: f32,
}

/// Vertical fire direction of the aircraft's cannon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireDir {
    /// Toward the top of the screen (−y).
    Up,
    /// Toward the bottom of the screen (+y).
    Down,
}

impl FireDir {
    /// Sign of this direction on the screen-space y axis.
    #[inline]
    pub fn screen_y_sign(self) -> f32 {
        match self {
            FireDir::Up => -1.0,
            FireDir::Down => 1.0,
        }
    }
}

/// The aircraft's cannon: fixed fire direction, set by the cockpit variant.
#[derive(Component, Debug, Clone, Copy)]
pub struct Cannon {
    pub dir: FireDir,
}

/// Cockpit variant.  Selects both the skin image and the cannon direction:
/// variant 1 is the upward-firing skin A cockpit, everything else the
/// downward-firing skin B cockpit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerVariant {
    One,
    Two,
}

impl PlayerVariant {
    pub fn from_index(index: u32) -> Self {
        if index == 1 {
            PlayerVariant::One
        } else {
            PlayerVariant::Two
        }
    }

    pub fn skin_path(self) -> &'static str {
        match self {
            PlayerVariant::One => "sprites/plane-a.png",
            PlayerVariant::Two => "sprites/plane-b.png",
        }
    }

    pub fn fire_dir(self) -> FireDir {
        match self {
            PlayerVariant::One => FireDir::Up,
            PlayerVariant::Two => FireDir::Down,
        }
    }
}

/// Marker component for a fired round.
#[derive(Component)]
pub struct Projectile;

/// The explosion animation counter.
///
/// `frame` counts 0..=`frame_count`; [`ExplosionAnim::advance`] steps it once
/// per frame while `active`.  Completing the sweep deactivates the animation
/// and resets the counter in the same step.
#[derive(Component, Debug)]
pub struct ExplosionAnim {
    pub frame: usize,
    pub frame_count: usize,
    pub active: bool,
}

impl ExplosionAnim {
    pub fn new(frame_count: usize) -> Self {
        Self {
            frame: 0,
            frame_count,
            active: false,
        }
    }

    /// Begin (or restart) the animation from frame 0.
    pub fn restart(&mut self) {
        self.frame = 0;
        self.active = true;
    }

    /// Advance one animation step.
    ///
    /// Returns `true` while the animation is still running (and when idle —
    /// an inactive advance is a no-op), `false` exactly once, on the step
    /// that completes the sweep.  Completion also deactivates the animation
    /// and resets the counter.
    pub fn advance(&mut self) -> bool {
        if !self.active {
            return true;
        }
        self.frame += 1;
        if self.frame == self.frame_count {
            self.active = false;
            self.frame = 0;
            return false;
        }
        true
    }
}

impl Default for ExplosionAnim {
    fn default() -> Self {
        Self::new(EXPLOSION_FRAME_COUNT)
    }
}

// ── Resources ──────────────────────────────────────────────────────────────────

/// Direction flags for one frame of movement input.  Flags combine for
/// diagonal motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirectionMask(u8);

impl DirectionMask {
    pub const NONE: DirectionMask = DirectionMask(0);
    pub const LEFT: DirectionMask = DirectionMask(1 << 0);
    pub const RIGHT: DirectionMask = DirectionMask(1 << 1);
    /// Toward the top of the screen.
    pub const FORWARD: DirectionMask = DirectionMask(1 << 2);
    /// Toward the bottom of the screen.
    pub const BACKWARD: DirectionMask = DirectionMask(1 << 3);

    #[inline]
    pub fn contains(self, flag: DirectionMask) -> bool {
        self.0 & flag.0 != 0
    }

    #[inline]
    pub fn insert(&mut self, flag: DirectionMask) {
        self.0 |= flag.0;
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for DirectionMask {
    type Output = DirectionMask;

    fn bitor(self, rhs: DirectionMask) -> DirectionMask {
        DirectionMask(self.0 | rhs.0)
    }
}

/// The direction mask supplied for the current frame.
///
/// Rebuilt from scratch by `keyboard_to_intent_system` every frame; tests
/// populate it directly and run only the apply system.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct MoveIntent(pub DirectionMask);

/// Frame-counted gate between consecutive shots.
///
/// Range [0, 100]: a shot is permitted only while `frames` is strictly below
/// the ready threshold, and spawning resets it to the full cooldown.  The
/// per-frame tick floors it at 1.  A fresh aircraft starts at 0 — able to
/// fire immediately.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct FireCooldown {
    pub frames: u32,
}
