//! Cross River - a top-down river-crossing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (boat physics, collisions, game state)
//! - `tuning`: Data-driven physics balance profiles
//! - `audio`: Collaborator seam for sound playback
//!
//! Rendering and asset loading are external collaborators: the sim exposes a
//! read-only [`sim::RenderFrame`] per tick and emits [`sim::GameEvent`]s, and
//! never depends on what a renderer or audio backend does with them.

pub mod audio;
pub mod sim;
pub mod tuning;

pub use tuning::PhysicsProfile;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation tick rate. Physics constants (per-tick friction,
    /// position integration in units per tick) are tied to this rate.
    pub const TICK_RATE: f32 = 60.0;
    /// Fixed simulation timestep
    pub const SIM_DT: f32 = 1.0 / TICK_RATE;
    /// Frame delta clamp to prevent integration blow-ups on hitches
    pub const MAX_FRAME_DT: f32 = 0.05;

    /// Playfield dimensions
    pub const FIELD_WIDTH: f32 = 1250.0;
    pub const FIELD_HEIGHT: f32 = 650.0;

    /// Boat collision circle radius
    pub const BOAT_RADIUS: f32 = 15.0;

    /// Crash sequence length before respawn
    pub const CRASH_DURATION: f32 = 1.2;

    /// Fade transition speed (alpha units per second, alpha in 0..=255)
    pub const FADE_SPEED: f32 = 500.0;
    /// Peak fade alpha (state transitions fire here)
    pub const FADE_MAX_ALPHA: f32 = 255.0;

    /// How long the level-complete screen is pinned before level 2 starts
    pub const LEVEL_COMPLETE_DWELL: f32 = 2.0;

    /// Momentum buffer below this applies no thrust
    pub const MOMENTUM_EPSILON: f32 = 0.01;
    /// Speed below this snaps velocity to zero
    pub const STOP_EPSILON: f32 = 0.01;
    /// Remaining angular difference below this snaps to the turn target
    pub const ANGLE_EPSILON: f32 = 0.01;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    angle.rem_euclid(360.0)
}

/// Signed shortest angular difference from `from` to `to`, in [-180, 180)
#[inline]
pub fn shortest_arc_degrees(from: f32, to: f32) -> f32 {
    (to - from + 180.0).rem_euclid(360.0) - 180.0
}

/// Forward unit vector for a heading in degrees.
///
/// Heading 0 points up the river (-Y in screen coordinates); positive
/// headings rotate toward +X.
#[inline]
pub fn heading_to_forward(heading_deg: f32) -> Vec2 {
    let r = heading_deg.to_radians();
    Vec2::new(r.sin(), -r.cos())
}
