//! Data-driven physics balance profiles
//!
//! The game shipped through several hand-tuned iterations of the same boat
//! physics; each iteration survives here as a named profile on one shared
//! code path. Profiles can also be loaded from JSON for balance work
//! without a recompile.
//!
//! Friction constants are per-tick multipliers at the fixed 60 Hz rate,
//! not per-second decays. The feel of the boat depends on that.

use serde::{Deserialize, Serialize};

/// Tuning constants for the boat physics integrator and rotation controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicsProfile {
    /// Hard cap on velocity magnitude (units per tick)
    pub max_speed: f32,
    /// Rotation rate while a discrete turn is in flight (degrees per second)
    pub rotation_speed: f32,
    /// Heading change per turn key click (degrees)
    pub rotation_step: f32,
    /// Thrust applied whenever the momentum buffer is non-empty
    pub base_accel: f32,
    /// Extra thrust per unit of buffered momentum
    pub accel_per_press: f32,
    /// Per-tick velocity multiplier when moving dead ahead
    pub base_friction: f32,
    /// Per-tick velocity multiplier when drifting fully sideways
    pub sideways_friction: f32,
    /// Global scale on the sideways friction blend (1.0 = full effect)
    pub sideways_drift_mult: f32,
    /// Thrust scale while exactly one turn key is held
    pub single_key_accel_mult: f32,
    /// Extra drift-blend scale while exactly one turn key is held
    pub single_key_sideways_mult: f32,
    /// Seconds without a pulse before the momentum buffer snaps to zero
    pub momentum_decay_time: f32,
}

impl Default for PhysicsProfile {
    fn default() -> Self {
        Self::classic()
    }
}

impl PhysicsProfile {
    /// The shipped tuning: slippery water, fast snappy turns.
    pub fn classic() -> Self {
        Self {
            max_speed: 10.0,
            rotation_speed: 450.0,
            rotation_step: 25.0,
            base_accel: 0.6,
            accel_per_press: 0.35,
            base_friction: 0.99,
            sideways_friction: 0.985,
            sideways_drift_mult: 0.75,
            single_key_accel_mult: 0.8,
            single_key_sideways_mult: 0.55,
            momentum_decay_time: 0.25,
        }
    }

    /// Same water as `classic` but a much gentler turn animation.
    pub fn gentle_turn() -> Self {
        Self {
            rotation_speed: 140.0,
            ..Self::classic()
        }
    }

    /// The first playable iteration: faster boat, grippier water, no
    /// drift or single-key penalties (expressed as 1.0 multipliers).
    pub fn early() -> Self {
        Self {
            max_speed: 12.0,
            rotation_speed: 450.0,
            rotation_step: 25.0,
            base_accel: 0.8,
            accel_per_press: 0.5,
            base_friction: 0.98,
            sideways_friction: 0.92,
            sideways_drift_mult: 1.0,
            single_key_accel_mult: 1.0,
            single_key_sideways_mult: 1.0,
            momentum_decay_time: 0.4,
        }
    }

    /// Look up a built-in profile by name.
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "classic" => Some(Self::classic()),
            "gentle_turn" => Some(Self::gentle_turn()),
            "early" => Some(Self::early()),
            _ => None,
        }
    }

    /// Parse a profile from JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
