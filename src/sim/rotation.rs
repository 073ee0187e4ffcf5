//! Discrete-click rotation controller
//!
//! Each turn key press commits the boat to a fixed-size heading change that
//! then animates in over a few ticks. Pressing the opposite key mid-turn
//! cancels the turn: the target snaps back to the start angle and the boat
//! animates back rather than teleporting.

use crate::consts::ANGLE_EPSILON;
use crate::{normalize_degrees, shortest_arc_degrees};

/// Turn direction for a discrete rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnDirection {
    /// Heading increases (+step degrees)
    Positive,
    /// Heading decreases (-step degrees)
    Negative,
}

impl TurnDirection {
    #[inline]
    fn sign(self) -> f32 {
        match self {
            TurnDirection::Positive => 1.0,
            TurnDirection::Negative => -1.0,
        }
    }
}

/// An in-flight discrete turn. At most one is active per boat.
#[derive(Debug, Clone, Default)]
pub struct RotationState {
    rotating: bool,
    start_angle: f32,
    target_angle: f32,
    /// None while animating a cancelled turn back to its start angle
    direction: Option<TurnDirection>,
}

impl RotationState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn rotating(&self) -> bool {
        self.rotating
    }

    #[inline]
    pub fn target_angle(&self) -> f32 {
        self.target_angle
    }

    /// Handle a turn key press.
    ///
    /// Starts a new turn when idle. If a turn in the opposite direction is
    /// in flight, collapses it back to its start angle. A press in the same
    /// direction as the active turn does nothing here (it still pulses the
    /// momentum buffer at the call site).
    pub fn begin_turn(&mut self, current_angle: f32, step_degrees: f32, direction: TurnDirection) {
        if !self.rotating {
            self.start_angle = current_angle;
            self.target_angle = normalize_degrees(current_angle + direction.sign() * step_degrees);
            self.direction = Some(direction);
            self.rotating = true;
        } else if self.direction.is_some_and(|d| d != direction) {
            self.target_angle = normalize_degrees(self.start_angle);
            self.direction = None;
        }
    }

    /// Step `angle` toward the turn target, returning the new heading.
    ///
    /// Moves at most `rotation_speed * dt` degrees along the shortest arc
    /// and snaps exactly onto the target once within epsilon. The returned
    /// heading is always normalized to [0, 360).
    pub fn advance(&mut self, angle: f32, rotation_speed: f32, dt: f32) -> f32 {
        let mut angle = angle;
        if self.rotating {
            let diff = shortest_arc_degrees(angle, self.target_angle);
            let max_step = rotation_speed * dt;
            angle += diff.clamp(-max_step, max_step);

            let remaining = shortest_arc_degrees(angle, self.target_angle);
            if remaining.abs() < ANGLE_EPSILON {
                angle = normalize_degrees(self.target_angle);
                self.rotating = false;
                self.direction = None;
            }
        }
        normalize_degrees(angle)
    }

    /// Abort any in-flight turn without moving the heading (crash respawn).
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: f32 = 25.0;
    const SPEED: f32 = 450.0;
    const DT: f32 = 1.0 / 60.0;

    fn settle(rot: &mut RotationState, mut angle: f32) -> f32 {
        for _ in 0..600 {
            angle = rot.advance(angle, SPEED, DT);
            if !rot.rotating() {
                break;
            }
        }
        angle
    }

    #[test]
    fn test_turn_converges_to_target() {
        let mut rot = RotationState::new();
        rot.begin_turn(0.0, STEP, TurnDirection::Positive);
        assert!(rot.rotating());

        let angle = settle(&mut rot, 0.0);
        assert!(!rot.rotating());
        assert!((angle - 25.0).abs() < ANGLE_EPSILON);
    }

    #[test]
    fn test_negative_turn_wraps_normalized() {
        let mut rot = RotationState::new();
        rot.begin_turn(10.0, STEP, TurnDirection::Negative);
        let angle = settle(&mut rot, 10.0);
        assert!((angle - 345.0).abs() < ANGLE_EPSILON);
        assert!((0.0..360.0).contains(&angle));
    }

    #[test]
    fn test_opposite_key_cancels_back_to_start() {
        let mut rot = RotationState::new();
        rot.begin_turn(0.0, STEP, TurnDirection::Positive);

        // Advance partway, then press the opposite key
        let mut angle = rot.advance(0.0, SPEED, DT);
        assert!(angle > 0.0);
        rot.begin_turn(angle, STEP, TurnDirection::Negative);

        // Still rotating, but now back toward the original start angle
        assert!(rot.rotating());
        angle = settle(&mut rot, angle);
        assert!(!rot.rotating());
        assert!(angle.abs() < ANGLE_EPSILON || (angle - 360.0).abs() < ANGLE_EPSILON);
    }

    #[test]
    fn test_same_direction_press_does_not_retarget() {
        let mut rot = RotationState::new();
        rot.begin_turn(0.0, STEP, TurnDirection::Positive);
        let target = rot.target_angle();

        let angle = rot.advance(0.0, SPEED, DT);
        rot.begin_turn(angle, STEP, TurnDirection::Positive);
        assert_eq!(rot.target_angle(), target);
    }

    #[test]
    fn test_second_press_after_cancel_is_ignored_until_settled() {
        let mut rot = RotationState::new();
        rot.begin_turn(0.0, STEP, TurnDirection::Positive);
        let angle = rot.advance(0.0, SPEED, DT);
        rot.begin_turn(angle, STEP, TurnDirection::Negative);

        // While animating back (direction = None) further presses in either
        // direction do not start a new turn
        let target = rot.target_angle();
        rot.begin_turn(angle, STEP, TurnDirection::Negative);
        assert_eq!(rot.target_angle(), target);
    }

    #[test]
    fn test_repeated_full_turns_stay_normalized() {
        let mut rot = RotationState::new();
        let mut angle = 0.0;
        // 20 clicks of +25 degrees = 500 degrees of total rotation
        for _ in 0..20 {
            rot.begin_turn(angle, STEP, TurnDirection::Positive);
            angle = settle(&mut rot, angle);
            assert!(!rot.rotating());
            assert!((0.0..360.0).contains(&angle));
        }
        assert!((angle - 140.0).abs() < 0.1);
    }
}
