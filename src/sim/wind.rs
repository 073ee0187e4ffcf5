//! Level-2 hazards: wind gusts and the river current
//!
//! Wind arrives in randomly scheduled sideways gusts with a sine-eased
//! envelope. The current is a constant downstream push that is strongest in
//! the middle of the river and weakest near the banks. Both inject into the
//! boat's velocity as external forces, independent of the momentum buffer.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Seconds of calm between gusts
const GUST_GAP_RANGE: std::ops::Range<f32> = 4.0..7.0;
/// Gust length
const GUST_DURATION_RANGE: std::ops::Range<f32> = 1.5..3.0;
/// Gust peak strength
const GUST_STRENGTH_RANGE: std::ops::Range<f32> = 0.8..1.5;

/// Periodic sideways wind gusts.
#[derive(Debug, Clone)]
pub struct WindSystem {
    active: bool,
    /// Calm-phase clock
    timer: f32,
    next_gust_in: f32,
    gust_timer: f32,
    gust_duration: f32,
    /// -1 pushes left, +1 pushes right
    direction: f32,
    strength: f32,
}

impl WindSystem {
    pub fn new(rng: &mut Pcg32) -> Self {
        Self {
            active: false,
            timer: 0.0,
            next_gust_in: rng.random_range(GUST_GAP_RANGE),
            gust_timer: 0.0,
            gust_duration: 0.0,
            direction: 0.0,
            strength: 0.0,
        }
    }

    #[inline]
    pub fn active(&self) -> bool {
        self.active
    }

    /// Advance the gust schedule. Returns true on the tick a gust starts.
    pub fn update(&mut self, dt: f32, rng: &mut Pcg32) -> bool {
        if self.active {
            self.gust_timer += dt;
            if self.gust_timer >= self.gust_duration {
                self.active = false;
                self.next_gust_in = rng.random_range(GUST_GAP_RANGE);
                self.timer = 0.0;
            }
            false
        } else {
            self.timer += dt;
            if self.timer >= self.next_gust_in {
                self.active = true;
                self.gust_timer = 0.0;
                self.gust_duration = rng.random_range(GUST_DURATION_RANGE);
                self.direction = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
                self.strength = rng.random_range(GUST_STRENGTH_RANGE);
                log::debug!(
                    "wind gust: dir={} strength={:.2} duration={:.2}s",
                    self.direction,
                    self.strength,
                    self.gust_duration
                );
                true
            } else {
                false
            }
        }
    }

    /// Sideways gust force right now. Sine-eased: ramps up, peaks mid-gust,
    /// dies off.
    pub fn force(&self) -> Vec2 {
        if !self.active {
            return Vec2::ZERO;
        }
        let progress = self.gust_timer / self.gust_duration;
        let ease = (progress * std::f32::consts::PI).sin();
        Vec2::new(self.direction * self.strength * ease, 0.0)
    }
}

/// Constant downstream push, strongest at the middle of the river.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiverCurrent {
    pub strength: f32,
    /// Water spans this x range; the banks outside it see no current
    pub river_left: f32,
    pub river_right: f32,
}

impl RiverCurrent {
    /// Downstream (+y) force at the given boat x position.
    ///
    /// Full strength at the center line, falling linearly to 30% at the
    /// banks. A degenerate river (zero width) produces no current.
    pub fn force(&self, boat_x: f32) -> Vec2 {
        let width = self.river_right - self.river_left;
        if width <= 0.0 {
            return Vec2::ZERO;
        }
        let center = (self.river_left + self.river_right) / 2.0;
        let dist = ((boat_x - center).abs() / (width / 2.0)).min(1.0);
        let factor = 1.0 - 0.7 * dist;
        Vec2::new(0.0, self.strength * factor)
    }
}
