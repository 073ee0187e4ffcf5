//! Input momentum buffer
//!
//! Acceleration scales with how fast the player is tapping, not whether a
//! key is held: each discrete key-down adds one unit of momentum, and the
//! buffer decays exponentially between taps. Once a full decay window
//! passes with no input the buffer snaps to zero so the boat never creeps
//! forward on stale momentum.

/// Decaying accumulator of rowing-stroke key presses.
#[derive(Debug, Clone)]
pub struct InputMomentum {
    buffer: f32,
    decay_time: f32,
    /// Seconds since the last pulse (or timestamp refresh)
    since_last: f32,
    pulsed_this_tick: bool,
}

impl InputMomentum {
    pub fn new(decay_time: f32) -> Self {
        Self {
            buffer: 0.0,
            decay_time,
            since_last: f32::MAX,
            pulsed_this_tick: false,
        }
    }

    #[inline]
    pub fn buffer(&self) -> f32 {
        self.buffer
    }

    /// Register a discrete key-down. Key repeats while held do not qualify.
    pub fn on_pulse(&mut self) {
        self.buffer += 1.0;
        self.since_last = 0.0;
        self.pulsed_this_tick = true;
    }

    /// Refresh the input timestamp without adding momentum (the turn-both
    /// stroke keeps the buffer alive but contributes no thrust of its own).
    pub fn touch(&mut self) {
        self.since_last = 0.0;
        self.pulsed_this_tick = true;
    }

    /// Advance one tick. Decay only applies on ticks with no input.
    pub fn update(&mut self, dt: f32) {
        if !self.pulsed_this_tick {
            self.since_last += dt;
            if self.since_last > self.decay_time {
                self.buffer = 0.0;
            } else {
                self.buffer *= (-dt / self.decay_time).exp();
            }
        }
        self.pulsed_this_tick = false;
    }

    pub fn reset(&mut self) {
        self.buffer = 0.0;
        self.since_last = f32::MAX;
        self.pulsed_this_tick = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_pulses_accumulate() {
        let mut m = InputMomentum::new(0.25);
        m.on_pulse();
        m.update(DT);
        m.on_pulse();
        m.update(DT);
        // Decay is skipped on ticks that saw a pulse, so this is exactly 2
        assert_eq!(m.buffer(), 2.0);
    }

    #[test]
    fn test_exponential_decay_between_pulses() {
        let mut m = InputMomentum::new(0.25);
        m.on_pulse();
        m.update(DT);

        // Decay for a few quiet ticks, still inside the window
        let mut expected = 1.0f32;
        for _ in 0..10 {
            m.update(DT);
            expected *= (-DT / 0.25).exp();
        }
        assert!((m.buffer() - expected).abs() < 1e-5);
        assert!(m.buffer() > 0.0);
    }

    #[test]
    fn test_snaps_to_zero_after_decay_window() {
        let mut m = InputMomentum::new(0.25);
        m.on_pulse();
        m.update(DT);

        // 0.3 s of silence exceeds the 0.25 s window
        for _ in 0..18 {
            m.update(DT);
        }
        assert_eq!(m.buffer(), 0.0);
    }

    #[test]
    fn test_touch_keeps_buffer_alive_without_growth() {
        let mut m = InputMomentum::new(0.25);
        m.on_pulse();
        m.update(DT);
        let before = m.buffer();

        // Keep touching for well past the decay window
        for _ in 0..60 {
            m.touch();
            m.update(DT);
        }
        // No decay ran (every tick saw input) and no growth either
        assert_eq!(m.buffer(), before);
    }

    #[test]
    fn test_starts_empty_and_stays_empty() {
        let mut m = InputMomentum::new(0.25);
        for _ in 0..120 {
            m.update(DT);
        }
        assert_eq!(m.buffer(), 0.0);
    }
}
