//! Audio cue dispatch
//!
//! The simulation only emits [`GameEvent`]s; this module maps them onto
//! sound cues and hands them to whatever backend is plugged in. Playback
//! is fire-and-forget and a missing backend is never an error.

use crate::sim::{GameEvent, OarSide};

/// Sound cue types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// An oar stroke hits the water; the side lets a backend alternate
    /// between stroke samples
    Paddle(OarSide),
    /// The boat smashes into an obstacle
    Crash,
    /// A wind gust picks up
    Wind,
}

impl SoundCue {
    pub fn for_event(event: GameEvent) -> Self {
        match event {
            GameEvent::PaddleStroke(side) => SoundCue::Paddle(side),
            GameEvent::Crash => SoundCue::Crash,
            GameEvent::WindGust => SoundCue::Wind,
        }
    }

    /// Relative playback volume for the cue (0.0 - 1.0)
    pub fn volume(self) -> f32 {
        match self {
            SoundCue::Paddle(_) => 1.0,
            SoundCue::Crash => 1.0,
            SoundCue::Wind => 0.5,
        }
    }
}

/// Playback backend seam. The game core stays buildable headless.
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue, volume: f32);
}

/// Backend that drops every cue. Used headless and in tests.
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _cue: SoundCue, _volume: f32) {}
}

/// Routes game events from one tick to the backend
pub struct AudioManager<S> {
    sink: S,
    muted: bool,
}

impl<S: AudioSink> AudioManager<S> {
    pub fn new(sink: S) -> Self {
        Self { sink, muted: false }
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn dispatch(&mut self, events: &[GameEvent]) {
        if self.muted {
            return;
        }
        for &event in events {
            let cue = SoundCue::for_event(event);
            self.sink.play(cue, cue.volume());
        }
    }
}
