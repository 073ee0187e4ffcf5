//! Game state and core simulation types
//!
//! Everything the tick function mutates lives here. Each level owns its
//! whole state bundle; nothing is shared across levels or kept in globals.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Rect;
use super::level::{LevelConfig, LevelId};
use super::momentum::InputMomentum;
use super::physics::Boat;
use super::rotation::RotationState;
use super::wind::{RiverCurrent, WindSystem};
use crate::consts::*;
use crate::tuning::PhysicsProfile;

/// Top-level game phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Start menu
    Menu,
    /// Steering the boat in a level
    Playing(LevelId),
    /// Level 1 cleared, pinned for a moment before level 2
    LevelComplete,
    /// Level 2 cleared, run over
    LevelWin,
}

/// A deferred phase change, fired exactly once at the fade's darkest point.
///
/// Transitions are values consumed by the state machine rather than
/// captured callbacks, so nothing can fire twice or out of order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    StartLevel(LevelId),
    LevelComplete,
    LevelWin,
    ReturnToMenu,
}

/// Which oar(s) a rowing stroke used
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OarSide {
    Left,
    Right,
    Both,
}

/// Discrete events emitted during a tick for the audio/render collaborators.
///
/// The core never depends on whether anyone consumes these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A rowing stroke landed
    PaddleStroke(OarSide),
    /// The boat hit an obstacle
    Crash,
    /// A wind gust started
    WindGust,
}

/// Fade-to-black gate over phase transitions.
///
/// Alpha climbs to its peak, the pending action fires once, then alpha
/// falls back to zero. Only one fade runs at a time; requests made while
/// one is active are dropped, not queued.
#[derive(Debug, Clone)]
pub struct FadeGate {
    active: bool,
    alpha: f32,
    rising: bool,
    fired: bool,
    action: Option<PendingAction>,
}

impl Default for FadeGate {
    fn default() -> Self {
        Self {
            active: false,
            alpha: 0.0,
            rising: true,
            fired: false,
            action: None,
        }
    }
}

impl FadeGate {
    #[inline]
    pub fn active(&self) -> bool {
        self.active
    }

    /// Current overlay alpha in 0..=255, for the renderer.
    #[inline]
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Request a gated transition. Dropped if a fade is already running.
    pub fn request(&mut self, action: PendingAction) -> bool {
        if self.active {
            return false;
        }
        self.active = true;
        self.alpha = 0.0;
        self.rising = true;
        self.fired = false;
        self.action = Some(action);
        true
    }

    /// Advance the fade. Returns the pending action on the tick the screen
    /// reaches full darkness; the fired flag guards against double firing
    /// while alpha is pinned at the peak.
    pub fn update(&mut self, dt: f32) -> Option<PendingAction> {
        if !self.active {
            return None;
        }
        if self.rising {
            self.alpha += FADE_SPEED * dt;
            if self.alpha >= FADE_MAX_ALPHA {
                self.alpha = FADE_MAX_ALPHA;
                self.rising = false;
                if !self.fired {
                    self.fired = true;
                    return self.action.take();
                }
            }
        } else {
            self.alpha -= FADE_SPEED * dt;
            if self.alpha <= 0.0 {
                self.alpha = 0.0;
                self.active = false;
            }
        }
        None
    }
}

/// Crash/respawn sequence: Idle -> Crashing -> Idle.
///
/// While crashing, steering input is ignored and the boat is hidden; when
/// the duration elapses the boat respawns (exactly once).
#[derive(Debug, Clone, Default)]
pub struct CrashSequence {
    active: bool,
    elapsed: f32,
    /// Where the boat died, for the renderer's debris
    pub crash_pos: Vec2,
    pub crash_heading: f32,
}

impl CrashSequence {
    #[inline]
    pub fn active(&self) -> bool {
        self.active
    }

    /// Start the sequence. No-op while one is already running.
    pub fn trigger(&mut self, pos: Vec2, heading: f32) {
        if self.active {
            return;
        }
        self.active = true;
        self.elapsed = 0.0;
        self.crash_pos = pos;
        self.crash_heading = heading;
    }

    /// Advance the sequence. Returns true on the single tick it completes.
    pub fn update(&mut self, dt: f32) -> bool {
        if !self.active {
            return false;
        }
        self.elapsed += dt;
        if self.elapsed >= CRASH_DURATION {
            self.active = false;
            true
        } else {
            false
        }
    }
}

/// Per-level countdown. Reaching zero retries the level, it is not a loss.
#[derive(Debug, Clone)]
pub struct Countdown {
    remaining: f32,
    full: f32,
}

impl Countdown {
    pub fn new(duration: f32) -> Self {
        Self {
            remaining: duration,
            full: duration,
        }
    }

    #[inline]
    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    /// Tick the countdown. Returns true on expiry; remaining never goes
    /// negative.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.remaining = 0.0;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.remaining = self.full;
    }
}

/// Which steering keys are currently held (tracked from press/release
/// transitions in the input).
#[derive(Debug, Clone, Copy, Default)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
    pub both: bool,
}

impl HeldKeys {
    /// Exactly one of the two turn keys is down: asymmetric stroke.
    #[inline]
    pub fn single_turn_key(&self) -> bool {
        self.left != self.right
    }
}

/// The full state bundle for one level attempt.
///
/// Constructed fresh on level entry and again on countdown expiry; the
/// crash respawn only resets the boat within the bundle.
#[derive(Debug)]
pub struct LevelState {
    pub config: LevelConfig,
    pub boat: Boat,
    pub timer: Countdown,
    pub rotation: RotationState,
    pub momentum: InputMomentum,
    pub crash: CrashSequence,
    pub held: HeldKeys,
    pub wind: Option<WindSystem>,
    pub rng: Pcg32,
    /// How many times the countdown has expired on this level
    pub attempt: u32,
}

impl LevelState {
    pub fn new(config: LevelConfig, profile: &PhysicsProfile, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed ^ config.id.number() as u64);
        let wind = config.wind.then(|| WindSystem::new(&mut rng));
        let spawn = config.spawn_point();
        Self {
            boat: Boat::new(spawn, BOAT_RADIUS),
            timer: Countdown::new(config.duration),
            rotation: RotationState::new(),
            momentum: InputMomentum::new(profile.momentum_decay_time),
            crash: CrashSequence::default(),
            held: HeldKeys::default(),
            wind,
            rng,
            config,
            attempt: 0,
        }
    }

    /// Rebuild the level from scratch after the countdown runs out.
    ///
    /// Keys the player is still physically holding stay held across the
    /// restart, and the attempt counter is mixed into the reseed so each
    /// retry gets its own wind schedule.
    pub fn restart(&mut self, profile: &PhysicsProfile, seed: u64) {
        let attempt = self.attempt + 1;
        let held = self.held;
        *self = Self::new(
            self.config.clone(),
            profile,
            seed ^ ((attempt as u64) << 32),
        );
        self.attempt = attempt;
        self.held = held;
    }

    #[inline]
    pub fn obstacles(&self) -> &[Rect] {
        &self.config.obstacles
    }

    #[inline]
    pub fn current(&self) -> Option<&RiverCurrent> {
        self.config.current.as_ref()
    }

    /// Put the boat back at the spawn point after a crash. The countdown
    /// keeps running; only the boat and its in-flight turn reset.
    pub fn respawn_boat(&mut self) {
        self.boat.respawn(self.config.spawn_point());
        self.rotation.clear();
        log::debug!("boat respawned at {:?}", self.boat.pos);
    }
}

/// Complete game state.
pub struct GameState {
    /// Run seed (wind schedules derive from it)
    pub seed: u64,
    /// Physics tuning in effect
    pub profile: PhysicsProfile,
    /// Current phase
    pub phase: GamePhase,
    /// The active level bundle; `Some` only while in a Playing phase
    pub level: Option<LevelState>,
    /// Fade gate over phase transitions
    pub fade: FadeGate,
    /// Time pinned on the level-complete screen so far
    pub complete_timer: f32,
    /// Countdown remaining at the moment of winning, for the win screen
    pub win_time_remaining: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events emitted this tick (cleared at the start of every tick)
    pub events: Vec<GameEvent>,
    /// Set when the player quits from the menu; the outer loop exits
    pub quit_requested: bool,
}

impl GameState {
    pub fn new(seed: u64, profile: PhysicsProfile) -> Self {
        Self {
            seed,
            profile,
            phase: GamePhase::Menu,
            level: None,
            fade: FadeGate::default(),
            complete_timer: 0.0,
            win_time_remaining: 0.0,
            time_ticks: 0,
            events: Vec::new(),
            quit_requested: false,
        }
    }

    /// Apply a pending action at the fade's darkest point.
    pub fn apply(&mut self, action: PendingAction) {
        match action {
            PendingAction::StartLevel(id) => {
                log::info!("entering level {}", id.number());
                let config = LevelConfig::for_id(id);
                self.level = Some(LevelState::new(config, &self.profile, self.seed));
                self.phase = GamePhase::Playing(id);
            }
            PendingAction::LevelComplete => {
                log::info!("level 1 complete");
                self.level = None;
                self.complete_timer = 0.0;
                self.phase = GamePhase::LevelComplete;
            }
            PendingAction::LevelWin => {
                log::info!(
                    "level 2 won with {:.1}s to spare",
                    self.win_time_remaining
                );
                self.level = None;
                self.phase = GamePhase::LevelWin;
            }
            PendingAction::ReturnToMenu => {
                log::info!("returning to menu");
                self.level = None;
                self.phase = GamePhase::Menu;
            }
        }
    }

    /// Read-only snapshot for the renderer.
    pub fn frame(&self) -> RenderFrame {
        let level = self.level.as_ref();
        RenderFrame {
            phase: self.phase,
            boat_pos: level.map(|l| l.boat.pos),
            boat_heading: level.map(|l| l.boat.heading).unwrap_or(0.0),
            boat_speed: level.map(|l| l.boat.speed()).unwrap_or(0.0),
            rotating: level.is_some_and(|l| l.rotation.rotating()),
            crashing: level.is_some_and(|l| l.crash.active()),
            timer_remaining: level.map(|l| l.timer.remaining()).unwrap_or(0.0),
            wind_force: level
                .and_then(|l| l.wind.as_ref())
                .map(|w| w.force())
                .unwrap_or(Vec2::ZERO),
            fade_alpha: self.fade.alpha(),
            win_time_remaining: self.win_time_remaining,
        }
    }
}

/// What a renderer needs to draw one frame. Strictly read-only.
#[derive(Debug, Clone, Copy)]
pub struct RenderFrame {
    pub phase: GamePhase,
    /// `None` outside of play (menu and end screens draw their own boat)
    pub boat_pos: Option<Vec2>,
    pub boat_heading: f32,
    pub boat_speed: f32,
    pub rotating: bool,
    pub crashing: bool,
    pub timer_remaining: f32,
    pub wind_force: Vec2,
    pub fade_alpha: f32,
    pub win_time_remaining: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = SIM_DT;

    #[test]
    fn test_fade_fires_action_once_at_peak() {
        let mut fade = FadeGate::default();
        assert!(fade.request(PendingAction::ReturnToMenu));

        let mut fired = Vec::new();
        // 255 alpha at 500/s peaks at ~0.51 s, so the round trip needs ~1.02 s
        for _ in 0..120 {
            if let Some(action) = fade.update(DT) {
                fired.push(action);
            }
        }
        assert_eq!(fired, vec![PendingAction::ReturnToMenu]);
        assert!(!fade.active());
        assert_eq!(fade.alpha(), 0.0);
    }

    #[test]
    fn test_fade_request_dropped_while_active() {
        let mut fade = FadeGate::default();
        assert!(fade.request(PendingAction::ReturnToMenu));
        // Second request while fading: dropped, not queued
        assert!(!fade.request(PendingAction::LevelWin));

        let mut fired = Vec::new();
        for _ in 0..120 {
            if let Some(action) = fade.update(DT) {
                fired.push(action);
            }
        }
        assert_eq!(fired, vec![PendingAction::ReturnToMenu]);
    }

    #[test]
    fn test_crash_trigger_noop_while_crashing() {
        let mut crash = CrashSequence::default();
        crash.trigger(Vec2::new(100.0, 100.0), 45.0);
        assert!(crash.active());
        crash.update(DT);

        // Second trigger does not restart the timer or move the crash site
        crash.trigger(Vec2::new(999.0, 999.0), 0.0);
        assert_eq!(crash.crash_pos, Vec2::new(100.0, 100.0));

        // Completes once after the fixed duration from the FIRST trigger
        let mut completions = 0;
        for _ in 0..120 {
            if crash.update(DT) {
                completions += 1;
            }
        }
        assert_eq!(completions, 1);
        assert!(!crash.active());
    }

    #[test]
    fn test_countdown_clamps_at_zero() {
        let mut timer = Countdown::new(0.1);
        assert!(!timer.tick(0.05));
        assert!(timer.tick(0.2));
        assert_eq!(timer.remaining(), 0.0);
        timer.reset();
        assert_eq!(timer.remaining(), 0.1);
    }

    #[test]
    fn test_level_bundles_are_independent() {
        let profile = PhysicsProfile::classic();
        let mut a = LevelState::new(LevelConfig::level_one(), &profile, 1);
        let b = LevelState::new(LevelConfig::level_one(), &profile, 1);

        a.boat.pos.x += 100.0;
        a.momentum.on_pulse();
        assert_ne!(a.boat.pos, b.boat.pos);
        assert_eq!(b.momentum.buffer(), 0.0);
    }

    #[test]
    fn test_restart_keeps_held_keys_and_reseeds() {
        use rand::Rng;

        let profile = PhysicsProfile::classic();
        let mut fresh = LevelState::new(LevelConfig::level_two(), &profile, 9);
        let mut level = LevelState::new(LevelConfig::level_two(), &profile, 9);

        level.held.left = true;
        level.timer.tick(44.0);
        level.momentum.on_pulse();
        level.restart(&profile, 9);

        assert_eq!(level.attempt, 1);
        assert!(level.held.left);
        assert_eq!(level.timer.remaining(), 45.0);
        assert_eq!(level.momentum.buffer(), 0.0);
        // The retry rolls a new wind schedule instead of replaying attempt 0
        assert_ne!(level.rng.random::<u64>(), fresh.rng.random::<u64>());
    }

    #[test]
    fn test_respawn_resets_boat_not_timer() {
        let profile = PhysicsProfile::classic();
        let mut level = LevelState::new(LevelConfig::level_one(), &profile, 1);
        level.timer.tick(10.0);
        let remaining = level.timer.remaining();

        level.boat.pos = Vec2::new(50.0, 50.0);
        level.boat.vel = Vec2::new(3.0, 3.0);
        level.boat.heading = 90.0;
        level.respawn_boat();

        assert_eq!(level.boat.pos, level.config.spawn_point());
        assert_eq!(level.boat.vel, Vec2::ZERO);
        assert_eq!(level.boat.heading, 0.0);
        assert!(!level.rotation.rotating());
        assert_eq!(level.timer.remaining(), remaining);
    }
}
