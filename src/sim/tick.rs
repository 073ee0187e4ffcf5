//! Simulation tick
//!
//! `tick` advances the whole game by one frame. It takes edge-triggered
//! input transitions rather than raw key state so the discrete-stroke
//! mechanics (one press, one stroke) are unambiguous at any frame rate.

use glam::Vec2;

use super::collision::first_hit;
use super::level::LevelId;
use super::physics;
use super::state::{GameEvent, GamePhase, GameState, LevelState, OarSide, PendingAction};
use crate::consts::*;

/// Press/release transitions for one key over one tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyTransition {
    pub pressed: bool,
    pub released: bool,
}

impl KeyTransition {
    pub fn press() -> Self {
        Self {
            pressed: true,
            released: false,
        }
    }

    pub fn release() -> Self {
        Self {
            pressed: false,
            released: true,
        }
    }
}

/// Input sampled for one tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Left oar stroke / counter-clockwise turn key
    pub left: KeyTransition,
    /// Right oar stroke / clockwise turn key
    pub right: KeyTransition,
    /// Both-oars stroke key (no net turn impulse)
    pub both: KeyTransition,
    /// Confirm / start key
    pub start: bool,
    /// Back out of the current screen
    pub escape: bool,
}

/// Advance the game by `dt` seconds.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    // A hitched frame must not teleport the boat through an obstacle
    let dt = dt.min(MAX_FRAME_DT);

    state.events.clear();
    state.time_ticks += 1;

    if let Some(action) = state.fade.update(dt) {
        state.apply(action);
    }

    match state.phase {
        GamePhase::Menu => tick_menu(state, input),
        GamePhase::Playing(id) => tick_playing(state, input, id, dt),
        GamePhase::LevelComplete => tick_level_complete(state, input, dt),
        GamePhase::LevelWin => tick_level_win(state, input),
    }
}

fn tick_menu(state: &mut GameState, input: &TickInput) {
    if input.escape {
        state.quit_requested = true;
        return;
    }
    if input.start {
        state.fade.request(PendingAction::StartLevel(LevelId::One));
    }
}

fn tick_level_complete(state: &mut GameState, input: &TickInput, dt: f32) {
    if input.escape {
        state.fade.request(PendingAction::ReturnToMenu);
        return;
    }
    state.complete_timer += dt;
    if state.complete_timer >= LEVEL_COMPLETE_DWELL {
        state.fade.request(PendingAction::StartLevel(LevelId::Two));
    }
}

fn tick_level_win(state: &mut GameState, input: &TickInput) {
    if input.start || input.escape {
        state.fade.request(PendingAction::ReturnToMenu);
    }
}

fn tick_playing(state: &mut GameState, input: &TickInput, id: LevelId, dt: f32) {
    if input.escape {
        state.fade.request(PendingAction::ReturnToMenu);
    }

    let Some(level) = state.level.as_mut() else {
        return;
    };

    // Running out of time retries the level from scratch
    if level.timer.tick(dt) {
        log::info!("level {} timer expired, restarting", id.number());
        level.restart(&state.profile, state.seed);
    }

    if level.crash.update(dt) {
        level.respawn_boat();
    }

    apply_steering(level, input, state.profile.rotation_step, &mut state.events);

    level.boat.heading = level
        .rotation
        .advance(level.boat.heading, state.profile.rotation_speed, dt);

    level.momentum.update(dt);

    // Wind and current push regardless of rowing
    let mut external = Vec2::ZERO;
    if let Some(wind) = level.wind.as_mut() {
        if wind.update(dt, &mut level.rng) {
            state.events.push(GameEvent::WindGust);
        }
        external += wind.force();
    }
    if let Some(current) = level.config.current.as_ref() {
        external += current.force(level.boat.pos.x);
    }

    physics::integrate(
        &mut level.boat,
        level.momentum.buffer(),
        level.held.single_turn_key(),
        external,
        &state.profile,
        dt,
    );

    if !level.crash.active() {
        if let Some(idx) = first_hit(level.boat.pos, level.boat.radius, level.obstacles()) {
            log::debug!("boat hit obstacle {idx} at {:?}", level.boat.pos);
            level.crash.trigger(level.boat.pos, level.boat.heading);
            level.boat.vel = Vec2::ZERO;
            state.events.push(GameEvent::Crash);
        }
    }

    // Keep the boat on the field
    let r = level.boat.radius;
    level.boat.pos.x = level.boat.pos.x.clamp(r, FIELD_WIDTH - r);
    level.boat.pos.y = level.boat.pos.y.clamp(0.0, FIELD_HEIGHT);

    // Crossing the finish line mid-crash does not count
    if level.boat.pos.y < level.config.finish_y && !level.crash.active() {
        let remaining = level.timer.remaining();
        let action = match id {
            LevelId::One => PendingAction::LevelComplete,
            LevelId::Two => PendingAction::LevelWin,
        };
        if state.fade.request(action) {
            state.win_time_remaining = remaining;
        }
    }
}

/// Turn the tick's key transitions into strokes and turn commands.
///
/// Releases always land so the held flags cannot wedge, but new strokes are
/// swallowed while the crash sequence is running.
fn apply_steering(
    level: &mut LevelState,
    input: &TickInput,
    step_degrees: f32,
    events: &mut Vec<GameEvent>,
) {
    use super::rotation::TurnDirection;

    if input.left.released {
        level.held.left = false;
    }
    if input.right.released {
        level.held.right = false;
    }
    if input.both.released {
        level.held.both = false;
    }

    if level.crash.active() {
        return;
    }

    if input.left.pressed {
        if !level.held.left {
            level.held.left = true;
            level
                .rotation
                .begin_turn(level.boat.heading, step_degrees, TurnDirection::Positive);
            events.push(GameEvent::PaddleStroke(OarSide::Left));
        }
        level.momentum.on_pulse();
    }

    if input.right.pressed {
        if !level.held.right {
            level.held.right = true;
            level
                .rotation
                .begin_turn(level.boat.heading, step_degrees, TurnDirection::Negative);
            events.push(GameEvent::PaddleStroke(OarSide::Right));
        }
        level.momentum.on_pulse();
    }

    // Both oars at once: strokes and a (cancellable) positive nudge, but no
    // momentum gain, only a decay-timer refresh
    if input.both.pressed {
        if !level.held.both {
            level.held.both = true;
            level
                .rotation
                .begin_turn(level.boat.heading, step_degrees, TurnDirection::Positive);
            events.push(GameEvent::PaddleStroke(OarSide::Both));
        }
        level.momentum.touch();
    }
}
