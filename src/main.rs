//! Cross River entry point
//!
//! Headless smoke run: drives the simulation through a scripted level 1
//! attempt at the fixed tick rate and logs what happens. Renderers hook in
//! through [`cross_river::sim::RenderFrame`] instead of this loop.

use cross_river::audio::{AudioManager, NullAudio};
use cross_river::consts::*;
use cross_river::sim::{tick, GamePhase, GameState, KeyTransition, TickInput};
use cross_river::PhysicsProfile;

fn main() {
    env_logger::init();
    log::info!("Cross River starting (headless smoke run)");

    let profile = match std::env::var("CROSS_RIVER_PROFILE") {
        Ok(name) => PhysicsProfile::by_name(&name).unwrap_or_else(|| {
            log::warn!("unknown tuning profile {name:?}, using classic");
            PhysicsProfile::classic()
        }),
        Err(_) => PhysicsProfile::classic(),
    };

    let mut state = GameState::new(0xC0FFEE, profile);
    let mut audio = AudioManager::new(NullAudio);

    let mut last_phase = state.phase;
    for frame in 0..(120 * TICK_RATE as u64) {
        let input = scripted_input(frame, &state);
        tick(&mut state, &input, SIM_DT);
        audio.dispatch(&state.events);

        if state.phase != last_phase {
            log::info!("tick {frame}: phase {:?} -> {:?}", last_phase, state.phase);
            last_phase = state.phase;
        }
        if state.quit_requested {
            break;
        }

        if frame % (5 * TICK_RATE as u64) == 0 {
            let snap = state.frame();
            if let Some(pos) = snap.boat_pos {
                log::info!(
                    "tick {frame}: boat at ({:.0}, {:.0}) heading {:.0} speed {:.2} timer {:.1}s",
                    pos.x,
                    pos.y,
                    snap.boat_heading,
                    snap.boat_speed,
                    snap.timer_remaining
                );
            }
        }
    }

    log::info!("smoke run finished in phase {:?}", state.phase);
}

/// Scripted pilot: start the game, then alternate oar strokes to row
/// upriver, back out to the menu near the end, and quit.
fn scripted_input(frame: u64, state: &GameState) -> TickInput {
    let mut input = TickInput::default();
    match state.phase {
        GamePhase::Menu => {
            if frame > 100 * TICK_RATE as u64 {
                input.escape = true;
            } else {
                input.start = true;
            }
        }
        GamePhase::Playing(_) => {
            // A stroke every third of a second, alternating sides so the
            // boat tracks roughly straight
            let period = TICK_RATE as u64 / 3;
            if frame % period == 0 {
                if (frame / period) % 2 == 0 {
                    input.left = KeyTransition::press();
                } else {
                    input.right = KeyTransition::press();
                }
            } else if frame % period == period / 2 {
                input.left = KeyTransition::release();
                input.right = KeyTransition::release();
            }
        }
        GamePhase::LevelComplete | GamePhase::LevelWin => {
            input.start = true;
        }
    }
    input
}
