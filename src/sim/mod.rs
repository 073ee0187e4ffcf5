//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod level;
pub mod momentum;
pub mod physics;
pub mod rotation;
pub mod state;
pub mod tick;
pub mod wind;

pub use collision::{circle_rect_collision, first_hit, Rect};
pub use level::{LevelConfig, LevelId};
pub use momentum::InputMomentum;
pub use physics::{integrate, Boat};
pub use rotation::{RotationState, TurnDirection};
pub use state::{
    Countdown, CrashSequence, FadeGate, GameEvent, GamePhase, GameState, HeldKeys, LevelState,
    OarSide, PendingAction, RenderFrame,
};
pub use tick::{tick, KeyTransition, TickInput};
pub use wind::{RiverCurrent, WindSystem};
