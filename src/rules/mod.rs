//! Craps rules: game states and the transition function.
//!
//! The engine calls into `next_state` for every roll but never decides an
//! outcome on its own. Keeping the rules a pure function of
//! `(state, total, point)` lets them be tested without dice.

pub mod state;
pub mod transition;

pub use state::GameState;
pub use transition::{next_state, CRAPS, NATURALS, POINT_NUMBERS, SEVEN_OUT};
