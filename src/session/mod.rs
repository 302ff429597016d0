//! Multi-game sessions and their statistics.
//!
//! A session plays games on a shared engine and folds each finished game
//! into `SessionStats`. Engine tallies remain the source of truth for wins
//! and losses; the session adds roll-level detail.

pub mod runner;
pub mod stats;

pub use runner::Session;
pub use stats::{format_rolls, SessionStats};
