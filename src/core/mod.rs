//! Core building blocks: dice sources, RNG, configuration.
//!
//! Nothing here knows the rules of craps. The engine combines these with
//! the `rules` module to play games.

pub mod config;
pub mod dice;
pub mod rng;

pub use config::{EngineConfig, SessionConfig};
pub use dice::{DiceSource, ScriptedDice, FACES};
pub use rng::{GameRng, GameRngState};
