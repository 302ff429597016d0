//! # rust-craps
//!
//! A single-player craps engine: dice, the pass-line state machine, a
//! thread-safe roll history and win/loss tallies.
//!
//! ## Design Principles
//!
//! 1. **Pure Rules**: The transition function is a plain function of
//!    `(state, total, point)`. No polymorphic state objects.
//!
//! 2. **Pluggable Dice**: The engine is generic over `DiceSource`. Seeded
//!    ChaCha dice for play, scripted dice for tests and replays.
//!
//! 3. **Observable While Playing**: History, state and point sit behind one
//!    lock and tallies are atomic, so another thread can watch a game as
//!    it is rolled.
//!
//! ## Modules
//!
//! - `core`: Dice sources, RNG, configuration
//! - `rules`: Game states and the transition function
//! - `engine`: `GameEngine`, rolls, tallies
//! - `session`: Multi-game runs and statistics
//! - `error`: Error taxonomy

pub mod core;
pub mod engine;
pub mod error;
pub mod rules;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{DiceSource, EngineConfig, GameRng, GameRngState, ScriptedDice, SessionConfig};

pub use crate::engine::{GameEngine, GameSnapshot, Roll, Tallies};

pub use crate::error::{CrapsError, Result};

pub use crate::rules::{next_state, GameState};

pub use crate::session::{Session, SessionStats};
