//! Game engine: owns the dice, state machine, roll history and tallies.

pub mod game;
pub mod roll;
pub mod tallies;

pub use game::{GameEngine, GameSnapshot};
pub use roll::Roll;
pub use tallies::Tallies;
