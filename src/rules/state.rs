//! The four states of a pass-line game.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a game stands after its most recent roll.
///
/// `ComeOut` and `Point` keep the shooter rolling. `Win` and `Loss` end the
/// game and absorb any further rolls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    /// First roll of a game; no point established.
    #[default]
    ComeOut,
    /// A point is established and the shooter is trying to repeat it.
    Point,
    /// The shooter won.
    Win,
    /// The shooter lost.
    Loss,
}

impl GameState {
    /// Every state, in declaration order.
    pub const ALL: [Self; 4] = [Self::ComeOut, Self::Point, Self::Win, Self::Loss];

    /// Check if the game is over.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Win | Self::Loss)
    }

    /// Upper-case display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ComeOut => "COME_OUT",
            Self::Point => "POINT",
            Self::Win => "WIN",
            Self::Loss => "LOSS",
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
