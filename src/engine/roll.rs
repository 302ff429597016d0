//! Immutable record of one throw.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::rules::GameState;

/// One throw of the dice and the state it led to.
///
/// Rolls are `Copy` and expose their dice by value, so a record handed out
/// by the engine can never be changed through the caller's copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Roll {
    dice: [u8; 2],
    state: GameState,
}

impl Roll {
    pub(crate) fn new(dice: [u8; 2], state: GameState) -> Self {
        Self { dice, state }
    }

    /// The two faces, first die first.
    #[must_use]
    pub fn dice(&self) -> [u8; 2] {
        self.dice
    }

    /// State reached immediately after this roll.
    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Sum of both dice, 2..=12.
    #[must_use]
    pub fn total(&self) -> u8 {
        self.dice[0] + self.dice[1]
    }
}

impl fmt::Display for Roll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}] {}", self.dice[0], self.dice[1], self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_accessors() {
        let roll = Roll::new([3, 4], GameState::Win);
        assert_eq!(roll.dice(), [3, 4]);
        assert_eq!(roll.total(), 7);
        assert_eq!(roll.state(), GameState::Win);
    }

    #[test]
    fn test_dice_returned_by_value() {
        let roll = Roll::new([2, 5], GameState::Point);
        let mut dice = roll.dice();
        dice[0] = 6;
        assert_eq!(roll.dice(), [2, 5]);
    }

    #[test]
    fn test_display() {
        let roll = Roll::new([6, 6], GameState::Loss);
        assert_eq!(roll.to_string(), "[6, 6] LOSS");
    }
}
