//! Dice sources: where the engine gets its numbers.
//!
//! The engine is generic over [`DiceSource`] so games can be driven by a
//! seeded RNG in normal play or by a fixed script in tests and replays.

use crate::error::{CrapsError, Result};

use super::rng::GameRng;

/// Number of faces on a die.
pub const FACES: u8 = 6;

/// A supply of six-sided die faces.
///
/// Implementations must only yield values in `1..=6`. Rolling is
/// infallible: a source never runs dry.
pub trait DiceSource {
    /// Roll a single die.
    fn roll_die(&mut self) -> u8;

    /// Seed that reproduces this source, if it has one.
    fn seed(&self) -> Option<u64> {
        None
    }

    /// Roll two dice, first die first.
    fn roll_pair(&mut self) -> [u8; 2] {
        let first = self.roll_die();
        let second = self.roll_die();
        [first, second]
    }
}

impl DiceSource for GameRng {
    fn roll_die(&mut self) -> u8 {
        GameRng::roll_die(self)
    }

    fn seed(&self) -> Option<u64> {
        Some(GameRng::seed(self))
    }
}

impl<D: DiceSource + ?Sized> DiceSource for Box<D> {
    fn roll_die(&mut self) -> u8 {
        (**self).roll_die()
    }

    fn seed(&self) -> Option<u64> {
        (**self).seed()
    }

    fn roll_pair(&mut self) -> [u8; 2] {
        (**self).roll_pair()
    }
}

/// Replays a fixed sequence of dice pairs, cycling when exhausted.
///
/// ```
/// use rust_craps::core::{DiceSource, ScriptedDice};
///
/// let mut dice = ScriptedDice::new(vec![[3, 4], [1, 1]]).unwrap();
/// assert_eq!(dice.roll_pair(), [3, 4]);
/// assert_eq!(dice.roll_pair(), [1, 1]);
/// assert_eq!(dice.roll_pair(), [3, 4]);
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedDice {
    faces: Vec<u8>,
    cursor: usize,
}

impl ScriptedDice {
    /// Build a script from dice pairs.
    ///
    /// Fails if the script is empty or holds a face outside 1..=6.
    pub fn new(pairs: impl IntoIterator<Item = [u8; 2]>) -> Result<Self> {
        let faces: Vec<u8> = pairs.into_iter().flatten().collect();
        if faces.is_empty() {
            return Err(CrapsError::EmptyScript);
        }
        if let Some((pos, &face)) = faces
            .iter()
            .enumerate()
            .find(|(_, face)| !(1..=FACES).contains(*face))
        {
            return Err(CrapsError::InvalidDie { index: pos / 2, face });
        }
        Ok(Self { faces, cursor: 0 })
    }

    /// Number of pairs in one pass of the script.
    #[must_use]
    pub fn len(&self) -> usize {
        self.faces.len() / 2
    }

    /// Always false; empty scripts are rejected at construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}

impl DiceSource for ScriptedDice {
    fn roll_die(&mut self) -> u8 {
        let face = self.faces[self.cursor];
        self.cursor = (self.cursor + 1) % self.faces.len();
        face
    }
}
