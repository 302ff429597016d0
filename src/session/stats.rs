//! Aggregate statistics over many games.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::engine::{GameSnapshot, Roll};
use crate::rules::GameState;

/// Statistics collected while a session plays games.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Games finished.
    pub games: u64,

    /// Games won.
    pub wins: u64,

    /// Games lost.
    pub losses: u64,

    /// Rolls across all games.
    pub total_rolls: u64,

    /// Most rolls seen in a single game.
    pub longest_game: usize,

    /// How often each dice total came up, indexed by total (0 and 1 unused).
    pub totals: [u64; 13],

    /// Number of games that took a given number of rolls.
    pub lengths: FxHashMap<usize, u64>,
}

impl SessionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fold a finished game into the statistics.
    pub fn record(&mut self, game: &GameSnapshot) {
        self.games += 1;
        match game.state {
            GameState::Win => self.wins += 1,
            GameState::Loss => self.losses += 1,
            GameState::ComeOut | GameState::Point => {}
        }

        let length = game.rolls.len();
        self.total_rolls += length as u64;
        self.longest_game = self.longest_game.max(length);
        *self.lengths.entry(length).or_insert(0) += 1;

        for roll in &game.rolls {
            if let Some(count) = self.totals.get_mut(usize::from(roll.total())) {
                *count += 1;
            }
        }
    }

    /// Fraction of games won.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64
        }
    }

    /// Mean rolls per game.
    #[must_use]
    pub fn average_rolls(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_rolls as f64 / self.games as f64
        }
    }

    /// Times a dice total came up. Zero outside 2..=12.
    #[must_use]
    pub fn total_frequency(&self, total: u8) -> u64 {
        self.totals.get(usize::from(total)).copied().unwrap_or(0)
    }

    /// Games that lasted exactly `rolls` rolls.
    #[must_use]
    pub fn games_of_length(&self, rolls: usize) -> u64 {
        self.lengths.get(&rolls).copied().unwrap_or(0)
    }

    /// Games decided on the come-out roll.
    #[must_use]
    pub fn come_out_decisions(&self) -> u64 {
        self.games_of_length(1)
    }
}

/// Format a roll list the way the CLI prints it: one roll per line.
#[must_use]
pub fn format_rolls<'a>(rolls: impl IntoIterator<Item = &'a Roll>) -> String {
    rolls
        .into_iter()
        .map(|roll| format!("{roll}\n"))
        .collect()
}
