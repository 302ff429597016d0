//! Win/loss counters that outlive individual games.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::rules::GameState;

/// Point-in-time copy of an engine's win/loss counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tallies {
    /// Games won.
    pub wins: u64,
    /// Games lost.
    pub losses: u64,
}

impl Tallies {
    /// Games completed.
    #[must_use]
    pub fn games(&self) -> u64 {
        self.wins + self.losses
    }

    /// Fraction of games won, 0.0 before any game finishes.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games() == 0 {
            0.0
        } else {
            self.wins as f64 / self.games() as f64
        }
    }
}

/// Monotonic counters shared between the playing thread and observers.
#[derive(Debug, Default)]
pub(crate) struct AtomicTallies {
    wins: AtomicU64,
    losses: AtomicU64,
}

impl AtomicTallies {
    /// Count one finished game. Non-terminal states are ignored.
    pub(crate) fn record(&self, outcome: GameState) {
        match outcome {
            GameState::Win => {
                self.wins.fetch_add(1, Ordering::Relaxed);
            }
            GameState::Loss => {
                self.losses.fetch_add(1, Ordering::Relaxed);
            }
            GameState::ComeOut | GameState::Point => {}
        }
    }

    pub(crate) fn wins(&self) -> u64 {
        self.wins.load(Ordering::Relaxed)
    }

    pub(crate) fn losses(&self) -> u64 {
        self.losses.load(Ordering::Relaxed)
    }

    pub(crate) fn snapshot(&self) -> Tallies {
        Tallies {
            wins: self.wins(),
            losses: self.losses(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record() {
        let tallies = AtomicTallies::default();
        tallies.record(GameState::Win);
        tallies.record(GameState::Win);
        tallies.record(GameState::Loss);
        tallies.record(GameState::Point);

        assert_eq!(tallies.snapshot(), Tallies { wins: 2, losses: 1 });
    }

    #[test]
    fn test_win_rate() {
        assert_eq!(Tallies::default().win_rate(), 0.0);

        let tallies = Tallies { wins: 3, losses: 1 };
        assert_eq!(tallies.games(), 4);
        assert_eq!(tallies.win_rate(), 0.75);
    }
}
