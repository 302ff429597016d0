//! Playing many games on one engine.

use std::sync::Arc;

use tracing::{debug, info};

use crate::core::{DiceSource, GameRng, SessionConfig};
use crate::engine::{GameEngine, GameSnapshot};
use crate::rules::GameState;

use super::stats::SessionStats;

/// Plays a series of games and keeps statistics about them.
///
/// The engine is shared, so an observer (a UI thread, say) can hold its
/// own handle and read state or history while the session plays.
pub struct Session<D = GameRng> {
    engine: Arc<GameEngine<D>>,
    stats: SessionStats,
}

impl Session<GameRng> {
    /// Create a session with a fresh engine built from `config`.
    #[must_use]
    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(Arc::new(GameEngine::from_config(&config.engine)))
    }
}

impl<D: DiceSource> Session<D> {
    /// Create a session around an existing engine.
    pub fn new(engine: Arc<GameEngine<D>>) -> Self {
        Self {
            engine,
            stats: SessionStats::new(),
        }
    }

    /// Handle to the underlying engine.
    #[must_use]
    pub fn engine(&self) -> &Arc<GameEngine<D>> {
        &self.engine
    }

    /// Statistics so far.
    #[must_use]
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Play one game and record it.
    pub fn play_game(&mut self) -> GameSnapshot {
        let game = self.engine.play_recorded();
        self.stats.record(&game);
        game
    }

    /// Play `count` games.
    pub fn play_games(&mut self, count: u64) -> &SessionStats {
        debug!(count, "starting games");
        for _ in 0..count {
            self.play_game();
        }
        info!(
            games = self.stats.games,
            wins = self.stats.wins,
            losses = self.stats.losses,
            win_rate = self.stats.win_rate(),
            "session finished"
        );
        &self.stats
    }

    /// Play games, handing each finished one to `on_game` before the next starts.
    pub fn play_games_with<F>(&mut self, count: u64, mut on_game: F) -> &SessionStats
    where
        F: FnMut(u64, &GameSnapshot),
    {
        for index in 0..count {
            let game = self.play_game();
            on_game(index, &game);
        }
        &self.stats
    }

    /// Outcome of the most recent game, if it finished.
    #[must_use]
    pub fn last_outcome(&self) -> Option<GameState> {
        Some(self.engine.state()).filter(|state| state.is_terminal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedDice;

    #[test]
    fn test_session_counts_match_engine() {
        let mut session = Session::from_config(&SessionConfig::new().with_seed(42));
        let stats = session.play_games(200).clone();

        let tallies = session.engine().tallies();
        assert_eq!(stats.games, 200);
        assert_eq!(stats.wins, tallies.wins);
        assert_eq!(stats.losses, tallies.losses);
        assert_eq!(stats.totals.iter().sum::<u64>(), stats.total_rolls);
        assert_eq!(stats.lengths.values().sum::<u64>(), 200);
    }

    #[test]
    fn test_play_games_with_callback() {
        let engine = Arc::new(GameEngine::new(ScriptedDice::new(vec![[6, 5], [6, 6]]).unwrap()));
        let mut session = Session::new(engine);

        let mut outcomes = Vec::new();
        session.play_games_with(4, |index, game| outcomes.push((index, game.state)));

        assert_eq!(
            outcomes,
            vec![
                (0, GameState::Win),
                (1, GameState::Loss),
                (2, GameState::Win),
                (3, GameState::Loss),
            ]
        );
        assert_eq!(session.last_outcome(), Some(GameState::Loss));
    }

    #[test]
    fn test_last_outcome_before_play() {
        let session = Session::from_config(&SessionConfig::new().with_seed(1));
        assert_eq!(session.last_outcome(), None);
    }

    #[test]
    fn test_zero_games() {
        let mut session = Session::from_config(&SessionConfig::new().with_seed(1));
        assert_eq!(session.play_games(0).games, 0);
        assert_eq!(session.engine().tallies().games(), 0);
    }
}
