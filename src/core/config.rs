//! Engine and session configuration.
//!
//! Callers describe how an engine should be seeded and how many games a
//! session should play; the engine never reads the environment itself.

use serde::{Deserialize, Serialize};

/// Configuration for a single [`GameEngine`](crate::engine::GameEngine).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Seed for the dice. `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl EngineConfig {
    /// Create a config with an entropy seed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the dice seed for reproducible games.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The configured seed, or a fresh one from the OS.
    #[must_use]
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

/// Configuration for a multi-game [`Session`](crate::session::Session).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Number of games to play.
    pub games: u64,

    /// Engine settings.
    pub engine: EngineConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            games: 1,
            engine: EngineConfig::default(),
        }
    }
}

impl SessionConfig {
    /// Create a one-game session config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of games.
    #[must_use]
    pub fn with_games(mut self, games: u64) -> Self {
        self.games = games;
        self
    }

    /// Fix the dice seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.engine = self.engine.with_seed(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_config_builder() {
        let config = EngineConfig::new();
        assert_eq!(config.seed, None);

        let config = config.with_seed(9);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.resolve_seed(), 9);
    }

    #[test]
    fn test_session_config_builder() {
        let config = SessionConfig::new().with_games(250).with_seed(3);
        assert_eq!(config.games, 250);
        assert_eq!(config.engine.seed, Some(3));

        assert_eq!(SessionConfig::default().games, 1);
    }

    #[test]
    fn test_config_serde() {
        let config = SessionConfig::new().with_games(10).with_seed(1);
        let json = serde_json::to_string(&config).unwrap();
        let back: SessionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
