//! Engine bindings for Python.

use std::sync::Arc;

use parking_lot::Mutex;
use pyo3::prelude::*;

use crate::core::{EngineConfig, GameRng};
use crate::engine::GameEngine;
use crate::session::SessionStats;

use super::py_core::{PyRoll, PySessionStats};

/// Python wrapper for GameEngine.
///
/// Games run with the GIL released and every method takes `&self`, so
/// another Python thread can poll `state` and `rolls()` while `play()` is
/// rolling.
#[pyclass(name = "CrapsGame", frozen)]
pub struct PyCrapsGame {
    engine: Arc<GameEngine<GameRng>>,
    stats: Mutex<SessionStats>,
}

#[pymethods]
impl PyCrapsGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - seed: RNG seed for reproducible dice; random when omitted
    #[new]
    #[pyo3(signature = (seed = None))]
    fn new(seed: Option<u64>) -> Self {
        let config = EngineConfig { seed };
        Self {
            engine: Arc::new(GameEngine::from_config(&config)),
            stats: Mutex::new(SessionStats::new()),
        }
    }

    /// Play one game to completion. Returns "WIN" or "LOSS".
    fn play(&self, py: Python<'_>) -> &'static str {
        let engine = Arc::clone(&self.engine);
        let game = py.allow_threads(move || engine.play_recorded());
        self.stats.lock().record(&game);
        game.state.name()
    }

    /// Play several games and return the accumulated statistics.
    fn play_many(&self, py: Python<'_>, count: u64) -> PySessionStats {
        let engine = Arc::clone(&self.engine);
        let games: Vec<_> = py.allow_threads(move || (0..count).map(|_| engine.play_recorded()).collect());

        let mut stats = self.stats.lock();
        for game in &games {
            stats.record(game);
        }
        PySessionStats(stats.clone())
    }

    /// Reset state, point and history. Tallies are kept.
    fn reset(&self) {
        self.engine.reset();
    }

    /// Lifecycle hook; does nothing.
    fn stop(&self) {
        self.engine.stop();
    }

    /// Current state name.
    #[getter]
    fn state(&self) -> &'static str {
        self.engine.state().name()
    }

    /// Established point, or None.
    #[getter]
    fn point(&self) -> Option<u8> {
        self.engine.point()
    }

    /// Copy of this game's rolls.
    fn rolls(&self) -> Vec<PyRoll> {
        self.engine.rolls().into_iter().map(PyRoll).collect()
    }

    #[getter]
    fn wins(&self) -> u64 {
        self.engine.wins()
    }

    #[getter]
    fn losses(&self) -> u64 {
        self.engine.losses()
    }

    /// Seed of the dice stream.
    #[getter]
    fn seed(&self) -> Option<u64> {
        self.engine.seed()
    }

    /// Statistics over every game played through this object.
    fn stats(&self) -> PySessionStats {
        PySessionStats(self.stats.lock().clone())
    }

    fn __repr__(&self) -> String {
        format!(
            "CrapsGame(state={}, wins={}, losses={})",
            self.engine.state(),
            self.engine.wins(),
            self.engine.losses()
        )
    }
}
