//! Value type bindings for Python.

use pyo3::prelude::*;

use crate::engine::Roll;
use crate::session::SessionStats;

/// Python wrapper for Roll.
#[pyclass(name = "Roll", frozen)]
#[derive(Clone, Debug)]
pub struct PyRoll(pub Roll);

#[pymethods]
impl PyRoll {
    /// The two faces as a tuple.
    #[getter]
    fn dice(&self) -> (u8, u8) {
        let [a, b] = self.0.dice();
        (a, b)
    }

    /// Sum of both dice.
    #[getter]
    fn total(&self) -> u8 {
        self.0.total()
    }

    /// Resulting state name, e.g. "POINT".
    #[getter]
    fn state(&self) -> &'static str {
        self.0.state().name()
    }

    fn __repr__(&self) -> String {
        format!("Roll({})", self.0)
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Python wrapper for SessionStats.
#[pyclass(name = "SessionStats", frozen)]
#[derive(Clone, Debug)]
pub struct PySessionStats(pub SessionStats);

#[pymethods]
impl PySessionStats {
    #[getter]
    fn games(&self) -> u64 {
        self.0.games
    }

    #[getter]
    fn wins(&self) -> u64 {
        self.0.wins
    }

    #[getter]
    fn losses(&self) -> u64 {
        self.0.losses
    }

    #[getter]
    fn longest_game(&self) -> usize {
        self.0.longest_game
    }

    fn win_rate(&self) -> f64 {
        self.0.win_rate()
    }

    fn average_rolls(&self) -> f64 {
        self.0.average_rolls()
    }

    /// Times the given dice total came up.
    fn total_frequency(&self, total: u8) -> u64 {
        self.0.total_frequency(total)
    }

    fn __repr__(&self) -> String {
        format!(
            "SessionStats(games={}, wins={}, losses={}, avg_rolls={:.2})",
            self.0.games,
            self.0.wins,
            self.0.losses,
            self.0.average_rolls()
        )
    }
}
