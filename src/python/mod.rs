//! Python bindings for the rust-craps engine.
//!
//! # Quick Start
//!
//! ```python
//! import rust_craps as craps
//!
//! game = craps.CrapsGame(seed=42)
//! outcome = game.play()          # "WIN" or "LOSS"
//!
//! for roll in game.rolls():
//!     print(roll.dice, roll.state)
//!
//! print(game.wins, game.losses)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_engine;

pub use py_core::*;
pub use py_engine::*;

/// rust-craps: a single-player craps engine.
#[pymodule]
fn rust_craps(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyRoll>()?;
    m.add_class::<PyCrapsGame>()?;
    m.add_class::<PySessionStats>()?;

    Ok(())
}
