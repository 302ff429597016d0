//! The game engine: dice, state machine, roll history and tallies.
//!
//! ## Locking
//!
//! State, point and history live together behind one mutex (the *table*).
//! Each roll updates all three inside a single critical section, so an
//! observer never sees a roll in the history whose state has not been
//! applied yet, or a half-cleared history.
//!
//! The dice source has its own mutex. `play` holds it for a whole game, so
//! concurrent `play` calls run one game after another instead of
//! interleaving rolls, and a `reset` from another thread waits for the
//! game in flight to finish.
//!
//! Tallies are atomics. Every read accessor is safe to call from any
//! thread while a game is in progress.

use im::Vector;
use parking_lot::Mutex;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::core::{DiceSource, EngineConfig, GameRng, FACES};
use crate::rules::{next_state, GameState};

use super::roll::Roll;
use super::tallies::{AtomicTallies, Tallies};

/// Mutable per-game state, always updated as a unit.
#[derive(Clone, Debug, Default)]
struct Table {
    state: GameState,
    point: Option<u8>,
    rolls: Vector<Roll>,
}

/// Consistent view of a game at one instant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    /// Current state.
    pub state: GameState,
    /// Established point, if any.
    pub point: Option<u8>,
    /// Rolls so far, oldest first.
    pub rolls: Vector<Roll>,
}

/// Single-player craps engine.
///
/// A fresh engine starts in [`GameState::ComeOut`] with no point and an
/// empty history, so accessors are well defined before the first game.
///
/// ```
/// use rust_craps::GameEngine;
///
/// let engine = GameEngine::seeded(42);
/// let outcome = engine.play();
///
/// assert!(outcome.is_terminal());
/// assert_eq!(engine.wins() + engine.losses(), 1);
/// assert_eq!(engine.rolls().last().map(|r| r.state()), Some(outcome));
/// ```
#[derive(Debug)]
pub struct GameEngine<D = GameRng> {
    dice: Mutex<D>,
    seed: Option<u64>,
    table: Mutex<Table>,
    tallies: AtomicTallies,
}

impl GameEngine<GameRng> {
    /// Create an engine with seeded ChaCha dice.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }

    /// Create an engine from configuration.
    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        let seed = config.resolve_seed();
        debug!(seed, "creating engine");
        Self::seeded(seed)
    }
}

impl<D: DiceSource> GameEngine<D> {
    /// Create an engine rolling from the given source.
    pub fn new(dice: D) -> Self {
        Self {
            seed: dice.seed(),
            dice: Mutex::new(dice),
            table: Mutex::new(Table::default()),
            tallies: AtomicTallies::default(),
        }
    }

    /// Start over: come-out state, no point, empty history.
    ///
    /// Tallies are kept. Waits for any game in flight to finish first.
    pub fn reset(&self) {
        let _dice = self.dice.lock();
        self.clear_table();
    }

    /// Play one game to completion and count the result.
    ///
    /// Always returns [`GameState::Win`] or [`GameState::Loss`].
    pub fn play(&self) -> GameState {
        self.play_recorded().state
    }

    /// Like [`play`](Self::play), but also returns the finished game.
    ///
    /// The snapshot is taken before another `play` can start, so it always
    /// belongs to this game even when the engine is shared.
    pub fn play_recorded(&self) -> GameSnapshot {
        let mut dice = self.dice.lock();
        self.clear_table();

        let outcome = loop {
            let state = self.roll_with(&mut dice);
            if state.is_terminal() {
                break state;
            }
        };

        self.tallies.record(outcome);
        info!(
            outcome = %outcome,
            rolls = self.roll_count(),
            wins = self.wins(),
            losses = self.losses(),
            "game finished"
        );
        self.snapshot()
    }

    /// Roll once and advance the state machine.
    ///
    /// Rolling after the game has ended still records the roll, but the
    /// state stays where it was.
    pub(crate) fn roll_once(&self) -> GameState {
        let mut dice = self.dice.lock();
        self.roll_with(&mut dice)
    }

    fn roll_with(&self, dice: &mut D) -> GameState {
        let raw = dice.roll_pair();
        let pair = raw.map(|face| face.clamp(1, FACES));
        if pair != raw {
            warn!(die1 = raw[0], die2 = raw[1], "dice source rolled a face outside 1-6, clamping");
        }
        let total = pair[0] + pair[1];

        let mut table = self.table.lock();
        let next = next_state(table.state, total, table.point);
        if table.state == GameState::ComeOut && next == GameState::Point {
            table.point = Some(total);
        }
        table.state = next;
        table.rolls.push_back(Roll::new(pair, next));
        debug!(die1 = pair[0], die2 = pair[1], total, state = %next, "roll");

        next
    }

    fn clear_table(&self) {
        let mut table = self.table.lock();
        table.state = GameState::ComeOut;
        table.point = None;
        table.rolls.clear();
    }

    /// Seed of the dice stream, for sources that have one.
    ///
    /// Captured at construction, so it never waits on a game in flight.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> GameState {
        self.table.lock().state
    }

    /// Point established this game, if any.
    #[must_use]
    pub fn point(&self) -> Option<u8> {
        self.table.lock().point
    }

    /// Snapshot of this game's rolls, oldest first.
    ///
    /// The returned vector shares structure with the engine's history but
    /// is unaffected by later rolls or resets.
    #[must_use]
    pub fn rolls(&self) -> Vector<Roll> {
        self.table.lock().rolls.clone()
    }

    /// Number of rolls in the current game.
    #[must_use]
    pub fn roll_count(&self) -> usize {
        self.table.lock().rolls.len()
    }

    /// Most recent roll of the current game.
    #[must_use]
    pub fn last_roll(&self) -> Option<Roll> {
        self.table.lock().rolls.last().copied()
    }

    /// State, point and history captured together.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        let table = self.table.lock();
        GameSnapshot {
            state: table.state,
            point: table.point,
            rolls: table.rolls.clone(),
        }
    }

    /// Games won on this engine.
    #[must_use]
    pub fn wins(&self) -> u64 {
        self.tallies.wins()
    }

    /// Games lost on this engine.
    #[must_use]
    pub fn losses(&self) -> u64 {
        self.tallies.losses()
    }

    /// Both counters.
    #[must_use]
    pub fn tallies(&self) -> Tallies {
        self.tallies.snapshot()
    }

    /// Shutdown hook for a presentation layer. The engine holds nothing
    /// that needs releasing.
    pub fn stop(&self) {
        debug!(tallies = ?self.tallies(), "engine stopped");
    }
}
