//! Property tests for the rules and the engine.

use proptest::prelude::*;
use rust_craps::rules::POINT_NUMBERS;
use rust_craps::{next_state, GameEngine, GameState, ScriptedDice};

fn any_state() -> impl Strategy<Value = GameState> {
    prop::sample::select(GameState::ALL.to_vec())
}

fn any_point() -> impl Strategy<Value = u8> {
    prop::sample::select(POINT_NUMBERS.to_vec())
}

fn any_pair() -> impl Strategy<Value = [u8; 2]> {
    (1u8..=6, 1u8..=6).prop_map(|(a, b)| [a, b])
}

proptest! {
    #[test]
    fn prop_transition_is_total(state in any_state(), total in 2u8..=12, point in any_point()) {
        let next = next_state(state, total, Some(point));
        prop_assert!(GameState::ALL.contains(&next));
    }

    #[test]
    fn prop_terminal_states_absorb(total in 2u8..=12, point in proptest::option::of(any_point())) {
        prop_assert_eq!(next_state(GameState::Win, total, point), GameState::Win);
        prop_assert_eq!(next_state(GameState::Loss, total, point), GameState::Loss);
    }

    #[test]
    fn prop_point_never_returns_to_come_out(total in 2u8..=12, point in any_point()) {
        prop_assert_ne!(next_state(GameState::Point, total, Some(point)), GameState::ComeOut);
    }

    #[test]
    fn prop_play_terminates(seed in any::<u64>()) {
        let engine = GameEngine::seeded(seed);
        let outcome = engine.play();

        prop_assert!(outcome.is_terminal());
        prop_assert!(engine.rolls().len() <= 1000);
    }

    #[test]
    fn prop_point_latch(script in prop::collection::vec(any_pair(), 1..40)) {
        // Append a seven so every script finishes within one pass
        let mut script = script;
        script.push([3, 4]);
        let engine = GameEngine::new(ScriptedDice::new(script).unwrap());

        let outcome = engine.play();
        let rolls = engine.rolls();
        let first = rolls[0];

        match engine.point() {
            Some(point) => {
                prop_assert_eq!(first.state(), GameState::Point);
                prop_assert_eq!(point, first.total());
                prop_assert!(POINT_NUMBERS.contains(&point));
                // A point game ends on the point or a seven
                let last = rolls[rolls.len() - 1];
                prop_assert!(last.total() == point || last.total() == 7);
            }
            None => {
                prop_assert_eq!(rolls.len(), 1);
                prop_assert_eq!(first.state(), outcome);
            }
        }
    }

    #[test]
    fn prop_tallies_sum_to_games(seed in any::<u64>(), games in 1u64..60) {
        let engine = GameEngine::seeded(seed);
        for _ in 0..games {
            engine.play();
        }
        prop_assert_eq!(engine.wins() + engine.losses(), games);
    }

    #[test]
    fn prop_same_seed_same_games(seed in any::<u64>()) {
        let a = GameEngine::seeded(seed);
        let b = GameEngine::seeded(seed);
        for _ in 0..5 {
            prop_assert_eq!(a.play(), b.play());
            prop_assert_eq!(a.rolls(), b.rolls());
        }
    }
}
