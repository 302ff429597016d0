//! Pass-line transition function.
//!
//! The whole rule set of the game is the table below, keyed on the current
//! state, the dice total and the established point:
//!
//! | State    | Total                 | Next    |
//! |----------|-----------------------|---------|
//! | ComeOut  | 2, 3, 12              | Loss    |
//! | ComeOut  | 7, 11                 | Win     |
//! | ComeOut  | 4, 5, 6, 8, 9, 10     | Point   |
//! | Point    | equal to the point    | Win     |
//! | Point    | 7                     | Loss    |
//! | Point    | anything else         | Point   |
//! | Win/Loss | anything              | same    |

use super::state::GameState;

/// Totals that lose on the come-out roll.
pub const CRAPS: [u8; 3] = [2, 3, 12];

/// Totals that win on the come-out roll.
pub const NATURALS: [u8; 2] = [7, 11];

/// Totals that establish a point.
pub const POINT_NUMBERS: [u8; 6] = [4, 5, 6, 8, 9, 10];

/// Total that ends a point game in a loss.
pub const SEVEN_OUT: u8 = 7;

/// Compute the state reached by rolling `total` from `state`.
///
/// `point` is only consulted in [`GameState::Point`]. Totals outside the
/// come-out tables fall through to "establish/keep the point", so every
/// `(state, total, point)` triple has an answer.
#[must_use]
pub fn next_state(state: GameState, total: u8, point: Option<u8>) -> GameState {
    match state {
        GameState::ComeOut => match total {
            2 | 3 | 12 => GameState::Loss,
            7 | 11 => GameState::Win,
            _ => GameState::Point,
        },
        GameState::Point => {
            if Some(total) == point {
                GameState::Win
            } else if total == SEVEN_OUT {
                GameState::Loss
            } else {
                GameState::Point
            }
        }
        terminal @ (GameState::Win | GameState::Loss) => terminal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_come_out_craps() {
        for total in CRAPS {
            assert_eq!(next_state(GameState::ComeOut, total, None), GameState::Loss);
        }
    }

    #[test]
    fn test_come_out_naturals() {
        for total in NATURALS {
            assert_eq!(next_state(GameState::ComeOut, total, None), GameState::Win);
        }
    }

    #[test]
    fn test_come_out_establishes_point() {
        for total in POINT_NUMBERS {
            assert_eq!(next_state(GameState::ComeOut, total, None), GameState::Point);
        }
    }

    #[test]
    fn test_point_made() {
        for point in POINT_NUMBERS {
            assert_eq!(next_state(GameState::Point, point, Some(point)), GameState::Win);
        }
    }

    #[test]
    fn test_seven_out() {
        for point in POINT_NUMBERS {
            assert_eq!(next_state(GameState::Point, 7, Some(point)), GameState::Loss);
        }
    }

    #[test]
    fn test_point_continues() {
        // 2, 3, 11 and 12 carry no meaning once a point is on
        for total in [2, 3, 11, 12, 6] {
            assert_eq!(next_state(GameState::Point, total, Some(8)), GameState::Point);
        }
    }

    #[test]
    fn test_terminal_absorbs() {
        for total in 2..=12 {
            for point in [None, Some(4), Some(10)] {
                assert_eq!(next_state(GameState::Win, total, point), GameState::Win);
                assert_eq!(next_state(GameState::Loss, total, point), GameState::Loss);
            }
        }
    }

    #[test]
    fn test_totality() {
        for state in GameState::ALL {
            for total in 2..=12 {
                for point in POINT_NUMBERS {
                    let next = next_state(state, total, Some(point));
                    assert!(GameState::ALL.contains(&next));
                }
            }
        }
    }

    #[test]
    fn test_out_of_range_total() {
        assert_eq!(next_state(GameState::ComeOut, 0, None), GameState::Point);
        assert_eq!(next_state(GameState::Point, 200, Some(5)), GameState::Point);
    }
}
