//! Error types for engine construction.
//!
//! Rolling dice and advancing the state machine never fail. Errors only
//! arise when a caller hands the engine bad input up front.

use thiserror::Error;

/// Errors raised while configuring an engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CrapsError {
    /// A scripted die face outside 1..=6.
    #[error("invalid die face {face} at roll {index} (expected 1-6)")]
    InvalidDie { index: usize, face: u8 },

    /// A scripted dice source with nothing to replay.
    #[error("dice script is empty")]
    EmptyScript,
}

pub type Result<T> = std::result::Result<T, CrapsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CrapsError::InvalidDie { index: 2, face: 7 };
        assert_eq!(err.to_string(), "invalid die face 7 at roll 2 (expected 1-6)");

        assert_eq!(CrapsError::EmptyScript.to_string(), "dice script is empty");
    }
}
