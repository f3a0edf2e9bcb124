//! Construction-boundary errors.

use thiserror::Error;

/// Configuration rejected when building a [`crate::game::Game`].
///
/// The turn state machine itself never fails; everything that could
/// put it in an undefined state is rejected here instead.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// Pig needs at least two players to rotate between.
    #[error("at least 2 players are required, got {got}")]
    TooFewPlayers {
        /// The rejected player count.
        got: usize,
    },

    /// The roster index is a `u8`, capping the table at 255 seats.
    #[error("at most 255 players are supported, got {got}")]
    TooManyPlayers {
        /// The rejected player count.
        got: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_count() {
        let err = GameError::TooFewPlayers { got: 1 };
        assert_eq!(err.to_string(), "at least 2 players are required, got 1");

        let err = GameError::TooManyPlayers { got: 300 };
        assert_eq!(err.to_string(), "at most 255 players are supported, got 300");
    }
}
