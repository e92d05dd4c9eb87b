//! Error types for game setup.

use derive_more::{Display, Error};

/// Failures that can occur while configuring or starting a game.
///
/// Rejected moves are not errors; the engine ignores them and reports the
/// reason through [`crate::game::MoveOutcome`].
#[derive(Debug, Clone, PartialEq, Display, Error)]
pub enum GameError {
    /// Board size below 3 or above [`crate::board::MAX_BOARD_SIZE`].
    #[display("board size {size} is out of range (expected at least 3, at most 1024)")]
    InvalidSize {
        /// The rejected size.
        size: usize,
    },
    /// Drawing surface with a non-finite or non-positive dimension.
    #[display("viewport {width}x{height} must have finite, positive dimensions")]
    InvalidViewport {
        /// Requested width.
        width: f64,
        /// Requested height.
        height: f64,
    },
    /// Host-supplied configuration that could not be parsed.
    #[display("invalid game config: {message}")]
    InvalidConfig {
        /// Parser message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_size_message_names_the_size() {
        let err = GameError::InvalidSize { size: 2 };

        assert_eq!(
            err.to_string(),
            "board size 2 is out of range (expected at least 3, at most 1024)"
        );
    }

    #[test]
    fn errors_are_std_errors() {
        fn assert_error<E: std::error::Error>(_: &E) {}

        assert_error(&GameError::InvalidViewport {
            width: 0.0,
            height: 10.0,
        });
    }
}
