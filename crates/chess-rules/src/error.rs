//! Engine error types.

use chess_core::Color;
use thiserror::Error;

/// Failures that are not ordinary rejected moves.
///
/// An illegal move is never an error; it comes back as a rejected
/// [`MoveReport`](crate::MoveReport).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// A coordinate outside `[0, 8)` was supplied.
    #[error("invalid coordinate ({row}, {col}): rows and columns must be in 0..8")]
    InvalidCoordinate { row: i32, col: i32 },

    /// A side's king is absent while the game is still running.
    #[error("internal error: {0} king is missing from the board")]
    MissingKing(Color),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let err = EngineError::InvalidCoordinate { row: 8, col: -1 };
        assert!(err.to_string().contains("(8, -1)"));

        let err = EngineError::MissingKing(Color::Black);
        assert!(err.to_string().contains("Black king"));
    }
}
