//! Engine error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// A recoverable, expected rejection of a requested move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum IllegalMove {
    /// The targeted board already contains a three-in-a-row.
    #[display("Board {} is already dead", board)]
    BoardDead {
        /// Index of the dead board.
        board: usize,
    },

    /// The targeted square already carries a mark.
    #[display("Square {} on board {} is already marked", square, board)]
    SquareOccupied {
        /// Index of the board.
        board: usize,
        /// Index of the occupied square (0-8).
        square: usize,
    },
}

/// Specific engine error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum NotaktoErrorKind {
    /// The move was rejected; the input position is untouched.
    #[display("Illegal move: {}", _0)]
    IllegalMove(IllegalMove),

    /// A caller broke an API precondition (bad index, malformed encoding).
    #[display("Precondition violated: {}", _0)]
    Precondition(String),

    /// Every board is dead, so there is nothing left to play.
    #[display("Game is already over")]
    GameOver,

    /// The evaluator found no position-reversing move where one must exist.
    #[display("Monoid invariant violated: {}", _0)]
    AlgebraicInvariant(String),

    /// A move postcondition failed.
    #[display("Contract violated: {}", _0)]
    Contract(String),
}

/// Engine error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Notakto error: {} at {}:{}", kind, file, line)]
pub struct NotaktoError {
    /// Error kind.
    pub kind: NotaktoErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl NotaktoError {
    /// Creates a new engine error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: NotaktoErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Shorthand for a precondition violation.
    #[track_caller]
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::new(NotaktoErrorKind::Precondition(message.into()))
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &NotaktoErrorKind {
        &self.kind
    }

    /// True when the error is the recoverable "illegal move" outcome.
    pub fn is_illegal_move(&self) -> bool {
        matches!(self.kind, NotaktoErrorKind::IllegalMove(_))
    }
}

impl From<IllegalMove> for NotaktoError {
    #[track_caller]
    fn from(err: IllegalMove) -> Self {
        Self::new(NotaktoErrorKind::IllegalMove(err))
    }
}

/// Result alias used across the engine.
pub type NotaktoResult<T> = Result<T, NotaktoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_illegal_move_is_distinguishable() {
        let err = NotaktoError::from(IllegalMove::BoardDead { board: 2 });
        assert!(err.is_illegal_move());
        assert!(err.to_string().contains("Board 2 is already dead"));

        let err = NotaktoError::precondition("square 9 out of range");
        assert!(!err.is_illegal_move());
    }

    #[test]
    fn test_error_records_location() {
        let err = NotaktoError::new(NotaktoErrorKind::GameOver);
        assert!(err.file.ends_with("error.rs"));
        assert!(err.line > 0);
    }
}
