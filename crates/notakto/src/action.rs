//! First-class move events.
//!
//! A move names a board, a cell and the mark placed there. Moves can be
//! validated against a position before they are applied.

use crate::{Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A mark placed on one cell of one board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Index of the board within the position.
    pub board: usize,
    /// Target cell.
    pub cell: Cell,
    /// Mark placed; its colour is display-only.
    pub mark: Mark,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(board: usize, cell: Cell, mark: Mark) -> Self {
        Self { board, cell, mark }
    }

    /// A move carrying the human player's mark.
    pub fn human(board: usize, cell: Cell) -> Self {
        Self::new(board, cell, Mark::HUMAN)
    }

    /// A move carrying the computer's mark.
    pub fn computer(board: usize, cell: Cell) -> Self {
        Self::new(board, cell, Mark::COMPUTER)
    }

    /// Square index (0-8) on the target board.
    pub fn square(&self) -> usize {
        self.cell.to_index()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> board {}, {}", self.mark, self.board, self.cell.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let mov = Move::human(2, Cell::Center);
        assert_eq!(mov.to_string(), "X -> board 2, Center");
        assert_eq!(mov.square(), 4);
    }

    #[test]
    fn test_deserialize_rejects_empty_mark() {
        let json = r#"{"board":0,"cell":"Center","mark":"-"}"#;
        assert!(serde_json::from_str::<Move>(json).is_err());

        let json = r#"{"board":0,"cell":"Center","mark":"x"}"#;
        let mov: Move = serde_json::from_str(json).unwrap();
        assert_eq!(mov, Move::computer(0, Cell::Center));
        let next = crate::play(&crate::Position::new(1).unwrap(), mov).unwrap();
        let reparsed = crate::Position::parse(&next.encode()).unwrap();
        assert_eq!(reparsed, next);
    }

    #[test]
    fn test_marks() {
        assert_eq!(Move::computer(0, Cell::TopLeft).mark, Mark::COMPUTER);
        assert_eq!(Move::human(0, Cell::TopLeft).mark, Mark::HUMAN);
    }
}
