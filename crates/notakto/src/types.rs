//! Core domain types for Notakto boards.

use crate::cell::Cell;
use crate::error::{NotaktoError, NotaktoResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Character encoding an empty square on the wire.
pub const EMPTY_SYMBOL: char = '-';

/// A mark placed on a square.
///
/// Every mark counts the same for play; the character only records who
/// placed it so the display layer can colour it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Mark(char);

impl Mark {
    /// Mark used for the human player's moves.
    pub const HUMAN: Mark = Mark('X');
    /// Mark used for the computer's moves.
    pub const COMPUTER: Mark = Mark('x');

    /// Creates a mark from its symbol. The empty symbol is not a mark.
    pub fn new(symbol: char) -> Option<Self> {
        (symbol != EMPTY_SYMBOL).then_some(Self(symbol))
    }

    /// Returns the symbol as written on the wire.
    pub fn symbol(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Mark {
    type Error = NotaktoError;

    fn try_from(symbol: char) -> NotaktoResult<Self> {
        Self::new(symbol).ok_or_else(|| {
            NotaktoError::precondition(format!("{:?} marks an empty square", symbol))
        })
    }
}

impl From<Mark> for char {
    fn from(mark: Mark) -> Self {
        mark.0
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A square on a Notakto board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square carrying a mark.
    Marked(Mark),
}

impl Square {
    /// Returns true if the square carries a mark of any colour.
    pub fn is_marked(self) -> bool {
        matches!(self, Square::Marked(_))
    }

    /// Wire symbol for this square.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => EMPTY_SYMBOL,
            Square::Marked(mark) => mark.symbol(),
        }
    }
}

/// One 3x3 Notakto board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given cell.
    pub fn get(&self, cell: Cell) -> Square {
        self.squares[cell.to_index()]
    }

    /// Places a square at the given cell.
    pub(crate) fn set(&mut self, cell: Cell, square: Square) {
        self.squares[cell.to_index()] = square;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.get(cell) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// True if no square carries a mark.
    pub fn is_blank(&self) -> bool {
        self.squares.iter().all(|s| *s == Square::Empty)
    }

    /// Number of marked squares.
    pub fn mark_count(&self) -> usize {
        self.squares.iter().filter(|s| s.is_marked()).count()
    }

    /// Bit `i` is set when square `i` is marked. Colour is discarded.
    pub fn marked_mask(&self) -> u16 {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_marked())
            .fold(0, |mask, (i, _)| mask | (1 << i))
    }

    /// Empty cells in index order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        Cell::ALL.into_iter().filter(move |cell| self.is_empty(*cell))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = NotaktoError;

    fn from_str(s: &str) -> NotaktoResult<Self> {
        let symbols: Vec<char> = s.chars().collect();
        if symbols.len() != 9 {
            return Err(NotaktoError::precondition(format!(
                "board encoding {:?} has {} squares, expected 9",
                s,
                symbols.len()
            )));
        }

        let mut board = Board::new();
        for (cell, symbol) in Cell::ALL.into_iter().zip(symbols) {
            if let Some(mark) = Mark::new(symbol) {
                board.set(cell, Square::Marked(mark));
            }
        }
        Ok(board)
    }
}

impl TryFrom<String> for Board {
    type Error = NotaktoError;

    fn try_from(value: String) -> NotaktoResult<Self> {
        value.parse()
    }
}

impl From<Board> for String {
    fn from(board: Board) -> Self {
        board.to_string()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for square in &self.squares {
            write!(f, "{}", square.symbol())?;
        }
        Ok(())
    }
}
