//! Multi-board game positions.

use crate::error::{NotaktoError, NotaktoResult};
use crate::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The full multi-board game state at one point in time.
///
/// Always holds at least one board. Positions are snapshots: moves build
/// a new position and leave the old one intact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Board>", into = "Vec<Board>")]
pub struct Position {
    boards: Vec<Board>,
}

impl Position {
    /// Creates a start position of `count` empty boards.
    #[instrument]
    pub fn new(count: usize) -> NotaktoResult<Self> {
        if count == 0 {
            return Err(NotaktoError::precondition(
                "a position needs at least one board",
            ));
        }
        Ok(Self {
            boards: vec![Board::new(); count],
        })
    }

    /// Wraps existing boards into a position.
    pub fn from_boards(boards: Vec<Board>) -> NotaktoResult<Self> {
        if boards.is_empty() {
            return Err(NotaktoError::precondition(
                "a position needs at least one board",
            ));
        }
        Ok(Self { boards })
    }

    /// Parses a position from its wire encoding, one string per board.
    #[instrument(skip(encoded))]
    pub fn parse<S: AsRef<str>>(encoded: &[S]) -> NotaktoResult<Self> {
        let boards = encoded
            .iter()
            .map(|s| s.as_ref().parse::<Board>())
            .collect::<NotaktoResult<Vec<_>>>()?;
        Self::from_boards(boards)
    }

    /// Returns the boards in order.
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Returns the board at `index`, if any.
    pub fn board(&self, index: usize) -> Option<&Board> {
        self.boards.get(index)
    }

    /// Number of boards in the position.
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// True if the position holds no boards.
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// Returns a new position with board `index` replaced.
    pub(crate) fn with_board(&self, index: usize, board: Board) -> Self {
        let mut boards = self.boards.clone();
        boards[index] = board;
        Self { boards }
    }

    /// Wire encoding, one string per board.
    pub fn encode(&self) -> Vec<String> {
        self.boards.iter().map(Board::to_string).collect()
    }
}

impl TryFrom<Vec<Board>> for Position {
    type Error = NotaktoError;

    fn try_from(boards: Vec<Board>) -> NotaktoResult<Self> {
        Self::from_boards(boards)
    }
}

impl From<Position> for Vec<Board> {
    fn from(position: Position) -> Self {
        position.boards
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.encode().join(" "))
    }
}
