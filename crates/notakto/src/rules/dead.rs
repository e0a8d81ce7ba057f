//! Dead-board detection.

use crate::{Board, Cell};

/// The 8 lines of a board: rows, columns, diagonals.
pub const LINES: [[Cell; 3]; 8] = [
    // Rows
    [Cell::TopLeft, Cell::TopCenter, Cell::TopRight],
    [Cell::MiddleLeft, Cell::Center, Cell::MiddleRight],
    [Cell::BottomLeft, Cell::BottomCenter, Cell::BottomRight],
    // Columns
    [Cell::TopLeft, Cell::MiddleLeft, Cell::BottomLeft],
    [Cell::TopCenter, Cell::Center, Cell::BottomCenter],
    [Cell::TopRight, Cell::MiddleRight, Cell::BottomRight],
    // Diagonals
    [Cell::TopLeft, Cell::Center, Cell::BottomRight],
    [Cell::TopRight, Cell::Center, Cell::BottomLeft],
];

/// Checks if the board holds a completed three-in-a-row.
///
/// Marks of any colour count, so a line mixing `X` and `x` kills the board.
pub fn is_dead(board: &Board) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|cell| board.get(*cell).is_marked()))
}
