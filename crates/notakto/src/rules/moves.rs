//! Copy-on-write move application on a single board.

use crate::error::{NotaktoError, NotaktoResult};
use crate::{Board, Cell, Mark, Square};

/// Returns a new board with `mark` placed on `square`.
///
/// The input board is never modified. `square` must be in 0-8 and empty;
/// anything else is a caller bug and reported as a precondition error.
/// Dead boards are not rejected here, that is a position-level rule.
pub fn apply_move(board: &Board, square: usize, mark: Mark) -> NotaktoResult<Board> {
    let cell = Cell::from_index(square).ok_or_else(|| {
        NotaktoError::precondition(format!("square {} out of range (must be 0-8)", square))
    })?;

    if !board.is_empty(cell) {
        return Err(NotaktoError::precondition(format!(
            "square {} on {} is already marked",
            square, board
        )));
    }

    let mut next = board.clone();
    next.set(cell, Square::Marked(mark));
    Ok(next)
}
