//! Position-level game rules and the human move entry point.

use crate::action::Move;
use crate::contracts::{Contract, MoveContract};
use crate::error::{NotaktoError, NotaktoResult};
use crate::rules::{apply_move, is_dead};
use crate::{Board, Cell, Position};
use tracing::{debug, instrument};

/// True iff every board is blank.
pub fn is_start_position(position: &Position) -> bool {
    position.boards().iter().all(Board::is_blank)
}

/// True iff every board is dead.
pub fn is_game_over(position: &Position) -> bool {
    position.boards().iter().all(is_dead)
}

/// Applies a validated move, returning the new position.
///
/// Contract enforcement:
/// - Preconditions checked always
/// - Postconditions checked in debug builds only
#[instrument(skip(position), fields(boards = position.len()))]
pub fn play(position: &Position, mov: Move) -> NotaktoResult<Position> {
    MoveContract::pre(position, &mov).inspect_err(|err| debug!(%err, "Move rejected"))?;

    let board = apply_move(&position.boards()[mov.board], mov.square(), mov.mark)?;
    let next = position.with_board(mov.board, board);

    #[cfg(debug_assertions)]
    MoveContract::post(position, &next)?;

    Ok(next)
}

/// Plays the human's mark at `square` (0-8) on board `board`.
///
/// A dead board or a marked square yields an illegal move error and the
/// input position stays as it was. Out-of-range indices are precondition
/// errors.
#[instrument(skip(position), fields(boards = position.len()))]
pub fn human_move(position: &Position, board: usize, square: usize) -> NotaktoResult<Position> {
    let cell = Cell::from_index(square).ok_or_else(|| {
        NotaktoError::precondition(format!("square {} out of range (must be 0-8)", square))
    })?;
    play(position, Move::human(board, cell))
}
