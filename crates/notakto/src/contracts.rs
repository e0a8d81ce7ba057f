//! Contract-based validation for Notakto moves.
//!
//! Contracts formalize Hoare-style reasoning: {P} action {Q}

use crate::action::Move;
use crate::error::{IllegalMove, NotaktoError, NotaktoErrorKind, NotaktoResult};
use crate::invariants::{InvariantSet, MoveInvariants, Transition};
use crate::rules::is_dead;
use crate::Position;
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> NotaktoResult<()>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> NotaktoResult<()>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the move addresses a board that exists.
pub struct BoardInRange;

impl BoardInRange {
    /// Fails with a precondition error for an out-of-range board index.
    #[instrument(skip(position))]
    pub fn check(mov: &Move, position: &Position) -> NotaktoResult<()> {
        if mov.board >= position.len() {
            Err(NotaktoError::precondition(format!(
                "board index {} out of range for {} boards",
                mov.board,
                position.len()
            )))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target board is not dead.
pub struct BoardIsLive;

impl BoardIsLive {
    /// Fails with an illegal move if the target board is dead.
    #[instrument(skip(position))]
    pub fn check(mov: &Move, position: &Position) -> NotaktoResult<()> {
        match position.board(mov.board) {
            Some(board) if is_dead(board) => Err(IllegalMove::BoardDead { board: mov.board }.into()),
            _ => Ok(()),
        }
    }
}

/// Precondition: the target square is empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with an illegal move if the target square is marked.
    #[instrument(skip(position))]
    pub fn check(mov: &Move, position: &Position) -> NotaktoResult<()> {
        match position.board(mov.board) {
            Some(board) if !board.is_empty(mov.cell) => Err(IllegalMove::SquareOccupied {
                board: mov.board,
                square: mov.square(),
            }
            .into()),
            _ => Ok(()),
        }
    }
}

/// Composite precondition: board exists, is live, and the square is empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(position))]
    pub fn check(mov: &Move, position: &Position) -> NotaktoResult<()> {
        BoardInRange::check(mov, position)?;
        BoardIsLive::check(mov, position)?;
        SquareIsEmpty::check(mov, position)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Board index in range
/// - Board is live
/// - Square is empty
///
/// Postconditions:
/// - Marks are monotonic
/// - Exactly one mark was added, on a live board
pub struct MoveContract;

impl Contract<Position, Move> for MoveContract {
    fn pre(position: &Position, action: &Move) -> NotaktoResult<()> {
        LegalMove::check(action, position)
    }

    fn post(before: &Position, after: &Position) -> NotaktoResult<()> {
        MoveInvariants::check_all(&Transition::new(before, after)).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Move postcondition failed");
            NotaktoError::new(NotaktoErrorKind::Contract(format!(
                "Postcondition failed: {}",
                descriptions
            )))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    fn position(boards: &[&str]) -> Position {
        Position::parse(boards).unwrap()
    }

    #[test]
    fn test_precondition_empty_square() {
        let game = Position::new(2).unwrap();
        assert!(MoveContract::pre(&game, &Move::human(1, Cell::Center)).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let game = position(&["----X----"]);
        let err = MoveContract::pre(&game, &Move::computer(0, Cell::Center)).unwrap_err();
        assert_eq!(
            err.kind(),
            &NotaktoErrorKind::IllegalMove(IllegalMove::SquareOccupied { board: 0, square: 4 })
        );
    }

    #[test]
    fn test_precondition_dead_board() {
        let game = position(&["---------", "XXX------"]);
        let err = MoveContract::pre(&game, &Move::human(1, Cell::Center)).unwrap_err();
        assert_eq!(
            err.kind(),
            &NotaktoErrorKind::IllegalMove(IllegalMove::BoardDead { board: 1 })
        );
    }

    #[test]
    fn test_precondition_board_out_of_range() {
        let game = Position::new(1).unwrap();
        let err = MoveContract::pre(&game, &Move::human(1, Cell::Center)).unwrap_err();
        assert!(matches!(err.kind(), NotaktoErrorKind::Precondition(_)));
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = position(&["---------"]);
        let after = position(&["----X----"]);
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = position(&["----X----"]);
        let after = position(&["X--------"]);
        let err = MoveContract::post(&before, &after).unwrap_err();
        assert!(matches!(err.kind(), NotaktoErrorKind::Contract(_)));
    }
}
