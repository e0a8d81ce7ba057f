//! Computer move selection.
//!
//! The computer scans every square once, starting from a random offset,
//! and takes the first legal move that leaves the opponent in a lost
//! position. If the computer is already lost, any legal move will do and
//! the first one found is played.

use crate::action::Move;
use crate::error::{NotaktoError, NotaktoErrorKind, NotaktoResult};
use crate::evaluator::is_losing_for_mover;
use crate::game::{is_game_over, play};
use crate::rules::is_dead;
use crate::{Cell, Position};
use derive_getters::Getters;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument, warn};

/// The computer's reply to a position.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ComputerMove {
    /// Position after the move.
    position: Position,
    /// The move played.
    #[getter(rename = "played")]
    mov: Move,
    /// Whether the opponent is now in a theoretically lost position.
    #[getter(skip)]
    leaves_opponent_lost: bool,
}

impl ComputerMove {
    /// True if the human can no longer win against perfect play.
    pub fn leaves_opponent_lost(&self) -> bool {
        self.leaves_opponent_lost
    }

    /// Consumes the reply, returning the new position.
    pub fn into_position(self) -> Position {
        self.position
    }
}

/// Picks computer moves using an injected random source.
#[derive(Debug, Clone)]
pub struct MoveSelector<R> {
    rng: R,
}

impl<R: Rng> MoveSelector<R> {
    /// Creates a selector drawing scan offsets from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Chooses the computer's reply to `position`.
    pub fn select(&mut self, position: &Position) -> NotaktoResult<ComputerMove> {
        computer_move(position, &mut self.rng)
    }
}

/// Selector backed by the standard seedable generator.
pub type SeededSelector = MoveSelector<StdRng>;

impl MoveSelector<StdRng> {
    /// Creates a reproducible selector from a fixed seed.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Creates a selector seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

/// Chooses the computer's reply, drawing the scan offset from `rng`.
///
/// Call only while some board is live; an all-dead position is reported
/// as [`NotaktoErrorKind::GameOver`].
#[instrument(skip(position, rng), fields(boards = position.len()))]
pub fn computer_move<R: Rng>(position: &Position, rng: &mut R) -> NotaktoResult<ComputerMove> {
    if is_game_over(position) {
        return Err(NotaktoError::new(NotaktoErrorKind::GameOver));
    }
    let start = rng.random_range(0..9 * position.len());
    select_from(position, start)
}

/// Chooses the computer's reply, scanning from a fixed offset.
///
/// Candidates are visited in the order `start, start + 1, ...` modulo
/// `9 * boards`, candidate `n` addressing square `n % 9` of board `n / 9`.
#[instrument(skip(position), fields(boards = position.len()))]
pub fn select_from(position: &Position, start: usize) -> NotaktoResult<ComputerMove> {
    scan(position, start, is_losing_for_mover)
}

fn scan(
    position: &Position,
    start: usize,
    losing: impl Fn(&Position) -> bool,
) -> NotaktoResult<ComputerMove> {
    if is_game_over(position) {
        return Err(NotaktoError::new(NotaktoErrorKind::GameOver));
    }

    let total = 9 * position.len();
    let start = start % total;
    let already_losing = losing(position);
    debug!(start, total, already_losing, "Scanning for computer move");

    for offset in 0..total {
        let candidate = (start + offset) % total;
        let board_index = candidate / 9;
        let board = &position.boards()[board_index];
        if is_dead(board) {
            continue;
        }
        let cell = Cell::ALL[candidate % 9];
        if !board.is_empty(cell) {
            continue;
        }

        let mov = Move::computer(board_index, cell);
        let next = play(position, mov)?;

        if already_losing {
            debug!(%mov, "Position already lost, playing first legal move");
            return Ok(ComputerMove {
                position: next,
                mov,
                leaves_opponent_lost: false,
            });
        }

        if losing(&next) {
            info!(%mov, "Found move leaving opponent lost");
            return Ok(ComputerMove {
                position: next,
                mov,
                leaves_opponent_lost: true,
            });
        }
    }

    warn!(%position, "No position-reversing move found");
    Err(NotaktoError::new(NotaktoErrorKind::AlgebraicInvariant(
        format!("no position-reversing move from {}", position),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(boards: &[&str]) -> Position {
        Position::parse(boards).unwrap()
    }

    #[test]
    fn test_fixed_start_is_deterministic() {
        // Fresh single board: only the center leaves the opponent lost.
        let start = Position::new(1).unwrap();
        for offset in 0..9 {
            let reply = select_from(&start, offset).unwrap();
            assert_eq!(reply.played().cell, Cell::Center);
            assert!(reply.leaves_opponent_lost());
            assert_eq!(reply.position().encode(), vec!["----x----"]);
        }
    }

    #[test]
    fn test_lost_position_plays_first_legal_square() {
        // Two fresh boards is lost for the mover; scan from square 3.
        let start = Position::new(2).unwrap();
        assert!(is_losing_for_mover(&start));
        let reply = select_from(&start, 3).unwrap();
        assert_eq!(*reply.played(), Move::computer(0, Cell::MiddleLeft));
        assert!(!reply.leaves_opponent_lost());
    }

    #[test]
    fn test_scan_wraps_and_skips_dead_boards() {
        let game = position(&["---------", "XXX------"]);
        // Start inside the dead board; the scan must wrap to board 0.
        let reply = select_from(&game, 12).unwrap();
        assert_eq!(reply.played().board, 0);
        assert_eq!(reply.position().board(1), game.board(1));
    }

    #[test]
    fn test_game_over_is_distinct_error() {
        let over = position(&["XXX------"]);
        let err = select_from(&over, 0).unwrap_err();
        assert_eq!(err.kind(), &NotaktoErrorKind::GameOver);
        let err = computer_move(&over, &mut StdRng::seed_from_u64(1)).unwrap_err();
        assert_eq!(err.kind(), &NotaktoErrorKind::GameOver);
    }

    #[test]
    fn test_large_start_wraps() {
        let start = Position::new(1).unwrap();
        let reply = select_from(&start, usize::MAX).unwrap();
        assert_eq!(reply.played().cell, Cell::Center);

        let game = Position::new(2).unwrap();
        let wrapped = select_from(&game, usize::MAX).unwrap();
        let reduced = select_from(&game, usize::MAX % 18).unwrap();
        assert_eq!(wrapped, reduced);
    }

    #[test]
    fn test_broken_classification_is_invariant_error() {
        // A classifier that never reports a loss leaves no reversing move.
        let start = Position::new(1).unwrap();
        let err = scan(&start, 0, |_| false).unwrap_err();
        assert!(matches!(
            err.kind(),
            NotaktoErrorKind::AlgebraicInvariant(_)
        ));
        assert_ne!(err.kind(), &NotaktoErrorKind::GameOver);
    }

    #[test]
    fn test_seeded_selector_is_reproducible() {
        let game = Position::new(3).unwrap();
        let first = MoveSelector::seeded(7).select(&game).unwrap();
        let second = MoveSelector::seeded(7).select(&game).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_input_position_untouched() {
        let game = position(&["X--------", "---------"]);
        let before = game.clone();
        let _ = MoveSelector::seeded(3).select(&game).unwrap();
        assert_eq!(game, before);
    }
}
