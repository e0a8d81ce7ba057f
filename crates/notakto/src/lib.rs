//! Notakto game engine.
//!
//! Notakto is tic-tac-toe played on several boards at once where both
//! players place the same mark. A board with a three-in-a-row is dead,
//! and whoever kills the last live board loses.
//!
//! # Architecture
//!
//! - **Rules**: dead-board detection and copy-on-write move application
//! - **Monoid**: the 18-element misère quotient and board classification table
//! - **Evaluator**: folds board classes into a position verdict
//! - **Selector**: the computer player
//! - **Game**: start/game-over predicates and the human move entry point
//!
//! # Example
//!
//! ```
//! use notakto::{MoveSelector, Position, human_move, is_losing_for_mover};
//!
//! # fn example() -> notakto::NotaktoResult<()> {
//! let start = Position::new(1)?;
//! let after_human = human_move(&start, 0, 0)?;
//! let reply = MoveSelector::seeded(42).select(&after_human)?;
//! assert!(reply.leaves_opponent_lost());
//! assert!(is_losing_for_mover(reply.position()));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod cell;
mod contracts;
mod error;
mod evaluator;
mod game;
mod invariants;
mod monoid;
mod position;
mod rules;
mod selector;
mod types;

// Crate-level exports - Board types
pub use cell::Cell;
pub use position::Position;
pub use types::{Board, EMPTY_SYMBOL, Mark, Square};

// Crate-level exports - Errors
pub use error::{IllegalMove, NotaktoError, NotaktoErrorKind, NotaktoResult};

// Crate-level exports - Rules
pub use rules::{LINES, apply_move, is_dead};

// Crate-level exports - Monoid
pub use monoid::{ELEMENT_COUNT, LOSING_FOR_MOVER, MonoidElement, classify, multiply};

// Crate-level exports - Evaluation
pub use evaluator::{is_losing_for_mover, position_value};

// Crate-level exports - Moves and contracts
pub use action::Move;
pub use contracts::{
    BoardInRange, BoardIsLive, Contract, LegalMove, MoveContract, SquareIsEmpty,
};
pub use invariants::{
    Invariant, InvariantSet, InvariantViolation, MonotonicBoards, MoveInvariants,
    SingleMarkAdded, Transition,
};

// Crate-level exports - Game flow
pub use game::{human_move, is_game_over, is_start_position, play};
pub use selector::{ComputerMove, MoveSelector, SeededSelector, computer_move, select_from};
