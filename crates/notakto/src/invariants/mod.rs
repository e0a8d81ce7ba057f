//! First-class transition invariants.
//!
//! Invariants are properties every legal move must preserve. They are
//! checked in debug builds by the move contract and can be tested on their own.

pub mod monotonic_boards;
pub mod single_mark;

pub use monotonic_boards::MonotonicBoards;
pub use single_mark::SingleMarkAdded;

use crate::Position;

/// A position before and after one move.
#[derive(Debug, Clone, Copy)]
pub struct Transition<'a> {
    /// Position the move was applied to.
    pub before: &'a Position,
    /// Position the move produced.
    pub after: &'a Position,
}

impl<'a> Transition<'a> {
    /// Creates a new transition.
    pub fn new(before: &'a Position, after: &'a Position) -> Self {
        Self { before, after }
    }
}

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Every invariant a single move must keep.
pub type MoveInvariants = (MonotonicBoards, SingleMarkAdded);
