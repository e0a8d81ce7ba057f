//! Monotonic boards: marks are never removed or recoloured.

use super::{Invariant, Transition};
use crate::Square;

/// Invariant: every mark present before a move is still there after it.
pub struct MonotonicBoards;

impl Invariant<Transition<'_>> for MonotonicBoards {
    fn holds(transition: &Transition<'_>) -> bool {
        let before = transition.before.boards();
        let after = transition.after.boards();

        before.len() == after.len()
            && before.iter().zip(after).all(|(old, new)| {
                old.squares()
                    .iter()
                    .zip(new.squares())
                    .all(|(was, now)| *was == Square::Empty || was == now)
            })
    }

    fn description() -> &'static str {
        "Marks are monotonic (never removed or recoloured)"
    }
}
