//! Single mark: a move adds exactly one mark, on a board that was live.

use super::{Invariant, Transition};
use crate::rules::is_dead;
use crate::Square;

/// Invariant: exactly one square went from empty to marked, on a live board.
pub struct SingleMarkAdded;

impl Invariant<Transition<'_>> for SingleMarkAdded {
    fn holds(transition: &Transition<'_>) -> bool {
        let before = transition.before.boards();
        let after = transition.after.boards();
        if before.len() != after.len() {
            return false;
        }

        let mut added = 0;
        for (old, new) in before.iter().zip(after) {
            for (was, now) in old.squares().iter().zip(new.squares()) {
                if was == now {
                    continue;
                }
                if *was != Square::Empty || !now.is_marked() || is_dead(old) {
                    return false;
                }
                added += 1;
            }
        }
        added == 1
    }

    fn description() -> &'static str {
        "Each move adds exactly one mark to a live board"
    }
}
