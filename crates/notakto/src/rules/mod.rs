//! Board rules for Notakto.
//!
//! Pure functions over a single board. Rules are separated from board
//! storage so the evaluator and move contracts can compose them.

pub mod dead;
pub mod moves;

pub use dead::{LINES, is_dead};
pub use moves::apply_move;
