//! Whole-position evaluation through the monoid.

use crate::monoid::{MonoidElement, classify};
use crate::Position;

/// Product of the classes of every board in the position.
///
/// Dead boards classify as the identity and drop out of the product.
pub fn position_value(position: &Position) -> MonoidElement {
    position.boards().iter().map(classify).product()
}

/// True if the player about to move has lost under perfect opposing play.
pub fn is_losing_for_mover(position: &Position) -> bool {
    position_value(position).is_losing_for_mover()
}
