//! The Notakto misère quotient monoid.
//!
//! Each live board reduces to one of 18 monoid elements. A multi-board
//! position is lost for the player to move exactly when the product of
//! its board elements falls in [`LOSING_FOR_MOVER`].

mod table;

use crate::Board;
use serde::Serialize;
use std::sync::OnceLock;
use table::{BOARD_CLASSES, PRODUCTS};

/// Number of elements in the monoid.
pub const ELEMENT_COUNT: usize = 18;

/// Official names, indexed by element.
const NAMES: [&str; ELEMENT_COUNT] = [
    "1", "a", "b", "ab", "b²", "ab²", "c", "ac", "bc", "abc", "c²", "ac²", "bc²", "abc²", "d",
    "ad", "bd", "abd",
];

/// An element of the Notakto monoid, index 0-17.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct MonoidElement(u8);

/// Elements whose presence at the start of a turn means the mover has lost.
pub const LOSING_FOR_MOVER: [MonoidElement; 4] = [
    MonoidElement(1),
    MonoidElement(4),
    MonoidElement(8),
    MonoidElement(10),
];

impl MonoidElement {
    /// The multiplicative identity, also the class of every dead board.
    pub const IDENTITY: MonoidElement = MonoidElement(0);

    /// Creates an element from its index.
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < ELEMENT_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Index of this element (0-17).
    pub fn index(self) -> u8 {
        self.0
    }

    /// Official algebraic name, e.g. `ab²`.
    pub fn name(self) -> &'static str {
        NAMES[self.0 as usize]
    }

    /// All 18 elements in index order.
    pub fn all() -> impl Iterator<Item = MonoidElement> {
        (0..ELEMENT_COUNT as u8).map(MonoidElement)
    }

    /// Monoid product. Commutative and associative.
    pub fn multiply(self, other: MonoidElement) -> MonoidElement {
        MonoidElement(PRODUCTS[self.0 as usize][other.0 as usize])
    }

    /// True if a position with this product is lost for the player to move.
    pub fn is_losing_for_mover(self) -> bool {
        LOSING_FOR_MOVER.contains(&self)
    }
}

impl Default for MonoidElement {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl std::ops::Mul for MonoidElement {
    type Output = MonoidElement;

    fn mul(self, rhs: MonoidElement) -> MonoidElement {
        self.multiply(rhs)
    }
}

impl std::iter::Product for MonoidElement {
    fn product<I: Iterator<Item = MonoidElement>>(iter: I) -> Self {
        iter.fold(MonoidElement::IDENTITY, MonoidElement::multiply)
    }
}

impl std::fmt::Display for MonoidElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Monoid product of two elements.
pub fn multiply(a: MonoidElement, b: MonoidElement) -> MonoidElement {
    a.multiply(b)
}

static CLASS_BY_MASK: OnceLock<[MonoidElement; 512]> = OnceLock::new();

fn build_class_map() -> [MonoidElement; 512] {
    let mut classes = [MonoidElement::IDENTITY; 512];
    for (pattern, class) in BOARD_CLASSES {
        let mask = pattern
            .bytes()
            .enumerate()
            .filter(|(_, b)| *b != b'-')
            .fold(0usize, |mask, (i, _)| mask | (1 << i));
        classes[mask] = MonoidElement(class);
    }
    classes
}

/// Monoid class of a single board.
///
/// Mark colour is ignored. Patterns absent from the table, which includes
/// every dead board, classify as the identity.
pub fn classify(board: &Board) -> MonoidElement {
    CLASS_BY_MASK.get_or_init(build_class_map)[board.marked_mask() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::is_dead;
    use std::collections::HashSet;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_identity() {
        for a in MonoidElement::all() {
            assert_eq!(a * MonoidElement::IDENTITY, a);
            assert_eq!(MonoidElement::IDENTITY * a, a);
        }
    }

    #[test]
    fn test_multiply_is_commutative() {
        for a in MonoidElement::all() {
            for b in MonoidElement::all() {
                assert_eq!(multiply(a, b), multiply(b, a), "{} * {}", a, b);
            }
        }
    }

    #[test]
    fn test_multiply_is_associative() {
        for a in MonoidElement::all() {
            for b in MonoidElement::all() {
                for c in MonoidElement::all() {
                    assert_eq!((a * b) * c, a * (b * c), "({} * {}) * {}", a, b, c);
                }
            }
        }
    }

    #[test]
    fn test_known_products() {
        let c = MonoidElement::new(6).unwrap();
        let c2 = MonoidElement::new(10).unwrap();
        // c * c = c², and c³ = ac²
        assert_eq!(c * c, c2);
        assert_eq!((c * c * c).name(), "ac²");
        // a² = 1
        let a = MonoidElement::new(1).unwrap();
        assert_eq!(a * a, MonoidElement::IDENTITY);
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(MonoidElement::new(17).is_some());
        assert!(MonoidElement::new(18).is_none());
    }

    #[test]
    fn test_product_folds_from_identity() {
        let empty: MonoidElement = std::iter::empty().product();
        assert_eq!(empty, MonoidElement::IDENTITY);

        let c = MonoidElement::new(6).unwrap();
        let folded: MonoidElement = [c, c].into_iter().product();
        assert_eq!(folded, c * c);
    }

    #[test]
    fn test_classify_reference_boards() {
        assert_eq!(classify(&Board::new()).index(), 6);
        assert_eq!(classify(&board("----X----")).index(), 10);
        assert_eq!(classify(&board("X--------")).index(), 0);
        assert_eq!(classify(&board("-X-------")).index(), 0);
        assert_eq!(classify(&board("XX-------")).index(), 15);
    }

    #[test]
    fn test_classify_ignores_colour() {
        assert_eq!(classify(&board("----x----")), classify(&board("----X----")));
        assert_eq!(classify(&board("xX-------")), classify(&board("XX-------")));
    }

    #[test]
    fn test_dead_boards_classify_as_identity() {
        for mask in 0u16..512 {
            let encoding: String = (0..9)
                .map(|i| if mask & (1 << i) != 0 { 'X' } else { '-' })
                .collect();
            let b = board(&encoding);
            if is_dead(&b) {
                assert_eq!(classify(&b), MonoidElement::IDENTITY, "{}", encoding);
            }
        }
    }

    #[test]
    fn test_table_patterns_are_well_formed() {
        let mut seen = HashSet::new();
        for (pattern, _) in BOARD_CLASSES {
            assert_eq!(pattern.len(), 9, "{:?}", pattern);
            assert!(pattern.chars().all(|c| c == '-' || c == 'X'), "{:?}", pattern);
            assert!(!is_dead(&board(pattern)), "{:?} is dead", pattern);
            assert!(seen.insert(pattern), "{:?} listed twice", pattern);
        }
    }

    #[test]
    fn test_classes_are_symmetric() {
        const ROTATE: [usize; 9] = [6, 3, 0, 7, 4, 1, 8, 5, 2];
        const REFLECT: [usize; 9] = [2, 1, 0, 5, 4, 3, 8, 7, 6];

        let permute = |s: &str, map: &[usize; 9]| -> String {
            let chars: Vec<char> = s.chars().collect();
            map.iter().map(|&i| chars[i]).collect()
        };

        for (pattern, _) in BOARD_CLASSES {
            let expected = classify(&board(pattern));
            let mut current = pattern.to_string();
            for _ in 0..4 {
                current = permute(&current, &ROTATE);
                assert_eq!(classify(&board(&current)), expected, "{}", current);
                let mirrored = permute(&current, &REFLECT);
                assert_eq!(classify(&board(&mirrored)), expected, "{}", mirrored);
            }
        }
    }

    #[test]
    fn test_losing_set() {
        let losing: Vec<u8> = MonoidElement::all()
            .filter(|e| e.is_losing_for_mover())
            .map(MonoidElement::index)
            .collect();
        assert_eq!(losing, vec![1, 4, 8, 10]);
    }

    #[test]
    fn test_names() {
        assert_eq!(MonoidElement::IDENTITY.to_string(), "1");
        assert_eq!(MonoidElement::new(5).unwrap().to_string(), "ab²");
        assert_eq!(MonoidElement::new(17).unwrap().to_string(), "abd");
    }
}
