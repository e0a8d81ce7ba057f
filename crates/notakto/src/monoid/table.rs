//! Precomputed Notakto monoid data.
//!
//! Products and board classes follow Plambeck and Whitehead,
//! "The Secrets of Notakto: Winning at X-only Tic-Tac-Toe" (2013).

use super::ELEMENT_COUNT;

/// Full 18x18 product table, indexed by element index.
pub(super) const PRODUCTS: [[u8; ELEMENT_COUNT]; ELEMENT_COUNT] = [
    [ 0,  1,  2,  3,  4,  5,  6,  7,  8,  9, 10, 11, 12, 13, 14, 15, 16, 17],
    [ 1,  0,  3,  2,  5,  4,  7,  6,  9,  8, 11, 10, 13, 12, 15, 14, 17, 16],
    [ 2,  3,  4,  5,  2,  3,  8,  9,  6,  7, 12, 13, 10, 11, 16, 17, 14, 15],
    [ 3,  2,  5,  4,  3,  2,  9,  8,  7,  6, 13, 12, 11, 10, 17, 16, 15, 14],
    [ 4,  5,  2,  3,  4,  5,  6,  7,  8,  9, 10, 11, 12, 13, 14, 15, 16, 17],
    [ 5,  4,  3,  2,  5,  4,  7,  6,  9,  8, 11, 10, 13, 12, 15, 14, 17, 16],
    [ 6,  7,  8,  9,  6,  7, 10, 11, 12, 13, 11, 10, 13, 12, 15, 14, 17, 16],
    [ 7,  6,  9,  8,  7,  6, 11, 10, 13, 12, 10, 11, 12, 13, 14, 15, 16, 17],
    [ 8,  9,  6,  7,  8,  9, 12, 13, 10, 11, 13, 12, 11, 10, 17, 16, 15, 14],
    [ 9,  8,  7,  6,  9,  8, 13, 12, 11, 10, 12, 13, 10, 11, 16, 17, 14, 15],
    [10, 11, 12, 13, 10, 11, 11, 10, 13, 12, 10, 11, 12, 13, 14, 15, 16, 17],
    [11, 10, 13, 12, 11, 10, 10, 11, 12, 13, 11, 10, 13, 12, 15, 14, 17, 16],
    [12, 13, 10, 11, 12, 13, 13, 12, 11, 10, 12, 13, 10, 11, 16, 17, 14, 15],
    [13, 12, 11, 10, 13, 12, 12, 13, 10, 11, 13, 12, 11, 10, 17, 16, 15, 14],
    [14, 15, 16, 17, 14, 15, 15, 14, 17, 16, 14, 15, 16, 17, 10, 11, 12, 13],
    [15, 14, 17, 16, 15, 14, 14, 15, 16, 17, 15, 14, 17, 16, 11, 10, 13, 12],
    [16, 17, 14, 15, 16, 17, 17, 16, 15, 14, 16, 17, 14, 15, 12, 13, 10, 11],
    [17, 16, 15, 14, 17, 16, 16, 17, 14, 15, 17, 16, 15, 14, 13, 12, 11, 10],
];

/// Class of every live board pattern that is not the identity.
///
/// Patterns use `-` for empty and `X` for marked. Missing patterns,
/// including every dead board, classify as the identity.
pub(super) const BOARD_CLASSES: [(&str, u8); 218] = [
    ("---------", 6),
    ("-------XX", 15),
    ("------X-X", 2),
    ("------XX-", 15),
    ("-----X--X", 15),
    ("-----X-X-", 1),
    ("-----X-XX", 2),
    ("-----XX--", 2),
    ("-----XX-X", 1),
    ("-----XXX-", 14),
    ("----X----", 10),
    ("----X---X", 2),
    ("----X--X-", 2),
    ("----X--XX", 3),
    ("----X-X--", 2),
    ("----X-X-X", 1),
    ("----X-XX-", 3),
    ("----XX---", 2),
    ("----XX--X", 3),
    ("----XX-X-", 3),
    ("----XX-XX", 1),
    ("----XXX--", 1),
    ("----XXX-X", 2),
    ("----XXXX-", 2),
    ("---X----X", 2),
    ("---X---X-", 1),
    ("---X---XX", 14),
    ("---X--X--", 15),
    ("---X--X-X", 1),
    ("---X--XX-", 2),
    ("---X-X---", 1),
    ("---X-X--X", 14),
    ("---X-X-X-", 2),
    ("---X-X-XX", 1),
    ("---X-XX--", 14),
    ("---X-XX-X", 2),
    ("---X-XXX-", 1),
    ("---XX----", 2),
    ("---XX---X", 1),
    ("---XX--X-", 3),
    ("---XX--XX", 2),
    ("---XX-X--", 3),
    ("---XX-X-X", 2),
    ("---XX-XX-", 1),
    ("--X-----X", 2),
    ("--X----X-", 2),
    ("--X----XX", 1),
    ("--X---X--", 1),
    ("--X---X-X", 3),
    ("--X---XX-", 14),
    ("--X--X---", 15),
    ("--X--X-X-", 14),
    ("--X--XX--", 14),
    ("--X--XXX-", 3),
    ("--X-X----", 2),
    ("--X-X---X", 1),
    ("--X-X--X-", 1),
    ("--X-X--XX", 2),
    ("--X-XX---", 3),
    ("--X-XX-X-", 2),
    ("--XX-----", 2),
    ("--XX----X", 1),
    ("--XX---XX", 2),
    ("--XX--X--", 14),
    ("--XX--X-X", 2),
    ("--XX--XX-", 1),
    ("--XX-X---", 14),
    ("--XX-X-X-", 3),
    ("--XX-XX--", 1),
    ("--XX-XXX-", 2),
    ("--XXX----", 1),
    ("--XXX---X", 2),
    ("--XXX--X-", 2),
    ("--XXX--XX", 1),
    ("-X------X", 2),
    ("-X-----X-", 1),
    ("-X-----XX", 14),
    ("-X----X--", 2),
    ("-X----X-X", 1),
    ("-X----XX-", 14),
    ("-X---X---", 1),
    ("-X---X--X", 14),
    ("-X---X-X-", 2),
    ("-X---X-XX", 1),
    ("-X---XX-X", 2),
    ("-X---XXX-", 3),
    ("-X--X----", 2),
    ("-X--X---X", 1),
    ("-X--X-X--", 1),
    ("-X--X-X-X", 2),
    ("-X--XX---", 3),
    ("-X--XX--X", 2),
    ("-X--XXX--", 2),
    ("-X--XXX-X", 1),
    ("-X-X-----", 1),
    ("-X-X---X-", 2),
    ("-X-X---XX", 3),
    ("-X-X--X--", 14),
    ("-X-X--X-X", 2),
    ("-X-X--XX-", 1),
    ("-X-X-X---", 2),
    ("-X-X-X--X", 3),
    ("-X-X-X-X-", 1),
    ("-X-X-X-XX", 2),
    ("-X-X-XX--", 3),
    ("-X-X-XX-X", 1),
    ("-X-X-XXX-", 2),
    ("-X-XX----", 3),
    ("-X-XX---X", 2),
    ("-X-XX-X--", 2),
    ("-X-XX-X-X", 1),
    ("-XX------", 15),
    ("-XX-----X", 1),
    ("-XX----X-", 14),
    ("-XX----XX", 2),
    ("-XX---X--", 14),
    ("-XX---X-X", 2),
    ("-XX---XX-", 1),
    ("-XX--X---", 2),
    ("-XX--X-X-", 1),
    ("-XX--XX--", 1),
    ("-XX--XXX-", 2),
    ("-XX-X----", 3),
    ("-XX-X---X", 2),
    ("-XX-XX---", 1),
    ("-XXX-----", 14),
    ("-XXX----X", 2),
    ("-XXX---X-", 3),
    ("-XXX---XX", 1),
    ("-XXX--X--", 3),
    ("-XXX--X-X", 1),
    ("-XXX--XX-", 2),
    ("-XXX-X---", 1),
    ("-XXX-X-X-", 2),
    ("-XXX-XX--", 2),
    ("-XXX-XXX-", 1),
    ("-XXXX----", 2),
    ("-XXXX---X", 1),
    ("X-------X", 1),
    ("X------X-", 2),
    ("X------XX", 14),
    ("X-----X--", 2),
    ("X-----X-X", 3),
    ("X-----XX-", 1),
    ("X----X---", 2),
    ("X----X--X", 14),
    ("X----X-XX", 1),
    ("X----XX--", 1),
    ("X----XX-X", 2),
    ("X----XXX-", 2),
    ("X---X----", 2),
    ("X---X--X-", 1),
    ("X---X-X--", 1),
    ("X---X-XX-", 2),
    ("X---XX---", 1),
    ("X---XX-X-", 2),
    ("X---XXX--", 2),
    ("X---XXXX-", 1),
    ("X--X-----", 15),
    ("X--X----X", 14),
    ("X--X---X-", 14),
    ("X--X---XX", 3),
    ("X--X-X---", 14),
    ("X--X-X--X", 1),
    ("X--X-X-X-", 3),
    ("X--X-X-XX", 2),
    ("X--XX----", 3),
    ("X--XX--X-", 2),
    ("X-X------", 2),
    ("X-X-----X", 3),
    ("X-X----X-", 1),
    ("X-X----XX", 2),
    ("X-X---X--", 3),
    ("X-X---X-X", 1),
    ("X-X---XX-", 2),
    ("X-X--X---", 1),
    ("X-X--X-X-", 2),
    ("X-X--XX--", 2),
    ("X-X--XXX-", 1),
    ("X-X-X----", 1),
    ("X-X-X--X-", 2),
    ("X-X-XX---", 2),
    ("X-X-XX-X-", 1),
    ("X-XX-----", 1),
    ("X-XX----X", 2),
    ("X-XX---X-", 2),
    ("X-XX---XX", 1),
    ("X-XX-X---", 2),
    ("X-XX-X-X-", 1),
    ("X-XXX----", 2),
    ("X-XXX--X-", 1),
    ("XX-------", 15),
    ("XX------X", 14),
    ("XX-----X-", 14),
    ("XX-----XX", 1),
    ("XX----X--", 1),
    ("XX----X-X", 2),
    ("XX----XX-", 2),
    ("XX---X---", 14),
    ("XX---X--X", 3),
    ("XX---X-X-", 3),
    ("XX---X-XX", 2),
    ("XX---XX--", 2),
    ("XX---XX-X", 1),
    ("XX---XXX-", 1),
    ("XX--X----", 3),
    ("XX--X-X--", 2),
    ("XX--XX---", 2),
    ("XX--XXX--", 1),
    ("XX-X-----", 2),
    ("XX-X----X", 1),
    ("XX-X---X-", 1),
    ("XX-X---XX", 2),
    ("XX-X-X---", 1),
    ("XX-X-X--X", 2),
    ("XX-X-X-X-", 2),
    ("XX-X-X-XX", 1),
    ("XX-XX----", 1),
];

// Every product must itself be an element.
const _: () = {
    let mut a = 0;
    while a < ELEMENT_COUNT {
        let mut b = 0;
        while b < ELEMENT_COUNT {
            assert!((PRODUCTS[a][b] as usize) < ELEMENT_COUNT);
            b += 1;
        }
        a += 1;
    }
};

// Every tabulated class must be an element.
const _: () = {
    let mut i = 0;
    while i < BOARD_CLASSES.len() {
        assert!((BOARD_CLASSES[i].1 as usize) < ELEMENT_COUNT);
        i += 1;
    }
};
