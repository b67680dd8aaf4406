//! Low-level bitboard operations.
//!
//! For efficiency, [`Bitboard`] operations are unchecked and may produce an
//! inconsistent board if invalid data is passed.
//!
//! Under the hood, all these operations work on u64 bitboards. By convention,
//! the MSB is the upper-left of the board, and uses row-major order.

use crate::utils;
use derive_more::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, From, Into, Not,
};
use std::fmt::{self, Display, Formatter};

/// Holds a single bit per location on an Othello board.
/// Wraps [`u64`] for efficient bit-twiddling, but avoids mixing with numerics.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    Default,
    From,
    Into,
    BitAnd,
    BitAndAssign,
    BitOr,
    BitOrAssign,
    BitXor,
    BitXorAssign,
    Not,
)]
pub struct Bitboard(u64);

/// Starting bitboard for Black: D5 and E4.
pub const BLACK_START: Bitboard = Bitboard(0x0000000810000000);

/// Starting bitboard for White: D4 and E5.
pub const WHITE_START: Bitboard = Bitboard(0x0000001008000000);

/// Every location except the leftmost column (A).
const NOT_A_FILE: u64 = 0x7f7f7f7f7f7f7f7f;

/// Every location except the rightmost column (H).
const NOT_H_FILE: u64 = 0xfefefefefefefefe;

impl Display for Bitboard {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let bitboard = *self;
        utils::format_grid(f, |location| {
            if (bitboard & Bitboard::from(location)).is_empty() {
                '.'
            } else {
                '#'
            }
        })
    }
}

impl Bitboard {
    /// Count the number of occupied spaces in the bitboard.
    #[inline]
    pub fn count_occupied(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Count the number of empty spaces in the bitboard.
    #[inline]
    pub fn count_empty(self) -> u8 {
        self.0.count_zeros() as u8
    }

    /// Return true if this bitboard is empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// One of the eight compass directions on the board. North is toward row 0.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

/// All eight directions, clockwise from North.
pub const DIRECTIONS: [Direction; 8] = [
    Direction::North,
    Direction::NorthEast,
    Direction::East,
    Direction::SouthEast,
    Direction::South,
    Direction::SouthWest,
    Direction::West,
    Direction::NorthWest,
];

impl Direction {
    /// Move every set location one step in this direction.
    /// Locations that would leave the board are dropped rather than wrapping around.
    #[inline]
    pub fn shift(self, bitboard: Bitboard) -> Bitboard {
        let bits = bitboard.0;
        Bitboard(match self {
            Direction::North => bits << 8,
            Direction::South => bits >> 8,
            Direction::East => (bits >> 1) & NOT_A_FILE,
            Direction::West => (bits << 1) & NOT_H_FILE,
            Direction::NorthEast => (bits << 7) & NOT_A_FILE,
            Direction::NorthWest => (bits << 9) & NOT_H_FILE,
            Direction::SouthEast => (bits >> 9) & NOT_A_FILE,
            Direction::SouthWest => (bits >> 7) & NOT_H_FILE,
        })
    }
}

/// Walk outward from `move_mask` in one direction and return the run of
/// opponent pieces it would capture: the contiguous opponent run starting next
/// to the move, if and only if that run is closed off by an active piece.
/// Runs ending at an empty space or the board edge capture nothing.
#[inline]
pub fn captures_in_direction(
    active: Bitboard,
    opponent: Bitboard,
    move_mask: Bitboard,
    direction: Direction,
) -> Bitboard {
    let mut run = Bitboard::default();
    let mut cursor = direction.shift(move_mask);

    while !(cursor & opponent).is_empty() {
        run |= cursor;
        cursor = direction.shift(cursor);
    }

    if (cursor & active).is_empty() {
        Bitboard::default()
    } else {
        run
    }
}

/// Compute every opponent piece flipped by playing `move_mask`, summed over all
/// eight directions. `move_mask` must be a one-hot bitboard.
#[inline]
pub fn flip_mask(active: Bitboard, opponent: Bitboard, move_mask: Bitboard) -> Bitboard {
    DIRECTIONS
        .iter()
        .fold(Bitboard::default(), |flips, &direction| {
            flips | captures_in_direction(active, opponent, move_mask, direction)
        })
}

/// Returns whether playing `move_mask` is legal for the active player:
/// the space is empty and at least one direction captures a piece.
#[inline]
pub fn is_legal_move(active: Bitboard, opponent: Bitboard, move_mask: Bitboard) -> bool {
    if !(move_mask & (active | opponent)).is_empty() {
        return false;
    }

    DIRECTIONS.iter().any(|&direction| {
        !captures_in_direction(active, opponent, move_mask, direction).is_empty()
    })
}

/// Compute a mask of the legal moves for the active player from
/// masks of the active player's pieces and the opponent's pieces.
/// Undefined behavior if an invalid Othello board is specified.
#[inline]
pub fn get_move_mask(active: Bitboard, opponent: Bitboard) -> Bitboard {
    let empties = !(active | opponent);
    let mut moves = Bitboard::default();

    for &direction in DIRECTIONS.iter() {
        // Smear our pieces across adjacent opponent runs. A run holds at most 6 pieces.
        let mut run = direction.shift(active) & opponent;
        for _ in 0..5 {
            run |= direction.shift(run) & opponent;
        }

        // One step past the end of a run is a capture if it is empty.
        moves |= direction.shift(run) & empties;
    }

    moves
}

/// Compute an updated board after a given move is made, returning new bitboards
/// for the active player and the opponent. `move_mask` must be a one-hot bitboard
/// indicating the move location.
///
/// Legality is not checked: the active piece is always placed (replacing any piece
/// already there), and only runs closed off by an active piece are flipped.
#[inline]
pub fn apply_move(
    active: Bitboard,
    opponent: Bitboard,
    move_mask: Bitboard,
) -> (Bitboard, Bitboard) {
    let flips = flip_mask(active, opponent, move_mask);

    let new_active = active | flips | move_mask;
    let new_opponent = opponent & !(flips | move_mask);

    (new_active, new_opponent)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOP_LEFT: Bitboard = Bitboard(1 << 63);
    const BOTTOM_RIGHT: Bitboard = Bitboard(1);

    #[test]
    fn shift_drops_pieces_at_the_edge() {
        assert!(Direction::North.shift(TOP_LEFT).is_empty());
        assert!(Direction::West.shift(TOP_LEFT).is_empty());
        assert!(Direction::NorthWest.shift(TOP_LEFT).is_empty());
        assert!(Direction::SouthWest.shift(TOP_LEFT).is_empty());
        assert!(Direction::South.shift(BOTTOM_RIGHT).is_empty());
        assert!(Direction::East.shift(BOTTOM_RIGHT).is_empty());
        assert!(Direction::SouthEast.shift(BOTTOM_RIGHT).is_empty());
        assert!(Direction::NorthEast.shift(BOTTOM_RIGHT).is_empty());
    }

    #[test]
    fn shift_moves_one_step() {
        assert_eq!(Direction::East.shift(TOP_LEFT), Bitboard(1 << 62));
        assert_eq!(Direction::South.shift(TOP_LEFT), Bitboard(1 << 55));
        assert_eq!(Direction::SouthEast.shift(TOP_LEFT), Bitboard(1 << 54));
        assert_eq!(Direction::West.shift(BOTTOM_RIGHT), Bitboard(1 << 1));
        assert_eq!(Direction::North.shift(BOTTOM_RIGHT), Bitboard(1 << 8));
        assert_eq!(Direction::NorthWest.shift(BOTTOM_RIGHT), Bitboard(1 << 9));
    }

    #[test]
    fn start_move_mask() {
        // D3, C4, F5, E6
        let expected = Bitboard(0x0000102004080000);
        assert_eq!(get_move_mask(BLACK_START, WHITE_START), expected);
    }

    #[test]
    fn move_mask_agrees_with_is_legal_move() {
        let moves = get_move_mask(BLACK_START, WHITE_START);
        for index in 0..64 {
            let move_mask = Bitboard(1 << index);
            assert_eq!(
                is_legal_move(BLACK_START, WHITE_START, move_mask),
                !(moves & move_mask).is_empty()
            );
        }
    }

    #[test]
    fn capture_needs_a_closing_piece() {
        // Row 0: B W W . and the move at the far end.
        let active = Bitboard(1 << 63);
        let opponent = Bitboard((1 << 62) | (1 << 61));
        let closed = Bitboard(1 << 60);
        assert_eq!(
            captures_in_direction(active, opponent, closed, Direction::West),
            opponent
        );

        // Same run with nothing behind it.
        assert!(captures_in_direction(Bitboard(0), opponent, closed, Direction::West).is_empty());
    }

    #[test]
    fn apply_move_flips_only_closed_runs() {
        let (black, white) = apply_move(BLACK_START, WHITE_START, Bitboard(1 << 44));
        assert_eq!(black.count_occupied(), 4);
        assert_eq!(white.count_occupied(), 1);
        assert!((black & white).is_empty());
    }

    #[test]
    fn display_marks_occupied_spaces() {
        let grid = BLACK_START.to_string();
        assert!(grid.starts_with("  A B C D E F G H\n1 . . . . . . . ."));
        assert!(grid.contains("\n4 . . . . # . . ."));
        assert!(grid.contains("\n5 . . . # . . . ."));
        assert_eq!(grid.matches('#').count(), 2);
    }
}
