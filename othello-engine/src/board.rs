//! The Othello board and its rules: legal moves, stone flipping, and scoring.
//!
//! [`Board`] stores one [`Bitboard`] per colour. Its operations take the player
//! to move as an argument and never validate their preconditions; use
//! [`Game`](crate::Game) for a checked interface.

use crate::bitboard::{self, Bitboard, BLACK_START, WHITE_START};
use crate::game::Player;
use crate::{utils, Location, LocationList, NUM_SPACES};
use derive_more::{Display, Error};
use std::fmt;

/// The contents of one space on the board.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl Cell {
    /// The numeric encoding of a cell: 0 for empty, +1 for black, -1 for white.
    pub fn sign(self) -> i8 {
        match self {
            Cell::Empty => 0,
            Cell::Black => 1,
            Cell::White => -1,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

/// Stone counts for both colours.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Display)]
#[display(fmt = "Black {} - White {}", black, white)]
pub struct Scores {
    pub black: u8,
    pub white: u8,
}

/// The result of a finished game.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Display)]
pub enum Verdict {
    #[display(fmt = "Black wins")]
    BlackWins,
    #[display(fmt = "White wins")]
    WhiteWins,
    #[display(fmt = "Draw")]
    Draw,
}

impl Verdict {
    /// Decide the winner by majority of stones.
    pub fn from_scores(scores: Scores) -> Self {
        use std::cmp::Ordering;

        match scores.black.cmp(&scores.white) {
            Ordering::Greater => Verdict::BlackWins,
            Ordering::Less => Verdict::WhiteWins,
            Ordering::Equal => Verdict::Draw,
        }
    }

    /// The winning player, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            Verdict::BlackWins => Some(Player::Black),
            Verdict::WhiteWins => Some(Player::White),
            Verdict::Draw => None,
        }
    }
}

/// An 8x8 Othello board, stored as one bitboard per colour.
/// No location is ever set in both bitboards.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Board {
    pub black: Bitboard,
    pub white: Bitboard,
}

impl Default for Board {
    fn default() -> Self {
        Self::initialize()
    }
}

impl Board {
    /// The standard opening: D4 and E5 white, E4 and D5 black, all else empty.
    pub const fn initialize() -> Self {
        Self {
            black: BLACK_START,
            white: WHITE_START,
        }
    }

    /// Get the bitboards for `player` and their opponent, in that order.
    #[inline]
    fn split(self, player: Player) -> (Bitboard, Bitboard) {
        match player {
            Player::Black => (self.black, self.white),
            Player::White => (self.white, self.black),
        }
    }

    /// Rebuild a board from the bitboards of `player` and their opponent.
    #[inline]
    fn join(player: Player, active: Bitboard, opponent: Bitboard) -> Self {
        match player {
            Player::Black => Self {
                black: active,
                white: opponent,
            },
            Player::White => Self {
                black: opponent,
                white: active,
            },
        }
    }

    /// Get the bitboard of `player`'s stones.
    #[inline]
    pub fn stones(self, player: Player) -> Bitboard {
        self.split(player).0
    }

    /// Get what occupies `loc`.
    pub fn cell(self, loc: Location) -> Cell {
        let mask = Bitboard::from(loc);
        if !(self.black & mask).is_empty() {
            Cell::Black
        } else if !(self.white & mask).is_empty() {
            Cell::White
        } else {
            Cell::Empty
        }
    }

    /// Returns whether `player` may place a stone at `loc`: the space is empty, and in at
    /// least one direction a contiguous run of opponent stones is closed off by `player`.
    pub fn is_legal(self, loc: Location, player: Player) -> bool {
        let (active, opponent) = self.split(player);
        bitboard::is_legal_move(active, opponent, loc.into())
    }

    /// Get every location where `player` may legally move.
    #[inline]
    pub fn legal_moves(self, player: Player) -> LocationList {
        let (active, opponent) = self.split(player);
        bitboard::get_move_mask(active, opponent).into()
    }

    /// Get the opponent stones that `player` would flip by playing at `loc`.
    pub fn flips(self, loc: Location, player: Player) -> LocationList {
        let (active, opponent) = self.split(player);
        bitboard::flip_mask(active, opponent, loc.into()).into()
    }

    /// Place a stone for `player` at `loc` and flip every captured run.
    ///
    /// The move is not validated. On an illegal location the stone is still placed,
    /// and only runs that happen to be closed off by `player` are flipped.
    #[inline]
    pub fn apply_move(self, loc: Location, player: Player) -> Self {
        let (active, opponent) = self.split(player);
        let (active, opponent) = bitboard::apply_move(active, opponent, loc.into());
        Self::join(player, active, opponent)
    }

    /// Count `player`'s stones.
    #[inline]
    pub fn count(self, player: Player) -> u8 {
        self.stones(player).count_occupied()
    }

    /// Count both players' stones.
    pub fn scores(self) -> Scores {
        Scores {
            black: self.count(Player::Black),
            white: self.count(Player::White),
        }
    }

    /// Get a mask indicating where the occupied spaces are.
    #[inline]
    pub fn occupied_mask(self) -> Bitboard {
        self.black | self.white
    }

    /// Count the empty spaces.
    #[inline]
    pub fn empty_count(self) -> u8 {
        self.occupied_mask().count_empty()
    }

    /// The game is over when neither player has a legal move.
    pub fn is_terminal(self) -> bool {
        self.legal_moves(Player::Black).is_empty() && self.legal_moves(Player::White).is_empty()
    }

    /// The result of the game, or None if it is still in progress.
    pub fn verdict(self) -> Option<Verdict> {
        if self.is_terminal() {
            Some(Verdict::from_scores(self.scores()))
        } else {
            None
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = *self;
        utils::format_grid(f, |loc| match board.cell(loc) {
            Cell::Empty => '.',
            Cell::Black => 'X',
            Cell::White => 'O',
        })
    }
}

#[derive(Debug, Display, Error, PartialEq)]
pub enum ParseBoardError {
    #[display(fmt = "expected 64 spaces, found {}", found)]
    WrongLength { found: usize },
    #[display(fmt = "unrecognized piece {:?}", piece)]
    UnknownPiece { piece: char },
}

/// Parse a board from 64 characters in row-major order, ignoring whitespace.
/// `X`, `#` or `B` is black; `O` or `W` is white; `-` or `.` is empty.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let pieces: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if pieces.len() != NUM_SPACES {
            return Err(ParseBoardError::WrongLength {
                found: pieces.len(),
            });
        }

        let mut black = Bitboard::default();
        let mut white = Bitboard::default();

        for (loc, &piece) in Location::all().zip(pieces.iter()) {
            match piece.to_ascii_uppercase() {
                'X' | '#' | 'B' => black |= Bitboard::from(loc),
                'O' | 'W' => white |= Bitboard::from(loc),
                '-' | '.' => {}
                _ => return Err(ParseBoardError::UnknownPiece { piece }),
            }
        }

        Ok(Self { black, white })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: usize, col: usize) -> Location {
        Location::from_coords(row, col)
    }

    #[test]
    fn initial_position() {
        let board = Board::initialize();

        assert_eq!(board.cell(at(3, 3)), Cell::White);
        assert_eq!(board.cell(at(4, 4)), Cell::White);
        assert_eq!(board.cell(at(3, 4)), Cell::Black);
        assert_eq!(board.cell(at(4, 3)), Cell::Black);
        assert_eq!(board.scores(), Scores { black: 2, white: 2 });
        assert_eq!(board.empty_count(), 60);

        let empties = Location::all()
            .filter(|&loc| board.cell(loc) == Cell::Empty)
            .count();
        assert_eq!(empties, 60);
    }

    #[test]
    fn initial_legal_moves() {
        let board = Board::initialize();

        let black: Vec<_> = board.legal_moves(Player::Black).collect();
        assert_eq!(black, vec![at(2, 3), at(3, 2), at(4, 5), at(5, 4)]);

        let white: Vec<_> = board.legal_moves(Player::White).collect();
        assert_eq!(white, vec![at(2, 4), at(3, 5), at(4, 2), at(5, 3)]);
    }

    #[test]
    fn occupied_cells_are_never_legal() {
        let board = Board::initialize().apply_move(at(2, 3), Player::Black);
        for loc in Location::all().filter(|&loc| board.cell(loc) != Cell::Empty) {
            assert!(!board.is_legal(loc, Player::Black));
            assert!(!board.is_legal(loc, Player::White));
        }
    }

    #[test]
    fn legal_moves_match_is_legal() {
        let board: Board = "
            - - - - - - - -
            - - - - - - - -
            - - X O - - - -
            - - - X O - - -
            - - O O O X - -
            - - - - O - - -
            - - - - - - - -
            - - - - - - - -"
            .parse()
            .unwrap();

        for player in [Player::Black, Player::White].iter().copied() {
            let moves = board.legal_moves(player);
            for loc in Location::all() {
                assert_eq!(moves.contains(loc), board.is_legal(loc, player), "{}", loc);
            }
        }
    }

    #[test]
    fn legal_moves_are_recomputed_identically() {
        let mut board = Board::initialize();
        let mut player = Player::Black;

        for _ in 0..30 {
            for side in [Player::Black, Player::White].iter().copied() {
                assert_eq!(board.legal_moves(side), board.legal_moves(side));
            }
            let loc = match board.legal_moves(player).last() {
                Some(loc) => loc,
                None => break,
            };
            board = board.apply_move(loc, player);
            player = !player;
        }
    }

    #[test]
    fn black_opens_at_d3() {
        let board = Board::initialize().apply_move(at(2, 3), Player::Black);

        assert_eq!(board.cell(at(2, 3)), Cell::Black);
        assert_eq!(board.cell(at(3, 3)), Cell::Black);
        assert_eq!(board.cell(at(4, 4)), Cell::White);
        assert_eq!(board.scores(), Scores { black: 4, white: 1 });
    }

    #[test]
    fn flips_in_several_directions_at_once() {
        // Playing A1 for black captures along the row, the column, and the diagonal.
        let board: Board = "
            - O O X - - - -
            O O - - - - - -
            X - X - - - - -
            - - - - - - - -
            - - - - - - - -
            - - - - - - - -
            - - - - - - - -
            - - - - - - - -"
            .parse()
            .unwrap();

        let flips: Vec<_> = board.flips(at(0, 0), Player::Black).collect();
        assert_eq!(flips, vec![at(0, 1), at(0, 2), at(1, 0), at(1, 1)]);

        let after = board.apply_move(at(0, 0), Player::Black);
        assert_eq!(after.scores(), Scores { black: 8, white: 0 });
    }

    #[test]
    fn open_runs_are_not_flipped() {
        // The run to the east ends at an empty space; the one to the south at the edge.
        let board: Board = "
            - O O - - - - -
            O - - - - - - -
            O - - - - - - -
            O - - - - - - -
            O - - - - - - -
            O - - - - - - -
            O - - - - - - -
            O - - - - - - -"
            .parse()
            .unwrap();

        assert!(!board.is_legal(at(0, 0), Player::Black));
        let after = board.apply_move(at(0, 0), Player::Black);
        assert_eq!(after.scores(), Scores { black: 1, white: 9 });
    }

    #[test]
    fn apply_move_on_an_illegal_space_places_without_flipping() {
        let board = Board::initialize();
        let after = board.apply_move(at(0, 0), Player::Black);

        assert_eq!(after.cell(at(0, 0)), Cell::Black);
        assert_eq!(after.scores(), Scores { black: 3, white: 2 });
    }

    #[test]
    fn legal_moves_never_lose_stones() {
        let mut board = Board::initialize();
        let mut player = Player::Black;

        for _ in 0..20 {
            let loc = match board.legal_moves(player).next() {
                Some(loc) => loc,
                None => break,
            };
            let before = board.scores();
            let mover_before = board.count(player);
            board = board.apply_move(loc, player);
            let after = board.scores();

            assert_eq!(board.legal_moves(!player), board.legal_moves(!player));

            assert_eq!(
                after.black as usize + after.white as usize,
                before.black as usize + before.white as usize + 1
            );
            assert!(board.count(player) > mover_before + 1);
            assert!((board.black & board.white).is_empty());
            player = !player;
        }
    }

    #[test]
    fn full_board_is_terminal() {
        let board: Board = "
            XXXXXXXX
            XXXXXXXX
            XXXXXXXX
            XXXXXXXX
            XXXXXXXX
            OOOOOOOO
            OOOOOOOO
            OOOOOOOO"
            .parse()
            .unwrap();

        assert!(board.legal_moves(Player::Black).is_empty());
        assert!(board.legal_moves(Player::White).is_empty());
        assert!(board.is_terminal());
        assert_eq!(board.verdict(), Some(Verdict::BlackWins));
        assert_eq!(board.scores(), Scores { black: 40, white: 24 });
    }

    #[test]
    fn even_full_board_is_a_draw() {
        let board: Board = "
            XOXOXOXO
            OXOXOXOX
            XOXOXOXO
            OXOXOXOX
            XOXOXOXO
            OXOXOXOX
            XOXOXOXO
            OXOXOXOX"
            .parse()
            .unwrap();

        assert_eq!(board.scores(), Scores { black: 32, white: 32 });
        assert_eq!(board.verdict(), Some(Verdict::Draw));
    }

    #[test]
    fn one_sided_board_is_terminal_before_filling() {
        let board: Board = "
            OO------
            OO------
            --------
            --------
            --------
            --------
            --------
            --------"
            .parse()
            .unwrap();

        assert!(board.is_terminal());
        assert_eq!(board.verdict(), Some(Verdict::WhiteWins));
        assert_eq!(Verdict::WhiteWins.winner(), Some(Player::White));
    }

    #[test]
    fn in_progress_board_has_no_verdict() {
        assert_eq!(Board::initialize().verdict(), None);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            "XO".parse::<Board>(),
            Err(ParseBoardError::WrongLength { found: 2 })
        );
        assert_eq!(
            "?".repeat(64).parse::<Board>(),
            Err(ParseBoardError::UnknownPiece { piece: '?' })
        );
    }

    #[test]
    fn display_initial_board() {
        let expected = "  A B C D E F G H
1 . . . . . . . .
2 . . . . . . . .
3 . . . . . . . .
4 . . . O X . . .
5 . . . X O . . .
6 . . . . . . . .
7 . . . . . . . .
8 . . . . . . . .";
        assert_eq!(Board::initialize().to_string(), expected);
    }

    #[test]
    fn cell_signs() {
        assert_eq!(Cell::from(Player::Black).sign(), Player::Black.sign());
        assert_eq!(Cell::from(Player::White).sign(), Player::White.sign());
        assert_eq!(Cell::Empty.sign(), 0);
    }
}
