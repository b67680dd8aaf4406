//! `othello-engine` holds the rules of Othello for engines and UIs.
//!
//! This package implements three levels of abstraction:
//!
//!  - [`bitboard`] contains the raw, unchecked operations for working with one bitboard
//!    per player: direction shifts, captures, move masks and move application.
//!  - [`Board`] is the 8x8 grid of black and white stones with the game's rules:
//!    [`Board::initialize`], [`Board::is_legal`], [`Board::legal_moves`] and
//!    [`Board::apply_move`]. Like [`bitboard`], it trusts its caller.
//!  - [`Game`] pairs a board with the player to move and checks every move it is given.

pub mod bitboard;
pub mod test_utils;

mod board;
mod game;
mod location;
mod utils;

pub use board::*;
pub use game::*;
pub use location::*;
pub use utils::format_grid;

/// The number of spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on an Othello board.
pub const NUM_SPACES: usize = 64;
