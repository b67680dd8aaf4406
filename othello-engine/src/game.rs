//! Implements game-level Othello logic.
//!
//! For correctness, this higher-level interface is preferred, but for
//! performance you may use [`Board`] directly.

use crate::board::{Board, Verdict};
use crate::{Location, LocationList};
use derive_more::{Display, Error};
use std::fmt;

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// The numeric encoding of a player: +1 for black, -1 for white.
    pub fn sign(self) -> i8 {
        match self {
            Player::Black => 1,
            Player::White => -1,
        }
    }
}

impl Default for Player {
    /// Gets the starting player (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

/// An action in an Othello game: pass or place a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum Move {
    #[display(fmt = "{}", _0)]
    Piece(Location),
    #[display(fmt = "PASS")]
    Pass,
}

impl From<Location> for Move {
    fn from(loc: Location) -> Self {
        Self::Piece(loc)
    }
}

#[derive(Clone, Copy, Debug, Display, Error, PartialEq)]
pub enum IllegalMoveError {
    #[display(fmt = "{} is not a legal move for {}", location, player)]
    NotLegal { location: Location, player: Player },
    #[display(fmt = "{} has a legal move and cannot pass", player)]
    CannotPass { player: Player },
    #[display(fmt = "the game is already finished")]
    GameFinished,
}

/// The complete state of an Othello game: the board and whose turn it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Game {
    pub board: Board,
    pub active_player: Player,
}

impl Default for Game {
    /// Gets the starting position with black to move.
    fn default() -> Self {
        Self::new(Board::initialize(), Player::default())
    }
}

impl Game {
    pub fn new(board: Board, active_player: Player) -> Self {
        Self {
            board,
            active_player,
        }
    }

    /// Get the legal placements for the active player.
    #[inline]
    pub fn legal_moves(self) -> LocationList {
        self.board.legal_moves(self.active_player)
    }

    /// Returns whether the active player may place a piece at `loc`.
    #[inline]
    pub fn is_legal(self, loc: Location) -> bool {
        self.board.is_legal(loc, self.active_player)
    }

    /// Hand the turn to the other player without checking whether that's allowed.
    #[inline]
    pub fn pass(self) -> Self {
        Self {
            board: self.board,
            active_player: !self.active_player,
        }
    }

    /// Place a piece for the active player without checking legality.
    #[inline]
    pub fn make_move(self, loc: Location) -> Self {
        Self {
            board: self.board.apply_move(loc, self.active_player),
            active_player: !self.active_player,
        }
    }

    /// Make a move as the active player, checking that it is legal.
    /// Passing is only allowed when the active player has no placement.
    pub fn apply_move(self, mv: Move) -> Result<Self, IllegalMoveError> {
        if self.is_finished() {
            return Err(IllegalMoveError::GameFinished);
        }

        match mv {
            Move::Piece(location) if self.is_legal(location) => Ok(self.make_move(location)),
            Move::Piece(location) => Err(IllegalMoveError::NotLegal {
                location,
                player: self.active_player,
            }),
            Move::Pass if self.legal_moves().is_empty() => Ok(self.pass()),
            Move::Pass => Err(IllegalMoveError::CannotPass {
                player: self.active_player,
            }),
        }
    }

    /// Returns whether neither player can move.
    #[inline]
    pub fn is_finished(self) -> bool {
        self.board.is_terminal()
    }

    /// The result of the game, or None if it is still in progress.
    pub fn verdict(self) -> Option<Verdict> {
        self.board.verdict()
    }

    /// The winner of a finished game. None for a draw or a game in progress.
    pub fn winner(self) -> Option<Player> {
        self.verdict().and_then(Verdict::winner)
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        match self.verdict() {
            Some(verdict) => write!(f, "{} ({})", verdict, self.board.scores()),
            None => write!(f, "{} to move", self.active_player),
        }
    }
}
