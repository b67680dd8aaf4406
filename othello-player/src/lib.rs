//! Play Othello against a computer opponent.
//!
//! [`GameSession`] owns one game and answers every human move with a reply chosen
//! by a [`MoveStrategy`]; [`terminal`] draws the session and reads moves from a
//! line-based console.

pub mod config;
pub mod session;
pub mod strategy;
pub mod terminal;

pub use session::{GameSession, Status, Turn, HUMAN};
pub use strategy::{FirstMoveStrategy, MoveStrategy, RandomStrategy};
