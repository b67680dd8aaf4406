//! Command-line configuration for the `othello` binary.

use crate::strategy::{FirstMoveStrategy, MoveStrategy, RandomStrategy};
use clap::{Parser, ValueEnum};

/// Play Othello as black against a computer opponent.
#[derive(Parser, Debug)]
#[command(name = "othello")]
#[command(about = "Play Othello against a random-move opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// How the opponent picks its moves
    #[arg(long, value_enum, default_value_t = Opponent::Random)]
    pub opponent: Opponent,

    /// Seed for the random opponent, for a reproducible game
    #[arg(long)]
    pub seed: Option<u64>,

    /// Don't mark the spaces where you can play
    #[arg(long)]
    pub no_hints: bool,

    /// Log filter used when RUST_LOG is unset (e.g. "debug", "othello_player=trace")
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// Available opponents.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Opponent {
    /// Uniformly random among the legal moves
    Random,
    /// The first legal move in reading order
    First,
}

impl Cli {
    /// Build the opponent's move strategy.
    pub fn strategy(&self) -> Box<dyn MoveStrategy> {
        match (self.opponent, self.seed) {
            (Opponent::Random, Some(seed)) => Box::new(RandomStrategy::seeded(seed)),
            (Opponent::Random, None) => Box::new(RandomStrategy::from_entropy()),
            (Opponent::First, _) => Box::new(FirstMoveStrategy),
        }
    }

    /// Whether to mark playable spaces on the board.
    pub fn hints(&self) -> bool {
        !self.no_hints
    }
}
