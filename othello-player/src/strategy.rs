//! Move-selection strategies for the computer opponent.

use othello_engine::{Location, LocationList};
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::SeedableRng;
use tracing::debug;

/// A way of picking one move out of a set of legal moves.
pub trait MoveStrategy {
    /// Pick one of `legal_moves`. Returns None only if `legal_moves` is empty.
    fn choose(&mut self, legal_moves: LocationList) -> Option<Location>;
}

impl<S: MoveStrategy + ?Sized> MoveStrategy for Box<S> {
    fn choose(&mut self, legal_moves: LocationList) -> Option<Location> {
        (**self).choose(legal_moves)
    }
}

/// Picks uniformly at random among the legal moves.
#[derive(Clone, Debug)]
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    /// Seed from the operating system's entropy source.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seed deterministically, for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl MoveStrategy for RandomStrategy {
    fn choose(&mut self, legal_moves: LocationList) -> Option<Location> {
        let choice = legal_moves.choose(&mut self.rng);
        debug!(candidates = legal_moves.len(), choice = ?choice.map(|loc| loc.to_string()), "random move");
        choice
    }
}

/// Always picks the first legal move in row-major order.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstMoveStrategy;

impl MoveStrategy for FirstMoveStrategy {
    fn choose(&mut self, mut legal_moves: LocationList) -> Option<Location> {
        legal_moves.next()
    }
}
