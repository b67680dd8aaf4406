//! "Perft" performance test: count the number of leaves at a given depth.
//! Exercises move generation and flipping across every reachable position.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::Game;

/// Count the leaves `depth` plies below the starting position.
/// A pass counts as a ply, and a game that ends early is a single leaf.
pub fn run_perft(depth: u64) -> u64 {
    leaves_below(Game::default(), depth, false)
}

fn leaves_below(game: Game, depth: u64, passed: bool) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let all_moves = game.legal_moves();
    if all_moves.is_empty() {
        // Both players passed: game is over
        if passed {
            return 1;
        }

        return leaves_below(game.pass(), depth - 1, true);
    }

    all_moves
        .map(|mv| leaves_below(game.make_move(mv), depth - 1, false))
        .sum()
}
