//! A single game between a human (black) and a computer opponent (white).

use crate::strategy::{MoveStrategy, RandomStrategy};
use othello_engine::{
    Board, Game, IllegalMoveError, Location, LocationList, Move, Player, Scores, Verdict,
};
use tracing::{debug, info};

/// The human always plays black and moves first.
pub const HUMAN: Player = Player::Black;

/// What happened during one interaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Turn {
    /// The human's move.
    pub human: Move,
    /// The opponent's reply, or None if it had no legal move.
    pub opponent: Option<Location>,
}

/// What the human can do next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// The human may play any of these locations.
    AwaitingMove(LocationList),
    /// The human has no legal move but the opponent does; the human must pass.
    MustPass,
    /// Neither player can move.
    Finished(Verdict, Scores),
}

/// Owns the board and turn for one game, and plays the opponent's replies.
pub struct GameSession<S: MoveStrategy = RandomStrategy> {
    game: Game,
    strategy: S,
}

impl GameSession<RandomStrategy> {
    /// Start a game against a randomly-moving opponent.
    pub fn new() -> Self {
        Self::with_strategy(RandomStrategy::from_entropy())
    }
}

impl Default for GameSession<RandomStrategy> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: MoveStrategy> GameSession<S> {
    /// Start a game against an opponent that picks moves with `strategy`.
    pub fn with_strategy(strategy: S) -> Self {
        Self {
            game: Game::default(),
            strategy,
        }
    }

    /// Pick up a game from an arbitrary position, with the human to move.
    /// [`reset`](Self::reset) still returns to the opening position.
    pub fn from_position(board: Board, strategy: S) -> Self {
        Self {
            game: Game::new(board, HUMAN),
            strategy,
        }
    }

    /// Throw the current game away and start over from the opening position.
    pub fn reset(&mut self) {
        info!("resetting game");
        self.game = Game::default();
    }

    /// The current board.
    pub fn board(&self) -> Board {
        self.game.board
    }

    /// The player to move.
    pub fn turn(&self) -> Player {
        self.game.active_player
    }

    /// Legal placements for the player to move, recomputed from the current board.
    pub fn current_legal_moves(&self) -> LocationList {
        self.game.legal_moves()
    }

    /// Returns whether neither player can move.
    pub fn is_terminal(&self) -> bool {
        self.game.is_finished()
    }

    /// Stone counts for both players.
    pub fn scores(&self) -> Scores {
        self.game.board.scores()
    }

    /// The result of the game, or None while it is in progress.
    pub fn verdict(&self) -> Option<Verdict> {
        self.game.verdict()
    }

    /// What the human can do next: move, pass, or nothing because the game is over.
    pub fn status(&self) -> Status {
        if let Some(verdict) = self.verdict() {
            return Status::Finished(verdict, self.scores());
        }

        let moves = self.current_legal_moves();
        if moves.is_empty() {
            Status::MustPass
        } else {
            Status::AwaitingMove(moves)
        }
    }

    /// Play `location` for the human, then let the opponent reply.
    ///
    /// The move is validated first: an occupied or non-capturing location, or a
    /// finished game, is rejected and the session is left unchanged.
    pub fn apply_human_move(&mut self, location: Location) -> Result<Turn, IllegalMoveError> {
        self.play(Move::Piece(location))
    }

    /// Pass for the human, then let the opponent reply.
    /// Only allowed when the human has no legal placement and the game is not over.
    pub fn pass(&mut self) -> Result<Turn, IllegalMoveError> {
        self.play(Move::Pass)
    }

    fn play(&mut self, human: Move) -> Result<Turn, IllegalMoveError> {
        let after_human = self.game.apply_move(human)?;
        debug!(%human, "human move");

        let (after_reply, opponent) = self.reply(after_human)?;
        self.game = after_reply;

        if let Some(verdict) = self.verdict() {
            info!(%verdict, scores = %self.scores(), "game over");
        }

        Ok(Turn { human, opponent })
    }

    /// Pick and play the opponent's move from a fresh list of legal moves.
    /// An opponent without a move forfeits its turn. The turn always ends with the human.
    fn reply(&mut self, game: Game) -> Result<(Game, Option<Location>), IllegalMoveError> {
        if game.is_finished() {
            return Ok((Game::new(game.board, HUMAN), None));
        }

        match self.strategy.choose(game.legal_moves()) {
            Some(location) => {
                debug!(%location, "opponent move");
                Ok((game.apply_move(Move::Piece(location))?, Some(location)))
            }
            None => {
                debug!("opponent has no move");
                Ok((game.apply_move(Move::Pass)?, None))
            }
        }
    }
}
