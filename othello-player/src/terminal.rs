//! A line-based terminal front end for a [`GameSession`].
//!
//! Each command is one "click": the board is redrawn after every line of input.

use crate::session::{GameSession, Status, Turn};
use crate::strategy::MoveStrategy;
use derive_more::{Display, Error};
use othello_engine::{format_grid, Board, Cell, Location, LocationList, Move, Scores, Verdict};
use std::fmt;
use std::io::{self, BufRead, Write};
use tracing::warn;

const BLACK_STONE: char = '●';
const WHITE_STONE: char = '○';
const PLAYABLE: char = '·';
const BLANK: char = ' ';

const HELP: &str = "Commands:
  <location>  place a stone, e.g. d3
  pass        pass when you have no legal move
  moves       list your legal moves
  reset       start a new game
  help        show this message
  quit        leave the game";

/// One line of user input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Play(Location),
    Pass,
    Moves,
    Reset,
    Help,
    Quit,
}

#[derive(Debug, Display, Error, PartialEq)]
#[display(fmt = "unrecognized command {:?}", input)]
pub struct ParseCommandError {
    input: String,
}

impl std::str::FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let command = s.trim().to_ascii_lowercase();
        match command.as_str() {
            "pass" => Ok(Command::Pass),
            "moves" => Ok(Command::Moves),
            "reset" => Ok(Command::Reset),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            _ => command.parse().map(Command::Play).map_err(|_| ParseCommandError {
                input: s.trim().to_string(),
            }),
        }
    }
}

/// The board as the human sees it, with playable spaces optionally marked.
struct BoardView {
    board: Board,
    playable: LocationList,
}

impl fmt::Display for BoardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_grid(f, |loc| match self.board.cell(loc) {
            Cell::Black => BLACK_STONE,
            Cell::White => WHITE_STONE,
            Cell::Empty if self.playable.contains(loc) => PLAYABLE,
            Cell::Empty => BLANK,
        })
    }
}

/// The end-of-game banner, from the human's point of view.
pub fn banner(verdict: Verdict, scores: Scores) -> String {
    let headline = match verdict {
        Verdict::BlackWins => "You win!",
        Verdict::WhiteWins => "You lose...",
        Verdict::Draw => "Draw",
    };
    format!(
        "{} {} {} - {} {}",
        headline, BLACK_STONE, scores.black, WHITE_STONE, scores.white
    )
}

/// Draw the whole screen: turn indicator, board, and score or result.
pub fn render<S: MoveStrategy>(session: &GameSession<S>, hints: bool) -> String {
    let status = session.status();
    let playable = match status {
        Status::AwaitingMove(moves) if hints => moves,
        _ => LocationList::default(),
    };
    let view = BoardView {
        board: session.board(),
        playable,
    };

    let scores = session.scores();
    let footer = match status {
        Status::AwaitingMove(_) => format!(
            "Your move ({})    {} {}  {} {}",
            BLACK_STONE, BLACK_STONE, scores.black, WHITE_STONE, scores.white
        ),
        Status::MustPass => format!(
            "You have no legal move ({}). Type 'pass'.    {} {}  {} {}",
            BLACK_STONE, BLACK_STONE, scores.black, WHITE_STONE, scores.white
        ),
        Status::Finished(verdict, scores) => banner(verdict, scores),
    };

    format!("{}\n{}", view, footer)
}

fn describe(turn: Turn) -> String {
    let human = match turn.human {
        Move::Piece(location) => format!("You played {}.", location),
        Move::Pass => "You passed.".to_string(),
    };
    match turn.opponent {
        Some(reply) => format!("{} Opponent played {}.", human, reply),
        None => format!("{} Opponent has no move.", human),
    }
}

/// Read commands from `input` until it ends or the user quits, redrawing to `output`.
pub fn run<S, R, W>(
    session: &mut GameSession<S>,
    input: R,
    output: &mut W,
    hints: bool,
) -> io::Result<()>
where
    S: MoveStrategy,
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", render(session, hints))?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let outcome = match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(Command::Play(location)) => session.apply_human_move(location).map(describe),
            Ok(Command::Pass) => session.pass().map(describe),
            Ok(Command::Moves) => Ok(format!("Legal moves: {}", session.current_legal_moves())),
            Ok(Command::Reset) => {
                session.reset();
                Ok("New game.".to_string())
            }
            Ok(Command::Help) => Ok(HELP.to_string()),
            Err(err) => {
                writeln!(output, "{}. Type 'help' for commands.", err)?;
                continue;
            }
        };

        match outcome {
            Ok(message) => writeln!(output, "{}", message)?,
            Err(err) => {
                warn!(%err, "rejected move");
                writeln!(output, "{}", err)?;
            }
        }
        writeln!(output, "{}", render(session, hints))?;
    }

    Ok(())
}
