//! Phase-specific typestate structs for the game lifecycle.
//!
//! Each phase is its own distinct type: a finished game ALWAYS has an
//! outcome, not `Option<Outcome>`, and only an in-progress game accepts
//! moves. Whose turn it is lives in `GameInProgress::to_move`, so the
//! "awaiting human" and "awaiting computer" states are the same type with
//! different data.

use crate::rules;
use crate::{Board, Move, MoveError, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(Player),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "{player:?} wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Game in setup phase - ready to start.
///
/// The board is always empty. No outcome yet.
#[derive(Debug, Clone, Default)]
pub struct GameSetup {
    board: Board,
}

impl GameSetup {
    /// Creates a new game in setup phase.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
        }
    }

    /// Starts the game with the first player (consumes setup, returns in-progress).
    ///
    /// The first player is configurable: human-first or computer-first.
    #[instrument(skip(self))]
    pub fn start(self, first_player: Player) -> GameInProgress {
        GameInProgress {
            board: self.board,
            to_move: first_player,
        }
    }
}

/// Game in progress - can accept moves.
#[derive(Debug, Clone)]
pub struct GameInProgress {
    board: Board,
    to_move: Player,
}

impl GameInProgress {
    /// Makes a move, consuming self and transitioning to the next state.
    ///
    /// Rejects the move without changing state if it is the wrong
    /// player's turn or the square is occupied; the caller re-prompts and
    /// retries on the same state. A successful move hands the turn to the
    /// opponent unless the board became terminal, in which case the game
    /// finishes with its outcome.
    #[instrument(skip(self))]
    pub fn make_move(self, action: Move) -> Result<GameResult, MoveError> {
        if action.player != self.to_move {
            return Err(MoveError::WrongPlayer(action.player));
        }

        let mut game = self;
        game.board.place(action.position, action.player)?;
        debug_assert!(
            mark_counts_balanced(&game.board),
            "mark counts diverged past alternation"
        );

        if let Some(winner) = rules::check_winner(&game.board) {
            return Ok(GameResult::Finished(GameFinished {
                board: game.board,
                outcome: Outcome::Winner(winner),
            }));
        }

        if rules::is_full(&game.board) {
            return Ok(GameResult::Finished(GameFinished {
                board: game.board,
                outcome: Outcome::Draw,
            }));
        }

        game.to_move = game.to_move.opponent();
        Ok(GameResult::InProgress(game))
    }

    /// Returns the current player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }
}

/// Game finished - outcome determined.
#[derive(Debug, Clone)]
pub struct GameFinished {
    board: Board,
    outcome: Outcome,
}

impl GameFinished {
    /// Returns the outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Restarts the game (consumes finished, returns setup).
    pub fn restart(self) -> GameSetup {
        GameSetup::new()
    }
}

/// Result of making a move.
#[derive(Debug)]
pub enum GameResult {
    /// Game continues.
    InProgress(GameInProgress),
    /// Game finished.
    Finished(GameFinished),
}

fn mark_counts_balanced(board: &Board) -> bool {
    let human = board
        .squares()
        .iter()
        .filter(|s| matches!(s, Square::Occupied(Player::Human)))
        .count();
    let computer = board
        .squares()
        .iter()
        .filter(|s| matches!(s, Square::Occupied(Player::Computer)))
        .count();
    human.abs_diff(computer) <= 1
}
