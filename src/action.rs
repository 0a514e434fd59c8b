//! First-class move actions and the errors that reject them.

use crate::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move: a player placing their mark at a position.
///
/// Moves are domain events that can be validated independently of
/// execution and logged for debugging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} -> {}", self.player, self.position.label())
    }
}

/// Error that can occur when validating or applying a move.
///
/// None of these are fatal: the turn controller re-prompts and never
/// applies a rejected move. The search engine cannot produce any of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The requested cell index is outside the board.
    #[display("Cell {} is out of range (expected 1-9)", _0)]
    OutOfRange(usize),

    /// It's not this player's turn.
    #[display("It's not {:?}'s turn", _0)]
    WrongPlayer(Player),
}

impl std::error::Error for MoveError {}
