//! Core domain types for the tic-tac-toe engine.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// A player in the game.
///
/// The human always carries the -1 side of the evaluation, the computer
/// the +1 side; which character each one draws with is a display concern
/// handled by the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// The human player.
    Human,
    /// The automated player.
    Computer,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
///
/// Squares are stored in row-major order. The board enforces cell-level
/// legality in [`Board::place`]; turn alternation is the state machine's
/// job (see [`crate::typestate`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Writes a square directly, without legality checks.
    ///
    /// The search uses this for its hypothetical place/undo pairs. Game
    /// moves go through [`Board::place`] instead.
    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all empty positions in row-major order (row 0→2, column 0→2).
    ///
    /// The order is part of the contract: it defines the search's
    /// exploration order and therefore which of several equally good
    /// moves wins a tie.
    pub fn empty_cells(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|&pos| self.is_empty(pos))
            .collect()
    }

    /// Places a player's mark, enforcing cell legality.
    ///
    /// Fails with [`MoveError::SquareOccupied`](crate::MoveError::SquareOccupied)
    /// if the square is taken; the board is left unmodified on failure.
    pub fn place(&mut self, pos: Position, player: Player) -> Result<(), crate::MoveError> {
        if !self.is_empty(pos) {
            return Err(crate::MoveError::SquareOccupied(pos));
        }
        self.set(pos, Square::Occupied(player));
        Ok(())
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
