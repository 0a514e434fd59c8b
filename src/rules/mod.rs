//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating board state. Rules are separated from
//! board storage so the search and the state machine can share them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::check_winner;

use crate::Board;

/// Checks whether the game is over: a winner exists or no empty square remains.
pub fn is_terminal(board: &Board) -> bool {
    check_winner(board).is_some() || is_full(board)
}
