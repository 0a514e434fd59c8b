//! Unbeatable tic-tac-toe engine.
//!
//! The core of the crate is a full-depth minimax search that returns a
//! provably optimal move for any reachable position, plus the minimal
//! state machine the search depends on: board representation, terminal
//! detection, and turn sequencing. Rendering and input live in the
//! companion binary and call in through this surface.
//!
//! # Example
//!
//! ```
//! use tictactoe_minimax::{best_move, GameResult, GameSetup, Move, Player};
//!
//! let game = GameSetup::new().start(Player::Human);
//! let pos = best_move(game.board(), Player::Human).expect("non-terminal board");
//! match game.make_move(Move::new(Player::Human, pos)) {
//!     Ok(GameResult::InProgress(game)) => assert_eq!(game.to_move(), Player::Computer),
//!     _ => unreachable!("one move cannot finish the game"),
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod position;
mod search;
mod types;
mod typestate;

pub mod rules;

// Crate-level exports - actions and errors
pub use action::{Move, MoveError};

// Crate-level exports - board and players
pub use position::Position;
pub use types::{Board, Player, Square};

// Crate-level exports - search engine
pub use search::{ScoredMove, best_move, best_move_with, evaluate, minimax};

// Crate-level exports - game lifecycle
pub use typestate::{GameFinished, GameInProgress, GameResult, GameSetup, Outcome};
