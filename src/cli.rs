//! Command-line interface for the console driver.

use clap::{Parser, ValueEnum};

/// Unbeatable tic-tac-toe against a full-depth minimax opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe_minimax")]
#[command(about = "Play tic-tac-toe against an optimal computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Who moves first; prompted interactively when omitted
    #[arg(long, value_enum)]
    pub first: Option<FirstMover>,

    /// Character the human plays with; prompted interactively when omitted
    #[arg(long, value_enum)]
    pub mark: Option<MarkChoice>,
}

/// Which side opens the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FirstMover {
    /// The human moves first.
    Human,
    /// The computer moves first.
    Computer,
}

/// Which character the human draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MarkChoice {
    /// Human plays X, computer plays O.
    X,
    /// Human plays O, computer plays X.
    O,
}
