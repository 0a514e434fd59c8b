//! Console driver for the tic-tac-toe engine.
//!
//! All I/O lives here: board rendering, line input, the mark and
//! first-player prompts, and the re-prompt loop on rejected moves. The
//! engine is only reached through the library surface.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, FirstMover, MarkChoice};
use std::io::{self, BufRead, Write};
use tictactoe_minimax::{
    Board, GameFinished, GameResult, GameSetup, Move, Outcome, Player, Position, Square, best_move,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Mark-to-character mapping, used purely for display.
#[derive(Debug, Clone, Copy)]
struct Glyphs {
    human: char,
    computer: char,
}

impl Glyphs {
    fn for_human(mark: MarkChoice) -> Self {
        match mark {
            MarkChoice::X => Glyphs {
                human: 'X',
                computer: 'O',
            },
            MarkChoice::O => Glyphs {
                human: 'O',
                computer: 'X',
            },
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let glyphs = match cli.mark {
        Some(mark) => Glyphs::for_human(mark),
        None => prompt_mark(&mut input)?,
    };
    let first = match cli.first {
        Some(FirstMover::Human) => Player::Human,
        Some(FirstMover::Computer) => Player::Computer,
        None => prompt_first(&mut input)?,
    };

    info!(?first, human_glyph = %glyphs.human, "starting game");
    let finished = run_game(first, glyphs, &mut input)?;

    render(finished.board(), glyphs);
    match finished.outcome() {
        Outcome::Winner(Player::Human) => println!("You win!"),
        Outcome::Winner(Player::Computer) => println!("You lose!"),
        Outcome::Draw => println!("Draw!"),
    }

    Ok(())
}

/// Runs one game to completion.
///
/// A rejected move leaves the state untouched and loops back to the
/// prompt; the engine re-validates legality independently of the input
/// parsing, so both layers have to agree before a move is applied.
fn run_game(first: Player, glyphs: Glyphs, input: &mut impl BufRead) -> Result<GameFinished> {
    let mut game = GameSetup::new().start(first);

    loop {
        let mover = game.to_move();
        render(game.board(), glyphs);

        let pos = match mover {
            Player::Computer => {
                println!("Computer's turn [{}]", glyphs.computer);
                best_move(game.board(), Player::Computer)
                    .context("computer asked to move on a finished board")?
            }
            Player::Human => {
                println!("Your turn [{}]", glyphs.human);
                prompt_move(input)?
            }
        };
        debug!(?mover, %pos, "applying move");

        match game.clone().make_move(Move::new(mover, pos)) {
            Ok(GameResult::InProgress(next)) => game = next,
            Ok(GameResult::Finished(done)) => return Ok(done),
            Err(err) => println!("Invalid move: {err}"),
        }
    }
}

/// Renders the board, numbering empty squares 1-9 for the move menu.
fn render(board: &Board, glyphs: Glyphs) {
    println!("\n---------------");
    for row in Position::ALL.chunks(3) {
        for &pos in row {
            let glyph = match board.get(pos) {
                Square::Empty => (b'1' + pos.to_index() as u8) as char,
                Square::Occupied(Player::Human) => glyphs.human,
                Square::Occupied(Player::Computer) => glyphs.computer,
            };
            print!("| {glyph} |");
        }
        println!("\n---------------");
    }
}

/// Asks the human which character to play with.
fn prompt_mark(input: &mut impl BufRead) -> Result<Glyphs> {
    loop {
        let line = prompt_line("Choose X or O: ", input)?;
        match line.trim().to_uppercase().as_str() {
            "X" => return Ok(Glyphs::for_human(MarkChoice::X)),
            "O" => return Ok(Glyphs::for_human(MarkChoice::O)),
            _ => println!("Please answer X or O."),
        }
    }
}

/// Asks the human whether they want the opening move.
fn prompt_first(input: &mut impl BufRead) -> Result<Player> {
    loop {
        let line = prompt_line("Do you want to move first? [y/n]: ", input)?;
        match line.trim().to_lowercase().as_str() {
            "y" | "yes" => return Ok(Player::Human),
            "n" | "no" => return Ok(Player::Computer),
            _ => println!("Please answer y or n."),
        }
    }
}

/// Reads the human's move, looping until the input parses.
///
/// Only format and range are checked here; occupancy is the engine's
/// call, and its rejection routes back through the caller's loop.
fn prompt_move(input: &mut impl BufRead) -> Result<Position> {
    loop {
        let line = prompt_line("Pick a square (1-9): ", input)?;

        if let Ok(num) = line.trim().parse::<usize>() {
            match Position::from_menu_number(num) {
                Ok(pos) => return Ok(pos),
                Err(err) => println!("{err}"),
            }
            continue;
        }

        match Position::from_label_or_number(&line) {
            Some(pos) => return Ok(pos),
            None => println!("Enter a number between 1 and 9, or a square name."),
        }
    }
}

/// Prints a prompt and reads one line, failing gracefully on EOF.
fn prompt_line(prompt: &str, input: &mut impl BufRead) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush().context("failed to flush prompt")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("failed to read input")?;
    if read == 0 {
        bail!("input stream closed");
    }
    Ok(line)
}
