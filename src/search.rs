//! Full-depth minimax search for the automated player.
//!
//! The tree is explored exhaustively, no pruning: at most 9! leaf
//! evaluations, which completes instantly. Depth is always initialized to
//! the number of empty cells, so the recursion bottoms out exactly at
//! terminal boards.

use crate::rules::{check_winner, is_terminal};
use crate::{Board, Player, Position, Square};
use rand::Rng;
use tracing::{debug, instrument};

/// A candidate move paired with its minimax score.
///
/// Scores are from the computer's perspective: +1 the computer wins,
/// -1 the human wins, 0 a draw. Leaf evaluations carry no position.
/// Search-internal, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    /// The move this score belongs to; `None` at leaf nodes.
    pub position: Option<Position>,
    /// Score in {-1, 0, +1} for real children, ±infinity sentinels
    /// while scanning.
    pub score: i32,
}

/// Heuristic evaluation of a board from the computer's perspective.
///
/// +1 if the computer has won, -1 if the human has won, 0 otherwise
/// (draw, or a non-terminal board at depth 0 — unreachable when depth is
/// seeded with the empty-cell count).
pub fn evaluate(board: &Board) -> i32 {
    match check_winner(board) {
        Some(Player::Computer) => 1,
        Some(Player::Human) => -1,
        None => 0,
    }
}

/// Exhaustive adversarial search.
///
/// Explores every empty cell in row-major order, placing `player`'s mark,
/// recursing for the opponent, and undoing the placement before trying
/// the next cell. The board is restored to its pre-call contents on every
/// return path.
///
/// The computer keeps the strictly greatest child score, the human the
/// strictly least; ties go to the first child seen. The sentinels start
/// at ∓infinity so the first real child always replaces them. This
/// first-match tie-break over row-major order is an observable policy,
/// kept deterministic for reproducibility.
///
/// Cannot fail: on a terminal board (or at depth 0) it returns the leaf
/// heuristic directly.
pub fn minimax(board: &mut Board, remaining_depth: u8, player: Player) -> ScoredMove {
    if remaining_depth == 0 || is_terminal(board) {
        return ScoredMove {
            position: None,
            score: evaluate(board),
        };
    }

    let mut best = ScoredMove {
        position: None,
        score: match player {
            Player::Computer => i32::MIN,
            Player::Human => i32::MAX,
        },
    };

    for pos in board.empty_cells() {
        board.set(pos, Square::Occupied(player));
        let child = minimax(board, remaining_depth - 1, player.opponent());
        board.set(pos, Square::Empty);

        let candidate = ScoredMove {
            position: Some(pos),
            score: child.score,
        };
        let improves = match player {
            Player::Computer => candidate.score > best.score,
            Player::Human => candidate.score < best.score,
        };
        if improves {
            best = candidate;
        }
    }

    best
}

/// Picks the opening move for the computer on an empty board.
///
/// Row and column are drawn independently and uniformly from {0, 1, 2},
/// matching the original engine's sampling, instead of running the
/// full-tree search on nine free cells. Optimality at the opening is
/// deliberately traded for responsiveness.
fn opening_move<R: Rng>(rng: &mut R) -> Position {
    let row = rng.gen_range(0..3usize);
    let col = rng.gen_range(0..3usize);
    Position::ALL[row * 3 + col]
}

/// Returns the optimal move for `player`, or `None` on a terminal board.
///
/// Wraps [`minimax`], deriving the depth from the empty-cell count and
/// handling the random-opening special case. Works on a scratch copy, so
/// the caller's board is never written.
#[instrument(skip(board, rng))]
pub fn best_move_with<R: Rng>(board: &Board, player: Player, rng: &mut R) -> Option<Position> {
    let mut scratch = board.clone();
    let depth = scratch.empty_cells().len() as u8;

    if depth == 0 || check_winner(&scratch).is_some() {
        return None;
    }

    if depth == 9 && player == Player::Computer {
        let pos = opening_move(rng);
        debug!(%pos, "random opening move");
        return Some(pos);
    }

    let best = minimax(&mut scratch, depth, player);
    debug!(position = ?best.position, score = best.score, depth, "search complete");
    best.position
}

/// [`best_move_with`] using the thread-local RNG.
pub fn best_move(board: &Board, player: Player) -> Option<Position> {
    best_move_with(board, player, &mut rand::thread_rng())
}
