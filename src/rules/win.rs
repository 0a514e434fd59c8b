//! Win detection logic.

use crate::{Board, Player, Position, Square};
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if that player has three in a row, `None`
/// otherwise. Lines are scanned in a fixed order (rows top to bottom,
/// columns left to right, main diagonal, anti-diagonal) and the first
/// complete line wins. A board with two complete lines of different marks
/// is unreachable under alternating play; the fixed scan order keeps the
/// answer deterministic even for such hand-built boards.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    const LINES: [[Position; 3]; 8] = [
        // Rows
        [Position::TopLeft, Position::TopCenter, Position::TopRight],
        [
            Position::MiddleLeft,
            Position::Center,
            Position::MiddleRight,
        ],
        [
            Position::BottomLeft,
            Position::BottomCenter,
            Position::BottomRight,
        ],
        // Columns
        [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::BottomLeft,
        ],
        [
            Position::TopCenter,
            Position::Center,
            Position::BottomCenter,
        ],
        [
            Position::TopRight,
            Position::MiddleRight,
            Position::BottomRight,
        ],
        // Diagonals
        [Position::TopLeft, Position::Center, Position::BottomRight],
        [Position::TopRight, Position::Center, Position::BottomLeft],
    ];

    for [a, b, c] in LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return match sq {
                Square::Occupied(player) => Some(player),
                Square::Empty => None,
            };
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
            board.place(pos, Player::Human).unwrap();
        }
        assert_eq!(check_winner(&board), Some(Player::Human));
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new();
        for pos in [Position::TopLeft, Position::Center, Position::BottomRight] {
            board.place(pos, Player::Computer).unwrap();
        }
        assert_eq!(check_winner(&board), Some(Player::Computer));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Player::Human).unwrap();
        board.place(Position::TopCenter, Player::Human).unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_all_eight_lines() {
        const LINES: [[Position; 3]; 8] = [
            [Position::TopLeft, Position::TopCenter, Position::TopRight],
            [
                Position::MiddleLeft,
                Position::Center,
                Position::MiddleRight,
            ],
            [
                Position::BottomLeft,
                Position::BottomCenter,
                Position::BottomRight,
            ],
            [
                Position::TopLeft,
                Position::MiddleLeft,
                Position::BottomLeft,
            ],
            [
                Position::TopCenter,
                Position::Center,
                Position::BottomCenter,
            ],
            [
                Position::TopRight,
                Position::MiddleRight,
                Position::BottomRight,
            ],
            [Position::TopLeft, Position::Center, Position::BottomRight],
            [Position::TopRight, Position::Center, Position::BottomLeft],
        ];

        for line in LINES {
            for player in [Player::Human, Player::Computer] {
                let mut board = Board::new();
                for pos in line {
                    board.place(pos, player).unwrap();
                }
                assert_eq!(check_winner(&board), Some(player), "line {line:?}");
            }
        }
    }
}
