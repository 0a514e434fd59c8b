//! Typed board positions.
//!
//! The nine cells are a closed set, so they are an enum rather than a
//! pair of loosely ranged integers: out-of-range coordinates cannot be
//! constructed past the parsing boundary.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the board.
///
/// Variant order is row-major (row 0→2, column 0→2) and [`Position::ALL`]
/// preserves it; everything that iterates positions inherits that order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Row 0, column 0.
    TopLeft,
    /// Row 0, column 1.
    TopCenter,
    /// Row 0, column 2.
    TopRight,
    /// Row 1, column 0.
    MiddleLeft,
    /// Row 1, column 1.
    Center,
    /// Row 1, column 2.
    MiddleRight,
    /// Row 2, column 0.
    BottomLeft,
    /// Row 2, column 1.
    BottomCenter,
    /// Row 2, column 2.
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8), row-major.
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Row coordinate (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column coordinate (0-2).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Creates a position from a board index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Position::ALL.get(index).copied()
    }

    /// Creates a position from (row, column) coordinates, each in [0, 2].
    pub fn from_coords(row: usize, col: usize) -> Option<Self> {
        if row > 2 || col > 2 {
            return None;
        }
        Self::from_index(row * 3 + col)
    }

    /// Creates a position from a 1-based menu number (1-9, row-major).
    ///
    /// This is where out-of-range coordinates are caught and reported;
    /// past this boundary they are unrepresentable.
    pub fn from_menu_number(num: usize) -> Result<Self, crate::MoveError> {
        Self::from_index(num.wrapping_sub(1)).ok_or(crate::MoveError::OutOfRange(num))
    }

    /// Parses a menu number (1-9, row-major) or a label like "center".
    ///
    /// This is the front end's parsing entry point; the core never sees
    /// raw input.
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Position> {
        let s = s.trim();

        // Menu numbering is 1-based, matching the rendered board.
        if let Ok(num) = s.parse::<usize>() {
            return Self::from_menu_number(num).ok();
        }

        let s_lower = s.to_lowercase();
        <Position as strum::IntoEnumIterator>::iter()
            .find(|pos| pos.label().to_lowercase() == s_lower)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
