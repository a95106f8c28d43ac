//! Named board positions and their row/column coordinates.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::BoardError;

/// A position on the board.
///
/// Variants are declared in row-major order, so the discriminant is the
/// row-major index (0-8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
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

    /// Creates a position from row and column coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfRange`] if either coordinate is outside `0..=2`.
    #[instrument]
    pub fn from_row_col(row: usize, col: usize) -> Result<Self, BoardError> {
        if row > 2 || col > 2 {
            return Err(BoardError::OutOfRange { row, col });
        }
        Ok(Self::ALL[row * 3 + col])
    }

    /// Converts position to row-major board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Row of this position (0-2, top to bottom).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this position (0-2, left to right).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

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
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_col_round_trip() {
        for pos in Position::ALL {
            assert_eq!(Position::from_row_col(pos.row(), pos.col()), Ok(pos));
        }
        assert_eq!(Position::Center.row(), 1);
        assert_eq!(Position::BottomLeft.col(), 0);
    }

    #[test]
    fn test_from_row_col_out_of_range() {
        assert_eq!(
            Position::from_row_col(3, 0),
            Err(BoardError::OutOfRange { row: 3, col: 0 })
        );
        assert_eq!(
            Position::from_row_col(0, 7),
            Err(BoardError::OutOfRange { row: 0, col: 7 })
        );
    }
}
