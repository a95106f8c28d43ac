//! Errors raised by board operations.

use crate::Position;

/// Why a placement was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The cell at the position is already owned.
    #[display("Cell {} is already owned", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The game has concluded and awaits a new game.
    #[display("Game is already over")]
    GameOver,
}

/// Error returned by [`BoardGame`](crate::BoardGame) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// A coordinate lies outside `0..=2`. This is a caller bug, not a
    /// runtime condition.
    #[display("Cell ({}, {}) is off the board", row, col)]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The move is well-formed but not legal right now.
    #[display("Invalid move: {}", _0)]
    InvalidMove(MoveError),
}

impl From<MoveError> for BoardError {
    fn from(err: MoveError) -> Self {
        Self::InvalidMove(err)
    }
}
