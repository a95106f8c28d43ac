//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! board storage so invariants and tests can evaluate any grid directly.

mod draw;
mod win;

pub use draw::is_full;
pub use win::check_winner;

use crate::{Board, Outcome};
use tracing::instrument;

/// Evaluates the whole board.
///
/// A complete line wins; otherwise any empty cell keeps the game running,
/// and a full board is a tie. The scan always covers every cell, so the
/// result does not depend on the order moves were made in.
#[instrument(skip(board), ret)]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        return Outcome::Win(winner);
    }
    if is_full(board) {
        Outcome::Tie
    } else {
        Outcome::InProgress
    }
}
