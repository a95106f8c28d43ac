//! Pure tic-tac-toe board logic.
//!
//! [`BoardGame`] owns the 3x3 grid, whose turn it is, and the outcome of the
//! last placement. It knows nothing about screens, input devices, or drawing;
//! a renderer polls [`BoardGame::cell_at`], [`BoardGame::current_player`] and
//! [`BoardGame::current_outcome`] once per frame.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod game;
mod invariants;
mod position;
mod rules;
mod types;

pub use action::Move;
pub use error::{BoardError, MoveError};
pub use game::BoardGame;
pub use invariants::{
    AlternatingTurnInvariant, BoardInvariants, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation, TurnLockInvariant,
};
pub use position::Position;
pub use rules::{check_winner, evaluate, is_full};
pub use types::{Board, Cell, Outcome, Player, TurnState};
