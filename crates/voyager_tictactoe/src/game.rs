//! The board game engine.

use tracing::{debug, info, instrument};

use crate::invariants::assert_invariants;
use crate::rules::evaluate;
use crate::{Board, BoardError, Cell, Move, MoveError, Outcome, Player, Position, TurnState};

/// Tic-tac-toe engine: the grid, whose turn it is, and the last outcome.
///
/// The outcome is recomputed from the whole board after every accepted
/// placement. Once it is no longer [`Outcome::InProgress`] the turn state
/// is [`TurnState::NoneActive`] and every placement is refused until
/// [`BoardGame::new_game`] runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardGame {
    pub(crate) board: Board,
    pub(crate) turn: TurnState,
    pub(crate) outcome: Outcome,
    pub(crate) history: Vec<Move>,
}

impl BoardGame {
    /// Creates a game ready for player one's first move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: TurnState::Player(Player::One),
            outcome: Outcome::InProgress,
            history: Vec::new(),
        }
    }

    /// Clears the board and hands the first move to player one.
    #[instrument(skip(self), fields(moves_discarded = self.history.len()))]
    pub fn new_game(&mut self) {
        info!("Starting new game");
        *self = Self::new();
    }

    /// Places the current player's mark at `(row, col)`.
    ///
    /// Returns the outcome evaluated after the placement.
    ///
    /// # Errors
    ///
    /// - [`BoardError::OutOfRange`] if a coordinate is outside `0..=2`.
    /// - [`BoardError::InvalidMove`] if the game is over or the cell is owned.
    ///
    /// A refused placement leaves the game untouched.
    #[instrument(skip(self), fields(turn = ?self.turn))]
    pub fn place_mark(&mut self, row: usize, col: usize) -> Result<Outcome, BoardError> {
        let position = Position::from_row_col(row, col)?;

        let player = self.turn.player().ok_or(MoveError::GameOver)?;

        if !self.board.is_empty(position) {
            return Err(MoveError::SquareOccupied(position).into());
        }

        self.board.set(position, Cell::Owned(player));
        self.history.push(Move::new(player, position));

        self.outcome = evaluate(&self.board);
        self.turn = if self.outcome.is_concluded() {
            info!(outcome = %self.outcome, "Game concluded");
            TurnState::NoneActive
        } else {
            TurnState::Player(player.opponent())
        };

        debug!(%position, %player, outcome = ?self.outcome, "Mark placed");
        assert_invariants(self);

        Ok(self.outcome)
    }

    /// Places a mark, silently ignoring a refused placement.
    ///
    /// Returns the current outcome whether or not the mark was placed.
    #[instrument(skip(self))]
    pub fn try_place_mark(&mut self, row: usize, col: usize) -> Outcome {
        match self.place_mark(row, col) {
            Ok(outcome) => outcome,
            Err(e) => {
                debug!(error = %e, "Placement ignored");
                self.outcome
            }
        }
    }

    /// Returns whose move is next.
    pub fn current_player(&self) -> TurnState {
        self.turn
    }

    /// Returns the outcome of the last evaluation.
    pub fn current_outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfRange`] if a coordinate is outside `0..=2`.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        Position::from_row_col(row, col).map(|pos| self.board.get(pos))
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the placements made since the last reset, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }
}

impl Default for BoardGame {
    fn default() -> Self {
        Self::new()
    }
}
