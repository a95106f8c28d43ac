//! Properties that hold for every reachable [`BoardGame`].
//!
//! They are checked after each accepted placement in debug builds and can be
//! tested independently.

use crate::rules::evaluate;
use crate::{BoardGame, Cell, Player, TurnState};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Players alternate, player one first.
///
/// Player one owns either as many marks as player two or exactly one more,
/// the history reads One, Two, One, ..., and while the game runs the player
/// to move is the one with fewer marks (player one on a tie).
pub struct AlternatingTurnInvariant;

impl Invariant<BoardGame> for AlternatingTurnInvariant {
    fn holds(game: &BoardGame) -> bool {
        let ones = game.board().count(Player::One);
        let twos = game.board().count(Player::Two);
        if ones != twos && ones != twos + 1 {
            return false;
        }

        let history = game.history();

        if let Some(first) = history.first()
            && first.player != Player::One
        {
            return false;
        }

        if history
            .windows(2)
            .any(|pair| pair[0].player == pair[1].player)
        {
            return false;
        }

        let expected_next = if ones == twos {
            Player::One
        } else {
            Player::Two
        };

        match game.current_player() {
            TurnState::Player(player) => player == expected_next,
            TurnState::NoneActive => true,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns and mark counts differ by at most one"
    }
}

/// Every owned cell has exactly one history entry naming its owner.
pub struct HistoryConsistentInvariant;

impl Invariant<BoardGame> for HistoryConsistentInvariant {
    fn holds(game: &BoardGame) -> bool {
        let owned = game
            .board()
            .cells()
            .filter(|cell| *cell != Cell::Empty)
            .count();

        owned == game.history().len()
            && game
                .history()
                .iter()
                .all(|action| game.board().get(action.position) == Cell::Owned(action.player))
    }

    fn description() -> &'static str {
        "History matches the owned cells"
    }
}

/// The turn is locked exactly when the cached outcome, which must match a
/// fresh evaluation, says the game is over.
pub struct TurnLockInvariant;

impl Invariant<BoardGame> for TurnLockInvariant {
    fn holds(game: &BoardGame) -> bool {
        let outcome = game.current_outcome();
        outcome == evaluate(game.board())
            && outcome.is_concluded() == (game.current_player() == TurnState::NoneActive)
    }

    fn description() -> &'static str {
        "Turn state is NoneActive iff the outcome is concluded"
    }
}

/// All board-game invariants as a composable set.
pub type BoardInvariants = (
    AlternatingTurnInvariant,
    HistoryConsistentInvariant,
    TurnLockInvariant,
);

/// Panics in debug builds if any invariant is violated.
pub(crate) fn assert_invariants(game: &BoardGame) {
    if cfg!(debug_assertions)
        && let Err(violations) = BoardInvariants::check_all(game)
    {
        panic!("Board invariants violated: {:?}", violations);
    }
}
