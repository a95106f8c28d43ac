//! Full-board detection for tic-tac-toe.

use crate::{Board, Cell};
use tracing::instrument;

/// Checks if every cell is owned.
///
/// A full board with no winner is a tie.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().all(|cell| cell != Cell::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::evaluate;
    use crate::{Outcome, Player, Position};

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Position::Center, Cell::Owned(Player::One));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_tie_detection() {
        // X O X / O X X / O X O
        let layout = [
            Player::One,
            Player::Two,
            Player::One,
            Player::Two,
            Player::One,
            Player::One,
            Player::Two,
            Player::One,
            Player::Two,
        ];
        let mut board = Board::new();
        for (pos, player) in Position::ALL.into_iter().zip(layout) {
            board.set(pos, Cell::Owned(player));
        }

        assert!(is_full(&board));
        assert_eq!(evaluate(&board), Outcome::Tie);
    }

    #[test]
    fn test_win_on_full_board_is_not_a_tie() {
        // X X X / O O X / X O O
        let layout = [
            Player::One,
            Player::One,
            Player::One,
            Player::Two,
            Player::Two,
            Player::One,
            Player::One,
            Player::Two,
            Player::Two,
        ];
        let mut board = Board::new();
        for (pos, player) in Position::ALL.into_iter().zip(layout) {
            board.set(pos, Cell::Owned(player));
        }

        assert!(is_full(&board));
        assert_eq!(evaluate(&board), Outcome::Win(Player::One));
    }
}
