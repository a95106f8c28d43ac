//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Player, Position};
use tracing::instrument;

/// Every line that wins, in evaluation order: rows top to bottom, columns
/// left to right, then the main and anti diagonals.
const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first complete line found, `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        let cell = board.get(a);
        if let Cell::Owned(player) = cell
            && cell == board.get(b)
            && cell == board.get(c)
        {
            return Some(player);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(player: Player, positions: &[Position]) -> Board {
        let mut board = Board::new();
        for pos in positions {
            board.set(*pos, Cell::Owned(player));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(
            Player::One,
            &[Position::TopLeft, Position::TopCenter, Position::TopRight],
        );
        assert_eq!(check_winner(&board), Some(Player::One));
    }

    #[test]
    fn test_winner_middle_column() {
        let board = board_with(
            Player::Two,
            &[Position::TopCenter, Position::Center, Position::BottomCenter],
        );
        assert_eq!(check_winner(&board), Some(Player::Two));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(
            Player::Two,
            &[Position::TopRight, Position::Center, Position::BottomLeft],
        );
        assert_eq!(check_winner(&board), Some(Player::Two));
    }

    #[test]
    fn test_first_line_in_order_wins() {
        // Not reachable in alternating play, but the order must be stable.
        let mut board = board_with(
            Player::One,
            &[Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
        );
        board.set(Position::TopLeft, Cell::Owned(Player::Two));
        board.set(Position::TopCenter, Cell::Owned(Player::Two));
        board.set(Position::TopRight, Cell::Owned(Player::Two));
        assert_eq!(check_winner(&board), Some(Player::Two));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = board_with(Player::One, &[Position::TopLeft, Position::TopCenter]);
        board.set(Position::TopRight, Cell::Owned(Player::Two));
        assert_eq!(check_winner(&board), None);
    }
}
