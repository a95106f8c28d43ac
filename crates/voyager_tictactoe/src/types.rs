//! Core domain types for the board game.

use serde::{Deserialize, Serialize};

use crate::Position;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player one (plays `X`, moves first).
    One,
    /// Player two (plays `O`).
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Returns the mark this player draws on the board.
    pub fn mark(self) -> char {
        match self {
            Player::One => 'X',
            Player::Two => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mark())
    }
}

/// One square of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Owned by a player.
    Owned(Player),
}

/// 3x3 tic-tac-toe board, addressed by [`Position`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row()][pos.col()]
    }

    /// Sets the cell at the given position.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row()][pos.col()] = cell;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Iterates all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Counts the cells owned by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells()
            .filter(|cell| *cell == Cell::Owned(player))
            .count()
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty cells show their `row,col` coordinates so a console player
    /// can read off the move to type.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let symbol = match cell {
                    Cell::Empty => format!("{},{}", row, col),
                    Cell::Owned(player) => format!(" {} ", player.mark()),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n---+---+---\n");
            }
        }
        result
    }
}

/// Whose move is next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnState {
    /// The given player moves next.
    Player(Player),
    /// The game has concluded and awaits a reset.
    NoneActive,
}

impl TurnState {
    /// Returns the active player, if the game is still running.
    pub fn player(self) -> Option<Player> {
        match self {
            TurnState::Player(player) => Some(player),
            TurnState::NoneActive => None,
        }
    }
}

/// Result of evaluating the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Nobody has won and empty cells remain.
    InProgress,
    /// A player owns a complete line.
    Win(Player),
    /// The board is full with no complete line.
    Tie,
}

impl Outcome {
    /// Returns true once the game has concluded.
    pub fn is_concluded(self) -> bool {
        self != Outcome::InProgress
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In Progress"),
            Outcome::Win(player) => write!(f, "{}'s Win!", player.mark()),
            Outcome::Tie => write!(f, "Tie Game"),
        }
    }
}
