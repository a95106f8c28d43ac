//! Game screen: a tic-tac-toe board played by clicking cells.

use tracing::{debug, info, instrument, trace};
use voyager_tictactoe::{BoardGame, Position};

use crate::flow::screen::{FlowState, Screen, ScreenTransition};
use crate::input::InputEvent;

/// State for the game screen.
#[derive(Debug, Default)]
pub struct BoardScreen {
    game: BoardGame,
    ticks: u64,
}

impl BoardScreen {
    /// Creates a new game screen. The board is reset again on enter.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing BoardScreen");
        Self::default()
    }

    /// Returns the game being played.
    pub fn game(&self) -> &BoardGame {
        &self.game
    }

    /// Update ticks elapsed since the current game started.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    #[instrument(skip(self))]
    fn restart(&mut self) {
        self.game.new_game();
        self.ticks = 0;
    }
}

impl Screen for BoardScreen {
    fn state(&self) -> FlowState {
        FlowState::GameActive
    }

    #[instrument(skip(self))]
    fn on_enter(&mut self) {
        info!("Entering game screen");
        self.restart();
    }

    #[instrument(skip(self))]
    fn on_input(&mut self, event: &InputEvent) -> ScreenTransition {
        match *event {
            InputEvent::CancelRequested => {
                info!("Leaving game screen");
                ScreenTransition::GoToMenu
            }
            InputEvent::CellClicked { row, col } if self.game.current_outcome().is_concluded() => {
                match Position::from_row_col(row, col) {
                    Ok(_) => {
                        info!(
                            outcome = %self.game.current_outcome(),
                            "Click after game end, restarting"
                        );
                        self.restart();
                    }
                    Err(e) => debug!(error = %e, "Ignoring off-board click after game end"),
                }
                ScreenTransition::Stay
            }
            InputEvent::CellClicked { row, col } => {
                if let Err(e) = self.game.place_mark(row, col) {
                    debug!(error = %e, row, col, "Ignoring click");
                }
                ScreenTransition::Stay
            }
            InputEvent::MenuOptionSelected(_) => ScreenTransition::Stay,
        }
    }

    fn on_tick(&mut self) {
        self.ticks += 1;
        trace!(ticks = self.ticks, "Game tick");
    }

    #[instrument(skip(self))]
    fn on_exit(&mut self) {
        info!(
            outcome = %self.game.current_outcome(),
            moves = self.game.history().len(),
            "Discarding game"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voyager_tictactoe::{Cell, Outcome, Player, TurnState};

    fn click(row: usize, col: usize) -> InputEvent {
        InputEvent::CellClicked { row, col }
    }

    #[test]
    fn test_occupied_click_is_ignored() {
        let mut screen = BoardScreen::new();
        screen.on_enter();
        screen.on_input(&click(1, 1));
        screen.on_input(&click(1, 1));

        assert_eq!(screen.game().cell_at(1, 1), Ok(Cell::Owned(Player::One)));
        assert_eq!(screen.game().current_player(), TurnState::Player(Player::Two));
    }

    #[test]
    fn test_click_after_win_restarts() {
        let mut screen = BoardScreen::new();
        screen.on_enter();
        for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)] {
            screen.on_input(&click(row, col));
        }
        assert_eq!(screen.game().current_outcome(), Outcome::Win(Player::One));
        screen.on_tick();

        assert_eq!(screen.on_input(&click(2, 2)), ScreenTransition::Stay);
        assert_eq!(screen.game().current_outcome(), Outcome::InProgress);
        assert!(screen.game().history().is_empty());
        assert_eq!(screen.game().cell_at(2, 2), Ok(Cell::Empty));
        assert_eq!(screen.ticks(), 0);
    }

    #[test]
    fn test_off_board_click_after_win_keeps_result() {
        let mut screen = BoardScreen::new();
        screen.on_enter();
        for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)] {
            screen.on_input(&click(row, col));
        }

        assert_eq!(screen.on_input(&click(9, 9)), ScreenTransition::Stay);
        assert_eq!(screen.game().current_outcome(), Outcome::Win(Player::One));
        assert_eq!(screen.game().history().len(), 5);
        assert_eq!(screen.game().current_player(), TurnState::NoneActive);
    }

    #[test]
    fn test_ticks_count_up() {
        let mut screen = BoardScreen::new();
        screen.on_enter();
        screen.on_tick();
        screen.on_tick();
        assert_eq!(screen.ticks(), 2);
    }
}
