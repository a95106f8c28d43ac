//! Logical input events and the pointer-to-event translation layer.
//!
//! Screens only ever see [`InputEvent`]s. Raw pointer releases are mapped to
//! them by [`InputTranslator`], which knows where the board cells and menu
//! buttons sit on screen.

use tracing::{debug, instrument};

use crate::config::{BoardLayout, GameConfig, MenuLayout};
use crate::flow::FlowState;

/// Buttons on the menu screen, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum MenuOption {
    /// Start a new game.
    Start,
    /// Open settings (currently no preferences are exposed).
    Settings,
    /// Quit the application.
    Exit,
}

impl MenuOption {
    /// Returns the display label for this option.
    pub fn label(self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::Settings => "Settings",
            Self::Exit => "Exit",
        }
    }
}

/// An input event as screens understand it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A board cell was clicked.
    CellClicked {
        /// Row, 0-2 top to bottom.
        row: usize,
        /// Column, 0-2 left to right.
        col: usize,
    },
    /// The player asked to back out of the current screen.
    CancelRequested,
    /// A menu button was chosen.
    MenuOptionSelected(MenuOption),
}

/// An input event as a device reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawInput {
    /// A pointer button was released at window pixel `(x, y)`.
    PointerReleased {
        /// Horizontal pixel, from the left edge.
        x: u32,
        /// Vertical pixel, from the top edge.
        y: u32,
    },
    /// The escape key was released.
    EscapeReleased,
}

/// Maps raw device input to logical events for the active screen.
#[derive(Debug, Clone)]
pub struct InputTranslator {
    board: BoardLayout,
    menu: MenuLayout,
}

impl InputTranslator {
    /// Creates a translator using the layouts from `config`.
    #[instrument(skip(config))]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            board: config.board().clone(),
            menu: config.menu().clone(),
        }
    }

    /// Translates a raw input for the given screen.
    ///
    /// Returns `None` when the input lands on nothing the screen reacts to.
    #[instrument(skip(self))]
    pub fn translate(&self, raw: RawInput, state: FlowState) -> Option<InputEvent> {
        let event = match (raw, state) {
            (RawInput::EscapeReleased, _) => Some(InputEvent::CancelRequested),
            (RawInput::PointerReleased { x, y }, FlowState::GameActive) => self
                .board
                .cell_at(x, y)
                .map(|(row, col)| InputEvent::CellClicked { row, col }),
            (RawInput::PointerReleased { x, y }, FlowState::MenuActive) => {
                self.menu.option_at(x, y).map(InputEvent::MenuOptionSelected)
            }
        };
        debug!(?event, "Translated raw input");
        event
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translator() -> InputTranslator {
        InputTranslator::new(&GameConfig::default())
    }

    #[test]
    fn test_escape_cancels_on_any_screen() {
        let t = translator();
        for state in [FlowState::MenuActive, FlowState::GameActive] {
            assert_eq!(
                t.translate(RawInput::EscapeReleased, state),
                Some(InputEvent::CancelRequested)
            );
        }
    }

    #[test]
    fn test_pointer_maps_to_cells() {
        let t = translator();
        let click = |x, y| t.translate(RawInput::PointerReleased { x, y }, FlowState::GameActive);

        assert_eq!(click(0, 0), Some(InputEvent::CellClicked { row: 0, col: 0 }));
        assert_eq!(click(269, 201), Some(InputEvent::CellClicked { row: 0, col: 0 }));
        assert_eq!(click(270, 202), Some(InputEvent::CellClicked { row: 1, col: 1 }));
        assert_eq!(click(809, 605), Some(InputEvent::CellClicked { row: 2, col: 2 }));
        assert_eq!(click(810, 10), None);
        assert_eq!(click(10, 606), None);
    }

    #[test]
    fn test_pointer_maps_to_menu_buttons() {
        let t = translator();
        let click = |x, y| t.translate(RawInput::PointerReleased { x, y }, FlowState::MenuActive);

        assert_eq!(
            click(400, 250),
            Some(InputEvent::MenuOptionSelected(MenuOption::Start))
        );
        assert_eq!(
            click(400, 350),
            Some(InputEvent::MenuOptionSelected(MenuOption::Settings))
        );
        assert_eq!(
            click(400, 450),
            Some(InputEvent::MenuOptionSelected(MenuOption::Exit))
        );
        // Button edges are outside the button.
        assert_eq!(click(250, 250), None);
        assert_eq!(click(400, 200), None);
        assert_eq!(click(100, 250), None);
    }
}
