//! Menu screen: start a game, open settings, or quit.

use tracing::{debug, info, instrument};

use crate::flow::screen::{FlowState, Screen, ScreenTransition};
use crate::input::{InputEvent, MenuOption};

/// State for the menu screen.
#[derive(Debug, Default)]
pub struct MenuScreen;

impl MenuScreen {
    /// Creates a new menu screen.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing MenuScreen");
        Self
    }
}

impl Screen for MenuScreen {
    fn state(&self) -> FlowState {
        FlowState::MenuActive
    }

    #[instrument(skip(self))]
    fn on_input(&mut self, event: &InputEvent) -> ScreenTransition {
        match event {
            InputEvent::MenuOptionSelected(option) => {
                info!(option = option.label(), "Menu option selected");
                match option {
                    MenuOption::Start => ScreenTransition::GoToGame,
                    MenuOption::Settings => {
                        debug!("No settings are configurable yet");
                        ScreenTransition::Stay
                    }
                    MenuOption::Exit => ScreenTransition::Quit,
                }
            }
            InputEvent::CancelRequested => {
                info!("Cancel on menu, quitting");
                ScreenTransition::Quit
            }
            InputEvent::CellClicked { .. } => ScreenTransition::Stay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_options_map_to_transitions() {
        let mut menu = MenuScreen::new();
        let select = |option| InputEvent::MenuOptionSelected(option);

        assert_eq!(menu.on_input(&select(MenuOption::Start)), ScreenTransition::GoToGame);
        assert_eq!(menu.on_input(&select(MenuOption::Settings)), ScreenTransition::Stay);
        assert_eq!(menu.on_input(&select(MenuOption::Exit)), ScreenTransition::Quit);
    }

    #[test]
    fn test_cell_clicks_are_ignored() {
        let mut menu = MenuScreen::new();
        assert_eq!(
            menu.on_input(&InputEvent::CellClicked { row: 1, col: 1 }),
            ScreenTransition::Stay
        );
    }
}
