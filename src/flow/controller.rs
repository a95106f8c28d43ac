//! Screen flow controller: owns the active screen and applies transitions.

use tracing::{debug, info, instrument};
use voyager_tictactoe::BoardGame;

use crate::flow::screen::{FlowState, Screen, ScreenTransition};
use crate::flow::screens::{BoardScreen, MenuScreen};
use crate::input::InputEvent;

/// Active screen in the flow.
#[derive(Debug)]
enum ActiveScreen {
    Menu(MenuScreen),
    Game(BoardScreen),
}

impl ActiveScreen {
    fn screen_mut(&mut self) -> &mut dyn Screen {
        match self {
            ActiveScreen::Menu(s) => s,
            ActiveScreen::Game(s) => s,
        }
    }

    fn screen(&self) -> &dyn Screen {
        match self {
            ActiveScreen::Menu(s) => s,
            ActiveScreen::Game(s) => s,
        }
    }
}

/// Whether the flow is still accepting input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowStatus {
    /// A screen is active.
    Running,
    /// Exit was requested; all further input is ignored.
    Exited,
}

/// The menu/game state machine.
///
/// Starts on the menu. Exactly one screen is active at a time; the flow
/// owns it outright and replaces it on every screen change.
#[derive(Debug)]
pub struct ScreenFlow {
    active: ActiveScreen,
    status: FlowStatus,
}

impl ScreenFlow {
    /// Creates a flow showing the menu.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating ScreenFlow");
        let mut active = ActiveScreen::Menu(MenuScreen::new());
        active.screen_mut().on_enter();
        Self {
            active,
            status: FlowStatus::Running,
        }
    }

    /// Delivers one input event to the active screen and applies the
    /// resulting transition.
    #[instrument(skip(self))]
    pub fn handle(&mut self, event: &InputEvent) -> FlowStatus {
        if self.status == FlowStatus::Exited {
            debug!("Flow exited, ignoring input");
            return self.status;
        }

        let transition = self.active.screen_mut().on_input(event);
        self.apply_transition(transition);
        self.status
    }

    /// Advances the active screen by one update tick.
    pub fn tick(&mut self) {
        if self.status == FlowStatus::Running {
            self.active.screen_mut().on_tick();
        }
    }

    /// Which screen is active (the last one, once exited).
    pub fn state(&self) -> FlowState {
        self.active.screen().state()
    }

    /// Whether the flow is still running.
    pub fn status(&self) -> FlowStatus {
        self.status
    }

    /// Returns the game screen, while it is active.
    pub fn board_screen(&self) -> Option<&BoardScreen> {
        match &self.active {
            ActiveScreen::Game(screen) => Some(screen),
            ActiveScreen::Menu(_) => None,
        }
    }

    /// Returns the game being played, while the game screen is active.
    pub fn game(&self) -> Option<&BoardGame> {
        self.board_screen().map(BoardScreen::game)
    }

    #[instrument(skip(self))]
    fn apply_transition(&mut self, transition: ScreenTransition) {
        let next = match transition {
            ScreenTransition::Stay => return,
            ScreenTransition::GoToMenu => {
                info!("Navigating to menu");
                ActiveScreen::Menu(MenuScreen::new())
            }
            ScreenTransition::GoToGame => {
                info!("Navigating to game");
                ActiveScreen::Game(BoardScreen::new())
            }
            ScreenTransition::Quit => {
                info!("Flow quitting");
                self.active.screen_mut().on_exit();
                self.status = FlowStatus::Exited;
                return;
            }
        };

        let mut previous = std::mem::replace(&mut self.active, next);
        previous.screen_mut().on_exit();
        self.active.screen_mut().on_enter();
        debug!(state = ?self.state(), "Transition applied");
    }
}

impl Default for ScreenFlow {
    fn default() -> Self {
        Self::new()
    }
}
