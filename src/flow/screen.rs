//! Screen trait and transition type for the screen flow.

use crate::input::InputEvent;

/// Which screen is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowState {
    /// The menu is shown.
    MenuActive,
    /// A game board is shown.
    GameActive,
}

/// The result of handling an input event on a screen.
///
/// Screens return this from [`Screen::on_input`] to drive the
/// [`ScreenFlow`](crate::ScreenFlow) state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Stay on the current screen.
    Stay,
    /// Navigate to the menu screen.
    GoToMenu,
    /// Navigate to a fresh game screen.
    GoToGame,
    /// Exit the application cleanly.
    Quit,
}

/// Lifecycle of one screen in the flow.
///
/// The flow calls `on_enter` once after the screen becomes active and
/// `on_exit` once before it is dropped. In between, every input event and
/// update tick is delivered synchronously, one at a time.
pub trait Screen {
    /// Which flow state this screen represents.
    fn state(&self) -> FlowState;

    /// Called when the screen becomes active.
    fn on_enter(&mut self) {}

    /// Handles an input event and returns the resulting [`ScreenTransition`].
    fn on_input(&mut self, event: &InputEvent) -> ScreenTransition;

    /// Called once per fixed update tick.
    fn on_tick(&mut self) {}

    /// Called when the screen is about to be discarded.
    fn on_exit(&mut self) {}
}
