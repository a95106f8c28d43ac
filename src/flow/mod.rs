//! Screen flow: the menu/game state machine.

mod controller;
mod screen;
mod screens;

pub use controller::{FlowStatus, ScreenFlow};
pub use screen::{FlowState, Screen, ScreenTransition};
pub use screens::{BoardScreen, MenuScreen};
