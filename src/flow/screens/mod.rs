//! Screen implementations for the screen flow.

mod board;
mod menu;

pub use board::BoardScreen;
pub use menu::MenuScreen;
