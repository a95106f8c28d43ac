//! Time Voyager: a menu screen and a tic-tac-toe board.
//!
//! # Architecture
//!
//! - **Board logic**: [`BoardGame`] from the `voyager_tictactoe` crate
//! - **Screen flow**: [`ScreenFlow`], a menu/game state machine over the
//!   [`Screen`] trait
//! - **Input**: logical [`InputEvent`]s, with [`InputTranslator`] mapping raw
//!   pointer and escape-key input onto them
//! - **App**: [`App`] owns configuration and the flow and runs the
//!   single-threaded event loop
//!
//! # Example
//!
//! ```
//! use time_voyager::{FlowState, InputEvent, MenuOption, Outcome, Player, ScreenFlow};
//!
//! let mut flow = ScreenFlow::new();
//! flow.handle(&InputEvent::MenuOptionSelected(MenuOption::Start));
//! assert_eq!(flow.state(), FlowState::GameActive);
//!
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)] {
//!     flow.handle(&InputEvent::CellClicked { row, col });
//! }
//! let game = flow.game().expect("game screen is active");
//! assert_eq!(game.current_outcome(), Outcome::Win(Player::One));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod console;
mod flow;
mod input;

// Crate-level exports - Application
pub use app::App;
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{BoardLayout, ConfigError, GameConfig, MenuLayout, Rect};

// Crate-level exports - Console
pub use console::{ConsoleCommand, HELP, ParseCommandError};

// Crate-level exports - Screen flow
pub use flow::{
    BoardScreen, FlowState, FlowStatus, MenuScreen, Screen, ScreenFlow, ScreenTransition,
};

// Crate-level exports - Input
pub use input::{InputEvent, InputTranslator, MenuOption, RawInput};

// Crate-level exports - Board logic
pub use voyager_tictactoe::{
    Board, BoardError, BoardGame, Cell, Move, MoveError, Outcome, Player, Position, TurnState,
};
