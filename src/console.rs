//! Line-oriented console commands.

use derive_more::{Display, Error};
use tracing::instrument;

use crate::input::{InputEvent, MenuOption, RawInput};

/// One parsed console line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// A logical event, delivered as is.
    Input(InputEvent),
    /// A device event, translated against the active screen's layout.
    Raw(RawInput),
    /// Print the current state without changing it.
    Show,
    /// Print the command list.
    Help,
}

/// Help text listing every console command.
pub const HELP: &str = "\
Commands:
  start | settings | exit   choose a menu option
  cancel                    back out of the current screen
  esc                       press the escape key
  click <row> <col>         click a board cell (0-2 each)
  tap <x> <y>               release the pointer at window pixel (x, y)
  show                      print the current screen
  help                      print this list";

/// A console line that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Cannot parse '{}': {}", line, reason)]
pub struct ParseCommandError {
    /// The offending line.
    pub line: String,
    /// What was wrong with it.
    pub reason: &'static str,
}

impl ConsoleCommand {
    /// Parses one console line. Words are case-insensitive.
    #[instrument]
    pub fn parse(line: &str) -> Result<Self, ParseCommandError> {
        let fail = |reason| ParseCommandError {
            line: line.trim().to_string(),
            reason,
        };

        let words: Vec<String> = line.split_whitespace().map(str::to_lowercase).collect();
        let Some((verb, args)) = words.split_first() else {
            return Err(fail("empty command"));
        };

        let numbers = |args: &[String]| -> Result<(u32, u32), ParseCommandError> {
            match args {
                [a, b] => match (a.parse(), b.parse()) {
                    (Ok(a), Ok(b)) => Ok((a, b)),
                    _ => Err(fail("expected two non-negative numbers")),
                },
                _ => Err(fail("expected two numbers")),
            }
        };

        let command = match (verb.as_str(), args) {
            ("start", []) => Self::Input(InputEvent::MenuOptionSelected(MenuOption::Start)),
            ("settings", []) => Self::Input(InputEvent::MenuOptionSelected(MenuOption::Settings)),
            ("exit" | "quit", []) => Self::Input(InputEvent::MenuOptionSelected(MenuOption::Exit)),
            ("cancel", []) => Self::Input(InputEvent::CancelRequested),
            ("esc" | "escape", []) => Self::Raw(RawInput::EscapeReleased),
            ("click", args) => {
                let (row, col) = numbers(args)?;
                Self::Input(InputEvent::CellClicked {
                    row: row as usize,
                    col: col as usize,
                })
            }
            ("tap", args) => {
                let (x, y) = numbers(args)?;
                Self::Raw(RawInput::PointerReleased { x, y })
            }
            ("show", []) => Self::Show,
            ("help" | "?", []) => Self::Help,
            (_, []) => return Err(fail("unknown command")),
            (_, _) => return Err(fail("unexpected arguments")),
        };
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_menu_words() {
        assert_eq!(
            ConsoleCommand::parse("  START "),
            Ok(ConsoleCommand::Input(InputEvent::MenuOptionSelected(
                MenuOption::Start
            )))
        );
        assert_eq!(
            ConsoleCommand::parse("quit"),
            Ok(ConsoleCommand::Input(InputEvent::MenuOptionSelected(
                MenuOption::Exit
            )))
        );
        assert_eq!(
            ConsoleCommand::parse("cancel"),
            Ok(ConsoleCommand::Input(InputEvent::CancelRequested))
        );
    }

    #[test]
    fn test_parse_click_and_tap() {
        assert_eq!(
            ConsoleCommand::parse("click 2 1"),
            Ok(ConsoleCommand::Input(InputEvent::CellClicked { row: 2, col: 1 }))
        );
        assert_eq!(
            ConsoleCommand::parse("tap 300 250"),
            Ok(ConsoleCommand::Raw(RawInput::PointerReleased { x: 300, y: 250 }))
        );
    }

    #[test]
    fn test_out_of_range_click_still_parses() {
        // The board, not the console, decides what is on the board.
        assert_eq!(
            ConsoleCommand::parse("click 5 0"),
            Ok(ConsoleCommand::Input(InputEvent::CellClicked { row: 5, col: 0 }))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(ConsoleCommand::parse("").unwrap_err().reason, "empty command");
        assert_eq!(ConsoleCommand::parse("jump").unwrap_err().reason, "unknown command");
        assert_eq!(
            ConsoleCommand::parse("click 1").unwrap_err().reason,
            "expected two numbers"
        );
        assert_eq!(
            ConsoleCommand::parse("click a -1").unwrap_err().reason,
            "expected two non-negative numbers"
        );
        assert_eq!(
            ConsoleCommand::parse("start now").unwrap_err().reason,
            "unexpected arguments"
        );
    }
}
