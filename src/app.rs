//! The application: owns configuration and the screen flow, and runs the
//! single-threaded event loop.

use derive_getters::Getters;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, info, instrument, warn};
use voyager_tictactoe::TurnState;

use crate::config::GameConfig;
use crate::console::{ConsoleCommand, HELP};
use crate::flow::{FlowState, FlowStatus, ScreenFlow};
use crate::input::{InputTranslator, MenuOption};

/// Top-level application object.
#[derive(Debug, Getters)]
pub struct App {
    config: GameConfig,
    flow: ScreenFlow,
    translator: InputTranslator,
}

impl App {
    /// Creates an application showing the menu.
    #[instrument(skip(config))]
    pub fn new(config: GameConfig) -> Self {
        let translator = InputTranslator::new(&config);
        Self {
            config,
            flow: ScreenFlow::new(),
            translator,
        }
    }

    /// Runs the event loop until the flow exits or `input` is exhausted.
    ///
    /// Each console line is handled to completion, and its report written,
    /// before the next line or tick is taken.
    #[instrument(skip_all, fields(update_rate_hz = *self.config.update_rate_hz()))]
    pub async fn run<R, W>(&mut self, input: R, mut output: W) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!("Starting event loop");
        let mut ticker = interval(self.config.tick_interval());
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut lines = input.lines();

        output.write_all(self.report().as_bytes()).await?;
        output.flush().await?;

        loop {
            tokio::select! {
                _ = ticker.tick() => self.flow.tick(),
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        info!("Input closed");
                        break;
                    };
                    let reply = self.handle_line(&line);
                    output.write_all(reply.as_bytes()).await?;
                    output.flush().await?;
                    if self.flow.status() == FlowStatus::Exited {
                        break;
                    }
                }
            }
        }

        info!("Event loop finished");
        Ok(())
    }

    /// Handles one console line and returns the text to show for it.
    #[instrument(skip(self))]
    pub fn handle_line(&mut self, line: &str) -> String {
        if line.trim().is_empty() {
            return String::new();
        }

        let command = match ConsoleCommand::parse(line) {
            Ok(command) => command,
            Err(e) => {
                warn!(error = %e, "Bad console input");
                return format!("{}\nType 'help' for commands.\n", e);
            }
        };

        let event = match command {
            ConsoleCommand::Help => return format!("{}\n", HELP),
            ConsoleCommand::Show => return self.report(),
            ConsoleCommand::Input(event) => Some(event),
            ConsoleCommand::Raw(raw) => self.translator.translate(raw, self.flow.state()),
        };

        match event {
            Some(event) => {
                self.flow.handle(&event);
            }
            None => debug!("Input landed on nothing"),
        }
        self.report()
    }

    /// Describes what a renderer would draw right now.
    pub fn report(&self) -> String {
        if self.flow.status() == FlowStatus::Exited {
            return "Goodbye.\n".to_string();
        }

        match self.flow.state() {
            FlowState::MenuActive => {
                let options: Vec<_> = <MenuOption as strum::IntoEnumIterator>::iter()
                    .map(MenuOption::label)
                    .collect();
                format!("== Menu ==\n[ {} ]\n", options.join(" | "))
            }
            FlowState::GameActive => {
                let Some(screen) = self.flow.board_screen() else {
                    return String::new();
                };
                let game = screen.game();
                let status = match game.current_player() {
                    TurnState::Player(player) => format!("{} to move", player),
                    TurnState::NoneActive => {
                        format!("{} (click any cell for a new game)", game.current_outcome())
                    }
                };
                let seconds = screen.ticks() as f64 / *self.config.update_rate_hz();
                format!(
                    "== Game ==\n{}\n{} | {:.1}s\n",
                    game.board().display(),
                    status,
                    seconds
                )
            }
        }
    }
}
