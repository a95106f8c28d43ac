//! Runtime configuration loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file at all) yields the
//! classic 810x606 window with a 30 Hz update tick.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

use crate::input::MenuOption;

/// Configuration for the game application.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Fixed update rate of the application loop, in ticks per second.
    #[serde(default = "default_update_rate_hz")]
    update_rate_hz: f64,

    /// Where the board cells sit on screen.
    #[serde(default)]
    board: BoardLayout,

    /// Where the menu buttons sit on screen.
    #[serde(default)]
    menu: MenuLayout,
}

#[instrument]
fn default_update_rate_hz() -> f64 {
    30.0
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            update_rate_hz: default_update_rate_hz(),
            board: BoardLayout::default(),
            menu: MenuLayout::default(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(update_rate_hz = config.update_rate_hz, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration as TOML.
    #[instrument(skip(self))]
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
    }

    /// Duration of one update tick.
    ///
    /// A rate that bypassed validation falls back to the default rate.
    pub fn tick_interval(&self) -> Duration {
        interval_for(self.update_rate_hz)
            .or_else(|| interval_for(default_update_rate_hz()))
            .unwrap_or(Duration::from_millis(33))
    }

    #[instrument(skip(self))]
    fn validate(&self) -> Result<(), ConfigError> {
        if !self.update_rate_hz.is_finite() || self.update_rate_hz <= 0.0 {
            return Err(ConfigError::new(format!(
                "update_rate_hz must be a positive number, got {}",
                self.update_rate_hz
            )));
        }
        if interval_for(self.update_rate_hz).is_none() {
            return Err(ConfigError::new(format!(
                "update_rate_hz {} gives no usable tick interval",
                self.update_rate_hz
            )));
        }
        if self.board.cell_width == 0 || self.board.cell_height == 0 {
            return Err(ConfigError::new("Board cells must be at least one pixel"));
        }
        Ok(())
    }
}

/// Tick period for `rate_hz`, if it is non-zero and representable.
fn interval_for(rate_hz: f64) -> Option<Duration> {
    Duration::try_from_secs_f64(1.0 / rate_hz)
        .ok()
        .filter(|period| !period.is_zero())
}

/// Size of one board cell in pixels; the board's top-left corner is the
/// window origin.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardLayout {
    cell_width: u32,
    cell_height: u32,
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self {
            cell_width: 270,
            cell_height: 202,
        }
    }
}

impl BoardLayout {
    /// Returns the `(row, col)` under pixel `(x, y)`, if it is on the board.
    pub fn cell_at(&self, x: u32, y: u32) -> Option<(usize, usize)> {
        let col = (x / self.cell_width) as usize;
        let row = (y / self.cell_height) as usize;
        (row < 3 && col < 3).then_some((row, col))
    }
}

/// An open pixel rectangle: points on the border are outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct Rect {
    left: u32,
    top: u32,
    right: u32,
    bottom: u32,
}

impl Rect {
    /// Returns true if `(x, y)` lies strictly inside the rectangle.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x > self.left && x < self.right && y > self.top && y < self.bottom
    }
}

/// Button rectangles of the menu screen.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuLayout {
    start: Rect,
    settings: Rect,
    exit: Rect,
}

impl Default for MenuLayout {
    fn default() -> Self {
        Self {
            start: Rect::new(250, 200, 550, 300),
            settings: Rect::new(250, 300, 550, 400),
            exit: Rect::new(250, 400, 550, 500),
        }
    }
}

impl MenuLayout {
    /// Returns the button under pixel `(x, y)`, checked top to bottom.
    pub fn option_at(&self, x: u32, y: u32) -> Option<MenuOption> {
        [
            (self.start, MenuOption::Start),
            (self.settings, MenuOption::Settings),
            (self.exit, MenuOption::Exit),
        ]
        .into_iter()
        .find(|(rect, _)| rect.contains(x, y))
        .map(|(_, option)| option)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
