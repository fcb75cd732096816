//! Settings loaded from a TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use rewind_tictactoe::SortOrder;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

use crate::cli::Cli;

/// User-configurable settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Initial state of the sort toggle.
    #[serde(default = "default_sort_ascending")]
    sort_ascending: bool,

    /// File the log is written to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_sort_ascending() -> bool {
    true
}

fn default_log_file() -> PathBuf {
    PathBuf::from("rewind.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sort_ascending: default_sort_ascending(),
            log_file: default_log_file(),
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    ///
    /// A missing file yields the defaults; an unreadable or malformed one is
    /// an error.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("No settings file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;
        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;

        debug!(?settings, "Settings loaded");
        Ok(settings)
    }

    /// Loads the file named on the command line and applies CLI overrides.
    #[instrument(skip(cli))]
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let mut settings = Self::load(&cli.config)?;
        if cli.descending {
            settings.sort_ascending = false;
        }
        if let Some(log_file) = &cli.log_file {
            settings.log_file = log_file.clone();
        }
        Ok(settings)
    }

    /// Initial move list order.
    pub fn sort_order(&self) -> SortOrder {
        SortOrder::from_ascending(self.sort_ascending)
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
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
