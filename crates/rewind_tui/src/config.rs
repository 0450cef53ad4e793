//! Terminal client configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use rewind_tictactoe::ListOrder;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for the terminal client, loaded from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Start with the move list newest first.
    #[serde(default)]
    descending: bool,

    /// File the tracing subscriber writes to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Filter directive used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("rewind.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            descending: false,
            log_file: default_log_file(),
            log_filter: default_log_filter(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(descending = config.descending, "Config loaded successfully");
        Ok(config)
    }

    /// Applies command-line overrides. Flags only ever switch options on.
    pub fn with_overrides(mut self, descending: bool, log_file: Option<PathBuf>) -> Self {
        self.descending |= descending;
        if let Some(log_file) = log_file {
            self.log_file = log_file;
        }
        self
    }

    /// Initial move list order.
    pub fn list_order(&self) -> ListOrder {
        if self.descending {
            ListOrder::Descending
        } else {
            ListOrder::Ascending
        }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: TuiConfig = toml::from_str("").unwrap();
        assert_eq!(config, TuiConfig::default());
        assert_eq!(config.list_order(), ListOrder::Ascending);
    }

    #[test]
    fn test_overrides() {
        let config = TuiConfig::default().with_overrides(true, Some(PathBuf::from("other.log")));
        assert_eq!(config.list_order(), ListOrder::Descending);
        assert_eq!(config.log_file(), &PathBuf::from("other.log"));
        assert_eq!(config.log_filter(), "info");
    }
}
