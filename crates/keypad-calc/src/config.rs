//! Application configuration
//!
//! Loaded from an optional YAML file; every field has a default so an
//! empty file (or no file) is valid.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AppError, AppResult};

/// Log verbosity requested on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Verbosity {
    /// Use the configured filter
    #[default]
    Normal,
    /// Debug-level logs
    Verbose,
    /// Trace-level logs
    Trace,
}

impl Verbosity {
    /// Maps a `-v` count to a verbosity
    #[must_use]
    pub const fn from_occurrences(count: u8) -> Self {
        match count {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Trace,
        }
    }

    /// Filter directive that overrides the configured one, if any
    #[must_use]
    pub const fn filter_override(self) -> Option<&'static str> {
        match self {
            Self::Normal => None,
            Self::Verbose => Some("debug"),
            Self::Trace => Some("trace"),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset
    pub log_filter: String,
    /// Log file; the TUI writes no logs without one
    pub log_file: Option<PathBuf>,
    /// Capture mouse clicks in the TUI
    pub mouse_capture: bool,
    /// Show the help panel next to the keypad
    pub show_help: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: "warn".to_string(),
            log_file: None,
            mouse_capture: true,
            show_help: true,
        }
    }
}

impl AppConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a YAML configuration file
    pub fn load(path: &Path) -> AppResult<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| AppError::config(path, format!("cannot read file: {e}")))?;
        let config = Self::from_yaml(&text).map_err(|e| AppError::config(path, e.to_string()))?;
        debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Loads `path` if given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> AppResult<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    /// Parses configuration from YAML text
    pub fn from_yaml(text: &str) -> AppResult<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml_ng::from_str(text)?)
    }

    /// Serializes configuration to YAML
    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Set log filter
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Set log file
    #[must_use]
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Set mouse capture
    #[must_use]
    pub const fn with_mouse_capture(mut self, enabled: bool) -> Self {
        self.mouse_capture = enabled;
        self
    }

    /// Set help panel visibility
    #[must_use]
    pub const fn with_show_help(mut self, show: bool) -> Self {
        self.show_help = show;
        self
    }

    /// Applies a command-line verbosity on top of the configured filter
    #[must_use]
    pub fn with_verbosity(self, verbosity: Verbosity) -> Self {
        match verbosity.filter_override() {
            Some(filter) => self.with_log_filter(filter),
            None => self,
        }
    }
}
