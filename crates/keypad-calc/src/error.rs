//! Error types for the application shell

use std::path::PathBuf;

use thiserror::Error;

/// Result type for application operations
pub type AppResult<T> = Result<T, AppError>;

/// Errors that can stop the binary
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error in {}: {message}", path.display())]
    Config {
        /// File being loaded
        path: PathBuf,
        /// Error message
        message: String,
    },

    /// YAML (de)serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Feature compiled out of this build
    #[error("Unsupported: {message}")]
    Unsupported {
        /// Error message
        message: String,
    },
}

impl AppError {
    /// Create a configuration error
    #[must_use]
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an unsupported-feature error
    #[must_use]
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::Unsupported {
            message: message.into(),
        }
    }
}
