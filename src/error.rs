//! Custom error types for taskstack.
//!
//! The task core never fails: unknown ids are reported through booleans and
//! [`Outcome`](crate::service::Outcome) values. These errors belong to the
//! layers around it (configuration, terminal I/O, menu input).

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for taskstack operations
#[derive(Error, Debug)]
pub enum TaskstackError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Failed to load configuration
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {reason}")]
    InvalidConfig { field: String, reason: String },

    // =========================================================================
    // Input Errors
    // =========================================================================
    /// Menu selection that does not name an option
    #[error("Invalid option: '{input}'")]
    InvalidSelection { input: String },

    // =========================================================================
    // Wrapped Errors
    // =========================================================================
    /// IO error wrapper
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON error wrapper
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl TaskstackError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            path: None,
        }
    }

    /// Create a configuration error with path
    pub fn config_with_path(message: impl Into<String>, path: PathBuf) -> Self {
        Self::Config {
            message: message.into(),
            path: Some(path),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid selection error
    pub fn invalid_selection(input: impl Into<String>) -> Self {
        Self::InvalidSelection {
            input: input.into(),
        }
    }

    /// Check if the shell can keep running after this error
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidSelection { .. })
    }

    /// Get error code for exit status
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config { .. } | Self::InvalidConfig { .. } => 7,
            _ => 1,
        }
    }
}

/// Result type alias for taskstack operations
pub type Result<T> = std::result::Result<T, TaskstackError>;
