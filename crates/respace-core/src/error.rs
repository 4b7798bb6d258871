//! Error types and handling for respace operations

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for respace operations
#[derive(Debug, Error)]
pub enum RespaceError {
    /// Configuration loading or validation errors
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// A style bound that is negative or does not fit a line count
    #[error("Invalid blank line setting '{setting}': {value} (must be between 0 and {max})", max = u32::MAX)]
    InvalidStyle { setting: String, value: i64 },

    /// File system I/O errors
    #[error("IO error for path '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error kind enumeration for categorizing errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    Style,
    Io,
}

impl RespaceError {
    /// Get the error kind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            RespaceError::ConfigError { .. } => ErrorKind::Config,
            RespaceError::InvalidStyle { .. } => ErrorKind::Style,
            RespaceError::IoError { .. } => ErrorKind::Io,
        }
    }

    /// Check if this error is recoverable (can continue processing other files)
    pub fn is_recoverable(&self) -> bool {
        matches!(self.kind(), ErrorKind::Config | ErrorKind::Io)
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create an invalid style error
    pub fn invalid_style(setting: impl Into<String>, value: i64) -> Self {
        Self::InvalidStyle {
            setting: setting.into(),
            value,
        }
    }

    /// Create an IO error with path context
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }
}

/// Convert from std::io::Error
impl From<std::io::Error> for RespaceError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError {
            path: PathBuf::new(),
            source: err,
        }
    }
}
