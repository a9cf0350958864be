//! Error handling for the health assistant core.

use std::io;
use std::path::{Path, PathBuf};

pub mod util;

/// Specialized error type for symptom matching, vitals analysis and their collaborators
#[derive(Debug, thiserror::Error)]
pub enum HealthError {
    /// Error opening, reading or writing a file
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// Error while reading or writing JSON data
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Caller supplied input that cannot be processed (e.g. an empty symptom query)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Reference data failed validation while loading
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Configuration could not be loaded or is inconsistent
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// File-level failure with the offending path attached
    #[error("{message}: {}", .path.display())]
    FileError {
        /// Path of the file involved
        path: PathBuf,
        /// Description of what went wrong
        message: String,
        /// Underlying IO error, if any
        #[source]
        source: Option<io::Error>,
    },

    /// Another error wrapped with additional context
    #[error("{context}: {source}")]
    Context {
        /// Context describing the failed operation
        context: String,
        /// The wrapped error
        #[source]
        source: Box<HealthError>,
    },
}

impl HealthError {
    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// Create a file error without an underlying IO source
    pub fn file_error(path: &Path, message: impl Into<String>) -> Self {
        Self::FileError {
            path: path.to_path_buf(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a file error wrapping an IO error
    pub fn file_error_with_source(path: &Path, message: impl Into<String>, source: io::Error) -> Self {
        Self::FileError {
            path: path.to_path_buf(),
            message: message.into(),
            source: Some(source),
        }
    }

    /// Attach a path to this error, turning IO errors into file errors
    #[must_use]
    pub fn with_path(self, path: &Path) -> Self {
        match self {
            Self::IoError(e) => Self::FileError {
                path: path.to_path_buf(),
                message: e.to_string(),
                source: Some(e),
            },
            Self::FileError { message, source, .. } => Self::FileError {
                path: path.to_path_buf(),
                message,
                source,
            },
            other => other.context(format!("while processing {}", path.display())),
        }
    }

    /// Wrap this error with additional context
    #[must_use]
    pub fn context(self, context: impl Into<String>) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Whether this error (or the error it wraps) is an invalid input error
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        match self {
            Self::InvalidInput(_) => true,
            Self::Context { source, .. } => source.is_invalid_input(),
            _ => false,
        }
    }
}

/// Result type for health assistant operations
pub type Result<T> = std::result::Result<T, HealthError>;
