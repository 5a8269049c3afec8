//! Shared error types for the estimator

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for fpa-estimator operations
#[derive(Debug, Error)]
pub enum Error {
    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Precondition violations found while validating a project configuration
    #[error("Validation failed with {count} error(s): {}", errors.join("; "))]
    Validation { count: usize, errors: Vec<String> },

    /// Requested estimate or resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Unsupported input format or feature
    #[error("Unsupported: {0}")]
    Unsupported(String),

    /// Generic errors with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Create a file system error with path context
    pub fn file_system(
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: Some(path.into()),
            source: Some(source),
        }
    }

    /// Create a validation error from the collected messages
    pub fn validation(errors: Vec<String>) -> Self {
        Self::Validation {
            count: errors.len(),
            errors,
        }
    }

    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            message: self.to_string(),
        }
    }

    /// Whether the user can fix this by editing their input files
    pub fn is_user_fixable(&self) -> bool {
        matches!(
            self,
            Self::Configuration(_)
                | Self::Validation { .. }
                | Self::Json(_)
                | Self::Toml(_)
                | Self::Unsupported(_)
        )
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}
