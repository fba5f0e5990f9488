//! Custom error types for expense-export
//!
//! This module defines the error hierarchy for the library using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for expense-export operations
#[derive(Error, Debug)]
pub enum ExportError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for input data
    #[error("Validation error: {0}")]
    Validation(String),

    /// The host failed while offering a download
    #[error("Download error: {0}")]
    Download(String),

    /// A download file name that cannot be saved as-is
    #[error("Invalid file name: {0}")]
    InvalidFileName(String),
}

impl ExportError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error came from the download host
    pub fn is_download(&self) -> bool {
        matches!(self, Self::Download(_) | Self::InvalidFileName(_))
    }
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for expense-export operations
pub type ExportResult<T> = Result<T, ExportError>;
