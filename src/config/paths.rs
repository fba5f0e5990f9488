//! Path management for expense-export
//!
//! ## Path Resolution Order
//!
//! 1. `EXPENSE_EXPORT_DIR` environment variable (if set)
//! 2. The platform config directory from `directories`
//!    (`~/.config/expense-export` on Linux)

use std::path::PathBuf;

use directories::{ProjectDirs, UserDirs};

use crate::error::ExportError;

/// Environment variable overriding the base directory
pub const BASE_DIR_ENV: &str = "EXPENSE_EXPORT_DIR";

/// Manages all paths used by expense-export
#[derive(Debug, Clone)]
pub struct ExportPaths {
    /// Base directory for configuration
    base_dir: PathBuf,
}

impl ExportPaths {
    /// Create a new ExportPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, ExportError> {
        let base_dir = if let Ok(custom) = std::env::var(BASE_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            ProjectDirs::from("", "", "expense-export")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    ExportError::Config("Could not determine the config directory".into())
                })?
        };

        Ok(Self { base_dir })
    }

    /// Create ExportPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Directory used when neither the command line nor settings name one
    ///
    /// The user's download directory when the platform has one, otherwise
    /// `downloads/` under the base directory.
    pub fn default_download_dir(&self) -> PathBuf {
        UserDirs::new()
            .and_then(|dirs| dirs.download_dir().map(|dir| dir.to_path_buf()))
            .unwrap_or_else(|| self.base_dir.join("downloads"))
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), ExportError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ExportError::Io(format!("Failed to create base directory: {}", e)))
    }
}
