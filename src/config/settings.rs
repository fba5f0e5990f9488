//! User settings for expense-export
//!
//! Manages where downloads are saved and how default file names are built.

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::paths::ExportPaths;
use crate::error::ExportError;

/// User settings for expense-export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Directory downloads are saved into
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_dir: Option<PathBuf>,

    /// Prefix of generated file names (`<prefix>_<date>.csv`)
    #[serde(default = "default_file_name_prefix")]
    pub file_name_prefix: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_file_name_prefix() -> String {
    "transactions".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            download_dir: None,
            file_name_prefix: default_file_name_prefix(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &ExportPaths) -> Result<Self, ExportError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                ExportError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ExportError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExportPaths) -> Result<(), ExportError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            ExportError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            ExportError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Configured download directory, falling back to the platform default
    pub fn resolve_download_dir(&self, paths: &ExportPaths) -> PathBuf {
        self.download_dir
            .clone()
            .unwrap_or_else(|| paths.default_download_dir())
    }

    /// Default export file name for a given day
    pub fn file_name_for(&self, date: NaiveDate) -> String {
        format!("{}_{}.csv", self.file_name_prefix, date.format("%Y-%m-%d"))
    }
}
