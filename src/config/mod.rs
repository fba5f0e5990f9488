//! Configuration module for expense-export
//!
//! This module provides configuration management including:
//! - Platform path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::ExportPaths;
pub use settings::Settings;
