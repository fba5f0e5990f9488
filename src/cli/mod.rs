//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the library.

pub mod export;
pub mod summary;

pub use export::{handle_export_command, ExportArgs};
pub use summary::{handle_summary_command, SummaryArgs};
