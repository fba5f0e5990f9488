//! expense-export - CSV export and Ringgit formatting for an expense tracker
//!
//! This library turns transaction records into CSV text, offers that text to
//! the user as a file download, and formats amounts as Malaysian Ringgit
//! using `en-US` digit conventions.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Records, transactions and currency formatting
//! - `export`: CSV conversion
//! - `download`: Host download capability and its implementations
//! - `reports`: Monthly expense summary
//! - `cli`: Command handlers for the `expense-export` binary
//!
//! # Example
//!
//! ```rust
//! use expense_export::download::{download_csv, MemoryHost};
//! use expense_export::export::convert_to_csv;
//! use expense_export::models::{format_currency, Record};
//!
//! let records = vec![Record::new().with("date", "2024-01-01").with("amount", 10)];
//! let csv = convert_to_csv(Some(&records));
//!
//! let mut host = MemoryHost::new();
//! download_csv(&mut host, &csv, "transactions.csv").unwrap();
//! assert_eq!(host.downloads().len(), 1);
//!
//! assert_eq!(format_currency(1234.5), "MYR\u{a0}1,234.50");
//! ```

pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod export;
pub mod file_io;
pub mod logging;
pub mod models;
pub mod reports;

pub use error::{ExportError, ExportResult};
