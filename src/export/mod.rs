//! Export module for expense-export
//!
//! Turns records and transactions into CSV text ready to be offered as a
//! download.

pub mod csv;

pub use csv::{convert_to_csv, transactions_to_csv, write_csv, CSV_COLUMNS};
