//! Core data models for expense-export
//!
//! This module contains the structures that flow through an export: loose
//! records, typed transactions, and the currency formatting used to display
//! their amounts.

pub mod money;
pub mod record;
pub mod transaction;

pub use money::{format_currency, CurrencyFormat, Ringgit, EN_US_MYR};
pub use record::{value_text, Record};
pub use transaction::{Transaction, TransactionType};
