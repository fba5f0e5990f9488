//! Reports module for expense-export
//!
//! Summaries computed over exported transactions.

pub mod expense_summary;

pub use expense_summary::{monthly_expense_summary, CategoryTotal, ExpenseSummary};
