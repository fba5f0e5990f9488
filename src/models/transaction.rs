//! Transaction model
//!
//! Mirrors the rows the expense tracker stores: money moves out of an account
//! for expenses, into one for income, and between two for transfers.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use super::record::Record;

/// Kind of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    /// Money leaves `from_account` (`to_account` is empty)
    Expense,
    /// Money arrives in `to_account` (`from_account` is empty)
    Income,
    /// Money moves between two accounts
    Transfer,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expense => write!(f, "Expense"),
            Self::Income => write!(f, "Income"),
            Self::Transfer => write!(f, "Transfer"),
        }
    }
}

/// A stored financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Database identifier, absent for transactions not yet saved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Date or date-time, as stored
    pub date: String,

    /// Kind of transaction
    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Amount in Ringgit (always positive; direction comes from `kind`)
    pub amount: f64,

    /// Category name
    pub category: String,

    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,

    /// Source account
    #[serde(default)]
    pub from_account: Option<String>,

    /// Destination account
    #[serde(default)]
    pub to_account: Option<String>,
}

impl Transaction {
    /// Create a new transaction with no description or accounts
    pub fn new(
        date: impl Into<String>,
        kind: TransactionType,
        amount: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            date: date.into(),
            kind,
            amount,
            category: category.into(),
            description: None,
            from_account: None,
            to_account: None,
        }
    }

    /// Calendar date of the transaction, if `date` parses
    ///
    /// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and naive
    /// `YYYY-MM-DDTHH:MM:SS[.f]` timestamps.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        let raw = self.date.trim();
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Some(date);
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.date_naive());
        }
        ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
            .map(|dt| dt.date())
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// Convert into an export record (missing optionals become null)
    pub fn to_record(&self) -> Record {
        let mut record = Record::new();
        if let Some(id) = self.id {
            record.insert("id", id);
        }
        record.insert("date", self.date.as_str());
        record.insert("type", self.kind.to_string());
        record.insert("description", optional(&self.description));
        record.insert("category", self.category.as_str());
        record.insert("amount", self.amount);
        record.insert("from_account", optional(&self.from_account));
        record.insert("to_account", optional(&self.to_account));
        record
    }
}

fn optional(value: &Option<String>) -> Value {
    value.as_deref().map_or(Value::Null, Value::from)
}

impl From<&Transaction> for Record {
    fn from(txn: &Transaction) -> Self {
        txn.to_record()
    }
}
