//! Monthly expense summary
//!
//! Totals expense transactions per category for one calendar month.

use crate::error::{ExportError, ExportResult};
use crate::models::{Ringgit, Transaction};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;
use tracing::warn;

/// Expense total for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// Category name
    pub category: String,
    /// Sum of expense amounts
    pub total: f64,
    /// Number of expense transactions
    pub transaction_count: usize,
}

/// Expense totals for one month
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseSummary {
    /// First day of the summarized month
    pub month: NaiveDate,
    /// Totals per category, sorted by category name
    pub categories: Vec<CategoryTotal>,
    /// Sum over all categories
    pub total: f64,
    /// Transactions whose date could not be read
    pub skipped: usize,
}

impl ExpenseSummary {
    /// Generate the summary for `year`/`month` (1-12)
    pub fn generate(transactions: &[Transaction], year: i32, month: u32) -> ExportResult<Self> {
        let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
            ExportError::Validation(format!("Invalid month: {}-{:02}", year, month))
        })?;

        let mut by_category: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
        let mut skipped = 0;

        for txn in transactions.iter().filter(|t| t.is_expense()) {
            let Some(date) = txn.calendar_date() else {
                warn!(date = %txn.date, category = %txn.category, "skipping transaction with unreadable date");
                skipped += 1;
                continue;
            };

            if date.year() == start.year() && date.month() == start.month() {
                let entry = by_category.entry(txn.category.as_str()).or_insert((0.0, 0));
                entry.0 += txn.amount;
                entry.1 += 1;
            }
        }

        let categories: Vec<CategoryTotal> = by_category
            .into_iter()
            .map(|(category, (total, count))| CategoryTotal {
                category: category.to_string(),
                total,
                transaction_count: count,
            })
            .collect();
        let total: f64 = categories.iter().map(|c| c.total).sum();

        Ok(Self {
            month: start,
            categories,
            total,
            skipped,
        })
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Expense Summary: {}\n", self.month.format("%B %Y")));
        output.push_str(&"=".repeat(60));
        output.push('\n');

        if self.categories.is_empty() {
            output.push_str("No expenses recorded for this month.\n");
            return output;
        }

        output.push_str(&format!("{:<30} {:>20} {:>8}\n", "Category", "Amount", "Count"));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for category in &self.categories {
            output.push_str(&format!(
                "{:<30} {:>20} {:>8}\n",
                category.category,
                Ringgit(category.total),
                category.transaction_count
            ));
        }

        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<30} {:>20} {:>8}\n",
            "TOTAL",
            Ringgit(self.total),
            self.categories.iter().map(|c| c.transaction_count).sum::<usize>()
        ));

        if self.skipped > 0 {
            output.push_str(&format!(
                "\n{} transaction(s) skipped: unreadable date\n",
                self.skipped
            ));
        }

        output
    }
}

/// Expense totals per category for one month
pub fn monthly_expense_summary(
    transactions: &[Transaction],
    year: i32,
    month: u32,
) -> ExportResult<Vec<CategoryTotal>> {
    Ok(ExpenseSummary::generate(transactions, year, month)?.categories)
}
