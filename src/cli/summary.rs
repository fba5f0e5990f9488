//! CLI command for the monthly expense summary

use std::path::PathBuf;

use chrono::{Datelike, Local, NaiveDate};
use clap::Args;

use crate::error::ExportResult;
use crate::file_io::read_json_required;
use crate::models::Transaction;
use crate::reports::ExpenseSummary;

/// Arguments of `summary`
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// JSON file holding an array of transactions
    pub input: PathBuf,

    /// Month to summarize as YYYY-MM (default: current month)
    #[arg(short, long, value_parser = parse_month)]
    pub month: Option<NaiveDate>,
}

/// Parse `YYYY-MM` into the first day of that month
pub fn parse_month(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
        .map_err(|_| format!("expected YYYY-MM, got '{}'", s))
}

/// Handle the summary command
pub fn handle_summary_command(args: SummaryArgs) -> ExportResult<()> {
    let transactions: Vec<Transaction> = read_json_required(&args.input)?;
    let month = args.month.unwrap_or_else(|| Local::now().date_naive());

    let summary = ExpenseSummary::generate(&transactions, month.year(), month.month())?;
    print!("{}", summary.format_terminal());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_month() {
        assert_eq!(
            parse_month("2024-03"),
            Ok(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
        );
        assert!(parse_month("2024-13").is_err());
        assert!(parse_month("March").is_err());
    }
}
