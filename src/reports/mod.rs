//! Derivations over typed ledger rows
//!
//! Pure transforms consumed by both the chart commands and the report
//! exporter: a running balance over time and a top-N grouping summary.
//! Both operate on the coerced row set; nothing here touches the grid.

pub mod balance;
pub mod grouping;

use chrono::NaiveDate;

pub use balance::{BalancePoint, BalanceReport};
pub use grouping::{GroupTotal, GroupingReport};

/// Fallback date formats tried in order after the configured one
const DATE_FORMATS: [&str; 8] = [
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%m/%d/%y",
    "%d/%m/%Y",
    "%d/%m/%y",
    "%Y/%m/%d",
    "%m-%d-%Y",
    "%d-%m-%Y",
];

/// Parse a date cell, trying the configured format first
pub(crate) fn parse_date(text: &str, primary_format: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if let Ok(date) = NaiveDate::parse_from_str(text, primary_format) {
        return Some(date);
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
}
