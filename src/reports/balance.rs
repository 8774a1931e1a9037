//! Running balance over time
//!
//! Turns typed rows into a date-ordered series of cumulative signed
//! amounts. Recomputed on demand from a grid snapshot, never persisted.

use chrono::NaiveDate;
use tracing::debug;

use crate::models::{LedgerEntry, Money};

use super::parse_date;

/// One point on the balance curve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalancePoint {
    /// Transaction date
    pub date: NaiveDate,
    /// Cumulative signed balance through this row
    pub balance: Money,
}

/// The balance-over-time series
#[derive(Debug, Clone)]
pub struct BalanceReport {
    /// Points sorted ascending by date; equal dates keep row order
    pub points: Vec<BalancePoint>,
    /// Rows excluded because their date text would not parse
    pub dropped: usize,
}

impl BalanceReport {
    /// Derive the series from typed rows
    ///
    /// Rows whose date fails to parse are excluded entirely before the
    /// cumulative sum runs, so they contribute nothing downstream. The
    /// sort is stable: rows sharing a date accumulate in input order.
    pub fn generate(entries: &[LedgerEntry], date_format: &str) -> Self {
        let mut dated: Vec<(NaiveDate, Money)> = Vec::with_capacity(entries.len());
        let mut dropped = 0;
        for entry in entries {
            match parse_date(&entry.date_text, date_format) {
                Some(date) => dated.push((date, entry.signed_amount())),
                None => {
                    debug!(date = %entry.date_text, "dropping row: unparseable date");
                    dropped += 1;
                }
            }
        }

        dated.sort_by_key(|(date, _)| *date);

        let mut balance = Money::zero();
        let points = dated
            .into_iter()
            .map(|(date, signed)| {
                balance += signed;
                BalancePoint { date, balance }
            })
            .collect();

        Self { points, dropped }
    }

    /// Check if no rows survived date parsing
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The balance after the last point, zero for an empty series
    pub fn final_balance(&self) -> Money {
        self.points
            .last()
            .map(|p| p.balance)
            .unwrap_or_else(Money::zero)
    }

    /// First and last dates of the series
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => Some((first.date, last.date)),
            _ => None,
        }
    }

    /// Format the series for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Money Over Time\n");
        output.push_str(&"=".repeat(40));
        output.push('\n');

        for point in &self.points {
            output.push_str(&format!(
                "{}  {:>15}\n",
                point.date,
                point.balance.format_with_symbol(symbol)
            ));
        }

        output.push_str(&"-".repeat(40));
        output.push('\n');
        output.push_str(&format!(
            "Final balance:  {:>15}\n",
            self.final_balance().format_with_symbol(symbol)
        ));

        if self.dropped > 0 {
            output.push_str(&format!(
                "({} row(s) skipped: unparseable dates)\n",
                self.dropped
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LedgerEntry;

    fn entry(description: &str, date: &str, kind: &str, cents: i64) -> LedgerEntry {
        LedgerEntry::new(description, date, kind, Money::from_cents(cents))
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_cumulative_balance_in_date_order() {
        let entries = vec![
            entry("Salary", "2024-01-01", "Income", 10000),
            entry("Groceries", "2024-01-03", "Expense", 3000),
            entry("Refund", "2024-01-02", "Income", 2000),
        ];
        let report = BalanceReport::generate(&entries, "%Y-%m-%d");

        let expected = vec![
            BalancePoint {
                date: ymd(2024, 1, 1),
                balance: Money::from_cents(10000),
            },
            BalancePoint {
                date: ymd(2024, 1, 2),
                balance: Money::from_cents(12000),
            },
            BalancePoint {
                date: ymd(2024, 1, 3),
                balance: Money::from_cents(9000),
            },
        ];
        assert_eq!(report.points, expected);
        assert_eq!(report.final_balance().cents(), 9000);
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let forward = vec![
            entry("Salary", "2024-01-01", "Income", 10000),
            entry("Groceries", "2024-01-03", "Expense", 3000),
            entry("Refund", "2024-01-02", "Income", 2000),
        ];
        let mut shuffled = forward.clone();
        shuffled.reverse();

        let a = BalanceReport::generate(&forward, "%Y-%m-%d");
        let b = BalanceReport::generate(&shuffled, "%Y-%m-%d");
        assert_eq!(a.points, b.points);
    }

    #[test]
    fn test_equal_dates_accumulate_in_row_order() {
        let entries = vec![
            entry("Deposit", "2024-02-01", "Income", 5000),
            entry("Lunch", "2024-02-01", "Expense", 1500),
        ];
        let report = BalanceReport::generate(&entries, "%Y-%m-%d");
        assert_eq!(report.points[0].balance.cents(), 5000);
        assert_eq!(report.points[1].balance.cents(), 3500);
    }

    #[test]
    fn test_unparseable_dates_are_excluded_entirely() {
        let entries = vec![
            entry("Salary", "2024-01-01", "Income", 10000),
            entry("Mystery", "soon", "Expense", 99999),
            entry("Groceries", "2024-01-02", "Expense", 3000),
        ];
        let report = BalanceReport::generate(&entries, "%Y-%m-%d");

        assert_eq!(report.points.len(), 2);
        assert_eq!(report.dropped, 1);
        // The skipped row contributes nothing to later sums
        assert_eq!(report.points[1].balance.cents(), 7000);
    }

    #[test]
    fn test_empty_when_no_dates_parse() {
        let entries = vec![entry("Mystery", "soon", "Expense", 100)];
        let report = BalanceReport::generate(&entries, "%Y-%m-%d");
        assert!(report.is_empty());
        assert_eq!(report.final_balance(), Money::zero());
        assert!(report.date_span().is_none());
    }

    #[test]
    fn test_terminal_format_shows_final_balance() {
        let entries = vec![
            entry("Salary", "2024-01-01", "Income", 10000),
            entry("Mystery", "soon", "Expense", 100),
        ];
        let output = BalanceReport::generate(&entries, "%Y-%m-%d").format_terminal("$");
        assert!(output.contains("Money Over Time"));
        assert!(output.contains("$100.00"));
        assert!(output.contains("skipped"));
    }
}
