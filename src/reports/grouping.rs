//! Top-N grouping summary
//!
//! Groups rows by description and sums the absolute amount per group.
//! Magnitude is what matters here: a 50.00 expense and a 50.00 income
//! weigh the same, which is how the summary chart reads.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::models::{LedgerEntry, Money};

/// Default number of groups the summary keeps
pub const DEFAULT_GROUP_LIMIT: usize = 10;

/// One description group and its summed magnitude
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupTotal {
    /// Grouping key: the row description, verbatim
    pub description: String,
    /// Sum of absolute amounts across the group
    pub total: Money,
}

/// The grouped magnitude summary
#[derive(Debug, Clone)]
pub struct GroupingReport {
    /// Groups sorted descending by total, capped at the limit.
    /// Ties keep first-encountered description order.
    pub groups: Vec<GroupTotal>,
}

impl GroupingReport {
    /// Derive the summary from typed rows
    pub fn generate(entries: &[LedgerEntry], limit: usize) -> Self {
        let mut order: Vec<&str> = Vec::new();
        let mut totals: HashMap<&str, Money> = HashMap::new();

        for entry in entries {
            match totals.entry(entry.description.as_str()) {
                Entry::Occupied(mut slot) => {
                    *slot.get_mut() += entry.amount.abs();
                }
                Entry::Vacant(slot) => {
                    slot.insert(entry.amount.abs());
                    order.push(entry.description.as_str());
                }
            }
        }

        let mut groups: Vec<GroupTotal> = order
            .into_iter()
            .map(|description| GroupTotal {
                description: description.to_string(),
                total: totals[description],
            })
            .collect();

        // Stable sort: equal totals keep first-encountered order
        groups.sort_by(|a, b| b.total.cmp(&a.total));
        groups.truncate(limit);

        Self { groups }
    }

    /// Check if no groups were formed
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Combined magnitude of the kept groups
    pub fn total(&self) -> Money {
        self.groups.iter().map(|g| g.total).sum()
    }

    /// A group's share of the kept total, in percent
    pub fn share_percent(&self, group: &GroupTotal) -> f64 {
        let total = self.total().cents();
        if total == 0 {
            0.0
        } else {
            group.total.cents() as f64 * 100.0 / total as f64
        }
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Top {} Expenses/Incomes per Description\n",
            self.groups.len()
        ));
        output.push_str(&"=".repeat(52));
        output.push('\n');

        for group in &self.groups {
            output.push_str(&format!(
                "{:<30} {:>12} {:>6.1}%\n",
                group.description,
                group.total.format_with_symbol(symbol),
                self.share_percent(group)
            ));
        }

        output.push_str(&"-".repeat(52));
        output.push('\n');
        output.push_str(&format!(
            "{:<30} {:>12}\n",
            "Total",
            self.total().format_with_symbol(symbol)
        ));

        output
    }
}
