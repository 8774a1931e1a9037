//! Report document assembly
//!
//! Turns a typed row set into an ordered sequence of layout-free blocks:
//! title, data table, grouping chart, balance chart. Rendering those
//! blocks into an actual file is the renderer's job (`html`); this module
//! never touches disk.

pub mod html;

use crate::models::LedgerEntry;
use crate::reports::{BalanceReport, GroupingReport};

/// Title at the top of every exported report
pub const REPORT_TITLE: &str = "Personal Finance Data";

/// Heading above the balance chart
pub const BALANCE_HEADING: &str = "Money Over Time";

/// One block of the fixed report layout
#[derive(Debug, Clone)]
pub enum ReportBlock {
    /// Document title
    Title(String),
    /// Section heading
    Heading(String),
    /// The transaction table: header row plus one row per entry
    Table {
        header: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    /// Grouping summary, rendered as a chart image
    GroupingChart(GroupingReport),
    /// Balance series, rendered as a chart image
    BalanceChart(BalanceReport),
}

/// The assembled report: blocks in presentation order
#[derive(Debug, Clone)]
pub struct ReportDocument {
    pub blocks: Vec<ReportBlock>,
}

impl ReportDocument {
    /// Assemble the fixed layout from typed rows
    ///
    /// Callers must verify the row set is non-empty first and surface
    /// the empty-data error themselves; composing an empty set produces
    /// a document nobody asked for.
    pub fn compose(entries: &[LedgerEntry], date_format: &str, group_limit: usize) -> Self {
        let header = vec![
            "Description".to_string(),
            "Date".to_string(),
            "Type".to_string(),
            "Amount".to_string(),
        ];
        let rows = entries
            .iter()
            .map(|entry| {
                vec![
                    entry.description.clone(),
                    entry.date_text.clone(),
                    entry.type_text.clone(),
                    entry.amount.format_plain(),
                ]
            })
            .collect();

        let grouping = GroupingReport::generate(entries, group_limit);
        let balance = BalanceReport::generate(entries, date_format);

        let blocks = vec![
            ReportBlock::Title(REPORT_TITLE.to_string()),
            ReportBlock::Table { header, rows },
            ReportBlock::Heading(format!(
                "Top {group_limit} Expenses/Incomes per Description"
            )),
            ReportBlock::GroupingChart(grouping),
            ReportBlock::Heading(BALANCE_HEADING.to_string()),
            ReportBlock::BalanceChart(balance),
        ];

        Self { blocks }
    }
}
