//! Grid display formatting
//!
//! Renders the tabular store as a bordered terminal table with row
//! indices, so cells can be addressed from the edit command.

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::grid::Sheet;

/// Format the grid as a bordered table.
///
/// `limit` caps the number of data rows shown; a trailing note says
/// how many rows were hidden.
pub fn format_sheet(sheet: &Sheet, limit: Option<usize>) -> String {
    if sheet.columns().is_empty() {
        return "(empty grid)\n".to_string();
    }

    let shown = limit.unwrap_or(sheet.row_count()).min(sheet.row_count());

    let mut builder = Builder::default();
    let mut header = vec!["#".to_string()];
    header.extend(sheet.columns().iter().cloned());
    builder.push_record(header);

    for (i, row) in sheet.rows().iter().take(shown).enumerate() {
        let mut record = vec![i.to_string()];
        record.extend(row.iter().cloned());
        builder.push_record(record);
    }

    let mut table = builder.build();
    table.with(Style::sharp());

    let mut output = table.to_string();
    output.push('\n');

    let hidden = sheet.row_count() - shown;
    if hidden > 0 {
        output.push_str(&format!("({} more rows not shown)\n", hidden));
    }

    output
}

/// One-line shape summary for the grid
pub fn format_sheet_summary(sheet: &Sheet) -> String {
    let coerced = sheet.ledger_entries().len();
    format!(
        "{} rows x {} columns ({} usable for reports)\n",
        sheet.row_count(),
        sheet.column_count(),
        coerced
    )
}
