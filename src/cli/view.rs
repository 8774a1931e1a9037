//! CLI command for viewing a CSV file as a grid

use std::path::Path;

use crate::config::Settings;
use crate::display;
use crate::error::GridResult;
use crate::workbook::Workbook;

/// Handle the view command
pub fn handle_view_command(
    settings: &Settings,
    file: &Path,
    limit: Option<usize>,
) -> GridResult<()> {
    let mut workbook = Workbook::new(settings.clone());
    workbook.import(file)?;

    print!("{}", display::format_sheet(workbook.sheet(), limit));
    print!("{}", display::format_sheet_summary(workbook.sheet()));

    Ok(())
}
