//! CLI command for exporting the styled HTML report

use std::path::Path;

use crate::config::Settings;
use crate::error::GridResult;
use crate::workbook::Workbook;

/// Handle the report command
pub fn handle_report_command(settings: &Settings, file: &Path, output: &Path) -> GridResult<()> {
    let mut workbook = Workbook::new(settings.clone());
    workbook.import(file)?;

    let status = workbook.export_report(output)?;
    println!("{}: {}", status, output.display());

    Ok(())
}
