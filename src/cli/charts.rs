//! CLI command for rendering chart images

use std::path::Path;

use crate::config::Settings;
use crate::error::GridResult;
use crate::workbook::Workbook;

/// Handle the charts command
///
/// Writes `balance.svg` and `groups.svg` into `out_dir` and prints
/// both derivation summaries.
pub fn handle_charts_command(settings: &Settings, file: &Path, out_dir: &Path) -> GridResult<()> {
    let mut workbook = Workbook::new(settings.clone());
    workbook.import(file)?;

    let grouping = workbook.grouping_report()?;
    let balance = workbook.balance_report()?;
    let status = workbook.render_charts(out_dir)?;

    print!("{}", grouping.format_terminal(&settings.currency_symbol));
    println!();
    print!("{}", balance.format_terminal(&settings.currency_symbol));
    println!();
    println!("{}", status);
    println!("  {}", out_dir.join("balance.svg").display());
    println!("  {}", out_dir.join("groups.svg").display());

    Ok(())
}
