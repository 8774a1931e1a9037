//! CLI command for editing cells with undo/redo
//!
//! Edits arrive as `ROW:COL=VALUE` specs. The column half accepts
//! either a zero-based index or a header name.

use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::error::{GridError, GridResult};
use crate::grid::Sheet;
use crate::workbook::Workbook;

/// Handle the edit command
///
/// Applies every `--set` spec in order, then walks `--undo` and
/// `--redo` steps, then saves to `output` or back to the input file.
pub fn handle_edit_command(
    settings: &Settings,
    file: &Path,
    set: Vec<String>,
    undo: usize,
    redo: usize,
    output: Option<PathBuf>,
) -> GridResult<()> {
    let mut workbook = Workbook::new(settings.clone());
    println!("{}", workbook.import(file)?);

    for spec in &set {
        let (row, col, value) = parse_set_spec(workbook.sheet(), spec)?;
        println!("{}", workbook.edit_cell(row, col, value)?);
    }

    for _ in 0..undo {
        println!("{}", workbook.undo()?);
    }

    for _ in 0..redo {
        println!("{}", workbook.redo()?);
    }

    let status = match output {
        Some(path) => workbook.save_as(path)?,
        None => workbook.save()?,
    };
    println!("{}", status);

    Ok(())
}

/// Parse a `ROW:COL=VALUE` edit spec against the current grid
fn parse_set_spec(sheet: &Sheet, spec: &str) -> GridResult<(usize, usize, String)> {
    let (target, value) = spec.split_once('=').ok_or_else(|| invalid_spec(spec))?;
    let (row_text, col_text) = target.split_once(':').ok_or_else(|| invalid_spec(spec))?;

    let row: usize = row_text.trim().parse().map_err(|_| invalid_spec(spec))?;

    let col_text = col_text.trim();
    let col = match col_text.parse::<usize>() {
        Ok(index) => index,
        Err(_) => sheet
            .column_index(col_text)
            .ok_or_else(|| GridError::UnknownColumn(col_text.to_string()))?,
    };

    Ok((row, col, value.to_string()))
}

fn invalid_spec(spec: &str) -> GridError {
    GridError::State(format!("Invalid edit '{}': expected ROW:COL=VALUE", spec))
}
