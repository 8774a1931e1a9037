//! Workbook facade
//!
//! Ties the grid, the edit history, storage, and the report pipeline
//! together behind the actions an application shell invokes: import,
//! save, edit, undo/redo, charts, and report export. Each action
//! returns a short status string for the shell to display; failures
//! come back as categorized [`GridError`]s and leave the grid and
//! history exactly as they were.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::charts;
use crate::config::Settings;
use crate::document::{self, ReportDocument};
use crate::error::{GridError, GridResult};
use crate::grid::{CellEdit, EditHistory, Sheet};
use crate::models::LedgerEntry;
use crate::reports::{BalanceReport, GroupingReport};
use crate::storage;

/// Owns the grid and everything that operates on it
#[derive(Debug, Default)]
pub struct Workbook {
    sheet: Sheet,
    history: EditHistory,
    current_path: Option<PathBuf>,
    settings: Settings,
}

impl Workbook {
    /// Create an empty workbook with the given settings
    pub fn new(settings: Settings) -> Self {
        Self {
            sheet: Sheet::new(),
            history: EditHistory::new(),
            current_path: None,
            settings,
        }
    }

    /// The grid as currently edited
    pub fn sheet(&self) -> &Sheet {
        &self.sheet
    }

    /// The recorded edit history
    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    /// The file the grid was imported from or last saved to
    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_deref()
    }

    /// Active settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Import a CSV file, replacing the grid.
    ///
    /// The file is read and validated in full before the grid is
    /// touched, so a failed import leaves the previous grid and its
    /// history fully usable. A successful import clears the history
    /// and remembers the path for quick-save.
    pub fn import<P: AsRef<Path>>(&mut self, path: P) -> GridResult<String> {
        let path = path.as_ref();
        let sheet = storage::read_sheet(path)?;

        info!(path = %path.display(), rows = sheet.row_count(), "csv imported");
        self.sheet = sheet;
        self.history.clear();
        self.current_path = Some(path.to_path_buf());

        Ok("CSV Imported".to_string())
    }

    /// Quick-save the grid back to the remembered path
    pub fn save(&self) -> GridResult<String> {
        let path = self.current_path.as_ref().ok_or_else(|| {
            GridError::State("No file loaded; import a CSV or save-as first".into())
        })?;

        storage::save_sheet(&self.sheet, path)?;
        Ok("File saved".to_string())
    }

    /// Save the grid to `path` and remember it for future quick-saves
    pub fn save_as<P: AsRef<Path>>(&mut self, path: P) -> GridResult<String> {
        let path = path.as_ref();
        storage::save_sheet(&self.sheet, path)?;
        self.current_path = Some(path.to_path_buf());

        Ok(format!("File saved as {}", path.display()))
    }

    /// Apply a single cell edit and record it in the history.
    ///
    /// This is the only operation that records: replaying via
    /// [`Workbook::undo`] and [`Workbook::redo`] writes to the grid
    /// without coming back through here.
    pub fn edit_cell<S: Into<String>>(
        &mut self,
        row: usize,
        col: usize,
        value: S,
    ) -> GridResult<String> {
        let new_value = value.into();
        let old_value = self.sheet.cell(row, col)?.to_string();

        self.sheet.set_cell(row, col, new_value.clone())?;
        self.history
            .record(CellEdit::new(row, col, old_value, new_value));

        Ok(format!("Edited cell ({}, {})", row, col))
    }

    /// Step one edit backwards. A safe no-op when nothing is left to undo.
    pub fn undo(&mut self) -> GridResult<String> {
        match self.history.undo(&mut self.sheet) {
            Ok(_) => Ok("Undo".to_string()),
            Err(GridError::HistoryEmpty) => Ok("Nothing to undo".to_string()),
            Err(e) => Err(e),
        }
    }

    /// Step one undone edit forwards. A safe no-op when nothing is left to redo.
    pub fn redo(&mut self) -> GridResult<String> {
        match self.history.redo(&mut self.sheet) {
            Ok(_) => Ok("Redo".to_string()),
            Err(GridError::HistoryEmpty) => Ok("Nothing to redo".to_string()),
            Err(e) => Err(e),
        }
    }

    /// Rows that survive typed coercion, the input to every derivation
    pub fn ledger_entries(&self) -> Vec<LedgerEntry> {
        self.sheet.ledger_entries()
    }

    /// Running-balance derivation over the current grid
    pub fn balance_report(&self) -> GridResult<BalanceReport> {
        let entries = self.coerced_entries()?;
        Ok(BalanceReport::generate(&entries, &self.settings.date_format))
    }

    /// Per-description grouping derivation over the current grid
    pub fn grouping_report(&self) -> GridResult<GroupingReport> {
        let entries = self.coerced_entries()?;
        Ok(GroupingReport::generate(&entries, self.settings.group_limit))
    }

    /// Export the styled HTML report to `path`.
    ///
    /// Runs the empty-data check before composing anything, so a grid
    /// with no usable rows fails without creating files.
    pub fn export_report<P: AsRef<Path>>(&self, path: P) -> GridResult<String> {
        let path = path.as_ref();
        let entries = self.coerced_entries()?;

        let document = ReportDocument::compose(
            &entries,
            &self.settings.date_format,
            self.settings.group_limit,
        );
        let html = document::html::render(&document)?;
        storage::write_atomic(path, html.as_bytes())?;

        info!(path = %path.display(), "report exported");
        Ok("Report exported".to_string())
    }

    /// Render `balance.svg` and `groups.svg` into `dir`.
    ///
    /// Runs the empty-data check before touching the filesystem.
    pub fn render_charts<P: AsRef<Path>>(&self, dir: P) -> GridResult<String> {
        let dir = dir.as_ref();
        let entries = self.coerced_entries()?;

        let balance = BalanceReport::generate(&entries, &self.settings.date_format);
        let grouping = GroupingReport::generate(&entries, self.settings.group_limit);

        std::fs::create_dir_all(dir).map_err(|e| {
            GridError::Io(format!(
                "Failed to create chart directory {}: {}",
                dir.display(),
                e
            ))
        })?;

        charts::render_balance_chart(&balance, &dir.join("balance.svg"))?;
        charts::render_grouping_chart(&grouping, &dir.join("groups.svg"))?;

        info!(dir = %dir.display(), "charts rendered");
        Ok("Charts Created".to_string())
    }

    fn coerced_entries(&self) -> GridResult<Vec<LedgerEntry>> {
        let entries = self.sheet.ledger_entries();
        if entries.is_empty() {
            return Err(GridError::EmptyData);
        }
        Ok(entries)
    }
}
