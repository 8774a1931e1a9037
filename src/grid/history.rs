//! Linear undo/redo over single-cell edits
//!
//! One vector of immutable edit records plus a cursor: everything below the
//! cursor is applied, everything at or above it is redoable. Recording a new
//! edit discards the redoable tail. Replay writes through the sheet handed
//! in by the caller, so undo/redo can never record itself as a fresh edit.

use crate::error::{GridError, GridResult};
use crate::grid::sheet::Sheet;

/// Snapshot of one cell text change
///
/// Identity is positional: the record points at a (row, col) address, not
/// at a row entity. Zero-delta edits (old == new) are recorded like any
/// other; the log does not second-guess the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellEdit {
    /// Row index at the time of the edit
    pub row: usize,
    /// Column index at the time of the edit
    pub col: usize,
    /// Cell text before the edit
    pub old_value: String,
    /// Cell text after the edit
    pub new_value: String,
}

impl CellEdit {
    /// Create an edit record
    pub fn new(
        row: usize,
        col: usize,
        old_value: impl Into<String>,
        new_value: impl Into<String>,
    ) -> Self {
        Self {
            row,
            col,
            old_value: old_value.into(),
            new_value: new_value.into(),
        }
    }
}

/// The undo/redo log
///
/// `cursor` is the index of the next write position: `cursor == 0` means
/// nothing to undo, `cursor == len` means nothing to redo.
#[derive(Debug, Clone, Default)]
pub struct EditHistory {
    edits: Vec<CellEdit>,
    cursor: usize,
}

impl EditHistory {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held (applied + redoable)
    pub fn len(&self) -> usize {
        self.edits.len()
    }

    /// Check if no records are held at all
    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Position of the applied/redoable boundary
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Check if there is anything to undo
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Check if there is anything to redo
    pub fn can_redo(&self) -> bool {
        self.cursor < self.edits.len()
    }

    /// Record a user edit that has already been applied to the sheet
    ///
    /// Any records at or past the cursor are discarded first: a new edit
    /// after an undo permanently invalidates the redo tail.
    pub fn record(&mut self, edit: CellEdit) {
        self.edits.truncate(self.cursor);
        self.edits.push(edit);
        self.cursor = self.edits.len();
    }

    /// Step the cursor back one edit, restoring the old cell text
    ///
    /// Writes through `sheet` directly rather than the recording path, so
    /// replay cannot grow the history. If the write fails (the grid was
    /// replaced under the record's address) the cursor stays put.
    pub fn undo(&mut self, sheet: &mut Sheet) -> GridResult<&CellEdit> {
        if self.cursor == 0 {
            return Err(GridError::HistoryEmpty);
        }
        let edit = &self.edits[self.cursor - 1];
        sheet.set_cell(edit.row, edit.col, edit.old_value.clone())?;
        self.cursor -= 1;
        Ok(&self.edits[self.cursor])
    }

    /// Step the cursor forward one edit, reapplying the new cell text
    ///
    /// Same replay rules as `undo`: direct write, no re-recording, cursor
    /// untouched on failure.
    pub fn redo(&mut self, sheet: &mut Sheet) -> GridResult<&CellEdit> {
        if self.cursor == self.edits.len() {
            return Err(GridError::HistoryEmpty);
        }
        let edit = &self.edits[self.cursor];
        sheet.set_cell(edit.row, edit.col, edit.new_value.clone())?;
        self.cursor += 1;
        Ok(&self.edits[self.cursor - 1])
    }

    /// Drop all records, e.g. after the grid is replaced by an import
    pub fn clear(&mut self) {
        self.edits.clear();
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_sheet() -> Sheet {
        Sheet::from_parts(
            ["Description", "Date", "Type", "Amount"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
            vec![
                vec![
                    "Salary".to_string(),
                    "2024-01-01".to_string(),
                    "Income".to_string(),
                    "100.00".to_string(),
                ],
                vec![
                    "Rent".to_string(),
                    "2024-01-02".to_string(),
                    "Expense".to_string(),
                    "60.00".to_string(),
                ],
            ],
        )
        .unwrap()
    }

    /// Apply a user edit the way the shell does: read old, write new, record
    fn apply_edit(sheet: &mut Sheet, history: &mut EditHistory, row: usize, col: usize, value: &str) {
        let old = sheet.cell(row, col).unwrap().to_string();
        sheet.set_cell(row, col, value.to_string()).unwrap();
        history.record(CellEdit::new(row, col, old, value));
    }

    #[test]
    fn test_undo_restores_prior_text_exactly() {
        let mut sheet = test_sheet();
        let mut history = EditHistory::new();

        apply_edit(&mut sheet, &mut history, 0, 3, "150.00");
        assert_eq!(sheet.cell(0, 3).unwrap(), "150.00");

        let undone = history.undo(&mut sheet).unwrap();
        assert_eq!(undone.old_value, "100.00");
        assert_eq!(sheet.cell(0, 3).unwrap(), "100.00");
    }

    #[test]
    fn test_undo_then_redo_is_a_round_trip() {
        let mut sheet = test_sheet();
        let mut history = EditHistory::new();

        apply_edit(&mut sheet, &mut history, 1, 0, "Mortgage");
        history.undo(&mut sheet).unwrap();
        history.redo(&mut sheet).unwrap();

        assert_eq!(sheet.cell(1, 0).unwrap(), "Mortgage");
        assert_eq!(history.cursor(), 1);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_new_edit_discards_redo_tail() {
        let mut sheet = test_sheet();
        let mut history = EditHistory::new();

        apply_edit(&mut sheet, &mut history, 0, 0, "Paycheck");
        apply_edit(&mut sheet, &mut history, 0, 0, "Wages");
        history.undo(&mut sheet).unwrap();
        assert!(history.can_redo());

        apply_edit(&mut sheet, &mut history, 1, 1, "2024-02-01");
        assert!(!history.can_redo());
        assert_eq!(history.len(), 2);

        let err = history.redo(&mut sheet).unwrap_err();
        assert!(matches!(err, GridError::HistoryEmpty));
    }

    #[test]
    fn test_undo_with_nothing_applied() {
        let mut sheet = test_sheet();
        let mut history = EditHistory::new();
        assert!(matches!(
            history.undo(&mut sheet).unwrap_err(),
            GridError::HistoryEmpty
        ));
        assert!(matches!(
            history.redo(&mut sheet).unwrap_err(),
            GridError::HistoryEmpty
        ));
    }

    #[test]
    fn test_replay_never_grows_the_history() {
        let mut sheet = test_sheet();
        let mut history = EditHistory::new();

        apply_edit(&mut sheet, &mut history, 0, 3, "1.00");
        apply_edit(&mut sheet, &mut history, 0, 3, "2.00");
        assert_eq!(history.len(), 2);

        history.undo(&mut sheet).unwrap();
        history.undo(&mut sheet).unwrap();
        history.redo(&mut sheet).unwrap();
        history.redo(&mut sheet).unwrap();
        history.undo(&mut sheet).unwrap();

        assert_eq!(history.len(), 2);
        assert_eq!(history.cursor(), 1);
    }

    #[test]
    fn test_zero_delta_edit_is_recorded() {
        let mut sheet = test_sheet();
        let mut history = EditHistory::new();

        apply_edit(&mut sheet, &mut history, 0, 2, "Income");
        assert_eq!(history.len(), 1);

        history.undo(&mut sheet).unwrap();
        assert_eq!(sheet.cell(0, 2).unwrap(), "Income");
        assert!(history.can_redo());
    }

    #[test]
    fn test_failed_replay_leaves_cursor_alone() {
        let mut sheet = test_sheet();
        let mut history = EditHistory::new();

        // Record an edit whose address no longer exists
        history.record(CellEdit::new(7, 0, "ghost", "spook"));
        let err = history.undo(&mut sheet).unwrap_err();
        assert!(matches!(err, GridError::Index { .. }));
        assert_eq!(history.cursor(), 1);
        assert!(history.can_undo());
    }

    #[test]
    fn test_clear_drops_everything() {
        let mut sheet = test_sheet();
        let mut history = EditHistory::new();

        apply_edit(&mut sheet, &mut history, 0, 0, "x");
        history.clear();
        assert!(history.is_empty());
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }
}
