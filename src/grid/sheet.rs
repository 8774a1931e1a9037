//! The tabular store
//!
//! A `Sheet` is an in-memory grid of text cells under named columns. It is
//! the single source of truth the user edits: imports replace it wholesale,
//! edits mutate one cell at a time, and every derivation reads a snapshot.
//! Cells stay untyped text until `ledger_entries` coerces them.

use tracing::debug;

use crate::error::{GridError, GridResult};
use crate::models::{LedgerEntry, Money};

/// Columns a dataset must carry to be accepted
pub const REQUIRED_COLUMNS: [&str; 4] = ["Description", "Date", "Type", "Amount"];

/// An ordered grid of rows by named columns
///
/// Invariant: every row has exactly `columns.len()` cells. `from_parts`
/// normalizes row widths so cell addressing stays total within range.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sheet {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Sheet {
    /// Create an empty sheet with no columns and no rows
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a sheet from column names and text rows
    ///
    /// Fails with a schema error naming the missing columns when the
    /// required set is not a subset of `columns`. Extra columns are
    /// preserved in order. Short rows are padded with empty cells and
    /// long rows truncated to the column count.
    pub fn from_parts(columns: Vec<String>, rows: Vec<Vec<String>>) -> GridResult<Self> {
        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|required| !columns.iter().any(|c| c == *required))
            .map(|required| required.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(GridError::Schema { missing });
        }

        let width = columns.len();
        let mut rows = rows;
        for row in &mut rows {
            row.resize(width, String::new());
        }

        Ok(Self { columns, rows })
    }

    /// Wholesale replace of the grid contents
    ///
    /// On failure the sheet is left exactly as it was.
    pub fn replace_all(&mut self, columns: Vec<String>, rows: Vec<Vec<String>>) -> GridResult<()> {
        let replacement = Self::from_parts(columns, rows)?;
        debug!(
            rows = replacement.row_count(),
            columns = replacement.column_count(),
            "sheet replaced"
        );
        *self = replacement;
        Ok(())
    }

    /// Column names in display order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// All rows in display order
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Check if the sheet holds no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Find the index of a column by exact header name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Read one cell's text
    pub fn cell(&self, row: usize, col: usize) -> GridResult<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .ok_or(GridError::Index { row, col })
    }

    /// Overwrite one cell's text
    ///
    /// Values are untyped here; anything coercion-sensitive is checked
    /// at derivation time, not at edit time.
    pub fn set_cell(&mut self, row: usize, col: usize, value: String) -> GridResult<()> {
        match self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) => {
                *cell = value;
                Ok(())
            }
            None => Err(GridError::Index { row, col }),
        }
    }

    /// An immutable copy of the full grid for read-only derivation
    ///
    /// Later mutation of this sheet does not affect the returned copy.
    pub fn snapshot(&self) -> Sheet {
        self.clone()
    }

    /// Coerce rows into typed ledger entries
    ///
    /// A row is dropped when its Amount fails to parse as money or when
    /// its Date or Type cell is empty. Drops are silent apart from debug
    /// logging; callers surface "no valid data" themselves when the
    /// result is empty. Date text is NOT parsed here, so rows with
    /// malformed dates still reach the grouping summary.
    pub fn ledger_entries(&self) -> Vec<LedgerEntry> {
        let indices = (
            self.column_index("Description"),
            self.column_index("Date"),
            self.column_index("Type"),
            self.column_index("Amount"),
        );
        let (Some(desc_idx), Some(date_idx), Some(type_idx), Some(amount_idx)) = indices else {
            return Vec::new();
        };

        let mut entries = Vec::with_capacity(self.rows.len());
        for (i, row) in self.rows.iter().enumerate() {
            let amount = match Money::parse(&row[amount_idx]) {
                Ok(amount) => amount,
                Err(err) => {
                    debug!(row = i, %err, "dropping row: bad amount");
                    continue;
                }
            };
            if row[date_idx].is_empty() {
                debug!(row = i, "dropping row: missing date");
                continue;
            }
            if row[type_idx].is_empty() {
                debug!(row = i, "dropping row: missing type");
                continue;
            }

            entries.push(LedgerEntry::new(
                row[desc_idx].clone(),
                row[date_idx].clone(),
                row[type_idx].clone(),
                amount,
            ));
        }
        entries
    }
}
