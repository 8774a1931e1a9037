//! Custom error types for moneygrid
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for moneygrid operations
#[derive(Error, Debug)]
pub enum GridError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// CSV read/write errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Required columns absent on import
    #[error("missing required column(s): {}", missing.join(", "))]
    Schema { missing: Vec<String> },

    /// Cell address outside the grid
    #[error("cell ({row}, {col}) is out of range")]
    Index { row: usize, col: usize },

    /// No column with the given header
    #[error("no column named '{0}'")]
    UnknownColumn(String),

    /// No rows survived typed coercion
    #[error("no valid transaction data to work with")]
    EmptyData,

    /// Undo/redo requested with nothing to apply
    #[error("nothing to undo or redo")]
    HistoryEmpty,

    /// Chart rendering errors
    #[error("Chart error: {0}")]
    Chart(String),

    /// Report export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Operation not valid in the current state
    #[error("{0}")]
    State(String),
}

impl GridError {
    /// Create a schema error from whatever column names are missing
    pub fn missing_columns<I, S>(missing: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Schema {
            missing: missing.into_iter().map(Into::into).collect(),
        }
    }

    /// Create an out-of-range error for a cell address
    pub fn out_of_range(row: usize, col: usize) -> Self {
        Self::Index { row, col }
    }

    /// Check if this is a schema error
    pub fn is_schema(&self) -> bool {
        matches!(self, Self::Schema { .. })
    }

    /// Check if this is the empty-history no-op case
    pub fn is_history_empty(&self) -> bool {
        matches!(self, Self::HistoryEmpty)
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for GridError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for GridError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<serde_json::Error> for GridError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for moneygrid operations
pub type GridResult<T> = Result<T, GridError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GridError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_schema_error_lists_columns() {
        let err = GridError::missing_columns(["Amount", "Type"]);
        assert_eq!(
            err.to_string(),
            "missing required column(s): Amount, Type"
        );
        assert!(err.is_schema());
    }

    #[test]
    fn test_index_error_display() {
        let err = GridError::out_of_range(7, 2);
        assert_eq!(err.to_string(), "cell (7, 2) is out of range");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let grid_err: GridError = io_err.into();
        assert!(matches!(grid_err, GridError::Io(_)));
    }

    #[test]
    fn test_history_empty_check() {
        assert!(GridError::HistoryEmpty.is_history_empty());
        assert!(!GridError::EmptyData.is_history_empty());
    }
}
