//! CSV persistence for the grid
//!
//! Reading validates the schema before anything is handed back, so a bad
//! file can never half-replace a loaded grid. Saving writes the full grid,
//! header plus rows, through the atomic write helper.

use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::error::{GridError, GridResult};
use crate::grid::Sheet;

use super::file_io::write_atomic;

/// Read a CSV file into a new sheet
///
/// The first record is the header row. All required columns must be
/// present; extra columns come along in order. Ragged records are an
/// error, not padded silently.
pub fn read_sheet<P: AsRef<Path>>(path: P) -> GridResult<Sheet> {
    let path = path.as_ref();

    let mut reader = csv::Reader::from_path(path).map_err(|err| match err.kind() {
        csv::ErrorKind::Io(_) => {
            GridError::Io(format!("Failed to open {}: {}", path.display(), err))
        }
        _ => GridError::from(err),
    })?;

    let columns: Vec<String> = reader.headers()?.iter().map(String::from).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(String::from).collect());
    }

    let sheet = Sheet::from_parts(columns, rows)?;
    info!(
        path = %path.display(),
        rows = sheet.row_count(),
        "csv read"
    );
    Ok(sheet)
}

/// Write the full grid as CSV to any writer
pub fn write_sheet<W: Write>(sheet: &Sheet, writer: W) -> GridResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(sheet.columns())?;
    for row in sheet.rows() {
        csv_writer.write_record(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Save the full grid to a CSV file atomically
pub fn save_sheet<P: AsRef<Path>>(sheet: &Sheet, path: P) -> GridResult<()> {
    let mut buffer = Vec::new();
    write_sheet(sheet, &mut buffer)?;
    write_atomic(path.as_ref(), &buffer)?;
    info!(
        path = %path.as_ref().display(),
        rows = sheet.row_count(),
        "csv saved"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_fixture(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_read_accepts_valid_file() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(
            &dir,
            "data.csv",
            "Description,Date,Type,Amount\nSalary,2024-01-01,Income,100.00\n",
        );

        let sheet = read_sheet(&path).unwrap();
        assert_eq!(sheet.row_count(), 1);
        assert_eq!(sheet.cell(0, 0).unwrap(), "Salary");
    }

    #[test]
    fn test_read_preserves_extra_columns() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(
            &dir,
            "data.csv",
            "Description,Date,Type,Amount,Notes\nSalary,2024-01-01,Income,100.00,jan\n",
        );

        let sheet = read_sheet(&path).unwrap();
        assert_eq!(sheet.column_count(), 5);
        assert_eq!(sheet.cell(0, 4).unwrap(), "jan");
    }

    #[test]
    fn test_read_rejects_missing_required_column() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(
            &dir,
            "data.csv",
            "Description,Date,Type\nSalary,2024-01-01,Income\n",
        );

        let err = read_sheet(&path).unwrap_err();
        match err {
            GridError::Schema { missing } => assert_eq!(missing, vec!["Amount".to_string()]),
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn test_read_rejects_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = read_sheet(dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, GridError::Io(_)));
    }

    #[test]
    fn test_read_rejects_ragged_rows() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(
            &dir,
            "data.csv",
            "Description,Date,Type,Amount\nSalary,2024-01-01\n",
        );

        let err = read_sheet(&path).unwrap_err();
        assert!(matches!(err, GridError::Csv(_)));
    }

    #[test]
    fn test_save_and_read_round_trip() {
        let dir = TempDir::new().unwrap();
        let source = write_fixture(
            &dir,
            "in.csv",
            "Description,Date,Type,Amount\nSalary,2024-01-01,Income,100.00\nRent,2024-01-02,Expense,60.00\n",
        );
        let sheet = read_sheet(&source).unwrap();

        let out = dir.path().join("out.csv");
        save_sheet(&sheet, &out).unwrap();

        let reread = read_sheet(&out).unwrap();
        assert_eq!(reread, sheet);
        assert!(!dir.path().join("out.csv.tmp").exists());
    }

    #[test]
    fn test_write_quotes_awkward_cells() {
        let dir = TempDir::new().unwrap();
        let source = write_fixture(
            &dir,
            "in.csv",
            "Description,Date,Type,Amount\n\"Fish, chips\",2024-01-01,Expense,12.50\n",
        );
        let sheet = read_sheet(&source).unwrap();

        let mut buffer = Vec::new();
        write_sheet(&sheet, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("\"Fish, chips\""));
    }
}
