//! File I/O utilities with atomic writes
//!
//! A failed save must never clobber the previous good file, so writes go
//! to a temp file in the same directory and land with a rename.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{GridError, GridResult};

/// Write bytes to a file atomically (write to temp, then rename)
///
/// The temp file lives next to the target so the rename stays on one
/// filesystem. If the rename fails the temp file is removed and the
/// original file is left untouched.
pub fn write_atomic<P: AsRef<Path>>(path: P, bytes: &[u8]) -> GridResult<()> {
    let path = path.as_ref();

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                GridError::Io(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let temp_path = match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => path.with_extension(format!("{ext}.tmp")),
        None => path.with_extension("tmp"),
    };

    let file = File::create(&temp_path)
        .map_err(|e| GridError::Io(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(bytes)
        .map_err(|e| GridError::Io(format!("Failed to write data: {}", e)))?;
    writer
        .flush()
        .map_err(|e| GridError::Io(format!("Failed to flush data: {}", e)))?;

    // Sync to disk before rename
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| GridError::Io(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        // Try to clean up temp file if rename fails
        let _ = fs::remove_file(&temp_path);
        GridError::Io(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
