//! Storage layer for moneygrid
//!
//! Flat CSV files are the only persistence: a grid is read from one file
//! and saved back whole. Writes are atomic so a failed save cannot
//! clobber the previous good file.

pub mod csv;
pub mod file_io;

pub use csv::{read_sheet, save_sheet, write_sheet};
pub use file_io::write_atomic;
