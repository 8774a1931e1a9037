//! moneygrid - Personal finance CSV grid with undo, charts, and reports
//!
//! This library provides the core functionality for the moneygrid
//! application. It loads a personal-finance CSV into an editable grid,
//! tracks every cell edit in a linear undo/redo history, derives a
//! running balance and per-description totals from the typed rows,
//! renders both derivations as SVG charts, and exports a styled HTML
//! report.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, ledger entries)
//! - `grid`: The editable sheet and its edit history
//! - `storage`: CSV read/write with atomic saves
//! - `reports`: Balance and grouping derivations
//! - `charts`: SVG chart rendering
//! - `document`: Report composition and HTML rendering
//! - `workbook`: The facade an application shell drives
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use moneygrid::config::Settings;
//! use moneygrid::Workbook;
//!
//! let mut workbook = Workbook::new(Settings::default());
//! workbook.import("ledger.csv")?;
//! workbook.edit_cell(0, 3, "250.00")?;
//! workbook.export_report("report.html")?;
//! ```

pub mod charts;
pub mod cli;
pub mod config;
pub mod display;
pub mod document;
pub mod error;
pub mod grid;
pub mod models;
pub mod reports;
pub mod storage;
pub mod workbook;

pub use error::{GridError, GridResult};
pub use workbook::Workbook;
