//! Display formatting for terminal output
//!
//! Provides utilities for formatting the grid for terminal display.
//! Derivations carry their own `format_terminal` methods; this module
//! covers the grid itself.

pub mod grid;

pub use grid::{format_sheet, format_sheet_summary};
