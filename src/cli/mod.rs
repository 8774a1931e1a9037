//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the workbook facade.

pub mod charts;
pub mod edit;
pub mod report;
pub mod view;

pub use charts::handle_charts_command;
pub use edit::handle_edit_command;
pub use report::handle_report_command;
pub use view::handle_view_command;
