//! The editable grid: tabular store plus its undo/redo log

pub mod history;
pub mod sheet;

pub use history::{CellEdit, EditHistory};
pub use sheet::{Sheet, REQUIRED_COLUMNS};
