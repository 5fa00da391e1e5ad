//! pagetag-table: the tabular collaborator of pagetag-rs.
//!
//! Reads spreadsheet files (XLSX/XLSM/XLS/ODS via calamine, CSV via the csv
//! crate) into a rectangular [`Table`], appends a column without reordering
//! rows, and writes the result back out as CSV. Row order is stable
//! throughout: downstream positional alignment depends on it.

mod error;
mod model;
mod read;
mod write;

pub use error::TableError;
pub use model::Table;
pub use read::{TableOptions, read_table};
pub use write::write_table;
