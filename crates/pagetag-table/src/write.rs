use std::path::Path;

use crate::error::TableError;
use crate::model::Table;

/// Write a table to disk as CSV, headers first, rows in stored order.
///
/// # Errors
///
/// Returns [`TableError::Csv`] or [`TableError::Io`] on write failure.
pub fn write_table(table: &Table, path: impl AsRef<Path>) -> Result<(), TableError> {
    let mut writer = csv::Writer::from_path(path.as_ref())?;
    writer.write_record(table.headers())?;
    for row in table.rows() {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}
