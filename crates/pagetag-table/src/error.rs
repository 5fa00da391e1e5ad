use thiserror::Error;

/// Errors raised by the tabular reader/writer.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The file extension maps to no supported codec.
    #[error("unsupported table format: .{extension}")]
    UnsupportedFormat { extension: String },

    /// The workbook contains no worksheets.
    #[error("workbook contains no worksheets")]
    NoWorksheet,

    /// The configured header row lies beyond the end of the data.
    #[error("header row {row} is beyond the end of the table")]
    MissingHeader { row: usize },

    /// A column being appended does not match the table's row count.
    #[error("column has {actual} values but the table has {expected} rows")]
    ColumnLength { expected: usize, actual: usize },
}
