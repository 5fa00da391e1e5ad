use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};

use crate::error::TableError;
use crate::model::Table;

/// Options controlling how a table file is read.
#[derive(Debug, Clone, Default)]
pub struct TableOptions {
    /// Zero-based index of the row that carries the column headers
    /// (default: 0). Rows above it (banners, titles) are discarded; rows
    /// below it become data. The source tables in this domain often carry a
    /// few banner rows above the real header.
    pub header_row: usize,
}

/// Read a table file, dispatching on its extension.
///
/// `.xlsx`, `.xlsm`, `.xls`, `.xlsb` and `.ods` go through calamine;
/// `.csv` goes through the csv crate with a sniffed delimiter. Row order
/// is preserved exactly as stored.
///
/// # Errors
///
/// Returns [`TableError::UnsupportedFormat`] for any other extension,
/// [`TableError::MissingHeader`] if `header_row` lies beyond the data, and
/// codec-specific errors for unreadable files.
pub fn read_table(path: impl AsRef<Path>, options: &TableOptions) -> Result<Table, TableError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    match extension.as_str() {
        "xlsx" | "xlsm" | "xls" | "xlsb" | "ods" => read_spreadsheet(path, options),
        "csv" => read_csv(path, options),
        _ => Err(TableError::UnsupportedFormat { extension }),
    }
}

/// Build a [`Table`] from raw rows, honoring the header-row option.
fn from_raw_rows(rows: Vec<Vec<String>>, options: &TableOptions) -> Result<Table, TableError> {
    let mut iter = rows.into_iter().skip(options.header_row);
    let headers = iter.next().ok_or(TableError::MissingHeader {
        row: options.header_row,
    })?;
    let mut table = Table::new(headers);
    for row in iter {
        table.push_row(row);
    }
    Ok(table)
}

fn read_spreadsheet(path: &Path, options: &TableOptions) -> Result<Table, TableError> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(TableError::NoWorksheet)??;

    let rows = range
        .rows()
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect();
    from_raw_rows(rows, options)
}

/// Render a spreadsheet cell as text.
///
/// Floats with no fractional part print as integers, matching how these
/// tables are produced (quantities and identifiers, not measurements).
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::Error(_) => String::new(),
        other => other.to_string(),
    }
}

fn read_csv(path: &Path, options: &TableOptions) -> Result<Table, TableError> {
    let content_head = {
        use std::io::{BufRead, BufReader};
        let file = std::fs::File::open(path)?;
        let mut first_line = String::new();
        BufReader::new(file).read_line(&mut first_line)?;
        first_line
    };
    let delimiter = sniff_delimiter(&content_head);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_path(path)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    from_raw_rows(rows, options)
}

/// Pick the candidate delimiter that occurs most often in the first line.
///
/// Falls back to a comma when nothing matches.
fn sniff_delimiter(first_line: &str) -> u8 {
    let candidates = [b',', b';', b'\t', b'|'];
    candidates
        .into_iter()
        .max_by_key(|&d| first_line.bytes().filter(|&b| b == d).count())
        .filter(|&d| first_line.bytes().any(|b| b == d))
        .unwrap_or(b',')
}
