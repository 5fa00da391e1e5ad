use std::path::Path;

use pagetag::{AlignMode, JobOptions, MergeOptions, TableOptions, process_files, write_table};

use crate::shared::{require_file, scan_options};

pub fn run(
    file: &Path,
    table: &Path,
    output: &Path,
    column: &str,
    scale: f64,
    header_row: usize,
    drop_columns: &[String],
    strict: bool,
) -> Result<(), i32> {
    require_file(file)?;
    require_file(table)?;
    let scan = scan_options(scale)?;

    let options = JobOptions {
        scan,
        table: TableOptions { header_row },
        merge: MergeOptions {
            column_name: column.to_string(),
            mode: if strict {
                AlignMode::Strict
            } else {
                AlignMode::Truncate
            },
            drop_columns: drop_columns.to_vec(),
        },
    };

    // process_files reads the table before binding the renderer, so table
    // problems surface first.
    let outcome = process_files(file, table, &options).map_err(|e| {
        eprintln!("Error: {e}");
        1
    })?;

    for warning in &outcome.warnings {
        eprintln!("warning: {warning}");
    }

    write_table(&outcome.table, output).map_err(|e| {
        eprintln!("Error: failed to write {}: {e}", output.display());
        1
    })?;

    eprintln!(
        "Wrote {} rows ({} pages, {} codes) to {}",
        outcome.table.row_count(),
        outcome.results.len(),
        outcome.results.output_sequence().len(),
        output.display()
    );
    Ok(())
}
