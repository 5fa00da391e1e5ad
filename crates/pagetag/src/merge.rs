//! Merging an extracted code sequence into a table.

use std::path::Path;

use pagetag_core::{AlignMode, ExtractWarning, PageResults, ScanOptions, align_codes};
use pagetag_table::{Table, TableOptions, read_table};
use tracing::info;

use crate::PipelineError;
use crate::extract::extract_codes_from_file;

/// Options for the merge step.
#[derive(Debug, Clone)]
pub struct MergeOptions {
    /// Name of the appended column (default: "code").
    pub column_name: String,
    /// How to handle a code/row count mismatch (default: truncate).
    pub mode: AlignMode,
    /// Columns to remove from the output table after the merge.
    pub drop_columns: Vec<String>,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            column_name: "code".to_string(),
            mode: AlignMode::default(),
            drop_columns: Vec::new(),
        }
    }
}

/// Append the code sequence to `table` as a new column.
///
/// Codes pair with rows positionally: code `i` lands in row `i`, up to the
/// shorter of the two lengths. Rows beyond the sequence stay empty; codes
/// beyond the rows are dropped. In [`AlignMode::Strict`] a length mismatch
/// is an error instead.
///
/// # Errors
///
/// Returns [`PipelineError::Align`] on a strict-mode count mismatch; the
/// table is left untouched in that case.
pub fn merge_codes(
    table: &mut Table,
    codes: &[String],
    options: &MergeOptions,
) -> Result<(), PipelineError> {
    let column = align_codes(codes, table.row_count(), options.mode)?;
    table.append_column(options.column_name.clone(), column)?;
    table.drop_columns(&options.drop_columns);
    Ok(())
}

/// Options for a whole extract-and-merge job.
#[derive(Debug, Clone, Default)]
pub struct JobOptions {
    pub scan: ScanOptions,
    pub table: TableOptions,
    pub merge: MergeOptions,
}

/// Result of a whole extract-and-merge job.
#[derive(Debug, Clone)]
pub struct ProcessOutcome {
    /// The input table with the code column appended.
    pub table: Table,
    /// Per-page extraction results, for diagnostics.
    pub results: PageResults,
    /// Advisories collected during extraction.
    pub warnings: Vec<ExtractWarning>,
}

/// Run the whole job: read the table, extract codes from the document,
/// merge them as a new column.
///
/// The caller decides where (and whether) to write the resulting table.
///
/// # Errors
///
/// Propagates table codec errors, document-level extraction errors, and
/// strict-mode alignment errors.
pub fn process_files(
    document_path: impl AsRef<Path>,
    table_path: impl AsRef<Path>,
    options: &JobOptions,
) -> Result<ProcessOutcome, PipelineError> {
    let mut table = read_table(table_path, &options.table)?;
    let extraction = extract_codes_from_file(document_path, &options.scan)?;
    let codes = extraction.output_sequence();

    info!(
        pages = extraction.results.len(),
        codes = codes.len(),
        rows = table.row_count(),
        "merging extracted codes into table"
    );
    merge_codes(&mut table, &codes, &options.merge)?;

    Ok(ProcessOutcome {
        table,
        results: extraction.results,
        warnings: extraction.warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagetag_core::AlignError;

    fn table_with_rows(n: usize) -> Table {
        let mut t = Table::new(vec!["item".into()]);
        for i in 0..n {
            t.push_row(vec![format!("item-{i}")]);
        }
        t
    }

    fn codes(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn merge_fills_rows_in_order() {
        let mut table = table_with_rows(3);
        merge_codes(&mut table, &codes(&["a", "b", "c"]), &MergeOptions::default()).unwrap();
        assert_eq!(table.headers(), &["item", "code"]);
        assert_eq!(table.column("code").unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn merge_leaves_extra_rows_empty() {
        // 3 codes, 5 rows: rows 3-4 get empty cells.
        let mut table = table_with_rows(5);
        merge_codes(&mut table, &codes(&["a", "b", "c"]), &MergeOptions::default()).unwrap();
        assert_eq!(table.column("code").unwrap(), vec!["a", "b", "c", "", ""]);
    }

    #[test]
    fn merge_drops_extra_codes() {
        // 5 codes, 3 rows: the last 2 are dropped.
        let mut table = table_with_rows(3);
        merge_codes(
            &mut table,
            &codes(&["a", "b", "c", "d", "e"]),
            &MergeOptions::default(),
        )
        .unwrap();
        assert_eq!(table.column("code").unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn strict_mode_rejects_mismatch_and_leaves_table_untouched() {
        let mut table = table_with_rows(5);
        let options = MergeOptions {
            mode: AlignMode::Strict,
            ..MergeOptions::default()
        };
        let err = merge_codes(&mut table, &codes(&["a", "b"]), &options).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Align(AlignError::CountMismatch { codes: 2, rows: 5 })
        ));
        assert_eq!(table.headers(), &["item"]);
    }

    #[test]
    fn merge_applies_drop_columns() {
        let mut table = Table::new(vec!["item".into(), "photo".into()]);
        table.push_row(vec!["widget".into(), "img1".into()]);
        let options = MergeOptions {
            drop_columns: vec!["photo".into()],
            ..MergeOptions::default()
        };
        merge_codes(&mut table, &codes(&["a"]), &options).unwrap();
        assert_eq!(table.headers(), &["item", "code"]);
    }

    #[test]
    fn custom_column_name_is_used() {
        let mut table = table_with_rows(1);
        let options = MergeOptions {
            column_name: "qr_payload".into(),
            ..MergeOptions::default()
        };
        merge_codes(&mut table, &codes(&["x"]), &options).unwrap();
        assert!(table.column_index("qr_payload").is_some());
    }
}
