//! pagetag: extract one identifying QR code per page of a scanned PDF and
//! align the codes, in page order, with the rows of an external table.
//!
//! This is the public API facade crate for pagetag-rs. It ties together the
//! backend-independent algorithms, the rendering/detection backends, and
//! the tabular collaborator.
//!
//! # Architecture
//!
//! - **pagetag-core**: backend-independent data types and algorithms
//!   (candidates, nearest-to-center selection, positional alignment)
//! - **pagetag-scan**: page rasterization (pdfium) and code detection (rqrr)
//! - **pagetag-table**: spreadsheet/CSV reader and CSV writer
//! - **pagetag** (this crate): the per-document pipeline, table merging,
//!   and requester session bookkeeping
//!
//! # Example
//!
//! ```ignore
//! use pagetag::{JobOptions, process_files, write_table};
//!
//! let outcome = process_files("batch.pdf", "manifest.xlsx", &JobOptions::default())?;
//! write_table(&outcome.table, "manifest_with_codes.csv")?;
//! ```

mod extract;
mod merge;
mod session;

pub use pagetag_core::{
    AlignError, AlignMode, Candidate, DEFAULT_SCALE_FACTOR, ExtractError, ExtractWarning,
    ExtractWarningCode, PageResults, Point, ScanOptions, Selection, align_codes, select_nearest,
};
pub use pagetag_scan::{Document, PageRaster, ScanError};
pub use pagetag_table::{Table, TableError, TableOptions, read_table, write_table};

pub use extract::{Extraction, extract_codes, extract_codes_from_file};
pub use merge::{JobOptions, MergeOptions, ProcessOutcome, merge_codes, process_files};
pub use session::{PairState, PairingStore, ReadyPair, Submission};

use thiserror::Error;

/// Any failure of the end-to-end pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Extract(#[from] ExtractError),
    #[error(transparent)]
    Table(#[from] TableError),
    #[error(transparent)]
    Align(#[from] AlignError),
}
