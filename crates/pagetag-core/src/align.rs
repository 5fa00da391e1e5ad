//! Positional alignment of a code sequence against table rows.
//!
//! The document and the table are assumed to have been produced in matching
//! order by an external process; nothing here can detect a misalignment
//! (an undetected page silently shifts every subsequent pairing by one).
//! [`AlignMode::Strict`] at least fails loudly when the counts disagree.

use std::fmt;

/// How to handle a length mismatch between codes and rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlignMode {
    /// Pair positionally up to the shorter length; extra rows stay unset and
    /// extra codes are dropped silently.
    #[default]
    Truncate,
    /// Fail with [`AlignError::CountMismatch`] unless the counts are equal.
    Strict,
}

/// Alignment failure in [`AlignMode::Strict`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlignError {
    /// The code sequence and the table disagree on length.
    CountMismatch {
        /// Number of extracted codes.
        codes: usize,
        /// Number of table rows.
        rows: usize,
    },
}

impl fmt::Display for AlignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlignError::CountMismatch { codes, rows } => write!(
                f,
                "code count ({codes}) does not match row count ({rows})"
            ),
        }
    }
}

impl std::error::Error for AlignError {}

/// Pair codes with rows positionally.
///
/// Returns one entry per row: `Some(code)` for rows `0..min(codes, rows)`,
/// `None` for any rows beyond the code sequence. Codes beyond the row count
/// are dropped.
///
/// # Errors
///
/// In [`AlignMode::Strict`], returns [`AlignError::CountMismatch`] when the
/// lengths differ; nothing is paired in that case.
pub fn align_codes(
    codes: &[String],
    row_count: usize,
    mode: AlignMode,
) -> Result<Vec<Option<String>>, AlignError> {
    if mode == AlignMode::Strict && codes.len() != row_count {
        return Err(AlignError::CountMismatch {
            codes: codes.len(),
            rows: row_count,
        });
    }

    let paired = codes.len().min(row_count);
    let mut column = Vec::with_capacity(row_count);
    column.extend(codes[..paired].iter().cloned().map(Some));
    column.resize(row_count, None);
    Ok(column)
}
