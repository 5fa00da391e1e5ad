//! Error and warning types for pagetag-rs.
//!
//! Provides [`ExtractError`] for fatal conditions that stop processing of a
//! whole document, and [`ExtractWarning`] for per-page advisories that allow
//! best-effort continuation.

use std::fmt;

/// Fatal error types for document processing.
///
/// These indicate conditions under which no page downstream of the failure
/// can be trusted, so the whole document is abandoned.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractError {
    /// The document cannot be opened, or a page cannot be rasterized.
    DocumentCorrupt(String),
    /// I/O error reading the document.
    Io(String),
    /// The configured scale factor is not a positive finite number.
    InvalidScaleFactor(f64),
    /// The detection backend failed on one page's raster.
    ///
    /// This condition is recovered inside the pipeline as "no code for this
    /// page"; it only escapes when a caller invokes the detection layer
    /// directly.
    RasterDecode {
        /// Zero-based page index.
        page: usize,
        /// Backend-specific description.
        detail: String,
    },
    /// Any other error not covered by specific variants.
    Other(String),
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::DocumentCorrupt(msg) => write!(f, "document corrupt: {msg}"),
            ExtractError::Io(msg) => write!(f, "I/O error: {msg}"),
            ExtractError::InvalidScaleFactor(v) => {
                write!(f, "scale factor must be a positive finite number, got {v}")
            }
            ExtractError::RasterDecode { page, detail } => {
                write!(f, "detection failed on page {page}: {detail}")
            }
            ExtractError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ExtractError {}

impl From<std::io::Error> for ExtractError {
    fn from(err: std::io::Error) -> Self {
        ExtractError::Io(err.to_string())
    }
}

/// Machine-readable warning code for categorizing per-page advisories.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", content = "detail")
)]
pub enum ExtractWarningCode {
    /// The nearest-to-center heuristic broke a near-tie between candidates.
    AmbiguousPage,
    /// A symbol was detected but could not be decoded.
    UndecodableSymbol,
    /// Detection failed for a page; it contributes no code.
    PageSkipped,
    /// Any other warning not covered by specific variants.
    Other(String),
}

impl ExtractWarningCode {
    /// Returns the string tag for this warning code.
    pub fn as_str(&self) -> &str {
        match self {
            ExtractWarningCode::AmbiguousPage => "AMBIGUOUS_PAGE",
            ExtractWarningCode::UndecodableSymbol => "UNDECODABLE_SYMBOL",
            ExtractWarningCode::PageSkipped => "PAGE_SKIPPED",
            ExtractWarningCode::Other(_) => "OTHER",
        }
    }
}

impl fmt::Display for ExtractWarningCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A non-fatal advisory collected during extraction.
///
/// Warnings never abort processing; a page that raises one still produces
/// its (possibly empty) result. They exist for diagnostics only.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtractWarning {
    /// Machine-readable warning code.
    pub code: ExtractWarningCode,
    /// Human-readable description.
    pub description: String,
    /// Page the warning occurred on (0-indexed), if applicable.
    pub page: Option<usize>,
}

impl ExtractWarning {
    /// Create a warning with just a description.
    pub fn new(description: impl Into<String>) -> Self {
        let desc = description.into();
        Self {
            code: ExtractWarningCode::Other(desc.clone()),
            description: desc,
            page: None,
        }
    }

    /// Create a warning with a specific code and page context.
    pub fn on_page(code: ExtractWarningCode, description: impl Into<String>, page: usize) -> Self {
        Self {
            code,
            description: description.into(),
            page: Some(page),
        }
    }
}

impl fmt::Display for ExtractWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.description)?;
        if let Some(page) = self.page {
            write!(f, " (page {page})")?;
        }
        Ok(())
    }
}
