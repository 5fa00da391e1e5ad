//! The per-document extraction pipeline.
//!
//! Pages are processed strictly in increasing index order, one at a time;
//! each page's raster and candidates are dropped before the next page
//! starts. A render failure aborts the whole document, a detection failure
//! skips only its page.

use std::path::Path;

use pagetag_core::{
    Candidate, ExtractError, ExtractWarning, ExtractWarningCode, PageResults, ScanOptions,
    select_nearest,
};
use pagetag_scan::{Document, detect_candidates};
use tracing::{debug, warn};

/// What one document yields: a per-page result list and any advisories.
#[derive(Debug, Clone)]
pub struct Extraction {
    /// One entry per page, in page order.
    pub results: PageResults,
    /// Advisories collected along the way; empty when warning collection
    /// is disabled.
    pub warnings: Vec<ExtractWarning>,
}

impl Extraction {
    /// The ordered code sequence, excluding pages without a code.
    pub fn output_sequence(&self) -> Vec<String> {
        self.results.output_sequence()
    }
}

/// Extract the per-page code sequence from an open document.
///
/// # Errors
///
/// Returns [`ExtractError::InvalidScaleFactor`] for a non-positive scale
/// and [`ExtractError::DocumentCorrupt`] when a page cannot be rasterized;
/// in that case no partial results are returned, since pages downstream of
/// a corrupt render cannot be trusted.
pub fn extract_codes(document: &Document, options: &ScanOptions) -> Result<Extraction, ExtractError> {
    options.validate()?;

    let page_count = document.page_count();
    let mut results = PageResults::with_capacity(page_count);
    let mut warnings = Vec::new();

    for page in 0..page_count {
        let raster = document.rasterize(page, options.scale_factor)?;
        let (native_width, native_height) = (raster.native_width(), raster.native_height());

        let detection = match detect_candidates(&raster, page) {
            Ok(detection) => detection,
            Err(err) => {
                // The sole per-page recoverable condition: detection failed,
                // so this page contributes no code and processing continues.
                warn!(page, error = %err, "detection failed; page skipped");
                if options.collect_warnings {
                    warnings.push(ExtractWarning::on_page(
                        ExtractWarningCode::PageSkipped,
                        err.to_string(),
                        page,
                    ));
                }
                results.push(None);
                continue;
            }
        };
        drop(raster);

        let code = resolve_page(
            &detection.candidates,
            detection.undecoded,
            native_width,
            native_height,
            options,
            page,
            &mut warnings,
        );
        debug!(page, code = code.as_deref().unwrap_or("-"), "page resolved");
        results.push(code);
    }

    Ok(Extraction { results, warnings })
}

/// Convenience wrapper that opens the document first.
///
/// # Errors
///
/// As [`extract_codes`], plus [`ExtractError::DocumentCorrupt`] when the
/// file cannot be opened as a PDF.
pub fn extract_codes_from_file(
    path: impl AsRef<Path>,
    options: &ScanOptions,
) -> Result<Extraction, ExtractError> {
    let document = Document::open_file(path)?;
    extract_codes(&document, options)
}

/// Turn one page's detection outcome into its result entry, collecting
/// advisories as configured.
fn resolve_page(
    candidates: &[Candidate],
    undecoded: usize,
    native_width: f64,
    native_height: f64,
    options: &ScanOptions,
    page: usize,
    warnings: &mut Vec<ExtractWarning>,
) -> Option<String> {
    if undecoded > 0 && options.collect_warnings {
        warnings.push(ExtractWarning::on_page(
            ExtractWarningCode::UndecodableSymbol,
            format!("{undecoded} symbol(s) detected but not decodable"),
            page,
        ));
    }

    let selection = select_nearest(
        candidates,
        native_width,
        native_height,
        options.scale_factor,
        options.near_tie_slack,
    )?;

    if selection.near_tie && options.collect_warnings {
        warnings.push(ExtractWarning::on_page(
            ExtractWarningCode::AmbiguousPage,
            format!(
                "{} candidates; nearest-to-center broke a near-tie",
                candidates.len()
            ),
            page,
        ));
    }
    Some(selection.text)
}
