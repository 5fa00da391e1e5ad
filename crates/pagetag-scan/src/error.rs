use pagetag_core::ExtractError;
use thiserror::Error;

/// Errors raised by the rendering and detection backends.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The PDF runtime library could not be located or bound.
    #[error("failed to bind the PDF runtime: {0}")]
    Bind(String),

    /// The document could not be opened or parsed.
    #[error("failed to open document: {0}")]
    Open(String),

    /// A page index beyond the document's page count was requested.
    #[error("page index {index} out of range ({count} pages)")]
    PageOutOfRange { index: usize, count: usize },

    /// A page could not be rendered to a raster.
    #[error("page {page} could not be rendered: {detail}")]
    Render { page: usize, detail: String },

    /// A page's raster is unusable for detection.
    #[error("page {page} raster is unusable for detection: {detail}")]
    Detect { page: usize, detail: String },

    /// I/O error reading the document.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ScanError> for ExtractError {
    fn from(err: ScanError) -> Self {
        match err {
            ScanError::Io(e) => ExtractError::Io(e.to_string()),
            ScanError::Detect { page, detail } => ExtractError::RasterDecode { page, detail },
            // Bind, open, out-of-range, and render failures all mean the
            // document as a whole cannot be trusted.
            other => ExtractError::DocumentCorrupt(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_error_converts_to_document_corrupt() {
        let err = ScanError::Render {
            page: 2,
            detail: "malformed content stream".to_string(),
        };
        let extract: ExtractError = err.into();
        assert!(matches!(extract, ExtractError::DocumentCorrupt(_)));
        assert!(extract.to_string().contains("page 2"));
    }

    #[test]
    fn detect_error_converts_to_raster_decode() {
        let err = ScanError::Detect {
            page: 5,
            detail: "zero-sized raster".to_string(),
        };
        let extract: ExtractError = err.into();
        assert_eq!(
            extract,
            ExtractError::RasterDecode {
                page: 5,
                detail: "zero-sized raster".to_string()
            }
        );
    }

    #[test]
    fn io_error_converts_to_io() {
        let err = ScanError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing file",
        ));
        let extract: ExtractError = err.into();
        assert!(matches!(extract, ExtractError::Io(_)));
    }

    #[test]
    fn page_out_of_range_display() {
        let err = ScanError::PageOutOfRange { index: 9, count: 3 };
        assert_eq!(err.to_string(), "page index 9 out of range (3 pages)");
    }
}
