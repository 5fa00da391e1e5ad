use std::cell::OnceCell;
use std::path::Path;

use pdfium_render::prelude::*;
use tracing::debug;

use crate::error::ScanError;
use crate::raster::PageRaster;

thread_local! {
    static PDFIUM: OnceCell<Pdfium> = OnceCell::new();
}

/// Bind the pdfium library once per thread.
///
/// Looks for a pdfium build next to the executable first, then falls back
/// to the system library path.
fn pdfium() -> Result<&'static Pdfium, ScanError> {
    PDFIUM.with(|cell| {
        if let Some(pdfium) = cell.get() {
            return Ok(unsafe { &*(pdfium as *const Pdfium) });
        }
        let bindings =
            Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
                .or_else(|_| Pdfium::bind_to_system_library())
                .map_err(|e| ScanError::Bind(e.to_string()))?;
        let pdfium = cell.get_or_init(|| Pdfium::new(bindings));
        Ok(unsafe { &*(pdfium as *const Pdfium) })
    })
}

/// A paginated document opened for code extraction.
///
/// Wraps a pdfium document handle. Immutable once opened; page geometry is
/// cached up front so that size queries never re-enter the renderer.
pub struct Document {
    doc: PdfDocument<'static>,
    /// Native (pre-scaling) page extents in PDF points, by page index.
    page_sizes: Vec<(f64, f64)>,
}

impl Document {
    /// Open a document from a file path.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Bind`] if no pdfium library can be bound, and
    /// [`ScanError::Open`] if the file is missing or is not a readable PDF.
    pub fn open_file(path: impl AsRef<Path>) -> Result<Self, ScanError> {
        let path = path.as_ref();
        let doc = pdfium()?
            .load_pdf_from_file(path, None)
            .map_err(|e| ScanError::Open(format!("{}: {e}", path.display())))?;

        let page_sizes = {
            let pages = doc.pages();
            let mut sizes = Vec::with_capacity(pages.len() as usize);
            for page in pages.iter() {
                sizes.push((page.width().value as f64, page.height().value as f64));
            }
            sizes
        };
        debug!(path = %path.display(), pages = page_sizes.len(), "document opened");

        Ok(Self { doc, page_sizes })
    }

    /// Number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.page_sizes.len()
    }

    /// Native width/height of a page in document units (PDF points).
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::PageOutOfRange`] for an invalid index.
    pub fn page_size(&self, index: usize) -> Result<(f64, f64), ScanError> {
        self.page_sizes
            .get(index)
            .copied()
            .ok_or(ScanError::PageOutOfRange {
                index,
                count: self.page_sizes.len(),
            })
    }

    /// Render one page to a grayscale raster at a uniform scale factor.
    ///
    /// The raster's pixel dimensions are the page's native extents
    /// multiplied by `scale`. The source document is not mutated.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::PageOutOfRange`] for an invalid index and
    /// [`ScanError::Render`] if the page content cannot be rendered; a
    /// render failure means the document cannot be trusted downstream.
    pub fn rasterize(&self, index: usize, scale: f64) -> Result<PageRaster, ScanError> {
        let (native_width, native_height) = self.page_size(index)?;

        let pages = self.doc.pages();
        let page = pages.get(index as u16).map_err(|e| ScanError::Render {
            page: index,
            detail: e.to_string(),
        })?;

        let config = PdfRenderConfig::new().scale_page_by_factor(scale as f32);
        let bitmap = page
            .render_with_config(&config)
            .map_err(|e| ScanError::Render {
                page: index,
                detail: e.to_string(),
            })?;

        debug!(page = index, scale, "page rasterized");
        Ok(PageRaster::new(
            bitmap.as_image(),
            native_width,
            native_height,
            scale,
        ))
    }
}
