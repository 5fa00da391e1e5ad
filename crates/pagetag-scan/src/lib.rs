//! pagetag-scan: the primitive-coupled layer of pagetag-rs.
//!
//! Everything that touches a real rendering or decoding backend lives here:
//! opening a PDF through pdfium, rasterizing pages at a fixed upscaling
//! factor, and running the rqrr multi-code detector over the raster. The
//! pure selection and alignment logic stays in `pagetag-core`, so this
//! crate's job is only to produce faithful [`Candidate`](pagetag_core::Candidate)
//! values and honest errors.

mod detect;
mod document;
mod error;
mod raster;

pub use detect::{Detection, detect_candidates};
pub use document::Document;
pub use error::ScanError;
pub use raster::PageRaster;
