use pagetag_core::{Candidate, Point};
use tracing::debug;

use crate::error::ScanError;
use crate::raster::PageRaster;

/// Outcome of one detection pass over a page raster.
#[derive(Debug, Clone, Default)]
pub struct Detection {
    /// Decoded candidates in the detector's enumeration order.
    pub candidates: Vec<Candidate>,
    /// Symbols that were located but failed to decode.
    pub undecoded: usize,
}

/// Run a multi-code detect-and-decode pass over a raster.
///
/// Every located symbol that decodes becomes a [`Candidate`] carrying its
/// decoded text and four pixel-space corner points; symbols that fail to
/// decode are counted in [`Detection::undecoded`] rather than reported as
/// errors, since an unreadable incidental code is routine. The order of
/// `candidates` is the detector's grid enumeration order, which is
/// deterministic for a given raster.
///
/// `page` is the zero-based page index, used only for error context.
///
/// # Errors
///
/// Returns [`ScanError::Detect`] if the raster cannot be fed to the
/// detector at all (e.g. it has a zero dimension). Callers treat this as
/// "no code for this page", not as a document failure.
pub fn detect_candidates(raster: &PageRaster, page: usize) -> Result<Detection, ScanError> {
    let (width, height) = (raster.pixel_width(), raster.pixel_height());
    if width == 0 || height == 0 {
        return Err(ScanError::Detect {
            page,
            detail: format!("zero-sized raster ({width}x{height})"),
        });
    }

    let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
        width as usize,
        height as usize,
        |x, y| raster.luma(x as u32, y as u32),
    );

    let mut detection = Detection::default();
    for grid in prepared.detect_grids() {
        let corners: Vec<Point> = grid
            .bounds
            .iter()
            .map(|p| Point::new(p.x as f64, p.y as f64))
            .collect();
        match grid.decode() {
            Ok((_, text)) => detection.candidates.push(Candidate::new(text, corners)),
            Err(err) => {
                debug!(page, error = %err, "located symbol failed to decode");
                detection.undecoded += 1;
            }
        }
    }

    debug!(
        page,
        decoded = detection.candidates.len(),
        undecoded = detection.undecoded,
        "detection pass complete"
    );
    Ok(detection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, GrayImage, Luma};

    #[test]
    fn blank_raster_has_no_candidates() {
        let blank = GrayImage::from_pixel(96, 96, Luma([255]));
        let raster = PageRaster::new(DynamicImage::ImageLuma8(blank), 16.0, 16.0, 6.0);
        let detection = detect_candidates(&raster, 0).unwrap();
        assert!(detection.candidates.is_empty());
        assert_eq!(detection.undecoded, 0);
    }

    #[test]
    fn noise_raster_decodes_nothing() {
        // Deterministic pseudo-noise; nothing in it is a valid symbol.
        let noise = GrayImage::from_fn(96, 96, |x, y| {
            Luma([if (x * 31 + y * 17) % 7 < 3 { 0 } else { 255 }])
        });
        let raster = PageRaster::new(DynamicImage::ImageLuma8(noise), 16.0, 16.0, 6.0);
        let detection = detect_candidates(&raster, 0).unwrap();
        assert!(detection.candidates.is_empty());
    }

    #[test]
    fn zero_sized_raster_is_a_detect_error() {
        let empty = GrayImage::new(0, 0);
        let raster = PageRaster::new(DynamicImage::ImageLuma8(empty), 0.0, 0.0, 6.0);
        let err = detect_candidates(&raster, 7).unwrap_err();
        match err {
            ScanError::Detect { page, .. } => assert_eq!(page, 7),
            other => panic!("expected Detect error, got {other:?}"),
        }
    }
}
