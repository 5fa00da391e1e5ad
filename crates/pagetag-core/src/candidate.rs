use crate::geometry::{Point, polygon_centroid};

/// A code instance detected on one page raster.
///
/// `text` is the decoded payload; an empty (or whitespace-only) payload
/// means the detector found a symbol it could not decode, and the
/// candidate must be discarded by the selection step. `corners` are the
/// symbol's corner points in raster pixel space, normally four of them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    pub text: String,
    pub corners: Vec<Point>,
}

impl Candidate {
    pub fn new(text: impl Into<String>, corners: Vec<Point>) -> Self {
        Self {
            text: text.into(),
            corners,
        }
    }

    /// Decoded payload with surrounding whitespace removed.
    pub fn trimmed_text(&self) -> &str {
        self.text.trim()
    }

    /// Whether this candidate carries a usable payload.
    pub fn is_decodable(&self) -> bool {
        !self.trimmed_text().is_empty()
    }

    /// Corner centroid mapped back into native page units.
    ///
    /// The raster was produced at `scale` times the page's native size, so
    /// dividing the pixel-space mean by `scale` returns to native
    /// coordinates. Returns `None` if the candidate has no corners.
    pub fn centroid(&self, scale: f64) -> Option<Point> {
        polygon_centroid(&self.corners).map(|c| Point::new(c.x / scale, c.y / scale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(cx: f64, cy: f64, half: f64) -> Vec<Point> {
        vec![
            Point::new(cx - half, cy - half),
            Point::new(cx + half, cy - half),
            Point::new(cx + half, cy + half),
            Point::new(cx - half, cy + half),
        ]
    }

    #[test]
    fn trimmed_text_strips_whitespace() {
        let c = Candidate::new("  ABC-123 \n", square(10.0, 10.0, 5.0));
        assert_eq!(c.trimmed_text(), "ABC-123");
    }

    #[test]
    fn empty_payload_is_not_decodable() {
        let c = Candidate::new("", square(10.0, 10.0, 5.0));
        assert!(!c.is_decodable());
    }

    #[test]
    fn whitespace_only_payload_is_not_decodable() {
        let c = Candidate::new(" \t\n", square(10.0, 10.0, 5.0));
        assert!(!c.is_decodable());
    }

    #[test]
    fn centroid_divides_by_scale() {
        // Corners centered at pixel (600, 300), scale 6 → native (100, 50).
        let c = Candidate::new("X", square(600.0, 300.0, 30.0));
        let centroid = c.centroid(6.0).unwrap();
        assert_eq!(centroid, Point::new(100.0, 50.0));
    }

    #[test]
    fn centroid_of_cornerless_candidate_is_none() {
        let c = Candidate::new("X", Vec::new());
        assert!(c.centroid(6.0).is_none());
    }

    #[test]
    fn centroid_at_scale_one_is_pixel_centroid() {
        let c = Candidate::new("X", square(40.0, 80.0, 10.0));
        assert_eq!(c.centroid(1.0).unwrap(), Point::new(40.0, 80.0));
    }
}
