//! Nearest-to-center candidate selection.
//!
//! Documents in this domain place one primary code near the page center;
//! incidental codes (shipping labels, secondary barcodes) sit elsewhere.
//! Picking the candidate whose centroid is nearest the page's geometric
//! center distinguishes the primary code without interpreting its payload.

use crate::candidate::Candidate;
use crate::geometry::Point;

/// Outcome of selecting one candidate on a page.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selection {
    /// Trimmed decoded payload of the winning candidate.
    pub text: String,
    /// Index of the winner within the input slice (detection order).
    pub candidate_index: usize,
    /// Squared distance from the winner's centroid to the page center,
    /// in native units.
    pub distance_sq: f64,
    /// True when the runner-up was within the near-tie slack of the winner,
    /// meaning the heuristic had to break a near-tie.
    pub near_tie: bool,
}

/// Select the decodable candidate whose centroid is nearest the page center.
///
/// Distances are squared Euclidean distances in native page units: each
/// candidate's pixel-space corner centroid is divided by `scale` before
/// being compared against `(native_width / 2, native_height / 2)`. Both the
/// centroid and the reference center scale proportionally, so the ordering
/// is independent of the chosen scale factor.
///
/// Candidates with empty or whitespace-only payloads are discarded first;
/// if none remain, the page legitimately carries no readable code and
/// `None` is returned.
///
/// Ties on distance go to the first candidate in detection order (the
/// strict `<` in the scan). Detection order is whatever the decoding
/// backend enumerates, which is deterministic for a given raster but not
/// otherwise meaningful.
///
/// `near_tie_slack` is a fraction of the squared page diagonal; when the
/// best and runner-up distances differ by less than it, the result is
/// flagged [`near_tie`](Selection::near_tie) so callers can surface an
/// ambiguity advisory.
pub fn select_nearest(
    candidates: &[Candidate],
    native_width: f64,
    native_height: f64,
    scale: f64,
    near_tie_slack: f64,
) -> Option<Selection> {
    let center = Point::new(native_width / 2.0, native_height / 2.0);

    let mut best: Option<(usize, f64)> = None;
    let mut runner_up_sq = f64::INFINITY;

    for (index, candidate) in candidates.iter().enumerate() {
        if !candidate.is_decodable() {
            continue;
        }
        let Some(centroid) = candidate.centroid(scale) else {
            continue;
        };
        let dist_sq = centroid.distance_sq(&center);
        match best {
            Some((_, best_sq)) if dist_sq < best_sq => {
                runner_up_sq = best_sq;
                best = Some((index, dist_sq));
            }
            Some(_) => runner_up_sq = runner_up_sq.min(dist_sq),
            None => best = Some((index, dist_sq)),
        }
    }

    let (candidate_index, distance_sq) = best?;
    let diagonal_sq = native_width * native_width + native_height * native_height;
    let near_tie = runner_up_sq.is_finite()
        && (runner_up_sq - distance_sq) < near_tie_slack * diagonal_sq;

    Some(Selection {
        text: candidates[candidate_index].trimmed_text().to_string(),
        candidate_index,
        distance_sq,
        near_tie,
    })
}
