//! Deviation of a simplified polyline from its source.
//!
//! Every point dropped by a simplification lies between two retained points.
//! Its deviation is the perpendicular distance to the line through that
//! bracketing pair, the same measure RDP uses when deciding to drop it.
//! The maximum over all dropped points is therefore at most the tolerance
//! the simplification ran with.
//!
//! # Example
//!
//! ```
//! use wavethin::simplify::{rdp_indices, Epsilon};
//! use wavethin::tolerance::max_deviation;
//! use wavethin::Point2;
//!
//! let points = vec![
//!     Point2::new(0.0_f64, 0.0),
//!     Point2::new(1.0, 0.3),
//!     Point2::new(2.0, 0.0),
//!     Point2::new(3.0, 2.0),
//!     Point2::new(4.0, 0.0),
//! ];
//!
//! let kept = rdp_indices(&points, Epsilon::new(0.5).unwrap());
//! assert!(max_deviation(&points, &kept) <= 0.5);
//! ```

use crate::primitives::{Line2, Point2};
use num_traits::Float;

/// Computes the largest perpendicular deviation of any dropped point.
///
/// # Arguments
///
/// * `points` - The original polyline
/// * `kept` - Ascending indices of the retained points. Should include the
///   first and last index; points outside the first and last kept index are
///   ignored.
///
/// # Returns
///
/// The maximum deviation, or 0 if no point was dropped. Out-of-range indices
/// are skipped.
pub fn max_deviation<F: Float>(points: &[Point2<F>], kept: &[usize]) -> F {
    kept.windows(2)
        .filter(|pair| pair[0] < pair[1] && pair[1] < points.len())
        .map(|pair| span_deviation(points, pair[0], pair[1]))
        .fold(F::zero(), F::max)
}

/// Computes the deviation when only the simplified points are at hand.
///
/// The simplified points are matched against `original` in order, so the
/// result is only meaningful when `simplified` is a subsequence of
/// `original`. Returns `None` if it is not.
///
/// Each simplified point binds to its first unmatched equal point in
/// `original`. If `original` repeats a point, that may be an earlier copy
/// than the one actually retained, and the spans (and so the result) can
/// differ from the true ones. Use [`max_deviation`] with the retained
/// indices when the input may contain repeated points.
pub fn max_deviation_points<F: Float>(
    original: &[Point2<F>],
    simplified: &[Point2<F>],
) -> Option<F> {
    let mut kept = Vec::with_capacity(simplified.len());
    let mut cursor = 0;

    for target in simplified {
        let offset = original[cursor..].iter().position(|p| p == target)?;
        kept.push(cursor + offset);
        cursor += offset + 1;
    }

    Some(max_deviation(original, &kept))
}

fn span_deviation<F: Float>(points: &[Point2<F>], start: usize, end: usize) -> F {
    let line = Line2::from_points(points[start], points[end]);
    points[start + 1..end]
        .iter()
        .map(|&p| line.perpendicular_distance(p))
        .fold(F::zero(), F::max)
}
