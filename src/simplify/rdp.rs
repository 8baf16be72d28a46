//! Ramer-Douglas-Peucker polyline simplification.
//!
//! The RDP algorithm simplifies a polyline by finding the interior point
//! farthest from the line through the endpoints. If that point lies within
//! the tolerance, every interior point is dropped; otherwise the polyline is
//! split there and both halves are simplified the same way.
//!
//! The splitting is driven by an explicit work list of index ranges, so stack
//! usage does not grow with the input.
//!
//! Time complexity: O(n²) worst case, O(n log n) typical.

use super::Epsilon;
use crate::error::{Result, SimplifyError};
use crate::primitives::{Line2, Point2};
use log::{debug, trace};
use num_traits::Float;

/// Simplifies a polyline using the Ramer-Douglas-Peucker algorithm.
///
/// Returns a new vector containing only the points that remain after
/// simplification. The output is a subsequence of the input, and the first
/// and last points are always preserved. Inputs with fewer than three points
/// are returned unchanged.
///
/// # Arguments
///
/// * `points` - The input polyline as a slice of points
/// * `epsilon` - Distance tolerance. Interior points within this distance of
///   the line through the endpoints of their enclosing span are removed.
///
/// # Errors
///
/// Returns [`SimplifyError::NegativeTolerance`] or
/// [`SimplifyError::NonFiniteTolerance`] for an invalid `epsilon`, and
/// [`SimplifyError::NonFiniteCoordinate`] if any point has a NaN or infinite
/// coordinate.
///
/// # Example
///
/// ```
/// use wavethin::{Point2, simplify::simplify};
///
/// let points = vec![
///     Point2::new(0.0, 1.0),
///     Point2::new(1.0, 2.0),
///     Point2::new(2.0, 3.0), // Peak, kept
///     Point2::new(3.0, 2.0),
///     Point2::new(4.0, 1.0),
///     Point2::new(5.0, 0.0),
/// ];
///
/// let simplified = simplify(&points, 0.5).unwrap();
/// assert_eq!(simplified, vec![points[0], points[2], points[5]]);
/// ```
pub fn simplify<F: Float>(points: &[Point2<F>], epsilon: F) -> Result<Vec<Point2<F>>> {
    let indices = simplify_indices(points, epsilon)?;
    Ok(indices.into_iter().map(|i| points[i]).collect())
}

/// Validates the inputs and returns the indices of retained points.
///
/// This is useful when the points carry associated data (timestamps, raw
/// sensor counts) that must stay in step with the simplified trace.
///
/// # Returns
///
/// Ascending indices into `points`. Always includes index 0 and the last
/// index if the input has >= 2 points.
pub fn simplify_indices<F: Float>(points: &[Point2<F>], epsilon: F) -> Result<Vec<usize>> {
    let epsilon = Epsilon::new(epsilon)?;
    if let Some(index) = points.iter().position(|p| !p.is_finite()) {
        return Err(SimplifyError::NonFiniteCoordinate { index });
    }
    Ok(rdp_indices(points, epsilon))
}

/// Simplifies a polyline with an already validated tolerance.
///
/// Coordinates are not checked. A NaN distance never compares greater than
/// the tolerance, so a span whose distances are all NaN collapses to its
/// endpoints.
pub fn rdp<F: Float>(points: &[Point2<F>], epsilon: Epsilon<F>) -> Vec<Point2<F>> {
    let indices = rdp_indices(points, epsilon);
    indices.into_iter().map(|i| points[i]).collect()
}

/// Returns the indices of the points retained by [`rdp`], in order.
pub fn rdp_indices<F: Float>(points: &[Point2<F>], epsilon: Epsilon<F>) -> Vec<usize> {
    let n = points.len();
    if n < 3 {
        return (0..n).collect();
    }

    let tolerance = epsilon.get();

    // Track which points to keep
    let mut keep = vec![false; n];
    keep[0] = true;
    keep[n - 1] = true;

    // Spans still to be examined, as inclusive (start, end) index pairs
    let mut pending = vec![(0, n - 1)];
    while let Some((start, end)) = pending.pop() {
        if end <= start + 1 {
            continue; // No points between start and end
        }

        let (split, max_dist) = farthest_point(points, start, end);
        if max_dist > tolerance {
            trace!(
                "rdp: splitting {}..={} at {} (distance {})",
                start,
                end,
                split,
                max_dist.to_f64().unwrap_or(f64::NAN)
            );
            keep[split] = true;
            pending.push((split, end));
            pending.push((start, split));
        }
    }

    let indices: Vec<usize> = keep
        .iter()
        .enumerate()
        .filter_map(|(i, &k)| if k { Some(i) } else { None })
        .collect();

    debug!(
        "rdp: kept {} of {} points (epsilon {})",
        indices.len(),
        n,
        tolerance.to_f64().unwrap_or(f64::NAN)
    );
    indices
}

/// Finds the interior point of `start..=end` farthest from the line through
/// its endpoints.
///
/// Ties keep the lowest index. Returns `(start, 0)` when no interior point
/// lies off the line.
fn farthest_point<F: Float>(points: &[Point2<F>], start: usize, end: usize) -> (usize, F) {
    let line = Line2::from_points(points[start], points[end]);
    let mut max_dist = F::zero();
    let mut max_idx = start;

    for (i, &p) in points.iter().enumerate().take(end).skip(start + 1) {
        let dist = line.perpendicular_distance(p);
        if dist > max_dist {
            max_dist = dist;
            max_idx = i;
        }
    }

    (max_idx, max_dist)
}
