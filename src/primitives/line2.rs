//! 2D infinite line type.

use super::{Point2, Vec2};
use num_traits::Float;

/// A 2D infinite line defined by a point and direction.
///
/// The line extends infinitely in both directions through the origin point.
/// A line built from two coincident points has a zero direction and
/// degenerates to its origin.
///
/// # Example
///
/// ```
/// use wavethin::primitives::{Line2, Point2};
///
/// // Horizontal line through y=1
/// let line: Line2<f64> = Line2::from_points(Point2::new(0.0, 1.0), Point2::new(4.0, 1.0));
/// assert_eq!(line.perpendicular_distance(Point2::new(5.0, 3.0)), 2.0);
/// assert_eq!(line.perpendicular_distance(Point2::new(-9.0, -1.0)), 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line2<F> {
    /// A point on the line
    pub origin: Point2<F>,
    /// Direction vector of the line (not necessarily normalized)
    pub direction: Vec2<F>,
}

impl<F: Float> Line2<F> {
    /// Creates a new line from a point and direction.
    #[inline]
    pub fn new(origin: Point2<F>, direction: Vec2<F>) -> Self {
        Self { origin, direction }
    }

    /// Creates a line passing through two points.
    #[inline]
    pub fn from_points(start: Point2<F>, end: Point2<F>) -> Self {
        Self {
            origin: start,
            direction: end - start,
        }
    }

    /// Returns `true` if the direction is exactly zero.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.direction.x == F::zero() && self.direction.y == F::zero()
    }

    /// Returns the perpendicular distance from a point to the line.
    ///
    /// This is the distance to the infinite line, not to the segment between
    /// the two defining points, so points past either end still measure
    /// against the line's extension. If the line is degenerate the result is
    /// the Euclidean distance to the origin.
    ///
    /// Both vectors are scaled by their largest component before the cross
    /// product, so spans whose squared length leaves the float range still
    /// measure correctly and exactly collinear points report zero.
    pub fn perpendicular_distance(&self, point: Point2<F>) -> F {
        let offset = point - self.origin;
        if self.is_degenerate() {
            return offset.magnitude();
        }

        let scale = self
            .direction
            .x
            .abs()
            .max(self.direction.y.abs())
            .max(offset.x.abs())
            .max(offset.y.abs());
        let direction = self.direction / scale;
        let offset = offset / scale;

        direction.cross(offset).abs() / direction.magnitude() * scale
    }
}

impl<F: Float> Default for Line2<F> {
    fn default() -> Self {
        Self {
            origin: Point2::origin(),
            direction: Vec2::new(F::one(), F::zero()),
        }
    }
}
