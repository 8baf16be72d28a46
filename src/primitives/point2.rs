//! 2D point type.

use super::Vec2;
use num_traits::Float;
use std::ops::{Add, Sub};

/// A 2D point with x and y coordinates.
///
/// Generic over floating-point types (`f32` or `f64`). In a waveform trace
/// `x` is the sample index (or timestamp) and `y` the reading.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Point2<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Creates a point at the origin (0, 0).
    #[inline]
    pub fn origin() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
        }
    }

    /// Computes the squared distance to another point.
    #[inline]
    pub fn distance_squared(self, other: Self) -> F {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Computes the Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> F {
        self.distance_squared(other).sqrt()
    }

    /// Returns `true` if both coordinates are finite (neither NaN nor infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Converts this point to a vector from the origin.
    #[inline]
    pub fn to_vec(self) -> Vec2<F> {
        Vec2::new(self.x, self.y)
    }
}

// Point - Point = Vec2
impl<F: Float> Sub for Point2<F> {
    type Output = Vec2<F>;

    #[inline]
    fn sub(self, other: Self) -> Vec2<F> {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

// Point + Vec2 = Point
impl<F: Float> Add<Vec2<F>> for Point2<F> {
    type Output = Self;

    #[inline]
    fn add(self, v: Vec2<F>) -> Self {
        Self {
            x: self.x + v.x,
            y: self.y + v.y,
        }
    }
}

impl<F: Float> From<(F, F)> for Point2<F> {
    #[inline]
    fn from((x, y): (F, F)) -> Self {
        Self::new(x, y)
    }
}

impl<F: Float> Default for Point2<F> {
    fn default() -> Self {
        Self::origin()
    }
}
