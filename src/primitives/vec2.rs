//! 2D vector type for directions and offsets.

use num_traits::Float;
use std::ops::{Add, Div, Mul, Sub};

/// A 2D vector representing a direction or offset.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Creates a new vector.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Creates a zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
        }
    }

    /// Computes the dot product with another vector.
    #[inline]
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// Returns the squared magnitude (length squared).
    #[inline]
    pub fn magnitude_squared(self) -> F {
        self.dot(self)
    }

    /// Computes the 2D cross product (perpendicular dot product).
    ///
    /// Returns the z-component of the 3D cross product if the vectors
    /// were extended to 3D with z=0. Positive means `other` is counter-clockwise
    /// from `self`.
    #[inline]
    pub fn cross(self, other: Self) -> F {
        self.x * other.y - self.y * other.x
    }

    /// Returns the magnitude (length) of the vector.
    ///
    /// Computed with `hypot`, so it stays finite whenever the length is
    /// representable even if its square is not.
    #[inline]
    pub fn magnitude(self) -> F {
        self.x.hypot(self.y)
    }

    /// Returns a normalized (unit length) vector.
    ///
    /// Returns `None` only for an exactly zero vector; vectors whose squared
    /// length underflows are still normalized.
    #[inline]
    pub fn normalize(self) -> Option<Self> {
        let mag = self.magnitude();
        if mag > F::zero() {
            Some(self / mag)
        } else {
            None
        }
    }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl<F: Float> Mul<F> for Vec2<F> {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: F) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

impl<F: Float> Div<F> for Vec2<F> {
    type Output = Self;

    #[inline]
    fn div(self, scalar: F) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
        }
    }
}

impl<F: Float> Default for Vec2<F> {
    fn default() -> Self {
        Self::zero()
    }
}
