//! Validated simplification tolerance.

use crate::error::{Result, SimplifyError};
use num_traits::Float;

/// A non-negative distance tolerance.
///
/// Points whose perpendicular deviation is at most this value may be dropped.
/// Positive infinity is accepted and collapses every polyline to its endpoints.
///
/// # Example
///
/// ```
/// use wavethin::simplify::Epsilon;
///
/// assert_eq!(Epsilon::new(0.5_f64).unwrap().get(), 0.5);
/// assert!(Epsilon::new(-1.0_f64).is_err());
/// assert_eq!(Epsilon::clamped(-1.0_f64).get(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Epsilon<F>(F);

impl<F: Float> Epsilon<F> {
    /// Validates a tolerance, rejecting NaN and negative values.
    pub fn new(value: F) -> Result<Self> {
        if value.is_nan() {
            return Err(SimplifyError::NonFiniteTolerance);
        }
        if value < F::zero() {
            return Err(SimplifyError::NegativeTolerance {
                epsilon: value.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(Self(value))
    }

    /// Builds a tolerance that never fails: NaN and negative values become zero.
    #[inline]
    pub fn clamped(value: F) -> Self {
        if value.is_nan() || value < F::zero() {
            Self::zero()
        } else {
            Self(value)
        }
    }

    /// A zero tolerance; only exactly collinear points are dropped.
    #[inline]
    pub fn zero() -> Self {
        Self(F::zero())
    }

    /// Returns the raw tolerance value.
    #[inline]
    pub fn get(self) -> F {
        self.0
    }
}

impl<F: Float> Default for Epsilon<F> {
    fn default() -> Self {
        Self::zero()
    }
}
