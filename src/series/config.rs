use crate::error::{Result, SimplifyError};
use crate::simplify::Epsilon;
use num_traits::Float;

/// Tolerance used until the user picks another one.
pub const DEFAULT_EPSILON: f64 = 2.0;

/// Largest tolerance the plot accepts.
pub const MAX_EPSILON: f64 = 100.0;

/// Number of samples shown per channel.
pub const DEFAULT_SAMPLES: usize = 1000;

/// Settings shared by every trace on the chart.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlotConfig {
    /// Simplification tolerance, in [0, [`MAX_EPSILON`]].
    pub epsilon: f64,
    /// Samples kept per channel.
    pub samples: usize,
    /// Whether the pulse channel records readings.
    pub show_pulse: bool,
}

impl PlotConfig {
    /// Sets the tolerance, clamped into [0, [`MAX_EPSILON`]]. NaN resets it to 0.
    pub fn set_epsilon(&mut self, epsilon: f64) {
        self.epsilon = if epsilon.is_nan() {
            0.0
        } else {
            epsilon.clamp(0.0, MAX_EPSILON)
        };
    }

    /// Returns the tolerance converted to the trace's float type.
    pub fn epsilon<F: Float>(&self) -> Epsilon<F> {
        Epsilon::clamped(num_traits::cast(self.epsilon).unwrap_or_else(F::zero))
    }

    /// Checks the values a deserialized or hand-built config may carry.
    pub fn validate(&self) -> Result<()> {
        if self.epsilon.is_nan() {
            return Err(SimplifyError::NonFiniteTolerance);
        }
        if !(0.0..=MAX_EPSILON).contains(&self.epsilon) {
            return Err(SimplifyError::ToleranceOutOfRange {
                epsilon: self.epsilon,
                max: MAX_EPSILON,
            });
        }
        if self.samples == 0 {
            return Err(SimplifyError::EmptyWindow);
        }
        Ok(())
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            samples: DEFAULT_SAMPLES,
            show_pulse: false,
        }
    }
}
