//! Measuring how far a simplified trace strays from the original.
//!
//! All functions in this module take explicit inputs.
//! No hidden epsilons are used.

mod deviation;

pub use deviation::{max_deviation, max_deviation_points};
