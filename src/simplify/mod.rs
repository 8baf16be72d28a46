//! Polyline simplification.

mod epsilon;
mod rdp;

pub use epsilon::Epsilon;
pub use rdp::{rdp, rdp_indices, simplify, simplify_indices};
