//! wavethin - Thinning sampled waveforms for plotting
//!
//! A live chart redraws every trace on each update, but most consecutive
//! samples of a slowly varying signal add nothing visible. This library drops
//! them with Ramer-Douglas-Peucker simplification while bounding how far the
//! drawn trace may stray from the recorded one.
//!
//! # Example
//!
//! ```
//! use wavethin::{simplify, Point2};
//!
//! let trace = vec![
//!     Point2::new(-100.0, 0.0),
//!     Point2::new(-50.0, 0.2),
//!     Point2::new(0.0, 0.0),
//!     Point2::new(50.0, -0.3),
//!     Point2::new(100.0, 0.0),
//! ];
//!
//! let thinned = simplify(&trace, 0.5).unwrap();
//! assert_eq!(thinned, vec![trace[0], trace[4]]);
//! ```

pub mod error;
pub mod primitives;
pub mod series;
pub mod simplify;
pub mod tolerance;

pub use error::{Result, SimplifyError};
pub use primitives::{Line2, Point2, Vec2};
pub use simplify::{simplify, simplify_indices, Epsilon};
