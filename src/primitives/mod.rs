//! Floating-point geometric primitives and operations.

mod line2;
mod point2;
mod vec2;

pub use line2::Line2;
pub use point2::Point2;
pub use vec2::Vec2;
