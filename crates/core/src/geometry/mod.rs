//! 2D geometry primitives used to position and shape stamped elements.
//!
//! All angles are radians, counter-clockwise positive. Every type has value
//! semantics: transforms return new values instead of mutating through a
//! shared reference.

mod bounds;
mod point;
mod polygon;
mod ray;

pub use bounds::BoundingBox;
pub use point::Point;
pub use polygon::Polygon;
pub use ray::Ray;
