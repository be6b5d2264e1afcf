//! Pure math for SwipeDeck
//!
//! Geometry primitives and the per-card transform handed to the host
//! renderer.

mod geometry;
mod transform;

pub use geometry::*;
pub use transform::*;

pub mod prelude {
    pub use crate::geometry::Point;
    pub use crate::transform::CardTransform;
}

#[cfg(test)]
#[path = "tests/geometry_tests.rs"]
mod tests;
