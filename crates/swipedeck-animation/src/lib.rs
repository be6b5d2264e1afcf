//! Animation primitives for SwipeDeck
//!
//! Provides time-based tweens with easing curves, spring physics and
//! clamped piecewise-linear interpolation.

mod animation;
mod interpolation;

pub use animation::*;
pub use interpolation::*;
