//! Shared gesture and layout constants for the card deck.
//!
//! Distances are in logical pixels, durations in milliseconds.

/// Fraction of the viewport width a release must pass to count as a swipe.
///
/// On a 400px wide viewport a card has to travel more than 100px.
pub const SWIPE_THRESHOLD_FRACTION: f32 = 0.25;

/// How far a swiped card flies, in viewport widths. Anything above 1.0
/// clears the screen even when the card started off-center.
pub const FLING_DISTANCE_MULTIPLIER: f32 = 1.4;

/// Duration of the fling that carries a swiped card off-screen.
pub const FLING_DURATION_MILLIS: u64 = 250;

/// Vertical step between stacked cards under the top one.
pub const STACK_GAP: f32 = 10.0;

/// Duration of the transition that moves the remaining cards up one slot.
pub const PROMOTION_DURATION_MILLIS: u64 = 300;

/// Rotation reached by the top card at the ends of the rotation domain.
pub const MAX_ROTATION_DEGREES: f32 = 120.0;

/// Half-width of the rotation domain, in viewport widths: the top card
/// reaches [`MAX_ROTATION_DEGREES`] once dragged this far.
pub const ROTATION_DOMAIN_WIDTHS: f32 = 2.0;
