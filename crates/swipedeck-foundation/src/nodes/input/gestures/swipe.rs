//! Release classification for horizontal swipes.

use std::fmt;

use crate::gesture_constants::SWIPE_THRESHOLD_FRACTION;

/// Direction a swiped card leaves in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    /// Sign of the horizontal fling target.
    pub fn sign(self) -> f32 {
        match self {
            SwipeDirection::Left => -1.0,
            SwipeDirection::Right => 1.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SwipeDirection::Left => "left",
            SwipeDirection::Right => "right",
        }
    }
}

impl fmt::Display for SwipeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying one released drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwipeOutcome {
    /// Below threshold; the card returns to rest.
    None,
    Left,
    Right,
}

impl SwipeOutcome {
    pub fn direction(self) -> Option<SwipeDirection> {
        match self {
            SwipeOutcome::None => None,
            SwipeOutcome::Left => Some(SwipeDirection::Left),
            SwipeOutcome::Right => Some(SwipeDirection::Right),
        }
    }

    pub fn is_swipe(self) -> bool {
        self != SwipeOutcome::None
    }
}

impl From<SwipeDirection> for SwipeOutcome {
    fn from(direction: SwipeDirection) -> Self {
        match direction {
            SwipeDirection::Left => SwipeOutcome::Left,
            SwipeDirection::Right => SwipeOutcome::Right,
        }
    }
}

/// Horizontal swipe threshold as a fraction of the viewport width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeThreshold {
    fraction: f32,
}

impl SwipeThreshold {
    /// `fraction` must be finite and positive; callers validate.
    pub const fn new(fraction: f32) -> Self {
        Self { fraction }
    }

    pub fn fraction(&self) -> f32 {
        self.fraction
    }

    pub fn resolve(&self, viewport_width: f32) -> f32 {
        self.fraction * viewport_width
    }

    pub fn classify(&self, dx: f32, viewport_width: f32) -> SwipeOutcome {
        classify_release(dx, self.resolve(viewport_width))
    }
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        Self::new(SWIPE_THRESHOLD_FRACTION)
    }
}

/// Classify a release by its final horizontal displacement.
///
/// Strict comparisons: a release exactly on `±threshold` is not a swipe.
/// Velocity and path history are ignored.
pub fn classify_release(dx: f32, threshold: f32) -> SwipeOutcome {
    if dx > threshold {
        SwipeOutcome::Right
    } else if dx < -threshold {
        SwipeOutcome::Left
    } else {
        SwipeOutcome::None
    }
}
