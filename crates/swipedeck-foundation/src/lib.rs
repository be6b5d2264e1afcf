//! Pointer input and gesture recognition for SwipeDeck

pub mod gesture_constants;
pub mod nodes;
mod viewport;

pub use nodes::input::gestures::{
    classify_release, DragEvent, DragGesture, DragPhase, SwipeDirection, SwipeOutcome,
    SwipeThreshold,
};
pub use nodes::input::types::{PointerEvent, PointerEventKind, PointerId};
pub use viewport::{FixedViewport, SharedViewport, Viewport};

#[cfg(test)]
#[path = "tests/swipe_tests.rs"]
mod swipe_tests;

#[cfg(test)]
#[path = "tests/drag_tests.rs"]
mod drag_tests;
