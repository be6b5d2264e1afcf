pub mod drag;
pub mod swipe;

pub use drag::{DragEvent, DragGesture, DragPhase};
pub use swipe::{classify_release, SwipeDirection, SwipeOutcome, SwipeThreshold};
