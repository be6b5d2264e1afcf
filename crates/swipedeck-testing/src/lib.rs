//! Testing utilities and harness for SwipeDeck

pub mod recorder;
pub mod testing;

pub use recorder::{SwipeRecord, SwipeRecorder};
pub use testing::*;

pub mod prelude {
    pub use crate::recorder::{SwipeRecord, SwipeRecorder};
    pub use crate::testing::*;
}
