pub mod gestures;
pub mod types;

pub use gestures::*;
pub use types::*;
