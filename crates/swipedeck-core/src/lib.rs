//! Core runtime for SwipeDeck
//!
//! Everything here runs on one UI thread. The host pumps frames through
//! [`RuntimeHandle::drain_frame_callbacks`]; animations register one
//! callback per frame through the [`FrameClock`].

mod frame_clock;
mod platform;
mod runtime;
mod state;

pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use platform::RuntimeScheduler;
pub use runtime::{Runtime, RuntimeHandle};
pub use state::MutableState;

pub type FrameCallbackId = u64;

/// Nanoseconds in one frame at 60 Hz.
pub const FRAME_NANOS_60HZ: u64 = 16_666_667;

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
