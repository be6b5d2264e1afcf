//! Platform abstraction traits for the deck runtime.
//!
//! The host decides when frames actually happen; the runtime only asks
//! for one.

/// Schedules frames on behalf of the runtime.
///
/// Implementations must be safe to share across threads even though the
/// runtime itself only ever calls them from the UI thread.
pub trait RuntimeScheduler: Send + Sync {
    /// Request that the host schedule a new frame.
    fn schedule_frame(&self);
}
