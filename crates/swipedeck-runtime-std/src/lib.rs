//! Wall-clock runtime for hosts without their own event loop.
//!
//! Construct a [`StdRuntime`], hand its [`RuntimeHandle`] to a deck and call
//! [`StdRuntime::pump_frame`] whenever animations should catch up with real
//! time.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use swipedeck_core::{Runtime, RuntimeHandle, RuntimeScheduler};
use web_time::Instant;

/// Remembers that the runtime asked for a frame until the next pump.
#[derive(Debug, Default)]
struct FrameRequest {
    pending: AtomicBool,
}

impl FrameRequest {
    fn take(&self) -> bool {
        self.pending.swap(false, Ordering::SeqCst)
    }
}

impl RuntimeScheduler for FrameRequest {
    fn schedule_frame(&self) {
        self.pending.store(true, Ordering::SeqCst);
    }
}

/// A [`Runtime`] whose frame timestamps come from [`web_time::Instant`].
///
/// Timestamps are nanoseconds since the runtime was created.
#[derive(Clone)]
pub struct StdRuntime {
    request: Arc<FrameRequest>,
    runtime: Runtime,
    started_at: Instant,
}

impl StdRuntime {
    pub fn new() -> Self {
        let request = Arc::new(FrameRequest::default());
        Self {
            runtime: Runtime::new(request.clone()),
            request,
            started_at: Instant::now(),
        }
    }

    pub fn runtime_handle(&self) -> RuntimeHandle {
        self.runtime.handle()
    }

    /// Nanoseconds since this runtime was created.
    pub fn now_nanos(&self) -> u64 {
        u64::try_from(self.started_at.elapsed().as_nanos()).unwrap_or(u64::MAX)
    }

    /// Runs one frame at the current time if one was requested or a callback
    /// is waiting.
    ///
    /// Returns whether more frames are wanted.
    pub fn pump_frame(&self) -> bool {
        let handle = self.runtime.handle();
        let requested = self.request.take();
        if requested || handle.has_frame_callbacks() {
            let now = self.now_nanos();
            log::trace!("pumping frame at {now}ns");
            handle.drain_frame_callbacks(now);
        }
        handle.has_frame_callbacks()
    }
}

impl fmt::Debug for StdRuntime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StdRuntime")
            .field("request", &self.request)
            .field("started_at", &self.started_at)
            .finish()
    }
}

impl Default for StdRuntime {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/std_runtime_tests.rs"]
mod tests;
