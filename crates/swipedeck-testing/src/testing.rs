use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use swipedeck_core::{Runtime, RuntimeHandle, RuntimeScheduler, FRAME_NANOS_60HZ};
use swipedeck_foundation::{PointerEvent, SharedViewport, SwipeDirection, Viewport};
use swipedeck_ui::{DeckConfig, DeckError, DeckItem, SwipeDeck};
use swipedeck_ui_graphics::Point;

/// Frames after which [`DeckTestRule::pump_until_idle`] gives up.
pub const MAX_IDLE_FRAMES: usize = 10_000;

/// Scheduler that only counts requests; frames happen when the test says so.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    requests: AtomicUsize,
}

impl ManualScheduler {
    pub fn frame_requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

impl RuntimeScheduler for ManualScheduler {
    fn schedule_frame(&self) {
        self.requests.fetch_add(1, Ordering::SeqCst);
    }
}

/// Headless harness for exercising decks in tests.
///
/// Owns a runtime driven by a virtual 60 Hz clock and a resizable viewport.
/// Nothing advances unless a test calls one of the frame methods, so every
/// animation step is deterministic.
pub struct DeckTestRule {
    runtime: Runtime,
    scheduler: Arc<ManualScheduler>,
    viewport: SharedViewport,
    frame_time_nanos: u64,
}

impl DeckTestRule {
    pub fn new(viewport_width: f32) -> Self {
        let scheduler = Arc::new(ManualScheduler::default());
        Self {
            runtime: Runtime::new(scheduler.clone()),
            scheduler,
            viewport: SharedViewport::new(viewport_width),
            frame_time_nanos: 0,
        }
    }

    /// Build a deck bound to this rule's runtime and viewport.
    pub fn mount<T: DeckItem + 'static, V: 'static>(
        &self,
        config: DeckConfig<T, V>,
    ) -> Result<SwipeDeck<T, V>, DeckError> {
        SwipeDeck::new(config, self.viewport.clone(), self.runtime.handle())
    }

    pub fn runtime_handle(&self) -> RuntimeHandle {
        self.runtime.handle()
    }

    pub fn viewport(&self) -> &SharedViewport {
        &self.viewport
    }

    pub fn resize(&self, width: f32) {
        self.viewport.set_width(width);
    }

    pub fn frame_time_nanos(&self) -> u64 {
        self.frame_time_nanos
    }

    pub fn frame_requests(&self) -> usize {
        self.scheduler.frame_requests()
    }

    pub fn has_pending_frames(&self) -> bool {
        self.runtime.handle().has_frame_callbacks()
    }

    /// Advance the clock by one 60 Hz frame and drain callbacks.
    pub fn advance_frame(&mut self) {
        self.frame_time_nanos += FRAME_NANOS_60HZ;
        self.runtime
            .handle()
            .drain_frame_callbacks(self.frame_time_nanos);
    }

    /// Run whole frames until at least `millis` of virtual time has passed.
    pub fn advance_time(&mut self, millis: u64) {
        let target = self.frame_time_nanos + millis * 1_000_000;
        while self.frame_time_nanos < target {
            self.advance_frame();
        }
    }

    /// Run frames until no callbacks remain. Returns the number of frames.
    ///
    /// # Panics
    ///
    /// After [`MAX_IDLE_FRAMES`] frames, which means an animation never
    /// settles.
    pub fn pump_until_idle(&mut self) -> usize {
        let mut frames = 0;
        while self.has_pending_frames() {
            assert!(
                frames < MAX_IDLE_FRAMES,
                "deck still animating after {MAX_IDLE_FRAMES} frames"
            );
            self.advance_frame();
            frames += 1;
        }
        frames
    }

    /// Where drags start: the horizontal middle of the viewport.
    pub fn touch_origin(&self) -> Point {
        Point::new(self.viewport.width() / 2.0, 300.0)
    }

    pub fn press<T: DeckItem + 'static, V: 'static>(&self, deck: &SwipeDeck<T, V>) -> bool {
        let origin = self.touch_origin();
        deck.handle_pointer_event(&PointerEvent::down(origin.x, origin.y))
    }

    /// Move the pressed pointer to `(dx, dy)` from the touch origin.
    pub fn move_by<T: DeckItem + 'static, V: 'static>(
        &self,
        deck: &SwipeDeck<T, V>,
        dx: f32,
        dy: f32,
    ) -> bool {
        let origin = self.touch_origin();
        deck.handle_pointer_event(&PointerEvent::moved(origin.x + dx, origin.y + dy))
    }

    pub fn release_at<T: DeckItem + 'static, V: 'static>(
        &self,
        deck: &SwipeDeck<T, V>,
        dx: f32,
        dy: f32,
    ) -> bool {
        let origin = self.touch_origin();
        deck.handle_pointer_event(&PointerEvent::up(origin.x + dx, origin.y + dy))
    }

    /// Press, move to `(dx, dy)` in `steps` equal moves, then release there.
    ///
    /// Returns whether the deck handled the press.
    pub fn drag_by<T: DeckItem + 'static, V: 'static>(
        &self,
        deck: &SwipeDeck<T, V>,
        dx: f32,
        dy: f32,
        steps: usize,
    ) -> bool {
        if !self.press(deck) {
            return false;
        }
        let steps = steps.max(1);
        for step in 1..=steps {
            let t = step as f32 / steps as f32;
            self.move_by(deck, dx * t, dy * t);
        }
        self.release_at(deck, dx, dy);
        true
    }

    /// Drag half a viewport in `direction` and let every animation finish.
    pub fn swipe<T: DeckItem + 'static, V: 'static>(
        &mut self,
        deck: &SwipeDeck<T, V>,
        direction: SwipeDirection,
    ) -> bool {
        let dx = direction.sign() * self.viewport.width() / 2.0;
        let handled = self.drag_by(deck, dx, 0.0, 8);
        self.pump_until_idle();
        handled
    }

    pub fn swipe_left<T: DeckItem + 'static, V: 'static>(
        &mut self,
        deck: &SwipeDeck<T, V>,
    ) -> bool {
        self.swipe(deck, SwipeDirection::Left)
    }

    pub fn swipe_right<T: DeckItem + 'static, V: 'static>(
        &mut self,
        deck: &SwipeDeck<T, V>,
    ) -> bool {
        self.swipe(deck, SwipeDirection::Right)
    }
}

#[cfg(test)]
#[path = "tests/testing_tests.rs"]
mod tests;
