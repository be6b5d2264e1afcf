//! Drag tracking for the top card.

use std::rc::Rc;

use swipedeck_core::MutableState;
use swipedeck_ui_graphics::Point;

use super::swipe::{SwipeOutcome, SwipeThreshold};
use crate::nodes::input::types::{PointerEvent, PointerEventKind, PointerId};
use crate::viewport::Viewport;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragPhase {
    Idle,
    Tracking { pointer: PointerId, origin: Point },
}

/// Meaning of a raw pointer event for an in-progress drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragEvent {
    Started,
    /// Cumulative displacement since `Started`.
    Moved(Point),
    Released(Point),
}

/// Turns pointer samples into the live card offset and classifies releases.
///
/// The offset cell is owned by the deck and shared with its animator; the
/// tracker writes it on every update without validation or clamping.
pub struct DragGesture {
    offset: MutableState<Point>,
    threshold: SwipeThreshold,
    viewport: Rc<dyn Viewport>,
    phase: DragPhase,
    last_delta: Point,
}

impl DragGesture {
    pub fn new(
        offset: MutableState<Point>,
        threshold: SwipeThreshold,
        viewport: Rc<dyn Viewport>,
    ) -> Self {
        Self {
            offset,
            threshold,
            viewport,
            phase: DragPhase::Idle,
            last_delta: Point::ZERO,
        }
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_tracking(&self) -> bool {
        matches!(self.phase, DragPhase::Tracking { .. })
    }

    pub fn threshold(&self) -> SwipeThreshold {
        self.threshold
    }

    /// Last displacement seen, by an update or a release.
    pub fn last_delta(&self) -> Point {
        self.last_delta
    }

    /// Translate a raw event into drag terms.
    ///
    /// Only the pointer that started the drag is followed; moves and
    /// releases without a preceding down are dropped.
    pub fn interpret(&mut self, event: &PointerEvent) -> Option<DragEvent> {
        match (event.kind, self.phase) {
            (PointerEventKind::Down, DragPhase::Idle) => {
                self.phase = DragPhase::Tracking {
                    pointer: event.id,
                    origin: event.position,
                };
                Some(DragEvent::Started)
            }
            (PointerEventKind::Move, DragPhase::Tracking { pointer, origin })
                if pointer == event.id =>
            {
                Some(DragEvent::Moved(event.position - origin))
            }
            (
                PointerEventKind::Up | PointerEventKind::Cancel,
                DragPhase::Tracking { pointer, origin },
            ) if pointer == event.id => Some(DragEvent::Released(event.position - origin)),
            (kind, phase) => {
                log::trace!("drag ignores {kind:?} from pointer {} in {phase:?}", event.id);
                None
            }
        }
    }

    /// Start tracking a drag that did not come through [`interpret`](Self::interpret).
    pub fn begin(&mut self) {
        if !self.is_tracking() {
            self.phase = DragPhase::Tracking {
                pointer: 0,
                origin: Point::ZERO,
            };
        }
        self.last_delta = Point::ZERO;
    }

    /// Move the card to the cumulative displacement `(dx, dy)`.
    pub fn on_drag_update(&mut self, dx: f32, dy: f32) {
        self.last_delta = Point::new(dx, dy);
        self.offset.set(self.last_delta);
    }

    /// Finish the drag and classify it by `dx` alone.
    ///
    /// The viewport width is read here, so the threshold follows resizes.
    pub fn on_drag_end(&mut self, dx: f32, dy: f32) -> SwipeOutcome {
        self.phase = DragPhase::Idle;
        self.last_delta = Point::new(dx, dy);
        let width = self.viewport.width();
        let outcome = self.threshold.classify(dx, width);
        log::debug!(
            "drag released at ({dx:.1}, {dy:.1}); threshold {:.1}px -> {outcome:?}",
            self.threshold.resolve(width)
        );
        outcome
    }

    /// Forget any in-progress drag without classifying it.
    pub fn reset(&mut self) {
        self.phase = DragPhase::Idle;
        self.last_delta = Point::ZERO;
    }
}
