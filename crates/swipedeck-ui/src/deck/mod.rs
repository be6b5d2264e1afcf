//! The swipeable deck controller.

pub mod animator;
pub mod config;
pub mod phase;
pub mod presenter;
pub mod state;
pub mod transition;

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use swipedeck_core::{MutableState, RuntimeHandle};
use swipedeck_foundation::{
    DragEvent, DragGesture, PointerEvent, SwipeDirection, SwipeOutcome, SwipeThreshold, Viewport,
};
use swipedeck_ui_graphics::Point;

use self::animator::SwipeAnimator;
use self::config::{DeckConfig, RenderCardFn, RenderEmptyFn};
use self::phase::{CardEvent, CardPhase};
use self::presenter::{DeckFrame, Presenter};
use self::state::DeckState;
use self::transition::PromotionTransition;
use crate::error::DeckError;
use crate::item::DeckItem;

/// A stack of cards where the top one can be swiped left or right.
///
/// Cloning yields another handle to the same deck.
pub struct SwipeDeck<T: DeckItem + 'static, V: 'static> {
    inner: Rc<DeckInner<T, V>>,
}

struct DeckInner<T: DeckItem + 'static, V: 'static> {
    state: DeckState<T>,
    offset: MutableState<Point>,
    drag: RefCell<DragGesture>,
    animator: SwipeAnimator,
    promotion: PromotionTransition,
    presenter: Presenter,
    phase: Cell<CardPhase>,
    viewport: Rc<dyn Viewport>,
    render_card: RenderCardFn<T, V>,
    render_empty: RenderEmptyFn<V>,
    runtime: RuntimeHandle,
}

impl<T: DeckItem + 'static, V: 'static> SwipeDeck<T, V> {
    pub fn new(
        config: DeckConfig<T, V>,
        viewport: impl Viewport + 'static,
        runtime: RuntimeHandle,
    ) -> Result<Self, DeckError> {
        config.validate()?;
        let DeckConfig {
            items,
            render_card,
            render_empty,
            on_swipe_left,
            on_swipe_right,
            options,
        } = config;
        let render_card = render_card.ok_or(DeckError::MissingRenderCard)?;
        let render_empty = render_empty.ok_or(DeckError::MissingRenderEmpty)?;

        let viewport: Rc<dyn Viewport> = Rc::new(viewport);
        let offset = MutableState::with_runtime(Point::ZERO, runtime.clone());
        let drag = DragGesture::new(
            offset.clone(),
            SwipeThreshold::new(options.swipe_threshold_fraction),
            Rc::clone(&viewport),
        );
        let animator = SwipeAnimator::new(
            offset.clone(),
            options.fling_distance_multiplier,
            options.fling_duration_millis,
            options.spring,
        );
        log::debug!("deck created with {} cards", items.len());

        Ok(Self {
            inner: Rc::new(DeckInner {
                state: DeckState::new(items, offset.clone(), on_swipe_left, on_swipe_right),
                offset,
                drag: RefCell::new(drag),
                animator,
                promotion: PromotionTransition::new(
                    runtime.clone(),
                    options.promotion_transition,
                ),
                presenter: Presenter::new(
                    options.stack_gap,
                    options.rotation_degrees,
                    options.rotation_domain_widths,
                ),
                phase: Cell::new(CardPhase::Idle),
                viewport,
                render_card,
                render_empty,
                runtime,
            }),
        })
    }

    /// Feed a raw pointer event to the top card.
    ///
    /// Returns `false` when no card is accepting input or the event is not
    /// part of the tracked drag. Handled events are consumed.
    pub fn handle_pointer_event(&self, event: &PointerEvent) -> bool {
        if !self.handles_gestures() {
            log::trace!("deck ignores {:?} while {}", event.kind, self.phase());
            return false;
        }
        let drag_event = self.inner.drag.borrow_mut().interpret(event);
        match drag_event {
            Some(DragEvent::Started) => {
                self.on_drag_start();
            }
            Some(DragEvent::Moved(delta)) => self.on_drag_update(delta.x, delta.y),
            Some(DragEvent::Released(delta)) => {
                self.on_drag_end(delta.x, delta.y);
            }
            None => return false,
        }
        event.consume();
        true
    }

    /// Begin a drag of the top card, taking the offset over from a spring-back.
    pub fn on_drag_start(&self) -> bool {
        if !self.handles_gestures() {
            return false;
        }
        let phase = self.phase();
        if phase == CardPhase::Dragging {
            return true;
        }
        if !self.transition(CardEvent::PointerDown) {
            return false;
        }
        if phase == CardPhase::SpringingBack {
            log::debug!("drag takes over a spring-back at {:?}", self.offset());
            self.inner.animator.take_over();
        }
        self.inner.drag.borrow_mut().begin();
        true
    }

    /// Move the top card to the cumulative displacement `(dx, dy)`.
    pub fn on_drag_update(&self, dx: f32, dy: f32) {
        if self.phase() != CardPhase::Dragging && !self.on_drag_start() {
            return;
        }
        log::trace!("drag update ({dx:.1}, {dy:.1})");
        self.inner.drag.borrow_mut().on_drag_update(dx, dy);
    }

    /// Release the top card and classify the drag.
    ///
    /// A swipe flies the card out and commits it when the fling lands;
    /// anything else springs it back.
    pub fn on_drag_end(&self, dx: f32, dy: f32) -> SwipeOutcome {
        if self.phase() != CardPhase::Dragging && !self.on_drag_start() {
            return SwipeOutcome::None;
        }
        self.transition(CardEvent::Release);
        let outcome = self.inner.drag.borrow_mut().on_drag_end(dx, dy);
        self.transition(CardEvent::Decided(outcome));
        match outcome.direction() {
            Some(direction) => self.fling(direction),
            None => self.spring_back(),
        }
        outcome
    }

    /// Swipe the top card without a drag.
    pub fn force_swipe(&self, direction: SwipeDirection) -> bool {
        if self.is_exhausted() || !self.transition(CardEvent::Forced(direction)) {
            return false;
        }
        self.inner.animator.take_over();
        self.inner.drag.borrow_mut().reset();
        self.fling(direction);
        true
    }

    /// Commit the top card immediately, skipping the fling.
    pub fn complete_swipe(&self, direction: SwipeDirection) -> Result<(), DeckError> {
        self.inner.animator.take_over();
        self.inner.drag.borrow_mut().reset();
        self.commit(direction)
    }

    /// Replace the items and start again from the first one.
    pub fn set_items(&self, items: impl Into<Rc<[T]>>) {
        let inner = &self.inner;
        inner.animator.snap_to_rest();
        inner.drag.borrow_mut().reset();
        inner.promotion.finish();
        inner.phase.set(CardPhase::Idle);
        inner.state.set_items(items.into());
        log::debug!("deck reset with {} cards", inner.state.len());
    }

    /// Lay out the visible window for painting.
    pub fn render(&self) -> DeckFrame<T::Key, V> {
        let inner = &self.inner;
        let items = inner.state.items();
        inner.presenter.present(
            &items,
            inner.state.current_index(),
            inner.offset.get(),
            inner.promotion.lag(),
            inner.viewport.width(),
            self.phase().accepts_drag(),
            &*inner.render_card,
            &*inner.render_empty,
        )
    }

    pub fn current_item(&self) -> Option<T>
    where
        T: Clone,
    {
        self.inner.state.current_item()
    }

    pub fn with_current_item<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.inner.state.with_current_item(f)
    }

    pub fn current_index(&self) -> usize {
        self.inner.state.current_index()
    }

    pub fn is_exhausted(&self) -> bool {
        self.inner.state.is_exhausted()
    }

    pub fn len(&self) -> usize {
        self.inner.state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.state.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.inner.state.remaining()
    }

    pub fn items(&self) -> Rc<[T]> {
        self.inner.state.items()
    }

    pub fn state(&self) -> &DeckState<T> {
        &self.inner.state
    }

    pub fn offset(&self) -> Point {
        self.inner.offset.get()
    }

    pub fn phase(&self) -> CardPhase {
        self.inner.phase.get()
    }

    /// Whether the top card currently has gesture handlers attached.
    pub fn handles_gestures(&self) -> bool {
        !self.is_exhausted() && self.phase().accepts_drag()
    }

    pub fn is_animating(&self) -> bool {
        self.inner.animator.is_animating() || self.inner.promotion.is_running()
    }

    pub fn viewport_width(&self) -> f32 {
        self.inner.viewport.width()
    }

    pub fn runtime_handle(&self) -> RuntimeHandle {
        self.inner.runtime.clone()
    }

    fn transition(&self, event: CardEvent) -> bool {
        let current = self.phase();
        match current.on_event(event) {
            Some(next) => {
                log::trace!("card {current} -> {next} on {event:?}");
                self.inner.phase.set(next);
                true
            }
            None => false,
        }
    }

    fn fling(&self, direction: SwipeDirection) {
        let weak = self.downgrade();
        self.inner
            .animator
            .fling_out(direction, self.viewport_width(), move |direction| {
                if let Some(deck) = Self::upgrade(&weak) {
                    deck.finish_fling(direction);
                }
            });
    }

    fn finish_fling(&self, direction: SwipeDirection) {
        if self.phase() != CardPhase::FlyingOut(direction) {
            log::trace!("stale fling {direction} ignored while {}", self.phase());
            return;
        }
        if let Err(err) = self.commit(direction) {
            log::error!("fling {direction} landed on a deck with no card: {err}");
        }
    }

    fn spring_back(&self) {
        let weak = self.downgrade();
        self.inner.animator.spring_back(move || {
            if let Some(deck) = Self::upgrade(&weak) {
                deck.transition(CardEvent::SpringSettled);
            }
        });
    }

    fn commit(&self, direction: SwipeDirection) -> Result<(), DeckError> {
        let before = self.current_index();
        let result = self.inner.state.complete_swipe(direction);
        if self.phase() == CardPhase::FlyingOut(direction) {
            self.transition(CardEvent::FlingFinished);
        } else if result.is_ok() {
            self.inner.phase.set(CardPhase::Idle);
        }
        if self.current_index() == before + 1 {
            self.inner.promotion.start();
        }
        result
    }

    fn downgrade(&self) -> Weak<DeckInner<T, V>> {
        Rc::downgrade(&self.inner)
    }

    fn upgrade(weak: &Weak<DeckInner<T, V>>) -> Option<Self> {
        weak.upgrade().map(|inner| Self { inner })
    }
}

impl<T: DeckItem + 'static, V: 'static> Clone for SwipeDeck<T, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: DeckItem + 'static, V: 'static> fmt::Debug for SwipeDeck<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeDeck")
            .field("current_index", &self.current_index())
            .field("len", &self.len())
            .field("phase", &self.phase())
            .field("offset", &self.offset())
            .finish()
    }
}
