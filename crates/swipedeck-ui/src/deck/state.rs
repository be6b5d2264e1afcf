use std::cell::{Cell, RefCell};
use std::rc::Rc;

use swipedeck_core::MutableState;
use swipedeck_foundation::SwipeDirection;
use swipedeck_ui_graphics::Point;

use super::config::SwipeCallback;
use crate::error::DeckError;

/// Top-of-stack bookkeeping.
///
/// The index only moves forward, by exactly one per completed swipe in
/// either direction. All methods take `&self` so swipe callbacks may query
/// the deck while they run.
pub struct DeckState<T> {
    items: RefCell<Rc<[T]>>,
    /// Bumped by `set_items` so a swipe can tell its deck was replaced.
    generation: Cell<u64>,
    index: Cell<usize>,
    offset: MutableState<Point>,
    on_swipe_left: SwipeCallback<T>,
    on_swipe_right: SwipeCallback<T>,
}

impl<T: 'static> DeckState<T> {
    pub fn new(
        items: Rc<[T]>,
        offset: MutableState<Point>,
        on_swipe_left: SwipeCallback<T>,
        on_swipe_right: SwipeCallback<T>,
    ) -> Self {
        Self {
            items: RefCell::new(items),
            generation: Cell::new(0),
            index: Cell::new(0),
            offset,
            on_swipe_left,
            on_swipe_right,
        }
    }

    pub fn items(&self) -> Rc<[T]> {
        Rc::clone(&self.items.borrow())
    }

    pub fn current_index(&self) -> usize {
        self.index.get()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn remaining(&self) -> usize {
        self.len().saturating_sub(self.current_index())
    }

    pub fn is_exhausted(&self) -> bool {
        self.current_index() >= self.len()
    }

    pub fn current_item(&self) -> Option<T>
    where
        T: Clone,
    {
        self.with_current_item(T::clone)
    }

    pub fn with_current_item<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.items.borrow().get(self.current_index()).map(f)
    }

    /// Commit the top card.
    ///
    /// Runs the direction's callback with the top item, then resets the
    /// offset, then advances the index. If the callback replaced the deck,
    /// the replacement's fresh state is left alone.
    pub fn complete_swipe(&self, direction: SwipeDirection) -> Result<(), DeckError> {
        let items = self.items();
        let index = self.current_index();
        let Some(item) = items.get(index) else {
            let error = DeckError::Exhausted {
                index,
                len: items.len(),
            };
            log::error!("{error}");
            return Err(error);
        };

        let generation = self.generation.get();
        match direction {
            SwipeDirection::Left => (self.on_swipe_left)(item),
            SwipeDirection::Right => (self.on_swipe_right)(item),
        }
        if self.generation.get() != generation {
            log::debug!("deck replaced from a swipe callback; not advancing");
            return Ok(());
        }

        self.offset.set(Point::ZERO);
        self.index.set(index + 1);
        log::debug!(
            "swiped {direction} card {index}; {} of {} left",
            self.remaining(),
            items.len()
        );
        Ok(())
    }

    /// Swap in a new deck, starting again from its first card.
    pub fn set_items(&self, items: Rc<[T]>) {
        *self.items.borrow_mut() = items;
        self.generation.set(self.generation.get() + 1);
        self.index.set(0);
        self.offset.set(Point::ZERO);
    }
}
