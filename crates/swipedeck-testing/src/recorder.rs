//! Captures swipe callbacks for later assertions.

use std::cell::RefCell;
use std::rc::Rc;

use swipedeck_foundation::SwipeDirection;

#[derive(Clone, Debug, PartialEq)]
pub struct SwipeRecord<T> {
    pub direction: SwipeDirection,
    pub item: T,
}

/// Collects every `(direction, item)` a deck reports, in order.
///
/// Clones share the same log.
pub struct SwipeRecorder<T> {
    records: Rc<RefCell<Vec<SwipeRecord<T>>>>,
}

impl<T: Clone + 'static> SwipeRecorder<T> {
    pub fn new() -> Self {
        Self {
            records: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Callback for `DeckConfig::on_swipe_left`.
    pub fn left(&self) -> impl Fn(&T) + 'static {
        self.callback(SwipeDirection::Left)
    }

    /// Callback for `DeckConfig::on_swipe_right`.
    pub fn right(&self) -> impl Fn(&T) + 'static {
        self.callback(SwipeDirection::Right)
    }

    fn callback(&self, direction: SwipeDirection) -> impl Fn(&T) + 'static {
        let records = Rc::clone(&self.records);
        move |item: &T| {
            records.borrow_mut().push(SwipeRecord {
                direction,
                item: item.clone(),
            });
        }
    }

    pub fn records(&self) -> Vec<SwipeRecord<T>> {
        self.records.borrow().clone()
    }

    pub fn directions(&self) -> Vec<SwipeDirection> {
        self.records
            .borrow()
            .iter()
            .map(|record| record.direction)
            .collect()
    }

    pub fn items(&self) -> Vec<T> {
        self.records
            .borrow()
            .iter()
            .map(|record| record.item.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.records.borrow_mut().clear();
    }
}

impl<T: Clone + 'static> Default for SwipeRecorder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for SwipeRecorder<T> {
    fn clone(&self) -> Self {
        Self {
            records: Rc::clone(&self.records),
        }
    }
}
