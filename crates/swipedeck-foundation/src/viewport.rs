use std::cell::Cell;
use std::rc::Rc;

/// Host viewport as seen by the deck.
///
/// The width is read on every release and every fling instead of being
/// cached, so a resize between gestures is picked up by the next one.
pub trait Viewport {
    fn width(&self) -> f32;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedViewport(pub f32);

impl Viewport for FixedViewport {
    fn width(&self) -> f32 {
        self.0
    }
}

/// Resizable viewport shared between the host and the deck.
#[derive(Clone, Debug, Default)]
pub struct SharedViewport {
    width: Rc<Cell<f32>>,
}

impl SharedViewport {
    pub fn new(width: f32) -> Self {
        Self {
            width: Rc::new(Cell::new(width)),
        }
    }

    pub fn set_width(&self, width: f32) {
        log::debug!("viewport width {} -> {}", self.width.get(), width);
        self.width.set(width);
    }
}

impl Viewport for SharedViewport {
    fn width(&self) -> f32 {
        self.width.get()
    }
}
