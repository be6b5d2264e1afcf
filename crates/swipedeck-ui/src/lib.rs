//! Swipeable card deck for SwipeDeck
//!
//! A [`SwipeDeck`] shows an ordered stack of items, lets the user drag the
//! top card and commits it left or right once the drag passes a threshold.
//! Rendering of card content is delegated to the caller; the deck only
//! decides transforms, paint order and which card receives gestures.

mod deck;
mod error;
mod item;

pub use deck::animator::SwipeAnimator;
pub use deck::config::{DeckConfig, DeckOptions, RenderCardFn, RenderEmptyFn, SwipeCallback};
pub use deck::phase::{CardEvent, CardPhase};
pub use deck::presenter::{DeckFrame, Presenter, RenderedCard};
pub use deck::state::DeckState;
pub use deck::transition::PromotionTransition;
pub use deck::SwipeDeck;
pub use error::DeckError;
pub use item::DeckItem;

pub use swipedeck_animation::{AnimationSpec, Easing, SpringSpec};
pub use swipedeck_foundation::{
    FixedViewport, PointerEvent, PointerEventKind, SharedViewport, SwipeDirection, SwipeOutcome,
    Viewport,
};
pub use swipedeck_ui_graphics::{CardTransform, Point};

pub mod prelude {
    pub use crate::{
        CardPhase, DeckConfig, DeckFrame, DeckItem, FixedViewport, PointerEvent, SharedViewport,
        SwipeDeck, SwipeDirection, SwipeOutcome,
    };
}

#[cfg(test)]
#[path = "tests/phase_tests.rs"]
mod phase_tests;

#[cfg(test)]
#[path = "tests/presenter_tests.rs"]
mod presenter_tests;

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod state_tests;
