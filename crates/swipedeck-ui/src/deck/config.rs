use std::rc::Rc;

use swipedeck_animation::{AnimationSpec, Easing, SpringSpec};
use swipedeck_foundation::gesture_constants::{
    FLING_DISTANCE_MULTIPLIER, FLING_DURATION_MILLIS, MAX_ROTATION_DEGREES,
    PROMOTION_DURATION_MILLIS, ROTATION_DOMAIN_WIDTHS, STACK_GAP, SWIPE_THRESHOLD_FRACTION,
};

use crate::error::DeckError;

pub type RenderCardFn<T, V> = Rc<dyn Fn(&T) -> V>;
pub type RenderEmptyFn<V> = Rc<dyn Fn() -> V>;
pub type SwipeCallback<T> = Rc<dyn Fn(&T)>;

/// Numeric tuning of the deck.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeckOptions {
    /// Fraction of the viewport width a release must exceed to swipe.
    pub swipe_threshold_fraction: f32,
    /// Fling target in viewport widths; at least 1.0.
    pub fling_distance_multiplier: f32,
    pub fling_duration_millis: u64,
    pub stack_gap: f32,
    /// Spring returning a card released below the threshold.
    pub spring: SpringSpec,
    /// Smoothing for cards moving up a slot; `None` snaps.
    pub promotion_transition: Option<AnimationSpec>,
    pub rotation_degrees: f32,
    pub rotation_domain_widths: f32,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            swipe_threshold_fraction: SWIPE_THRESHOLD_FRACTION,
            fling_distance_multiplier: FLING_DISTANCE_MULTIPLIER,
            fling_duration_millis: FLING_DURATION_MILLIS,
            stack_gap: STACK_GAP,
            spring: SpringSpec::medium_bouncy(),
            promotion_transition: Some(AnimationSpec::tween(
                PROMOTION_DURATION_MILLIS,
                Easing::EaseInOut,
            )),
            rotation_degrees: MAX_ROTATION_DEGREES,
            rotation_domain_widths: ROTATION_DOMAIN_WIDTHS,
        }
    }
}

impl DeckOptions {
    pub fn validate(&self) -> Result<(), DeckError> {
        let threshold = self.swipe_threshold_fraction;
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(DeckError::InvalidThreshold(threshold));
        }
        let multiplier = self.fling_distance_multiplier;
        if !multiplier.is_finite() || multiplier < 1.0 {
            return Err(DeckError::InvalidFlingMultiplier(multiplier));
        }
        if !self.stack_gap.is_finite() {
            return Err(DeckError::InvalidStackGap(self.stack_gap));
        }
        let spring = self.spring;
        let positive = |value: f32| value.is_finite() && value > 0.0;
        if !(positive(spring.damping_ratio)
            && positive(spring.stiffness)
            && positive(spring.velocity_threshold)
            && positive(spring.position_threshold))
        {
            return Err(DeckError::InvalidSpring(spring));
        }
        if !self.rotation_degrees.is_finite() || !positive(self.rotation_domain_widths) {
            return Err(DeckError::InvalidRotation {
                degrees: self.rotation_degrees,
                domain_widths: self.rotation_domain_widths,
            });
        }
        let promotion_millis = self.promotion_transition.map(|spec| spec.duration_millis);
        for millis in std::iter::once(self.fling_duration_millis).chain(promotion_millis) {
            if millis > AnimationSpec::MAX_DURATION_MILLIS {
                return Err(DeckError::InvalidDuration(millis));
            }
        }
        Ok(())
    }
}

/// Everything needed to construct a [`SwipeDeck`](super::SwipeDeck).
///
/// Both renderers are required; [`SwipeDeck::new`](super::SwipeDeck::new)
/// fails without them.
pub struct DeckConfig<T, V> {
    pub(crate) items: Rc<[T]>,
    pub(crate) render_card: Option<RenderCardFn<T, V>>,
    pub(crate) render_empty: Option<RenderEmptyFn<V>>,
    pub(crate) on_swipe_left: SwipeCallback<T>,
    pub(crate) on_swipe_right: SwipeCallback<T>,
    pub(crate) options: DeckOptions,
}

impl<T: 'static, V> DeckConfig<T, V> {
    pub fn new(items: impl Into<Rc<[T]>>) -> Self {
        Self {
            items: items.into(),
            render_card: None,
            render_empty: None,
            on_swipe_left: Rc::new(|_: &T| {}),
            on_swipe_right: Rc::new(|_: &T| {}),
            options: DeckOptions::default(),
        }
    }

    pub fn render_card(mut self, render: impl Fn(&T) -> V + 'static) -> Self {
        self.render_card = Some(Rc::new(render));
        self
    }

    pub fn render_empty(mut self, render: impl Fn() -> V + 'static) -> Self {
        self.render_empty = Some(Rc::new(render));
        self
    }

    pub fn on_swipe_left(mut self, callback: impl Fn(&T) + 'static) -> Self {
        self.on_swipe_left = Rc::new(callback);
        self
    }

    pub fn on_swipe_right(mut self, callback: impl Fn(&T) + 'static) -> Self {
        self.on_swipe_right = Rc::new(callback);
        self
    }

    pub fn options(mut self, options: DeckOptions) -> Self {
        self.options = options;
        self
    }

    pub fn swipe_threshold_fraction(mut self, fraction: f32) -> Self {
        self.options.swipe_threshold_fraction = fraction;
        self
    }

    pub fn fling_distance_multiplier(mut self, multiplier: f32) -> Self {
        self.options.fling_distance_multiplier = multiplier;
        self
    }

    pub fn fling_duration_millis(mut self, millis: u64) -> Self {
        self.options.fling_duration_millis = millis;
        self
    }

    pub fn stack_gap(mut self, gap: f32) -> Self {
        self.options.stack_gap = gap;
        self
    }

    pub fn spring(mut self, spring: SpringSpec) -> Self {
        self.options.spring = spring;
        self
    }

    pub fn promotion_transition(mut self, transition: Option<AnimationSpec>) -> Self {
        self.options.promotion_transition = transition;
        self
    }

    /// Tilt of the top card at `rotation_domain_widths` viewport widths.
    pub fn rotation_degrees(mut self, degrees: f32) -> Self {
        self.options.rotation_degrees = degrees;
        self
    }

    pub fn rotation_domain_widths(mut self, widths: f32) -> Self {
        self.options.rotation_domain_widths = widths;
        self
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn deck_options(&self) -> &DeckOptions {
        &self.options
    }

    pub fn validate(&self) -> Result<(), DeckError> {
        if self.render_card.is_none() {
            return Err(DeckError::MissingRenderCard);
        }
        if self.render_empty.is_none() {
            return Err(DeckError::MissingRenderEmpty);
        }
        self.options.validate()
    }
}
