use swipedeck_animation::{Animatable, AnimationSpec, AnimationType, Easing, SpringSpec};
use swipedeck_core::MutableState;
use swipedeck_foundation::SwipeDirection;
use swipedeck_ui_graphics::Point;

/// Exit and return animations for the top card's offset.
///
/// Shares the offset cell with the drag tracker. At most one animation is
/// active; starting another or calling [`take_over`](Self::take_over)
/// cancels the running one and drops its continuation unfired.
#[derive(Clone)]
pub struct SwipeAnimator {
    offset: Animatable<Point>,
    fling_distance_multiplier: f32,
    fling_duration_millis: u64,
    spring: SpringSpec,
}

impl SwipeAnimator {
    pub fn new(
        offset: MutableState<Point>,
        fling_distance_multiplier: f32,
        fling_duration_millis: u64,
        spring: SpringSpec,
    ) -> Self {
        Self {
            offset: Animatable::from_state(offset),
            fling_distance_multiplier,
            fling_duration_millis,
            spring,
        }
    }

    /// Off-screen resting point for a fling in `direction`.
    pub fn fling_target(&self, direction: SwipeDirection, viewport_width: f32) -> Point {
        Point::new(
            direction.sign() * self.fling_distance_multiplier * viewport_width,
            0.0,
        )
    }

    /// Fly the card off screen, then call `on_complete` with `direction`.
    pub fn fling_out(
        &self,
        direction: SwipeDirection,
        viewport_width: f32,
        on_complete: impl FnOnce(SwipeDirection) + 'static,
    ) {
        let target = self.fling_target(direction, viewport_width);
        log::debug!(
            "fling {direction} from ({:.1}, {:.1}) to {:.1}",
            self.offset.value().x,
            self.offset.value().y,
            target.x
        );
        let spec = AnimationSpec::tween(self.fling_duration_millis, Easing::LinearEasing);
        self.offset
            .animate_to_then(target, AnimationType::Tween(spec), move || {
                on_complete(direction)
            });
    }

    /// Spring the card back to rest, then call `on_settled`.
    pub fn spring_back(&self, on_settled: impl FnOnce() + 'static) {
        log::debug!("spring back from {:?}", self.offset.value());
        self.offset
            .animate_to_then(Point::ZERO, AnimationType::Spring(self.spring), on_settled);
    }

    /// Hand the offset to a new drag.
    pub fn take_over(&self) {
        self.offset.stop();
    }

    /// Jump to rest, cancelling any animation.
    pub fn snap_to_rest(&self) {
        self.offset.snap_to(Point::ZERO);
    }

    pub fn is_animating(&self) -> bool {
        self.offset.is_running()
    }

    pub fn offset(&self) -> Point {
        self.offset.value()
    }
}
