use swipedeck_animation::{Animatable, AnimationSpec, AnimationType};
use swipedeck_core::RuntimeHandle;

/// Smooths cards moving up one slot after a swipe.
///
/// Tracks a lag in slots: 1.0 right after the index advances (every card
/// still drawn at its old slot), falling to 0.0 at the new slots.
#[derive(Clone)]
pub struct PromotionTransition {
    lag: Animatable<f32>,
    spec: Option<AnimationSpec>,
}

impl PromotionTransition {
    /// With `spec` of `None` promotions snap.
    pub fn new(runtime: RuntimeHandle, spec: Option<AnimationSpec>) -> Self {
        Self {
            lag: Animatable::new(0.0, runtime),
            spec,
        }
    }

    pub fn start(&self) {
        let Some(spec) = self.spec else {
            return;
        };
        self.lag.snap_to(1.0);
        self.lag.animate_to(0.0, AnimationType::Tween(spec));
    }

    pub fn lag(&self) -> f32 {
        self.lag.value()
    }

    pub fn is_running(&self) -> bool {
        self.lag.is_running()
    }

    pub fn finish(&self) {
        self.lag.snap_to(0.0);
    }
}
