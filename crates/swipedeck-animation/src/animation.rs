//! Animatable values driven by the runtime frame clock.

use std::cell::RefCell;
use std::rc::Rc;

use swipedeck_core::{FrameCallbackRegistration, MutableState, RuntimeHandle};
use swipedeck_ui_graphics::Point;

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for Point {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        Point::new(self.x.lerp(&target.x, fraction), self.y.lerp(&target.y, fraction))
    }
}

/// Values an [`Animatable`] can drive.
///
/// Spring physics run on a scalar progress between the start and the target,
/// so implementors only need a distance metric.
pub trait Animated: Lerp + Clone + PartialEq + 'static {
    fn distance(&self, other: &Self) -> f32;
}

impl Animated for f32 {
    fn distance(&self, other: &Self) -> f32 {
        (self - other).abs()
    }
}

impl Animated for Point {
    fn distance(&self, other: &Self) -> f32 {
        self.distance_to(*other)
    }
}

/// Easing curves applied to a tween's linear progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    LinearEasing,
    EaseIn,
    EaseOut,
    /// The curve used for layout transitions between stack slots.
    EaseInOut,
    FastOutSlowInEasing,
    LinearOutSlowInEasing,
    FastOutLinearEasing,
}

impl Easing {
    /// Apply the easing function to a linear fraction in [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        let curve = match self {
            Easing::LinearEasing => return fraction,
            Easing::EaseIn => CubicBezier::new(0.42, 0.0, 1.0, 1.0),
            Easing::EaseOut => CubicBezier::new(0.0, 0.0, 0.58, 1.0),
            Easing::EaseInOut => CubicBezier::new(0.42, 0.0, 0.58, 1.0),
            Easing::FastOutSlowInEasing => CubicBezier::new(0.4, 0.0, 0.2, 1.0),
            Easing::LinearOutSlowInEasing => CubicBezier::new(0.0, 0.0, 0.2, 1.0),
            Easing::FastOutLinearEasing => CubicBezier::new(0.4, 0.0, 1.0, 1.0),
        };
        curve.solve(fraction)
    }
}

/// Unit cubic bezier through (0,0) and (1,1) in polynomial form.
struct CubicBezier {
    ax: f32,
    bx: f32,
    cx: f32,
    ay: f32,
    by: f32,
    cy: f32,
}

impl CubicBezier {
    fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        let cx = 3.0 * x1;
        let bx = 3.0 * (x2 - x1) - cx;
        let cy = 3.0 * y1;
        let by = 3.0 * (y2 - y1) - cy;
        Self {
            ax: 1.0 - cx - bx,
            bx,
            cx,
            ay: 1.0 - cy - by,
            by,
            cy,
        }
    }

    fn x_at(&self, t: f32) -> f32 {
        ((self.ax * t + self.bx) * t + self.cx) * t
    }

    fn y_at(&self, t: f32) -> f32 {
        ((self.ay * t + self.by) * t + self.cy) * t
    }

    fn dx_at(&self, t: f32) -> f32 {
        (3.0 * self.ax * t + 2.0 * self.bx) * t + self.cx
    }

    /// Find `t` with `x(t) == x` and return `y(t)`.
    fn solve(&self, x: f32) -> f32 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }

        let mut t = x;
        for _ in 0..8 {
            let error = self.x_at(t) - x;
            if error.abs() < 1e-6 {
                return self.y_at(t);
            }
            let slope = self.dx_at(t);
            if slope.abs() < 1e-6 {
                break;
            }
            t = (t - error / slope).clamp(0.0, 1.0);
        }

        // Newton stalled on a flat segment; bisect instead.
        let (mut lo, mut hi) = (0.0f32, 1.0f32);
        t = x;
        for _ in 0..24 {
            let error = self.x_at(t) - x;
            if error.abs() < 1e-6 {
                break;
            }
            if error > 0.0 {
                hi = t;
            } else {
                lo = t;
            }
            t = 0.5 * (lo + hi);
        }
        self.y_at(t)
    }
}

/// Tween specification: duration and easing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    pub duration_millis: u64,
    pub easing: Easing,
}

impl AnimationSpec {
    /// Longest duration a tween accepts; its nanosecond count fits in a `u64`.
    pub const MAX_DURATION_MILLIS: u64 = u64::MAX / 1_000_000;

    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
        }
    }

    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::LinearEasing)
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(300, Easing::FastOutSlowInEasing)
    }
}

/// Spring configuration.
///
/// Thresholds are in the animated value's own units (pixels for offsets).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// 1.0 = critically damped, < 1.0 bounces, > 1.0 creeps.
    pub damping_ratio: f32,
    pub stiffness: f32,
    pub velocity_threshold: f32,
    pub position_threshold: f32,
}

impl SpringSpec {
    pub fn new(damping_ratio: f32, stiffness: f32) -> Self {
        Self {
            damping_ratio,
            stiffness,
            velocity_threshold: 0.01,
            position_threshold: 0.001,
        }
    }

    pub fn default_spring() -> Self {
        Self::new(1.0, 1500.0)
    }

    pub fn bouncy() -> Self {
        Self::new(0.5, 1500.0)
    }

    /// Soft, visibly bouncing spring used to return a released card.
    pub fn medium_bouncy() -> Self {
        Self::new(0.5, 400.0)
    }

    pub fn stiff() -> Self {
        Self::new(1.0, 3000.0)
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::default_spring()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationType {
    Tween(AnimationSpec),
    Spring(SpringSpec),
}

impl Default for AnimationType {
    fn default() -> Self {
        AnimationType::Tween(AnimationSpec::default())
    }
}

/// Fixed integration step for spring physics. Semi-implicit Euler diverges
/// for stiff springs at frame-sized steps.
const SPRING_TIMESTEP_SECS: f32 = 0.004;

/// Smallest progress gap the spring resolves; `f32` steps near 1.0 are ~6e-8.
const SPRING_PROGRESS_EPSILON: f32 = 4.0 * f32::EPSILON;

/// A spring whose progress stops moving this close to the target is done.
const SPRING_STALL_TOLERANCE: f32 = 1e-4;

type OnFinished = Box<dyn FnOnce() + 'static>;

/// A value animated frame by frame towards a target.
///
/// The value lives in a [`MutableState`] which may be shared with other
/// writers (a drag gesture, for instance). Only one animation runs at a
/// time; starting another, snapping or stopping cancels the running one and
/// drops its completion callback without calling it.
pub struct Animatable<T: Animated> {
    inner: Rc<RefCell<AnimatableInner<T>>>,
}

struct AnimatableInner<T: Animated> {
    state: MutableState<T>,
    runtime: RuntimeHandle,
    start: T,
    target: T,
    animation_type: AnimationType,
    progress: f32,
    /// Progress units per second.
    velocity: f32,
    start_time_nanos: Option<u64>,
    last_frame_nanos: Option<u64>,
    running: bool,
    registration: Option<FrameCallbackRegistration>,
    on_finished: Option<OnFinished>,
}

struct FrameStep<T> {
    value: T,
    finished: bool,
}

impl<T: Animated> Animatable<T> {
    pub fn new(initial: T, runtime: RuntimeHandle) -> Self {
        Self::from_state(MutableState::with_runtime(initial, runtime))
    }

    /// Drive an existing state cell.
    pub fn from_state(state: MutableState<T>) -> Self {
        let current = state.get();
        let inner = AnimatableInner {
            runtime: state.runtime_handle(),
            state,
            start: current.clone(),
            target: current,
            animation_type: AnimationType::default(),
            progress: 1.0,
            velocity: 0.0,
            start_time_nanos: None,
            last_frame_nanos: None,
            running: false,
            registration: None,
            on_finished: None,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    pub fn animate_to(&self, target: T, animation: AnimationType) {
        self.start(target, animation, None);
    }

    /// Like [`animate_to`](Self::animate_to), calling `on_finished` once the
    /// target is reached. Never called if the animation is superseded.
    pub fn animate_to_then(
        &self,
        target: T,
        animation: AnimationType,
        on_finished: impl FnOnce() + 'static,
    ) {
        self.start(target, animation, Some(Box::new(on_finished)));
    }

    fn start(&self, target: T, animation: AnimationType, on_finished: Option<OnFinished>) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.cancel();
            inner.start = inner.state.get();
            inner.target = target;
            inner.animation_type = animation;
            inner.progress = 0.0;
            inner.velocity = 0.0;
            inner.start_time_nanos = None;
            inner.last_frame_nanos = None;
            inner.running = true;
            inner.on_finished = on_finished;
        }
        Self::schedule_frame(&self.inner);
    }

    /// Jump to `value` immediately, cancelling any running animation.
    pub fn snap_to(&self, value: T) {
        let state = {
            let mut inner = self.inner.borrow_mut();
            inner.cancel();
            inner.start = value.clone();
            inner.target = value.clone();
            inner.progress = 1.0;
            inner.state.clone()
        };
        state.set(value);
    }

    /// Cancel any running animation, leaving the value where it is.
    pub fn stop(&self) {
        let mut inner = self.inner.borrow_mut();
        if inner.running {
            log::trace!("animation stopped at progress {:.3}", inner.progress);
        }
        inner.cancel();
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().running
    }

    pub fn value(&self) -> T {
        self.inner.borrow().state.get()
    }

    pub fn target(&self) -> T {
        self.inner.borrow().target.clone()
    }

    pub fn animation_type(&self) -> AnimationType {
        self.inner.borrow().animation_type
    }

    fn schedule_frame(this: &Rc<RefCell<AnimatableInner<T>>>) {
        let clock = {
            let inner = this.borrow();
            if !inner.running || inner.registration.is_some() {
                return;
            }
            inner.runtime.frame_clock()
        };
        let weak = Rc::downgrade(this);
        let registration = clock.with_frame_nanos(move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, time);
            }
        });
        this.borrow_mut().registration = Some(registration);
    }

    fn on_frame(this: &Rc<RefCell<AnimatableInner<T>>>, frame_time_nanos: u64) {
        let (state, step, on_finished) = {
            let mut inner = this.borrow_mut();
            inner.registration = None;
            if !inner.running {
                return;
            }
            let step = match inner.animation_type {
                AnimationType::Tween(spec) => inner.step_tween(spec, frame_time_nanos),
                AnimationType::Spring(spec) => inner.step_spring(spec, frame_time_nanos),
            };
            let on_finished = if step.finished {
                inner.running = false;
                inner.on_finished.take()
            } else {
                None
            };
            (inner.state.clone(), step, on_finished)
        };

        state.set(step.value);

        if step.finished {
            if let Some(on_finished) = on_finished {
                on_finished();
            }
        } else {
            Self::schedule_frame(this);
        }
    }
}

impl<T: Animated> AnimatableInner<T> {
    fn cancel(&mut self) {
        if let Some(registration) = self.registration.take() {
            registration.cancel();
        }
        self.running = false;
        self.on_finished = None;
    }

    fn step_tween(&mut self, spec: AnimationSpec, frame_time_nanos: u64) -> FrameStep<T> {
        let start_time = *self.start_time_nanos.get_or_insert(frame_time_nanos);
        let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);
        let duration_nanos = spec.duration_millis.saturating_mul(1_000_000).max(1);
        let linear = (elapsed_nanos as f32 / duration_nanos as f32).clamp(0.0, 1.0);
        if linear >= 1.0 {
            self.progress = 1.0;
            return FrameStep {
                value: self.target.clone(),
                finished: true,
            };
        }
        self.progress = spec.easing.transform(linear);
        FrameStep {
            value: self.start.lerp(&self.target, self.progress),
            finished: false,
        }
    }

    fn step_spring(&mut self, spec: SpringSpec, frame_time_nanos: u64) -> FrameStep<T> {
        let distance = self.start.distance(&self.target);
        if distance < f32::EPSILON {
            self.progress = 1.0;
            return FrameStep {
                value: self.target.clone(),
                finished: true,
            };
        }

        // The first frame only establishes the time base.
        let Some(last) = self.last_frame_nanos.replace(frame_time_nanos) else {
            return FrameStep {
                value: self.start.lerp(&self.target, self.progress),
                finished: false,
            };
        };
        let dt = frame_time_nanos.saturating_sub(last) as f32 / 1_000_000_000.0;

        let stiffness = spec.stiffness;
        let damping = 2.0 * spec.damping_ratio * stiffness.sqrt();
        let before = self.progress;
        let mut simulated = 0.0f32;
        while simulated < dt {
            let step = SPRING_TIMESTEP_SECS.min(dt - simulated);
            let displacement = self.progress - 1.0;
            let force = -stiffness * displacement - damping * self.velocity;
            // Semi-implicit Euler: velocity first, then position.
            self.velocity += force * step;
            self.progress += self.velocity * step;
            simulated += step;
        }

        // Over long distances the pixel thresholds are finer than `f32`
        // progress can get, so settling is also judged in progress units.
        let gap = (1.0 - self.progress).abs();
        let at_rest = (self.velocity * distance).abs() < spec.velocity_threshold;
        let near_target = gap * distance < spec.position_threshold;
        let resolved = gap <= SPRING_PROGRESS_EPSILON
            && (self.velocity * SPRING_TIMESTEP_SECS).abs() <= SPRING_PROGRESS_EPSILON;
        let stalled = dt > 0.0 && self.progress == before && gap <= SPRING_STALL_TOLERANCE;
        if (at_rest && near_target) || resolved || stalled {
            self.progress = 1.0;
            self.velocity = 0.0;
            return FrameStep {
                value: self.target.clone(),
                finished: true,
            };
        }
        FrameStep {
            value: self.start.lerp(&self.target, self.progress),
            finished: false,
        }
    }
}

impl<T: Animated> Clone for Animatable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
