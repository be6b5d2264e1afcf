use super::*;

use std::cell::Cell;
use std::sync::Arc;

use swipedeck_core::{Runtime, RuntimeScheduler, FRAME_NANOS_60HZ};

struct NoopScheduler;

impl RuntimeScheduler for NoopScheduler {
    fn schedule_frame(&self) {}
}

struct Frames {
    runtime: Runtime,
    time: u64,
}

impl Frames {
    fn new() -> Self {
        Self {
            runtime: Runtime::new(Arc::new(NoopScheduler)),
            time: 0,
        }
    }

    fn handle(&self) -> RuntimeHandle {
        self.runtime.handle()
    }

    fn advance(&mut self) {
        self.time += FRAME_NANOS_60HZ;
        self.runtime.handle().drain_frame_callbacks(self.time);
    }

    /// Pump until nothing is scheduled; returns the number of frames.
    fn settle(&mut self, limit: usize) -> usize {
        let mut frames = 0;
        while self.runtime.handle().has_frame_callbacks() {
            assert!(frames < limit, "animation did not settle in {limit} frames");
            self.advance();
            frames += 1;
        }
        frames
    }
}

#[test]
fn tween_reaches_target_after_duration() {
    let mut frames = Frames::new();
    let animatable = Animatable::new(0.0f32, frames.handle());
    animatable.animate_to(1.0, AnimationType::Tween(AnimationSpec::linear(100)));

    let mut samples = Vec::new();
    while animatable.is_running() {
        frames.advance();
        samples.push(animatable.value());
    }

    assert!(samples.iter().any(|value| *value > 0.0 && *value < 1.0));
    assert!(samples.windows(2).all(|pair| pair[0] <= pair[1]));
    assert_eq!(animatable.value(), 1.0);
    // First frame pins the start time, then 100ms at 60 Hz.
    assert_eq!(samples.len(), 7);
}

#[test]
fn tween_with_huge_duration_does_not_overflow() {
    let mut frames = Frames::new();
    let animatable = Animatable::new(0.0f32, frames.handle());
    animatable.animate_to(
        10.0,
        AnimationType::Tween(AnimationSpec::linear(AnimationSpec::MAX_DURATION_MILLIS + 1)),
    );
    for _ in 0..3 {
        frames.advance();
    }
    assert!(animatable.is_running());
    assert!(animatable.value() < 1e-3);
}

#[test]
fn completion_fires_exactly_once() {
    let mut frames = Frames::new();
    let animatable = Animatable::new(Point::ZERO, frames.handle());
    let finished = Rc::new(Cell::new(0));
    animatable.animate_to_then(
        Point::new(560.0, 0.0),
        AnimationType::Tween(AnimationSpec::linear(250)),
        {
            let finished = Rc::clone(&finished);
            move || finished.set(finished.get() + 1)
        },
    );

    frames.settle(40);
    frames.advance();
    frames.advance();

    assert_eq!(finished.get(), 1);
    assert_eq!(animatable.value(), Point::new(560.0, 0.0));
}

#[test]
fn superseded_animation_never_completes() {
    let mut frames = Frames::new();
    let animatable = Animatable::new(0.0f32, frames.handle());
    let first = Rc::new(Cell::new(false));
    let second = Rc::new(Cell::new(false));

    animatable.animate_to_then(100.0, AnimationType::Tween(AnimationSpec::linear(250)), {
        let first = Rc::clone(&first);
        move || first.set(true)
    });
    frames.advance();
    frames.advance();
    animatable.animate_to_then(0.0, AnimationType::Spring(SpringSpec::stiff()), {
        let second = Rc::clone(&second);
        move || second.set(true)
    });
    frames.settle(600);

    assert!(!first.get());
    assert!(second.get());
    assert_eq!(animatable.value(), 0.0);
}

#[test]
fn stop_leaves_value_and_drops_completion() {
    let mut frames = Frames::new();
    let animatable = Animatable::new(0.0f32, frames.handle());
    let finished = Rc::new(Cell::new(false));
    animatable.animate_to_then(100.0, AnimationType::Tween(AnimationSpec::linear(100)), {
        let finished = Rc::clone(&finished);
        move || finished.set(true)
    });
    frames.advance();
    frames.advance();
    frames.advance();
    let paused_at = animatable.value();
    animatable.stop();

    assert_eq!(frames.settle(5), 0);
    assert!(paused_at > 0.0 && paused_at < 100.0);
    assert_eq!(animatable.value(), paused_at);
    assert!(!animatable.is_running());
    assert!(!finished.get());
}

#[test]
fn spring_settles_on_target_from_shared_state() {
    let mut frames = Frames::new();
    let offset = MutableState::with_runtime(Point::new(120.0, -40.0), frames.handle());
    let animatable = Animatable::from_state(offset.clone());
    animatable.animate_to(Point::ZERO, AnimationType::Spring(SpringSpec::medium_bouncy()));

    frames.advance();
    frames.advance();
    let early = offset.get();
    assert!(early.x < 120.0 && early.x > 0.0, "moving towards rest: {early:?}");

    let used = frames.settle(600);
    assert!(used > 10);
    assert_eq!(offset.get(), Point::ZERO);
}

#[test]
fn spring_settles_over_long_distances() {
    for (damping_ratio, stiffness) in [(0.5, 400.0), (1.0, 3000.0), (4.0, 400.0)] {
        let mut frames = Frames::new();
        let offset = MutableState::with_runtime(Point::new(90.0, 5000.0), frames.handle());
        let animatable = Animatable::from_state(offset.clone());
        let spec = SpringSpec::new(damping_ratio, stiffness);
        animatable.animate_to(Point::ZERO, AnimationType::Spring(spec));

        frames.settle(2_000);
        assert!(!animatable.is_running(), "{spec:?} still running");
        assert_eq!(offset.get(), Point::ZERO);
    }
}

#[test]
fn bouncy_spring_overshoots() {
    let mut frames = Frames::new();
    let animatable = Animatable::new(100.0f32, frames.handle());
    animatable.animate_to(0.0, AnimationType::Spring(SpringSpec::medium_bouncy()));
    let mut lowest = f32::MAX;
    while animatable.is_running() {
        frames.advance();
        lowest = lowest.min(animatable.value());
    }
    assert!(lowest < 0.0, "under-damped spring should cross the target");
    assert_eq!(animatable.value(), 0.0);
}

#[test]
fn snap_to_cancels_running_animation() {
    let mut frames = Frames::new();
    let animatable = Animatable::new(0.0f32, frames.handle());
    animatable.animate_to(50.0, AnimationType::default());
    frames.advance();
    animatable.snap_to(7.0);

    assert!(!animatable.is_running());
    assert_eq!(frames.settle(5), 0);
    assert_eq!(animatable.value(), 7.0);
    assert_eq!(animatable.target(), 7.0);
}

#[test]
fn easing_linear_is_identity() {
    assert_eq!(Easing::LinearEasing.transform(0.0), 0.0);
    assert_eq!(Easing::LinearEasing.transform(0.5), 0.5);
    assert_eq!(Easing::LinearEasing.transform(1.0), 1.0);
}

#[test]
fn easing_bounds_are_correct() {
    let easings = [
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::FastOutSlowInEasing,
        Easing::LinearOutSlowInEasing,
        Easing::FastOutLinearEasing,
    ];
    for easing in easings {
        assert!(easing.transform(0.0).abs() < 0.01, "start for {easing:?}");
        assert!((easing.transform(1.0) - 1.0).abs() < 0.01, "end for {easing:?}");
    }
}

#[test]
fn ease_in_out_is_symmetric() {
    assert!((Easing::EaseInOut.transform(0.5) - 0.5).abs() < 1e-3);
    let quarter = Easing::EaseInOut.transform(0.25);
    let three_quarters = Easing::EaseInOut.transform(0.75);
    assert!(quarter < 0.25);
    assert!((quarter + three_quarters - 1.0).abs() < 1e-3);
}

#[test]
fn spring_presets() {
    assert_eq!(SpringSpec::default().damping_ratio, 1.0);
    assert!(SpringSpec::bouncy().damping_ratio < 1.0);
    assert!(SpringSpec::stiff().stiffness > SpringSpec::default().stiffness);
    assert!(SpringSpec::medium_bouncy().stiffness < SpringSpec::default().stiffness);
}
