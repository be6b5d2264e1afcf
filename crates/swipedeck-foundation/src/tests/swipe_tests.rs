use crate::gesture_constants::SWIPE_THRESHOLD_FRACTION;
use crate::{classify_release, SwipeDirection, SwipeOutcome, SwipeThreshold};

#[test]
fn release_past_threshold_swipes() {
    assert_eq!(classify_release(150.0, 100.0), SwipeOutcome::Right);
    assert_eq!(classify_release(-150.0, 100.0), SwipeOutcome::Left);
    assert_eq!(classify_release(50.0, 100.0), SwipeOutcome::None);
    assert_eq!(classify_release(-99.9, 100.0), SwipeOutcome::None);
}

#[test]
fn release_exactly_on_threshold_is_not_a_swipe() {
    assert_eq!(classify_release(100.0, 100.0), SwipeOutcome::None);
    assert_eq!(classify_release(-100.0, 100.0), SwipeOutcome::None);
    assert_eq!(classify_release(100.001, 100.0), SwipeOutcome::Right);
    assert_eq!(classify_release(-100.001, 100.0), SwipeOutcome::Left);
}

#[test]
fn classification_holds_across_a_sweep() {
    let threshold = 100.0;
    for step in -400..=400 {
        let dx = step as f32 * 0.5;
        let expected = if dx > threshold {
            SwipeOutcome::Right
        } else if dx < -threshold {
            SwipeOutcome::Left
        } else {
            SwipeOutcome::None
        };
        assert_eq!(classify_release(dx, threshold), expected, "dx = {dx}");
    }
}

#[test]
fn threshold_scales_with_viewport() {
    let threshold = SwipeThreshold::default();
    assert_eq!(threshold.fraction(), SWIPE_THRESHOLD_FRACTION);
    assert_eq!(threshold.resolve(400.0), 100.0);
    assert_eq!(threshold.classify(120.0, 400.0), SwipeOutcome::Right);
    assert_eq!(threshold.classify(120.0, 800.0), SwipeOutcome::None);
}

#[test]
fn outcome_maps_to_direction() {
    assert_eq!(SwipeOutcome::None.direction(), None);
    assert_eq!(SwipeOutcome::Left.direction(), Some(SwipeDirection::Left));
    assert_eq!(SwipeOutcome::Right.direction(), Some(SwipeDirection::Right));
    assert_eq!(SwipeOutcome::from(SwipeDirection::Left), SwipeOutcome::Left);
    assert!(!SwipeOutcome::None.is_swipe());
    assert_eq!(SwipeDirection::Left.sign(), -1.0);
    assert_eq!(SwipeDirection::Right.to_string(), "right");
}
