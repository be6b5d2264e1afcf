use super::*;
use crate::SwipeRecorder;

fn letters() -> DeckConfig<&'static str, String> {
    DeckConfig::new(vec!["a", "b", "c"])
        .render_card(|item| item.to_uppercase())
        .render_empty(|| "done".to_string())
}

#[test]
fn frames_advance_virtual_time() {
    let mut rule = DeckTestRule::new(400.0);
    assert_eq!(rule.frame_time_nanos(), 0);
    rule.advance_frame();
    assert_eq!(rule.frame_time_nanos(), FRAME_NANOS_60HZ);
    rule.advance_time(100);
    assert!(rule.frame_time_nanos() >= 100_000_000 + FRAME_NANOS_60HZ);
}

#[test]
fn pump_until_idle_stops_when_nothing_is_scheduled() {
    let mut rule = DeckTestRule::new(400.0);
    assert_eq!(rule.pump_until_idle(), 0);
}

#[test]
fn swipe_helpers_commit_cards() {
    let mut rule = DeckTestRule::new(400.0);
    let recorder = SwipeRecorder::new();
    let deck = rule
        .mount(
            letters()
                .on_swipe_left(recorder.left())
                .on_swipe_right(recorder.right()),
        )
        .expect("valid config");

    assert!(rule.swipe_right(&deck));
    assert!(rule.swipe_left(&deck));
    assert_eq!(deck.current_index(), 2);
    assert_eq!(
        recorder.directions(),
        vec![SwipeDirection::Right, SwipeDirection::Left]
    );
    assert_eq!(recorder.items(), vec!["a", "b"]);
    assert!(!rule.has_pending_frames());
    assert!(rule.frame_requests() > 0);
}

#[test]
fn resize_is_seen_by_mounted_decks() {
    let rule = DeckTestRule::new(400.0);
    let deck = rule.mount(letters()).expect("valid config");
    rule.resize(1000.0);
    assert_eq!(deck.viewport_width(), 1000.0);
    assert_eq!(rule.touch_origin().x, 500.0);
}

#[test]
fn touch_origin_and_swipe_follow_the_viewport() {
    let mut rule = DeckTestRule::new(400.0);
    assert_eq!(rule.touch_origin(), Point::new(200.0, 300.0));
    rule.resize(600.0);
    assert_eq!(rule.touch_origin(), Point::new(300.0, 300.0));

    let deck = rule.mount(letters()).unwrap();
    assert!(rule.swipe_left(&deck));
    assert_eq!(deck.current_index(), 1);
    assert_eq!(deck.viewport_width(), 600.0);
}
