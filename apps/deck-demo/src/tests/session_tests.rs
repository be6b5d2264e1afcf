use super::*;
use swipedeck_testing::DeckTestRule;

impl FramePump for DeckTestRule {
    fn pump(&mut self) -> bool {
        self.advance_frame();
        self.has_pending_frames()
    }
}

#[test]
fn scripted_session_swipes_through_every_profile() {
    let mut rule = DeckTestRule::new(400.0);
    let viewport = rule.viewport().clone();
    let runtime = rule.runtime_handle();

    let summary = run_session(sample_profiles(), viewport, runtime, &mut rule).unwrap();

    assert_eq!(summary.liked, vec!["Ada", "Linus", "Ken"]);
    assert_eq!(summary.passed, vec!["Grace", "Barbara"]);
    assert!(summary.frames > 0);
}

#[test]
fn empty_session_is_rejected_at_the_first_gesture() {
    let mut rule = DeckTestRule::new(400.0);
    let viewport = rule.viewport().clone();
    let runtime = rule.runtime_handle();

    let error = run_session(Vec::new(), viewport, runtime, &mut rule).unwrap_err();
    assert!(error.to_string().contains("expected a right swipe"));
}

#[test]
fn profiles_render_as_one_line() {
    let profiles = sample_profiles();
    assert_eq!(profiles.len(), 5);
    assert_eq!(render_profile(&profiles[0]), "Ada, 36 (London)");
    assert_eq!(profiles[4].key(), 5);
}
