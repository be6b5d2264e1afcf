use swipedeck_testing::{DeckTestRule, SwipeRecorder};
use swipedeck_ui::{
    CardPhase, DeckConfig, DeckError, DeckFrame, DeckItem, Point, SpringSpec, SwipeDeck,
    SwipeDirection, SwipeOutcome,
};

#[derive(Clone, Debug, PartialEq)]
struct Profile {
    id: u32,
    name: &'static str,
}

impl DeckItem for Profile {
    type Key = u32;

    fn key(&self) -> u32 {
        self.id
    }
}

fn profiles(count: u32) -> Vec<Profile> {
    const NAMES: [&str; 4] = ["Ada", "Grace", "Linus", "Barbara"];
    (0..count)
        .map(|id| Profile {
            id,
            name: NAMES[id as usize % NAMES.len()],
        })
        .collect()
}

fn mount(
    rule: &DeckTestRule,
    items: Vec<Profile>,
    recorder: &SwipeRecorder<Profile>,
) -> SwipeDeck<Profile, String> {
    let config = DeckConfig::new(items)
        .render_card(|profile: &Profile| format!("{} #{}", profile.name, profile.id))
        .render_empty(|| "No more profiles".to_string())
        .on_swipe_left(recorder.left())
        .on_swipe_right(recorder.right());
    rule.mount(config).expect("valid config")
}

#[test]
fn drag_past_threshold_swipes_right() {
    let mut rule = DeckTestRule::new(400.0);
    let recorder = SwipeRecorder::new();
    let deck = mount(&rule, profiles(3), &recorder);

    deck.on_drag_update(150.0, 0.0);
    assert_eq!(deck.offset(), Point::new(150.0, 0.0));
    assert_eq!(deck.on_drag_end(150.0, 0.0), SwipeOutcome::Right);
    assert_eq!(deck.phase(), CardPhase::FlyingOut(SwipeDirection::Right));
    assert!(recorder.is_empty(), "callback waits for the fling");

    rule.pump_until_idle();
    assert_eq!(recorder.directions(), vec![SwipeDirection::Right]);
    assert_eq!(recorder.items(), vec![profiles(3)[0].clone()]);
    assert_eq!(deck.current_index(), 1);
    assert_eq!(deck.offset(), Point::ZERO);
    assert_eq!(deck.phase(), CardPhase::Idle);
}

#[test]
fn short_drag_springs_back() {
    let mut rule = DeckTestRule::new(400.0);
    let recorder = SwipeRecorder::new();
    let deck = mount(&rule, profiles(3), &recorder);

    deck.on_drag_update(50.0, 20.0);
    assert_eq!(deck.on_drag_end(50.0, 20.0), SwipeOutcome::None);
    assert_eq!(deck.phase(), CardPhase::SpringingBack);

    rule.advance_frame();
    rule.advance_frame();
    assert_ne!(deck.offset(), Point::new(50.0, 20.0), "spring moves the card");

    rule.pump_until_idle();
    assert_eq!(deck.offset(), Point::ZERO);
    assert_eq!(deck.phase(), CardPhase::Idle);
    assert_eq!(deck.current_index(), 0);
    assert!(recorder.is_empty());
}

#[test]
fn long_vertical_drag_springs_back_to_rest() {
    let mut rule = DeckTestRule::new(400.0);
    let recorder = SwipeRecorder::new();
    let deck = mount(&rule, profiles(3), &recorder);

    deck.on_drag_update(90.0, 5000.0);
    assert_eq!(deck.on_drag_end(90.0, 5000.0), SwipeOutcome::None);
    assert_eq!(deck.phase(), CardPhase::SpringingBack);

    rule.pump_until_idle();
    assert_eq!(deck.phase(), CardPhase::Idle);
    assert_eq!(deck.offset(), Point::ZERO);
    assert_eq!(deck.current_index(), 0);
    assert!(recorder.is_empty());
}

#[test]
fn threshold_ties_do_not_swipe() {
    let mut rule = DeckTestRule::new(400.0);
    let recorder = SwipeRecorder::new();
    let deck = mount(&rule, profiles(2), &recorder);

    assert_eq!(deck.on_drag_end(100.0, 0.0), SwipeOutcome::None);
    rule.pump_until_idle();
    assert_eq!(deck.on_drag_end(-100.0, 0.0), SwipeOutcome::None);
    rule.pump_until_idle();
    assert_eq!(deck.current_index(), 0);

    assert_eq!(deck.on_drag_end(-100.5, 0.0), SwipeOutcome::Left);
    rule.pump_until_idle();
    assert_eq!(recorder.directions(), vec![SwipeDirection::Left]);
}

#[test]
fn single_card_swipe_exhausts_the_deck() {
    let mut rule = DeckTestRule::new(400.0);
    let recorder = SwipeRecorder::new();
    let deck = mount(&rule, profiles(1), &recorder);

    assert!(rule.swipe_right(&deck));
    assert!(deck.is_exhausted());
    assert_eq!(deck.current_item(), None);
    assert!(!deck.handles_gestures());
    assert_eq!(
        deck.render(),
        DeckFrame::Empty("No more profiles".to_string())
    );

    assert!(!rule.press(&deck), "no handlers once exhausted");
    assert_eq!(deck.on_drag_end(300.0, 0.0), SwipeOutcome::None);
    assert!(!deck.force_swipe(SwipeDirection::Left));
    assert_eq!(
        deck.complete_swipe(SwipeDirection::Left),
        Err(DeckError::Exhausted { index: 1, len: 1 })
    );
    assert_eq!(recorder.len(), 1);
}

#[test]
fn mixed_swipes_report_each_item_in_order() {
    let mut rule = DeckTestRule::new(400.0);
    let recorder = SwipeRecorder::new();
    let items = profiles(3);
    let deck = mount(&rule, items.clone(), &recorder);

    let mut indices = vec![deck.current_index()];
    for direction in [
        SwipeDirection::Right,
        SwipeDirection::Left,
        SwipeDirection::Right,
    ] {
        assert!(rule.swipe(&deck, direction));
        indices.push(deck.current_index());
    }

    assert_eq!(indices, vec![0, 1, 2, 3]);
    assert_eq!(
        recorder.directions(),
        vec![
            SwipeDirection::Right,
            SwipeDirection::Left,
            SwipeDirection::Right
        ]
    );
    assert_eq!(recorder.items(), items);
    assert!(deck.is_exhausted());
}

#[test]
fn empty_deck_shows_empty_view_without_handlers() {
    let rule = DeckTestRule::new(400.0);
    let recorder = SwipeRecorder::new();
    let deck = mount(&rule, Vec::new(), &recorder);

    assert!(deck.is_empty());
    assert!(deck.is_exhausted());
    assert!(deck.render().is_empty());
    assert!(!rule.drag_by(&deck, 300.0, 0.0, 4));
    assert_eq!(deck.offset(), Point::ZERO);
}

#[test]
fn frame_stacks_remaining_cards_under_the_top() {
    let mut rule = DeckTestRule::new(400.0);
    let recorder = SwipeRecorder::new();
    let deck = mount(&rule, profiles(4), &recorder);
    rule.swipe_left(&deck);

    deck.on_drag_update(-40.0, 8.0);
    let frame = deck.render();
    let cards = frame.cards();
    assert_eq!(cards.len(), 3);
    assert_eq!(
        cards.iter().map(|card| card.key).collect::<Vec<_>>(),
        vec![3, 2, 1]
    );

    let top = frame.top_card().expect("top card");
    assert_eq!(top.view, "Grace #1");
    assert!(top.handles_gestures);
    assert_eq!(top.transform.translation, Point::new(-40.0, 8.0));
    assert!(top.transform.rotation_degrees < 0.0);
    assert_eq!(cards[0].transform.translation, Point::new(0.0, 20.0));
    assert_eq!(cards[1].transform.translation, Point::new(0.0, 10.0));
    assert!(!cards[0].handles_gestures);
}

#[test]
fn invalid_configs_are_rejected() {
    let rule = DeckTestRule::new(400.0);
    let missing_empty = DeckConfig::<Profile, String>::new(profiles(1))
        .render_card(|profile: &Profile| profile.name.to_string());
    assert_eq!(
        rule.mount(missing_empty).unwrap_err(),
        DeckError::MissingRenderEmpty
    );

    let bad_threshold = DeckConfig::<Profile, String>::new(profiles(1))
        .render_card(|profile: &Profile| profile.name.to_string())
        .render_empty(String::new)
        .swipe_threshold_fraction(-0.1);
    assert_eq!(
        rule.mount(bad_threshold).unwrap_err(),
        DeckError::InvalidThreshold(-0.1)
    );

    let undamped = SpringSpec::new(0.0, 400.0);
    let never_settles = DeckConfig::<Profile, String>::new(profiles(1))
        .render_card(|profile: &Profile| profile.name.to_string())
        .render_empty(String::new)
        .spring(undamped);
    assert_eq!(
        rule.mount(never_settles).unwrap_err(),
        DeckError::InvalidSpring(undamped)
    );
}
