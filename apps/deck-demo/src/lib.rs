//! Scripted swiping session shared by the demo binary and its tests.

use std::cell::RefCell;
use std::rc::Rc;
use std::thread;
use std::time::Duration;

use anyhow::{ensure, Context};
use swipedeck_core::RuntimeHandle;
use swipedeck_runtime_std::StdRuntime;
use swipedeck_ui::{
    DeckConfig, DeckFrame, DeckItem, PointerEvent, SwipeDeck, SwipeDirection, SwipeOutcome,
    Viewport,
};

/// Frames after which a settling animation is considered stuck.
const MAX_SETTLE_FRAMES: usize = 2_000;

#[derive(Clone, Debug, PartialEq)]
pub struct Profile {
    pub id: u32,
    pub name: &'static str,
    pub age: u8,
    pub city: &'static str,
}

impl DeckItem for Profile {
    type Key = u32;

    fn key(&self) -> u32 {
        self.id
    }
}

pub fn sample_profiles() -> Vec<Profile> {
    [
        ("Ada", 36, "London"),
        ("Grace", 45, "Arlington"),
        ("Linus", 28, "Helsinki"),
        ("Barbara", 52, "Boston"),
        ("Ken", 61, "Murray Hill"),
    ]
    .into_iter()
    .zip(1u32..)
    .map(|((name, age, city), id)| Profile {
        id,
        name,
        age,
        city,
    })
    .collect()
}

/// Advances animations between scripted steps.
pub trait FramePump {
    /// Run one frame. Returns whether more frames are wanted.
    fn pump(&mut self) -> bool;
}

/// Pumps a [`StdRuntime`] in real time.
pub struct WallClockPump {
    runtime: StdRuntime,
    frame: Duration,
}

impl WallClockPump {
    pub fn new(runtime: StdRuntime, frame: Duration) -> Self {
        Self { runtime, frame }
    }
}

impl FramePump for WallClockPump {
    fn pump(&mut self) -> bool {
        thread::sleep(self.frame);
        self.runtime.pump_frame()
    }
}

#[derive(Debug, Default, PartialEq)]
pub struct SessionSummary {
    pub liked: Vec<&'static str>,
    pub passed: Vec<&'static str>,
    pub frames: usize,
}

fn render_profile(profile: &Profile) -> String {
    format!("{}, {} ({})", profile.name, profile.age, profile.city)
}

fn describe(frame: &DeckFrame<u32, String>) -> String {
    match frame {
        DeckFrame::Empty(view) => format!("[{view}]"),
        DeckFrame::Cards(cards) => cards
            .iter()
            .rev()
            .map(|card| {
                let marker = if card.handles_gestures { "*" } else { "" };
                format!("{marker}{}", card.view)
            })
            .collect::<Vec<_>>()
            .join(" | "),
    }
}

fn settle(deck: &SwipeDeck<Profile, String>, pump: &mut dyn FramePump) -> anyhow::Result<usize> {
    let mut frames = 0;
    while pump.pump() || deck.is_animating() {
        frames += 1;
        ensure!(
            frames < MAX_SETTLE_FRAMES,
            "deck still animating after {frames} frames"
        );
    }
    log::info!("deck: {}", describe(&deck.render()));
    Ok(frames)
}

/// Build a deck over `profiles` and replay the scripted gestures on it.
pub fn run_session(
    profiles: Vec<Profile>,
    viewport: impl Viewport + 'static,
    runtime: RuntimeHandle,
    pump: &mut dyn FramePump,
) -> anyhow::Result<SessionSummary> {
    let liked = Rc::new(RefCell::new(Vec::new()));
    let passed = Rc::new(RefCell::new(Vec::new()));

    let config = DeckConfig::new(profiles)
        .render_card(render_profile)
        .render_empty(|| "No more profiles".to_string())
        .on_swipe_right({
            let liked = Rc::clone(&liked);
            move |profile: &Profile| {
                log::info!("liked {}", profile.name);
                liked.borrow_mut().push(profile.name);
            }
        })
        .on_swipe_left({
            let passed = Rc::clone(&passed);
            move |profile: &Profile| {
                log::info!("passed on {}", profile.name);
                passed.borrow_mut().push(profile.name);
            }
        });
    let deck = SwipeDeck::new(config, viewport, runtime).context("building the deck")?;
    log::info!("deck: {}", describe(&deck.render()));

    let width = deck.viewport_width();
    let mut frames = 0;

    // Drag well past the threshold to the right.
    deck.on_drag_update(width * 0.2, 4.0);
    deck.on_drag_update(width * 0.4, 6.0);
    let outcome = deck.on_drag_end(width * 0.4, 6.0);
    ensure!(outcome == SwipeOutcome::Right, "expected a right swipe, got {outcome:?}");
    frames += settle(&deck, pump)?;

    // A short drag only springs back.
    deck.on_drag_update(width * 0.1, -3.0);
    let outcome = deck.on_drag_end(width * 0.1, -3.0);
    ensure!(outcome == SwipeOutcome::None, "expected a spring-back, got {outcome:?}");
    frames += settle(&deck, pump)?;

    // Raw pointer events, as a host window would deliver them.
    let (x, y) = (width / 2.0, 300.0);
    deck.handle_pointer_event(&PointerEvent::down(x, y));
    for step in 1..=6 {
        deck.handle_pointer_event(&PointerEvent::moved(x - step as f32 * width * 0.06, y));
    }
    deck.handle_pointer_event(&PointerEvent::up(x - width * 0.36, y));
    frames += settle(&deck, pump)?;

    deck.force_swipe(SwipeDirection::Right);
    frames += settle(&deck, pump)?;

    let mut direction = SwipeDirection::Left;
    while !deck.is_exhausted() {
        deck.force_swipe(direction);
        frames += settle(&deck, pump)?;
        direction = match direction {
            SwipeDirection::Left => SwipeDirection::Right,
            SwipeDirection::Right => SwipeDirection::Left,
        };
    }

    let liked = liked.borrow().clone();
    let passed = passed.borrow().clone();
    Ok(SessionSummary {
        liked,
        passed,
        frames,
    })
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
