use std::fmt;

use swipedeck_foundation::{SwipeDirection, SwipeOutcome};

/// Where the top card is in its interaction lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CardPhase {
    #[default]
    Idle,
    Dragging,
    /// Released; the outcome is being classified.
    Deciding,
    /// Leaving the screen. Ends with the index advancing.
    FlyingOut(SwipeDirection),
    SpringingBack,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardEvent {
    PointerDown,
    Release,
    Decided(SwipeOutcome),
    /// Programmatic swipe, bypassing the drag.
    Forced(SwipeDirection),
    FlingFinished,
    SpringSettled,
}

impl CardPhase {
    /// Next phase for `event`, or `None` if the event means nothing here.
    pub fn on_event(self, event: CardEvent) -> Option<CardPhase> {
        use CardEvent as E;
        use CardPhase as P;

        let next = match (self, event) {
            (P::Idle | P::SpringingBack, E::PointerDown) => P::Dragging,
            (P::Dragging, E::Release) => P::Deciding,
            (P::Deciding, E::Decided(outcome)) => match outcome.direction() {
                Some(direction) => P::FlyingOut(direction),
                None => P::SpringingBack,
            },
            (P::Idle | P::Dragging | P::SpringingBack, E::Forced(direction)) => {
                P::FlyingOut(direction)
            }
            (P::FlyingOut(_), E::FlingFinished) => P::Idle,
            (P::SpringingBack, E::SpringSettled) => P::Idle,
            (phase, event) => {
                log::trace!("card ignores {event:?} while {phase}");
                return None;
            }
        };
        Some(next)
    }

    /// Whether pointer input reaches the card in this phase.
    pub fn accepts_drag(self) -> bool {
        !matches!(self, CardPhase::FlyingOut(_) | CardPhase::Deciding)
    }

    pub fn is_animating(self) -> bool {
        matches!(self, CardPhase::FlyingOut(_) | CardPhase::SpringingBack)
    }
}

impl fmt::Display for CardPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardPhase::Idle => f.write_str("idle"),
            CardPhase::Dragging => f.write_str("dragging"),
            CardPhase::Deciding => f.write_str("deciding"),
            CardPhase::FlyingOut(direction) => write!(f, "flying out {direction}"),
            CardPhase::SpringingBack => f.write_str("springing back"),
        }
    }
}
