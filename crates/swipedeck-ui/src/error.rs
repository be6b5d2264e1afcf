use std::fmt;

use swipedeck_animation::SpringSpec;

#[derive(Debug, Clone, PartialEq)]
pub enum DeckError {
    MissingRenderCard,
    MissingRenderEmpty,
    InvalidThreshold(f32),
    InvalidFlingMultiplier(f32),
    InvalidStackGap(f32),
    /// Damping, stiffness and both rest thresholds must be finite and positive.
    InvalidSpring(SpringSpec),
    InvalidRotation { degrees: f32, domain_widths: f32 },
    /// Longer than `AnimationSpec::MAX_DURATION_MILLIS`.
    InvalidDuration(u64),
    /// A swipe was completed with no card left on the stack.
    Exhausted { index: usize, len: usize },
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckError::MissingRenderCard => write!(f, "deck config has no card renderer"),
            DeckError::MissingRenderEmpty => write!(f, "deck config has no empty-stack renderer"),
            DeckError::InvalidThreshold(value) => {
                write!(f, "swipe threshold fraction must be finite and positive, got {value}")
            }
            DeckError::InvalidFlingMultiplier(value) => {
                write!(f, "fling distance multiplier must be at least 1.0, got {value}")
            }
            DeckError::InvalidStackGap(value) => {
                write!(f, "stack gap must be finite, got {value}")
            }
            DeckError::InvalidSpring(spring) => write!(
                f,
                "spring needs finite positive damping, stiffness and thresholds, got {spring:?}"
            ),
            DeckError::InvalidRotation {
                degrees,
                domain_widths,
            } => write!(
                f,
                "rotation of {degrees} degrees over {domain_widths} widths is not usable"
            ),
            DeckError::InvalidDuration(millis) => {
                write!(f, "animation duration of {millis}ms is too long")
            }
            DeckError::Exhausted { index, len } => {
                write!(f, "swipe completed at index {index} of an exhausted deck of {len}")
            }
        }
    }
}

impl std::error::Error for DeckError {}
