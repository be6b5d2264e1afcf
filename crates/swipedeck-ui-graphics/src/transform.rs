use crate::geometry::Point;

/// Visual transform of one card relative to its rest position.
///
/// Rotation is about the card's center, applied before the translation.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct CardTransform {
    pub translation: Point,
    pub rotation_degrees: f32,
}

impl CardTransform {
    pub const IDENTITY: CardTransform = CardTransform {
        translation: Point::ZERO,
        rotation_degrees: 0.0,
    };

    pub fn translated(dx: f32, dy: f32) -> Self {
        Self {
            translation: Point::new(dx, dy),
            rotation_degrees: 0.0,
        }
    }

    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation_degrees = degrees;
        self
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}
