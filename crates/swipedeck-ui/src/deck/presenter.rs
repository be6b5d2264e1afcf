use swipedeck_animation::Interpolation;
use swipedeck_ui_graphics::{CardTransform, Point};

use crate::item::DeckItem;

/// One card of a rendered frame.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedCard<K, V> {
    pub key: K,
    /// Position in the full item sequence.
    pub index: usize,
    pub view: V,
    pub transform: CardTransform,
    /// 0 for the top card, `-depth` below it.
    pub z_index: i32,
    pub handles_gestures: bool,
}

/// Output of one presentation pass.
#[derive(Clone, Debug, PartialEq)]
pub enum DeckFrame<K, V> {
    /// Painter order: bottom card first, top card last.
    Cards(Vec<RenderedCard<K, V>>),
    Empty(V),
}

impl<K, V> DeckFrame<K, V> {
    pub fn cards(&self) -> &[RenderedCard<K, V>] {
        match self {
            DeckFrame::Cards(cards) => cards,
            DeckFrame::Empty(_) => &[],
        }
    }

    pub fn top_card(&self) -> Option<&RenderedCard<K, V>> {
        self.cards().last()
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, DeckFrame::Empty(_))
    }
}

/// Derives transforms and paint order for the visible window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Presenter {
    stack_gap: f32,
    rotation_degrees: f32,
    rotation_domain_widths: f32,
}

impl Presenter {
    pub fn new(stack_gap: f32, rotation_degrees: f32, rotation_domain_widths: f32) -> Self {
        Self {
            stack_gap,
            rotation_degrees,
            rotation_domain_widths,
        }
    }

    /// Tilt of the top card for horizontal offset `x`.
    ///
    /// Linear over `[-2W, 2W]` and clamped outside it.
    pub fn rotation_for(&self, x: f32, viewport_width: f32) -> f32 {
        let extent = self.rotation_domain_widths * viewport_width;
        match Interpolation::symmetric(extent, self.rotation_degrees) {
            Ok(rotation) => rotation.value_at(x),
            Err(err) => {
                log::trace!("no rotation for viewport width {viewport_width}: {err}");
                0.0
            }
        }
    }

    /// `lag` is the promotion lag in slots, see
    /// [`PromotionTransition`](super::transition::PromotionTransition).
    pub fn top_card_transform(
        &self,
        offset: Point,
        lag: f32,
        viewport_width: f32,
    ) -> CardTransform {
        CardTransform::translated(offset.x, offset.y + self.stack_gap * lag)
            .with_rotation(self.rotation_for(offset.x, viewport_width))
    }

    pub fn stacked_transform(&self, depth: usize, lag: f32) -> CardTransform {
        CardTransform::translated(0.0, self.stack_gap * (depth as f32 + lag))
    }

    #[allow(clippy::too_many_arguments)]
    pub fn present<T: DeckItem, V>(
        &self,
        items: &[T],
        current_index: usize,
        offset: Point,
        lag: f32,
        viewport_width: f32,
        top_accepts_gestures: bool,
        render_card: &dyn Fn(&T) -> V,
        render_empty: &dyn Fn() -> V,
    ) -> DeckFrame<T::Key, V> {
        let Some(visible) = items.get(current_index..).filter(|rest| !rest.is_empty()) else {
            return DeckFrame::Empty(render_empty());
        };

        let cards = visible
            .iter()
            .enumerate()
            .rev()
            .map(|(depth, item)| {
                let top = depth == 0;
                let transform = if top {
                    self.top_card_transform(offset, lag, viewport_width)
                } else {
                    self.stacked_transform(depth, lag)
                };
                RenderedCard {
                    key: item.key(),
                    index: current_index + depth,
                    view: render_card(item),
                    transform,
                    z_index: -(depth as i32),
                    handles_gestures: top && top_accepts_gestures,
                }
            })
            .collect();
        DeckFrame::Cards(cards)
    }
}
