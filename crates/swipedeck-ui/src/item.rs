use std::fmt::Debug;
use std::hash::Hash;

/// An item shown on one card.
///
/// The deck reads nothing but the key, which hosts use to keep card views
/// stable across frames. Keys are expected to be unique within a deck; this
/// is not checked.
pub trait DeckItem {
    type Key: Clone + Eq + Hash + Debug;

    fn key(&self) -> Self::Key;
}

impl DeckItem for String {
    type Key = String;

    fn key(&self) -> String {
        self.clone()
    }
}

impl DeckItem for &'static str {
    type Key = &'static str;

    fn key(&self) -> &'static str {
        *self
    }
}

macro_rules! impl_deck_item_for_int {
    ($($ty:ty),*) => {
        $(
            impl DeckItem for $ty {
                type Key = $ty;

                fn key(&self) -> $ty {
                    *self
                }
            }
        )*
    };
}

impl_deck_item_for_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
