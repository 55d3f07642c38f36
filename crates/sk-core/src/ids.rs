//! Typed index wrappers for the entities a plan allocates volume to.
//!
//! Every allocation in a solved plan is a flat `Vec<f64>`; these ids keep a
//! user action index from being confused with an expedition or shop index.

use std::fmt;

macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty) => $label:literal;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// Iterate over the first `len` ids in ascending order.
            pub fn range(len: usize) -> impl Iterator<Item = $name> {
                (0..len).map(|i| $name(i as $inner))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}#{}", $label, self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a user-supplied action (sortie) in the action table.
    pub struct ActionId(u32) => "action";
}

typed_id! {
    /// Index of a catalog expedition (0..16).
    pub struct ExpedId(u16) => "exped";
}

typed_id! {
    /// Index of a shop item (0..6).
    pub struct ShopItemId(u16) => "shop";
}

typed_id! {
    /// Index of an expedition group (0..7).
    pub struct GroupId(u16) => "group";
}
