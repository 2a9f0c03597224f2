//! Strongly typed identifiers for scheduling entities.

use std::fmt;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Copy,
            Clone,
            Eq,
            PartialEq,
            Ord,
            PartialOrd,
            Hash,
            Debug,
            Default,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[repr(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Creates a new identifier wrapper from a raw `u64` value.
            #[must_use]
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            /// Returns the raw `u64` backing this identifier.
            #[must_use]
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for u64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }
    };
}

entity_id!(
    /// Identifier of a scheduled card.
    ///
    /// Card ids are millisecond timestamps issued by
    /// [`IdGen`](crate::IdGen), so sorting by id reproduces creation order.
    CardId
);

entity_id!(
    /// Identifier of the note a card was generated from.
    NoteId
);

entity_id!(
    /// Identifier of a deck.
    DeckId
);

entity_id!(
    /// Identifier of a collection.
    CollectionId
);
