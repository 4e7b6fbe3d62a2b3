//! Entity identification.
//!
//! Characters, weapons and rooms are identified by small typed indices into
//! the lists a `GameConfig` declares. Names are resolved through the board;
//! everything else passes ids around.
//!
//! ```
//! use rust_cluedo::core::{CharacterId, TokenId, WeaponId};
//!
//! let scarlett = TokenId::Character(CharacterId::new(0));
//! let rope = TokenId::Weapon(WeaponId::new(4));
//!
//! assert!(scarlett.is_character());
//! assert!(!rope.is_character());
//! ```

use serde::{Deserialize, Serialize};

macro_rules! index_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(pub u8);

        impl $name {
            /// Create a new id.
            #[must_use]
            pub const fn new(id: u8) -> Self {
                Self(id)
            }

            /// Position in the configured list.
            #[must_use]
            pub const fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($label, "({})"), self.0)
            }
        }
    };
}

index_id!(
    /// A suspect, both as a card and as the token a player moves.
    CharacterId,
    "Character"
);

index_id!(
    /// A weapon, both as a card and as a token that sits in rooms.
    WeaponId,
    "Weapon"
);

index_id!(
    /// A room on the board. Doors refer to their room by this id.
    RoomId,
    "Room"
);

/// Any movable piece on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TokenId {
    /// A character token.
    Character(CharacterId),
    /// A weapon token.
    Weapon(WeaponId),
}

impl TokenId {
    /// Check if this is a character token.
    #[must_use]
    pub const fn is_character(self) -> bool {
        matches!(self, TokenId::Character(_))
    }
}

impl From<CharacterId> for TokenId {
    fn from(id: CharacterId) -> Self {
        TokenId::Character(id)
    }
}

impl From<WeaponId> for TokenId {
    fn from(id: WeaponId) -> Self {
        TokenId::Weapon(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index() {
        assert_eq!(RoomId::new(8).index(), 8);
        assert_eq!(CharacterId::new(0).index(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", RoomId(3)), "Room(3)");
        assert_eq!(format!("{}", WeaponId(1)), "Weapon(1)");
    }

    #[test]
    fn test_token_from() {
        let token: TokenId = CharacterId::new(2).into();
        assert_eq!(token, TokenId::Character(CharacterId(2)));
        assert!(token.is_character());

        let token: TokenId = WeaponId::new(2).into();
        assert!(!token.is_character());
    }

    #[test]
    fn test_serialization() {
        let id = TokenId::Weapon(WeaponId(5));
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: TokenId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
