//! Cards and their categories.
//!
//! A card is one of the three kinds of evidence. The enum variant is the
//! category tag, so a card can never disagree with its category.

use serde::{Deserialize, Serialize};

use crate::core::{CharacterId, RoomId, WeaponId};

/// Evidence category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CardCategory {
    /// A suspect.
    Character,
    /// A murder weapon.
    Weapon,
    /// A crime scene.
    Room,
}

impl CardCategory {
    /// Every category.
    pub const ALL: [CardCategory; 3] = [
        CardCategory::Character,
        CardCategory::Weapon,
        CardCategory::Room,
    ];
}

/// A single card in the deck.
///
/// ```
/// use rust_cluedo::cards::{Card, CardCategory};
/// use rust_cluedo::core::RoomId;
///
/// let kitchen = Card::Room(RoomId::new(0));
/// assert_eq!(kitchen.category(), CardCategory::Room);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Card {
    /// Character card.
    Character(CharacterId),
    /// Weapon card.
    Weapon(WeaponId),
    /// Room card.
    Room(RoomId),
}

impl Card {
    /// The category this card belongs to.
    #[must_use]
    pub const fn category(self) -> CardCategory {
        match self {
            Card::Character(_) => CardCategory::Character,
            Card::Weapon(_) => CardCategory::Weapon,
            Card::Room(_) => CardCategory::Room,
        }
    }
}

impl From<CharacterId> for Card {
    fn from(id: CharacterId) -> Self {
        Card::Character(id)
    }
}

impl From<WeaponId> for Card {
    fn from(id: WeaponId) -> Self {
        Card::Weapon(id)
    }
}

impl From<RoomId> for Card {
    fn from(id: RoomId) -> Self {
        Card::Room(id)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Card::Character(id) => write!(f, "{id}"),
            Card::Weapon(id) => write!(f, "{id}"),
            Card::Room(id) => write!(f, "{id}"),
        }
    }
}
