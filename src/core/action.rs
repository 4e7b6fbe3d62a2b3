//! Turn actions and the claims players make.
//!
//! Each turn a player picks exactly one `TurnAction`. After it resolves, a
//! player standing in a room may follow up with a `Suggestion`; the room of
//! a suggestion is always the room the player is in, so it is not part of
//! the request.

use serde::{Deserialize, Serialize};

use super::entity::{CharacterId, RoomId, WeaponId};
use super::player::PlayerId;
use crate::board::Location;
use crate::cards::Card;

/// A full {character, weapon, room} triple.
///
/// Used for the hidden solution and for accusations. All three categories
/// are always present.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hypothesis {
    /// The suspect.
    pub character: CharacterId,
    /// The weapon.
    pub weapon: WeaponId,
    /// The room.
    pub room: RoomId,
}

impl Hypothesis {
    /// Create a new hypothesis.
    #[must_use]
    pub const fn new(character: CharacterId, weapon: WeaponId, room: RoomId) -> Self {
        Self {
            character,
            weapon,
            room,
        }
    }

    /// The three cards, ordered character, room, weapon.
    #[must_use]
    pub fn cards(&self) -> [Card; 3] {
        [
            Card::Character(self.character),
            Card::Room(self.room),
            Card::Weapon(self.weapon),
        ]
    }

    /// Check whether `card` is one of the three cards.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        match card {
            Card::Character(id) => self.character == id,
            Card::Weapon(id) => self.weapon == id,
            Card::Room(id) => self.room == id,
        }
    }
}

/// Suggested character and weapon; the room is implied by the suggester.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suspect to summon into the room.
    pub character: CharacterId,
    /// The weapon to bring into the room.
    pub weapon: WeaponId,
}

impl Suggestion {
    /// Create a new suggestion.
    #[must_use]
    pub const fn new(character: CharacterId, weapon: WeaponId) -> Self {
        Self { character, weapon }
    }

    /// Complete the suggestion with the room it is made in.
    #[must_use]
    pub const fn in_room(self, room: RoomId) -> Hypothesis {
        Hypothesis::new(self.character, self.weapon, room)
    }
}

/// The one action a player takes on their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnAction {
    /// Walk to a tile within the dice roll.
    Move(Location),
    /// Take the current room's secret passage.
    SecretPassage,
    /// Accuse; a wrong accusation eliminates the player.
    Accuse(Hypothesis),
    /// Do not move.
    Stay,
}

/// How a suggestion was answered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Refutation {
    /// `by` showed `card` to the suggester.
    Refuted {
        /// The refuting player.
        by: PlayerId,
        /// The revealed card (seen only by the suggester).
        card: Card,
    },
    /// Nobody held a matching card.
    Unrefuted,
}

impl Refutation {
    /// The refuting player, if any.
    #[must_use]
    pub fn refuter(&self) -> Option<PlayerId> {
        match self {
            Refutation::Refuted { by, .. } => Some(*by),
            Refutation::Unrefuted => None,
        }
    }
}

/// A resolved suggestion, kept in the public history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionRecord {
    /// Turn number when the suggestion was made.
    pub turn: u32,

    /// The suggesting player.
    pub suggester: PlayerId,

    /// The full claim, including the room.
    pub claim: Hypothesis,

    /// The outcome.
    pub refutation: Refutation,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triple() -> Hypothesis {
        Hypothesis::new(CharacterId(1), WeaponId(2), RoomId(3))
    }

    #[test]
    fn test_hypothesis_cards() {
        let cards = triple().cards();
        assert_eq!(
            cards,
            [
                Card::Character(CharacterId(1)),
                Card::Room(RoomId(3)),
                Card::Weapon(WeaponId(2)),
            ]
        );
    }

    #[test]
    fn test_hypothesis_contains_by_category() {
        let h = triple();
        assert!(h.contains(Card::Weapon(WeaponId(2))));
        // Same index, wrong category
        assert!(!h.contains(Card::Room(RoomId(2))));
    }

    #[test]
    fn test_suggestion_in_room() {
        let s = Suggestion::new(CharacterId(1), WeaponId(2));
        assert_eq!(s.in_room(RoomId(3)), triple());
    }

    #[test]
    fn test_refuter() {
        let refuted = Refutation::Refuted {
            by: PlayerId(2),
            card: Card::Room(RoomId(0)),
        };
        assert_eq!(refuted.refuter(), Some(PlayerId(2)));
        assert_eq!(Refutation::Unrefuted.refuter(), None);
    }

    #[test]
    fn test_action_serialization() {
        let action = TurnAction::Accuse(triple());
        let json = serde_json::to_string(&action).unwrap();
        let deserialized: TurnAction = serde_json::from_str(&json).unwrap();
        assert_eq!(action, deserialized);
    }
}
