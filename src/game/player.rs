//! Players: a seat, a character, a hand and deduction notes.

use im::OrdSet;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::{CharacterId, Hypothesis, PlayerId};

/// One player at the table.
///
/// `unrefuted` starts as every card in the game. Each time somebody shows
/// this player a card, that card is struck off, so what is left is the set
/// of cards that might still be in the solution as far as this player has
/// been told.
#[derive(Clone, Debug)]
pub struct Player {
    id: PlayerId,
    character: CharacterId,
    hand: FxHashSet<Card>,
    eliminated: bool,
    unrefuted: OrdSet<Card>,
}

impl Player {
    /// Create a player with a dealt hand and the full card universe.
    pub fn new(
        id: PlayerId,
        character: CharacterId,
        hand: impl IntoIterator<Item = Card>,
        universe: &[Card],
    ) -> Self {
        Self {
            id,
            character,
            hand: hand.into_iter().collect(),
            eliminated: false,
            unrefuted: universe.iter().copied().collect(),
        }
    }

    /// Seat.
    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// The character token this player moves.
    #[must_use]
    pub fn character(&self) -> CharacterId {
        self.character
    }

    /// Cards dealt to this player.
    #[must_use]
    pub fn hand(&self) -> &FxHashSet<Card> {
        &self.hand
    }

    /// Check whether this player holds `card`.
    #[must_use]
    pub fn holds(&self, card: Card) -> bool {
        self.hand.contains(&card)
    }

    /// Cards in hand that appear in `claim`, ordered character, room, weapon.
    #[must_use]
    pub fn matching_cards(&self, claim: &Hypothesis) -> SmallVec<[Card; 3]> {
        claim
            .cards()
            .into_iter()
            .filter(|card| self.holds(*card))
            .collect()
    }

    /// Check whether a wrong accusation has knocked this player out.
    #[must_use]
    pub fn is_eliminated(&self) -> bool {
        self.eliminated
    }

    /// Cards nobody has shown this player yet.
    #[must_use]
    pub fn unrefuted(&self) -> &OrdSet<Card> {
        &self.unrefuted
    }

    /// Check whether `card` is still unrefuted for this player.
    #[must_use]
    pub fn is_unrefuted(&self, card: Card) -> bool {
        self.unrefuted.contains(&card)
    }

    pub(crate) fn eliminate(&mut self) {
        self.eliminated = true;
    }

    /// Strike `card` off. Returns `false` if it was already struck.
    pub(crate) fn refute(&mut self, card: Card) -> bool {
        self.unrefuted.remove(&card).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{RoomId, WeaponId};

    fn universe() -> Vec<Card> {
        vec![
            Card::Character(CharacterId(0)),
            Card::Character(CharacterId(1)),
            Card::Room(RoomId(0)),
            Card::Room(RoomId(1)),
            Card::Weapon(WeaponId(0)),
            Card::Weapon(WeaponId(1)),
        ]
    }

    fn player() -> Player {
        Player::new(
            PlayerId(0),
            CharacterId(0),
            [Card::Room(RoomId(1)), Card::Weapon(WeaponId(0))],
            &universe(),
        )
    }

    #[test]
    fn test_new_player() {
        let p = player();
        assert_eq!(p.id(), PlayerId(0));
        assert!(!p.is_eliminated());
        assert_eq!(p.unrefuted().len(), 6);
        assert!(p.holds(Card::Room(RoomId(1))));
        assert!(!p.holds(Card::Room(RoomId(0))));
    }

    #[test]
    fn test_matching_cards_order() {
        let p = player();
        let claim = Hypothesis::new(CharacterId(1), WeaponId(0), RoomId(1));
        let matches = p.matching_cards(&claim);
        assert_eq!(
            matches.as_slice(),
            &[Card::Room(RoomId(1)), Card::Weapon(WeaponId(0))]
        );

        let miss = Hypothesis::new(CharacterId(1), WeaponId(1), RoomId(0));
        assert!(p.matching_cards(&miss).is_empty());
    }

    #[test]
    fn test_refute_shrinks_unrefuted() {
        let mut p = player();
        assert!(p.refute(Card::Character(CharacterId(1))));
        assert!(!p.is_unrefuted(Card::Character(CharacterId(1))));
        assert_eq!(p.unrefuted().len(), 5);

        assert!(!p.refute(Card::Character(CharacterId(1))));
        assert_eq!(p.unrefuted().len(), 5);
    }

    #[test]
    fn test_eliminate() {
        let mut p = player();
        p.eliminate();
        assert!(p.is_eliminated());
        // Hand is untouched
        assert_eq!(p.hand().len(), 2);
    }
}
