//! The card universe, the hidden solution and the deal.
//!
//! A `Deck` holds one card per character, room and weapon. Building one
//! withholds a solution triple (one card of each category); `deal` shuffles
//! the rest and hands them out round-robin, so solution cards never reach a
//! hand and every other card lands in exactly one.

use tracing::debug;

use super::card::Card;
use crate::core::{CharacterId, GameRng, Hypothesis, PlayerMap, RoomId, WeaponId};

/// Full deck with its withheld solution.
#[derive(Clone, Debug)]
pub struct Deck {
    cards: Vec<Card>,
    solution: Hypothesis,
}

impl Deck {
    /// Build the universe and draw a random solution.
    ///
    /// Panics if any category is empty.
    pub fn new(characters: usize, weapons: usize, rooms: usize, rng: &mut GameRng) -> Self {
        assert!(
            characters > 0 && weapons > 0 && rooms > 0,
            "Every category needs at least one card"
        );

        let solution = Hypothesis::new(
            CharacterId(rng.gen_range_usize(0..characters) as u8),
            WeaponId(rng.gen_range_usize(0..weapons) as u8),
            RoomId(rng.gen_range_usize(0..rooms) as u8),
        );

        Self::with_solution(characters, weapons, rooms, solution)
    }

    /// Build the universe around a known solution.
    pub fn with_solution(
        characters: usize,
        weapons: usize,
        rooms: usize,
        solution: Hypothesis,
    ) -> Self {
        assert!(solution.character.index() < characters, "Solution character out of range");
        assert!(solution.weapon.index() < weapons, "Solution weapon out of range");
        assert!(solution.room.index() < rooms, "Solution room out of range");

        let cards = (0..characters as u8)
            .map(|i| Card::Character(CharacterId(i)))
            .chain((0..rooms as u8).map(|i| Card::Room(RoomId(i))))
            .chain((0..weapons as u8).map(|i| Card::Weapon(WeaponId(i))))
            .collect();

        Self { cards, solution }
    }

    /// Every card in the game, solution included.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The hidden solution.
    #[must_use]
    pub fn solution(&self) -> &Hypothesis {
        &self.solution
    }

    /// Check whether `card` belongs to the solution.
    #[must_use]
    pub fn is_solution(&self, card: Card) -> bool {
        self.solution.contains(card)
    }

    /// Check an accusation: every accused card must be in the solution.
    #[must_use]
    pub fn accusation_matches(&self, accusation: &Hypothesis) -> bool {
        accusation.cards().iter().all(|card| self.is_solution(*card))
    }

    /// Shuffle the non-solution cards and deal them round-robin.
    ///
    /// Seat 0 receives the first card, so earlier seats may hold one more
    /// card than later seats.
    pub fn deal(&self, player_count: usize, rng: &mut GameRng) -> PlayerMap<Vec<Card>> {
        let mut remaining: Vec<Card> = self
            .cards
            .iter()
            .copied()
            .filter(|card| !self.is_solution(*card))
            .collect();
        rng.shuffle(&mut remaining);

        let mut hands: PlayerMap<Vec<Card>> = PlayerMap::new(player_count, |_| Vec::new());
        let seats: Vec<_> = hands.iter().map(|(seat, _)| seat).collect();
        for (card, seat) in remaining.into_iter().zip(seats.iter().cycle()) {
            hands[*seat].push(card);
        }

        debug!(
            player_count,
            dealt = self.cards.len() - 3,
            "dealt cards"
        );
        hands
    }
}
