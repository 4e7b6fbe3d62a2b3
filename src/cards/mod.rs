//! Card system: cards, categories and the deck.
//!
//! ## Key Types
//!
//! - `Card`: one piece of evidence, tagged by its variant
//! - `CardCategory`: Character, Weapon or Room
//! - `Deck`: the card universe, the hidden solution and the deal

pub mod card;
pub mod deck;

pub use card::{Card, CardCategory};
pub use deck::Deck;
