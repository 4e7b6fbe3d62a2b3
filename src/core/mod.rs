//! Core types: ids, seats, actions, RNG, configuration.
//!
//! These are shared by the board, the cards and the game loop.

pub mod action;
pub mod config;
pub mod entity;
pub mod player;
pub mod rng;

pub use action::{Hypothesis, Refutation, Suggestion, SuggestionRecord, TurnAction};
pub use config::{CharacterSpec, GameConfig, RoomSpec};
pub use entity::{CharacterId, RoomId, TokenId, WeaponId};
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
