//! # rust-cluedo
//!
//! A murder-mystery deduction board game engine.
//!
//! Players move suspects around a grid of corridors and rooms, make
//! suggestions that other players refute by showing cards, and try to name
//! the hidden {character, weapon, room} solution with an accusation.
//!
//! ## Design Principles
//!
//! 1. **Configuration Over Convention**: the cast, weapons, rooms, secret
//!    passages and layout all come from `GameConfig`. `GameConfig::classic()`
//!    is one such configuration, not a special case.
//!
//! 2. **No I/O in the engine**: every prompt and notification goes through
//!    the `Interaction` trait. A terminal, a GUI or a test script can drive
//!    the same loop.
//!
//! 3. **Deterministic under a seed**: the deal, weapon placement, dice and
//!    refutation choices all draw from one `GameRng`.
//!
//! ## Modules
//!
//! - `core`: ids, seats, actions, RNG, configuration
//! - `board`: tiles, rooms, tokens, pathfinding, text rendering
//! - `cards`: cards, the deck and the deal
//! - `game`: players, the turn state machine, the interaction boundary
//! - `error`: setup and layout errors

pub mod board;
pub mod cards;
pub mod core;
pub mod error;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    CharacterId, GameConfig, GameRng, GameRngState, Hypothesis, PlayerId, PlayerMap, Refutation,
    RoomId, Suggestion, SuggestionRecord, TokenId, TurnAction, WeaponId,
};

pub use crate::board::{Board, Location, Pathfinder, Position, Room, Tile, TileGrid, Token};

pub use crate::cards::{Card, CardCategory, Deck};

pub use crate::error::{LayoutError, SetupError, SetupResult};

pub use crate::game::{
    Game, GameBuilder, GameEvent, GameOutcome, Interaction, Player, TurnContext, TurnPhase,
    WinReason,
};
