//! Players, the turn state machine and the interaction boundary.
//!
//! ## Key Types
//!
//! - `Game`: owns the board, deck, players and RNG; runs turns
//! - `TurnPhase` / `GameOutcome`: where the cycle is, and how it ended
//! - `Player`: seat, character, hand, unrefuted cards
//! - `Interaction`: requests and notifications to whoever drives the game
//! - `GameEvent`: what the loop reports through `Interaction::notify`
//! - `GameBuilder`: non-interactive setup with optional preset solution

pub mod builder;
pub mod engine;
pub mod event;
pub mod interaction;
pub mod player;

pub use builder::GameBuilder;
pub use engine::{Game, GameOutcome, TurnPhase};
pub use event::{GameEvent, WinReason};
pub use interaction::{Interaction, TurnContext};
pub use player::Player;
