//! The boundary between the game loop and whoever drives it.
//!
//! A terminal UI, a GUI, a bot or a test script implements `Interaction`.
//! Every request blocks the loop until it returns. The loop never prints or
//! reads input itself.

use std::ops::RangeInclusive;

use rustc_hash::FxHashSet;

use super::event::GameEvent;
use super::player::Player;
use crate::board::{Board, Location};
use crate::core::{CharacterId, RoomId, Suggestion, TurnAction};

/// What a player knows when choosing an action.
#[derive(Clone, Copy, Debug)]
pub struct TurnContext<'a> {
    /// The player to act.
    pub player: &'a Player,
    /// Dice total for this turn.
    pub roll: u32,
    /// The room the player is in, if any.
    pub room: Option<RoomId>,
    /// Where the current room's secret passage leads, if anywhere.
    pub secret_passage: Option<RoomId>,
    /// Tiles within `roll` steps. Occupied tiles are included; moving onto
    /// one is ignored.
    pub reachable: &'a FxHashSet<Location>,
    /// Read-only board.
    pub board: &'a Board,
}

/// Requests and notifications from the game loop.
pub trait Interaction {
    /// How many players will play, within `allowed`.
    fn request_player_count(&mut self, allowed: RangeInclusive<usize>) -> usize;

    /// Which character the player at 1-based `ordinal` takes.
    fn request_character(&mut self, available: &[CharacterId], ordinal: usize) -> CharacterId;

    /// The single action for this turn.
    fn request_action(&mut self, turn: &TurnContext<'_>) -> TurnAction;

    /// A suggestion in `room`, or `None` to skip.
    fn request_suggestion(
        &mut self,
        player: &Player,
        room: RoomId,
        board: &Board,
    ) -> Option<Suggestion>;

    /// Something happened. Ignored by default.
    fn notify(&mut self, _event: &GameEvent) {}
}
