//! Rooms: named regions entered through doors.

use std::collections::BTreeSet;

use smallvec::SmallVec;

use super::location::Location;
use crate::core::{RoomId, TokenId};

/// A room on the board.
///
/// Doors point at their room through `Tile::Door(RoomId)`; the room lists
/// its doors by location. Occupants are token ids, owned by the board.
#[derive(Clone, Debug)]
pub struct Room {
    id: RoomId,
    name: String,
    key: char,
    entrances: SmallVec<[Location; 4]>,
    occupants: BTreeSet<TokenId>,
    secret_passage: Option<RoomId>,
}

impl Room {
    /// Create an empty room with no doors yet.
    pub fn new(id: RoomId, name: impl Into<String>, key: char) -> Self {
        Self {
            id,
            name: name.into(),
            key,
            entrances: SmallVec::new(),
            occupants: BTreeSet::new(),
            secret_passage: None,
        }
    }

    /// This room's id.
    #[must_use]
    pub fn id(&self) -> RoomId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Layout key: the lowercase letter marking this room's interior.
    #[must_use]
    pub fn key(&self) -> char {
        self.key
    }

    /// Door locations, in layout (row-major) order.
    #[must_use]
    pub fn entrances(&self) -> &[Location] {
        &self.entrances
    }

    /// Tokens currently inside.
    pub fn occupants(&self) -> impl Iterator<Item = TokenId> + '_ {
        self.occupants.iter().copied()
    }

    /// Check whether `token` is inside.
    #[must_use]
    pub fn contains(&self, token: TokenId) -> bool {
        self.occupants.contains(&token)
    }

    /// Check whether the room is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occupants.is_empty()
    }

    /// The room the secret passage leads to, if any.
    #[must_use]
    pub fn secret_passage(&self) -> Option<RoomId> {
        self.secret_passage
    }

    pub(crate) fn add_entrance(&mut self, door: Location) {
        self.entrances.push(door);
    }

    pub(crate) fn set_secret_passage(&mut self, target: RoomId) {
        self.secret_passage = Some(target);
    }

    pub(crate) fn enter(&mut self, token: TokenId) {
        self.occupants.insert(token);
    }

    pub(crate) fn leave(&mut self, token: TokenId) {
        self.occupants.remove(&token);
    }
}
