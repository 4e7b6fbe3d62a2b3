//! Movable pieces and where they are.

use serde::{Deserialize, Serialize};

use super::location::Location;
use crate::core::{CharacterId, RoomId, TokenId, WeaponId};

/// Where a token is. Exactly one of the two, always.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// Standing on a corridor tile.
    OnBoard(Location),
    /// Inside a room.
    InRoom {
        /// The room.
        room: RoomId,
        /// The door the token walked in through. `None` when it was moved
        /// in by a suggestion or a secret passage.
        via: Option<Location>,
    },
}

impl Position {
    /// The room, if the token is inside one.
    #[must_use]
    pub const fn room(self) -> Option<RoomId> {
        match self {
            Position::InRoom { room, .. } => Some(room),
            Position::OnBoard(_) => None,
        }
    }

    /// The board tile, if the token is on the board.
    #[must_use]
    pub const fn location(self) -> Option<Location> {
        match self {
            Position::OnBoard(loc) => Some(loc),
            Position::InRoom { .. } => None,
        }
    }
}

/// What kind of piece a token is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// A suspect's piece, drawn on the text board with `glyph`.
    Character {
        /// Identity.
        id: CharacterId,
        /// Single-character marker for the text board.
        glyph: char,
    },
    /// A weapon piece.
    Weapon {
        /// Identity.
        id: WeaponId,
    },
}

/// A piece on the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    name: String,
    kind: TokenKind,
    position: Position,
}

impl Token {
    /// A character token standing at `start`.
    pub fn character(id: CharacterId, name: impl Into<String>, glyph: char, start: Location) -> Self {
        Self {
            name: name.into(),
            kind: TokenKind::Character { id, glyph },
            position: Position::OnBoard(start),
        }
    }

    /// A weapon token lying in `room`.
    pub fn weapon(id: WeaponId, name: impl Into<String>, room: RoomId) -> Self {
        Self {
            name: name.into(),
            kind: TokenKind::Weapon { id },
            position: Position::InRoom { room, via: None },
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Kind and identity.
    #[must_use]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Id usable for room occupancy.
    #[must_use]
    pub fn id(&self) -> TokenId {
        match self.kind {
            TokenKind::Character { id, .. } => TokenId::Character(id),
            TokenKind::Weapon { id } => TokenId::Weapon(id),
        }
    }

    /// The text-board glyph, for character tokens.
    #[must_use]
    pub fn glyph(&self) -> Option<char> {
        match self.kind {
            TokenKind::Character { glyph, .. } => Some(glyph),
            TokenKind::Weapon { .. } => None,
        }
    }

    /// Current position.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Shorthand for `position().room()`.
    #[must_use]
    pub fn room(&self) -> Option<RoomId> {
        self.position.room()
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }
}
