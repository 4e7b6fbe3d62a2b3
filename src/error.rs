//! Error types for board loading and game setup.
//!
//! Play itself never fails: illegal moves are ignored, unreachable tiles
//! and missing names are `None`. Only building a board or a game can go
//! wrong, and those failures are reported here.

use thiserror::Error;

use crate::board::Location;

/// Problems found while parsing a board layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The layout has no rows.
    #[error("layout is empty")]
    Empty,

    /// More rows than the text template can number.
    #[error("layout has {rows} rows, at most {max} are supported")]
    TooTall {
        /// Rows in the layout.
        rows: usize,
        /// The limit.
        max: usize,
    },

    /// A row's width differs from the first row.
    #[error("row {row} is {found} tiles wide, expected {expected}")]
    RaggedRow {
        /// Offending row.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },

    /// A character that is neither wall, path nor a declared room key.
    #[error("unknown layout glyph {glyph:?} at {at}")]
    UnknownGlyph {
        /// The character.
        glyph: char,
        /// Where it was found.
        at: Location,
    },

    /// Room keys must be lowercase ASCII letters.
    #[error("room {room:?} has invalid layout key {key:?}")]
    InvalidRoomKey {
        /// Room name.
        room: String,
        /// The rejected key.
        key: char,
    },

    /// Two rooms share a layout key.
    #[error("layout key {key:?} is used by more than one room")]
    DuplicateRoomKey {
        /// The shared key.
        key: char,
    },

    /// A declared room has no door in the layout.
    #[error("room {room:?} has no entrance")]
    NoEntrance {
        /// Room name.
        room: String,
    },

    /// A secret passage names a room that was not declared.
    #[error("secret passage refers to unknown room {room:?}")]
    UnknownRoom {
        /// The unknown name.
        room: String,
    },
}

/// Problems with a game configuration or the choices made during setup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    /// The board layout could not be loaded.
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// A card category has no entries, or more than 255.
    #[error("{category} count {count} is outside 1..=255")]
    CategorySize {
        /// Which category.
        category: &'static str,
        /// How many were configured.
        count: usize,
    },

    /// Two entries in one category share a name.
    #[error("duplicate {category} name {name:?}")]
    DuplicateName {
        /// Which category.
        category: &'static str,
        /// The repeated name.
        name: String,
    },

    /// Weapons are placed one per room, so there cannot be more weapons.
    #[error("{weapons} weapons cannot be placed in {rooms} rooms")]
    TooManyWeapons {
        /// Configured weapons.
        weapons: usize,
        /// Configured rooms.
        rooms: usize,
    },

    /// The allowed player range is empty or does not fit the characters.
    #[error("player range {min}..={max} is invalid for {characters} characters")]
    InvalidPlayerRange {
        /// Minimum players.
        min: usize,
        /// Maximum players.
        max: usize,
        /// Configured characters.
        characters: usize,
    },

    /// The requested number of players is outside the allowed range.
    #[error("{requested} players requested, expected {min}..={max}")]
    PlayerCount {
        /// Requested players.
        requested: usize,
        /// Minimum players.
        min: usize,
        /// Maximum players.
        max: usize,
    },

    /// A character was picked that is unknown or already taken.
    #[error("character {name:?} is not available")]
    CharacterUnavailable {
        /// The character's name, or its index if unknown.
        name: String,
    },

    /// A character's start square is not a corridor tile.
    #[error("{name:?} starts at {at}, which is not a path tile")]
    BadStart {
        /// Character name.
        name: String,
        /// Configured start.
        at: Location,
    },

    /// Two characters share a start square.
    #[error("{first:?} and {second:?} both start at {at}")]
    SharedStart {
        /// First character.
        first: String,
        /// Second character.
        second: String,
        /// The shared square.
        at: Location,
    },

    /// A glyph would be confused with the board template.
    #[error("glyph {glyph:?} for {name:?} clashes with the board template")]
    AmbiguousGlyph {
        /// Character name.
        name: String,
        /// The glyph.
        glyph: char,
    },

    /// A preset solution names a card the game does not have.
    #[error("preset solution {card} is not in the deck")]
    SolutionOutOfRange {
        /// The offending card.
        card: String,
    },
}

/// Result alias for setup.
pub type SetupResult<T> = Result<T, SetupError>;
