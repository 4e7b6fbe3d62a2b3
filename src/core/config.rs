//! Game configuration.
//!
//! A `GameConfig` declares everything a game is built from:
//! - the cast of characters, with glyphs and start squares
//! - the weapons
//! - the rooms and the layout keys that mark them on the board
//! - secret passages
//! - the board layout text
//! - how many players may join, and the RNG seed
//!
//! `GameConfig::classic()` is the standard game.

use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::board::classic::{
    CLASSIC_CHARACTERS, CLASSIC_LAYOUT, CLASSIC_PASSAGES, CLASSIC_ROOMS, CLASSIC_WEAPONS,
};
use crate::board::layout::TEMPLATE_RESERVED;
use crate::board::Location;
use crate::error::{SetupError, SetupResult};

/// Fewest players a game can start with.
pub const MIN_PLAYERS: usize = 2;

/// A suspect and their piece.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSpec {
    /// Display name, also used for lookups.
    pub name: String,
    /// Single-character marker on the text board.
    pub glyph: char,
    /// Start square; must be a corridor tile.
    pub start: Location,
}

/// A room and the key that marks it in the layout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSpec {
    /// Display name, also used for lookups.
    pub name: String,
    /// Lowercase interior key; the uppercase form marks its doors.
    pub key: char,
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Suspects, in id order.
    pub characters: Vec<CharacterSpec>,

    /// Weapons, in id order.
    pub weapons: Vec<String>,

    /// Rooms, in id order.
    pub rooms: Vec<RoomSpec>,

    /// Secret passages by room name; each links both ways.
    pub secret_passages: Vec<(String, String)>,

    /// Board layout text (see `board::classic` for the legend).
    pub layout: String,

    /// Minimum players.
    pub min_players: usize,

    /// Maximum players. `None` means one per character.
    pub max_players: Option<usize>,

    /// Seed for the game RNG.
    pub seed: u64,
}

impl GameConfig {
    /// Create an empty configuration around a layout.
    pub fn new(layout: impl Into<String>) -> Self {
        Self {
            characters: Vec::new(),
            weapons: Vec::new(),
            rooms: Vec::new(),
            secret_passages: Vec::new(),
            layout: layout.into(),
            min_players: MIN_PLAYERS,
            max_players: None,
            seed: 0,
        }
    }

    /// The standard game: six suspects, six weapons, nine rooms.
    #[must_use]
    pub fn classic() -> Self {
        let mut config = Self::new(CLASSIC_LAYOUT).with_player_range(3, 6);
        for (name, glyph, (x, y)) in CLASSIC_CHARACTERS {
            config = config.with_character(name, glyph, Location::new(x, y));
        }
        for (name, key) in CLASSIC_ROOMS {
            config = config.with_room(name, key);
        }
        for name in CLASSIC_WEAPONS {
            config = config.with_weapon(name);
        }
        for (a, b) in CLASSIC_PASSAGES {
            config = config.with_secret_passage(a, b);
        }
        config
    }

    /// Add a character.
    #[must_use]
    pub fn with_character(mut self, name: impl Into<String>, glyph: char, start: Location) -> Self {
        self.characters.push(CharacterSpec {
            name: name.into(),
            glyph,
            start,
        });
        self
    }

    /// Add a weapon.
    #[must_use]
    pub fn with_weapon(mut self, name: impl Into<String>) -> Self {
        self.weapons.push(name.into());
        self
    }

    /// Add a room.
    #[must_use]
    pub fn with_room(mut self, name: impl Into<String>, key: char) -> Self {
        self.rooms.push(RoomSpec {
            name: name.into(),
            key,
        });
        self
    }

    /// Link two rooms with a secret passage.
    #[must_use]
    pub fn with_secret_passage(mut self, a: impl Into<String>, b: impl Into<String>) -> Self {
        self.secret_passages.push((a.into(), b.into()));
        self
    }

    /// Restrict how many players may join.
    #[must_use]
    pub fn with_player_range(mut self, min: usize, max: usize) -> Self {
        self.min_players = min;
        self.max_players = Some(max);
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Allowed player counts.
    #[must_use]
    pub fn player_range(&self) -> RangeInclusive<usize> {
        self.min_players..=self.max_players.unwrap_or(self.characters.len())
    }

    /// Check everything that does not need the parsed board.
    ///
    /// Layout problems and bad start squares are reported when the board is
    /// built.
    pub fn validate(&self) -> SetupResult<()> {
        check_category("character", self.characters.iter().map(|c| c.name.as_str()))?;
        check_category("weapon", self.weapons.iter().map(String::as_str))?;
        check_category("room", self.rooms.iter().map(|r| r.name.as_str()))?;

        if self.weapons.len() > self.rooms.len() {
            return Err(SetupError::TooManyWeapons {
                weapons: self.weapons.len(),
                rooms: self.rooms.len(),
            });
        }

        let range = self.player_range();
        if *range.start() < MIN_PLAYERS
            || range.start() > range.end()
            || *range.end() > self.characters.len()
        {
            return Err(SetupError::InvalidPlayerRange {
                min: *range.start(),
                max: *range.end(),
                characters: self.characters.len(),
            });
        }

        for character in &self.characters {
            let glyph = character.glyph;
            if glyph.is_ascii_lowercase()
                || glyph.is_ascii_digit()
                || glyph.is_whitespace()
                || TEMPLATE_RESERVED.contains(&glyph)
            {
                return Err(SetupError::AmbiguousGlyph {
                    name: character.name.clone(),
                    glyph,
                });
            }
        }

        for (i, first) in self.characters.iter().enumerate() {
            if let Some(second) = self.characters[i + 1..]
                .iter()
                .find(|c| c.start == first.start)
            {
                return Err(SetupError::SharedStart {
                    first: first.name.clone(),
                    second: second.name.clone(),
                    at: first.start,
                });
            }
        }

        Ok(())
    }
}

fn check_category<'a>(
    category: &'static str,
    names: impl ExactSizeIterator<Item = &'a str>,
) -> SetupResult<()> {
    let count = names.len();
    if count == 0 || count > usize::from(u8::MAX) {
        return Err(SetupError::CategorySize { category, count });
    }

    let mut seen = BTreeSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(SetupError::DuplicateName {
                category,
                name: name.to_string(),
            });
        }
    }
    Ok(())
}
