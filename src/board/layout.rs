//! Board layout parsing and the text template.
//!
//! A layout is a block of text, one character per tile (legend in
//! `board::classic`). Parsing yields the tile grid, the rooms with their
//! doors, and the backing template used by the text renderer.
//!
//! ## Template format
//!
//! Row 0 is a header of column digits. Grid row `y` is template row
//! `y + 1`: a 4-character prefix (`"{y:>3}|"`) followed by 2-character
//! cells, so tile `x` starts at column `x * 2 + 4`. The prefix holds at
//! most three digits, so layouts are limited to `MAX_ROWS` rows.

use rustc_hash::FxHashMap;

use super::location::Location;
use super::room::Room;
use super::tile::{Tile, TileGrid};
use crate::core::config::RoomSpec;
use crate::core::RoomId;
use crate::error::LayoutError;

/// Template row of grid row `y`.
pub const fn template_row(y: i32) -> usize {
    (y + 1) as usize
}

/// Template column of grid column `x`.
pub const fn template_column(x: i32) -> usize {
    (x * 2 + 4) as usize
}

/// Tallest layout the row prefix can number.
pub const MAX_ROWS: usize = 999;

/// Characters the template draws with, besides room keys and digits.
pub const TEMPLATE_RESERVED: [char; 4] = ['#', '.', '+', '|'];

const WALL: char = '#';
const PATH: char = '.';
const DOOR: char = '+';

/// Result of parsing a layout.
#[derive(Clone, Debug)]
pub struct ParsedLayout {
    /// The board graph.
    pub grid: TileGrid,
    /// Rooms in `RoomSpec` order, entrances filled in.
    pub rooms: Vec<Room>,
    /// Backing text template, one `Vec<char>` per row.
    pub template: Vec<Vec<char>>,
}

/// Parse `text` against the declared rooms.
///
/// Blank lines and surrounding whitespace are ignored.
pub fn parse_layout(text: &str, room_specs: &[RoomSpec]) -> Result<ParsedLayout, LayoutError> {
    let mut keys: FxHashMap<char, RoomId> = FxHashMap::default();
    for (i, spec) in room_specs.iter().enumerate() {
        if !spec.key.is_ascii_lowercase() {
            return Err(LayoutError::InvalidRoomKey {
                room: spec.name.clone(),
                key: spec.key,
            });
        }
        if keys.insert(spec.key, RoomId(i as u8)).is_some() {
            return Err(LayoutError::DuplicateRoomKey { key: spec.key });
        }
    }

    let rows: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let width = rows.first().map(|r| r.chars().count()).ok_or(LayoutError::Empty)?;
    if rows.len() > MAX_ROWS {
        return Err(LayoutError::TooTall {
            rows: rows.len(),
            max: MAX_ROWS,
        });
    }

    let mut rooms: Vec<Room> = room_specs
        .iter()
        .enumerate()
        .map(|(i, spec)| Room::new(RoomId(i as u8), spec.name.clone(), spec.key))
        .collect();

    let mut tiles = Vec::with_capacity(width * rows.len());
    let mut template = vec![header(width)];

    for (y, row) in rows.iter().enumerate() {
        let found = row.chars().count();
        if found != width {
            return Err(LayoutError::RaggedRow {
                row: y,
                expected: width,
                found,
            });
        }

        let mut line: Vec<char> = format!("{y:>3}|").chars().collect();
        for (x, glyph) in row.chars().enumerate() {
            let at = Location::new(x as i32, y as i32);
            let (tile, drawn) = match glyph {
                WALL => (Tile::Wall, WALL),
                PATH => (Tile::Path, PATH),
                c if c.is_ascii_lowercase() && keys.contains_key(&c) => (Tile::Wall, c),
                c if c.is_ascii_uppercase() => {
                    let room = keys
                        .get(&c.to_ascii_lowercase())
                        .copied()
                        .ok_or(LayoutError::UnknownGlyph { glyph: c, at })?;
                    rooms[room.index()].add_entrance(at);
                    (Tile::Door(room), DOOR)
                }
                c => return Err(LayoutError::UnknownGlyph { glyph: c, at }),
            };
            tiles.push(tile);
            line.push(drawn);
            line.push(' ');
        }
        template.push(line);
    }

    if let Some(room) = rooms.iter().find(|r| r.entrances().is_empty()) {
        return Err(LayoutError::NoEntrance {
            room: room.name().to_string(),
        });
    }

    Ok(ParsedLayout {
        grid: TileGrid::new(width, rows.len(), tiles),
        rooms,
        template,
    })
}

fn header(width: usize) -> Vec<char> {
    let mut line: Vec<char> = "    ".chars().collect();
    for x in 0..width {
        line.extend(char::from_digit((x % 10) as u32, 10));
        line.push(' ');
    }
    line
}
