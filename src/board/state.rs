//! The board: tiles, rooms and token positions.
//!
//! The board is the only place token positions change. It offers two
//! mutation entry points:
//!
//! - `move_character`: a walking move. Ignored if the destination is a
//!   wall or another character stands there.
//! - `move_token_to_room`: an unconditional relocation, used by
//!   suggestions and secret passages.
//!
//! Everything else is a read-only query.

use std::fmt;

use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use super::layout::{parse_layout, template_column, template_row};
use super::location::Location;
use super::pathfinder::Pathfinder;
use super::room::Room;
use super::tile::{Tile, TileGrid};
use super::token::{Position, Token};
use crate::cards::Card;
use crate::core::{CharacterId, GameConfig, GameRng, RoomId, TokenId, WeaponId};
use crate::error::{LayoutError, SetupError, SetupResult};

/// Board state for one game.
#[derive(Clone, Debug)]
pub struct Board {
    grid: TileGrid,
    rooms: Vec<Room>,
    characters: Vec<Token>,
    weapons: Vec<Token>,
    template: Vec<Vec<char>>,
}

impl Board {
    /// Build the board described by `config`.
    ///
    /// Characters stand on their start squares; each weapon is dropped into
    /// a different, randomly chosen room.
    pub fn new(config: &GameConfig, rng: &mut GameRng) -> SetupResult<Self> {
        config.validate()?;
        let parsed = parse_layout(&config.layout, &config.rooms)?;
        let mut rooms = parsed.rooms;

        for (a, b) in &config.secret_passages {
            let a = find_room(&rooms, a)?;
            let b = find_room(&rooms, b)?;
            rooms[a.index()].set_secret_passage(b);
            rooms[b.index()].set_secret_passage(a);
        }

        let mut characters = Vec::with_capacity(config.characters.len());
        for (i, spec) in config.characters.iter().enumerate() {
            if parsed.grid.get(spec.start) != Tile::Path {
                return Err(SetupError::BadStart {
                    name: spec.name.clone(),
                    at: spec.start,
                });
            }
            characters.push(Token::character(
                CharacterId(i as u8),
                spec.name.clone(),
                spec.glyph,
                spec.start,
            ));
        }

        let mut free_rooms: Vec<RoomId> = rooms.iter().map(Room::id).collect();
        let mut weapons = Vec::with_capacity(config.weapons.len());
        for (i, name) in config.weapons.iter().enumerate() {
            let room = rng
                .take_one(&mut free_rooms)
                .ok_or(SetupError::TooManyWeapons {
                    weapons: config.weapons.len(),
                    rooms: rooms.len(),
                })?;
            let weapon = Token::weapon(WeaponId(i as u8), name.clone(), room);
            rooms[room.index()].enter(weapon.id());
            debug!(weapon = %name, room = rooms[room.index()].name(), "placed weapon");
            weapons.push(weapon);
        }

        Ok(Self {
            grid: parsed.grid,
            rooms,
            characters,
            weapons,
            template: parsed.template,
        })
    }

    // === Tiles and paths ===

    /// The tile graph.
    #[must_use]
    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// The tile at `loc` (`Tile::Wall` off the grid).
    #[must_use]
    pub fn tile(&self, loc: Location) -> Tile {
        self.grid.get(loc)
    }

    /// Shortest-path queries over this board.
    #[must_use]
    pub fn pathfinder(&self) -> Pathfinder<'_> {
        Pathfinder::new(&self.grid)
    }

    /// Steps a character needs to reach `destination`, or `None`.
    ///
    /// From inside a room, this is the shortest distance from any of the
    /// room's entrances.
    #[must_use]
    pub fn path_length(&self, character: CharacterId, destination: Location) -> Option<u32> {
        let paths = self.pathfinder();
        match self.character(character).position() {
            Position::OnBoard(from) => paths.distance(from, destination),
            Position::InRoom { room, .. } => self.rooms[room.index()]
                .entrances()
                .iter()
                .filter_map(|door| paths.distance(*door, destination))
                .min(),
        }
    }

    /// Tiles a character could reach with `budget` steps, ignoring who is
    /// standing where.
    #[must_use]
    pub fn reachable_tiles(&self, character: CharacterId, budget: u32) -> FxHashSet<Location> {
        let paths = self.pathfinder();
        match self.character(character).position() {
            Position::OnBoard(from) => paths.reachable_within(from, budget),
            Position::InRoom { room, .. } => self.rooms[room.index()]
                .entrances()
                .iter()
                .flat_map(|door| paths.reachable_within(*door, budget))
                .collect(),
        }
    }

    // === Rooms ===

    /// A room by id.
    #[must_use]
    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.index()]
    }

    /// All rooms in id order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }

    /// Find a room by name.
    #[must_use]
    pub fn room_by_name(&self, name: &str) -> Option<RoomId> {
        self.rooms.iter().find(|r| r.name() == name).map(Room::id)
    }

    /// Where a room's secret passage leads.
    #[must_use]
    pub fn secret_passage(&self, room: RoomId) -> Option<RoomId> {
        self.room(room).secret_passage()
    }

    /// The room a character is in, if any.
    #[must_use]
    pub fn room_of(&self, character: CharacterId) -> Option<RoomId> {
        self.character(character).room()
    }

    // === Tokens ===

    /// A character token by id.
    #[must_use]
    pub fn character(&self, id: CharacterId) -> &Token {
        &self.characters[id.index()]
    }

    /// All character tokens in id order.
    pub fn characters(&self) -> impl Iterator<Item = &Token> {
        self.characters.iter()
    }

    /// A weapon token by id.
    #[must_use]
    pub fn weapon(&self, id: WeaponId) -> &Token {
        &self.weapons[id.index()]
    }

    /// All weapon tokens in id order.
    pub fn weapons(&self) -> impl Iterator<Item = &Token> {
        self.weapons.iter()
    }

    /// Any token by id.
    #[must_use]
    pub fn token(&self, id: TokenId) -> &Token {
        match id {
            TokenId::Character(c) => self.character(c),
            TokenId::Weapon(w) => self.weapon(w),
        }
    }

    /// Find a character by name.
    #[must_use]
    pub fn character_by_name(&self, name: &str) -> Option<CharacterId> {
        self.characters
            .iter()
            .position(|t| t.name() == name)
            .map(|i| CharacterId(i as u8))
    }

    /// Find a weapon by name.
    #[must_use]
    pub fn weapon_by_name(&self, name: &str) -> Option<WeaponId> {
        self.weapons
            .iter()
            .position(|t| t.name() == name)
            .map(|i| WeaponId(i as u8))
    }

    /// Display name of a card.
    #[must_use]
    pub fn card_name(&self, card: Card) -> &str {
        match card {
            Card::Character(id) => self.character(id).name(),
            Card::Weapon(id) => self.weapon(id).name(),
            Card::Room(id) => self.room(id).name(),
        }
    }

    /// Check whether a character is standing on `loc`.
    ///
    /// Characters inside rooms never occupy a tile.
    #[must_use]
    pub fn is_occupied_by_character(&self, loc: Location) -> bool {
        self.characters
            .iter()
            .any(|t| t.position() == Position::OnBoard(loc))
    }

    // === Movement ===

    /// Walk a character to `destination`.
    ///
    /// Does nothing and returns `false` if the destination is a wall or
    /// another character stands on it. Path distance is not checked here.
    pub fn move_character(&mut self, character: CharacterId, destination: Location) -> bool {
        let tile = self.tile(destination);
        let token = TokenId::Character(character);

        let blocked = self
            .characters
            .iter()
            .any(|t| t.id() != token && t.position() == Position::OnBoard(destination));
        if !tile.is_traversable() || blocked {
            trace!(%character, %destination, "ignored illegal move");
            return false;
        }

        self.leave_room(token);
        let position = match tile {
            Tile::Door(room) => {
                self.rooms[room.index()].enter(token);
                Position::InRoom {
                    room,
                    via: Some(destination),
                }
            }
            _ => Position::OnBoard(destination),
        };
        self.characters[character.index()].set_position(position);

        debug!(%character, %destination, room = ?position.room(), "moved character");
        true
    }

    /// Put any token into `room`, wherever it was.
    pub fn move_token_to_room(&mut self, token: impl Into<TokenId>, room: RoomId) {
        let token = token.into();
        self.leave_room(token);
        self.rooms[room.index()].enter(token);
        self.token_mut(token)
            .set_position(Position::InRoom { room, via: None });

        debug!(?token, room = self.rooms[room.index()].name(), "moved token to room");
    }

    fn leave_room(&mut self, token: TokenId) {
        if let Some(room) = self.token(token).room() {
            self.rooms[room.index()].leave(token);
        }
    }

    fn token_mut(&mut self, id: TokenId) -> &mut Token {
        match id {
            TokenId::Character(c) => &mut self.characters[c.index()],
            TokenId::Weapon(w) => &mut self.weapons[w.index()],
        }
    }

    // === Text output ===

    /// The text board, one string per template row, with every character
    /// on the board spliced in at row `y + 1`, column `x * 2 + 4`.
    #[must_use]
    pub fn render_rows(&self) -> Vec<String> {
        let mut rows = self.template.clone();
        for token in &self.characters {
            if let (Position::OnBoard(loc), Some(glyph)) = (token.position(), token.glyph()) {
                if let Some(cell) = rows
                    .get_mut(template_row(loc.y))
                    .and_then(|row| row.get_mut(template_column(loc.x)))
                {
                    *cell = glyph;
                }
            }
        }
        rows.into_iter().map(|row| row.into_iter().collect()).collect()
    }

    /// One line per occupied room: `"Name: token, token"`.
    #[must_use]
    pub fn room_summary(&self) -> String {
        let mut out = String::new();
        for room in self.rooms.iter().filter(|r| !r.is_empty()) {
            let names: Vec<&str> = room.occupants().map(|t| self.token(t).name()).collect();
            out.push_str(room.name());
            out.push_str(": ");
            out.push_str(&names.join(", "));
            out.push('\n');
        }
        out
    }
}

fn find_room(rooms: &[Room], name: &str) -> Result<RoomId, LayoutError> {
    rooms
        .iter()
        .find(|r| r.name() == name)
        .map(Room::id)
        .ok_or_else(|| LayoutError::UnknownRoom {
            room: name.to_string(),
        })
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.render_rows() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two rooms joined by a corridor, doors at (2,0) and (2,4).
    fn small_config() -> GameConfig {
        GameConfig::new(
            "
            hhH..
            #...#
            #...#
            #...#
            ssS..
            ",
        )
        .with_character("Red", 'R', Location::new(3, 0))
        .with_character("Blue", 'B', Location::new(1, 2))
        .with_weapon("Rope")
        .with_room("Hall", 'h')
        .with_room("Study", 's')
        .with_secret_passage("Hall", "Study")
    }

    fn small_board() -> Board {
        Board::new(&small_config(), &mut GameRng::new(1)).unwrap()
    }

    const RED: CharacterId = CharacterId(0);
    const BLUE: CharacterId = CharacterId(1);

    #[test]
    fn test_weapons_start_in_distinct_rooms() {
        let board = Board::new(&GameConfig::classic(), &mut GameRng::new(7)).unwrap();

        let mut rooms: Vec<_> = board.weapons().map(|w| w.room()).collect();
        assert!(rooms.iter().all(Option::is_some));
        rooms.sort();
        rooms.dedup();
        assert_eq!(rooms.len(), 6);

        for weapon in board.weapons() {
            let room = weapon.room().unwrap();
            assert!(board.room(room).contains(weapon.id()));
        }
    }

    #[test]
    fn test_secret_passage_both_ways() {
        let board = small_board();
        let hall = board.room_by_name("Hall").unwrap();
        let study = board.room_by_name("Study").unwrap();
        assert_eq!(board.secret_passage(hall), Some(study));
        assert_eq!(board.secret_passage(study), Some(hall));
    }

    #[test]
    fn test_lookup_by_name() {
        let board = small_board();
        assert_eq!(board.character_by_name("Blue"), Some(BLUE));
        assert_eq!(board.weapon_by_name("Rope"), Some(WeaponId(0)));
        assert_eq!(board.character_by_name("Green"), None);
        assert_eq!(board.weapon_by_name("Dagger"), None);
        assert_eq!(board.room_by_name("Cellar"), None);
    }

    #[test]
    fn test_move_onto_path() {
        let mut board = small_board();
        assert!(board.move_character(RED, Location::new(3, 2)));
        assert_eq!(board.character(RED).position(), Position::OnBoard(Location::new(3, 2)));
        assert!(board.is_occupied_by_character(Location::new(3, 2)));
        assert!(!board.is_occupied_by_character(Location::new(3, 0)));
    }

    #[test]
    fn test_move_into_wall_is_ignored() {
        let mut board = small_board();
        assert!(!board.move_character(RED, Location::new(0, 1)));
        assert!(!board.move_character(RED, Location::new(0, 0)));
        assert!(!board.move_character(RED, Location::new(40, 40)));
        assert_eq!(board.character(RED).position(), Position::OnBoard(Location::new(3, 0)));
    }

    #[test]
    fn test_move_onto_occupied_is_ignored() {
        let mut board = small_board();
        assert!(!board.move_character(RED, Location::new(1, 2)));
        assert_eq!(board.character(RED).position(), Position::OnBoard(Location::new(3, 0)));
    }

    #[test]
    fn test_move_through_door_enters_room() {
        let mut board = small_board();
        let hall = board.room_by_name("Hall").unwrap();

        assert!(board.move_character(RED, Location::new(2, 0)));
        assert_eq!(board.room_of(RED), Some(hall));
        assert_eq!(
            board.character(RED).position(),
            Position::InRoom {
                room: hall,
                via: Some(Location::new(2, 0))
            }
        );
        assert!(board.room(hall).contains(TokenId::Character(RED)));
        // In a room, not on the door tile
        assert!(!board.is_occupied_by_character(Location::new(2, 0)));

        // Walking out leaves the room
        assert!(board.move_character(RED, Location::new(2, 1)));
        assert_eq!(board.room_of(RED), None);
        assert!(!board.room(hall).contains(TokenId::Character(RED)));
    }

    #[test]
    fn test_two_characters_can_share_a_room() {
        let mut board = small_board();
        assert!(board.move_character(RED, Location::new(2, 0)));
        assert!(board.move_character(BLUE, Location::new(2, 0)));
        assert_eq!(board.room_of(BLUE), board.room_of(RED));
    }

    #[test]
    fn test_move_token_to_room_is_unconditional() {
        let mut board = small_board();
        let study = board.room_by_name("Study").unwrap();
        let hall = board.room_by_name("Hall").unwrap();

        board.move_token_to_room(RED, study);
        assert_eq!(board.room_of(RED), Some(study));

        board.move_token_to_room(RED, hall);
        assert!(!board.room(study).contains(TokenId::Character(RED)));
        assert!(board.room(hall).contains(TokenId::Character(RED)));

        board.move_token_to_room(WeaponId(0), study);
        assert_eq!(board.weapon(WeaponId(0)).room(), Some(study));
        assert_eq!(
            board.rooms().filter(|r| r.contains(TokenId::Weapon(WeaponId(0)))).count(),
            1
        );
    }

    #[test]
    fn test_path_length_from_board_and_room() {
        let mut board = small_board();
        // Red at (3,0) to (3,4)
        assert_eq!(board.path_length(RED, Location::new(3, 4)), Some(4));

        let study = board.room_by_name("Study").unwrap();
        board.move_token_to_room(RED, study);
        // From the study door at (2,4)
        assert_eq!(board.path_length(RED, Location::new(3, 4)), Some(1));
        assert_eq!(board.path_length(RED, Location::new(0, 0)), None);
    }

    #[test]
    fn test_reachable_from_room_uses_entrances() {
        let mut board = small_board();
        let hall = board.room_by_name("Hall").unwrap();
        board.move_token_to_room(RED, hall);

        let reach = board.reachable_tiles(RED, 1);
        assert!(reach.contains(&Location::new(2, 0)));
        assert!(reach.contains(&Location::new(2, 1)));
        assert!(reach.contains(&Location::new(3, 0)));
        assert!(!reach.contains(&Location::new(2, 2)));
    }

    #[test]
    fn test_render_splices_glyphs() {
        let board = small_board();
        let rows = board.render_rows();

        assert_eq!(rows[1], "  0|h h + R . ");
        assert_eq!(rows[3], "  2|# B . . # ");
        assert!(board.to_string().starts_with("    0 1 2 3 4 \n"));
    }

    #[test]
    fn test_render_omits_tokens_in_rooms() {
        let mut board = small_board();
        let hall = board.room_by_name("Hall").unwrap();
        board.move_token_to_room(RED, hall);

        assert!(!board.to_string().contains('R'));
    }

    #[test]
    fn test_room_summary() {
        let mut board = small_board();
        let study = board.room_by_name("Study").unwrap();
        let hall = board.room_by_name("Hall").unwrap();
        board.move_token_to_room(WeaponId(0), study);
        board.move_token_to_room(BLUE, study);

        let summary = board.room_summary();
        assert_eq!(summary, "Study: Blue, Rope\n");
        assert!(board.room(hall).is_empty());
    }

    #[test]
    fn test_bad_start() {
        let config = small_config().with_character("Green", 'G', Location::new(0, 1));
        let err = Board::new(&config, &mut GameRng::new(1)).unwrap_err();
        assert_eq!(
            err,
            SetupError::BadStart {
                name: "Green".into(),
                at: Location::new(0, 1)
            }
        );
    }

    #[test]
    fn test_unknown_passage_room() {
        let config = small_config().with_secret_passage("Hall", "Cellar");
        let err = Board::new(&config, &mut GameRng::new(1)).unwrap_err();
        assert_eq!(
            err,
            SetupError::Layout(LayoutError::UnknownRoom {
                room: "Cellar".into()
            })
        );
    }

    #[test]
    fn test_card_name() {
        let board = small_board();
        assert_eq!(board.card_name(Card::Room(RoomId(1))), "Study");
        assert_eq!(board.card_name(Card::Weapon(WeaponId(0))), "Rope");
        assert_eq!(board.card_name(Card::Character(BLUE)), "Blue");
    }
}
