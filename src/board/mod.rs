//! The board graph, rooms, tokens and pathfinding.
//!
//! ## Key Types
//!
//! - `Location`: grid coordinate
//! - `Tile` / `TileGrid`: the board graph (wall, path, door)
//! - `Room`: named region with doors, occupants and a secret passage
//! - `Token` / `Position`: movable pieces, on the board or in a room
//! - `Pathfinder`: shortest distances and bounded reachability
//! - `Board`: owns all of the above and applies movement rules

pub mod classic;
pub mod layout;
pub mod location;
pub mod pathfinder;
pub mod room;
pub mod state;
pub mod tile;
pub mod token;

pub use layout::{parse_layout, template_column, template_row, ParsedLayout};
pub use location::Location;
pub use pathfinder::Pathfinder;
pub use room::Room;
pub use state::Board;
pub use tile::{Tile, TileGrid};
pub use token::{Position, Token, TokenKind};
