//! Tiles and the grid that holds them.
//!
//! The grid is the board graph: every non-wall tile is a node, and
//! orthogonally adjacent non-wall tiles share an edge of weight 1.

use serde::{Deserialize, Serialize};

use super::location::Location;
use crate::core::RoomId;

/// One cell of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    /// Impassable: outer walls, the cellar and room interiors.
    Wall,
    /// Open corridor.
    Path,
    /// Entrance to a room.
    Door(RoomId),
}

impl Tile {
    /// Check whether a token can stand on or pass through this tile.
    #[must_use]
    pub const fn is_traversable(self) -> bool {
        !matches!(self, Tile::Wall)
    }
}

/// Row-major tile storage. Locations outside the grid read as `Tile::Wall`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileGrid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl TileGrid {
    /// Build a grid from row-major tiles.
    ///
    /// Panics if `tiles.len() != width * height`.
    #[must_use]
    pub fn new(width: usize, height: usize, tiles: Vec<Tile>) -> Self {
        assert_eq!(tiles.len(), width * height, "Tile count must match grid size");
        Self {
            width,
            height,
            tiles,
        }
    }

    /// Grid width in tiles.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in tiles.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    fn index_of(&self, loc: Location) -> Option<usize> {
        let x = usize::try_from(loc.x).ok()?;
        let y = usize::try_from(loc.y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// The tile at `loc`.
    #[must_use]
    pub fn get(&self, loc: Location) -> Tile {
        self.index_of(loc).map_or(Tile::Wall, |i| self.tiles[i])
    }

    /// Check whether `loc` lies inside the grid.
    #[must_use]
    pub fn contains(&self, loc: Location) -> bool {
        self.index_of(loc).is_some()
    }

    /// Traversable neighbours of `loc`.
    pub fn open_neighbors(&self, loc: Location) -> impl Iterator<Item = Location> + '_ {
        loc.neighbors()
            .into_iter()
            .filter(move |n| self.get(*n).is_traversable())
    }

    /// Iterate over every (location, tile) pair in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Location, Tile)> + '_ {
        self.tiles.iter().enumerate().map(move |(i, tile)| {
            let loc = Location::new((i % self.width) as i32, (i / self.width) as i32);
            (loc, *tile)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> TileGrid {
        // . #
        // D .
        TileGrid::new(
            2,
            2,
            vec![Tile::Path, Tile::Wall, Tile::Door(RoomId(0)), Tile::Path],
        )
    }

    #[test]
    fn test_get_and_off_grid() {
        let g = grid();
        assert_eq!(g.get(Location::new(0, 1)), Tile::Door(RoomId(0)));
        assert_eq!(g.get(Location::new(-1, 0)), Tile::Wall);
        assert_eq!(g.get(Location::new(2, 0)), Tile::Wall);
        assert!(!g.contains(Location::new(0, 2)));
    }

    #[test]
    fn test_open_neighbors() {
        let g = grid();
        let mut n: Vec<_> = g.open_neighbors(Location::new(0, 0)).collect();
        n.sort();
        assert_eq!(n, vec![Location::new(0, 1)]);
    }

    #[test]
    fn test_iter_row_major() {
        let g = grid();
        let locs: Vec<_> = g.iter().map(|(l, _)| l).collect();
        assert_eq!(locs[1], Location::new(1, 0));
        assert_eq!(locs[2], Location::new(0, 1));
    }

    #[test]
    #[should_panic(expected = "Tile count must match grid size")]
    fn test_size_mismatch() {
        let _ = TileGrid::new(3, 3, vec![Tile::Path]);
    }
}
