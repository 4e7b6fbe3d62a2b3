//! Shortest paths over the tile graph.
//!
//! Distances are purely topological: only walls block. Whether another
//! character is standing on a tile is checked by the board when a move is
//! actually made, so a reachable set can include tiles whose shortest path
//! crosses an occupied square.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rustc_hash::{FxHashMap, FxHashSet};

use super::location::Location;
use super::tile::TileGrid;

/// Single-source shortest-path queries over a `TileGrid`.
///
/// ```
/// use rust_cluedo::board::{Location, Pathfinder, Tile, TileGrid};
///
/// // . . .
/// // # # .
/// // . . .
/// let grid = TileGrid::new(3, 3, vec![
///     Tile::Path, Tile::Path, Tile::Path,
///     Tile::Wall, Tile::Wall, Tile::Path,
///     Tile::Path, Tile::Path, Tile::Path,
/// ]);
/// let paths = Pathfinder::new(&grid);
///
/// assert_eq!(paths.distance(Location::new(0, 0), Location::new(0, 2)), Some(6));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Pathfinder<'a> {
    grid: &'a TileGrid,
}

impl<'a> Pathfinder<'a> {
    /// Create a pathfinder over `grid`.
    #[must_use]
    pub fn new(grid: &'a TileGrid) -> Self {
        Self { grid }
    }

    /// Number of edges on a shortest path, or `None` if `to` is unreachable.
    ///
    /// A wall (or off-grid) source reaches nothing, not even itself.
    #[must_use]
    pub fn distance(&self, from: Location, to: Location) -> Option<u32> {
        self.scan(from, None, Some(to)).get(&to).copied()
    }

    /// Every tile whose shortest distance from `from` is at most `max_steps`.
    ///
    /// Includes `from` itself when it is traversable.
    #[must_use]
    pub fn reachable_within(&self, from: Location, max_steps: u32) -> FxHashSet<Location> {
        self.scan(from, Some(max_steps), None).into_keys().collect()
    }

    /// Settled distances from `from`, bounded by `limit` and stopping early
    /// once `target` is settled.
    fn scan(
        &self,
        from: Location,
        limit: Option<u32>,
        target: Option<Location>,
    ) -> FxHashMap<Location, u32> {
        let mut dist: FxHashMap<Location, u32> = FxHashMap::default();
        if !self.grid.get(from).is_traversable() {
            return dist;
        }

        let mut heap: BinaryHeap<Reverse<(u32, Location)>> = BinaryHeap::new();
        dist.insert(from, 0);
        heap.push(Reverse((0, from)));

        while let Some(Reverse((cost, loc))) = heap.pop() {
            if dist.get(&loc).is_some_and(|&best| cost > best) {
                continue;
            }
            if target == Some(loc) {
                break;
            }

            let next_cost = cost + 1;
            if limit.is_some_and(|max| next_cost > max) {
                continue;
            }

            for neighbor in self.grid.open_neighbors(loc) {
                if dist.get(&neighbor).map_or(true, |&best| next_cost < best) {
                    dist.insert(neighbor, next_cost);
                    heap.push(Reverse((next_cost, neighbor)));
                }
            }
        }

        dist
    }
}
