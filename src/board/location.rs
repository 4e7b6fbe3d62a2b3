//! Grid coordinates.

use serde::{Deserialize, Serialize};

/// A cell on the board grid. `x` grows to the right, `y` grows downward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Location {
    /// Create a new location.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The four orthogonal neighbours: up, right, down, left.
    ///
    /// Neighbours may lie off the grid; the tile grid reads those as walls.
    #[must_use]
    pub const fn neighbors(self) -> [Location; 4] {
        [
            Location::new(self.x, self.y - 1),
            Location::new(self.x + 1, self.y),
            Location::new(self.x, self.y + 1),
            Location::new(self.x - 1, self.y),
        ]
    }

    /// Manhattan distance, ignoring walls.
    #[must_use]
    pub const fn manhattan(self, other: Location) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
