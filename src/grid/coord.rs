// src/grid/coord.rs

use crate::grid::Direction;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell on the integer dungeon grid. Every room occupies exactly one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct GridCoord {
    pub x: i32,
    pub y: i32,
}

impl GridCoord {
    pub const ORIGIN: GridCoord = GridCoord { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        GridCoord { x, y }
    }

    /// The orthogonally adjacent cell in `dir`.
    pub fn step(self, dir: Direction) -> GridCoord {
        let (dx, dy) = dir.offset();
        GridCoord::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Running extents of the cells claimed along one search branch.
///
/// `min_x`/`max_x` are the left/right counters and `min_y`/`max_y` the
/// up/down counters. A fresh box covers only the origin, where the start
/// room sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GridBounds {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl GridBounds {
    pub fn at_origin() -> Self {
        GridBounds::default()
    }

    /// Returns a copy widened to include `coord`. Bounds never shrink.
    pub fn expanded(self, coord: GridCoord) -> Self {
        GridBounds {
            min_x: self.min_x.min(coord.x),
            min_y: self.min_y.min(coord.y),
            max_x: self.max_x.max(coord.x),
            max_y: self.max_y.max(coord.y),
        }
    }

    pub fn span_x(&self) -> i32 {
        self.max_x - self.min_x
    }

    pub fn span_y(&self) -> i32 {
        self.max_y - self.min_y
    }

    /// How far the box is from square, in cells.
    pub fn aspect_skew(&self) -> i32 {
        (self.span_x() - self.span_y()).abs()
    }

    pub fn contains(&self, coord: GridCoord) -> bool {
        coord.x >= self.min_x && coord.x <= self.max_x && coord.y >= self.min_y && coord.y <= self.max_y
    }

    pub fn from_coords<'a, I>(coords: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a GridCoord>,
    {
        let mut iter = coords.into_iter();
        let first = *iter.next()?;
        let seed = GridBounds {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        Some(iter.fold(seed, |bounds, c| bounds.expanded(*c)))
    }
}
