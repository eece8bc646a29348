// src/grid/door.rs

use crate::grid::{Direction, GridCoord};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A connection point on the edge of a grid cell.
///
/// The door on the other side of the same edge is never stored; it is
/// derived on demand by [`Door::matching`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Door {
    pub direction: Direction,
    pub coord: GridCoord,
}

impl Door {
    pub fn new(direction: Direction, coord: GridCoord) -> Self {
        Door { direction, coord }
    }

    /// The theoretical door on the adjacent cell that would close this edge.
    pub fn matching(&self) -> Door {
        Door {
            direction: self.direction.opposite(),
            coord: self.coord.step(self.direction),
        }
    }

    /// Direction a neighbour's door must face to connect to this one.
    pub fn matching_direction(&self) -> Direction {
        self.direction.opposite()
    }

    /// Cell a neighbour must occupy to connect to this door.
    pub fn neighbour_coord(&self) -> GridCoord {
        self.coord.step(self.direction)
    }

    /// True when `other` is the opposite end of this door's edge.
    pub fn is_matching(&self, other: &Door) -> bool {
        *other == self.matching()
    }
}

impl fmt::Display for Door {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} door at {}", self.direction, self.coord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_door() {
        let door = Door::new(Direction::North, GridCoord::new(0, 0));
        let m = door.matching();
        assert_eq!(m, Door::new(Direction::South, GridCoord::new(0, -1)));
        assert_eq!(door.matching_direction(), Direction::South);
        assert_eq!(door.neighbour_coord(), GridCoord::new(0, -1));
        assert_eq!(m.matching(), door);
    }

    #[test]
    fn test_is_matching_is_symmetric() {
        let a = Door::new(Direction::East, GridCoord::new(1, 1));
        let b = Door::new(Direction::West, GridCoord::new(2, 1));
        assert!(a.is_matching(&b));
        assert!(b.is_matching(&a));
    }

    #[test]
    fn test_non_matching_doors() {
        let a = Door::new(Direction::East, GridCoord::new(1, 1));
        // Right cell, wrong facing.
        assert!(!a.is_matching(&Door::new(Direction::East, GridCoord::new(2, 1))));
        // Right facing, wrong cell.
        assert!(!a.is_matching(&Door::new(Direction::West, GridCoord::new(2, 2))));
        // A door never matches itself.
        assert!(!a.is_matching(&a));
    }
}
