// src/rooms/prototype.rs

use crate::generator::GenerationError;
use crate::grid::{Direction, Door, GridCoord};
use serde::{Deserialize, Serialize};

/// A kind of room that can be stamped onto one grid cell.
///
/// Prototypes are authored data: a name, which is also their identity, and
/// the sides of the cell that carry a door.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomPrototype {
    pub name: String,
    pub doors: Vec<Direction>,
}

impl RoomPrototype {
    /// Creates a validated prototype.
    ///
    /// ```
    /// use dungeon_gen::grid::Direction;
    /// use dungeon_gen::rooms::RoomPrototype;
    ///
    /// let corridor = RoomPrototype::new("corridor", &[Direction::North, Direction::South]).unwrap();
    /// assert!(corridor.has_door_facing(Direction::South));
    /// assert!(RoomPrototype::new("broken", &[Direction::West, Direction::West]).is_err());
    /// ```
    pub fn new(name: impl Into<String>, doors: &[Direction]) -> Result<Self, GenerationError> {
        let room = RoomPrototype {
            name: name.into(),
            doors: doors.to_vec(),
        };
        room.validate()?;
        Ok(room)
    }

    /// Rejects prototypes that would let more than two doors meet on one edge.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.name.trim().is_empty() {
            return Err(GenerationError::UnnamedRoom);
        }
        for (i, dir) in self.doors.iter().enumerate() {
            if self.doors[..i].contains(dir) {
                return Err(GenerationError::DuplicateDoor {
                    room: self.name.clone(),
                    direction: *dir,
                });
            }
        }
        Ok(())
    }

    /// The doors this room would expose if placed at `coord`.
    pub fn doors_at(&self, coord: GridCoord) -> Vec<Door> {
        self.doors.iter().map(|&dir| Door::new(dir, coord)).collect()
    }

    pub fn has_door_facing(&self, dir: Direction) -> bool {
        self.doors.contains(&dir)
    }

    pub fn door_count(&self) -> usize {
        self.doors.len()
    }

    /// Single character used when drawing the room on a text map.
    pub fn glyph(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doors_at_uses_the_given_cell() {
        let room = RoomPrototype::new("junction", &[Direction::North, Direction::West]).unwrap();
        let doors = room.doors_at(GridCoord::new(4, -2));
        assert_eq!(
            doors,
            vec![
                Door::new(Direction::North, GridCoord::new(4, -2)),
                Door::new(Direction::West, GridCoord::new(4, -2)),
            ]
        );
    }

    #[test]
    fn test_has_door_facing() {
        let room = RoomPrototype::new("dead end", &[Direction::South]).unwrap();
        assert!(room.has_door_facing(Direction::South));
        assert!(!room.has_door_facing(Direction::North));
        assert_eq!(room.door_count(), 1);
        assert_eq!(room.glyph(), 'd');
    }

    #[test]
    fn test_duplicate_door_rejected() {
        let err = RoomPrototype::new("twin", &[Direction::East, Direction::North, Direction::East]).unwrap_err();
        assert_eq!(
            err,
            GenerationError::DuplicateDoor {
                room: "twin".to_string(),
                direction: Direction::East,
            }
        );
    }

    #[test]
    fn test_empty_name_rejected() {
        assert_eq!(RoomPrototype::new("  ", &[Direction::East]), Err(GenerationError::UnnamedRoom));
    }

    #[test]
    fn test_deserialized_prototype_can_be_validated() {
        let room: RoomPrototype = serde_json::from_str(r#"{"name":"x","doors":["north","north"]}"#).unwrap();
        assert!(room.validate().is_err());
    }
}
