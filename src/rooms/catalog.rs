// src/rooms/catalog.rs

use crate::generator::{ConfigError, GenerationError};
use crate::grid::Direction;
use crate::rooms::RoomPrototype;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// The set of prototypes a dungeon is assembled from.
///
/// ```json
/// {
///   "start":  { "name": "Start",  "doors": ["east", "west"] },
///   "target": { "name": "Target", "doors": ["south"] },
///   "rooms":  [ { "name": "room_ns", "doors": ["north", "south"] } ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomCatalog {
    pub start: RoomPrototype,
    pub target: RoomPrototype,
    #[serde(default)]
    pub rooms: Vec<RoomPrototype>,
}

impl RoomCatalog {
    /// Built-in catalog: an east-west start, a dead-end target opening south,
    /// and every one- and two-door room as filler. No junctions.
    pub fn standard() -> Self {
        let rooms = (1u8..15)
            .filter(|mask| mask.count_ones() <= 2)
            .map(|mask| {
                let doors: Vec<Direction> = Direction::ALL
                    .iter()
                    .enumerate()
                    .filter(|(bit, _)| mask & (1 << bit) != 0)
                    .map(|(_, dir)| *dir)
                    .collect();
                let suffix: String = doors.iter().map(|d| d.name().chars().next().unwrap_or('?')).collect();
                RoomPrototype {
                    name: format!("room_{}", suffix),
                    doors,
                }
            })
            .collect();

        RoomCatalog {
            start: RoomPrototype {
                name: "Start".to_string(),
                doors: vec![Direction::East, Direction::West],
            },
            target: RoomPrototype {
                name: "Target".to_string(),
                doors: vec![Direction::South],
            },
            rooms,
        }
    }

    pub fn validate(&self) -> Result<(), GenerationError> {
        self.start.validate()?;
        self.target.validate()?;
        self.rooms.iter().try_for_each(RoomPrototype::validate)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let catalog: RoomCatalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

impl Default for RoomCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog() {
        let catalog = RoomCatalog::standard();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.rooms.len(), 10);
        assert_eq!(catalog.start.door_count(), 2);
        assert!(catalog.target.has_door_facing(Direction::South));
        assert!(catalog.rooms.iter().all(|r| r.door_count() <= 2));
        assert!(!catalog.rooms.contains(&catalog.target));
        assert!(catalog.rooms.iter().any(|r| r.name == "room_ns"));
    }

    #[test]
    fn test_catalog_from_json() {
        let json = r#"{
            "start": { "name": "Start", "doors": ["north"] },
            "target": { "name": "Target", "doors": ["south"] }
        }"#;
        let catalog = RoomCatalog::from_json_str(json).unwrap();
        assert!(catalog.rooms.is_empty());
        assert_eq!(catalog.start.doors, vec![Direction::North]);
    }

    #[test]
    fn test_catalog_rejects_invalid_rooms() {
        let json = r#"{
            "start": { "name": "Start", "doors": ["north"] },
            "target": { "name": "Target", "doors": ["south"] },
            "rooms": [ { "name": "bad", "doors": ["east", "east"] } ]
        }"#;
        assert!(matches!(
            RoomCatalog::from_json_str(json),
            Err(ConfigError::Invalid(GenerationError::DuplicateDoor { .. }))
        ));
        assert!(matches!(RoomCatalog::from_json_str("{"), Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_catalog_round_trips_through_json() {
        let catalog = RoomCatalog::standard();
        let json = serde_json::to_string(&catalog).unwrap();
        assert_eq!(RoomCatalog::from_json_str(&json).unwrap(), catalog);
    }
}
