// src/layout/scene.rs

use crate::grid::{Direction, Door, GridCoord};
use crate::rooms::RoomPrototype;
use serde::{Deserialize, Serialize};

/// Which of the two hallway pieces joins a door to its neighbour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HallwayKind {
    Vertical,
    Horizontal,
}

impl HallwayKind {
    /// Hallways hang off south and west doors only, so each connection gets one.
    pub fn for_door(door: &Door) -> Option<HallwayKind> {
        match door.direction {
            Direction::South => Some(HallwayKind::Vertical),
            Direction::West => Some(HallwayKind::Horizontal),
            Direction::North | Direction::East => None,
        }
    }
}

/// Whatever turns committed placements into something visible.
///
/// The generator never inspects handles; it keeps them only so it can hand
/// them back to [`Scene::dispose`] before the next attempt.
pub trait Scene {
    type Handle;

    fn place_room(&mut self, room: &RoomPrototype, at: GridCoord) -> Self::Handle;
    fn place_hallway(&mut self, kind: HallwayKind, door: &Door) -> Self::Handle;
    fn dispose(&mut self, handle: Self::Handle);
}

impl<S: Scene + ?Sized> Scene for &mut S {
    type Handle = S::Handle;

    fn place_room(&mut self, room: &RoomPrototype, at: GridCoord) -> Self::Handle {
        (**self).place_room(room, at)
    }

    fn place_hallway(&mut self, kind: HallwayKind, door: &Door) -> Self::Handle {
        (**self).place_hallway(kind, door)
    }

    fn dispose(&mut self, handle: Self::Handle) {
        (**self).dispose(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hallway_kind_for_door() {
        let at = GridCoord::ORIGIN;
        assert_eq!(HallwayKind::for_door(&Door::new(Direction::South, at)), Some(HallwayKind::Vertical));
        assert_eq!(HallwayKind::for_door(&Door::new(Direction::West, at)), Some(HallwayKind::Horizontal));
        assert_eq!(HallwayKind::for_door(&Door::new(Direction::North, at)), None);
        assert_eq!(HallwayKind::for_door(&Door::new(Direction::East, at)), None);
    }

    #[test]
    fn test_exactly_one_side_of_each_edge_gets_a_hallway() {
        let door = Door::new(Direction::North, GridCoord::new(3, 3));
        for dir in Direction::ALL {
            let d = Door::new(dir, door.coord);
            let count = [d, d.matching()]
                .iter()
                .filter(|x| HallwayKind::for_door(x).is_some())
                .count();
            assert_eq!(count, 1);
        }
    }
}
