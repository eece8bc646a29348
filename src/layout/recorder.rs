// src/layout/recorder.rs

use crate::grid::{Door, GridBounds, GridCoord};
use crate::layout::{HallwayKind, Scene};
use crate::rooms::RoomPrototype;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet, VecDeque};

/// Largest width or height, in cells, that [`Layout::render_ascii`] will draw.
pub const MAX_RENDER_SPAN: i64 = 1024;

/// A room committed to the scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedRoom {
    pub name: String,
    pub glyph: char,
    pub at: GridCoord,
}

/// A hallway committed to the scene, anchored on the door it hangs off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedHallway {
    pub kind: HallwayKind,
    pub door: Door,
}

#[derive(Debug, Clone)]
enum Entry {
    Room(PlacedRoom),
    Hallway(PlacedHallway),
}

/// In-memory [`Scene`] that just remembers what is live.
///
/// Handles are slot indices. Slots are reused only once every previously
/// issued handle has been disposed.
#[derive(Debug, Default)]
pub struct LayoutRecorder {
    entries: Vec<Option<Entry>>,
    disposed: usize,
}

impl LayoutRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of placements that have not been disposed.
    pub fn live_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// Total disposals seen over the recorder's lifetime.
    pub fn disposed_count(&self) -> usize {
        self.disposed
    }

    /// Snapshot of everything currently placed, in placement order.
    pub fn layout(&self) -> Layout {
        let mut layout = Layout::default();
        for entry in self.entries.iter().flatten() {
            match entry {
                Entry::Room(room) => layout.rooms.push(room.clone()),
                Entry::Hallway(hallway) => layout.hallways.push(hallway.clone()),
            }
        }
        layout
    }

    fn push(&mut self, entry: Entry) -> usize {
        if self.entries.iter().all(Option::is_none) {
            self.entries.clear();
        }
        self.entries.push(Some(entry));
        self.entries.len() - 1
    }
}

impl Scene for LayoutRecorder {
    type Handle = usize;

    fn place_room(&mut self, room: &RoomPrototype, at: GridCoord) -> usize {
        self.push(Entry::Room(PlacedRoom {
            name: room.name.clone(),
            glyph: room.glyph(),
            at,
        }))
    }

    fn place_hallway(&mut self, kind: HallwayKind, door: &Door) -> usize {
        self.push(Entry::Hallway(PlacedHallway { kind, door: *door }))
    }

    fn dispose(&mut self, handle: usize) {
        if let Some(slot) = self.entries.get_mut(handle) {
            if slot.take().is_some() {
                self.disposed += 1;
            }
        }
    }
}

/// A finished (or partially built) dungeon as plain data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub rooms: Vec<PlacedRoom>,
    pub hallways: Vec<PlacedHallway>,
}

impl Layout {
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn room_at(&self, coord: GridCoord) -> Option<&PlacedRoom> {
        self.rooms.iter().find(|r| r.at == coord)
    }

    pub fn count_named(&self, name: &str) -> usize {
        self.rooms.iter().filter(|r| r.name == name).count()
    }

    pub fn bounds(&self) -> Option<GridBounds> {
        GridBounds::from_coords(self.rooms.iter().map(|r| &r.at))
    }

    /// True when every room can be reached from every other through hallways.
    pub fn is_connected(&self) -> bool {
        let Some(first) = self.rooms.first() else {
            return true;
        };
        let mut edges: HashMap<GridCoord, Vec<GridCoord>> = HashMap::new();
        for hallway in &self.hallways {
            let a = hallway.door.coord;
            let b = hallway.door.neighbour_coord();
            edges.entry(a).or_default().push(b);
            edges.entry(b).or_default().push(a);
        }

        let mut seen = HashSet::from([first.at]);
        let mut queue = VecDeque::from([first.at]);
        while let Some(cell) = queue.pop_front() {
            for next in edges.get(&cell).into_iter().flatten() {
                if self.room_at(*next).is_some() && seen.insert(*next) {
                    queue.push_back(*next);
                }
            }
        }
        self.rooms.iter().all(|r| seen.contains(&r.at))
    }

    /// Draws the layout with one character per room and per hallway.
    ///
    /// Rooms sit on even rows/columns; `|` and `-` fill the gaps between
    /// connected rooms. Layouts wider or taller than [`MAX_RENDER_SPAN`]
    /// cells render as an empty string.
    pub fn render_ascii(&self) -> String {
        let Some(bounds) = self.bounds() else {
            return String::new();
        };
        let span_x = i64::from(bounds.max_x) - i64::from(bounds.min_x);
        let span_y = i64::from(bounds.max_y) - i64::from(bounds.min_y);
        if span_x > MAX_RENDER_SPAN || span_y > MAX_RENDER_SPAN {
            return String::new();
        }
        let width = (span_x * 2 + 1) as usize;
        let height = (span_y * 2 + 1) as usize;
        let mut canvas = vec![vec![' '; width]; height];

        let to_cell = |coord: GridCoord| {
            (
                (i64::from(coord.x) - i64::from(bounds.min_x)) * 2,
                (i64::from(coord.y) - i64::from(bounds.min_y)) * 2,
            )
        };
        let mut plot = |col: i64, row: i64, ch: char| {
            if col >= 0 && row >= 0 {
                if let Some(c) = canvas.get_mut(row as usize).and_then(|r| r.get_mut(col as usize)) {
                    *c = ch;
                }
            }
        };

        for room in &self.rooms {
            let (col, row) = to_cell(room.at);
            plot(col, row, room.glyph);
        }
        for hallway in &self.hallways {
            let (col, row) = to_cell(hallway.door.coord);
            match hallway.kind {
                HallwayKind::Vertical => plot(col, row + 1, '|'),
                HallwayKind::Horizontal => plot(col - 1, row, '-'),
            }
        }

        canvas
            .into_iter()
            .map(|row| row.into_iter().collect::<String>().trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Direction;

    fn room(name: &str, doors: &[Direction]) -> RoomPrototype {
        RoomPrototype::new(name, doors).unwrap()
    }

    #[test]
    fn test_recorder_tracks_live_placements() {
        let mut rec = LayoutRecorder::new();
        let a = rec.place_room(&room("a", &[Direction::South]), GridCoord::ORIGIN);
        let h = rec.place_hallway(HallwayKind::Vertical, &Door::new(Direction::South, GridCoord::ORIGIN));
        let b = rec.place_room(&room("b", &[Direction::North]), GridCoord::new(0, 1));
        assert_eq!(rec.live_count(), 3);

        rec.dispose(h);
        rec.dispose(h);
        assert_eq!(rec.live_count(), 2);
        assert_eq!(rec.disposed_count(), 1);

        rec.dispose(a);
        rec.dispose(b);
        assert_eq!(rec.live_count(), 0);
        assert!(rec.layout().is_empty());

        // All handles returned, so slots restart from zero.
        let c = rec.place_room(&room("c", &[]), GridCoord::ORIGIN);
        assert_eq!(c, 0);
    }

    #[test]
    fn test_layout_connectivity() {
        let mut rec = LayoutRecorder::new();
        rec.place_room(&room("a", &[Direction::South]), GridCoord::ORIGIN);
        rec.place_room(&room("b", &[Direction::North]), GridCoord::new(0, 1));
        assert!(!rec.layout().is_connected());

        rec.place_hallway(HallwayKind::Vertical, &Door::new(Direction::South, GridCoord::ORIGIN));
        let layout = rec.layout();
        assert!(layout.is_connected());
        assert_eq!(layout.count_named("a"), 1);
        assert_eq!(layout.room_at(GridCoord::new(0, 1)).map(|r| r.name.as_str()), Some("b"));
    }

    #[test]
    fn test_render_ascii() {
        let mut rec = LayoutRecorder::new();
        rec.place_room(&room("Start", &[Direction::South, Direction::West]), GridCoord::ORIGIN);
        rec.place_room(&room("Target", &[Direction::North]), GridCoord::new(0, 1));
        rec.place_room(&room("room_e", &[Direction::East]), GridCoord::new(-1, 0));
        rec.place_hallway(HallwayKind::Vertical, &Door::new(Direction::South, GridCoord::ORIGIN));
        rec.place_hallway(HallwayKind::Horizontal, &Door::new(Direction::West, GridCoord::ORIGIN));

        assert_eq!(rec.layout().render_ascii(), "r-S\n  |\n  T");
    }

    #[test]
    fn test_empty_layout_renders_nothing() {
        let layout = Layout::default();
        assert_eq!(layout.render_ascii(), "");
        assert!(layout.is_connected());
        assert_eq!(layout.bounds(), None);
    }

    #[test]
    fn test_oversized_layout_renders_nothing() {
        let far_apart = Layout {
            rooms: vec![
                PlacedRoom { name: "a".to_string(), glyph: 'a', at: GridCoord::new(i32::MIN, i32::MIN) },
                PlacedRoom { name: "b".to_string(), glyph: 'b', at: GridCoord::new(i32::MAX, i32::MAX) },
            ],
            hallways: vec![PlacedHallway {
                kind: HallwayKind::Vertical,
                door: Door::new(Direction::South, GridCoord::new(i32::MAX, i32::MAX)),
            }],
        };
        assert_eq!(far_apart.render_ascii(), "");

        let mut wide = Layout::default();
        for x in [0, MAX_RENDER_SPAN as i32 + 1] {
            wide.rooms.push(PlacedRoom { name: "w".to_string(), glyph: 'w', at: GridCoord::new(x, 0) });
        }
        assert_eq!(wide.render_ascii(), "");

        wide.rooms.pop();
        wide.rooms.push(PlacedRoom { name: "w".to_string(), glyph: 'w', at: GridCoord::new(MAX_RENDER_SPAN as i32, 0) });
        assert_eq!(wide.render_ascii().len(), MAX_RENDER_SPAN as usize * 2 + 1);
    }

    #[test]
    fn test_layout_json() {
        let mut rec = LayoutRecorder::new();
        rec.place_room(&room("a", &[Direction::East]), GridCoord::new(1, 2));
        let json = rec.layout().to_json().unwrap();
        let back: Layout = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rec.layout());
        assert!(json.contains("\"name\": \"a\""));
    }
}
