// src/layout/mod.rs
pub mod recorder;
pub mod scene;

pub use recorder::{Layout, LayoutRecorder, PlacedHallway, PlacedRoom, MAX_RENDER_SPAN};
pub use scene::{HallwayKind, Scene};
