// src/grid/mod.rs
pub mod coord;
pub mod direction;
pub mod door;

pub use coord::{GridBounds, GridCoord};
pub use direction::Direction;
pub use door::Door;
