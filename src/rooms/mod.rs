// src/rooms/mod.rs
pub mod catalog;
pub mod prototype;

pub use catalog::RoomCatalog;
pub use prototype::RoomPrototype;
