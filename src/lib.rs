// src/lib.rs

pub mod generator;
pub mod grid;
pub mod layout;
pub mod rooms;
pub mod utils;
