// src/utils/mod.rs
pub mod shuffle;

pub use shuffle::shuffled;
