// src/generator/mod.rs
pub mod batch;
pub mod config;
pub mod doors;
pub mod driver;
pub mod error;
pub mod search;

pub use batch::{first_success, generate_batch, BatchAttempt};
pub use config::GeneratorConfig;
pub use doors::{is_state_valid, reconcile_doors};
pub use driver::{DungeonGenerator, Outcome, Report};
pub use error::{ConfigError, GenerationError};
pub use search::{Search, SearchState};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// A search succeeds only once more than this many rooms are placed.
pub const MIN_DEPTH: usize = 5;
/// Largest allowed difference between the width and height spans, in cells.
pub const ASPECT_TOLERANCE: i32 = 2;

pub const DEFAULT_MAX_SIZE: usize = 15;
pub const DEFAULT_THRESHOLD: usize = 10_000;

/// Reproducible random source for a given seed.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}
