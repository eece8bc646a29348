// src/generator/batch.rs
// Independent attempts, one per seed, spread over the rayon pool.

use crate::generator::{seeded_rng, DungeonGenerator, GenerationError, GeneratorConfig, Outcome};
use crate::layout::{Layout, LayoutRecorder};
use crate::rooms::RoomCatalog;
use log::debug;
use rayon::prelude::*;

/// Result of a single seeded attempt inside a batch.
#[derive(Debug, Clone)]
pub struct BatchAttempt {
    pub seed: u64,
    pub result: Result<(Outcome, Layout), GenerationError>,
}

impl BatchAttempt {
    pub fn is_success(&self) -> bool {
        matches!(&self.result, Ok((outcome, _)) if outcome.is_success())
    }

    pub fn layout(&self) -> Option<&Layout> {
        self.result.as_ref().ok().map(|(_, layout)| layout)
    }
}

/// Runs one attempt per seed in parallel. Attempts share nothing but the
/// (read-only) catalog, and results come back in seed order.
pub fn generate_batch(
    config: &GeneratorConfig,
    catalog: &RoomCatalog,
    seeds: &[u64],
) -> Result<Vec<BatchAttempt>, GenerationError> {
    catalog.validate()?;
    debug!("Running {} generation attempts in parallel", seeds.len());

    Ok(seeds
        .par_iter()
        .map(|&seed| {
            let result = DungeonGenerator::new(*config, catalog.clone(), LayoutRecorder::new()).and_then(|mut generator| {
                let outcome = generator.generate(&mut seeded_rng(seed))?;
                Ok((outcome, generator.scene().layout()))
            });
            BatchAttempt { seed, result }
        })
        .collect())
}

/// The earliest attempt (in seed order) that produced a dungeon.
pub fn first_success(attempts: &[BatchAttempt]) -> Option<&BatchAttempt> {
    attempts.iter().find(|attempt| attempt.is_success())
}
