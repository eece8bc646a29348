// src/generator/config.rs

use crate::generator::{ConfigError, DEFAULT_MAX_SIZE, DEFAULT_THRESHOLD, MIN_DEPTH};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Tunables for one generator, fixed before the first attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Dungeon size ceiling: the deepest search depth, counting the start room.
    pub max_size: usize,
    /// Run-time ceiling: search invocations allowed per attempt.
    pub threshold: usize,
}

impl GeneratorConfig {
    pub fn new(max_size: usize, threshold: usize) -> Self {
        GeneratorConfig { max_size, threshold }
    }

    /// Whether any layout could satisfy the minimum size under this ceiling.
    pub fn can_succeed(&self) -> bool {
        self.max_size > MIN_DEPTH
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GeneratorConfig = serde_json::from_str(json)?;
        if !config.can_succeed() {
            warn!(
                "max_size {} is not above the minimum of {} rooms; every attempt will fail",
                config.max_size, MIN_DEPTH
            );
        }
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            max_size: DEFAULT_MAX_SIZE,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}
