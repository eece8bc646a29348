// src/generator/error.rs

use crate::grid::Direction;
use thiserror::Error;

/// Errors that stop a generation attempt outright.
///
/// Running out of candidate placements is *not* an error; the driver reports
/// it as [`Outcome::Exhausted`](crate::generator::Outcome::Exhausted).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The search was invoked more often than the configured threshold allows.
    #[error("iteration limit exceeded: search ran past {limit} invocations")]
    IterationLimitExceeded { limit: usize },

    #[error("room prototype `{room}` declares its {direction} door more than once")]
    DuplicateDoor { room: String, direction: Direction },

    #[error("room prototype has an empty name")]
    UnnamedRoom,
}

impl GenerationError {
    /// True for the budget abort, as opposed to bad input.
    pub fn is_budget_exhausted(&self) -> bool {
        matches!(self, GenerationError::IterationLimitExceeded { .. })
    }
}

/// Errors raised while loading configuration or catalogs from disk.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] GenerationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GenerationError::IterationLimitExceeded { limit: 100 };
        assert_eq!(err.to_string(), "iteration limit exceeded: search ran past 100 invocations");
        assert!(err.is_budget_exhausted());

        let err = GenerationError::DuplicateDoor {
            room: "hall".to_string(),
            direction: Direction::East,
        };
        assert_eq!(err.to_string(), "room prototype `hall` declares its east door more than once");
        assert!(!err.is_budget_exhausted());
    }

    #[test]
    fn test_config_error_wraps_generation_error() {
        let err: ConfigError = GenerationError::UnnamedRoom.into();
        assert_eq!(err.to_string(), "room prototype has an empty name");
    }
}
