//! Error type for profile construction, evaluation and search.

use thiserror::Error;

/// Errors raised by the simulator.
///
/// Statistical variance is never an error; everything here is a
/// malformed input detected before any trial runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("no implementation for crafting type '{0}'")]
    NoImplementation(String),
    #[error("card '{0}' is defined more than once")]
    DuplicateCard(String),
    #[error("card '{0}' is not in the card pool")]
    UnknownCard(String),
    #[error("deck gives counts for {given} card slots but the profile has {slots}")]
    SlotsExceeded { given: usize, slots: usize },
    #[error("deck uses {requested} of '{card}' but only {available} are available")]
    QuantityExceeded {
        card: String,
        requested: u32,
        available: u32,
    },
    #[error("star thresholds must be ascending, got {0:?}")]
    NonAscendingThresholds(Vec<u64>),
    #[error("reward table needs {expected} entries (thresholds + 1), got {actual}")]
    RewardTableLength { expected: usize, actual: usize },
    #[error("objective requires star thresholds")]
    MissingThresholds,
    #[error("objective requires a reward table")]
    MissingRewardTable,
    #[error("objective requires a non-zero resource cost")]
    MissingResourceCost,
    #[error("trial count must be positive")]
    ZeroTrials,
    #[error("worker pool error: {0}")]
    WorkerPool(String),
}

impl From<rayon::ThreadPoolBuildError> for SimError {
    fn from(value: rayon::ThreadPoolBuildError) -> Self {
        Self::WorkerPool(value.to_string())
    }
}

/// Result alias used across the crate.
pub type SimResult<T> = Result<T, SimError>;
