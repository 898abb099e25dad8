//! Deck search configuration parameters.

use serde::{Deserialize, Serialize};

/// Deck search configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Monte-Carlo trials per candidate deck (default: 50 000).
    /// More trials narrow the estimate at linear cost.
    pub trials: u32,

    /// Decks kept by the ranked objectives (default: 5).
    pub top_k: usize,

    /// Worker threads (None = one per available core).
    pub workers: Option<usize>,

    /// Base seed for every deck's RNG stream.
    /// None draws a fresh seed from OS entropy per search.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            trials: 50_000,
            top_k: 5,
            workers: None,
            seed: None,
        }
    }
}

impl SearchConfig {
    /// Set the trial count per deck.
    #[must_use]
    pub fn with_trials(mut self, trials: u32) -> Self {
        self.trials = trials;
        self
    }

    /// Set how many decks the ranked objectives keep.
    #[must_use]
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Set a fixed worker count.
    #[must_use]
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Make the search reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
