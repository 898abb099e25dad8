//! Deck search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during a deck search.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Deck sizes searched.
    pub sizes_searched: u32,

    /// Deck sizes skipped for an insufficient pool.
    pub sizes_skipped: u32,

    /// Candidate decks evaluated.
    pub decks_evaluated: u64,

    /// Trials run across all decks.
    pub trials_run: u64,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate decks evaluated per second.
    #[must_use]
    pub fn decks_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.decks_evaluated as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Calculate trials per second.
    #[must_use]
    pub fn trials_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.trials_run as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = SearchStats::new();
        assert_eq!(stats.decks_evaluated, 0);
        assert_eq!(stats.trials_run, 0);
        assert_eq!(stats.decks_per_second(), 0.0);
    }

    #[test]
    fn test_stats_rates() {
        let mut stats = SearchStats::new();
        stats.decks_evaluated = 20;
        stats.trials_run = 20_000;
        stats.time_us = 2_000_000;

        assert_eq!(stats.decks_per_second(), 10.0);
        assert_eq!(stats.trials_per_second(), 10_000.0);
    }
}
