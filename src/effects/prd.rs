//! Self-correcting retrigger chance (PRD).
//!
//! A PRD card retriggers with a probability nudged by how far the
//! observed average of extra triggers per play has drifted from its
//! target:
//!
//! ```text
//! adjusted = base_chance - (successes / plays - target_average) * correction_factor
//! ```
//!
//! clamped to `[0.05, 0.95]`. With no plays yet, `adjusted = base_chance`.
//! The history behind `successes / plays` lives for one deck evaluation,
//! so the correction converges over that deck's trials.

use serde::{Deserialize, Serialize};

use crate::core::RandomSource;

/// Lower clamp of the adjusted retrigger chance.
pub const MIN_CHANCE: f64 = 0.05;

/// Upper clamp of the adjusted retrigger chance.
pub const MAX_CHANCE: f64 = 0.95;

/// PRD tuning for a card.
///
/// Missing fields in configuration fall back to the defaults:
/// `base_chance = 0.5`, `target_average = 1.0`, `correction_factor = 1.0`,
/// `max_attempts = 10`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrdConfig {
    /// Chance before any correction.
    pub base_chance: f64,
    /// Long-run extra triggers per play the correction steers toward.
    pub target_average: f64,
    /// Weight of the deviation in the correction.
    pub correction_factor: f64,
    /// Cap on extra triggers per play.
    pub max_attempts: u32,
}

impl Default for PrdConfig {
    fn default() -> Self {
        Self {
            base_chance: 0.5,
            target_average: 1.0,
            correction_factor: 1.0,
            max_attempts: 10,
        }
    }
}

impl PrdConfig {
    /// Retrigger chance for the next play given the history so far.
    #[must_use]
    pub fn adjusted_chance(&self, history: &PrdHistory) -> f64 {
        let chance = match history.observed_average() {
            Some(average) => {
                self.base_chance - (average - self.target_average) * self.correction_factor
            }
            None => self.base_chance,
        };
        chance.clamp(MIN_CHANCE, MAX_CHANCE)
    }

    /// Roll the retrigger chain for one play.
    ///
    /// Up to `max_attempts` independent draws at the adjusted chance,
    /// stopping at the first failure. Returns the number of successes.
    /// The history is not updated; call [`PrdHistory::record`] afterwards.
    pub fn roll_chain(&self, history: &PrdHistory, rng: &mut dyn RandomSource) -> u32 {
        let chance = self.adjusted_chance(history);
        let mut successes = 0;
        while successes < self.max_attempts && rng.chance(chance) {
            successes += 1;
        }
        successes
    }
}

/// Observed PRD outcomes across the trials of one deck evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrdHistory {
    /// PRD card plays recorded.
    pub plays: u64,
    /// Extra triggers across those plays.
    pub successes: u64,
}

impl PrdHistory {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Extra triggers per play, or `None` before the first play.
    #[must_use]
    pub fn observed_average(&self) -> Option<f64> {
        if self.plays == 0 {
            None
        } else {
            Some(self.successes as f64 / self.plays as f64)
        }
    }

    /// Record one play and the extra triggers it produced.
    pub fn record(&mut self, extra_triggers: u32) {
        self.plays += 1;
        self.successes += u64::from(extra_triggers);
    }
}
