//! External configuration types.
//!
//! Callers load these (typically with `serde_json`) and hand them to the
//! simulator:
//! - `CardsConfig`: crafting mode name → card definitions
//! - `ItemsConfig`: item name → `ItemConfig`
//! - `CraftTargets`: the scoring side of an item (buff, thresholds, rewards, cost)
//!
//! The simulator never reads files itself.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::error::{SimError, SimResult};
use super::state::BuffSet;
use crate::cards::CardDefinition;

/// Card definitions per crafting mode name.
pub type CardsConfig = BTreeMap<String, Vec<CardDefinition>>;

/// Item configurations by item name.
pub type ItemsConfig = BTreeMap<String, ItemConfig>;

/// Scoring targets for an evaluation.
///
/// All parts are optional. An empty `CraftTargets` evaluates mean score only.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CraftTargets {
    /// Item buff active for every trial.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buff_id: Option<String>,

    /// Ascending score cutoffs, one per star tier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub star_thresholds: Option<Vec<u64>>,

    /// Reward per number of tiers reached (length = thresholds + 1).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wish_points: Option<Vec<f64>>,

    /// Resource cost of one craft.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stamina_cost: Option<u32>,
}

impl CraftTargets {
    /// Create empty targets.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the active item buff.
    #[must_use]
    pub fn with_buff(mut self, buff: impl Into<String>) -> Self {
        self.buff_id = Some(buff.into());
        self
    }

    /// Set star thresholds.
    #[must_use]
    pub fn with_thresholds(mut self, thresholds: Vec<u64>) -> Self {
        self.star_thresholds = Some(thresholds);
        self
    }

    /// Set the reward table.
    #[must_use]
    pub fn with_rewards(mut self, rewards: Vec<f64>) -> Self {
        self.wish_points = Some(rewards);
        self
    }

    /// Set the resource cost.
    #[must_use]
    pub fn with_cost(mut self, cost: u32) -> Self {
        self.stamina_cost = Some(cost);
        self
    }

    /// Thresholds as a slice (empty when unset).
    #[must_use]
    pub fn thresholds(&self) -> &[u64] {
        self.star_thresholds.as_deref().unwrap_or(&[])
    }

    /// Check the invariants evaluation relies on.
    ///
    /// Thresholds must be non-decreasing and, when both are present, the
    /// reward table must hold one entry per tier count (thresholds + 1).
    pub fn validate(&self) -> SimResult<()> {
        let thresholds = self.thresholds();
        if thresholds.windows(2).any(|w| w[0] > w[1]) {
            return Err(SimError::NonAscendingThresholds(thresholds.to_vec()));
        }

        if let Some(rewards) = &self.wish_points {
            let expected = thresholds.len() + 1;
            if rewards.len() != expected {
                return Err(SimError::RewardTableLength {
                    expected,
                    actual: rewards.len(),
                });
            }
        }

        Ok(())
    }

    /// Item buffs as a set.
    #[must_use]
    pub fn buffs(&self) -> BuffSet {
        self.buff_id.iter().cloned().collect()
    }

    /// Number of tiers a score reaches.
    #[must_use]
    pub fn tiers_achieved(&self, score: f64) -> usize {
        self.thresholds()
            .iter()
            .take_while(|&&threshold| score >= threshold as f64)
            .count()
    }
}

/// Configuration of a craftable item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemConfig {
    /// Crafting mode name (e.g. `"forging"`).
    pub crafting_type: String,

    /// Number of cards the item's deck holds.
    pub deck_size: usize,

    /// Buff, thresholds, rewards and cost.
    #[serde(flatten)]
    pub targets: CraftTargets,
}

impl ItemConfig {
    /// Create an item with no targets.
    pub fn new(crafting_type: impl Into<String>, deck_size: usize) -> Self {
        Self {
            crafting_type: crafting_type.into(),
            deck_size,
            targets: CraftTargets::default(),
        }
    }

    /// Replace the item's targets.
    #[must_use]
    pub fn with_targets(mut self, targets: CraftTargets) -> Self {
        self.targets = targets;
        self
    }
}
