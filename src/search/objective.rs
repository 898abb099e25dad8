//! Search objectives and ranking of evaluated decks.

use serde::{Deserialize, Serialize};

use crate::core::{CraftTargets, SimError, SimResult};

use super::evaluator::EvaluationResult;

/// What a deck search optimizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Objective {
    /// Highest mean score, top K.
    HighestAverage,
    /// Best hit rate per star tier, one deck per tier.
    PerStar,
    /// Highest expected reward per resource cost, top K.
    RewardEfficiency,
}

/// Best deck for one star tier.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TierPick {
    /// Tier index (0 = first star).
    pub tier: usize,
    /// Score the tier requires.
    pub threshold: u64,
    /// Percent of trials reaching the threshold.
    pub hit_pct: f64,
    /// The winning deck.
    pub result: EvaluationResult,
}

/// Result of searching one deck size.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SearchOutcome {
    /// Decks in rank order.
    Ranked(Vec<EvaluationResult>),
    /// One pick per tier, in tier order.
    PerTier(Vec<TierPick>),
    /// The pool holds fewer cards than the deck size.
    InsufficientPool { deck_size: usize, pool_size: usize },
}

impl SearchOutcome {
    /// The top deck: first ranked deck, or the highest tier's pick.
    #[must_use]
    pub fn best(&self) -> Option<&EvaluationResult> {
        match self {
            SearchOutcome::Ranked(results) => results.first(),
            SearchOutcome::PerTier(picks) => picks.last().map(|pick| &pick.result),
            SearchOutcome::InsufficientPool { .. } => None,
        }
    }

    /// Decks in the outcome.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            SearchOutcome::Ranked(results) => results.len(),
            SearchOutcome::PerTier(picks) => picks.len(),
            SearchOutcome::InsufficientPool { .. } => 0,
        }
    }

    /// True if the outcome holds no deck.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Objective {
    /// All objectives.
    pub const ALL: [Objective; 3] = [
        Objective::HighestAverage,
        Objective::PerStar,
        Objective::RewardEfficiency,
    ];

    /// Check the targets carry what this objective ranks by.
    pub fn check_targets(self, targets: &CraftTargets) -> SimResult<()> {
        match self {
            Objective::HighestAverage => Ok(()),
            Objective::PerStar => {
                if targets.thresholds().is_empty() {
                    Err(SimError::MissingThresholds)
                } else {
                    Ok(())
                }
            }
            Objective::RewardEfficiency => {
                if targets.wish_points.is_none() {
                    Err(SimError::MissingRewardTable)
                } else if targets.stamina_cost.unwrap_or(0) == 0 {
                    Err(SimError::MissingResourceCost)
                } else {
                    Ok(())
                }
            }
        }
    }

    /// Rank evaluated decks, given in enumeration order.
    ///
    /// Sorts are stable, so ties keep enumeration order.
    #[must_use]
    pub fn rank(
        self,
        mut results: Vec<EvaluationResult>,
        targets: &CraftTargets,
        top_k: usize,
    ) -> SearchOutcome {
        match self {
            Objective::HighestAverage => {
                results.sort_by(|a, b| b.mean_score.total_cmp(&a.mean_score));
                results.truncate(top_k);
                SearchOutcome::Ranked(results)
            }
            Objective::RewardEfficiency => {
                let cost = targets.stamina_cost.unwrap_or(0);
                let key = |r: &EvaluationResult| r.efficiency(cost).unwrap_or(f64::NEG_INFINITY);
                results.sort_by(|a, b| key(b).total_cmp(&key(a)));
                results.truncate(top_k);
                SearchOutcome::Ranked(results)
            }
            Objective::PerStar => SearchOutcome::PerTier(best_per_tier(&results, targets)),
        }
    }
}

fn best_per_tier(results: &[EvaluationResult], targets: &CraftTargets) -> Vec<TierPick> {
    targets
        .thresholds()
        .iter()
        .enumerate()
        .filter_map(|(tier, &threshold)| {
            let mut best: Option<&EvaluationResult> = None;
            for result in results {
                // Strictly greater: the first deck wins ties
                if best.map_or(true, |b| result.tier_hit(tier) > b.tier_hit(tier)) {
                    best = Some(result);
                }
            }
            best.map(|result| TierPick {
                tier,
                threshold,
                hit_pct: result.tier_hit(tier),
                result: result.clone(),
            })
        })
        .collect()
}

impl std::fmt::Display for Objective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Objective::HighestAverage => "highest_average",
            Objective::PerStar => "per_star",
            Objective::RewardEfficiency => "reward_efficiency",
        };
        f.write_str(name)
    }
}
