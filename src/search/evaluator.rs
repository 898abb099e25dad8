//! Monte-Carlo evaluation of a single deck.
//!
//! ## Trial
//!
//! 1. Fresh [`SimulationState`] lending the deck's [`PrdHistory`]
//! 2. Uniform shuffle of the deck's card instances
//! 3. For each card: pre-card hook, then the card itself
//! 4. End-of-cycle hook
//! 5. Score = primary × secondary
//!
//! The PRD history is created once per evaluation and carried from trial
//! to trial, so retrigger chances self-correct over the whole run.

use serde::{Deserialize, Serialize};

use crate::core::{BuffSet, CraftTargets, RandomSource, SimError, SimResult, SimulationState};
use crate::effects::PrdHistory;
use crate::rules::{CraftingProfile, DeckContents};

use super::deck::{Deck, DeckComposition};

/// Aggregated statistics of one deck's trials.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Card name → copies.
    pub deck: DeckComposition,

    /// Trials run.
    pub trials: u32,

    /// Mean of primary × secondary.
    pub mean_score: f64,

    /// Percent of trials reaching each star threshold, in threshold order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier_hit_pct: Option<Vec<f64>>,

    /// Mean reward, `reward[tiers achieved]` averaged over trials.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_reward: Option<f64>,

    /// PRD history at the end of the evaluation.
    pub prd: PrdHistory,
}

impl EvaluationResult {
    /// Hit percentage of a tier (0 when the tier does not exist).
    #[must_use]
    pub fn tier_hit(&self, tier: usize) -> f64 {
        self.tier_hit_pct
            .as_ref()
            .and_then(|hits| hits.get(tier))
            .copied()
            .unwrap_or(0.0)
    }

    /// Expected reward per unit of resource cost.
    ///
    /// `None` without a reward table or with a zero cost.
    #[must_use]
    pub fn efficiency(&self, cost: u32) -> Option<f64> {
        match (self.expected_reward, cost) {
            (Some(_), 0) | (None, _) => None,
            (Some(reward), cost) => Some(reward / f64::from(cost)),
        }
    }
}

/// Runs trials of decks drawn from one profile against one set of targets.
#[derive(Debug)]
pub struct DeckEvaluator<'p> {
    profile: &'p CraftingProfile,
    targets: &'p CraftTargets,
    buffs: BuffSet,
}

impl<'p> DeckEvaluator<'p> {
    /// Create an evaluator. Fails if the targets are malformed.
    pub fn new(profile: &'p CraftingProfile, targets: &'p CraftTargets) -> SimResult<Self> {
        targets.validate()?;
        Ok(Self {
            profile,
            targets,
            buffs: targets.buffs(),
        })
    }

    /// Profile decks are drawn from.
    #[must_use]
    pub fn profile(&self) -> &'p CraftingProfile {
        self.profile
    }

    /// Scoring targets.
    #[must_use]
    pub fn targets(&self) -> &'p CraftTargets {
        self.targets
    }

    /// Evaluate a deck over `trials` independent trials.
    pub fn evaluate(
        &self,
        deck: &Deck,
        trials: u32,
        rng: &mut dyn RandomSource,
    ) -> SimResult<EvaluationResult> {
        if trials == 0 {
            return Err(SimError::ZeroTrials);
        }

        let kinds = deck.kinds(self.profile);
        let contents = DeckContents::new(&kinds);
        let mut order = deck.instances();
        let mut history = PrdHistory::new();

        let thresholds = self.targets.thresholds();
        let rewards = self.targets.wish_points.as_deref();
        let mut hits = vec![0u64; thresholds.len()];
        let mut score_sum = 0.0;
        let mut reward_sum = 0.0;

        for _ in 0..trials {
            rng.shuffle(&mut order);
            let score = self.run_trial(&order, &contents, &mut history, rng);

            score_sum += score;
            let tiers = self.targets.tiers_achieved(score);
            for hit in &mut hits[..tiers] {
                *hit += 1;
            }
            if let Some(rewards) = rewards {
                reward_sum += rewards.get(tiers).copied().unwrap_or(0.0);
            }
        }

        let n = f64::from(trials);
        Ok(EvaluationResult {
            deck: deck.composition(self.profile),
            trials,
            mean_score: score_sum / n,
            tier_hit_pct: (!thresholds.is_empty())
                .then(|| hits.iter().map(|&h| h as f64 * 100.0 / n).collect()),
            expected_reward: rewards.map(|_| reward_sum / n),
            prd: history,
        })
    }

    /// Play one trial in the given order and return its score.
    pub fn run_trial(
        &self,
        order: &[usize],
        contents: &DeckContents<'_>,
        history: &mut PrdHistory,
        rng: &mut dyn RandomSource,
    ) -> f64 {
        let mut state = SimulationState::new(history, &self.buffs);
        for &slot in order {
            self.profile.pre_card(&mut state, rng);
            self.profile.play_slot(slot, &mut state, rng);
        }
        self.profile.end_of_cycle(contents, &mut state, rng);
        state.score()
    }
}
