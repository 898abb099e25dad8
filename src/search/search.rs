//! Deck search: enumerate, evaluate in parallel, rank.

use std::collections::BTreeMap;
use std::time::Instant;

use tracing::{debug, info};

use crate::core::{CraftTargets, SimError, SimResult, SimRng};
use crate::rules::CraftingProfile;

use super::config::SearchConfig;
use super::deck::Deck;
use super::evaluator::{DeckEvaluator, EvaluationResult};
use super::objective::{Objective, SearchOutcome};
use super::pool::WorkerPool;
use super::stats::SearchStats;

/// Main deck search context.
///
/// Owns the worker pool and statistics; borrows the profile and targets,
/// which every worker reads concurrently.
#[derive(Debug)]
pub struct DeckSearch<'p> {
    evaluator: DeckEvaluator<'p>,
    config: SearchConfig,
    pool: WorkerPool,
    stats: SearchStats,
}

impl<'p> DeckSearch<'p> {
    /// Create a search context.
    ///
    /// Fails on malformed targets, zero trials or a pool that cannot start.
    pub fn new(
        profile: &'p CraftingProfile,
        targets: &'p CraftTargets,
        config: SearchConfig,
    ) -> SimResult<Self> {
        if config.trials == 0 {
            return Err(SimError::ZeroTrials);
        }
        let evaluator = DeckEvaluator::new(profile, targets)?;
        let pool = WorkerPool::new(config.workers)?;

        Ok(Self {
            evaluator,
            config,
            pool,
            stats: SearchStats::default(),
        })
    }

    /// Search configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Statistics of the searches run so far.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Search every deck size under one objective.
    ///
    /// Sizes larger than the pool produce [`SearchOutcome::InsufficientPool`].
    pub fn search(
        &mut self,
        deck_sizes: &[usize],
        objective: Objective,
    ) -> SimResult<BTreeMap<usize, SearchOutcome>> {
        objective.check_targets(self.evaluator.targets())?;

        let base = match self.config.seed {
            Some(seed) => SimRng::new(seed),
            None => SimRng::from_entropy(),
        };
        info!(
            mode = %self.evaluator.profile().mode(),
            %objective,
            seed = base.seed(),
            workers = self.pool.workers(),
            "starting deck search"
        );

        let start = Instant::now();
        let mut outcomes = BTreeMap::new();
        for &size in deck_sizes {
            let rng = base.stream(size as u64);
            let outcome = self.search_size(size, objective, &rng)?;
            outcomes.insert(size, outcome);
        }
        self.stats.time_us += start.elapsed().as_micros() as u64;

        info!(
            decks = self.stats.decks_evaluated,
            trials = self.stats.trials_run,
            skipped = self.stats.sizes_skipped,
            decks_per_second = self.stats.decks_per_second(),
            trials_per_second = self.stats.trials_per_second(),
            "deck search complete"
        );
        Ok(outcomes)
    }

    /// Search one deck size with a given base stream.
    pub fn search_size(
        &mut self,
        size: usize,
        objective: Objective,
        rng: &SimRng,
    ) -> SimResult<SearchOutcome> {
        let profile = self.evaluator.profile();
        let pool_size = profile.pool_size();
        if size > pool_size {
            info!(deck_size = size, pool_size, "deck size exceeds card pool, skipping");
            self.stats.sizes_skipped += 1;
            return Ok(SearchOutcome::InsufficientPool {
                deck_size: size,
                pool_size,
            });
        }

        let candidates = Deck::enumerate(profile, size);
        info!(deck_size = size, pool_size, candidates = candidates.len(), "evaluating decks");

        let trials = self.config.trials;
        let evaluator = &self.evaluator;
        let results = self
            .pool
            .map(&candidates, rng, |deck, rng| {
                let result = evaluator.evaluate(deck, trials, rng)?;
                debug!(
                    deck = ?result.deck,
                    mean_score = result.mean_score,
                    "deck evaluated"
                );
                Ok(result)
            })
            .into_iter()
            .collect::<SimResult<Vec<EvaluationResult>>>()?;

        self.stats.sizes_searched += 1;
        self.stats.decks_evaluated += results.len() as u64;
        self.stats.trials_run += results.len() as u64 * u64::from(trials);

        Ok(objective.rank(results, self.evaluator.targets(), self.config.top_k))
    }
}
