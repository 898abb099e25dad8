//! Item analysis: search the best decks for configured craftable items.
//!
//! An item names its crafting mode, deck size and scoring targets. The
//! functions here resolve the mode's profile from the card configuration
//! and run a [`DeckSearch`] for the item's deck size.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::{CardsConfig, ItemConfig, ItemsConfig, SimError, SimResult};
use crate::rules::CraftingProfile;
use crate::search::{DeckSearch, EvaluationResult, Objective, SearchConfig, SearchOutcome};

/// Search result for one item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemAnalysis {
    /// Item name.
    pub item_name: String,
    /// Crafting mode name.
    pub crafting_type: String,
    /// Deck size searched.
    pub deck_size: usize,
    /// Star thresholds of the item, if any.
    pub star_thresholds: Option<Vec<u64>>,
    /// Resource cost of one craft, if any.
    pub stamina_cost: Option<u32>,
    /// Outcome for the item's deck size.
    pub outcome: SearchOutcome,
}

impl ItemAnalysis {
    /// Best deck of the outcome.
    #[must_use]
    pub fn top_deck(&self) -> Option<&EvaluationResult> {
        self.outcome.best()
    }

    /// Top deck's expected reward per unit of cost.
    #[must_use]
    pub fn efficiency(&self) -> Option<f64> {
        let cost = self.stamina_cost?;
        self.top_deck()?.efficiency(cost)
    }
}

/// Analyze a single item.
///
/// Fails with `NoImplementation` when the item's mode is not implemented
/// or has no card data.
pub fn analyze_item(
    name: &str,
    item: &ItemConfig,
    cards: &CardsConfig,
    objective: Objective,
    config: &SearchConfig,
) -> SimResult<ItemAnalysis> {
    let profile = CraftingProfile::from_config(&item.crafting_type, cards)?;
    info!(
        item = name,
        mode = %profile.mode(),
        deck_size = item.deck_size,
        "analyzing item"
    );

    let mut search = DeckSearch::new(&profile, &item.targets, config.clone())?;
    let mut outcomes = search.search(&[item.deck_size], objective)?;
    let outcome = outcomes
        .remove(&item.deck_size)
        .unwrap_or(SearchOutcome::Ranked(Vec::new()));

    Ok(ItemAnalysis {
        item_name: name.to_string(),
        crafting_type: item.crafting_type.clone(),
        deck_size: item.deck_size,
        star_thresholds: item.targets.star_thresholds.clone(),
        stamina_cost: item.targets.stamina_cost,
        outcome,
    })
}

/// Analyze every item with star thresholds, grouped by crafting type.
///
/// With `filter_mode`, only items of that crafting type run. Items whose
/// mode has no implementation or data are logged and skipped; any other
/// error aborts the batch.
pub fn analyze_items(
    items: &ItemsConfig,
    cards: &CardsConfig,
    filter_mode: Option<&str>,
    objective: Objective,
    config: &SearchConfig,
) -> SimResult<BTreeMap<String, Vec<ItemAnalysis>>> {
    let mut grouped: BTreeMap<String, Vec<ItemAnalysis>> = BTreeMap::new();

    for (name, item) in items {
        if filter_mode.is_some_and(|mode| mode != item.crafting_type) {
            continue;
        }
        if item.targets.thresholds().is_empty() {
            debug!(item = %name, "no star thresholds, skipping");
            continue;
        }

        match analyze_item(name, item, cards, objective, config) {
            Ok(analysis) => grouped
                .entry(item.crafting_type.clone())
                .or_default()
                .push(analysis),
            Err(SimError::NoImplementation(mode)) => {
                warn!(item = %name, %mode, "no data or implementation, skipping");
            }
            Err(err) => return Err(err),
        }
    }

    Ok(grouped)
}

/// Sort a group by top-deck efficiency, best first.
///
/// Items without a cost or reward table sort last, keeping their order.
pub fn rank_items_by_efficiency(analyses: &mut [ItemAnalysis]) {
    analyses.sort_by(|a, b| match (a.efficiency(), b.efficiency()) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}
