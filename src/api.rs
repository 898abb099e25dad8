//! Entry points for callers that already hold a profile.

use std::collections::BTreeMap;

use crate::core::{CraftTargets, SimResult, SimRng};
use crate::rules::CraftingProfile;
use crate::search::{
    Deck, DeckEvaluator, DeckSearch, EvaluationResult, Objective, SearchConfig, SearchOutcome,
};

/// Flat multiset of the profile's card names.
#[must_use]
pub fn list_card_pool(profile: &CraftingProfile) -> Vec<&str> {
    profile.card_pool()
}

/// Evaluate one deck, given by card names, over `trials` trials.
///
/// Uses an entropy-seeded RNG; see [`evaluate_deck_seeded`] for a fixed seed.
pub fn evaluate_deck(
    profile: &CraftingProfile,
    deck: &[&str],
    targets: &CraftTargets,
    trials: u32,
) -> SimResult<EvaluationResult> {
    evaluate_with(profile, deck, targets, trials, &mut SimRng::from_entropy())
}

/// [`evaluate_deck`] with a fixed seed.
pub fn evaluate_deck_seeded(
    profile: &CraftingProfile,
    deck: &[&str],
    targets: &CraftTargets,
    trials: u32,
    seed: u64,
) -> SimResult<EvaluationResult> {
    evaluate_with(profile, deck, targets, trials, &mut SimRng::new(seed))
}

fn evaluate_with(
    profile: &CraftingProfile,
    deck: &[&str],
    targets: &CraftTargets,
    trials: u32,
    rng: &mut SimRng,
) -> SimResult<EvaluationResult> {
    let deck = Deck::from_names(profile, deck.iter().copied())?;
    DeckEvaluator::new(profile, targets)?.evaluate(&deck, trials, rng)
}

/// Search every deck size and rank the candidates under `objective`.
pub fn search_best_decks(
    profile: &CraftingProfile,
    deck_sizes: &[usize],
    objective: Objective,
    targets: &CraftTargets,
    config: SearchConfig,
) -> SimResult<BTreeMap<usize, SearchOutcome>> {
    DeckSearch::new(profile, targets, config)?.search(deck_sizes, objective)
}
