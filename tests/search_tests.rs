//! Deck search tests.
//!
//! The synthetic forging pool {Forge ×2, Ignite ×2} at deck size 2 has
//! known score distributions:
//! - Forge + Forge: 36 (split) or 11 (same counter), even odds
//! - Forge + Ignite: 12 three times in four, otherwise 7
//! - Ignite + Ignite: always 4

use crafting_sim::api::search_best_decks;
use crafting_sim::cards::CardDefinition;
use crafting_sim::core::{CraftTargets, SimError};
use crafting_sim::rules::{CraftingMode, CraftingProfile};
use crafting_sim::search::{Deck, DeckComposition, Objective, SearchConfig, SearchOutcome};

fn synthetic() -> CraftingProfile {
    CraftingProfile::new(
        CraftingMode::Forging,
        [CardDefinition::new("Forge", 2), CardDefinition::new("Ignite", 2)],
    )
    .unwrap()
}

fn config() -> SearchConfig {
    SearchConfig::default()
        .with_trials(20_000)
        .with_workers(2)
        .with_seed(2024)
}

fn composition(cards: &[(&str, u32)]) -> DeckComposition {
    cards.iter().map(|&(name, n)| (name.to_string(), n)).collect()
}

/// Test enumeration collapses orderings into multisets.
#[test]
fn test_enumeration_two_by_two() {
    let profile = synthetic();
    let decks: Vec<DeckComposition> = Deck::enumerate(&profile, 2)
        .iter()
        .map(|deck| deck.composition(&profile))
        .collect();

    assert_eq!(
        decks,
        vec![
            composition(&[("Forge", 2)]),
            composition(&[("Forge", 1), ("Ignite", 1)]),
            composition(&[("Ignite", 2)]),
        ]
    );
}

/// Test that the highest average picks the split-prone Forge pair.
#[test]
fn test_highest_average_ranking() {
    let profile = synthetic();
    let outcomes = search_best_decks(
        &profile,
        &[2],
        Objective::HighestAverage,
        &CraftTargets::new(),
        config().with_top_k(2),
    )
    .unwrap();

    let SearchOutcome::Ranked(results) = &outcomes[&2] else {
        panic!("expected a ranked outcome");
    };
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].deck, composition(&[("Forge", 2)]));
    assert!((results[0].mean_score - 23.5).abs() < 1.0);
    assert_eq!(results[1].deck, composition(&[("Forge", 1), ("Ignite", 1)]));
    assert!((results[1].mean_score - 10.75).abs() < 0.5);
}

/// Test that different star tiers can prefer different decks.
#[test]
fn test_per_star_tiers_diverge() {
    let profile = synthetic();
    let targets = CraftTargets::new().with_thresholds(vec![11, 12]);
    let outcomes =
        search_best_decks(&profile, &[2], Objective::PerStar, &targets, config()).unwrap();

    let SearchOutcome::PerTier(picks) = &outcomes[&2] else {
        panic!("expected a per-tier outcome");
    };
    assert_eq!(picks.len(), 2);

    assert_eq!(picks[0].threshold, 11);
    assert_eq!(picks[0].result.deck, composition(&[("Forge", 2)]));
    assert_eq!(picks[0].hit_pct, 100.0);

    assert_eq!(picks[1].threshold, 12);
    assert_eq!(picks[1].result.deck, composition(&[("Forge", 1), ("Ignite", 1)]));
    assert!((picks[1].hit_pct - 75.0).abs() < 2.0);
}

/// Test that efficiency ranking differs from the highest average.
#[test]
fn test_reward_efficiency_ranking() {
    let profile = synthetic();
    let targets = CraftTargets::new()
        .with_thresholds(vec![11, 12])
        .with_rewards(vec![0.0, 10.0, 30.0])
        .with_cost(5);
    let outcomes = search_best_decks(
        &profile,
        &[2],
        Objective::RewardEfficiency,
        &targets,
        config(),
    )
    .unwrap();

    let SearchOutcome::Ranked(results) = &outcomes[&2] else {
        panic!("expected a ranked outcome");
    };
    let order: Vec<&DeckComposition> = results.iter().map(|r| &r.deck).collect();
    assert_eq!(
        order,
        vec![
            &composition(&[("Forge", 1), ("Ignite", 1)]),
            &composition(&[("Forge", 2)]),
            &composition(&[("Ignite", 2)]),
        ]
    );
    assert!((results[0].efficiency(5).unwrap() - 4.5).abs() < 0.2);
    assert!((results[1].efficiency(5).unwrap() - 4.0).abs() < 0.2);
    assert_eq!(results[2].expected_reward, Some(0.0));
}

/// Test the objective prerequisites.
#[test]
fn test_objective_prerequisites() {
    let profile = synthetic();
    let thresholds_only = CraftTargets::new().with_thresholds(vec![5]);

    assert_eq!(
        search_best_decks(
            &profile,
            &[2],
            Objective::RewardEfficiency,
            &thresholds_only,
            config()
        )
        .unwrap_err(),
        SimError::MissingRewardTable
    );

    let zero_cost = thresholds_only
        .clone()
        .with_rewards(vec![0.0, 1.0])
        .with_cost(0);
    assert_eq!(
        search_best_decks(&profile, &[2], Objective::RewardEfficiency, &zero_cost, config())
            .unwrap_err(),
        SimError::MissingResourceCost
    );

    let descending = CraftTargets::new().with_thresholds(vec![12, 11]);
    assert_eq!(
        search_best_decks(&profile, &[2], Objective::PerStar, &descending, config())
            .unwrap_err(),
        SimError::NonAscendingThresholds(vec![12, 11])
    );
}

/// Test mixed deck sizes, including one larger than the pool.
#[test]
fn test_multiple_sizes_with_insufficient_pool() {
    let profile = synthetic();
    let outcomes = search_best_decks(
        &profile,
        &[1, 4, 6],
        Objective::HighestAverage,
        &CraftTargets::new(),
        config().with_trials(500),
    )
    .unwrap();

    assert_eq!(outcomes.keys().copied().collect::<Vec<_>>(), vec![1, 4, 6]);
    assert_eq!(outcomes[&1].len(), 2);
    assert_eq!(outcomes[&4].len(), 1);
    assert_eq!(
        outcomes[&6],
        SearchOutcome::InsufficientPool {
            deck_size: 6,
            pool_size: 4
        }
    );
    assert!(outcomes[&6].best().is_none());
}

/// Test that every deck starts its PRD history from zero.
#[test]
fn test_prd_history_per_deck() {
    let profile = CraftingProfile::new(
        CraftingMode::Kitchen,
        [
            CardDefinition::new("Heat Control", 2),
            CardDefinition::new("Cut", 1),
            CardDefinition::new("Season", 1),
        ],
    )
    .unwrap();
    let trials = 400;

    let outcomes = search_best_decks(
        &profile,
        &[2, 3],
        Objective::HighestAverage,
        &CraftTargets::new(),
        config().with_trials(trials).with_top_k(10),
    )
    .unwrap();

    let mut checked = 0;
    for outcome in outcomes.values() {
        let SearchOutcome::Ranked(results) = outcome else {
            panic!("expected a ranked outcome");
        };
        for result in results {
            let copies = u64::from(result.deck.get("Heat Control").copied().unwrap_or(0));
            assert_eq!(result.prd.plays, u64::from(trials) * copies, "deck: {:?}", result.deck);
            checked += 1;
        }
    }
    // Size 2: four decks; size 3: three decks
    assert_eq!(checked, 7);
}

/// Test that unknown cards in the pool are searchable but inert.
#[test]
fn test_unknown_cards_are_inert() {
    let profile = CraftingProfile::new(
        CraftingMode::Forging,
        [CardDefinition::new("Forge", 1), CardDefinition::new("Polish", 1)],
    )
    .unwrap();

    let outcomes = search_best_decks(
        &profile,
        &[1],
        Objective::HighestAverage,
        &CraftTargets::new(),
        config().with_trials(100),
    )
    .unwrap();

    let SearchOutcome::Ranked(results) = &outcomes[&1] else {
        panic!("expected a ranked outcome");
    };
    assert_eq!(results[0].deck, composition(&[("Forge", 1)]));
    assert_eq!(results[1].deck, composition(&[("Polish", 1)]));
    assert_eq!(results[1].mean_score, 1.0);
}
