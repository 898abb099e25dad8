//! Deck evaluation throughput.
//!
//! ## Usage
//!
//! ```bash
//! cargo bench --bench evaluate
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use crafting_sim::cards::CardDefinition;
use crafting_sim::core::{CraftTargets, SimRng};
use crafting_sim::rules::{CraftingMode, CraftingProfile};
use crafting_sim::search::{Deck, DeckEvaluator};

fn kitchen() -> CraftingProfile {
    CraftingProfile::new(
        CraftingMode::Kitchen,
        [
            CardDefinition::new("Heat Control", 4),
            CardDefinition::new("Cut", 3),
            CardDefinition::new("Season", 2),
            CardDefinition::new("Slow Cook", 2),
            CardDefinition::new("Ferment", 1),
            CardDefinition::new("Bake", 1),
        ],
    )
    .unwrap()
}

fn bench_evaluate(c: &mut Criterion) {
    let profile = kitchen();
    let targets = CraftTargets::new()
        .with_thresholds(vec![100, 400, 900])
        .with_rewards(vec![0.0, 5.0, 15.0, 40.0]);
    let evaluator = DeckEvaluator::new(&profile, &targets).unwrap();

    let mut group = c.benchmark_group("evaluate");
    for size in [4usize, 6, 8] {
        let deck = Deck::enumerate(&profile, size).swap_remove(0);
        group.bench_with_input(BenchmarkId::new("1k_trials", size), &deck, |b, deck| {
            let mut rng = SimRng::new(42);
            b.iter(|| evaluator.evaluate(black_box(deck), 1_000, &mut rng).unwrap());
        });
    }
    group.finish();
}

fn bench_enumerate(c: &mut Criterion) {
    let profile = kitchen();
    c.bench_function("enumerate_size_6", |b| {
        b.iter(|| Deck::enumerate(black_box(&profile), 6).len())
    });
}

criterion_group!(benches, bench_evaluate, bench_enumerate);
criterion_main!(benches);
