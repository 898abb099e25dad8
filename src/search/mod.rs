//! Deck search and Monte-Carlo evaluation.
//!
//! ## Key Components
//!
//! - [`Deck`]: Multiset of a profile's cards, plus exhaustive enumeration
//! - [`DeckEvaluator`]: Repeated randomized trials of one deck
//! - [`DeckSearch`]: Parallel evaluation of every candidate and ranking
//! - [`Objective`]: Highest average, per-star, or reward efficiency
//!
//! ## Usage
//!
//! ```
//! use crafting_sim::cards::CardDefinition;
//! use crafting_sim::core::CraftTargets;
//! use crafting_sim::rules::{CraftingMode, CraftingProfile};
//! use crafting_sim::search::{DeckSearch, Objective, SearchConfig};
//!
//! let profile = CraftingProfile::new(
//!     CraftingMode::Kitchen,
//!     [CardDefinition::new("Season", 2), CardDefinition::new("Cut", 2)],
//! )
//! .unwrap();
//! let targets = CraftTargets::new();
//! let config = SearchConfig::default().with_trials(500).with_seed(7);
//!
//! let mut search = DeckSearch::new(&profile, &targets, config).unwrap();
//! let outcomes = search.search(&[2], Objective::HighestAverage).unwrap();
//!
//! assert_eq!(outcomes[&2].len(), 3);
//! ```

mod config;
mod deck;
mod evaluator;
mod objective;
mod pool;
#[allow(clippy::module_inception)]
mod search;
mod stats;

pub use config::SearchConfig;
pub use deck::{Deck, DeckComposition, SlotCounts};
pub use evaluator::{DeckEvaluator, EvaluationResult};
pub use objective::{Objective, SearchOutcome, TierPick};
pub use pool::WorkerPool;
pub use search::DeckSearch;
pub use stats::SearchStats;
