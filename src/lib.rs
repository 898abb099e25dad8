//! # crafting-sim
//!
//! A Monte-Carlo deck optimizer for counter-based crafting minigames.
//!
//! ## Design Principles
//!
//! 1. **Two Counters**: Every card moves a primary and a secondary counter;
//!    the score of a craft is their product. Counters never fall below 1.
//!
//! 2. **Order Matters**: Effects depend on what was played before them
//!    (charges, bonus pools, debuff stacks), so decks are evaluated by
//!    playing them in random order many times.
//!
//! 3. **Configuration Over Convention**: Card pools, item buffs, star
//!    thresholds and rewards come from `CardsConfig` / `ItemConfig`.
//!
//! ## Architecture
//!
//! - **Closed Effect Set**: Card names map to a `CardKind` variant; each
//!   crafting mode implements `CraftingRules` for its kinds.
//!
//! - **Self-Correcting Retriggers**: PRD cards steer their retrigger
//!   chance toward a target average over one deck evaluation.
//!
//! - **Parallel Search**: Every candidate deck is an independent task on a
//!   bounded `rayon` pool with its own seeded ChaCha8 stream.
//!
//! ## Modules
//!
//! - `core`: Simulation state, RNG, configuration, errors
//! - `cards`: Card definitions, kinds and registry
//! - `effects`: Atomic counter effects and PRD
//! - `rules`: CraftingRules trait, modes and profiles
//! - `modes`: Kitchen, forging and alchemy rules
//! - `search`: Deck enumeration, evaluation, ranking
//! - `api`: Core operations on a profile
//! - `items`: Per-item and batch analysis

pub mod api;
pub mod cards;
pub mod core;
pub mod effects;
pub mod items;
pub mod modes;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::core::{
    BuffSet, CardsConfig, Counter, CraftTargets, ItemConfig, ItemsConfig, RandomSource,
    ScriptedRandom, SimError, SimResult, SimRng, SimulationState,
};

pub use crate::cards::{CardDefinition, CardKind, CardRegistry};

pub use crate::effects::{Effect, PrdConfig, PrdHistory, Target};

pub use crate::rules::{CraftingMode, CraftingProfile, CraftingRules, DeckContents};

pub use crate::search::{
    Deck, DeckEvaluator, DeckSearch, EvaluationResult, Objective, SearchConfig, SearchOutcome,
    SearchStats, TierPick, WorkerPool,
};

pub use crate::api::{evaluate_deck, evaluate_deck_seeded, list_card_pool, search_best_decks};

pub use crate::items::{analyze_item, analyze_items, rank_items_by_efficiency, ItemAnalysis};
