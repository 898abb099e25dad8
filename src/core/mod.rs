//! Core simulator types: state, RNG, configuration, errors.
//!
//! This module contains the building blocks every crafting mode shares.
//! Modes customize behavior through `rules::CraftingRules`, not by
//! modifying the core.

pub mod config;
pub mod error;
pub mod rng;
pub mod state;

pub use config::{CardsConfig, CraftTargets, ItemConfig, ItemsConfig};
pub use error::{SimError, SimResult};
pub use rng::{RandomSource, ScriptedRandom, SimRng};
pub use state::{BuffSet, Counter, SimulationState, COUNTER_FLOOR};
