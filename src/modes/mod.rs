//! Crafting mode implementations.
//!
//! Each mode is a unit struct implementing [`CraftingRules`](crate::rules::CraftingRules):
//! - `kitchen`: Heat Control flips with PRD retriggers, Bake evening
//! - `forging`: artisan bonuses, charge tokens, Forge Expert pool
//! - `alchemy`: highest/lowest targeting, Enchant debuff stacks
//!
//! Item buff identifiers each mode understands are exported as constants.

pub mod alchemy;
pub mod forging;
pub mod kitchen;

pub use alchemy::Alchemy;
pub use forging::Forging;
pub use kitchen::Kitchen;
