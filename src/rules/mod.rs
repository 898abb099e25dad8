//! Crafting rules: the per-mode capability trait and the profile that
//! binds a mode to its card pool.

mod engine;
mod mode;
mod profile;

pub use engine::{CraftingRules, DeckContents};
pub use mode::CraftingMode;
pub use profile::CraftingProfile;
