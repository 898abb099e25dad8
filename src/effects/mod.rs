//! Effect system for crafting cards.
//!
//! Effects are the building blocks card implementations compose:
//! - `Effect`: Atomic counter changes (add, subtract, multiply, charged add)
//! - `Target`: How an effect picks its counter
//! - `PrdConfig` / `PrdHistory`: Self-correcting retrigger chance
//!
//! ## Design Philosophy
//!
//! Effects know nothing about individual cards. Modes in `crate::modes`
//! decide which effects a card applies and in what order; effects only
//! guarantee the counter floor and charge accounting.

mod effect;
mod prd;
mod targeting;

pub use effect::Effect;
pub use prd::{PrdConfig, PrdHistory, MAX_CHANCE, MIN_CHANCE};
pub use targeting::{Resolved, Target};
