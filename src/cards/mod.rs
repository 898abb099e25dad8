//! Card system: definitions, effect kinds, and registry.
//!
//! ## Key Types
//!
//! - `CardDefinition`: Configured card data (name, quantity, value range, PRD)
//! - `CardKind`: Closed set of implemented effects, looked up by name
//! - `CardRegistry`: Ordered definition lookup and pool flattening
//!
//! ## Unknown Cards
//!
//! Card names without a registered `CardKind` stay in the pool and can be
//! drawn into decks; playing them does nothing.

pub mod definition;
pub mod kind;
pub mod registry;

pub use definition::{CardDefinition, ValueRange};
pub use kind::CardKind;
pub use registry::CardRegistry;
