//! Card definitions - static card data.
//!
//! `CardDefinition` holds what the card configuration says about a card:
//! its name, how many copies the pool holds, and the optional numeric
//! parameters some effects read (value range, PRD retrigger tuning).
//!
//! Serde field names match the external card configuration
//! (`card_name`, `card_quantity`, `value_range`, `prd_config`).

use serde::{Deserialize, Serialize};

use crate::effects::PrdConfig;

use super::kind::CardKind;

/// Inclusive `[min, max]` range of an effect's numeric value.
pub type ValueRange = (i64, i64);

/// Static card definition.
///
/// ## Example
///
/// ```
/// use crafting_sim::cards::{CardDefinition, CardKind};
///
/// let cut = CardDefinition::new("Cut", 3).with_value_range(4, 8);
///
/// assert_eq!(cut.kind(), Some(CardKind::Cut));
/// assert_eq!(cut.value_range_or((1, 1)), (4, 8));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Card name, unique within a profile.
    #[serde(rename = "card_name")]
    pub name: String,

    /// Copies available in the pool.
    #[serde(rename = "card_quantity")]
    pub quantity: u32,

    /// Numeric range for effects that roll a value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_range: Option<ValueRange>,

    /// PRD retrigger tuning.
    #[serde(rename = "prd_config", default, skip_serializing_if = "Option::is_none")]
    pub prd: Option<PrdConfig>,
}

impl CardDefinition {
    /// Create a new card definition.
    #[must_use]
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
            value_range: None,
            prd: None,
        }
    }

    /// Set the value range (builder pattern).
    #[must_use]
    pub fn with_value_range(mut self, min: i64, max: i64) -> Self {
        self.value_range = Some((min, max));
        self
    }

    /// Set the PRD configuration (builder pattern).
    #[must_use]
    pub fn with_prd(mut self, prd: PrdConfig) -> Self {
        self.prd = Some(prd);
        self
    }

    /// Effect variant registered under this card's name.
    #[must_use]
    pub fn kind(&self) -> Option<CardKind> {
        CardKind::from_name(&self.name)
    }

    /// Value range, or the given default.
    #[must_use]
    pub fn value_range_or(&self, default: ValueRange) -> ValueRange {
        self.value_range.unwrap_or(default)
    }

    /// PRD configuration, or the documented defaults.
    #[must_use]
    pub fn prd_or_default(&self) -> PrdConfig {
        self.prd.unwrap_or_default()
    }
}
