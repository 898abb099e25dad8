//! Closed set of card effects.
//!
//! Every implemented card has one `CardKind` variant and one entry in
//! `CARD_NAMES`. Dispatch matches on the variant, so adding a card means
//! adding a variant, a name entry, and a match arm in its mode.

use serde::{Deserialize, Serialize};

use crate::rules::CraftingMode;

/// Effect identifier for an implemented card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    // === Kitchen ===
    HeatControl,
    Cut,
    Season,
    SlowCook,
    Ferment,
    Bake,

    // === Forging ===
    ForgeExpert,
    Forge,
    Ignite,
    HeatUp,
    Charge,

    // === Alchemy ===
    Ingredient,
    Grind,
    Enchant,
    Distill,
}

/// Card name registration table.
const CARD_NAMES: &[(&str, CardKind)] = &[
    ("Heat Control", CardKind::HeatControl),
    ("Cut", CardKind::Cut),
    ("Season", CardKind::Season),
    ("Slow Cook", CardKind::SlowCook),
    ("Ferment", CardKind::Ferment),
    ("Bake", CardKind::Bake),
    ("Forge Expert", CardKind::ForgeExpert),
    ("Forge", CardKind::Forge),
    ("Ignite", CardKind::Ignite),
    ("Heat Up", CardKind::HeatUp),
    ("Charge", CardKind::Charge),
    ("Ingredient", CardKind::Ingredient),
    ("Grind", CardKind::Grind),
    ("Enchant", CardKind::Enchant),
    ("Distill", CardKind::Distill),
];

impl CardKind {
    /// Look up the variant registered for a card name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        CARD_NAMES
            .iter()
            .find(|(registered, _)| *registered == name)
            .map(|(_, kind)| *kind)
    }

    /// Registered card name.
    #[must_use]
    pub fn name(self) -> &'static str {
        CARD_NAMES
            .iter()
            .find(|(_, kind)| *kind == self)
            .map_or("?", |(name, _)| name)
    }

    /// Crafting mode the card belongs to.
    #[must_use]
    pub const fn mode(self) -> CraftingMode {
        match self {
            CardKind::HeatControl
            | CardKind::Cut
            | CardKind::Season
            | CardKind::SlowCook
            | CardKind::Ferment
            | CardKind::Bake => CraftingMode::Kitchen,
            CardKind::ForgeExpert
            | CardKind::Forge
            | CardKind::Ignite
            | CardKind::HeatUp
            | CardKind::Charge => CraftingMode::Forging,
            CardKind::Ingredient | CardKind::Grind | CardKind::Enchant | CardKind::Distill => {
                CraftingMode::Alchemy
            }
        }
    }

    /// Iterate over all registered kinds.
    pub fn all() -> impl Iterator<Item = CardKind> {
        CARD_NAMES.iter().map(|(_, kind)| *kind)
    }
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
