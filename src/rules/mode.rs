//! Crafting mode identifiers.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::SimError;
use crate::modes::{Alchemy, Forging, Kitchen};

use super::engine::CraftingRules;

static KITCHEN: Kitchen = Kitchen;
static FORGING: Forging = Forging;
static ALCHEMY: Alchemy = Alchemy;

/// Implemented crafting modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CraftingMode {
    Kitchen,
    Forging,
    Alchemy,
}

impl CraftingMode {
    /// All implemented modes.
    pub const ALL: [CraftingMode; 3] = [
        CraftingMode::Kitchen,
        CraftingMode::Forging,
        CraftingMode::Alchemy,
    ];

    /// Configuration name of the mode.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            CraftingMode::Kitchen => "kitchen",
            CraftingMode::Forging => "forging",
            CraftingMode::Alchemy => "alchemy",
        }
    }

    /// Rules implementation for the mode.
    #[must_use]
    pub fn rules(self) -> &'static dyn CraftingRules {
        match self {
            CraftingMode::Kitchen => &KITCHEN,
            CraftingMode::Forging => &FORGING,
            CraftingMode::Alchemy => &ALCHEMY,
        }
    }
}

impl FromStr for CraftingMode {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.name() == s)
            .ok_or_else(|| SimError::NoImplementation(s.to_string()))
    }
}

impl std::fmt::Display for CraftingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_modes() {
        for mode in CraftingMode::ALL {
            assert_eq!(mode.name().parse::<CraftingMode>(), Ok(mode));
            assert_eq!(mode.rules().mode(), mode);
        }
    }

    #[test]
    fn test_unknown_mode_is_no_implementation() {
        assert_eq!(
            "tailoring".parse::<CraftingMode>(),
            Err(SimError::NoImplementation("tailoring".to_string()))
        );
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&CraftingMode::Forging).unwrap();
        assert_eq!(json, "\"forging\"");
    }
}
