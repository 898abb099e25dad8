//! Card registry for definition lookup.
//!
//! The `CardRegistry` stores a profile's card definitions in configuration
//! order. Cards are addressed by slot index (their position in that order)
//! in the hot simulation loop and by name at the API edge.

use rustc_hash::FxHashMap;

use crate::core::{SimError, SimResult};

use super::definition::CardDefinition;

/// Ordered registry of card definitions.
///
/// ## Example
///
/// ```
/// use crafting_sim::cards::{CardDefinition, CardRegistry};
///
/// let mut registry = CardRegistry::new();
/// registry.register(CardDefinition::new("Forge", 2)).unwrap();
/// registry.register(CardDefinition::new("Ignite", 1)).unwrap();
///
/// assert_eq!(registry.pool(), vec!["Forge", "Forge", "Ignite"]);
/// assert_eq!(registry.slot_of("Ignite"), Some(1));
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: Vec<CardDefinition>,
    by_name: FxHashMap<String, usize>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from definitions, rejecting duplicate names.
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = CardDefinition>,
    ) -> SimResult<Self> {
        let mut registry = Self::new();
        for card in definitions {
            registry.register(card)?;
        }
        Ok(registry)
    }

    /// Register a card definition and return its slot.
    pub fn register(&mut self, card: CardDefinition) -> SimResult<usize> {
        if self.by_name.contains_key(&card.name) {
            return Err(SimError::DuplicateCard(card.name));
        }
        let slot = self.cards.len();
        self.by_name.insert(card.name.clone(), slot);
        self.cards.push(card);
        Ok(slot)
    }

    /// Get a card definition by slot.
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<&CardDefinition> {
        self.cards.get(slot)
    }

    /// Get a card definition by name.
    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<&CardDefinition> {
        self.slot_of(name).and_then(|slot| self.get(slot))
    }

    /// Slot of a card name.
    #[must_use]
    pub fn slot_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    /// Number of distinct cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over definitions in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.iter()
    }

    /// Total number of card instances across all definitions.
    #[must_use]
    pub fn total_quantity(&self) -> usize {
        self.cards.iter().map(|c| c.quantity as usize).sum()
    }

    /// Flat multiset of card names, each repeated by its quantity.
    #[must_use]
    pub fn pool(&self) -> Vec<&str> {
        self.cards
            .iter()
            .flat_map(|c| std::iter::repeat(c.name.as_str()).take(c.quantity as usize))
            .collect()
    }

    /// Card name → quantity, in slot order.
    #[must_use]
    pub fn summary(&self) -> Vec<(&str, u32)> {
        self.cards
            .iter()
            .map(|c| (c.name.as_str(), c.quantity))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_get() {
        let mut registry = CardRegistry::new();

        let slot = registry.register(CardDefinition::new("Cut", 2)).unwrap();
        assert_eq!(slot, 0);

        assert_eq!(registry.get(0).unwrap().name, "Cut");
        assert_eq!(registry.get_by_name("Cut").unwrap().quantity, 2);
        assert!(registry.get(9).is_none());
        assert!(registry.get_by_name("Season").is_none());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut registry = CardRegistry::new();
        registry.register(CardDefinition::new("Cut", 2)).unwrap();

        let err = registry.register(CardDefinition::new("Cut", 1)).unwrap_err();
        assert_eq!(err, SimError::DuplicateCard("Cut".to_string()));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_pool_flattens_by_quantity() {
        let registry = CardRegistry::from_definitions([
            CardDefinition::new("A", 2),
            CardDefinition::new("B", 0),
            CardDefinition::new("C", 1),
        ])
        .unwrap();

        assert_eq!(registry.pool(), vec!["A", "A", "C"]);
        assert_eq!(registry.total_quantity(), 3);
        assert_eq!(registry.summary(), vec![("A", 2), ("B", 0), ("C", 1)]);
    }

    #[test]
    fn test_slots_follow_definition_order() {
        let registry = CardRegistry::from_definitions([
            CardDefinition::new("Season", 1),
            CardDefinition::new("Cut", 1),
        ])
        .unwrap();

        let names: Vec<_> = registry.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Season", "Cut"]);
        assert_eq!(registry.slot_of("Cut"), Some(1));
    }
}
