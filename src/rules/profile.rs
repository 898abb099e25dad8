//! Crafting profile: one mode's cards plus its rules.

use tracing::debug;

use crate::cards::{CardDefinition, CardKind, CardRegistry};
use crate::core::{CardsConfig, RandomSource, SimError, SimResult, SimulationState};

use super::engine::{CraftingRules, DeckContents};
use super::mode::CraftingMode;

/// Card definitions of one crafting mode and the rules that play them.
///
/// Immutable after construction and shared read-only by every worker.
///
/// ## Example
///
/// ```
/// use crafting_sim::cards::CardDefinition;
/// use crafting_sim::rules::{CraftingMode, CraftingProfile};
///
/// let profile = CraftingProfile::new(
///     CraftingMode::Forging,
///     [CardDefinition::new("Forge", 2), CardDefinition::new("Charge", 1)],
/// )
/// .unwrap();
///
/// assert_eq!(profile.card_pool(), vec!["Forge", "Forge", "Charge"]);
/// ```
#[derive(Debug)]
pub struct CraftingProfile {
    mode: CraftingMode,
    rules: &'static dyn CraftingRules,
    registry: CardRegistry,
    /// Effect per slot; `None` for names this mode does not implement.
    kinds: Vec<Option<CardKind>>,
}

impl CraftingProfile {
    /// Build a profile from card definitions.
    ///
    /// Fails on duplicate card names. Names without an implementation in
    /// this mode are kept in the pool and play as no-ops.
    pub fn new(
        mode: CraftingMode,
        definitions: impl IntoIterator<Item = CardDefinition>,
    ) -> SimResult<Self> {
        let registry = CardRegistry::from_definitions(definitions)?;
        let kinds = registry
            .iter()
            .map(|card| {
                let kind = card.kind().filter(|kind| kind.mode() == mode);
                if kind.is_none() {
                    debug!(card = %card.name, %mode, "card has no effect in this mode");
                }
                kind
            })
            .collect();

        Ok(Self {
            mode,
            rules: mode.rules(),
            registry,
            kinds,
        })
    }

    /// Build the profile for a mode name from the card configuration.
    ///
    /// An unknown mode or a mode without card data is `NoImplementation`.
    pub fn from_config(mode_name: &str, cards: &CardsConfig) -> SimResult<Self> {
        let mode: CraftingMode = mode_name.parse()?;
        let definitions = cards
            .get(mode_name)
            .ok_or_else(|| SimError::NoImplementation(mode_name.to_string()))?;
        Self::new(mode, definitions.iter().cloned())
    }

    /// Mode of this profile.
    #[must_use]
    pub fn mode(&self) -> CraftingMode {
        self.mode
    }

    /// Underlying definitions.
    #[must_use]
    pub fn registry(&self) -> &CardRegistry {
        &self.registry
    }

    /// Flat multiset of card names.
    #[must_use]
    pub fn card_pool(&self) -> Vec<&str> {
        self.registry.pool()
    }

    /// Card name → available quantity.
    #[must_use]
    pub fn pool_summary(&self) -> Vec<(&str, u32)> {
        self.registry.summary()
    }

    /// Total number of card instances.
    #[must_use]
    pub fn pool_size(&self) -> usize {
        self.registry.total_quantity()
    }

    /// Definition of a card by name.
    #[must_use]
    pub fn definition(&self, name: &str) -> Option<&CardDefinition> {
        self.registry.get_by_name(name)
    }

    /// Effect a card name dispatches to in this profile.
    #[must_use]
    pub fn effect_of(&self, name: &str) -> Option<CardKind> {
        self.registry
            .slot_of(name)
            .and_then(|slot| self.kind_at(slot))
    }

    /// Effect of the card in a slot.
    #[must_use]
    pub fn kind_at(&self, slot: usize) -> Option<CardKind> {
        self.kinds.get(slot).copied().flatten()
    }

    /// Run the mode's recurring pre-card effects.
    pub fn pre_card(&self, state: &mut SimulationState<'_>, rng: &mut dyn RandomSource) {
        self.rules.pre_card(state, rng);
    }

    /// Play the card in a slot. Unimplemented cards do nothing.
    pub fn play_slot(
        &self,
        slot: usize,
        state: &mut SimulationState<'_>,
        rng: &mut dyn RandomSource,
    ) {
        if let (Some(kind), Some(card)) = (self.kind_at(slot), self.registry.get(slot)) {
            self.rules.play_card(kind, card, state, rng);
        }
    }

    /// Play a card by name. Unknown names do nothing.
    pub fn play_card(
        &self,
        name: &str,
        state: &mut SimulationState<'_>,
        rng: &mut dyn RandomSource,
    ) {
        if let Some(slot) = self.registry.slot_of(name) {
            self.play_slot(slot, state, rng);
        }
    }

    /// Run the mode's end-of-cycle effects.
    pub fn end_of_cycle(
        &self,
        deck: &DeckContents<'_>,
        state: &mut SimulationState<'_>,
        rng: &mut dyn RandomSource,
    ) {
        self.rules.end_of_cycle(deck, state, rng);
    }
}
