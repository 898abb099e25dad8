//! Rules trait for crafting mode implementations.
//!
//! Modes implement `CraftingRules` to define:
//! - What each of their cards does
//! - Recurring effects before every card
//! - Deck-composition effects after the last card

use crate::cards::{CardDefinition, CardKind};
use crate::core::{RandomSource, SimulationState};

use super::mode::CraftingMode;

/// Card kinds and counts of the deck being played.
///
/// Handed to end-of-cycle hooks, which react to composition rather than
/// play order.
#[derive(Clone, Copy, Debug)]
pub struct DeckContents<'a> {
    kinds: &'a [(CardKind, u32)],
}

impl<'a> DeckContents<'a> {
    /// Wrap a kind → count listing. Unknown cards are left out by the caller.
    #[must_use]
    pub fn new(kinds: &'a [(CardKind, u32)]) -> Self {
        Self { kinds }
    }

    /// Copies of a kind in the deck.
    #[must_use]
    pub fn count(&self, kind: CardKind) -> u32 {
        self.kinds
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, n)| *n)
            .sum()
    }

    /// True if the deck holds at least one copy of a kind.
    #[must_use]
    pub fn contains(&self, kind: CardKind) -> bool {
        self.count(kind) > 0
    }
}

/// Rules of one crafting mode.
///
/// One implementation per `CraftingMode`. Hooks default to no-ops; modes
/// override the ones they need.
///
/// ## Implementation Notes
///
/// - `apply_card`: only receives kinds whose `mode()` matches this mode
/// - `play_card`: override to trigger a card more than once
/// - All randomness must go through `rng`
pub trait CraftingRules: Send + Sync + std::fmt::Debug {
    /// Mode these rules implement.
    fn mode(&self) -> CraftingMode;

    /// Apply a card's own effect once.
    fn apply_card(
        &self,
        kind: CardKind,
        card: &CardDefinition,
        state: &mut SimulationState<'_>,
        rng: &mut dyn RandomSource,
    );

    /// Recurring effects run before every card.
    fn pre_card(&self, _state: &mut SimulationState<'_>, _rng: &mut dyn RandomSource) {}

    /// Play a card. Defaults to a single `apply_card`.
    fn play_card(
        &self,
        kind: CardKind,
        card: &CardDefinition,
        state: &mut SimulationState<'_>,
        rng: &mut dyn RandomSource,
    ) {
        self.apply_card(kind, card, state, rng);
    }

    /// Composition-dependent effects run once after the last card.
    fn end_of_cycle(
        &self,
        _deck: &DeckContents<'_>,
        _state: &mut SimulationState<'_>,
        _rng: &mut dyn RandomSource,
    ) {
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_contents() {
        let kinds = [(CardKind::Bake, 1), (CardKind::Cut, 2)];
        let contents = DeckContents::new(&kinds);

        assert!(contents.contains(CardKind::Bake));
        assert_eq!(contents.count(CardKind::Cut), 2);
        assert!(!contents.contains(CardKind::Season));
    }
}
