//! Decks as multisets of a profile's cards.
//!
//! A `Deck` stores one count per card slot of its profile, so two decks
//! holding the same cards in a different order are the same deck.

use std::collections::BTreeMap;

use smallvec::SmallVec;

use crate::cards::CardKind;
use crate::core::{SimError, SimResult};
use crate::rules::CraftingProfile;

/// Per-slot counts. Profiles rarely hold more than 8 distinct cards.
pub type SlotCounts = SmallVec<[u32; 8]>;

/// Card name → copies in a deck.
pub type DeckComposition = BTreeMap<String, u32>;

/// A multiset of cards drawn from one profile.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Deck {
    counts: SlotCounts,
}

impl Deck {
    /// Build a deck from per-slot counts.
    ///
    /// Counts beyond the profile's slots, or above a card's quantity, are
    /// rejected.
    pub fn from_counts(profile: &CraftingProfile, counts: &[u32]) -> SimResult<Self> {
        let registry = profile.registry();
        if counts.len() > registry.len() {
            return Err(SimError::SlotsExceeded {
                given: counts.len(),
                slots: registry.len(),
            });
        }

        let mut slots: SlotCounts = SmallVec::from_elem(0, registry.len());
        for (slot, &requested) in counts.iter().enumerate() {
            if let Some(card) = registry.get(slot) {
                if requested > card.quantity {
                    return Err(SimError::QuantityExceeded {
                        card: card.name.clone(),
                        requested,
                        available: card.quantity,
                    });
                }
            }
            slots[slot] = requested;
        }

        Ok(Self { counts: slots })
    }

    /// Build a deck from card names, one entry per copy.
    ///
    /// ```
    /// use crafting_sim::cards::CardDefinition;
    /// use crafting_sim::rules::{CraftingMode, CraftingProfile};
    /// use crafting_sim::search::Deck;
    ///
    /// let profile = CraftingProfile::new(
    ///     CraftingMode::Forging,
    ///     [CardDefinition::new("Forge", 2), CardDefinition::new("Ignite", 1)],
    /// )
    /// .unwrap();
    ///
    /// let a = Deck::from_names(&profile, ["Forge", "Ignite"]).unwrap();
    /// let b = Deck::from_names(&profile, ["Ignite", "Forge"]).unwrap();
    /// assert_eq!(a, b);
    /// assert!(Deck::from_names(&profile, ["Ignite", "Ignite"]).is_err());
    /// ```
    pub fn from_names<'n>(
        profile: &CraftingProfile,
        names: impl IntoIterator<Item = &'n str>,
    ) -> SimResult<Self> {
        let registry = profile.registry();
        let mut counts: SlotCounts = SmallVec::from_elem(0, registry.len());
        for name in names {
            let slot = registry
                .slot_of(name)
                .ok_or_else(|| SimError::UnknownCard(name.to_string()))?;
            counts[slot] += 1;
        }
        Self::from_counts(profile, &counts)
    }

    /// Per-slot counts.
    #[must_use]
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    /// Copies of the card in a slot.
    #[must_use]
    pub fn count(&self, slot: usize) -> u32 {
        self.counts.get(slot).copied().unwrap_or(0)
    }

    /// Total number of cards.
    #[must_use]
    pub fn size(&self) -> usize {
        self.counts.iter().map(|&n| n as usize).sum()
    }

    /// Flat list of slots, one entry per copy, in slot order.
    #[must_use]
    pub fn instances(&self) -> Vec<usize> {
        let mut slots = Vec::with_capacity(self.size());
        for (slot, &n) in self.counts.iter().enumerate() {
            slots.extend(std::iter::repeat(slot).take(n as usize));
        }
        slots
    }

    /// Name → count view of the deck. Cards with zero copies are omitted.
    #[must_use]
    pub fn composition(&self, profile: &CraftingProfile) -> DeckComposition {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &n)| n > 0)
            .filter_map(|(slot, &n)| profile.registry().get(slot).map(|c| (c.name.clone(), n)))
            .collect()
    }

    /// Effect kinds and counts, for end-of-cycle hooks.
    ///
    /// Cards without an effect in the profile's mode are left out.
    #[must_use]
    pub fn kinds(&self, profile: &CraftingProfile) -> SmallVec<[(CardKind, u32); 8]> {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &n)| n > 0)
            .filter_map(|(slot, &n)| profile.kind_at(slot).map(|kind| (kind, n)))
            .collect()
    }

    /// Every distinct deck of exactly `size` cards the pool allows.
    ///
    /// Decks come out in the order their first occurrence would appear
    /// among the pool's combinations: as many copies of the earliest card
    /// as possible first. Empty when `size` exceeds the pool.
    #[must_use]
    pub fn enumerate(profile: &CraftingProfile, size: usize) -> Vec<Deck> {
        let quantities: Vec<u32> = profile.registry().iter().map(|c| c.quantity).collect();
        let mut decks = Vec::new();
        if size > profile.pool_size() {
            return decks;
        }

        let mut current: SlotCounts = SmallVec::from_elem(0, quantities.len());
        Self::fill(&quantities, 0, size as u32, &mut current, &mut decks);
        decks
    }

    fn fill(
        quantities: &[u32],
        slot: usize,
        remaining: u32,
        current: &mut SlotCounts,
        decks: &mut Vec<Deck>,
    ) {
        if remaining == 0 {
            decks.push(Deck {
                counts: current.clone(),
            });
            return;
        }
        if slot == quantities.len() {
            return;
        }

        // Prune when the remaining slots cannot hold what is left
        let capacity: u32 = quantities[slot..].iter().sum();
        if capacity < remaining {
            return;
        }

        for take in (0..=quantities[slot].min(remaining)).rev() {
            current[slot] = take;
            Self::fill(quantities, slot + 1, remaining - take, current, decks);
        }
        current[slot] = 0;
    }
}
