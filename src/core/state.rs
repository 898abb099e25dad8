//! Per-trial simulation state.
//!
//! ## SimulationState
//!
//! One trial of one deck mutates a single `SimulationState`:
//! - The two scoring counters (primary, secondary), both starting at 1
//! - Named accumulators shared by the crafting modes
//! - The item buffs active for the whole evaluation (read-only)
//! - A borrow of the deck-level [`PrdHistory`]
//!
//! Counters never drop below 1: every decrement goes through
//! [`SimulationState::subtract`], which clamps.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::effects::PrdHistory;

/// Floor applied to both counters after any decrement.
pub const COUNTER_FLOOR: f64 = 1.0;

/// One of the two scoring counters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Counter {
    /// First counter ("yellow" in-game).
    Primary,
    /// Second counter ("blue" in-game).
    Secondary,
}

impl Counter {
    /// The other counter.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Counter::Primary => Counter::Secondary,
            Counter::Secondary => Counter::Primary,
        }
    }
}

/// Set of item buff identifiers active during an evaluation.
///
/// Buff ids come from item configuration (e.g. `"carve_box_buff"`).
/// Modes query the ones they understand and ignore the rest.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuffSet(FxHashSet<String>);

impl BuffSet {
    /// Create an empty buff set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a buff (builder pattern).
    #[must_use]
    pub fn with(mut self, buff: impl Into<String>) -> Self {
        self.insert(buff);
        self
    }

    /// Activate a buff.
    pub fn insert(&mut self, buff: impl Into<String>) {
        self.0.insert(buff.into());
    }

    /// Check whether a buff is active.
    #[must_use]
    pub fn contains(&self, buff: &str) -> bool {
        self.0.contains(buff)
    }

    /// Number of active buffs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if no buff is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for BuffSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Mutable state of a single trial.
///
/// Created fresh for every trial and dropped afterwards. The PRD history
/// borrow is the only piece that outlives the trial.
#[derive(Debug)]
pub struct SimulationState<'a> {
    primary: f64,
    secondary: f64,

    // === Forging ===
    /// Flat bonus added to every artisan card (Heat Up).
    pub artisan_bonus: i64,
    /// Self-reinforcing pool of Forge Expert.
    pub forge_expert_bonus: i64,
    /// Forge Expert plays this trial.
    pub forge_expert_plays: u32,
    /// Pending charge tokens.
    pub charge_count: u32,
    /// Set once the first Forge has resolved.
    pub first_forge_played: bool,

    // === Kitchen ===
    /// Bonus to both counters on every Heat Control flip (Slow Cook).
    pub slow_cook_bonus: i64,
    /// Ferment: one guaranteed extra Heat Control flip.
    pub ferment_active: bool,
    /// Base plus PRD flips of Heat Control this trial.
    pub heat_control_triggers: u32,

    // === Alchemy ===
    /// Pending Enchant debuff stacks.
    pub enchant_debuff: u32,

    buffs: &'a BuffSet,
    prd: &'a mut PrdHistory,
}

impl<'a> SimulationState<'a> {
    /// Fresh state: counters at 1, accumulators zeroed.
    pub fn new(prd: &'a mut PrdHistory, buffs: &'a BuffSet) -> Self {
        Self {
            primary: COUNTER_FLOOR,
            secondary: COUNTER_FLOOR,
            artisan_bonus: 0,
            forge_expert_bonus: 0,
            forge_expert_plays: 0,
            charge_count: 0,
            first_forge_played: false,
            slow_cook_bonus: 0,
            ferment_active: false,
            heat_control_triggers: 0,
            enchant_debuff: 0,
            buffs,
            prd,
        }
    }

    /// Current value of a counter.
    #[must_use]
    pub fn get(&self, counter: Counter) -> f64 {
        match counter {
            Counter::Primary => self.primary,
            Counter::Secondary => self.secondary,
        }
    }

    /// Primary counter value.
    #[must_use]
    pub fn primary(&self) -> f64 {
        self.primary
    }

    /// Secondary counter value.
    #[must_use]
    pub fn secondary(&self) -> f64 {
        self.secondary
    }

    /// Final score: product of the counters.
    #[must_use]
    pub fn score(&self) -> f64 {
        self.primary * self.secondary
    }

    fn slot(&mut self, counter: Counter) -> &mut f64 {
        match counter {
            Counter::Primary => &mut self.primary,
            Counter::Secondary => &mut self.secondary,
        }
    }

    /// Add to a counter. Negative amounts are routed through `subtract`.
    pub fn add(&mut self, counter: Counter, amount: f64) {
        if amount < 0.0 {
            self.subtract(counter, -amount);
        } else {
            *self.slot(counter) += amount;
        }
    }

    /// Add the same amount to both counters.
    pub fn add_both(&mut self, amount: f64) {
        self.add(Counter::Primary, amount);
        self.add(Counter::Secondary, amount);
    }

    /// Subtract from a counter, clamping at the floor.
    pub fn subtract(&mut self, counter: Counter, amount: f64) {
        let slot = self.slot(counter);
        *slot = (*slot - amount).max(COUNTER_FLOOR);
    }

    /// Multiply a counter. Factors below 1 are clamped at the floor.
    pub fn multiply(&mut self, counter: Counter, factor: f64) {
        let slot = self.slot(counter);
        *slot = (*slot * factor).max(COUNTER_FLOOR);
    }

    /// Counter currently holding the higher value. Ties go to primary.
    #[must_use]
    pub fn highest(&self) -> Counter {
        if self.primary >= self.secondary {
            Counter::Primary
        } else {
            Counter::Secondary
        }
    }

    /// Counter currently holding the lower value. Ties go to primary.
    #[must_use]
    pub fn lowest(&self) -> Counter {
        if self.primary <= self.secondary {
            Counter::Primary
        } else {
            Counter::Secondary
        }
    }

    /// Check whether an item buff is active.
    #[must_use]
    pub fn has_buff(&self, buff: &str) -> bool {
        self.buffs.contains(buff)
    }

    /// Deck-level PRD history.
    #[must_use]
    pub fn prd(&self) -> &PrdHistory {
        self.prd
    }

    /// Mutable access to the deck-level PRD history.
    pub fn prd_mut(&mut self) -> &mut PrdHistory {
        self.prd
    }
}
