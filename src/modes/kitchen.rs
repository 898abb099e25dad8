//! Kitchen crafting rules.
//!
//! Heat Control is the engine of the mode: every flip adds the Slow Cook
//! bonus to both counters and 10 to a random one, and the PRD chain adds
//! further flips. Bake evens the counters out once the cycle is over.

use crate::cards::{CardDefinition, CardKind};
use crate::core::{RandomSource, SimulationState};
use crate::effects::Effect;
use crate::rules::{CraftingMode, CraftingRules, DeckContents};

/// Cut always rolls the top of its range.
pub const SALTED_RAISIN_BUFF: &str = "salted_raisin_buff";

/// End-of-cycle +3 to both counters after enough Heat Control flips.
pub const DRIED_MUSHROOM_BUFF: &str = "dried_mushroom_buff";

/// Heat Control flips needed for the dried mushroom bonus.
pub const DRIED_MUSHROOM_TRIGGERS: u32 = 7;

const DRIED_MUSHROOM_BONUS: f64 = 3.0;
const FLIP_BONUS: f64 = 10.0;
const SLOW_COOK_STEP: i64 = 4;
const DEFAULT_CUT_RANGE: (i64, i64) = (4, 8);

/// Rules of the kitchen.
#[derive(Clone, Copy, Debug, Default)]
pub struct Kitchen;

impl Kitchen {
    fn flip(state: &mut SimulationState<'_>, rng: &mut dyn RandomSource) {
        state.add_both(state.slow_cook_bonus as f64);
        Effect::add_random(FLIP_BONUS).apply(state, rng);
    }

    fn heat_control(
        card: &CardDefinition,
        state: &mut SimulationState<'_>,
        rng: &mut dyn RandomSource,
    ) {
        Self::flip(state, rng);
        if state.ferment_active {
            Self::flip(state, rng);
        }

        let prd = card.prd_or_default();
        let extra = prd.roll_chain(state.prd(), rng);
        for _ in 0..extra {
            Self::flip(state, rng);
        }

        state.prd_mut().record(extra);
        state.heat_control_triggers += 1 + extra;
    }

    fn cut(card: &CardDefinition, state: &mut SimulationState<'_>, rng: &mut dyn RandomSource) {
        let (low, high) = card.value_range_or(DEFAULT_CUT_RANGE);
        let counter = rng.pick_counter();
        let amount = if state.has_buff(SALTED_RAISIN_BUFF) {
            low.max(high)
        } else {
            rng.range_inclusive(low, high)
        };
        state.add(counter, amount as f64);
    }
}

impl CraftingRules for Kitchen {
    fn mode(&self) -> CraftingMode {
        CraftingMode::Kitchen
    }

    fn apply_card(
        &self,
        kind: CardKind,
        card: &CardDefinition,
        state: &mut SimulationState<'_>,
        rng: &mut dyn RandomSource,
    ) {
        match kind {
            CardKind::HeatControl => Self::heat_control(card, state, rng),
            CardKind::Cut => Self::cut(card, state, rng),
            CardKind::Season => {
                Effect::multiply_random(2).apply(state, rng);
            }
            CardKind::SlowCook => state.slow_cook_bonus += SLOW_COOK_STEP,
            CardKind::Ferment => state.ferment_active = true,
            // Bake acts at end of cycle
            _ => {}
        }
    }

    fn end_of_cycle(
        &self,
        deck: &DeckContents<'_>,
        state: &mut SimulationState<'_>,
        rng: &mut dyn RandomSource,
    ) {
        if deck.contains(CardKind::Bake) {
            let high = state.highest();
            let low = high.other();
            let adjustment = (state.get(high) - state.get(low)) / 2.0;
            state.subtract(high, adjustment);
            state.add(low, adjustment);
        }

        if state.has_buff(DRIED_MUSHROOM_BUFF)
            && state.heat_control_triggers >= DRIED_MUSHROOM_TRIGGERS
        {
            Effect::add_both(DRIED_MUSHROOM_BONUS).apply(state, rng);
        }
    }
}
