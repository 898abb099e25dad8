//! Forging crafting rules.
//!
//! Artisan cards (Forge, Forge Expert) scale with Heat Up and can be
//! upgraded to hit both counters by Charge tokens. Forge Expert feeds a
//! pool that makes every later Forge Expert of the trial stronger.

use crate::cards::{CardDefinition, CardKind};
use crate::core::{RandomSource, SimulationState};
use crate::effects::Effect;
use crate::rules::{CraftingMode, CraftingRules};

/// The first Forge of a trial hits both counters without using a charge.
pub const CARVE_BOX_BUFF: &str = "carve_box_buff";

/// Forge Expert may trigger a second time.
pub const COPPER_STEWPOT_BUFF: &str = "copper_stewpot_buff";

/// Chance of the copper stewpot extra trigger.
pub const COPPER_STEWPOT_CHANCE: f64 = 0.3;

const FORGE_BASE: i64 = 5;
const FORGE_EXPERT_BASE: i64 = 4;
const FORGE_EXPERT_GROWTH: i64 = 3;
const HEAT_UP_STEP: i64 = 3;

/// Rules of the forge.
#[derive(Clone, Copy, Debug, Default)]
pub struct Forging;

impl Forging {
    /// One Forge Expert trigger at the current bonuses.
    fn expert_trigger(state: &mut SimulationState<'_>, rng: &mut dyn RandomSource) {
        let bonus = FORGE_EXPERT_BASE + state.artisan_bonus + state.forge_expert_bonus;
        Effect::charged(bonus as f64).apply(state, rng);
    }

    fn forge(state: &mut SimulationState<'_>, rng: &mut dyn RandomSource) {
        let bonus = (FORGE_BASE + state.artisan_bonus) as f64;
        if state.has_buff(CARVE_BOX_BUFF) && !state.first_forge_played {
            Effect::add_both(bonus).apply(state, rng);
        } else {
            Effect::charged(bonus).apply(state, rng);
        }
        state.first_forge_played = true;
    }
}

impl CraftingRules for Forging {
    fn mode(&self) -> CraftingMode {
        CraftingMode::Forging
    }

    fn apply_card(
        &self,
        kind: CardKind,
        _card: &CardDefinition,
        state: &mut SimulationState<'_>,
        rng: &mut dyn RandomSource,
    ) {
        match kind {
            CardKind::ForgeExpert => {
                state.forge_expert_plays += 1;
                Self::expert_trigger(state, rng);
                state.forge_expert_bonus +=
                    FORGE_EXPERT_GROWTH * i64::from(state.forge_expert_plays);
            }
            CardKind::Forge => Self::forge(state, rng),
            CardKind::Ignite => {
                Effect::multiply_random(2).apply(state, rng);
            }
            CardKind::HeatUp => state.artisan_bonus += HEAT_UP_STEP,
            CardKind::Charge => state.charge_count += 1,
            _ => {}
        }
    }

    fn play_card(
        &self,
        kind: CardKind,
        card: &CardDefinition,
        state: &mut SimulationState<'_>,
        rng: &mut dyn RandomSource,
    ) {
        self.apply_card(kind, card, state, rng);

        // The stewpot trigger never grows the pool
        if kind == CardKind::ForgeExpert
            && state.has_buff(COPPER_STEWPOT_BUFF)
            && rng.chance(COPPER_STEWPOT_CHANCE)
        {
            Self::expert_trigger(state, rng);
        }
    }
}
