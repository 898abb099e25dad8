//! Alchemy crafting rules.
//!
//! Every card targets the highest or lowest counter, resolved before the
//! card applies anything. Enchant leaves a stacking debuff that bites
//! before every later card.

use crate::cards::{CardDefinition, CardKind};
use crate::core::{RandomSource, SimulationState};
use crate::effects::{Effect, Target};
use crate::rules::{CraftingMode, CraftingRules};

/// Lowest counter +1 before every card.
pub const WARMDUST_DECK_BUFF: &str = "warmdust_deck_buff";

/// Highest counter +3 before every card.
pub const CALMING_WARMDUST_DECK_BUFF: &str = "calming_warmdust_deck_buff";

/// Rules of alchemy.
#[derive(Clone, Copy, Debug, Default)]
pub struct Alchemy;

impl CraftingRules for Alchemy {
    fn mode(&self) -> CraftingMode {
        CraftingMode::Alchemy
    }

    fn pre_card(&self, state: &mut SimulationState<'_>, rng: &mut dyn RandomSource) {
        for _ in 0..state.enchant_debuff {
            Effect::Subtract {
                target: Target::Random,
                amount: 1.0,
            }
            .apply(state, rng);
        }
        if state.has_buff(WARMDUST_DECK_BUFF) {
            Effect::Add {
                target: Target::Lowest,
                amount: 1.0,
            }
            .apply(state, rng);
        }
        if state.has_buff(CALMING_WARMDUST_DECK_BUFF) {
            Effect::Add {
                target: Target::Highest,
                amount: 3.0,
            }
            .apply(state, rng);
        }
    }

    fn apply_card(
        &self,
        kind: CardKind,
        _card: &CardDefinition,
        state: &mut SimulationState<'_>,
        _rng: &mut dyn RandomSource,
    ) {
        let (high, low) = (state.highest(), state.lowest());
        match kind {
            CardKind::Ingredient => {
                state.add(high, 10.0);
                state.subtract(low, 2.0);
            }
            CardKind::Grind => {
                state.add(low, 4.0);
                state.subtract(high, 2.0);
            }
            CardKind::Enchant => {
                state.add(low, 8.0);
                state.enchant_debuff += 1;
            }
            CardKind::Distill => state.multiply(high, 2.0),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BuffSet, Counter, ScriptedRandom};
    use crate::effects::PrdHistory;

    fn play(kind: CardKind, state: &mut SimulationState<'_>, rng: &mut dyn RandomSource) {
        let card = CardDefinition::new(kind.name(), 1);
        Alchemy.pre_card(state, rng);
        Alchemy.play_card(kind, &card, state, rng);
    }

    #[test]
    fn test_ingredient_on_tied_counters_hits_primary_twice() {
        let mut history = PrdHistory::new();
        let buffs = BuffSet::new();
        let mut state = SimulationState::new(&mut history, &buffs);
        let mut rng = ScriptedRandom::constant(0.0);

        play(CardKind::Ingredient, &mut state, &mut rng);

        assert_eq!(state.primary(), 9.0);
        assert_eq!(state.secondary(), 1.0);
    }

    #[test]
    fn test_grind_targets_resolved_before_applying() {
        let mut history = PrdHistory::new();
        let buffs = BuffSet::new();
        let mut state = SimulationState::new(&mut history, &buffs);
        state.add(Counter::Primary, 2.0);
        let mut rng = ScriptedRandom::constant(0.0);

        play(CardKind::Grind, &mut state, &mut rng);

        // Secondary was lowest: +4; primary was highest: −2
        assert_eq!(state.secondary(), 5.0);
        assert_eq!(state.primary(), 1.0);
    }

    #[test]
    fn test_enchant_debuff_applies_before_later_cards() {
        let mut history = PrdHistory::new();
        let buffs = BuffSet::new();
        let mut state = SimulationState::new(&mut history, &buffs);
        let mut rng = ScriptedRandom::constant(0.0);

        play(CardKind::Enchant, &mut state, &mut rng);
        assert_eq!(state.primary(), 9.0);
        assert_eq!(state.enchant_debuff, 1);
        assert_eq!(rng.consumed(), 0);

        // One stack: primary −1, then Distill doubles the highest
        play(CardKind::Distill, &mut state, &mut rng);
        assert_eq!(state.primary(), 16.0);
        assert_eq!(rng.consumed(), 1);
    }

    #[test]
    fn test_debuff_respects_floor() {
        let mut history = PrdHistory::new();
        let buffs = BuffSet::new();
        let mut state = SimulationState::new(&mut history, &buffs);
        state.enchant_debuff = 5;
        let mut rng = ScriptedRandom::constant(0.9);

        Alchemy.pre_card(&mut state, &mut rng);

        assert_eq!(state.secondary(), 1.0);
        assert_eq!(state.primary(), 1.0);
    }

    #[test]
    fn test_warmdust_buffs() {
        let mut history = PrdHistory::new();
        let buffs = BuffSet::new()
            .with(WARMDUST_DECK_BUFF)
            .with(CALMING_WARMDUST_DECK_BUFF);
        let mut state = SimulationState::new(&mut history, &buffs);
        let mut rng = ScriptedRandom::constant(0.0);

        Alchemy.pre_card(&mut state, &mut rng);

        // Tie: lowest is primary (+1), then primary is highest (+3)
        assert_eq!(state.primary(), 5.0);
        assert_eq!(state.secondary(), 1.0);
    }

    #[test]
    fn test_warmdust_targets_follow_current_values() {
        let mut history = PrdHistory::new();
        let buffs = BuffSet::new()
            .with(WARMDUST_DECK_BUFF)
            .with(CALMING_WARMDUST_DECK_BUFF);
        let mut state = SimulationState::new(&mut history, &buffs);
        state.add(Counter::Primary, 1.0);
        let mut rng = ScriptedRandom::constant(0.0);

        Alchemy.pre_card(&mut state, &mut rng);

        // Secondary is lowest (+1), then ties at 2 resolve highest to primary (+3)
        assert_eq!(state.secondary(), 2.0);
        assert_eq!(state.primary(), 5.0);
        assert_eq!(rng.consumed(), 0);
    }
}
