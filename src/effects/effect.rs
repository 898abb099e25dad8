//! Atomic counter effects.
//!
//! Card implementations compose these. Each effect resolves its target,
//! applies itself, and reports where it landed.

use serde::{Deserialize, Serialize};

use crate::core::{RandomSource, SimulationState};

use super::targeting::{Resolved, Target};

/// An atomic change to the counters.
///
/// ## Charge
///
/// `Charged` is the charge-compatible form of a random add: with a charge
/// token available it hits both counters and spends one token, otherwise
/// it behaves like `Add { target: Random }`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Effect {
    /// Add to the target.
    Add { target: Target, amount: f64 },
    /// Subtract from the target, floored at 1.
    Subtract { target: Target, amount: f64 },
    /// Multiply the target.
    Multiply { target: Target, factor: f64 },
    /// Random add, upgraded to both counters by a charge token.
    Charged { amount: f64 },
}

impl Effect {
    /// Random counter + amount.
    pub fn add_random(amount: impl Into<f64>) -> Self {
        Self::Add {
            target: Target::Random,
            amount: amount.into(),
        }
    }

    /// Both counters + amount.
    pub fn add_both(amount: impl Into<f64>) -> Self {
        Self::Add {
            target: Target::Both,
            amount: amount.into(),
        }
    }

    /// Random counter × factor.
    pub fn multiply_random(factor: impl Into<f64>) -> Self {
        Self::Multiply {
            target: Target::Random,
            factor: factor.into(),
        }
    }

    /// Charge-compatible random add.
    pub fn charged(amount: impl Into<f64>) -> Self {
        Self::Charged {
            amount: amount.into(),
        }
    }

    /// Apply the effect and return the counters it touched.
    pub fn apply(self, state: &mut SimulationState<'_>, rng: &mut dyn RandomSource) -> Resolved {
        match self {
            Effect::Add { target, amount } => {
                let resolved = target.resolve(state, rng);
                for &counter in resolved.counters() {
                    state.add(counter, amount);
                }
                resolved
            }
            Effect::Subtract { target, amount } => {
                let resolved = target.resolve(state, rng);
                for &counter in resolved.counters() {
                    state.subtract(counter, amount);
                }
                resolved
            }
            Effect::Multiply { target, factor } => {
                let resolved = target.resolve(state, rng);
                for &counter in resolved.counters() {
                    state.multiply(counter, factor);
                }
                resolved
            }
            Effect::Charged { amount } => {
                if state.charge_count > 0 {
                    state.charge_count -= 1;
                    state.add_both(amount);
                    Resolved::Both
                } else {
                    Effect::add_random(amount).apply(state, rng)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BuffSet, Counter, ScriptedRandom};
    use crate::effects::PrdHistory;

    #[test]
    fn test_add_random() {
        let mut history = PrdHistory::new();
        let buffs = BuffSet::new();
        let mut state = SimulationState::new(&mut history, &buffs);
        let mut rng = ScriptedRandom::constant(0.9);

        let resolved = Effect::add_random(5).apply(&mut state, &mut rng);

        assert_eq!(resolved, Resolved::One(Counter::Secondary));
        assert_eq!(state.primary(), 1.0);
        assert_eq!(state.secondary(), 6.0);
    }

    #[test]
    fn test_subtract_floors() {
        let mut history = PrdHistory::new();
        let buffs = BuffSet::new();
        let mut state = SimulationState::new(&mut history, &buffs);
        let mut rng = ScriptedRandom::constant(0.0);

        Effect::Subtract {
            target: Target::Both,
            amount: 3.0,
        }
        .apply(&mut state, &mut rng);

        assert_eq!(state.primary(), 1.0);
        assert_eq!(state.secondary(), 1.0);
    }

    #[test]
    fn test_multiply_highest() {
        let mut history = PrdHistory::new();
        let buffs = BuffSet::new();
        let mut state = SimulationState::new(&mut history, &buffs);
        state.add(Counter::Secondary, 2.0);
        let mut rng = ScriptedRandom::constant(0.0);

        Effect::Multiply {
            target: Target::Highest,
            factor: 2.0,
        }
        .apply(&mut state, &mut rng);

        assert_eq!(state.secondary(), 6.0);
        assert_eq!(state.primary(), 1.0);
    }

    #[test]
    fn test_charged_consumes_one_token() {
        let mut history = PrdHistory::new();
        let buffs = BuffSet::new();
        let mut state = SimulationState::new(&mut history, &buffs);
        state.charge_count = 2;
        let mut rng = ScriptedRandom::constant(0.0);

        let resolved = Effect::charged(4).apply(&mut state, &mut rng);

        assert_eq!(resolved, Resolved::Both);
        assert_eq!(state.charge_count, 1);
        assert_eq!(state.primary(), 5.0);
        assert_eq!(state.secondary(), 5.0);
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn test_charged_without_token_is_random() {
        let mut history = PrdHistory::new();
        let buffs = BuffSet::new();
        let mut state = SimulationState::new(&mut history, &buffs);
        let mut rng = ScriptedRandom::constant(0.0);

        let resolved = Effect::charged(4).apply(&mut state, &mut rng);

        assert_eq!(resolved, Resolved::One(Counter::Primary));
        assert_eq!(state.primary(), 5.0);
        assert_eq!(state.secondary(), 1.0);
    }
}
