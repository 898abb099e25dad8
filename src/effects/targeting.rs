//! Counter targeting for card effects.
//!
//! Effects name a [`Target`]; resolving it against the current state picks
//! the concrete counter(s):
//! - `Random`: primary or secondary, equal odds
//! - `Highest` / `Lowest`: recomputed at resolution time, ties to primary
//! - `Both`: primary and secondary
//!
//! Charge redirection lives in `effects::effect`, because only some effects
//! are charge-compatible.

use serde::{Deserialize, Serialize};

use crate::core::{Counter, RandomSource, SimulationState};

/// How an effect chooses its counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Target {
    /// A uniformly random counter.
    Random,
    /// The counter holding the higher value.
    Highest,
    /// The counter holding the lower value.
    Lowest,
    /// Both counters.
    Both,
}

/// A resolved target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolved {
    One(Counter),
    Both,
}

impl Target {
    /// Resolve against the current counter values.
    ///
    /// Only `Random` consumes a draw from the RNG.
    pub fn resolve(self, state: &SimulationState<'_>, rng: &mut dyn RandomSource) -> Resolved {
        match self {
            Target::Random => Resolved::One(rng.pick_counter()),
            Target::Highest => Resolved::One(state.highest()),
            Target::Lowest => Resolved::One(state.lowest()),
            Target::Both => Resolved::Both,
        }
    }
}

impl Resolved {
    /// Counters covered by this resolution.
    #[must_use]
    pub fn counters(self) -> &'static [Counter] {
        match self {
            Resolved::One(Counter::Primary) => &[Counter::Primary],
            Resolved::One(Counter::Secondary) => &[Counter::Secondary],
            Resolved::Both => &[Counter::Primary, Counter::Secondary],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BuffSet, ScriptedRandom};
    use crate::effects::PrdHistory;

    #[test]
    fn test_random_uses_rng() {
        let mut history = PrdHistory::new();
        let buffs = BuffSet::new();
        let state = SimulationState::new(&mut history, &buffs);
        let mut rng = ScriptedRandom::new(vec![0.7, 0.2]);

        assert_eq!(
            Target::Random.resolve(&state, &mut rng),
            Resolved::One(Counter::Secondary)
        );
        assert_eq!(
            Target::Random.resolve(&state, &mut rng),
            Resolved::One(Counter::Primary)
        );
    }

    #[test]
    fn test_highest_and_lowest_do_not_draw() {
        let mut history = PrdHistory::new();
        let buffs = BuffSet::new();
        let mut state = SimulationState::new(&mut history, &buffs);
        state.add(Counter::Secondary, 4.0);
        let mut rng = ScriptedRandom::constant(0.0);

        assert_eq!(
            Target::Highest.resolve(&state, &mut rng),
            Resolved::One(Counter::Secondary)
        );
        assert_eq!(
            Target::Lowest.resolve(&state, &mut rng),
            Resolved::One(Counter::Primary)
        );
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn test_counters() {
        assert_eq!(Resolved::Both.counters().len(), 2);
        assert_eq!(
            Resolved::One(Counter::Secondary).counters(),
            &[Counter::Secondary]
        );
    }
}
