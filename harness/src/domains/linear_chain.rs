//! `LinearChain`: states `0..=last`, each with a single `Step` to the next.

use treesearch::contract::StateDomain;

use crate::contract::HarnessDomain;

/// The only action of the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step;

/// A chain `0 -> 1 -> ... -> last` with unit costs.
///
/// `last` has no actions. The heuristic is the remaining distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearChain {
    pub last: u32,
}

impl LinearChain {
    #[must_use]
    pub fn new(last: u32) -> Self {
        Self { last }
    }
}

impl StateDomain for LinearChain {
    type State = u32;
    type Action = Step;
    type Goal = u32;

    fn actions(&self, state: &u32) -> Vec<Step> {
        if *state < self.last {
            vec![Step]
        } else {
            Vec::new()
        }
    }

    fn result(&self, state: &u32, _action: &Step) -> u32 {
        state + 1
    }

    fn cost(&self, _state: &u32, _action: &Step) -> i64 {
        1
    }

    fn heuristic(&self, state: &u32, goal: &u32) -> i64 {
        i64::from(goal.abs_diff(*state))
    }

    fn satisfies(&self, state: &u32, goal: &u32) -> bool {
        state == goal
    }
}

impl HarnessDomain for LinearChain {
    #[allow(clippy::unnecessary_literal_bound)]
    fn domain_id(&self) -> &str {
        "linear_chain"
    }
}
