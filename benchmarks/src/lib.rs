//! Shared domains and fixtures for the search benchmark suites.

use treesearch::contract::StateDomain;
use treesearch::policy::{SearchPolicy, Strategy};

/// Complete `branching`-ary tree with heap numbering. Infinite; the depth
/// limit bounds every search.
///
/// Action `i` costs `i + 1`, so uniform-cost order differs from breadth
/// order.
#[derive(Debug, Clone, Copy)]
pub struct WideTree {
    pub branching: u64,
}

impl StateDomain for WideTree {
    type State = u64;
    type Action = u64;
    type Goal = u64;

    fn actions(&self, _state: &u64) -> Vec<u64> {
        (0..self.branching).collect()
    }

    fn result(&self, state: &u64, action: &u64) -> u64 {
        state * self.branching + action + 1
    }

    fn cost(&self, _state: &u64, action: &u64) -> i64 {
        i64::try_from(*action).map_or(i64::MAX, |a| a + 1)
    }

    fn heuristic(&self, _state: &u64, _goal: &u64) -> i64 {
        0
    }

    fn satisfies(&self, state: &u64, goal: &u64) -> bool {
        state == goal
    }
}

/// A named benchmark regime: one policy per strategy at a fixed depth.
#[derive(Debug, Clone, Copy)]
pub struct Regime {
    pub name: &'static str,
    pub policy: SearchPolicy,
}

/// One regime per strategy at `depth_limit`.
#[must_use]
pub fn regimes(depth_limit: u32) -> Vec<Regime> {
    Strategy::ALL
        .iter()
        .map(|&strategy| Regime {
            name: strategy.as_str(),
            policy: SearchPolicy::new(strategy, depth_limit),
        })
        .collect()
}
