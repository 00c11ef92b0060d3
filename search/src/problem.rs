//! Concrete problems over a state domain.

use crate::contract::StateDomain;

/// A domain plus a concrete initial state and goal.
///
/// The domain is borrowed, so it outlives every problem (and every search
/// tree) built on it.
pub struct SearchProblem<'d, D: StateDomain> {
    domain: &'d D,
    initial: D::State,
    goal: D::Goal,
}

impl<'d, D: StateDomain> SearchProblem<'d, D> {
    #[must_use]
    pub fn new(domain: &'d D, initial: D::State, goal: D::Goal) -> Self {
        Self {
            domain,
            initial,
            goal,
        }
    }

    #[must_use]
    pub fn domain(&self) -> &'d D {
        self.domain
    }

    #[must_use]
    pub fn initial(&self) -> &D::State {
        &self.initial
    }

    #[must_use]
    pub fn goal(&self) -> &D::Goal {
        &self.goal
    }

    /// Whether `state` satisfies this problem's goal.
    #[must_use]
    pub fn goal_test(&self, state: &D::State) -> bool {
        self.domain.satisfies(state, &self.goal)
    }

    /// The domain's estimate from `state` to this problem's goal.
    #[must_use]
    pub fn heuristic(&self, state: &D::State) -> i64 {
        self.domain.heuristic(state, &self.goal)
    }
}
