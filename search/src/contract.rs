//! State domain contract.

use std::fmt;

/// The state space a problem is defined over.
///
/// A domain enumerates actions, computes transitions and their costs, gives a
/// heuristic estimate towards a goal, and decides goal satisfaction. The
/// search engine is written against this trait only.
///
/// # Contract
///
/// - All methods are pure: the same arguments give the same answer, and no
///   call mutates the domain.
/// - `actions` must be deterministically ordered. Frontier order, and
///   therefore the returned path, depends on it.
/// - `cost` must be non-negative for uniform-cost search to return the
///   cheapest path.
pub trait StateDomain {
    /// A point of the state space. `Display` is used for diagnostics only.
    type State: Clone + PartialEq + fmt::Debug + fmt::Display;
    /// An action applicable in some state.
    type Action;
    /// A goal description understood by [`StateDomain::satisfies`].
    type Goal;

    /// Actions available in `state`, in a fixed order.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// The state reached by applying `action` in `state`.
    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// Cost of applying `action` in `state`.
    fn cost(&self, state: &Self::State, action: &Self::Action) -> i64;

    /// Estimated cost of reaching `goal` from `state`.
    fn heuristic(&self, state: &Self::State, goal: &Self::Goal) -> i64;

    /// Whether `state` satisfies `goal`.
    fn satisfies(&self, state: &Self::State, goal: &Self::Goal) -> bool;
}
