//! Generic tree search over abstract state spaces.
//!
//! A [`StateDomain`] describes a state space. A [`SearchProblem`] binds a
//! domain to an initial state and a goal. A [`SearchTree`] expands nodes from
//! the initial state under a [`Strategy`] until a goal node within the depth
//! limit is popped, then returns the root-to-goal path.
//!
//! # Crate dependency graph
//!
//! ```text
//! treesearch_kernel  ←  treesearch  ←  treesearch_harness
//! (canon, hash)         (tree, nodes)    (domains, runner, report)
//! ```
//!
//! # Key types
//!
//! - [`StateDomain`] -- actions, transitions, costs, heuristic, goal test
//! - [`SearchNode`] / [`NodeArena`] -- nodes linked to parents by [`NodeId`]
//! - [`Frontier`] -- open list with strategy-specific insertion
//! - [`SearchTree`] -- traversal loop, solution path and statistics
//! - [`SearchPolicy`] -- strategy and depth limit, loadable from JSON
//! - [`SearchTrace`] -- per-pop event log with canonical JSON form
//!
//! [`StateDomain`]: contract::StateDomain
//! [`SearchProblem`]: problem::SearchProblem
//! [`SearchTree`]: search::SearchTree
//! [`Strategy`]: policy::Strategy
//! [`SearchNode`]: node::SearchNode
//! [`NodeArena`]: node::NodeArena
//! [`NodeId`]: node::NodeId
//! [`Frontier`]: frontier::Frontier
//! [`SearchPolicy`]: policy::SearchPolicy
//! [`SearchTrace`]: trace::SearchTrace

#![forbid(unsafe_code)]

pub mod contract;
pub mod error;
pub mod frontier;
pub mod node;
pub mod policy;
pub mod problem;
pub mod search;
pub mod trace;
