//! Typed search errors.
//!
//! "No solution" is not an error: [`crate::search::SearchTree::search`]
//! returns `None` for it. `SearchError` covers reads of derived statistics
//! that have no meaningful value yet, and configuration that cannot be
//! interpreted.

use thiserror::Error;

/// Typed failure for search statistics and policy loading.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// A solution statistic was read before a search found a goal.
    #[error("no solution has been found; run a successful search first")]
    NoSolution,

    /// The branching factor needs at least one expanded node.
    #[error("average branching factor is undefined: no node was expanded")]
    NoExpandedNodes,

    /// A strategy name did not match `breadth`, `depth` or `uniform`.
    #[error("unknown search strategy: {name:?}")]
    UnknownStrategy { name: String },

    /// A policy document could not be parsed.
    #[error("invalid search policy: {detail}")]
    PolicyParse { detail: String },
}
