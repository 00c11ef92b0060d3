//! Harness runner: runs one search and packages a [`SearchReportV1`].
//!
//! # Pipeline
//!
//! ```text
//! SearchProblem::new() → SearchTree::new(strategy) → search(depth_limit)
//!   → statistics → SearchReportV1 → canonical bytes → digest
//! ```

use thiserror::Error;
use tracing::info;

use treesearch::error::SearchError;
use treesearch::policy::SearchPolicy;
use treesearch::problem::SearchProblem;
use treesearch::search::SearchTree;
use treesearch_kernel::proof::canon::CanonError;

use crate::contract::HarnessDomain;
use crate::report::SearchReportV1;

/// Error during a harness run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunError {
    /// The report or trace could not be canonicalized.
    #[error("report serialization failed: {0}")]
    Canon(#[from] CanonError),
    /// A statistic that must exist after a successful search was missing.
    #[error("inconsistent search statistics: {0}")]
    Statistics(#[from] SearchError),
}

/// Run `domain` from `initial` towards `goal` under `policy`.
///
/// An unreachable goal is not an error: the report has `path: None`.
///
/// # Errors
///
/// Returns [`RunError::Canon`] if the report cannot be serialized, and
/// [`RunError::Statistics`] if a solved search reports no solution length.
pub fn run_search<D: HarnessDomain>(
    domain: &D,
    initial: D::State,
    goal: D::Goal,
    policy: &SearchPolicy,
) -> Result<SearchReportV1, RunError> {
    let initial_label = initial.to_string();
    let problem = SearchProblem::new(domain, initial, goal);
    let mut tree = SearchTree::new(problem, policy.strategy);

    let path = tree.search(policy.depth_limit);

    let (solution_length, solution_cost, branching) = if path.is_some() {
        let length = tree.solution_length()?;
        let cost = tree.solution().map(|node| node.cost());
        let branching = match tree.average_branching_ratio() {
            Ok(ratio) => Some(ratio),
            Err(SearchError::NoExpandedNodes) => None,
            Err(e) => return Err(e.into()),
        };
        (Some(length), cost, branching)
    } else {
        (None, None, None)
    };

    let report = SearchReportV1 {
        domain_id: domain.domain_id().to_string(),
        policy: *policy,
        initial: initial_label,
        path: path.map(|states| states.iter().map(ToString::to_string).collect()),
        solution_length,
        solution_cost,
        terminals: tree.terminal_count(),
        non_terminals: tree.non_terminal_count(),
        branching,
        trace: tree.into_trace(),
    };

    let digest = report.digest()?;
    info!(
        domain = %report.domain_id,
        strategy = %policy.strategy,
        solved = report.is_solved(),
        %digest,
        "search run complete"
    );
    Ok(report)
}
