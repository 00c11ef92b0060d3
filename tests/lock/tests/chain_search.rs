//! Linear chain `0 -> 1 -> 2 -> 3`: one action per state, so every strategy
//! returns the same path.

use treesearch::error::SearchError;
use treesearch::policy::Strategy;
use treesearch::problem::SearchProblem;
use treesearch::search::{BranchingRatio, SearchTree};
use treesearch_harness::domains::linear_chain::LinearChain;

fn solve(strategy: Strategy, limit: u32) -> (Option<Vec<u32>>, SearchTree<'static, LinearChain>) {
    static CHAIN: LinearChain = LinearChain { last: 3 };
    let mut tree = SearchTree::new(SearchProblem::new(&CHAIN, 0, 3), strategy);
    let path = tree.search(limit);
    (path, tree)
}

#[test]
fn breadth_first_finds_the_whole_chain() {
    let (path, tree) = solve(Strategy::Breadth, 5);
    assert_eq!(path, Some(vec![0, 1, 2, 3]));
    assert_eq!(tree.solution_length(), Ok(3));
}

#[test]
fn depth_first_finds_the_same_chain() {
    let (path, tree) = solve(Strategy::Depth, 5);
    assert_eq!(path, Some(vec![0, 1, 2, 3]));
    assert_eq!(tree.solution_length(), Ok(3));
}

#[test]
fn every_strategy_agrees_on_a_single_path_domain() {
    for strategy in Strategy::ALL {
        let (path, tree) = solve(*strategy, 5);
        assert_eq!(path, Some(vec![0, 1, 2, 3]), "{strategy}");
        assert_eq!(tree.trace().expanded_states(), vec!["0", "1", "2", "3"]);
        assert_eq!(tree.solution().map(|n| n.cost()), Some(3));
    }
}

#[test]
fn chain_statistics_use_the_literal_formula() {
    let (_, tree) = solve(Strategy::Breadth, 5);
    // One node in the frontier at every pop, three non-goal pops.
    assert_eq!(tree.terminal_count(), 1);
    assert_eq!(tree.non_terminal_count(), 3);
    assert_eq!(
        tree.average_branching_ratio(),
        Ok(BranchingRatio {
            numerator: 3,
            denominator: 3
        })
    );
}

#[test]
fn limit_equal_to_goal_depth_is_accepted() {
    let (path, tree) = solve(Strategy::Depth, 3);
    assert_eq!(path, Some(vec![0, 1, 2, 3]));
    assert_eq!(tree.solution_length(), Ok(3));
}

#[test]
fn limit_below_goal_depth_finds_nothing() {
    let (path, tree) = solve(Strategy::Breadth, 2);
    assert_eq!(path, None);
    assert_eq!(tree.solution_length(), Err(SearchError::NoSolution));
    assert_eq!(
        tree.average_branching_factor(),
        Err(SearchError::NoSolution)
    );
}

#[test]
fn default_limit_is_enough_for_the_chain() {
    static CHAIN: LinearChain = LinearChain { last: 3 };
    let mut tree = SearchTree::new(SearchProblem::new(&CHAIN, 0, 3), Strategy::Uniform);
    assert_eq!(tree.search_default(), Some(vec![0, 1, 2, 3]));
    assert_eq!(
        tree.trace().metadata.depth_limit,
        Some(treesearch::policy::DEFAULT_DEPTH_LIMIT)
    );
}
