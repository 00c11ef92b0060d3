//! Frontier ordering per strategy on small branching graphs.

use lock_tests::scenarios;
use treesearch::policy::Strategy;
use treesearch::problem::SearchProblem;
use treesearch::search::{BranchingRatio, SearchTree};
use treesearch::trace::{ChildRecordV1, ExpansionOutcomeV1};
use treesearch_harness::domains::graph::GraphDomain;

fn run<'a>(
    domain: &'a GraphDomain,
    from: &'static str,
    to: &'static str,
    strategy: Strategy,
) -> SearchTree<'a, GraphDomain> {
    let mut tree = SearchTree::new(SearchProblem::new(domain, from, to), strategy);
    tree.search(5);
    tree
}

fn frontier_states(tree: &SearchTree<'_, GraphDomain>) -> Vec<&'static str> {
    tree.frontier().iter().map(|id| *tree.node(id).state()).collect()
}

#[test]
fn breadth_first_expands_level_by_level() {
    let domain = scenarios::fork();
    let tree = run(&domain, "A", "G", Strategy::Breadth);

    assert_eq!(
        tree.solution().map(|n| n.ancestor_states()),
        Some(vec!["A", "B", "G"])
    );
    assert_eq!(tree.trace().expanded_states(), vec!["A", "B", "C", "G"]);
    assert!(tree.frontier().is_empty());
    assert_eq!(
        tree.average_branching_ratio(),
        Ok(BranchingRatio {
            numerator: 3,
            denominator: 3
        })
    );
}

#[test]
fn depth_first_prepends_children_in_action_order() {
    let domain = scenarios::fork();
    let tree = run(&domain, "A", "G", Strategy::Depth);

    assert_eq!(
        tree.solution().map(|n| n.ancestor_states()),
        Some(vec!["A", "B", "G"])
    );
    // B was generated first and stays first; C is never popped.
    assert_eq!(tree.trace().expanded_states(), vec!["A", "B", "G"]);
    assert_eq!(frontier_states(&tree), vec!["C"]);
    // terminals = |[C]| + 1 = 2, non_terminals = 2.
    assert_eq!(
        tree.average_branching_ratio(),
        Ok(BranchingRatio {
            numerator: 3,
            denominator: 2
        })
    );
    assert!((tree.average_branching_factor().unwrap() - 1.5).abs() < f64::EPSILON);
}

#[test]
fn depth_first_exhausts_a_dead_end_before_backtracking() {
    let domain = scenarios::fork_dead_end_first();
    let tree = run(&domain, "A", "G", Strategy::Depth);

    assert_eq!(tree.trace().expanded_states(), vec!["A", "C", "B", "G"]);
    let c_event = &tree.trace().events[1];
    assert_eq!(
        c_event.outcome,
        ExpansionOutcomeV1::Expanded {
            children: Vec::new()
        }
    );
}

#[test]
fn breadth_first_returns_the_shallowest_goal_not_the_cheapest() {
    let domain = scenarios::diamond();
    let tree = run(&domain, "S", "G", Strategy::Breadth);

    let goal = tree.solution().unwrap();
    assert_eq!(goal.ancestor_states(), vec!["S", "A", "G"]);
    assert_eq!(goal.cost(), 7);
}

#[test]
fn uniform_cost_returns_the_cheapest_goal() {
    let domain = scenarios::diamond();
    let tree = run(&domain, "S", "G", Strategy::Uniform);

    let goal = tree.solution().unwrap();
    assert_eq!(goal.ancestor_states(), vec!["S", "A", "B", "G"]);
    assert_eq!(goal.cost(), 4);
    assert_eq!(tree.solution_length(), Ok(3));
    // Pops are in ascending accumulated cost: S0 A1 B3 B4 G4.
    let costs: Vec<i64> = tree.trace().events.iter().map(|e| e.cost).collect();
    assert_eq!(costs, vec![0, 1, 3, 4, 4]);
}

#[test]
fn uniform_frontier_is_sorted_after_the_search() {
    let domain = scenarios::diamond();
    let tree = run(&domain, "S", "G", Strategy::Uniform);
    let costs: Vec<i64> = tree
        .frontier()
        .iter()
        .map(|id| tree.node(id).cost())
        .collect();
    assert_eq!(costs, vec![5, 7]);
}

#[test]
fn children_are_recorded_in_action_order() {
    let domain = scenarios::fork();
    let tree = run(&domain, "A", "G", Strategy::Breadth);
    let ExpansionOutcomeV1::Expanded { children } = &tree.trace().events[0].outcome else {
        panic!("root was not expanded");
    };
    let states: Vec<&str> = children
        .iter()
        .map(|c| match c {
            ChildRecordV1::Created { state, .. } | ChildRecordV1::CycleSuppressed { state } => {
                state.as_str()
            }
        })
        .collect();
    assert_eq!(states, vec!["B", "C"]);
}
