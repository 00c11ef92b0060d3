//! Depth limit enforcement on an infinite binary tree, and cycle avoidance
//! on cyclic graphs.

use lock_tests::scenarios;
use treesearch::contract::StateDomain;
use treesearch::policy::Strategy;
use treesearch::problem::SearchProblem;
use treesearch::search::SearchTree;
use treesearch::trace::{ChildRecordV1, ExpansionOutcomeV1, TerminationV1};

/// Heap numbering: node `n` has children `2n` and `2n + 1`. Infinite.
struct BinaryTree;

impl StateDomain for BinaryTree {
    type State = u64;
    type Action = u64;
    type Goal = u64;

    fn actions(&self, _state: &u64) -> Vec<u64> {
        vec![0, 1]
    }

    fn result(&self, state: &u64, action: &u64) -> u64 {
        state * 2 + action
    }

    fn cost(&self, _state: &u64, action: &u64) -> i64 {
        1 + i64::try_from(*action).unwrap_or(0)
    }

    fn heuristic(&self, _state: &u64, _goal: &u64) -> i64 {
        0
    }

    fn satisfies(&self, state: &u64, goal: &u64) -> bool {
        state == goal
    }
}

#[test]
fn depth_first_never_expands_past_the_limit() {
    let mut tree = SearchTree::new(SearchProblem::new(&BinaryTree, 1, 0), Strategy::Depth);
    assert_eq!(tree.search(4), None);

    // Complete binary tree of depth 4.
    assert_eq!(tree.nodes().len(), 31);
    for event in &tree.trace().events {
        assert!(event.depth <= 4, "popped node at depth {}", event.depth);
        let at_limit = event.depth == 4;
        assert_eq!(
            event.outcome == ExpansionOutcomeV1::DepthLimited,
            at_limit,
            "node {} at depth {}",
            event.state,
            event.depth
        );
    }
    assert_eq!(
        tree.trace().metadata.termination,
        TerminationV1::FrontierExhausted
    );
}

#[test]
fn goal_just_past_the_limit_is_not_found() {
    // 13 = 1 -> 3 -> 6 -> 13, depth 3.
    let mut tree = SearchTree::new(SearchProblem::new(&BinaryTree, 1, 13), Strategy::Depth);
    assert_eq!(tree.search(2), None);

    let mut tree = SearchTree::new(SearchProblem::new(&BinaryTree, 1, 13), Strategy::Depth);
    assert_eq!(tree.search(3), Some(vec![1, 3, 6, 13]));
    assert_eq!(tree.solution_length(), Ok(3));
}

#[test]
fn depth_first_visits_left_subtree_first() {
    let mut tree = SearchTree::new(SearchProblem::new(&BinaryTree, 1, 0), Strategy::Depth);
    tree.search(2);
    assert_eq!(
        tree.trace().expanded_states(),
        vec!["1", "2", "4", "5", "3", "6", "7"]
    );
}

#[test]
fn breadth_first_pops_in_non_decreasing_depth() {
    let mut tree = SearchTree::new(SearchProblem::new(&BinaryTree, 1, 0), Strategy::Breadth);
    tree.search(5);
    let depths: Vec<u32> = tree.trace().events.iter().map(|e| e.depth).collect();
    assert!(depths.windows(2).all(|w| w[0] <= w[1]), "{depths:?}");
    assert_eq!(depths.len(), 63);
}

#[test]
fn uniform_cost_accumulates_action_costs() {
    // Right children cost 2, left children cost 1.
    let mut tree = SearchTree::new(SearchProblem::new(&BinaryTree, 1, 7), Strategy::Uniform);
    assert_eq!(tree.search(3), Some(vec![1, 3, 7]));
    assert_eq!(tree.solution().map(|n| n.cost()), Some(4));
}

#[test]
fn ring_search_terminates_without_requeueing_ancestors() {
    let domain = scenarios::ring();
    for strategy in Strategy::ALL {
        let mut tree = SearchTree::new(SearchProblem::new(&domain, "A", "Z"), *strategy);
        assert_eq!(tree.search(50), None, "{strategy}");

        // Only simple paths survive: A, A-B, A-C, A-B-C, A-C-B.
        assert_eq!(tree.nodes().len(), 5, "{strategy}");
        for id in tree.nodes().ids() {
            let node = tree.node(id);
            assert!(!node.is_ancestor(node.state()), "{node} repeats an ancestor");
        }
        // One back edge at each depth-1 node, two at each depth-2 node.
        assert_eq!(tree.trace().metadata.total_cycles_suppressed, 6);
    }
}

#[test]
fn suppressed_children_are_logged() {
    let domain = scenarios::ring();
    let mut tree = SearchTree::new(SearchProblem::new(&domain, "A", "Z"), Strategy::Breadth);
    tree.search(50);
    // Second pop is B (from A): successors A (ancestor) and C.
    let ExpansionOutcomeV1::Expanded { children } = &tree.trace().events[1].outcome else {
        panic!("B was not expanded");
    };
    assert_eq!(
        children[0],
        ChildRecordV1::CycleSuppressed { state: "A".into() }
    );
    assert!(matches!(children[1], ChildRecordV1::Created { .. }));
}
