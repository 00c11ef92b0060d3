//! Search tree construction and the traversal loop.

use tracing::{debug, trace};

use crate::contract::StateDomain;
use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::node::{NodeArena, NodeId, NodeRef, SearchNode};
use crate::policy::{Strategy, DEFAULT_DEPTH_LIMIT};
use crate::problem::SearchProblem;
use crate::trace::{ChildRecordV1, ExpansionEventV1, ExpansionOutcomeV1, SearchTrace, TerminationV1};

/// Average branching factor as an exact ratio.
///
/// `numerator / denominator` where the numerator is
/// `(terminals - 1) + non_terminals` and the denominator is `non_terminals`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BranchingRatio {
    pub numerator: u64,
    pub denominator: u64,
}

impl BranchingRatio {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}

/// Search tree over a [`SearchProblem`], traversed with a fixed [`Strategy`].
///
/// Every allocated node stays in the tree's arena until the tree is dropped.
/// With branching factor `b` a search to depth limit `d` may allocate up to
/// `b^0 + b^1 + ... + b^d` nodes; breadth-first search keeps a whole layer in
/// the frontier at once, so keep `d` small for wide domains.
pub struct SearchTree<'d, D: StateDomain> {
    problem: SearchProblem<'d, D>,
    arena: NodeArena<D::State>,
    frontier: Frontier,
    strategy: Strategy,
    solution: Option<NodeId>,
    terminals: u64,
    non_terminals: u64,
    trace: SearchTrace,
}

impl<'d, D: StateDomain> SearchTree<'d, D> {
    /// A tree whose frontier holds only the root (the problem's initial state).
    #[must_use]
    pub fn new(problem: SearchProblem<'d, D>, strategy: Strategy) -> Self {
        let mut arena = NodeArena::new();
        let root = arena.push(SearchNode::root(problem.initial().clone()));
        Self {
            problem,
            arena,
            frontier: Frontier::with_root(root),
            strategy,
            solution: None,
            terminals: 0,
            non_terminals: 0,
            trace: SearchTrace::new(strategy),
        }
    }

    /// [`SearchTree::search`] with [`DEFAULT_DEPTH_LIMIT`].
    pub fn search_default(&mut self) -> Option<Vec<D::State>> {
        self.search(DEFAULT_DEPTH_LIMIT)
    }

    /// Search for a goal no deeper than `limit`.
    ///
    /// Returns the states from the root to the accepted goal node, root
    /// first, or `None` if the frontier empties first. Nodes at depth `limit`
    /// are goal-tested but never expanded.
    ///
    /// Calling `search` again resumes from the current frontier. The
    /// solution and the statistics refer to the last accepted goal, so a
    /// resumed search that exhausts the frontier leaves them in place.
    pub fn search(&mut self, limit: u32) -> Option<Vec<D::State>> {
        debug!(
            strategy = %self.strategy,
            limit,
            frontier = self.frontier.len(),
            "search started"
        );
        self.trace.metadata.depth_limit = Some(limit);

        while let Some(id) = self.frontier.pop_first() {
            self.terminals = self.frontier.len() as u64 + 1;

            let node = self.arena.node(id);
            let depth = node.depth();
            let mut event = ExpansionEventV1 {
                expansion_order: self.trace.events.len() as u64,
                node_id: id,
                state: node.state().to_string(),
                depth,
                cost: node.cost(),
                heuristic: self.problem.heuristic(node.state()),
                frontier_len_after_pop: self.frontier.len(),
                outcome: ExpansionOutcomeV1::DepthLimited,
            };

            if self.problem.goal_test(node.state()) && depth <= limit {
                let path = node.ancestor_states();
                debug!(node = %node, depth, cost = node.cost(), "goal accepted");
                self.solution = Some(id);
                event.outcome = ExpansionOutcomeV1::GoalAccepted;
                self.trace.events.push(event);
                self.finish(TerminationV1::GoalReached { node_id: id });
                return Some(path);
            }

            self.non_terminals += 1;

            if depth < limit {
                let (children, records) = self.expand(id);
                trace!(
                    node = %id,
                    depth,
                    created = children.len(),
                    suppressed = records.len() - children.len(),
                    "expanded"
                );
                let arena = &self.arena;
                self.frontier
                    .insert(self.strategy, children, |child| arena.node(child).cost());
                event.outcome = ExpansionOutcomeV1::Expanded { children: records };
            }
            self.trace.events.push(event);
        }

        debug!(
            expanded = self.non_terminals,
            nodes = self.arena.len(),
            "frontier exhausted"
        );
        self.finish(TerminationV1::FrontierExhausted);
        None
    }

    /// Allocate a child for every action of `id` whose result is not already
    /// on the path from the root to `id`.
    fn expand(&mut self, id: NodeId) -> (Vec<NodeId>, Vec<ChildRecordV1>) {
        let domain = self.problem.domain();
        let (depth, cost, successors) = {
            let parent = self.arena.node(id);
            let state = parent.state();
            let successors: Vec<(D::State, Option<i64>)> = domain
                .actions(state)
                .iter()
                .map(|action| {
                    let next = domain.result(state, action);
                    if parent.path_contains(&next) {
                        (next, None)
                    } else {
                        (next, Some(domain.cost(state, action)))
                    }
                })
                .collect();
            (parent.depth(), parent.cost(), successors)
        };

        let mut children = Vec::with_capacity(successors.len());
        let mut records = Vec::with_capacity(successors.len());
        for (next, step_cost) in successors {
            let Some(step_cost) = step_cost else {
                self.trace.metadata.total_cycles_suppressed += 1;
                records.push(ChildRecordV1::CycleSuppressed {
                    state: next.to_string(),
                });
                continue;
            };
            let child_cost = cost.saturating_add(step_cost);
            let label = next.to_string();
            let child = self
                .arena
                .push(SearchNode::new(next, Some(id), depth + 1, child_cost));
            children.push(child);
            records.push(ChildRecordV1::Created {
                node_id: child,
                state: label,
                cost: child_cost,
            });
        }
        (children, records)
    }

    fn finish(&mut self, termination: TerminationV1) {
        let meta = &mut self.trace.metadata;
        meta.termination = termination;
        meta.total_nodes = self.arena.len();
        meta.frontier_high_water = self.frontier.high_water();
        meta.terminals = self.terminals;
        meta.non_terminals = self.non_terminals;
    }

    /// Depth of the accepted goal node.
    ///
    /// # Errors
    ///
    /// [`SearchError::NoSolution`] if no search has found a goal.
    pub fn solution_length(&self) -> Result<u32, SearchError> {
        self.solution()
            .map(|node| node.depth())
            .ok_or(SearchError::NoSolution)
    }

    /// `((terminals - 1) + non_terminals) / non_terminals` as an exact ratio.
    ///
    /// `terminals` is the frontier size plus one as of the last pop, not a
    /// count of leaves of the explored tree.
    ///
    /// # Errors
    ///
    /// [`SearchError::NoSolution`] before a successful search, and
    /// [`SearchError::NoExpandedNodes`] when the goal was the first node
    /// popped.
    pub fn average_branching_ratio(&self) -> Result<BranchingRatio, SearchError> {
        if self.solution.is_none() {
            return Err(SearchError::NoSolution);
        }
        if self.non_terminals == 0 {
            return Err(SearchError::NoExpandedNodes);
        }
        Ok(BranchingRatio {
            numerator: (self.terminals - 1) + self.non_terminals,
            denominator: self.non_terminals,
        })
    }

    /// [`SearchTree::average_branching_ratio`] as a float.
    ///
    /// # Errors
    ///
    /// Same as [`SearchTree::average_branching_ratio`].
    pub fn average_branching_factor(&self) -> Result<f64, SearchError> {
        self.average_branching_ratio().map(BranchingRatio::as_f64)
    }

    /// Frontier size plus one, as of the most recent pop.
    #[must_use]
    pub fn terminal_count(&self) -> u64 {
        self.terminals
    }

    /// Popped nodes that were not accepted as a solution.
    #[must_use]
    pub fn non_terminal_count(&self) -> u64 {
        self.non_terminals
    }

    #[must_use]
    pub fn solution(&self) -> Option<NodeRef<'_, D::State>> {
        self.solution.map(|id| self.arena.node(id))
    }

    /// # Panics
    ///
    /// Panics if `id` was not allocated by this tree.
    #[must_use]
    pub fn node(&self, id: NodeId) -> NodeRef<'_, D::State> {
        self.arena.node(id)
    }

    #[must_use]
    pub fn nodes(&self) -> &NodeArena<D::State> {
        &self.arena
    }

    #[must_use]
    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    #[must_use]
    pub fn problem(&self) -> &SearchProblem<'d, D> {
        &self.problem
    }

    #[must_use]
    pub fn trace(&self) -> &SearchTrace {
        &self.trace
    }

    #[must_use]
    pub fn into_trace(self) -> SearchTrace {
        self.trace
    }
}
