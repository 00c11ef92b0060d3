//! `GraphDomain`: an explicit directed graph with weighted edges.
//!
//! States are node labels. The actions of a state are its outgoing edges in
//! the order they were added, so frontier order is fully determined by the
//! builder calls.
//!
//! ```
//! use treesearch_harness::domains::graph::GraphDomain;
//!
//! let graph = GraphDomain::builder("fork")
//!     .edge("A", "B", 1)
//!     .edge("A", "C", 1)
//!     .edge("B", "G", 1)
//!     .build();
//! assert_eq!(graph.successors("A"), vec!["B", "C"]);
//! ```

use std::collections::BTreeMap;

use treesearch::contract::StateDomain;

use crate::contract::HarnessDomain;

/// A directed edge; also the action that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub from: &'static str,
    pub to: &'static str,
    pub cost: i64,
}

/// A directed weighted graph over `&'static str` labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphDomain {
    id: String,
    edges: Vec<Edge>,
    estimates: BTreeMap<&'static str, i64>,
}

impl GraphDomain {
    /// Start building a graph identified by `id`.
    #[must_use]
    pub fn builder(id: &str) -> GraphDomainBuilder {
        GraphDomainBuilder {
            graph: GraphDomain {
                id: id.to_string(),
                edges: Vec::new(),
                estimates: BTreeMap::new(),
            },
        }
    }

    /// Labels reachable in one step from `state`, in edge order.
    #[must_use]
    pub fn successors(&self, state: &str) -> Vec<&'static str> {
        self.edges
            .iter()
            .filter(|e| e.from == state)
            .map(|e| e.to)
            .collect()
    }

    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

/// Builder for [`GraphDomain`].
#[derive(Debug, Clone)]
pub struct GraphDomainBuilder {
    graph: GraphDomain,
}

impl GraphDomainBuilder {
    /// Add a directed edge `from -> to`.
    #[must_use]
    pub fn edge(mut self, from: &'static str, to: &'static str, cost: i64) -> Self {
        self.graph.edges.push(Edge { from, to, cost });
        self
    }

    /// Add edges in both directions with the same cost.
    #[must_use]
    pub fn both_ways(self, a: &'static str, b: &'static str, cost: i64) -> Self {
        self.edge(a, b, cost).edge(b, a, cost)
    }

    /// Heuristic estimate from `state` to any goal other than itself.
    /// States without an estimate use 0.
    #[must_use]
    pub fn estimate(mut self, state: &'static str, estimate: i64) -> Self {
        self.graph.estimates.insert(state, estimate);
        self
    }

    #[must_use]
    pub fn build(self) -> GraphDomain {
        self.graph
    }
}

impl StateDomain for GraphDomain {
    type State = &'static str;
    type Action = Edge;
    type Goal = &'static str;

    fn actions(&self, state: &&'static str) -> Vec<Edge> {
        self.edges
            .iter()
            .filter(|e| e.from == *state)
            .copied()
            .collect()
    }

    fn result(&self, _state: &&'static str, action: &Edge) -> &'static str {
        action.to
    }

    fn cost(&self, _state: &&'static str, action: &Edge) -> i64 {
        action.cost
    }

    fn heuristic(&self, state: &&'static str, goal: &&'static str) -> i64 {
        if state == goal {
            0
        } else {
            self.estimates.get(state).copied().unwrap_or(0)
        }
    }

    fn satisfies(&self, state: &&'static str, goal: &&'static str) -> bool {
        state == goal
    }
}

impl HarnessDomain for GraphDomain {
    fn domain_id(&self) -> &str {
        &self.id
    }
}
