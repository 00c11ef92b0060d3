//! `SearchTrace`: ordered log of frontier pops.
//!
//! Every call to [`crate::search::SearchTree::search`] appends one
//! [`ExpansionEventV1`] per popped node, whether or not a goal is found. The
//! event list is the record of what the search decided; the metadata
//! carries aggregate counters and the termination reason.

use treesearch_kernel::proof::canon::{canonical_json_bytes, CanonError};
use treesearch_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};

use crate::node::NodeId;
use crate::policy::Strategy;

/// The complete trace of one search tree.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTrace {
    /// Frontier pops in order.
    pub events: Vec<ExpansionEventV1>,
    /// Aggregate counters and termination.
    pub metadata: TraceMetadataV1,
}

/// One frontier pop and what was done with the node.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpansionEventV1 {
    /// Position of this pop across all searches on the tree.
    pub expansion_order: u64,
    pub node_id: NodeId,
    /// `Display` rendering of the node's state.
    pub state: String,
    pub depth: u32,
    pub cost: i64,
    /// Domain heuristic from this state to the goal.
    pub heuristic: i64,
    /// Frontier size immediately after the pop.
    pub frontier_len_after_pop: usize,
    pub outcome: ExpansionOutcomeV1,
}

/// What happened to a popped node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpansionOutcomeV1 {
    /// Goal satisfied within the depth limit; search stopped here.
    GoalAccepted,
    /// Actions were enumerated; one record per action, in action order.
    Expanded { children: Vec<ChildRecordV1> },
    /// Node at the depth limit; counted as non-terminal but not expanded.
    DepthLimited,
}

/// The fate of one action of an expanded node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChildRecordV1 {
    /// A child node was allocated and queued.
    Created { node_id: NodeId, state: String, cost: i64 },
    /// The resulting state is already on the path to the parent.
    CycleSuppressed { state: String },
}

/// Why the most recent search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationV1 {
    /// `search` has not been called yet.
    NotStarted,
    /// A goal node was accepted.
    GoalReached { node_id: NodeId },
    /// The frontier emptied without an acceptable goal.
    FrontierExhausted,
}

/// Aggregate metadata, refreshed at the end of every search.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceMetadataV1 {
    pub strategy: Strategy,
    /// Limit passed to the most recent search.
    pub depth_limit: Option<u32>,
    pub termination: TerminationV1,
    /// Nodes allocated, root included.
    pub total_nodes: usize,
    pub total_cycles_suppressed: u64,
    pub frontier_high_water: usize,
    pub terminals: u64,
    pub non_terminals: u64,
}

impl SearchTrace {
    /// An empty trace for a tree using `strategy`.
    #[must_use]
    pub fn new(strategy: Strategy) -> Self {
        Self {
            events: Vec::new(),
            metadata: TraceMetadataV1 {
                strategy,
                depth_limit: None,
                termination: TerminationV1::NotStarted,
                total_nodes: 1,
                total_cycles_suppressed: 0,
                frontier_high_water: 1,
                terminals: 0,
                non_terminals: 0,
            },
        }
    }

    /// Node ids in pop order.
    #[must_use]
    pub fn expansion_order(&self) -> Vec<NodeId> {
        self.events.iter().map(|e| e.node_id).collect()
    }

    /// States in pop order.
    #[must_use]
    pub fn expanded_states(&self) -> Vec<&str> {
        self.events.iter().map(|e| e.state.as_str()).collect()
    }

    /// Serialize to canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonicalization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Content hash of the canonical bytes under [`HashDomain::SearchTrace`].
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonicalization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(HashDomain::SearchTrace, &bytes))
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "events": self.events.iter().map(event_to_json).collect::<Vec<_>>(),
            "metadata": metadata_to_json(&self.metadata),
        })
    }
}

fn event_to_json(e: &ExpansionEventV1) -> serde_json::Value {
    serde_json::json!({
        "cost": e.cost,
        "depth": e.depth,
        "expansion_order": e.expansion_order,
        "frontier_len_after_pop": e.frontier_len_after_pop,
        "heuristic": e.heuristic,
        "node_id": e.node_id.index(),
        "outcome": outcome_to_json(&e.outcome),
        "state": e.state,
    })
}

fn outcome_to_json(o: &ExpansionOutcomeV1) -> serde_json::Value {
    match o {
        ExpansionOutcomeV1::GoalAccepted => serde_json::json!({"type": "goal_accepted"}),
        ExpansionOutcomeV1::Expanded { children } => serde_json::json!({
            "children": children.iter().map(child_to_json).collect::<Vec<_>>(),
            "type": "expanded",
        }),
        ExpansionOutcomeV1::DepthLimited => serde_json::json!({"type": "depth_limited"}),
    }
}

fn child_to_json(c: &ChildRecordV1) -> serde_json::Value {
    match c {
        ChildRecordV1::Created {
            node_id,
            state,
            cost,
        } => serde_json::json!({
            "cost": cost,
            "node_id": node_id.index(),
            "state": state,
            "type": "created",
        }),
        ChildRecordV1::CycleSuppressed { state } => {
            serde_json::json!({"state": state, "type": "cycle_suppressed"})
        }
    }
}

fn termination_to_json(t: TerminationV1) -> serde_json::Value {
    match t {
        TerminationV1::NotStarted => serde_json::json!({"type": "not_started"}),
        TerminationV1::GoalReached { node_id } => {
            serde_json::json!({"node_id": node_id.index(), "type": "goal_reached"})
        }
        TerminationV1::FrontierExhausted => serde_json::json!({"type": "frontier_exhausted"}),
    }
}

fn metadata_to_json(m: &TraceMetadataV1) -> serde_json::Value {
    serde_json::json!({
        "depth_limit": m.depth_limit,
        "frontier_high_water": m.frontier_high_water,
        "non_terminals": m.non_terminals,
        "strategy": m.strategy.as_str(),
        "terminals": m.terminals,
        "termination": termination_to_json(m.termination),
        "total_cycles_suppressed": m.total_cycles_suppressed,
        "total_nodes": m.total_nodes,
    })
}
