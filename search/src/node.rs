//! Search tree nodes and the arena that owns them.
//!
//! A node's `parent` is a [`NodeId`] into the same [`NodeArena`], never an
//! owning pointer. The arena is append-only, so a parent is always allocated
//! before (and lives as long as) its children, and walking from a node to the
//! root costs O(depth).

use std::fmt;

/// Index of a node in its [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The arena slot this id refers to.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One node of the search tree.
///
/// Consistency of `depth` and `cost` with the parent chain is the
/// responsibility of whoever builds the node (the search loop).
#[derive(Debug, Clone, PartialEq)]
pub struct SearchNode<S> {
    /// Domain state at this node.
    pub state: S,
    /// Parent node (`None` for the root).
    pub parent: Option<NodeId>,
    /// Number of parent links to the root (root = 0).
    pub depth: u32,
    /// Sum of action costs along the root-to-node path.
    pub cost: i64,
}

impl<S> SearchNode<S> {
    #[must_use]
    pub fn new(state: S, parent: Option<NodeId>, depth: u32, cost: i64) -> Self {
        Self {
            state,
            parent,
            depth,
            cost,
        }
    }

    /// A root node: no parent, depth 0, cost 0.
    #[must_use]
    pub fn root(state: S) -> Self {
        Self::new(state, None, 0, 0)
    }
}

/// Append-only store of every node a search tree allocated.
#[derive(Debug, Clone)]
pub struct NodeArena<S> {
    nodes: Vec<SearchNode<S>>,
}

impl<S> NodeArena<S> {
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Store `node` and return its id.
    ///
    /// # Panics
    ///
    /// Panics if `node.parent` does not refer to a node already in this
    /// arena. Parents must be allocated before their children.
    pub fn push(&mut self, node: SearchNode<S>) -> NodeId {
        if let Some(parent) = node.parent {
            assert!(
                parent.0 < self.nodes.len(),
                "parent {parent} is not allocated in this arena"
            );
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// A borrowed view of node `id`, for path walks and display.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this arena.
    #[must_use]
    pub fn node(&self, id: NodeId) -> NodeRef<'_, S> {
        assert!(id.0 < self.nodes.len(), "node {id} is not in this arena");
        NodeRef { arena: self, id }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All node ids in allocation order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }
}

impl<S> Default for NodeArena<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// A node together with the arena it lives in.
pub struct NodeRef<'a, S> {
    arena: &'a NodeArena<S>,
    id: NodeId,
}

// Manual impls: a `NodeRef` is two references regardless of `S`.
impl<S> Clone for NodeRef<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for NodeRef<'_, S> {}

impl<'a, S> NodeRef<'a, S> {
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    fn inner(&self) -> &'a SearchNode<S> {
        &self.arena.nodes[self.id.0]
    }

    #[must_use]
    pub fn state(&self) -> &'a S {
        &self.inner().state
    }

    #[must_use]
    pub fn depth(&self) -> u32 {
        self.inner().depth
    }

    #[must_use]
    pub fn cost(&self) -> i64 {
        self.inner().cost
    }

    #[must_use]
    pub fn parent(&self) -> Option<NodeRef<'a, S>> {
        self.inner().parent.map(|id| NodeRef {
            arena: self.arena,
            id,
        })
    }

    /// Strict ancestors, nearest first, ending at the root.
    pub fn ancestors(&self) -> impl Iterator<Item = NodeRef<'a, S>> {
        std::iter::successors(self.parent(), NodeRef::parent)
    }
}

impl<S: Clone> NodeRef<'_, S> {
    /// States from the root to this node, root first (`depth + 1` entries).
    #[must_use]
    pub fn ancestor_states(&self) -> Vec<S> {
        let mut states = Vec::with_capacity(self.depth() as usize + 1);
        states.push(self.state().clone());
        states.extend(self.ancestors().map(|n| n.state().clone()));
        states.reverse();
        states
    }
}

impl<S: PartialEq> NodeRef<'_, S> {
    /// Whether `candidate` equals the state of a strict ancestor.
    #[must_use]
    pub fn is_ancestor(&self, candidate: &S) -> bool {
        self.ancestors().any(|n| n.state() == candidate)
    }

    /// Whether `candidate` is on the root-to-node path, this node included.
    #[must_use]
    pub fn path_contains(&self, candidate: &S) -> bool {
        self.state() == candidate || self.is_ancestor(candidate)
    }
}

impl<S: fmt::Display> fmt::Display for NodeRef<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.parent() {
            Some(parent) => write!(f, "node({},{})", self.state(), parent.state()),
            None => write!(f, "node({},None)", self.state()),
        }
    }
}

impl<S: fmt::Debug> fmt::Debug for NodeRef<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.inner();
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("state", &node.state)
            .field("parent", &node.parent)
            .field("depth", &node.depth)
            .field("cost", &node.cost)
            .finish()
    }
}
