//! The open list: not-yet-expanded nodes awaiting processing.
//!
//! Nodes always leave from the front. The [`Strategy`] decides only where
//! new nodes enter, which is what makes the traversal breadth-first,
//! depth-first or cost-ordered.

use std::collections::VecDeque;

use crate::node::NodeId;
use crate::policy::Strategy;

/// Ordered frontier of node ids with a size high-water mark.
#[derive(Debug, Clone, Default)]
pub struct Frontier {
    open: VecDeque<NodeId>,
    high_water: usize,
}

impl Frontier {
    /// A frontier holding only `root`.
    #[must_use]
    pub fn with_root(root: NodeId) -> Self {
        Self {
            open: VecDeque::from([root]),
            high_water: 1,
        }
    }

    /// Remove and return the first node.
    pub fn pop_first(&mut self) -> Option<NodeId> {
        self.open.pop_front()
    }

    /// Insert `children` according to `strategy`.
    ///
    /// `cost_of` gives the accumulated cost of a node; only
    /// [`Strategy::Uniform`] consults it. Under `Uniform` the frontier stays
    /// sorted by ascending cost, and nodes of equal cost keep arrival order.
    pub fn insert<F>(&mut self, strategy: Strategy, children: Vec<NodeId>, cost_of: F)
    where
        F: Fn(NodeId) -> i64,
    {
        match strategy {
            Strategy::Breadth => self.open.extend(children),
            Strategy::Depth => {
                for id in children.into_iter().rev() {
                    self.open.push_front(id);
                }
            }
            Strategy::Uniform => {
                for id in children {
                    let cost = cost_of(id);
                    let at = self.open.partition_point(|&queued| cost_of(queued) <= cost);
                    self.open.insert(at, id);
                }
            }
        }
        self.high_water = self.high_water.max(self.open.len());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.open.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Largest size the frontier has reached.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }

    /// Queued ids, front first.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.open.iter().copied()
    }
}
