//! Node identifier implementation.
//!
//! This module provides the [`NodeId`] type, the stable handle a caller keeps for a node.
//! Identifiers are handed out by [`Graph`](crate::Graph) from a monotonically increasing
//! counter and are never reassigned, so a `NodeId` names at most one node over the whole
//! lifetime of the graph that issued it.

use std::fmt;

/// A stable identifier for a node within a [`Graph`](crate::Graph).
///
/// `NodeId` wraps the `usize` index assigned when the node was created. Unlike a plain
/// vector index it survives deletions of other nodes: deleting a node leaves a hole in the
/// id space rather than shifting later nodes down, and the deleted id is never handed out
/// again, not even after [`Graph::reset`](crate::Graph::reset).
///
/// A `NodeId` is only a name. Once its node has been deleted, the handle is *invalid*:
/// mutations that receive it return [`Error::InvalidNode`](crate::Error::InvalidNode) and
/// queries treat it as absent.
///
/// # Examples
///
/// ```rust
/// use flowgraph::{Graph, NodeId};
///
/// let mut graph = Graph::new();
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
///
/// assert_eq!(a, NodeId::new(0));
/// assert_eq!(b.index(), 1);
/// assert!(a < b);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Creates a `NodeId` from a raw index value.
    ///
    /// This is useful for looking up a node whose index was stored externally
    /// (for example in a report or a log line). The resulting id only refers to a
    /// node if a graph actually issued it and the node is still alive.
    ///
    /// # Arguments
    ///
    /// * `index` - The raw node index
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Returns the raw index value of this node identifier.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl From<usize> for NodeId {
    #[inline]
    fn from(index: usize) -> Self {
        NodeId(index)
    }
}

impl From<NodeId> for usize {
    #[inline]
    fn from(node: NodeId) -> Self {
        node.0
    }
}
