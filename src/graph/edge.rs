//! Edge views and depth-first edge classes.
//!
//! Edges are not stored as standalone entities. A node's outgoing list *is* the edge
//! set, and the position of a target inside that list is meaningful to callers. An
//! [`Edge`] is the derived `(from, to, nth)` view of one entry in such a list.

use std::fmt;

use strum::{Display, EnumCount, EnumIter};

use crate::graph::NodeId;

/// A directed edge as seen from its source node's outgoing list.
///
/// `nth` is the zero-based position of `to` within `from`'s outgoing list at the time the
/// view was produced. For control flow graphs this is how branch order is expressed:
/// successor 0 might be the fall-through path and successor 1 the taken branch.
///
/// During a reverse traversal the roles follow the walk: `from` is the node being walked,
/// `to` is one of its predecessors and `nth` is that predecessor's position in the incoming
/// list.
///
/// # Examples
///
/// ```rust
/// use flowgraph::{Edge, Graph};
///
/// let mut graph = Graph::new();
/// let cond = graph.add_node("cond");
/// let fallthrough = graph.add_node("else");
/// let taken = graph.add_node("then");
/// graph.add_edge(cond, fallthrough)?;
/// graph.add_edge(cond, taken)?;
///
/// let edges: Vec<Edge> = graph.edges().collect();
/// assert_eq!(edges[1], Edge::new(cond, taken, 1));
/// # Ok::<(), flowgraph::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Source node
    pub from: NodeId,
    /// Target node
    pub to: NodeId,
    /// Position of `to` in the source node's outgoing list
    pub nth: usize,
}

impl Edge {
    /// Creates an edge view.
    #[must_use]
    pub const fn new(from: NodeId, to: NodeId, nth: usize) -> Self {
        Edge { from, to, nth }
    }

    /// Returns `true` if the edge starts and ends at the same node.
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} [{}]", self.from, self.to, self.nth)
    }
}

/// The class a depth-first search assigns to an edge.
///
/// The class depends on the state of the target node at the moment the edge is explored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumCount)]
pub enum EdgeKind {
    /// The target had not been discovered yet; the search descends through this edge.
    #[strum(serialize = "tree")]
    Tree,
    /// The target is an ancestor still on the search stack, so the edge closes a cycle.
    #[strum(serialize = "back")]
    Back,
    /// The target was already finished and is not an ancestor.
    #[strum(serialize = "forward/cross")]
    ForwardCross,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_edge_display() {
        let edge = Edge::new(NodeId::new(1), NodeId::new(4), 0);
        assert_eq!(edge.to_string(), "n1 -> n4 [0]");
        assert!(!edge.is_self_loop());
        assert!(Edge::new(NodeId::new(2), NodeId::new(2), 0).is_self_loop());
    }

    #[test]
    fn test_edge_kind_names() {
        let names: Vec<String> = EdgeKind::iter().map(|k| k.to_string()).collect();
        assert_eq!(names, vec!["tree", "back", "forward/cross"]);
        assert_eq!(EdgeKind::COUNT, 3);
    }
}
