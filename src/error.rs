use thiserror::Error;

use crate::graph::NodeId;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Only graph *mutations* are fallible. Lookups that find nothing are not errors: they
/// return `None` or an empty view, and callers treat that as an ordinary outcome.
///
/// # Error Categories
///
/// ## Handle Errors
/// - [`Error::InvalidNode`] - A node handle was used after deletion or reset
///
/// ## Edge Policy Errors
/// - [`Error::DuplicateEdge`] - The edge already exists and the graph rejects duplicates
/// - [`Error::SelfLoop`] - A self loop was requested and the graph forbids them
///
/// # Examples
///
/// ```rust
/// use flowgraph::{Error, Graph};
///
/// let mut graph = Graph::new();
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
/// graph.add_edge(a, b)?;
///
/// match graph.add_edge(a, b) {
///     Err(Error::DuplicateEdge { from, to }) => {
///         assert_eq!((from, to), (a, b));
///     }
///     other => panic!("unexpected result: {other:?}"),
/// }
/// # Ok::<(), flowgraph::Error>(())
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The node handle does not refer to a live node.
    ///
    /// Returned when a mutation names a node that was deleted, was removed by a
    /// [`Graph::reset`](crate::Graph::reset), or was never allocated by this graph.
    /// The graph is left untouched when this error is returned.
    #[error("node {0} does not exist or has been deleted")]
    InvalidNode(NodeId),

    /// The edge `from -> to` already exists.
    ///
    /// Only returned under [`DuplicateEdgePolicy::Reject`](crate::DuplicateEdgePolicy::Reject).
    /// Edge and adjacency bookkeeping are unchanged.
    ///
    /// # Fields
    ///
    /// * `from` - Source node of the rejected edge
    /// * `to` - Target node of the rejected edge
    #[error("edge {from} -> {to} already exists")]
    DuplicateEdge {
        /// Source node of the rejected edge
        from: NodeId,
        /// Target node of the rejected edge
        to: NodeId,
    },

    /// A self loop was requested on a graph configured without self loops.
    #[error("self loop on {0} is not permitted by the graph configuration")]
    SelfLoop(NodeId),
}
