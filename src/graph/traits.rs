//! Trait definitions for graph abstractions.
//!
//! The traversal engine in [`algorithms`](crate::graph::algorithms) is written against these
//! traits rather than against [`Graph`](crate::Graph) directly. Any structure that can name its
//! nodes and enumerate ordered successors can be walked, and [`Reversed`] turns any graph with
//! predecessor access into one whose successors are the original predecessors.
//!
//! # Architecture
//!
//! - [`GraphBase`] - Node enumeration and the id bound used to size per-node state
//! - [`Successors`] - Ordered forward edge traversal
//! - [`Predecessors`] - Ordered backward edge traversal
//! - [`Reversed`] - View that swaps the two directions

use crate::graph::NodeId;

/// Base trait providing core graph properties.
///
/// Node ids need not be dense: a graph that deletes nodes leaves holes in its id space.
/// [`node_bound`](GraphBase::node_bound) therefore reports an exclusive upper bound on
/// every live id, which algorithms use to size per-node state vectors.
pub trait GraphBase {
    /// Returns the number of live nodes in the graph.
    fn node_count(&self) -> usize;

    /// Returns an exclusive upper bound on the index of every live node.
    ///
    /// For any live node `n`, `n.index() < self.node_bound()`.
    fn node_bound(&self) -> usize;

    /// Returns `true` if `node` refers to a live node.
    fn contains_node(&self, node: NodeId) -> bool;

    /// Returns an iterator over all live node identifiers, in the graph's stored order.
    fn node_ids(&self) -> impl Iterator<Item = NodeId>;
}

/// Trait for graphs that support forward edge traversal.
pub trait Successors: GraphBase {
    /// Returns the successors of `node` in outgoing-list order.
    ///
    /// The position of each item in the iteration is the `nth` of the corresponding edge.
    /// A dead or unknown node yields nothing.
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;
}

/// Trait for graphs that support backward edge traversal.
pub trait Predecessors: GraphBase {
    /// Returns the predecessors of `node` in incoming-list order.
    ///
    /// A dead or unknown node yields nothing.
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;
}

/// A view of a graph with every edge pointing the other way.
///
/// Walking the successors of a `Reversed` graph walks the predecessors of the wrapped one.
/// This is how [`dfs_node_reverse`](crate::graph::algorithms::dfs_node_reverse) reuses the
/// forward traversal engine for backward reachability.
///
/// # Examples
///
/// ```rust
/// use flowgraph::{Graph, Reversed, Successors};
///
/// let mut graph = Graph::new();
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
/// graph.add_edge(a, b)?;
///
/// let reversed = Reversed::new(&graph);
/// assert_eq!(reversed.successors(b).collect::<Vec<_>>(), vec![a]);
/// # Ok::<(), flowgraph::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Reversed<'g, G> {
    graph: &'g G,
}

impl<'g, G> Reversed<'g, G> {
    /// Wraps `graph` in a reversed view.
    #[must_use]
    pub fn new(graph: &'g G) -> Self {
        Reversed { graph }
    }

    /// Returns the wrapped graph.
    #[must_use]
    pub fn inner(&self) -> &'g G {
        self.graph
    }
}

impl<G: GraphBase> GraphBase for Reversed<'_, G> {
    fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    fn node_bound(&self) -> usize {
        self.graph.node_bound()
    }

    fn contains_node(&self, node: NodeId) -> bool {
        self.graph.contains_node(node)
    }

    fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        self.graph.node_ids()
    }
}

impl<G: Predecessors> Successors for Reversed<'_, G> {
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.graph.predecessors(node)
    }
}

impl<G: Successors> Predecessors for Reversed<'_, G> {
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.graph.successors(node)
    }
}
