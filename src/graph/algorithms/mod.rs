//! Graph algorithms for program analysis.
//!
//! Everything here is written against the traits in [`crate::graph`] ([`Successors`],
//! [`Predecessors`]) rather than against [`Graph`] itself, and is stateless: all
//! per-traversal state lives on the stack of the call or in the caller's [`Visitor`].
//!
//! # Available Algorithms
//!
//! ## Traversal
//!
//! - [`dfs`] - Depth-first search over every node, covering disconnected components
//! - [`dfs_node`] - Depth-first search from one root
//! - [`dfs_node_reverse`] - Depth-first search from one root along incoming edges
//! - [`postorder`] / [`reverse_postorder`] - Node orderings derived from a search
//!
//! ## Cycle Detection
//!
//! - [`has_cycle`] - Is a cycle reachable from a root?
//! - [`is_cyclic`] - Does the graph contain any cycle?
//! - [`back_edges`] - All back edges of a whole-graph search
//!
//! | Algorithm | Time Complexity |
//! |-----------|-----------------|
//! | DFS (all variants) | O(V + E) |
//! | Cycle detection | O(V + E) |
//!
//! # Examples
//!
//! ```rust
//! use flowgraph::{algorithms::{self, DfsTrace}, EdgeKind, Graph};
//!
//! let mut graph = Graph::new();
//! let a = graph.add_node("A");
//! let b = graph.add_node("B");
//! let c = graph.add_node("C");
//! let d = graph.add_node("D");
//! graph.add_edge(a, b)?;
//! graph.add_edge(a, c)?;
//! graph.add_edge(b, d)?;
//! graph.add_edge(c, d)?;
//!
//! let mut trace = DfsTrace::new();
//! algorithms::dfs_node(&graph, a, &mut trace);
//! assert_eq!(trace.edges_of(EdgeKind::Tree).count(), 3);
//! assert_eq!(trace.kind_of(c, d), Some(EdgeKind::ForwardCross));
//! assert!(!algorithms::is_cyclic(&graph));
//! # Ok::<(), flowgraph::Error>(())
//! ```
//!
//! [`Successors`]: crate::graph::Successors
//! [`Predecessors`]: crate::graph::Predecessors
//! [`Graph`]: crate::graph::Graph

mod cycles;
mod traversal;

pub use cycles::{back_edges, has_cycle, is_cyclic};
pub use traversal::{
    dfs, dfs_node, dfs_node_reverse, postorder, reverse_postorder, DfsTrace, Visitor,
};
