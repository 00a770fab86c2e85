//! Cycle detection built on the depth-first visitor.
//!
//! A directed graph contains a cycle exactly when a depth-first search finds a back edge.
//! These helpers are thin visitors over [`dfs`](super::dfs) and [`dfs_node`](super::dfs_node):
//!
//! - Validating that a dependency graph is acyclic
//! - Detecting recursion in call graphs
//! - Locating loop latches (the sources of back edges) in control flow graphs

use crate::graph::{
    algorithms::traversal::{dfs, dfs_node, Visitor},
    edge::Edge,
    traits::Successors,
    NodeId,
};

#[derive(Default)]
struct FirstBackEdge(Option<Edge>);

impl Visitor for FirstBackEdge {
    fn back_edge(&mut self, edge: Edge) {
        self.0.get_or_insert(edge);
    }

    fn is_done(&self) -> bool {
        self.0.is_some()
    }
}

#[derive(Default)]
struct AllBackEdges(Vec<Edge>);

impl Visitor for AllBackEdges {
    fn back_edge(&mut self, edge: Edge) {
        self.0.push(edge);
    }
}

/// Checks whether a cycle is reachable from `start`.
///
/// The search stops at the first back edge.
///
/// # Examples
///
/// ```rust
/// use flowgraph::{algorithms::has_cycle, Graph};
///
/// let mut graph = Graph::new();
/// let a = graph.add_node(());
/// let b = graph.add_node(());
/// graph.add_edge(a, b)?;
/// assert!(!has_cycle(&graph, a));
///
/// graph.add_edge(b, a)?;
/// assert!(has_cycle(&graph, a));
/// # Ok::<(), flowgraph::Error>(())
/// ```
pub fn has_cycle<G: Successors>(graph: &G, start: NodeId) -> bool {
    let mut finder = FirstBackEdge::default();
    dfs_node(graph, start, &mut finder);
    finder.0.is_some()
}

/// Checks whether the graph contains any cycle, in any component.
pub fn is_cyclic<G: Successors>(graph: &G) -> bool {
    let mut finder = FirstBackEdge::default();
    dfs(graph, &mut finder);
    finder.0.is_some()
}

/// Returns every back edge found by a whole-graph search, in exploration order.
///
/// Removing all of them leaves the graph acyclic. Which edges are reported depends on the
/// node order, because a different search order can choose different back edges for the
/// same cycle.
pub fn back_edges<G: Successors>(graph: &G) -> Vec<Edge> {
    let mut collector = AllBackEdges::default();
    dfs(graph, &mut collector);
    collector.0
}
