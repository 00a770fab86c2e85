//! Depth-first traversal with edge classification.
//!
//! This module provides the visitor-driven depth-first search that the rest of the crate's
//! algorithms are built on. Every node passes through three states during one search:
//!
//! 1. *unvisited* - not reached yet
//! 2. *on stack* - discovered, some successors still to explore
//! 3. *finished* - all successors explored
//!
//! Exploring the edge `u -> v` classifies it by the state of `v` at that moment:
//!
//! | State of `v` | Class | Search descends? |
//! |--------------|-------|------------------|
//! | unvisited | [`EdgeKind::Tree`] | yes |
//! | on stack | [`EdgeKind::Back`] | no |
//! | finished | [`EdgeKind::ForwardCross`] | no |
//!
//! A back edge points at an ancestor on the current path and therefore closes a cycle.
//!
//! # Event Order
//!
//! For each node `u`, [`Visitor::discover_node`] fires first, then one edge event per entry
//! of `u`'s successor list in list order (a tree edge event fires *before* the search
//! descends into its target), then [`Visitor::finish_node`].
//!
//! The search is iterative with an explicit stack, so very deep graphs cannot overflow the
//! call stack. The event order is the same as in the textbook recursive formulation.
//!
//! # Early Termination
//!
//! [`Visitor::is_done`] is polled before every step. Once it returns `true` the search
//! returns immediately; nodes still on the stack do not receive `finish_node`.

use crate::graph::{
    edge::{Edge, EdgeKind},
    traits::{Predecessors, Reversed, Successors},
    NodeId,
};

/// Callbacks fired by a depth-first search.
///
/// Every method has a no-op default, so a visitor only implements the events it cares
/// about. State a visitor needs across calls lives in the implementing type itself.
///
/// # Examples
///
/// ```rust
/// use flowgraph::{Edge, Graph, NodeId, Visitor};
///
/// #[derive(Default)]
/// struct LoopFinder {
///     loops: Vec<Edge>,
/// }
///
/// impl Visitor for LoopFinder {
///     fn back_edge(&mut self, edge: Edge) {
///         self.loops.push(edge);
///     }
/// }
///
/// let mut graph = Graph::new();
/// let head = graph.add_node("head");
/// let body = graph.add_node("body");
/// graph.add_edge(head, body)?;
/// graph.add_edge(body, head)?;
///
/// let mut finder = LoopFinder::default();
/// graph.dfs_node(head, &mut finder);
/// assert_eq!(finder.loops, vec![Edge::new(body, head, 0)]);
/// # Ok::<(), flowgraph::Error>(())
/// ```
pub trait Visitor {
    /// Called when `node` is reached for the first time.
    fn discover_node(&mut self, _node: NodeId) {}

    /// Called once every successor of `node` has been explored.
    fn finish_node(&mut self, _node: NodeId) {}

    /// Called for an edge whose target is unvisited, just before descending into it.
    fn tree_edge(&mut self, _edge: Edge) {}

    /// Called for an edge whose target is an ancestor still on the stack.
    fn back_edge(&mut self, _edge: Edge) {}

    /// Called for an edge whose target has already been finished.
    fn forward_cross_edge(&mut self, _edge: Edge) {}

    /// Returns `true` to stop the search at the next step.
    fn is_done(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnStack,
    Finished,
}

struct Frame {
    node: NodeId,
    successors: Vec<NodeId>,
    next: usize,
}

impl Frame {
    fn enter<G: Successors, V: Visitor>(
        graph: &G,
        node: NodeId,
        marks: &mut [Mark],
        visitor: &mut V,
    ) -> Self {
        marks[node.index()] = Mark::OnStack;
        visitor.discover_node(node);
        Frame {
            node,
            successors: graph.successors(node).collect(),
            next: 0,
        }
    }
}

/// Runs one rooted search, sharing `marks` with any earlier searches of the same traversal.
fn search<G: Successors, V: Visitor>(graph: &G, start: NodeId, marks: &mut [Mark], visitor: &mut V) {
    if marks[start.index()] != Mark::Unvisited || visitor.is_done() {
        return;
    }

    let mut stack = vec![Frame::enter(graph, start, marks, visitor)];

    while let Some(frame) = stack.last_mut() {
        if visitor.is_done() {
            return;
        }

        let Some(&target) = frame.successors.get(frame.next) else {
            let node = frame.node;
            stack.pop();
            marks[node.index()] = Mark::Finished;
            visitor.finish_node(node);
            continue;
        };

        let edge = Edge::new(frame.node, target, frame.next);
        frame.next += 1;

        match marks[target.index()] {
            Mark::Unvisited => {
                visitor.tree_edge(edge);
                stack.push(Frame::enter(graph, target, marks, visitor));
            }
            Mark::OnStack => visitor.back_edge(edge),
            Mark::Finished => visitor.forward_cross_edge(edge),
        }
    }
}

/// Runs a depth-first search over every node of the graph.
///
/// Nodes are taken as roots in the graph's stored order; each root that an earlier search
/// has not already reached starts a new search. Visitation state is shared across roots,
/// so every node is discovered exactly once and disconnected components are all covered.
///
/// # Arguments
///
/// * `graph` - The graph to traverse
/// * `visitor` - Receives the traversal events
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V) for the node states and the stack
pub fn dfs<G: Successors, V: Visitor>(graph: &G, visitor: &mut V) {
    let mut marks = vec![Mark::Unvisited; graph.node_bound()];
    for root in graph.node_ids() {
        if visitor.is_done() {
            break;
        }
        search(graph, root, &mut marks, visitor);
    }
}

/// Runs a depth-first search from `start`.
///
/// Only nodes reachable from `start` are visited. A `start` that is not a live node
/// produces no events.
///
/// # Arguments
///
/// * `graph` - The graph to traverse
/// * `start` - The root of the search
/// * `visitor` - Receives the traversal events
///
/// # Examples
///
/// ```rust
/// use flowgraph::{algorithms::{dfs_node, DfsTrace}, EdgeKind, Graph};
///
/// let mut graph = Graph::new();
/// let a = graph.add_node('A');
/// let b = graph.add_node('B');
/// let c = graph.add_node('C');
/// graph.add_edge(a, b)?;
/// graph.add_edge(b, c)?;
/// graph.add_edge(c, a)?;
///
/// let mut trace = DfsTrace::new();
/// dfs_node(&graph, a, &mut trace);
/// assert_eq!(trace.kind_of(a, b), Some(EdgeKind::Tree));
/// assert_eq!(trace.kind_of(b, c), Some(EdgeKind::Tree));
/// assert_eq!(trace.kind_of(c, a), Some(EdgeKind::Back));
/// # Ok::<(), flowgraph::Error>(())
/// ```
pub fn dfs_node<G: Successors, V: Visitor>(graph: &G, start: NodeId, visitor: &mut V) {
    if !graph.contains_node(start) {
        return;
    }
    let mut marks = vec![Mark::Unvisited; graph.node_bound()];
    search(graph, start, &mut marks, visitor);
}

/// Runs a depth-first search from `start`, following incoming edges.
///
/// Predecessors are walked as if they were successors, which answers "what can reach
/// `start`?". Edge events report the walked direction: `from` is the node being expanded,
/// `to` is its predecessor and `nth` is the predecessor's position in the incoming list.
pub fn dfs_node_reverse<G: Predecessors, V: Visitor>(graph: &G, start: NodeId, visitor: &mut V) {
    dfs_node(&Reversed::new(graph), start, visitor);
}

/// A visitor that records every event of a search.
///
/// Useful when the whole classification is wanted at once, and as the basis of the
/// ordering helpers in this module.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DfsTrace {
    /// Nodes in discovery (pre-) order
    pub discovered: Vec<NodeId>,
    /// Nodes in finish (post-) order
    pub finished: Vec<NodeId>,
    /// Explored edges with their class, in exploration order
    pub edges: Vec<(Edge, EdgeKind)>,
}

impl DfsTrace {
    /// Creates an empty trace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the class recorded for the edge `from -> to`, if it was explored.
    #[must_use]
    pub fn kind_of(&self, from: NodeId, to: NodeId) -> Option<EdgeKind> {
        self.edges
            .iter()
            .find(|(edge, _)| edge.from == from && edge.to == to)
            .map(|&(_, kind)| kind)
    }

    /// Returns the explored edges of one class.
    pub fn edges_of(&self, kind: EdgeKind) -> impl Iterator<Item = Edge> + '_ {
        self.edges
            .iter()
            .filter(move |(_, k)| *k == kind)
            .map(|&(edge, _)| edge)
    }

    /// Returns the number of explored edges per class, indexed by `EdgeKind as usize`.
    #[must_use]
    pub fn counts(&self) -> [usize; <EdgeKind as strum::EnumCount>::COUNT] {
        let mut counts = [0; <EdgeKind as strum::EnumCount>::COUNT];
        for &(_, kind) in &self.edges {
            counts[kind as usize] += 1;
        }
        counts
    }
}

impl Visitor for DfsTrace {
    fn discover_node(&mut self, node: NodeId) {
        self.discovered.push(node);
    }

    fn finish_node(&mut self, node: NodeId) {
        self.finished.push(node);
    }

    fn tree_edge(&mut self, edge: Edge) {
        self.edges.push((edge, EdgeKind::Tree));
    }

    fn back_edge(&mut self, edge: Edge) {
        self.edges.push((edge, EdgeKind::Back));
    }

    fn forward_cross_edge(&mut self, edge: Edge) {
        self.edges.push((edge, EdgeKind::ForwardCross));
    }
}

struct FinishOrder(Vec<NodeId>);

impl Visitor for FinishOrder {
    fn finish_node(&mut self, node: NodeId) {
        self.0.push(node);
    }
}

/// Returns the nodes reachable from `start` in postorder.
///
/// A node appears after everything reachable from it through tree edges.
///
/// # Examples
///
/// ```rust
/// use flowgraph::{algorithms::postorder, Graph};
///
/// let mut graph = Graph::new();
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
/// let c = graph.add_node("C");
/// graph.add_edge(a, b)?;
/// graph.add_edge(b, c)?;
///
/// assert_eq!(postorder(&graph, a), vec![c, b, a]);
/// # Ok::<(), flowgraph::Error>(())
/// ```
pub fn postorder<G: Successors>(graph: &G, start: NodeId) -> Vec<NodeId> {
    let mut order = FinishOrder(Vec::with_capacity(graph.node_count()));
    dfs_node(graph, start, &mut order);
    order.0
}

/// Returns the nodes reachable from `start` in reverse postorder.
///
/// On an acyclic graph this is a topological order; on a control flow graph it is the
/// usual iteration order for forward data flow problems.
pub fn reverse_postorder<G: Successors>(graph: &G, start: NodeId) -> Vec<NodeId> {
    let mut order = postorder(graph, start);
    order.reverse();
    order
}
