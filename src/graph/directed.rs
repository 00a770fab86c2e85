//! Core directed graph implementation.
//!
//! This module provides [`Graph`], an ordered directed graph whose nodes carry an owned
//! payload. It is the container control-flow and call-graph builders work against:
//!
//! - Node ids are stable and never reused, so analysis results keyed by [`NodeId`] stay
//!   meaningful while the graph is edited
//! - Successor lists are ordered and positions can be assigned explicitly, so "branch 0" and
//!   "branch 1" of a conditional can be told apart
//! - A node can be split forward, interposing a new node on all of its outgoing paths at once
//!
//! Every edge `a -> b` is recorded twice: in `a`'s outgoing list and in `b`'s incoming list.
//! All mutations update both sides together, and [`Graph::edge_count`] always equals the sum
//! of the outgoing list lengths.

use crate::{
    graph::{
        adjacency::Adjacency,
        algorithms::{self, Visitor},
        config::{DuplicateEdgePolicy, GraphConfig},
        edge::Edge,
        payload::Payload,
        store::{NodeEntry, NodeStore},
        traits::{GraphBase, Predecessors, Successors},
        NodeId,
    },
    Error, Result,
};

/// An ordered directed graph with owned node payloads.
///
/// `Graph` stores its nodes in an arena indexed by [`NodeId`]. Edges are plain id pairs kept
/// in per-node adjacency lists, so cycles in the graph never become ownership cycles: only
/// the graph owns nodes, and deleting a node detaches it from all of its neighbours before
/// releasing its payload.
///
/// # Edge Order
///
/// The outgoing list of a node is ordered. [`add_edge`](Self::add_edge) appends and
/// [`add_edge_at`](Self::add_edge_at) inserts at a chosen position; the position of a target
/// is reported as [`Edge::nth`] and by [`nth_neighbour`](Self::nth_neighbour). Edits to one
/// node's outgoing list never reorder another node's list.
///
/// # Duplicate Edges and Self Loops
///
/// A `from -> to` pair is stored at most once. Whether asking for it again is an error is
/// controlled by [`GraphConfig::duplicate_edges`]; whether `from == to` is allowed is
/// controlled by [`GraphConfig::allow_self_loops`].
///
/// # Payload Release
///
/// A node created through [`add_node_with_release`](Self::add_node_with_release) hands its
/// payload to the supplied closure exactly once: when the node is deleted, when the graph is
/// reset, or when the graph is dropped.
///
/// # Thread Safety
///
/// `Graph<T>` is [`Send`] and [`Sync`] when `T` is. Mutation requires `&mut self`; callers
/// sharing a graph across threads must serialize writers themselves.
///
/// # Examples
///
/// ```rust
/// use flowgraph::Graph;
///
/// // if (cond) { then } else { else }; join
/// let mut cfg = Graph::new();
/// let cond = cfg.add_node("cond");
/// let then_bb = cfg.add_node("then");
/// let else_bb = cfg.add_node("else");
/// let join = cfg.add_node("join");
///
/// cfg.add_edge(cond, else_bb)?;
/// cfg.add_edge_at(cond, then_bb, 1)?;
/// cfg.add_edge(then_bb, join)?;
/// cfg.add_edge(else_bb, join)?;
///
/// assert_eq!(cfg.nth_neighbour(cond, 1), Some(then_bb));
/// assert_eq!(cfg.in_neighbours(join), &[then_bb, else_bb]);
/// assert_eq!(cfg.edge_count(), 4);
/// # Ok::<(), flowgraph::Error>(())
/// ```
#[derive(Debug)]
pub struct Graph<T> {
    /// Node arena and id allocator
    store: NodeStore<T>,
    /// Number of edges, equal to the sum of outgoing list lengths
    edge_count: usize,
    /// Edge insertion rules
    config: GraphConfig,
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Graph<T> {
    /// Creates a new empty graph with the default [`GraphConfig`].
    ///
    /// The graph starts with no nodes, no edges and an id counter of zero.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Creates a new empty graph with the given edge rules.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flowgraph::{Graph, GraphConfig};
    ///
    /// let mut graph = Graph::with_config(GraphConfig::permissive());
    /// let a = graph.add_node(());
    /// let b = graph.add_node(());
    /// graph.add_edge(a, b)?;
    /// graph.add_edge(a, b)?; // ignored, not an error
    /// assert_eq!(graph.edge_count(), 1);
    /// # Ok::<(), flowgraph::Error>(())
    /// ```
    #[must_use]
    pub fn with_config(config: GraphConfig) -> Self {
        Graph {
            store: NodeStore::default(),
            edge_count: 0,
            config,
        }
    }

    /// Returns the edge rules this graph was created with.
    #[must_use]
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Adds a new node carrying `data`.
    ///
    /// The node receives the next id from the graph's counter. The payload is dropped
    /// normally when the node goes away.
    ///
    /// # Arguments
    ///
    /// * `data` - The payload to store in the node
    ///
    /// # Returns
    ///
    /// The `NodeId` of the new node.
    pub fn add_node(&mut self, data: T) -> NodeId {
        let id = self.store.insert(Payload::new(data));
        #[cfg(feature = "logging")]
        log::trace!("added node {id}");
        id
    }

    /// Adds a new node carrying `data`, with a closure that releases the payload.
    ///
    /// `release` receives the payload by value exactly once, when the node is deleted, the
    /// graph is reset or the graph is dropped.
    ///
    /// # Arguments
    ///
    /// * `data` - The payload to store in the node
    /// * `release` - Destructor invoked with the payload when the node goes away
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::sync::{Arc, Mutex};
    /// use flowgraph::Graph;
    ///
    /// let released = Arc::new(Mutex::new(Vec::new()));
    /// let sink = Arc::clone(&released);
    ///
    /// let mut graph = Graph::new();
    /// let n = graph.add_node_with_release(String::from("bb_0"), move |name| {
    ///     sink.lock().unwrap().push(name);
    /// });
    ///
    /// graph.delete_node(n)?;
    /// assert_eq!(*released.lock().unwrap(), vec![String::from("bb_0")]);
    /// # Ok::<(), flowgraph::Error>(())
    /// ```
    pub fn add_node_with_release<F>(&mut self, data: T, release: F) -> NodeId
    where
        F: FnOnce(T) + Send + Sync + 'static,
    {
        let id = self
            .store
            .insert(Payload::with_release(data, Box::new(release)));
        #[cfg(feature = "logging")]
        log::trace!("added node {id} with release hook");
        id
    }

    /// Deletes a node and every edge touching it.
    ///
    /// The node is first removed from the incoming list of each of its successors and from
    /// the outgoing list of each of its predecessors, decrementing the edge count once per
    /// edge. Its payload is then released and the node leaves the graph. The id is never
    /// handed out again.
    ///
    /// # Arguments
    ///
    /// * `node` - The node to delete; the handle is invalid afterwards
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidNode`] if `node` is not a live node.
    pub fn delete_node(&mut self, node: NodeId) -> Result<()> {
        let NodeEntry { payload, adjacency } =
            self.store.remove(node).ok_or(Error::InvalidNode(node))?;

        for &target in adjacency.outgoing() {
            if target != node {
                let detached = self
                    .store
                    .get_mut(target)
                    .is_some_and(|entry| entry.adjacency.remove_predecessor(node));
                debug_assert!(detached, "{target} was missing back-reference to {node}");
            }
            self.edge_count -= 1;
        }

        // A self loop was already counted through the outgoing list.
        for &source in adjacency.incoming() {
            if source != node {
                let detached = self
                    .store
                    .get_mut(source)
                    .is_some_and(|entry| entry.adjacency.remove_successor(node));
                debug_assert!(detached, "{source} was missing edge to {node}");
                self.edge_count -= 1;
            }
        }

        #[cfg(feature = "logging")]
        log::debug!(
            "deleted node {node} ({} out, {} in)",
            adjacency.outgoing().len(),
            adjacency.incoming().len()
        );

        payload.release();
        Ok(())
    }

    /// Removes every node and edge, releasing all payloads.
    ///
    /// The id counter is *not* rewound: nodes added after a reset continue the sequence,
    /// so no id is ever shared between a node from before the reset and one from after.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flowgraph::Graph;
    ///
    /// let mut graph = Graph::new();
    /// let old = graph.add_node("old");
    /// graph.reset();
    /// assert!(graph.is_empty());
    ///
    /// let new = graph.add_node("new");
    /// assert_ne!(old, new);
    /// assert_eq!(graph.node(old), None);
    /// ```
    pub fn reset(&mut self) {
        #[cfg(feature = "logging")]
        log::debug!(
            "resetting graph ({} nodes, {} edges, next id {})",
            self.store.len(),
            self.edge_count,
            self.store.next_index()
        );

        self.release_all();
    }

    fn release_all(&mut self) {
        self.edge_count = 0;
        for entry in self.store.clear() {
            entry.payload.release();
        }
    }

    /// Returns the payload of `node`, or `None` if the node does not exist.
    ///
    /// A deleted or never-allocated id is an ordinary "not found".
    #[must_use]
    pub fn node(&self, node: NodeId) -> Option<&T> {
        self.store.get(node).map(|entry| entry.payload.get())
    }

    /// Returns a mutable reference to the payload of `node`, or `None` if it does not exist.
    pub fn node_mut(&mut self, node: NodeId) -> Option<&mut T> {
        self.store.get_mut(node).map(|entry| entry.payload.get_mut())
    }

    /// Returns `true` if `node` refers to a live node of this graph.
    #[must_use]
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.store.contains(node)
    }

    /// Returns the number of live nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.store.len()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns `true` if the graph has no live nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.len() == 0
    }

    /// Returns the id the next added node will receive.
    ///
    /// This value only grows, across deletions and resets alike.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.store.next_index()
    }

    /// Returns the ids of all live nodes in creation order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.store.iter().map(|(id, _)| id)
    }

    /// Returns all live nodes with their payloads, in creation order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &T)> + '_ {
        self.store.iter().map(|(id, entry)| (id, entry.payload.get()))
    }

    /// Returns every edge, grouped by source node in creation order and by `nth` within
    /// each source.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.store.iter().flat_map(|(from, entry)| {
            entry
                .adjacency
                .outgoing()
                .iter()
                .enumerate()
                .map(move |(nth, &to)| Edge::new(from, to, nth))
        })
    }

    /// Calls `f` for every live node, in creation order.
    pub fn for_each_node<F>(&self, mut f: F)
    where
        F: FnMut(NodeId, &T),
    {
        for (id, data) in self.nodes() {
            f(id, data);
        }
    }

    /// Calls `f` for every edge, in the order produced by [`edges`](Self::edges).
    pub fn for_each_edge<F>(&self, mut f: F)
    where
        F: FnMut(Edge),
    {
        for edge in self.edges() {
            f(edge);
        }
    }

    /// Adds the edge `from -> to`, appending `to` to `from`'s outgoing list.
    ///
    /// `from` is appended to `to`'s incoming list and the edge count grows by one.
    ///
    /// # Arguments
    ///
    /// * `from` - The source node
    /// * `to` - The target node
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidNode`] if either node is not live
    /// - [`Error::SelfLoop`] if `from == to` and self loops are disabled
    /// - [`Error::DuplicateEdge`] if the edge exists and the policy is
    ///   [`DuplicateEdgePolicy::Reject`]
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) -> Result<()> {
        self.add_edge_at(from, to, usize::MAX)
    }

    /// Adds the edge `from -> to`, placing `to` at position `nth` of `from`'s outgoing list.
    ///
    /// `nth` is the index `to` will occupy afterwards; later entries shift up by one. A
    /// position past the end is clamped, so the edge is appended. `from` is always appended
    /// to `to`'s incoming list.
    ///
    /// # Arguments
    ///
    /// * `from` - The source node
    /// * `to` - The target node
    /// * `nth` - Requested position in `from`'s outgoing list
    ///
    /// # Errors
    ///
    /// Same as [`add_edge`](Self::add_edge). Under [`DuplicateEdgePolicy::Ignore`] an
    /// existing edge keeps its current position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flowgraph::Graph;
    ///
    /// let mut graph = Graph::new();
    /// let n = graph.add_node("n");
    /// let a = graph.add_node("a");
    /// let b = graph.add_node("b");
    ///
    /// graph.add_edge(n, a)?;
    /// graph.add_edge_at(n, b, 0)?;
    /// assert_eq!(graph.neighbours(n), &[b, a]);
    /// # Ok::<(), flowgraph::Error>(())
    /// ```
    pub fn add_edge_at(&mut self, from: NodeId, to: NodeId, nth: usize) -> Result<()> {
        if !self.check_new_edge(from, to)? {
            return Ok(());
        }

        let _pos = self.adjacency_mut(from)?.insert_successor(nth, to);
        self.adjacency_mut(to)?.push_predecessor(from);
        self.edge_count += 1;

        #[cfg(feature = "logging")]
        log::trace!("added edge {from} -> {to} at {_pos}");
        Ok(())
    }

    /// Validates a prospective edge. `Ok(false)` means the edge exists and should be skipped.
    fn check_new_edge(&self, from: NodeId, to: NodeId) -> Result<bool> {
        let source = self.store.get(from).ok_or(Error::InvalidNode(from))?;
        if !self.store.contains(to) {
            return Err(Error::InvalidNode(to));
        }
        if from == to && !self.config.allow_self_loops {
            #[cfg(feature = "logging")]
            log::debug!("rejected self loop on {from}");
            return Err(Error::SelfLoop(from));
        }
        if !source.adjacency.has_successor(to) {
            return Ok(true);
        }

        match self.config.duplicate_edges {
            DuplicateEdgePolicy::Reject => {
                #[cfg(feature = "logging")]
                log::debug!("rejected duplicate edge {from} -> {to}");
                Err(Error::DuplicateEdge { from, to })
            }
            DuplicateEdgePolicy::Ignore => Ok(false),
        }
    }

    /// Deletes the edge `from -> to`.
    ///
    /// The remaining entries of both adjacency lists keep their relative order.
    ///
    /// # Returns
    ///
    /// `true` if an edge was removed, `false` if there was no such edge.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidNode`] if either node is not live.
    pub fn delete_edge(&mut self, from: NodeId, to: NodeId) -> Result<bool> {
        if !self.store.contains(to) {
            return Err(Error::InvalidNode(to));
        }
        if !self.adjacency_mut(from)?.remove_successor(to) {
            return Ok(false);
        }
        self.adjacency_mut(to)?.remove_predecessor(from);
        self.edge_count -= 1;

        #[cfg(feature = "logging")]
        log::trace!("deleted edge {from} -> {to}");
        Ok(true)
    }

    /// Interposes a new node on every outgoing path of `split_me`.
    ///
    /// A node carrying `data` is created and takes over the complete outgoing list of
    /// `split_me`, in the same order. Each former successor now lists the new node, at the
    /// position `split_me` used to occupy, in its incoming list. Finally the single edge
    /// `split_me -> new` is added, so the edge count grows by exactly one.
    ///
    /// A self loop on `split_me` becomes the edge `new -> split_me`.
    ///
    /// # Arguments
    ///
    /// * `split_me` - The node whose outgoing edges move
    /// * `data` - Payload of the new node
    ///
    /// # Returns
    ///
    /// The id of the new node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidNode`] if `split_me` is not live.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flowgraph::Graph;
    ///
    /// let mut graph = Graph::new();
    /// let n = graph.add_node("n");
    /// let x = graph.add_node("x");
    /// let y = graph.add_node("y");
    /// graph.add_edge(n, x)?;
    /// graph.add_edge(n, y)?;
    ///
    /// let tail = graph.split_forward(n, "n'")?;
    /// assert_eq!(graph.neighbours(n), &[tail]);
    /// assert_eq!(graph.neighbours(tail), &[x, y]);
    /// assert_eq!(graph.edge_count(), 3);
    /// # Ok::<(), flowgraph::Error>(())
    /// ```
    pub fn split_forward(&mut self, split_me: NodeId, data: T) -> Result<NodeId> {
        self.split_forward_payload(split_me, Payload::new(data))
    }

    /// Same as [`split_forward`](Self::split_forward), with a release closure for the new
    /// node's payload.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidNode`] if `split_me` is not live.
    pub fn split_forward_with_release<F>(
        &mut self,
        split_me: NodeId,
        data: T,
        release: F,
    ) -> Result<NodeId>
    where
        F: FnOnce(T) + Send + Sync + 'static,
    {
        self.split_forward_payload(split_me, Payload::with_release(data, Box::new(release)))
    }

    fn split_forward_payload(&mut self, split_me: NodeId, payload: Payload<T>) -> Result<NodeId> {
        if !self.store.contains(split_me) {
            return Err(Error::InvalidNode(split_me));
        }

        let new = self.store.insert(payload);
        let successors = self.adjacency_mut(split_me)?.take_successors();
        for &succ in &successors {
            let replaced = self.adjacency_mut(succ)?.replace_predecessor(split_me, new);
            debug_assert!(replaced, "{succ} was missing back-reference to {split_me}");
        }

        #[cfg(feature = "logging")]
        log::debug!(
            "split {split_me} forward into {new}, moved {} successors",
            successors.len()
        );

        let tail = self.adjacency_mut(new)?;
        tail.set_successors(successors);
        tail.push_predecessor(split_me);
        self.adjacency_mut(split_me)?.insert_successor(0, new);
        self.edge_count += 1;

        Ok(new)
    }

    fn adjacency_mut(&mut self, node: NodeId) -> Result<&mut Adjacency> {
        self.store
            .get_mut(node)
            .map(|entry| &mut entry.adjacency)
            .ok_or(Error::InvalidNode(node))
    }

    /// Adjacency of a node that a query expects to be alive.
    fn live_adjacency(&self, node: NodeId) -> Option<&Adjacency> {
        let adjacency = self.store.get(node).map(|entry| &entry.adjacency);
        debug_assert!(adjacency.is_some(), "query on dead node handle {node}");
        adjacency
    }

    /// Returns the outgoing list of `node`: its successors in edge order.
    ///
    /// A dead handle yields an empty slice (and trips a debug assertion).
    #[must_use]
    pub fn neighbours(&self, node: NodeId) -> &[NodeId] {
        self.live_adjacency(node)
            .map_or(&[][..], Adjacency::outgoing)
    }

    /// Returns the incoming list of `node`: its predecessors in the order their edges
    /// were added.
    ///
    /// A dead handle yields an empty slice (and trips a debug assertion).
    #[must_use]
    pub fn in_neighbours(&self, node: NodeId) -> &[NodeId] {
        self.live_adjacency(node)
            .map_or(&[][..], Adjacency::incoming)
    }

    /// Returns the outgoing list followed by the incoming list of `node`.
    ///
    /// A node connected to `node` in both directions appears twice.
    pub fn all_neighbours(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.live_adjacency(node)
            .into_iter()
            .flat_map(|adjacency| adjacency.all())
    }

    /// Returns the successor at position `nth` of `node`'s outgoing list, if any.
    #[must_use]
    pub fn nth_neighbour(&self, node: NodeId, nth: usize) -> Option<NodeId> {
        self.neighbours(node).get(nth).copied()
    }

    /// Returns `true` if `to` is in `from`'s outgoing list.
    ///
    /// This is a linear scan over `from`'s successors.
    #[must_use]
    pub fn adjacent(&self, from: NodeId, to: NodeId) -> bool {
        self.live_adjacency(from)
            .is_some_and(|adjacency| adjacency.has_successor(to))
    }

    /// Returns the number of outgoing edges of `node`.
    #[must_use]
    pub fn out_degree(&self, node: NodeId) -> usize {
        self.neighbours(node).len()
    }

    /// Returns the number of incoming edges of `node`.
    #[must_use]
    pub fn in_degree(&self, node: NodeId) -> usize {
        self.in_neighbours(node).len()
    }

    /// Runs a depth-first search over the whole graph.
    ///
    /// See [`algorithms::dfs`].
    pub fn dfs<V: Visitor>(&self, visitor: &mut V) {
        algorithms::dfs(self, visitor);
    }

    /// Runs a depth-first search from `start`.
    ///
    /// See [`algorithms::dfs_node`].
    pub fn dfs_node<V: Visitor>(&self, start: NodeId, visitor: &mut V) {
        algorithms::dfs_node(self, start, visitor);
    }

    /// Runs a depth-first search from `start` along incoming edges.
    ///
    /// See [`algorithms::dfs_node_reverse`].
    pub fn dfs_node_reverse<V: Visitor>(&self, start: NodeId, visitor: &mut V) {
        algorithms::dfs_node_reverse(self, start, visitor);
    }
}

impl<T> Drop for Graph<T> {
    fn drop(&mut self) {
        self.release_all();
    }
}

impl<T> GraphBase for Graph<T> {
    fn node_count(&self) -> usize {
        self.store.len()
    }

    fn node_bound(&self) -> usize {
        self.store.next_index()
    }

    fn contains_node(&self, node: NodeId) -> bool {
        self.store.contains(node)
    }

    fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        self.store.iter().map(|(id, _)| id)
    }
}

impl<T> Successors for Graph<T> {
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.store
            .get(node)
            .map_or(&[][..], |entry| entry.adjacency.outgoing())
            .iter()
            .copied()
    }
}

impl<T> Predecessors for Graph<T> {
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.store
            .get(node)
            .map_or(&[][..], |entry| entry.adjacency.incoming())
            .iter()
            .copied()
    }
}
