//! Per-node ordered adjacency lists.
//!
//! Every node carries an ordered outgoing list and an ordered incoming list of node ids.
//! The combined neighbour view is derived on demand (outgoing first, then incoming) instead
//! of being stored, so there is no third list to keep in step.
//!
//! This type only edits the lists of a single node. Keeping the lists of *two* nodes
//! consistent (an `a -> b` edge lives in `a.outgoing` and in `b.incoming`) is the job of
//! [`Graph`](crate::Graph), which always pairs the calls.

use crate::graph::NodeId;

#[derive(Debug, Clone, Default)]
pub(crate) struct Adjacency {
    outgoing: Vec<NodeId>,
    incoming: Vec<NodeId>,
}

impl Adjacency {
    pub(crate) fn outgoing(&self) -> &[NodeId] {
        &self.outgoing
    }

    pub(crate) fn incoming(&self) -> &[NodeId] {
        &self.incoming
    }

    pub(crate) fn all(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.outgoing.iter().chain(self.incoming.iter()).copied()
    }

    pub(crate) fn has_successor(&self, node: NodeId) -> bool {
        self.outgoing.contains(&node)
    }

    /// Inserts `node` at `nth` in the outgoing list, clamped to the end.
    /// Returns the position actually used.
    pub(crate) fn insert_successor(&mut self, nth: usize, node: NodeId) -> usize {
        let pos = nth.min(self.outgoing.len());
        self.outgoing.insert(pos, node);
        pos
    }

    pub(crate) fn push_predecessor(&mut self, node: NodeId) {
        self.incoming.push(node);
    }

    /// Removes `node` from the outgoing list, preserving the order of the rest.
    pub(crate) fn remove_successor(&mut self, node: NodeId) -> bool {
        remove_first(&mut self.outgoing, node)
    }

    /// Removes `node` from the incoming list, preserving the order of the rest.
    pub(crate) fn remove_predecessor(&mut self, node: NodeId) -> bool {
        remove_first(&mut self.incoming, node)
    }

    /// Replaces `old` by `new` in the incoming list without moving it.
    pub(crate) fn replace_predecessor(&mut self, old: NodeId, new: NodeId) -> bool {
        match self.incoming.iter_mut().find(|n| **n == old) {
            Some(slot) => {
                *slot = new;
                true
            }
            None => false,
        }
    }

    pub(crate) fn take_successors(&mut self) -> Vec<NodeId> {
        std::mem::take(&mut self.outgoing)
    }

    pub(crate) fn set_successors(&mut self, successors: Vec<NodeId>) {
        debug_assert!(self.outgoing.is_empty());
        self.outgoing = successors;
    }
}

fn remove_first(list: &mut Vec<NodeId>, node: NodeId) -> bool {
    match list.iter().position(|n| *n == node) {
        Some(pos) => {
            list.remove(pos);
            true
        }
        None => false,
    }
}
