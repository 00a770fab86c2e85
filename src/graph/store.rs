//! Arena storage for graph nodes.
//!
//! Nodes live in a vector of optional slots. A node's slot is found from its id as
//! `id - base`, where `base` is the id counter's value at the most recent clear. Deleting a
//! node empties its slot in place, so lookups stay O(1) and iterating the vector in order
//! yields live nodes in creation order.
//!
//! The id counter (`next`) only ever grows. Clearing the store drops every slot and moves
//! `base` up to `next`, so ids handed out before the clear can never alias ids handed out
//! after it.

use crate::graph::{adjacency::Adjacency, payload::Payload, NodeId};

/// A live node: its payload and its adjacency lists.
#[derive(Debug)]
pub(crate) struct NodeEntry<T> {
    pub(crate) payload: Payload<T>,
    pub(crate) adjacency: Adjacency,
}

#[derive(Debug)]
pub(crate) struct NodeStore<T> {
    slots: Vec<Option<NodeEntry<T>>>,
    base: usize,
    next: usize,
    live: usize,
}

impl<T> Default for NodeStore<T> {
    fn default() -> Self {
        NodeStore {
            slots: Vec::new(),
            base: 0,
            next: 0,
            live: 0,
        }
    }
}

impl<T> NodeStore<T> {
    fn slot(&self, id: NodeId) -> Option<usize> {
        id.index().checked_sub(self.base)
    }

    pub(crate) fn insert(&mut self, payload: Payload<T>) -> NodeId {
        let id = NodeId::new(self.next);
        self.next += 1;
        self.slots.push(Some(NodeEntry {
            payload,
            adjacency: Adjacency::default(),
        }));
        self.live += 1;
        id
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&NodeEntry<T>> {
        self.slots.get(self.slot(id)?)?.as_ref()
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut NodeEntry<T>> {
        let slot = self.slot(id)?;
        self.slots.get_mut(slot)?.as_mut()
    }

    pub(crate) fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    pub(crate) fn remove(&mut self, id: NodeId) -> Option<NodeEntry<T>> {
        let slot = self.slot(id)?;
        let entry = self.slots.get_mut(slot)?.take()?;
        self.live -= 1;
        Some(entry)
    }

    /// Empties the store and returns the removed entries in creation order.
    /// The id counter keeps its value.
    pub(crate) fn clear(&mut self) -> Vec<NodeEntry<T>> {
        self.base = self.next;
        self.live = 0;
        std::mem::take(&mut self.slots).into_iter().flatten().collect()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (NodeId, &NodeEntry<T>)> + '_ {
        let base = self.base;
        self.slots
            .iter()
            .enumerate()
            .filter_map(move |(i, slot)| slot.as_ref().map(|e| (NodeId::new(base + i), e)))
    }

    pub(crate) fn len(&self) -> usize {
        self.live
    }

    /// The id the next insertion will receive.
    pub(crate) fn next_index(&self) -> usize {
        self.next
    }
}
