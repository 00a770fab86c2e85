//! Ready-made node payload for labelled blocks.
//!
//! Many graph consumers only need to attach a title, a free-form body and an address to
//! each node (basic blocks, functions, call sites). [`NodeInfo`] is that payload, and
//! [`Graph::add_node_info`] builds the node in one step.

use std::fmt;

use crate::graph::{Graph, NodeId};

/// A `title` / `body` / `offset` triple describing a node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NodeInfo {
    /// Short label, such as a block or function name
    pub title: String,
    /// Longer description, such as the disassembly of a block
    pub body: String,
    /// Address or file offset the node corresponds to
    pub offset: u64,
}

impl NodeInfo {
    /// Creates a new `NodeInfo`.
    ///
    /// # Arguments
    ///
    /// * `title` - Short label
    /// * `body` - Longer description
    /// * `offset` - Address or file offset
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<String>, offset: u64) -> Self {
        NodeInfo {
            title: title.into(),
            body: body.into(),
            offset,
        }
    }
}

impl fmt::Display for NodeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ 0x{:x}", self.title, self.offset)
    }
}

impl Graph<NodeInfo> {
    /// Adds a node carrying a [`NodeInfo`] built from the given parts.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flowgraph::{Graph, NodeInfo};
    ///
    /// let mut graph: Graph<NodeInfo> = Graph::new();
    /// let entry = graph.add_node_info("entry", "push rbp", 0x401000);
    ///
    /// let info = graph.node(entry).unwrap();
    /// assert_eq!(info.offset, 0x401000);
    /// assert_eq!(info.to_string(), "entry @ 0x401000");
    /// ```
    pub fn add_node_info(
        &mut self,
        title: impl Into<String>,
        body: impl Into<String>,
        offset: u64,
    ) -> NodeId {
        self.add_node(NodeInfo::new(title, body, offset))
    }
}
