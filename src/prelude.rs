//! # flowgraph Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! of the flowgraph library.
//!
//! ```rust
//! use flowgraph::prelude::*;
//!
//! let mut graph: Graph<NodeInfo> = Graph::new();
//! let entry = graph.add_node_info("entry", "", 0x1000);
//! assert!(graph.contains_node(entry));
//! ```

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all flowgraph operations
pub use crate::Error;

/// The result type used throughout flowgraph
pub use crate::Result;

/// Edge insertion rules
pub use crate::graph::{DuplicateEdgePolicy, GraphConfig};

// ================================================================================================
// Graph Container
// ================================================================================================

/// The ordered directed graph container
pub use crate::graph::Graph;

/// Stable node handle
pub use crate::graph::NodeId;

/// Derived edge view and depth-first edge classes
pub use crate::graph::{Edge, EdgeKind};

/// Title / body / offset node payload
pub use crate::graph::NodeInfo;

// ================================================================================================
// Traversal
// ================================================================================================

/// Graph abstraction traits used by the algorithms
pub use crate::graph::{GraphBase, Predecessors, Reversed, Successors};

/// Depth-first search callbacks and the recording visitor
pub use crate::graph::algorithms::{DfsTrace, Visitor};
