//! Ordered directed graph infrastructure for program analysis.
//!
//! This module provides the graph container and its traversal engine. The container is
//! built for analyses that construct and edit graphs incrementally, such as control flow
//! graph recovery, where node identity must survive edits and successor order carries
//! meaning.
//!
//! # Architecture
//!
//! - **Node storage**: an arena of slots addressed by [`NodeId`]. Ids come from a counter
//!   that never goes backwards, so an id is never reused, even after
//!   [`Graph::reset`]
//! - **Adjacency**: each node keeps an ordered outgoing list and an ordered incoming list;
//!   every mutation updates both ends of an edge together
//! - **Graph**: [`Graph`] composes the two and exposes node/edge editing, neighbour queries
//!   and [`Graph::split_forward`]
//! - **Traversal**: [`algorithms`] runs depth-first searches over anything implementing
//!   [`Successors`], reporting events and edge classes to a [`Visitor`]
//!
//! # Design Principles
//!
//! ## Edges Are Ids, Not Owners
//!
//! Edges are stored as node ids inside adjacency lists. Only the graph owns nodes, so a
//! cyclic graph never forms an ownership cycle and deleting a node is a plain removal.
//!
//! ## Order Is Data
//!
//! The position of a target in its source's outgoing list is part of the graph. It is
//! exposed as [`Edge::nth`] and can be chosen explicitly with [`Graph::add_edge_at`].
//!
//! # Usage Examples
//!
//! ```rust
//! use flowgraph::{algorithms::DfsTrace, EdgeKind, Graph};
//!
//! // A loop: entry -> head -> body -> head, head -> exit
//! let mut graph = Graph::new();
//! let entry = graph.add_node("entry");
//! let head = graph.add_node("head");
//! let body = graph.add_node("body");
//! let exit = graph.add_node("exit");
//! graph.add_edge(entry, head)?;
//! graph.add_edge(head, body)?;
//! graph.add_edge(head, exit)?;
//! graph.add_edge(body, head)?;
//!
//! // Give the loop a dedicated preheader.
//! let preheader = graph.split_forward(entry, "preheader")?;
//! assert_eq!(graph.neighbours(preheader), &[head]);
//!
//! let mut trace = DfsTrace::new();
//! graph.dfs_node(entry, &mut trace);
//! assert_eq!(trace.kind_of(body, head), Some(EdgeKind::Back));
//! # Ok::<(), flowgraph::Error>(())
//! ```

mod adjacency;
mod config;
mod directed;
mod edge;
mod info;
mod node;
mod payload;
mod store;
mod traits;

pub mod algorithms;

pub use algorithms::Visitor;
pub use config::{DuplicateEdgePolicy, GraphConfig};
pub use directed::Graph;
pub use edge::{Edge, EdgeKind};
pub use info::NodeInfo;
pub use node::NodeId;
pub use payload::ReleaseFn;
pub use traits::{GraphBase, Predecessors, Reversed, Successors};
