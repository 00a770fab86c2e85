// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # flowgraph
//!
//! An ordered directed graph container for program analysis. `flowgraph` stores nodes with
//! owned payloads, keeps successor lists in a caller-controlled order, and classifies edges
//! during depth-first search.
//!
//! ## Features
//!
//! - **Stable identities** - [`NodeId`]s are never reused, not even after [`Graph::reset`]
//! - **Ordered successors** - branch 0 and branch 1 of a conditional stay distinguishable
//! - **Consistent adjacency** - outgoing and incoming lists are always updated together
//! - **Node splitting** - [`Graph::split_forward`] interposes a node on every outgoing path
//! - **Edge classification** - tree, back and forward/cross edges through a [`Visitor`]
//! - **Payload release hooks** - a caller-supplied destructor runs exactly once per payload
//!
//! ## Quick Start
//!
//! ```rust
//! use flowgraph::prelude::*;
//!
//! let mut cfg = Graph::new();
//! let entry = cfg.add_node("entry");
//! let cond = cfg.add_node("cond");
//! let body = cfg.add_node("body");
//! let exit = cfg.add_node("exit");
//!
//! cfg.add_edge(entry, cond)?;
//! cfg.add_edge(cond, exit)?; // branch 0: loop exit
//! cfg.add_edge(cond, body)?; // branch 1: loop body
//! cfg.add_edge(body, cond)?;
//!
//! assert_eq!(cfg.nth_neighbour(cond, 1), Some(body));
//!
//! let mut trace = DfsTrace::new();
//! cfg.dfs_node(entry, &mut trace);
//! assert_eq!(trace.kind_of(body, cond), Some(EdgeKind::Back));
//! # Ok::<(), flowgraph::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`prelude`] - Convenient re-exports of commonly used types and traits
//! - [`graph`] - The container, its configuration and the graph traits
//! - [`algorithms`] - Depth-first traversal, orderings and cycle detection
//! - [`Error`] and [`Result`] - Error handling for graph mutations
//!
//! ## Logging
//!
//! With the `logging` feature enabled, structural edits are reported through the
//! [`log`](https://docs.rs/log) facade (`trace` for insertions, `debug` for deletions,
//! splits, resets and rejected edges). The crate never installs a logger itself.
//!
//! ## Thread Safety
//!
//! The container has no internal synchronization. It is [`Send`] and [`Sync`] when its
//! payload type is; concurrent readers are fine, writers must be serialized by the caller.

pub mod prelude;

pub mod graph;

mod error;

pub use graph::algorithms;

/// `flowgraph` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `flowgraph` Error type
///
/// The main error type for all fallible graph mutations. See [`Error`] for the variants.
pub use error::Error;

pub use graph::{
    DuplicateEdgePolicy, Edge, EdgeKind, Graph, GraphBase, GraphConfig, NodeId, NodeInfo,
    Predecessors, ReleaseFn, Reversed, Successors, Visitor,
};
