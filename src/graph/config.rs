//! Edge policy configuration for graph construction
//!
//! A [`Graph`](crate::Graph) never stores the same `from -> to` pair twice. What happens when
//! a caller asks for such a pair anyway, and whether a node may point at itself, is decided
//! per graph by a [`GraphConfig`].

/// What [`Graph::add_edge`](crate::Graph::add_edge) does when the edge already exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateEdgePolicy {
    /// Fail with [`Error::DuplicateEdge`](crate::Error::DuplicateEdge)
    #[default]
    Reject,
    /// Succeed without touching the graph; the existing edge keeps its position
    Ignore,
}

/// Configuration for edge insertion rules
///
/// Adjacency lists never contain a target twice, whatever the policy. The policy only
/// decides whether a repeated insertion is reported to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphConfig {
    /// Handling of an `add_edge` for a pair that is already connected
    pub duplicate_edges: DuplicateEdgePolicy,

    /// Permit edges whose source and target are the same node (default: true)
    /// Single-block loops produce these in control flow graphs
    pub allow_self_loops: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            duplicate_edges: DuplicateEdgePolicy::Reject,
            allow_self_loops: true,
        }
    }
}

impl GraphConfig {
    /// Creates a configuration that rejects both duplicate edges and self loops
    #[must_use]
    pub fn strict() -> Self {
        Self {
            duplicate_edges: DuplicateEdgePolicy::Reject,
            allow_self_loops: false,
        }
    }

    /// Creates a configuration that silently ignores duplicate edges and allows self loops
    ///
    /// Convenient for builders that discover the same edge from several places, such as
    /// a disassembler revisiting a branch target.
    #[must_use]
    pub fn permissive() -> Self {
        Self {
            duplicate_edges: DuplicateEdgePolicy::Ignore,
            allow_self_loops: true,
        }
    }
}
