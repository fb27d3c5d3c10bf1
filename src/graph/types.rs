//! Shared types for graph operations

use std::fmt::Debug;
use std::hash::Hash;

use serde::Serialize;

/// Bounds required of a vertex identifier: a comparable, hashable,
/// cloneable value. Implemented automatically for every qualifying type.
pub trait VertexId: Clone + Debug + Eq + Hash + Ord {}

impl<T: Clone + Debug + Eq + Hash + Ord> VertexId for T {}

/// Limits for bounded traversal. `None` means unlimited.
#[derive(Debug, Clone, Default)]
pub struct TraversalOptions {
    /// Maximum traversal depth in hops from the root
    pub max_depth: Option<usize>,
    /// Maximum vertices to visit (the root counts)
    pub max_nodes: Option<usize>,
    /// Maximum neighbors expanded per vertex
    pub max_fanout: Option<usize>,
}

/// Result of a bounded traversal
#[derive(Debug, Clone, Serialize)]
pub struct TraversalReport<V: VertexId> {
    pub root: V,
    /// Vertices in visit order, root first
    pub order: Vec<V>,
    pub truncated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncation_reason: Option<String>,
}

/// Path search result
#[derive(Debug, Clone, Serialize)]
pub struct PathResult<V: VertexId> {
    pub from: V,
    pub to: V,
    pub found: bool,
    /// Vertices along the discovered route, empty when not found
    pub path: Vec<V>,
    /// Edge count of the route
    pub path_length: usize,
}
