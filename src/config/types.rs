//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Top-level trellis configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrellisConfig {
    /// Default limits for bounded traversal
    #[serde(default)]
    pub traversal: TraversalConfig,
}

/// Limits applied to bounded traversal when none are given explicitly.
/// Absent fields mean unlimited.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TraversalConfig {
    /// Maximum traversal depth in hops from the root
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,

    /// Maximum vertices to visit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_nodes: Option<usize>,

    /// Maximum neighbors expanded per vertex
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_fanout: Option<usize>,
}
