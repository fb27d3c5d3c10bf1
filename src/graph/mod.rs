//! Graph construction, traversal and path-finding operations
//!
//! Provides the directed-graph core:
//! - `DirectedGraph` adjacency storage and mutation
//! - Breadth-first and depth-first traversal, iterative and recursive
//! - Path search between two vertices
//! - Bounded traversal with node/depth/fanout limits

pub mod bounded;
pub mod directed;
pub mod search;
pub mod traversal;
pub mod types;

pub use directed::DirectedGraph;
pub use traversal::{BreadthFirst, DepthFirst};
pub use types::{PathResult, TraversalOptions, TraversalReport, VertexId};
