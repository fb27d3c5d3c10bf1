//! Directed graph storage and mutation

use std::collections::{HashMap, HashSet};

use crate::error::{Result, TrellisError};
use crate::graph::types::VertexId;

/// A directed graph stored as a mapping from vertex identifier to the
/// set of identifiers its outgoing edges point at.
///
/// Vertices and edges are only ever added; there is no removal. The
/// graph is process-local and traversals borrow it immutably, so it
/// cannot be mutated while a traversal iterator is live.
#[derive(Debug, Clone)]
pub struct DirectedGraph<V: VertexId> {
    vertices: HashMap<V, HashSet<V>>,
}

impl<V: VertexId> DirectedGraph<V> {
    /// Create an empty graph
    pub fn new() -> Self {
        DirectedGraph {
            vertices: HashMap::new(),
        }
    }

    /// Add a vertex with an empty outgoing-edge set.
    ///
    /// Re-adding an existing vertex resets its edge set to empty; callers
    /// that want idempotent insertion should check `contains` first.
    pub fn add_vertex(&mut self, id: V) {
        self.vertices.insert(id, HashSet::new());
    }

    /// Add a directed edge from `from` to `to`.
    ///
    /// Both endpoints must already be vertices; otherwise the graph is
    /// left untouched and `TrellisError::VertexNotFound` is returned.
    pub fn add_edge(&mut self, from: &V, to: &V) -> Result<()> {
        if !self.vertices.contains_key(to) {
            return Err(TrellisError::vertex_not_found(to));
        }
        match self.vertices.get_mut(from) {
            Some(edges) => {
                edges.insert(to.clone());
                Ok(())
            }
            None => Err(TrellisError::vertex_not_found(from)),
        }
    }

    /// Get the outgoing-edge set of a vertex.
    ///
    /// `None` means the vertex does not exist; a vertex with no outgoing
    /// edges yields `Some` of an empty set.
    pub fn neighbors(&self, id: &V) -> Option<&HashSet<V>> {
        self.vertices.get(id)
    }

    /// Whether `id` is a vertex of the graph
    pub fn contains(&self, id: &V) -> bool {
        self.vertices.contains_key(id)
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the graph has no vertices
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterate over all vertex identifiers in no particular order
    pub fn vertex_ids(&self) -> impl Iterator<Item = &V> {
        self.vertices.keys()
    }
}

impl<V: VertexId> Default for DirectedGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_vertex_and_neighbors() {
        let mut graph = DirectedGraph::new();
        graph.add_vertex(1);
        graph.add_vertex(2);
        graph.add_edge(&1, &2).unwrap();

        let neighbors = graph.neighbors(&1).unwrap();
        assert_eq!(neighbors.len(), 1);
        assert!(neighbors.contains(&2));

        // No outgoing edges is distinguishable from no such vertex
        assert!(graph.neighbors(&2).unwrap().is_empty());
        assert!(graph.neighbors(&3).is_none());
    }

    #[test]
    fn test_add_edge_is_directed() {
        let mut graph = DirectedGraph::new();
        graph.add_vertex("a");
        graph.add_vertex("b");
        graph.add_edge(&"a", &"b").unwrap();

        assert!(graph.neighbors(&"a").unwrap().contains(&"b"));
        assert!(!graph.neighbors(&"b").unwrap().contains(&"a"));
    }

    #[test]
    fn test_add_edge_missing_endpoint_does_not_mutate() {
        let mut graph = DirectedGraph::new();
        graph.add_vertex(1);

        let err = graph.add_edge(&1, &9).unwrap_err();
        assert!(matches!(err, TrellisError::VertexNotFound { .. }));
        let err = graph.add_edge(&9, &1).unwrap_err();
        assert!(matches!(err, TrellisError::VertexNotFound { .. }));

        assert_eq!(graph.vertex_count(), 1);
        assert!(graph.neighbors(&1).unwrap().is_empty());
        assert!(!graph.contains(&9));
    }

    #[test]
    fn test_re_adding_vertex_clears_edges() {
        let mut graph = DirectedGraph::new();
        graph.add_vertex(1);
        graph.add_vertex(2);
        graph.add_edge(&1, &2).unwrap();

        graph.add_vertex(1);
        assert!(graph.neighbors(&1).unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_edge_is_a_set_insert() {
        let mut graph = DirectedGraph::new();
        graph.add_vertex(1);
        graph.add_vertex(2);
        graph.add_edge(&1, &2).unwrap();
        graph.add_edge(&1, &2).unwrap();

        assert_eq!(graph.neighbors(&1).unwrap().len(), 1);
    }

    #[test]
    fn test_vertex_ids_and_counts() {
        let mut graph = DirectedGraph::new();
        assert!(graph.is_empty());

        graph.add_vertex(1);
        graph.add_vertex(2);
        graph.add_vertex(3);

        let mut ids: Vec<i32> = graph.vertex_ids().copied().collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(graph.vertex_count(), 3);
    }
}
