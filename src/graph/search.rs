//! Path search between two vertices
//!
//! The iterative searches keep a frontier of whole paths. Expanding a
//! path clones it before appending the neighbor, so sibling branches
//! never share a mutable tail. The visited check happens when a path is
//! taken off the frontier, mirroring the traversal iterators.

use std::collections::{HashSet, VecDeque};

use crate::graph::directed::DirectedGraph;
use crate::graph::types::{PathResult, VertexId};

impl<V: VertexId> DirectedGraph<V> {
    /// Return the first-discovered path from `start` to `target` under
    /// breadth-first expansion. The result is shortest in edge count.
    /// `None` means `target` is unreachable (or `start` is not a vertex).
    #[tracing::instrument(skip(self))]
    pub fn breadth_first_search(&self, start: &V, target: &V) -> Option<Vec<V>> {
        if !self.contains(start) {
            return None;
        }

        let mut frontier: VecDeque<Vec<V>> = VecDeque::new();
        frontier.push_back(vec![start.clone()]);
        let mut visited: HashSet<V> = HashSet::new();

        while let Some(path) = frontier.pop_front() {
            let Some(current) = path.last().cloned() else {
                continue;
            };
            if visited.contains(&current) {
                continue;
            }
            if current == *target {
                return Some(path);
            }
            visited.insert(current.clone());

            if let Some(neighbors) = self.neighbors(&current) {
                for next in neighbors {
                    let mut next_path = path.clone();
                    next_path.push(next.clone());
                    frontier.push_back(next_path);
                }
            }
        }

        None
    }

    /// Return some path from `start` to `target` under depth-first
    /// expansion; not guaranteed shortest. `None` iff unreachable.
    #[tracing::instrument(skip(self))]
    pub fn depth_first_search(&self, start: &V, target: &V) -> Option<Vec<V>> {
        if !self.contains(start) {
            return None;
        }

        let mut frontier: Vec<Vec<V>> = vec![vec![start.clone()]];
        let mut visited: HashSet<V> = HashSet::new();

        while let Some(path) = frontier.pop() {
            let Some(current) = path.last().cloned() else {
                continue;
            };
            if visited.contains(&current) {
                continue;
            }
            if current == *target {
                return Some(path);
            }
            visited.insert(current.clone());

            if let Some(neighbors) = self.neighbors(&current) {
                for next in neighbors {
                    let mut next_path = path.clone();
                    next_path.push(next.clone());
                    frontier.push(next_path);
                }
            }
        }

        None
    }

    /// Recursive equivalent of [`DirectedGraph::depth_first_search`]:
    /// recurses into each unvisited neighbor in edge-set order and
    /// returns the first successful path, short-circuiting the rest.
    #[tracing::instrument(skip(self))]
    pub fn depth_first_search_recursive(&self, start: &V, target: &V) -> Option<Vec<V>> {
        if !self.contains(start) {
            return None;
        }
        let mut visited = HashSet::new();
        self.dfs_recurse(start, target, &mut visited, &[])
    }

    fn dfs_recurse(
        &self,
        current: &V,
        target: &V,
        visited: &mut HashSet<V>,
        path: &[V],
    ) -> Option<Vec<V>> {
        if visited.contains(current) {
            return None;
        }
        visited.insert(current.clone());

        let mut here = path.to_vec();
        here.push(current.clone());
        if current == target {
            return Some(here);
        }

        if let Some(neighbors) = self.neighbors(current) {
            for next in neighbors {
                if let Some(found) = self.dfs_recurse(next, target, visited, &here) {
                    return Some(found);
                }
            }
        }

        None
    }

    /// Breadth-first search wrapped into a serializable report
    pub fn find_path(&self, from: &V, to: &V) -> PathResult<V> {
        let path = self.breadth_first_search(from, to);
        let found = path.is_some();
        let path = path.unwrap_or_default();

        PathResult {
            from: from.clone(),
            to: to.clone(),
            found,
            path_length: path.len().saturating_sub(1),
            path,
        }
    }
}
