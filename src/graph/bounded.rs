//! Bounded breadth-first traversal with limit reporting
//!
//! Unlike the lazy iterators, the bounded walk runs to completion and
//! reports whether any limit cut it short. Neighbors are expanded in
//! sorted order so the report is deterministic for a given graph.

use std::collections::{HashSet, VecDeque};

use crate::graph::directed::DirectedGraph;
use crate::graph::types::{TraversalOptions, TraversalReport, VertexId};

/// State tracked during a bounded walk
struct WalkState<V> {
    visited: HashSet<V>,
    frontier: VecDeque<(V, usize)>,
    order: Vec<V>,
    truncated: bool,
    truncation_reason: Option<String>,
}

impl<V: VertexId> WalkState<V> {
    fn new() -> Self {
        Self {
            visited: HashSet::new(),
            frontier: VecDeque::new(),
            order: Vec::new(),
            truncated: false,
            truncation_reason: None,
        }
    }

    /// Record a truncation, keeping the first reason seen
    fn mark_truncated(&mut self, reason: &str) {
        self.truncated = true;
        if self.truncation_reason.is_none() {
            self.truncation_reason = Some(reason.to_string());
        }
    }
}

impl<V: VertexId> DirectedGraph<V> {
    /// Breadth-first walk from `start` honoring the limits in `opts`.
    ///
    /// A missing start vertex produces an empty, untruncated report with
    /// an explanatory reason.
    #[tracing::instrument(skip(self))]
    pub fn traverse(&self, start: &V, opts: &TraversalOptions) -> TraversalReport<V> {
        if !self.contains(start) {
            return TraversalReport {
                root: start.clone(),
                order: Vec::new(),
                truncated: false,
                truncation_reason: Some("start vertex not present".to_string()),
            };
        }

        let mut state = WalkState::new();
        state.visited.insert(start.clone());
        state.order.push(start.clone());
        state.frontier.push_back((start.clone(), 0));

        while let Some((current, depth)) = state.frontier.pop_front() {
            if let Some(max_depth) = opts.max_depth {
                if depth >= max_depth {
                    if self.has_unvisited_neighbors(&current, &state.visited) {
                        state.mark_truncated("max_depth");
                    }
                    continue;
                }
            }

            let Some(neighbors) = self.neighbors(&current) else {
                continue;
            };
            let mut neighbors: Vec<&V> = neighbors.iter().collect();
            neighbors.sort();

            if let Some(max_fanout) = opts.max_fanout {
                if neighbors.len() > max_fanout {
                    state.mark_truncated("max_fanout");
                    neighbors.truncate(max_fanout);
                }
            }

            for next in neighbors {
                if state.visited.contains(next) {
                    continue;
                }
                if let Some(max_nodes) = opts.max_nodes {
                    if state.visited.len() >= max_nodes {
                        state.mark_truncated("max_nodes");
                        break;
                    }
                }
                state.visited.insert(next.clone());
                state.order.push(next.clone());
                state.frontier.push_back((next.clone(), depth + 1));
            }
        }

        tracing::debug!(
            visited = state.order.len(),
            truncated = state.truncated,
            "bounded traversal complete"
        );

        TraversalReport {
            root: start.clone(),
            order: state.order,
            truncated: state.truncated,
            truncation_reason: state.truncation_reason,
        }
    }

    fn has_unvisited_neighbors(&self, id: &V, visited: &HashSet<V>) -> bool {
        self.neighbors(id)
            .is_some_and(|n| n.iter().any(|v| !visited.contains(v)))
    }
}
