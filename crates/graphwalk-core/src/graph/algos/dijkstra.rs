use std::collections::HashMap;

use crate::error::{GraphError, Result};
use crate::graph::adjacency::Graph;
use crate::graph::algos::path::reconstruct_path;
use crate::graph::types::VertexId;
use crate::heap::{PriorityQueue, Prioritized};

/// Distances and predecessors produced by [`dijkstra`]
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    start: VertexId,
    distances: HashMap<VertexId, f64>,
    predecessors: HashMap<VertexId, Option<VertexId>>,
}

impl ShortestPaths {
    pub fn start(&self) -> VertexId {
        self.start
    }

    /// Best known distance; `f64::INFINITY` when unreachable, `None` for
    /// vertices that were not in the graph
    pub fn distance(&self, id: VertexId) -> Option<f64> {
        self.distances.get(&id).copied()
    }

    /// Previous vertex on the shortest path to `id`
    pub fn predecessor(&self, id: VertexId) -> Option<VertexId> {
        self.predecessors.get(&id).copied().flatten()
    }

    pub fn is_reachable(&self, id: VertexId) -> bool {
        self.distance(id).is_some_and(f64::is_finite)
    }

    /// Vertices from the start to `id` inclusive, or `None` if unreachable
    pub fn path_to(&self, id: VertexId) -> Option<Vec<VertexId>> {
        if !self.is_reachable(id) {
            return None;
        }
        reconstruct_path(self.start, id, &self.predecessors)
    }

    pub fn distances(&self) -> &HashMap<VertexId, f64> {
        &self.distances
    }

    pub fn predecessors(&self) -> &HashMap<VertexId, Option<VertexId>> {
        &self.predecessors
    }

    /// Reachable vertices with their distances, nearest first
    pub fn reachable(&self) -> Vec<(VertexId, f64)> {
        let mut reached: Vec<(VertexId, f64)> = self
            .distances
            .iter()
            .filter(|(_, distance)| distance.is_finite())
            .map(|(id, distance)| (*id, *distance))
            .collect();
        reached.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        reached
    }
}

/// Single-source shortest paths from `start` (default: the first vertex).
///
/// The priority queue has no decrease-key: improved distances push a fresh
/// entry and entries whose priority exceeds the recorded distance are skipped
/// when popped. Edge weights are non-negative by construction.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn dijkstra<T>(graph: &Graph<T>, start: Option<VertexId>) -> Result<ShortestPaths> {
    let start = match start {
        Some(id) => {
            graph.check(id)?;
            id
        }
        None => graph
            .first_vertex()
            .ok_or_else(|| GraphError::not_found("start vertex", "graph is empty"))?,
    };

    let mut distances: HashMap<VertexId, f64> = graph
        .vertex_ids()
        .map(|id| (id, f64::INFINITY))
        .collect();
    let mut predecessors: HashMap<VertexId, Option<VertexId>> =
        graph.vertex_ids().map(|id| (id, None)).collect();
    distances.insert(start, 0.0);

    let mut queue = PriorityQueue::new();
    queue.add(start, 0.0);

    let mut settled = 0usize;
    let mut stale = 0usize;

    while let Some(Prioritized {
        item: current,
        priority,
    }) = queue.pop_min()
    {
        let best = distances.get(&current).copied().unwrap_or(f64::INFINITY);
        if priority > best {
            stale += 1;
            continue;
        }
        settled += 1;

        let Some(vertex) = graph.vertex(current) else {
            continue;
        };

        for edge in vertex.edges() {
            // Saturate so huge finite weights never read as unreachable
            let candidate = (best + edge.weight().value()).min(f64::MAX);
            let neighbour = edge.end();
            let known = distances.entry(neighbour).or_insert(f64::INFINITY);
            if candidate < *known {
                *known = candidate;
                predecessors.insert(neighbour, Some(current));
                queue.add(neighbour, candidate);
            }
        }
    }

    tracing::debug!(settled, stale, "dijkstra");

    Ok(ShortestPaths {
        start,
        distances,
        predecessors,
    })
}

impl<T> Graph<T> {
    /// Shortest paths from `start`; see [`dijkstra`]
    pub fn dijkstra(&self, start: Option<VertexId>) -> Result<ShortestPaths> {
        dijkstra(self, start)
    }
}

#[cfg(test)]
mod tests;
