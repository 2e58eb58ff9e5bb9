//! Path reconstruction utilities for shortest-path results

use std::collections::HashMap;

use crate::graph::types::VertexId;

/// Walk the predecessor chain back from `target` to `start`.
///
/// Returns the path in travel order (`start` first), or `None` when the chain
/// breaks before reaching `start`.
pub fn reconstruct_path(
    start: VertexId,
    target: VertexId,
    predecessors: &HashMap<VertexId, Option<VertexId>>,
) -> Option<Vec<VertexId>> {
    let mut path = vec![target];
    let mut current = target;

    while current != start {
        let previous = predecessors.get(&current).copied().flatten()?;
        path.push(previous);
        current = previous;
    }

    path.reverse();
    Some(path)
}
