//! Depth-first and breadth-first traversal
//!
//! Both walks take an optional start vertex (defaulting to the earliest
//! inserted one) and a visitor called once per reached vertex. The `_until`
//! variants let the visitor stop the walk early by returning
//! `ControlFlow::Break`.

use std::collections::HashSet;
use std::ops::ControlFlow;

use crate::collections::{BoundedQueue, BoundedStack};
use crate::error::Result;
use crate::graph::adjacency::Graph;
use crate::graph::types::{Vertex, VertexId};

impl<T> Graph<T> {
    fn resolve_start(&self, start: Option<VertexId>) -> Result<Option<VertexId>> {
        match start {
            Some(id) => {
                self.check(id)?;
                Ok(Some(id))
            }
            None => Ok(self.first_vertex()),
        }
    }

    pub fn depth_first<F>(&self, start: Option<VertexId>, mut visitor: F) -> Result<()>
    where
        F: FnMut(&Vertex<T>),
    {
        self.depth_first_until(start, |vertex| {
            visitor(vertex);
            ControlFlow::Continue(())
        })
    }

    /// Preorder depth-first walk over an explicit stack of
    /// `(vertex, next edge index)` frames
    #[tracing::instrument(level = "debug", skip(self, visitor))]
    pub fn depth_first_until<F>(&self, start: Option<VertexId>, mut visitor: F) -> Result<()>
    where
        F: FnMut(&Vertex<T>) -> ControlFlow<()>,
    {
        let Some(start) = self.resolve_start(start)? else {
            return Ok(());
        };
        let Some(root) = self.vertex(start) else {
            return Ok(());
        };

        let mut visited = HashSet::from([start]);
        if visitor(root).is_break() {
            return Ok(());
        }

        let mut frames: BoundedStack<(VertexId, usize)> = BoundedStack::unbounded();
        frames.push((start, 0))?;

        while let Some(frame) = frames.peek_mut() {
            let (current, next_edge) = *frame;
            frame.1 += 1;

            let Some(edge) = self
                .vertex(current)
                .and_then(|vertex| vertex.edges().get(next_edge))
            else {
                frames.pop();
                continue;
            };

            let neighbour = edge.end();
            if !visited.insert(neighbour) {
                continue;
            }
            if let Some(vertex) = self.vertex(neighbour) {
                if visitor(vertex).is_break() {
                    break;
                }
                frames.push((neighbour, 0))?;
            }
        }

        tracing::debug!(visited = visited.len(), "depth_first");
        Ok(())
    }

    pub fn breadth_first<F>(&self, start: Option<VertexId>, mut visitor: F) -> Result<()>
    where
        F: FnMut(&Vertex<T>),
    {
        self.breadth_first_until(start, |vertex| {
            visitor(vertex);
            ControlFlow::Continue(())
        })
    }

    /// Layer-order walk; neighbours are marked visited when enqueued
    #[tracing::instrument(level = "debug", skip(self, visitor))]
    pub fn breadth_first_until<F>(&self, start: Option<VertexId>, mut visitor: F) -> Result<()>
    where
        F: FnMut(&Vertex<T>) -> ControlFlow<()>,
    {
        let Some(start) = self.resolve_start(start)? else {
            return Ok(());
        };

        let mut visited = HashSet::from([start]);
        let mut queue = BoundedQueue::unbounded();
        queue.enqueue(start)?;

        while let Some(current) = queue.dequeue() {
            let Some(vertex) = self.vertex(current) else {
                continue;
            };
            if visitor(vertex).is_break() {
                break;
            }
            for edge in vertex.edges() {
                if visited.insert(edge.end()) {
                    queue.enqueue(edge.end())?;
                }
            }
        }

        tracing::debug!(visited = visited.len(), "breadth_first");
        Ok(())
    }

    /// Vertex ids in depth-first preorder
    pub fn dfs_order(&self, start: Option<VertexId>) -> Result<Vec<VertexId>> {
        let mut order = Vec::new();
        self.depth_first(start, |vertex| order.push(vertex.id()))?;
        Ok(order)
    }

    /// Vertex ids in breadth-first order
    pub fn bfs_order(&self, start: Option<VertexId>) -> Result<Vec<VertexId>> {
        let mut order = Vec::new();
        self.breadth_first(start, |vertex| order.push(vertex.id()))?;
        Ok(order)
    }
}
