use std::fmt;

use crate::bail_invalid;
use crate::error::{GraphError, Result};
use crate::graph::types::{Edge, GraphId, GraphOptions, Vertex, VertexId, Weight};

/// Adjacency-list graph.
///
/// Vertices live in insertion-ordered slots; each vertex owns its outgoing
/// edges. Handles returned by [`Graph::add_vertex`] are only accepted by the
/// graph that issued them.
#[derive(Debug)]
pub struct Graph<T> {
    id: GraphId,
    slots: Vec<Option<Vertex<T>>>,
    live: usize,
    options: GraphOptions,
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new(GraphOptions::default())
    }
}

impl<T> Graph<T> {
    pub fn new(options: GraphOptions) -> Self {
        Graph {
            id: GraphId::next(),
            slots: Vec::new(),
            live: 0,
            options,
        }
    }

    pub fn options(&self) -> GraphOptions {
        self.options
    }

    pub fn is_weighted(&self) -> bool {
        self.options.weighted
    }

    pub fn is_directed(&self) -> bool {
        self.options.directed
    }

    pub fn vertex_count(&self) -> usize {
        self.live
    }

    /// Number of stored edges; undirected connections count once per side
    pub fn edge_count(&self) -> usize {
        self.vertices().map(Vertex::degree).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Whether `id` names a live vertex of this graph
    pub fn contains(&self, id: VertexId) -> bool {
        self.vertex(id).is_some()
    }

    pub(crate) fn check(&self, id: VertexId) -> Result<()> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(GraphError::foreign_vertex(id))
        }
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<T>> {
        if !id.belongs_to(self.id) {
            return None;
        }
        self.slots.get(id.slot()).and_then(Option::as_ref)
    }

    fn vertex_mut(&mut self, id: VertexId) -> Option<&mut Vertex<T>> {
        if !id.belongs_to(self.id) {
            return None;
        }
        self.slots.get_mut(id.slot()).and_then(Option::as_mut)
    }

    pub fn data(&self, id: VertexId) -> Option<&T> {
        self.vertex(id).map(Vertex::data)
    }

    pub fn edges(&self, id: VertexId) -> Option<&[Edge]> {
        self.vertex(id).map(Vertex::edges)
    }

    /// Live vertices in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<T>> {
        self.slots.iter().filter_map(Option::as_ref)
    }

    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices().map(Vertex::id)
    }

    /// Earliest inserted vertex still in the graph
    pub fn first_vertex(&self) -> Option<VertexId> {
        self.vertex_ids().next()
    }

    pub fn add_vertex(&mut self, data: T) -> VertexId {
        let id = VertexId::new(self.id, self.slots.len());
        self.slots.push(Some(Vertex {
            id,
            data,
            edges: Vec::new(),
        }));
        self.live += 1;
        id
    }

    /// Remove a vertex and every edge that ends at it, returning its payload
    pub fn remove_vertex(&mut self, id: VertexId) -> Result<T> {
        self.check(id)?;
        let removed = self.slots[id.slot()]
            .take()
            .ok_or_else(|| GraphError::foreign_vertex(id))?;
        self.live -= 1;

        let mut stripped = 0;
        for vertex in self.slots.iter_mut().flatten() {
            let before = vertex.edges.len();
            vertex.edges.retain(|edge| edge.end != id);
            stripped += before - vertex.edges.len();
        }
        tracing::trace!(vertex = %id, stripped, "remove_vertex");

        Ok(removed.data)
    }

    /// Connect `from` to `to`.
    ///
    /// Unweighted graphs store weight 1 whatever is passed. Undirected graphs
    /// also store the reverse edge. Nothing is mutated on error.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: f64) -> Result<()> {
        self.check(from)?;
        self.check(to)?;

        let weight = if self.options.weighted {
            if !Weight::is_valid(weight) {
                bail_invalid!("edge weight", weight);
            }
            Weight::new(weight)
        } else {
            Weight::DEFAULT
        };

        self.push_edge(from, to, weight);
        if !self.options.directed {
            self.push_edge(to, from, weight);
        }
        Ok(())
    }

    fn push_edge(&mut self, start: VertexId, end: VertexId, weight: Weight) {
        if let Some(vertex) = self.vertex_mut(start) {
            vertex.edges.push(Edge { start, end, weight });
        }
    }

    /// Remove every edge from `from` to `to` (and the mirror when undirected).
    /// Removing an edge that does not exist is a no-op.
    pub fn remove_edge(&mut self, from: VertexId, to: VertexId) -> Result<()> {
        self.check(from)?;
        self.check(to)?;

        self.strip_edges(from, to);
        if !self.options.directed {
            self.strip_edges(to, from);
        }
        Ok(())
    }

    fn strip_edges(&mut self, start: VertexId, end: VertexId) {
        if let Some(vertex) = self.vertex_mut(start) {
            vertex.edges.retain(|edge| edge.end != end);
        }
    }

    pub fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.edge_weight(from, to).is_some()
    }

    /// Weight of the first edge from `from` to `to`
    pub fn edge_weight(&self, from: VertexId, to: VertexId) -> Option<Weight> {
        self.vertex(from)?
            .edges
            .iter()
            .find(|edge| edge.end == to)
            .map(Edge::weight)
    }

    /// First vertex, in insertion order, whose payload equals `data`
    pub fn find_vertex<Q>(&self, data: &Q) -> Option<VertexId>
    where
        T: PartialEq<Q>,
        Q: ?Sized,
    {
        self.vertices()
            .find(|vertex| vertex.data == *data)
            .map(Vertex::id)
    }
}

/// Adjacency summary, one `<payload> --> <neighbor> (<weight>), ...` line per vertex
impl<T: fmt::Display> fmt::Display for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for vertex in self.vertices() {
            let neighbours: Vec<String> = vertex
                .edges
                .iter()
                .filter_map(|edge| {
                    self.data(edge.end)
                        .map(|data| format!("{} ({})", data, edge.weight))
                })
                .collect();
            writeln!(f, "{} --> {}", vertex.data, neighbours.join(", "))?;
        }
        Ok(())
    }
}
