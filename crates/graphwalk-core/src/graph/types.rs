use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_GRAPH_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a graph instance, used to scope vertex handles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GraphId(u64);

impl GraphId {
    pub(crate) fn next() -> Self {
        GraphId(NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Opaque handle to a vertex, valid only for the graph that issued it.
///
/// Slots are never reused, so a handle to a removed vertex stays invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId {
    graph: u64,
    slot: usize,
}

impl VertexId {
    pub(crate) fn new(graph: GraphId, slot: usize) -> Self {
        VertexId {
            graph: graph.0,
            slot,
        }
    }

    pub(crate) fn belongs_to(&self, graph: GraphId) -> bool {
        self.graph == graph.0
    }

    pub(crate) fn slot(&self) -> usize {
        self.slot
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}@g{}", self.slot, self.graph)
    }
}

/// Non-negative cost of traversing an edge
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Weight(f64);

impl Weight {
    /// Weight of every edge in an unweighted graph
    pub const DEFAULT: Weight = Weight(1.0);

    pub fn new(weight: f64) -> Self {
        Weight(weight)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Finite and not negative
    pub fn is_valid(weight: f64) -> bool {
        weight.is_finite() && weight >= 0.0
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Directed, weighted connection owned by its start vertex
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub(crate) start: VertexId,
    pub(crate) end: VertexId,
    pub(crate) weight: Weight,
}

impl Edge {
    pub fn start(&self) -> VertexId {
        self.start
    }

    pub fn end(&self) -> VertexId {
        self.end
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }
}

/// Graph node holding a payload and its outgoing edges in insertion order
#[derive(Debug, Clone)]
pub struct Vertex<T> {
    pub(crate) id: VertexId,
    pub(crate) data: T,
    pub(crate) edges: Vec<Edge>,
}

impl<T> Vertex<T> {
    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn degree(&self) -> usize {
        self.edges.len()
    }
}

/// Mode flags fixed when a graph is constructed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphOptions {
    /// When false, every edge weight is forced to 1
    pub weighted: bool,
    /// When false, every edge insertion and removal is mirrored
    pub directed: bool,
}

impl GraphOptions {
    pub const fn new(weighted: bool, directed: bool) -> Self {
        GraphOptions { weighted, directed }
    }

    pub fn describe(&self) -> &'static str {
        match (self.weighted, self.directed) {
            (true, true) => "weighted, directed",
            (true, false) => "weighted, undirected",
            (false, true) => "unweighted, directed",
            (false, false) => "unweighted, undirected",
        }
    }
}
