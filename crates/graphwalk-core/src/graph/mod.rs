//! Adjacency-list graph with traversal and shortest paths
//!
//! - `adjacency`: the `Graph` container and its mutation/query operations
//! - `traversal`: depth-first and breadth-first walks
//! - `algos`: Dijkstra's algorithm and path reconstruction
//! - `document`: serializable snapshots for import/export

pub mod adjacency;
pub mod algos;
pub mod document;
pub mod traversal;
pub mod types;

pub use adjacency::Graph;
pub use algos::{dijkstra, reconstruct_path, ShortestPaths};
pub use document::{read_document, write_document, DocumentFormat, EdgeRecord, GraphDocument};
pub use types::{Edge, GraphOptions, Vertex, VertexId, Weight};
