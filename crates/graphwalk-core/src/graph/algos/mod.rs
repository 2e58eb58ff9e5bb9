//! Graph algorithm implementations
//!
//! - `dijkstra`: single-source shortest paths over non-negative weights
//! - `path`: predecessor-chain path reconstruction

pub mod dijkstra;
pub mod path;

pub use dijkstra::{dijkstra, ShortestPaths};
pub use path::reconstruct_path;
