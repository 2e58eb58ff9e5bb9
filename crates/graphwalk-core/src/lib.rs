//! Graphwalk Core Library
//!
//! Heaps, a priority queue, bounded queue/stack containers and an
//! adjacency-list graph with depth-first, breadth-first and Dijkstra
//! traversal.

pub mod collections;
pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod heap;
pub mod logging;
