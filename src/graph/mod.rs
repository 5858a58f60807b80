//! Core graph implementation
//!
//! An undirected simple graph:
//! - Nodes identified by their creation index, never individually removed
//! - Edges are unordered pairs; no self-loops, no parallel edges
//! - Adjacency kept in edge-creation order for deterministic traversal

pub mod store;
pub mod types;

// Re-export main types
pub use store::{GraphError, GraphResult, GraphStatistics, GraphStore};
pub use types::{Edge, NodeId};
