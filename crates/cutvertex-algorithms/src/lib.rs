//! Graph algorithms for cutvertex
//!
//! Operates on [`GraphView`], a dense CSR snapshot of an undirected graph, so the
//! algorithms never depend on how the graph is stored.

pub mod common;
pub mod articulation;

pub use common::{GraphView, NodeId};
pub use articulation::{articulation_points, ArticulationConfig, ArticulationResult, Traversal};
