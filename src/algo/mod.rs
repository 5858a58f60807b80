//! Graph algorithms module
//!
//! Algorithms are implemented in the `cutvertex-algorithms` crate.
//! This module provides the integration/adapter layer.

use crate::graph::{GraphStore, NodeId};
use std::collections::BTreeSet;
use tracing::debug;

// Re-export algorithms
pub use cutvertex_algorithms::{
    articulation_points, ArticulationConfig, ArticulationResult, GraphView, Traversal,
};

/// Build a GraphView snapshot from the store for algorithm execution.
///
/// Store identities are already dense, so view index `i` is `NodeId(i)` and
/// each row keeps the store's adjacency order.
pub fn build_view(store: &GraphStore) -> GraphView {
    let mut index_to_node = Vec::with_capacity(store.node_count());
    let mut adjacency = Vec::with_capacity(store.node_count());

    for (id, neighbors) in store.adjacency() {
        index_to_node.push(id.as_u64());
        adjacency.push(neighbors.iter().map(|n| n.as_u64() as usize).collect());
    }

    GraphView::from_adjacency_list(index_to_node, adjacency)
}

/// Run the articulation point analysis over a snapshot of the store
pub fn analyze(store: &GraphStore, config: ArticulationConfig) -> ArticulationResult {
    let view = build_view(store);
    let result = articulation_points(&view, config);
    debug!(
        nodes = view.node_count,
        edges = view.edge_count(),
        components = result.trees,
        points = result.points.len(),
        traversal = ?config.traversal,
        "articulation analysis complete"
    );
    result
}

/// Find the articulation points (cut vertices) of the graph.
///
/// An empty graph yields an empty set. Running this twice on an unchanged
/// graph yields the same set.
pub fn find_articulation_points(store: &GraphStore) -> BTreeSet<NodeId> {
    analyze(store, ArticulationConfig::default())
        .points
        .into_iter()
        .map(NodeId::new)
        .collect()
}
