//! In-memory undirected graph storage
//!
//! Nodes are only ever appended, so identities stay dense (`0..N`). Edges are
//! unordered pairs kept in creation order; self-loops and duplicate pairs are
//! rejected before any state changes.

use super::types::{Edge, NodeId};
use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    #[error("Node {0} not found")]
    UnknownNode(NodeId),

    #[error("Self-loop on node {0} is not allowed")]
    SelfLoop(NodeId),

    #[error("Edge {0}-{1} already exists")]
    DuplicateEdge(NodeId, NodeId),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Summary counters for a graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphStatistics {
    pub node_count: usize,
    pub edge_count: usize,
    /// Nodes with no incident edge
    pub isolated_nodes: usize,
    pub max_degree: usize,
    pub avg_degree: f64,
}

/// In-memory graph storage
///
/// - adjacency: node index -> neighbors in edge-creation order
/// - edges: canonical pairs in creation order, with O(1) membership
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    /// One adjacency list per node; the node count is its length
    adjacency: Vec<Vec<NodeId>>,

    /// Edge set, insertion ordered
    edges: IndexSet<Edge, FxBuildHasher>,
}

impl GraphStore {
    /// Create a new empty graph store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node. Its identity is the node count before the call.
    pub fn add_node(&mut self) -> NodeId {
        let id = NodeId::new(self.adjacency.len() as u64);
        self.adjacency.push(Vec::new());
        debug!(node = %id, "node added");
        id
    }

    /// Connect two existing, distinct nodes.
    ///
    /// Fails without mutating the store if either endpoint is unknown, the
    /// endpoints are equal, or the unordered pair is already connected.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> GraphResult<()> {
        self.index_of(a)?;
        self.index_of(b)?;
        if a == b {
            return Err(GraphError::SelfLoop(a));
        }
        if !self.edges.insert(Edge::new(a, b)) {
            return Err(GraphError::DuplicateEdge(a, b));
        }

        self.adjacency[a.index()].push(b);
        self.adjacency[b.index()].push(a);
        debug!(%a, %b, edges = self.edges.len(), "edge added");
        Ok(())
    }

    /// Clear all data from the graph
    pub fn clear(&mut self) {
        self.adjacency.clear();
        self.edges.clear();
        debug!("graph cleared");
    }

    /// Get total number of nodes
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Get total number of edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn has_node(&self, id: NodeId) -> bool {
        id.index() < self.adjacency.len()
    }

    /// Whether `{a, b}` is connected, in either order
    pub fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.edges.contains(&Edge::new(a, b))
    }

    /// Neighbors of a node in edge-creation order
    pub fn neighbors(&self, id: NodeId) -> GraphResult<&[NodeId]> {
        let idx = self.index_of(id)?;
        Ok(&self.adjacency[idx])
    }

    pub fn degree(&self, id: NodeId) -> GraphResult<usize> {
        self.neighbors(id).map(<[NodeId]>::len)
    }

    /// All node identities in ascending order
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.adjacency.len() as u64).map(NodeId::new)
    }

    /// All edges in creation order
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter()
    }

    /// Every node with its neighbor list, in ascending identity order
    pub fn adjacency(&self) -> impl Iterator<Item = (NodeId, &[NodeId])> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .map(|(idx, neighbors)| (NodeId::new(idx as u64), neighbors.as_slice()))
    }

    pub fn statistics(&self) -> GraphStatistics {
        let node_count = self.node_count();
        let edge_count = self.edge_count();
        let isolated_nodes = self.adjacency.iter().filter(|n| n.is_empty()).count();
        let max_degree = self.adjacency.iter().map(Vec::len).max().unwrap_or(0);
        let avg_degree = if node_count == 0 {
            0.0
        } else {
            (2 * edge_count) as f64 / node_count as f64
        };

        GraphStatistics {
            node_count,
            edge_count,
            isolated_nodes,
            max_degree,
            avg_degree,
        }
    }

    fn index_of(&self, id: NodeId) -> GraphResult<usize> {
        if self.has_node(id) {
            Ok(id.index())
        } else {
            Err(GraphError::UnknownNode(id))
        }
    }
}
