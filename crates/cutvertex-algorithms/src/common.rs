//! Shared utilities for graph algorithms
//!
//! Provides a read-only, optimized view of the graph topology for algorithm execution.

/// Node Identifier type (u64)
pub type NodeId = u64;

/// A dense, integer-indexed view of an undirected graph in Compressed Sparse Row (CSR) format.
///
/// Every undirected edge `{u, v}` appears twice in `targets`: once in the row of `u`
/// and once in the row of `v`. Row order is the neighbor order the algorithms visit.
#[derive(Debug, Clone, Default)]
pub struct GraphView {
    /// Number of nodes
    pub node_count: usize,
    /// Mapping from dense index (0..N) back to NodeId
    pub index_to_node: Vec<NodeId>,
    /// Offsets into `targets`. Size = node_count + 1
    pub offsets: Vec<usize>,
    /// Contiguous array of neighbor indices
    pub targets: Vec<usize>,
}

impl GraphView {
    /// Neighbors of a node (by index), in adjacency order
    pub fn neighbors(&self, idx: usize) -> &[usize] {
        let start = self.offsets[idx];
        let end = self.offsets[idx + 1];
        &self.targets[start..end]
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.targets.len() / 2
    }

    /// Build a view from per-node adjacency lists.
    ///
    /// The lists must already be symmetric: `v` in `adjacency[u]` iff `u` in `adjacency[v]`.
    pub fn from_adjacency_list(index_to_node: Vec<NodeId>, adjacency: Vec<Vec<usize>>) -> Self {
        let node_count = adjacency.len();
        debug_assert_eq!(index_to_node.len(), node_count);

        let mut offsets = Vec::with_capacity(node_count + 1);
        let mut targets = Vec::with_capacity(adjacency.iter().map(Vec::len).sum());

        offsets.push(0);
        for neighbors in adjacency {
            targets.extend(neighbors);
            offsets.push(targets.len());
        }

        GraphView {
            node_count,
            index_to_node,
            offsets,
            targets,
        }
    }

    /// Helper to create a view from an undirected edge list over nodes `0..node_count`.
    ///
    /// Node ids equal their indices. Each pair is added to both endpoints' rows in list order.
    pub fn from_edges(node_count: usize, edges: &[(usize, usize)]) -> Self {
        let mut adjacency = vec![Vec::new(); node_count];
        for &(u, v) in edges {
            adjacency[u].push(v);
            adjacency[v].push(u);
        }
        Self::from_adjacency_list((0..node_count as NodeId).collect(), adjacency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csr_rows_follow_insertion_order() {
        let view = GraphView::from_edges(4, &[(0, 2), (0, 1), (2, 3)]);

        assert_eq!(view.node_count, 4);
        assert_eq!(view.edge_count(), 3);
        assert_eq!(view.neighbors(0), &[2, 1]);
        assert_eq!(view.neighbors(2), &[0, 3]);
        assert_eq!(view.neighbors(1), &[0]);
        assert_eq!(view.offsets.len(), 5);
    }

    #[test]
    fn test_empty_view() {
        let view = GraphView::from_edges(0, &[]);
        assert_eq!(view.node_count, 0);
        assert_eq!(view.edge_count(), 0);
        assert_eq!(view.offsets, vec![0]);
    }
}
