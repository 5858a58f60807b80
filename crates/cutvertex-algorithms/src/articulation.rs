//! Articulation point (cut vertex) detection
//!
//! A single DFS forest over all nodes computes discovery times and low-link values.
//! A node is a cut vertex when removing it increases the number of connected components.

use super::common::{GraphView, NodeId};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the depth-first search is driven
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "lowercase"))]
pub enum Traversal {
    /// Explicit work stack; depth is bounded by heap, not by the call stack
    #[default]
    Iterative,
    /// Plain recursion; only suitable for shallow graphs
    Recursive,
}

/// Articulation point configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArticulationConfig {
    pub traversal: Traversal,
}

/// Result of the articulation point analysis
///
/// The per-node arrays are indexed by dense view index, not by `NodeId`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArticulationResult {
    /// Cut vertices, in view index order
    pub points: Vec<NodeId>,
    /// DFS pre-order number, starting at 1 and shared across the whole forest
    pub discovery: Vec<usize>,
    /// Smallest discovery time reachable from the node's subtree through one back edge
    pub low: Vec<usize>,
    /// DFS tree parent; `None` for tree roots
    pub parent: Vec<Option<usize>>,
    /// Number of DFS trees, i.e. connected components
    pub trees: usize,
}

impl ArticulationResult {
    pub fn is_articulation_point(&self, id: NodeId) -> bool {
        self.points.contains(&id)
    }
}

/// One pending node on the explicit DFS stack
struct Frame {
    node: usize,
    /// Position of the next neighbor to examine
    cursor: usize,
    /// DFS tree children discovered so far
    children: usize,
}

impl Frame {
    fn new(node: usize) -> Self {
        Frame {
            node,
            cursor: 0,
            children: 0,
        }
    }
}

/// Per-run bookkeeping. Created fresh for every invocation, so repeated runs share nothing.
struct DfsState<'a> {
    view: &'a GraphView,
    visited: Vec<bool>,
    discovery: Vec<usize>,
    low: Vec<usize>,
    parent: Vec<Option<usize>>,
    is_cut: Vec<bool>,
    time: usize,
}

impl<'a> DfsState<'a> {
    fn new(view: &'a GraphView) -> Self {
        let n = view.node_count;
        DfsState {
            view,
            visited: vec![false; n],
            discovery: vec![0; n],
            low: vec![0; n],
            parent: vec![None; n],
            is_cut: vec![false; n],
            time: 0,
        }
    }

    fn enter(&mut self, u: usize) {
        self.visited[u] = true;
        self.time += 1;
        self.discovery[u] = self.time;
        self.low[u] = self.time;
    }

    /// Fold the finished tree child `v` into `u` and apply the cut-vertex test.
    fn finish_child(&mut self, u: usize, v: usize, children: usize) {
        self.low[u] = self.low[u].min(self.low[v]);

        match self.parent[u] {
            None if children > 1 => self.is_cut[u] = true,
            Some(_) if self.low[v] >= self.discovery[u] => self.is_cut[u] = true,
            _ => {}
        }
    }

    /// `v` is already visited; anything but the tree edge back to the parent is a back edge.
    fn back_edge(&mut self, u: usize, v: usize) {
        if self.parent[u] != Some(v) {
            self.low[u] = self.low[u].min(self.discovery[v]);
        }
    }

    fn visit_recursive(&mut self, u: usize) {
        let view = self.view;
        self.enter(u);

        let mut children = 0;
        for &v in view.neighbors(u) {
            if !self.visited[v] {
                children += 1;
                self.parent[v] = Some(u);
                self.visit_recursive(v);
                self.finish_child(u, v, children);
            } else {
                self.back_edge(u, v);
            }
        }
    }

    fn visit_iterative(&mut self, root: usize) {
        let view = self.view;
        self.enter(root);

        let mut stack = vec![Frame::new(root)];
        while let Some(frame) = stack.last_mut() {
            let u = frame.node;

            if let Some(&v) = view.neighbors(u).get(frame.cursor) {
                frame.cursor += 1;
                if !self.visited[v] {
                    frame.children += 1;
                    self.parent[v] = Some(u);
                    self.enter(v);
                    stack.push(Frame::new(v));
                } else {
                    self.back_edge(u, v);
                }
            } else {
                // All neighbors of u examined: return to the parent frame
                stack.pop();
                if let Some(top) = stack.last() {
                    self.finish_child(top.node, u, top.children);
                }
            }
        }
    }

    fn into_result(self, trees: usize) -> ArticulationResult {
        let view = self.view;
        let points = self
            .is_cut
            .iter()
            .enumerate()
            .filter(|&(_, &cut)| cut)
            .map(|(idx, _)| view.index_to_node[idx])
            .collect();

        ArticulationResult {
            points,
            discovery: self.discovery,
            low: self.low,
            parent: self.parent,
            trees,
        }
    }
}

/// Articulation Points
///
/// Visits unvisited nodes in ascending index order, starting a new DFS tree for each,
/// so disconnected graphs are fully covered. Runs in O(N + E).
pub fn articulation_points(view: &GraphView, config: ArticulationConfig) -> ArticulationResult {
    let mut state = DfsState::new(view);
    let mut trees = 0;

    for root in 0..view.node_count {
        if state.visited[root] {
            continue;
        }
        trees += 1;
        match config.traversal {
            Traversal::Iterative => state.visit_iterative(root),
            Traversal::Recursive => state.visit_recursive(root),
        }
    }

    state.into_result(trees)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOTH: [Traversal; 2] = [Traversal::Iterative, Traversal::Recursive];

    fn run(view: &GraphView, traversal: Traversal) -> ArticulationResult {
        articulation_points(view, ArticulationConfig { traversal })
    }

    #[test]
    fn test_articulation_points_line() {
        // 0 - 1 - 2
        let view = GraphView::from_edges(3, &[(0, 1), (1, 2)]);
        for traversal in BOTH {
            assert_eq!(run(&view, traversal).points, vec![1]);
        }
    }

    #[test]
    fn test_articulation_points_cycle() {
        let view = GraphView::from_edges(3, &[(0, 1), (1, 2), (2, 0)]);
        for traversal in BOTH {
            let result = run(&view, traversal);
            assert!(result.points.is_empty());
            assert_eq!(result.low, vec![1, 1, 1]);
        }
    }

    #[test]
    fn test_root_with_multiple_children() {
        let view = GraphView::from_edges(4, &[(0, 1), (0, 2), (0, 3)]);
        for traversal in BOTH {
            let result = run(&view, traversal);
            assert_eq!(result.points, vec![0]);
            assert_eq!(result.parent, vec![None, Some(0), Some(0), Some(0)]);
        }
    }

    #[test]
    fn test_root_with_single_child_is_not_cut() {
        // Root 0 reaches everything through 1, then 2 closes a cycle back to 0
        let view = GraphView::from_edges(4, &[(0, 1), (1, 2), (2, 0), (2, 3)]);
        for traversal in BOTH {
            assert_eq!(run(&view, traversal).points, vec![2]);
        }
    }

    #[test]
    fn test_bridge_between_triangles() {
        let view = GraphView::from_edges(
            6,
            &[(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3), (2, 3)],
        );
        for traversal in BOTH {
            let result = run(&view, traversal);
            assert_eq!(result.points, vec![2, 3]);
            assert_eq!(result.discovery, vec![1, 2, 3, 4, 5, 6]);
            assert_eq!(result.low, vec![1, 1, 1, 4, 4, 4]);
            assert_eq!(result.trees, 1);
        }
    }

    #[test]
    fn test_discovery_counter_spans_forest() {
        let view = GraphView::from_edges(5, &[(0, 1), (2, 3)]);
        for traversal in BOTH {
            let result = run(&view, traversal);
            assert!(result.points.is_empty());
            assert_eq!(result.discovery, vec![1, 2, 3, 4, 5]);
            assert_eq!(result.trees, 3);
        }
    }

    #[test]
    fn test_empty_and_isolated() {
        let empty = GraphView::from_edges(0, &[]);
        let result = run(&empty, Traversal::Iterative);
        assert!(result.points.is_empty());
        assert_eq!(result.trees, 0);

        let isolated = GraphView::from_edges(3, &[]);
        for traversal in BOTH {
            assert!(run(&isolated, traversal).points.is_empty());
        }
    }

    #[test]
    fn test_points_map_through_index_to_node() {
        let view = GraphView::from_adjacency_list(vec![10, 20, 30], vec![vec![1], vec![0, 2], vec![1]]);
        let result = run(&view, Traversal::Iterative);
        assert_eq!(result.points, vec![20]);
        assert!(result.is_articulation_point(20));
        assert!(!result.is_articulation_point(10));
    }

    #[test]
    fn test_strategies_agree() {
        let edges = [
            (0, 1), (1, 2), (2, 3), (3, 1), (3, 4), (4, 5), (5, 6), (6, 4),
            (7, 8), (8, 9), (2, 10), (10, 11),
        ];
        let view = GraphView::from_edges(12, &edges);
        let iterative = run(&view, Traversal::Iterative);
        let recursive = run(&view, Traversal::Recursive);
        assert_eq!(iterative, recursive);
        assert_eq!(iterative.points, vec![1, 2, 3, 4, 8, 10]);
    }

    #[test]
    fn test_deep_path_iterative() {
        let n = 200_000;
        let edges: Vec<(usize, usize)> = (0..n - 1).map(|i| (i, i + 1)).collect();
        let view = GraphView::from_edges(n, &edges);

        let result = run(&view, Traversal::Iterative);
        assert_eq!(result.points.len(), n - 2);
        assert_eq!(result.points.first(), Some(&1));
        assert_eq!(result.points.last(), Some(&((n - 2) as NodeId)));
    }
}
