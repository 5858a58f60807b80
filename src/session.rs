//! Interactive editing session
//!
//! Wraps a [`GraphStore`] with the state a front end keeps between user
//! actions: where each node was placed, the in-progress edge selection, and
//! the last analysis result. Rendering and raw input handling stay outside.

use crate::algo::{self, ArticulationConfig, Traversal};
use crate::graph::{GraphError, GraphStore, NodeId};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Default node radius, also the hit-test radius
pub const NODE_RADIUS: f64 = 15.0;

/// Node cap applied whenever the recursive DFS is selected; recursion depth
/// can reach the node count on a path graph.
pub const RECURSIVE_MAX_NODES: usize = 10_000;

/// Errors raised by session operations
#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("Node limit of {0} reached")]
    NodeLimitReached(usize),

    #[error("Need at least 2 nodes to create an edge")]
    NotEnoughNodes,

    #[error("Not creating an edge")]
    NotCreatingEdge,

    #[error("Failed to read config: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

pub type SessionResult<T> = Result<T, SessionError>;

/// Session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Maximum number of nodes (None = unbounded)
    pub max_nodes: Option<usize>,
    /// Distance within which a point selects a node
    pub hit_radius: f64,
    /// DFS strategy used by the analysis.
    ///
    /// `Recursive` uses the call stack, so the session never grows past
    /// [`RECURSIVE_MAX_NODES`] with it, whatever `max_nodes` says.
    pub traversal: Traversal,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_nodes: Some(10_000),
            hit_radius: NODE_RADIUS,
            traversal: Traversal::Iterative,
        }
    }
}

impl SessionConfig {
    /// Load a configuration from a JSON file; missing fields take their defaults
    pub fn load(path: impl AsRef<Path>) -> SessionResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// The node cap actually enforced, taking the traversal into account
    pub fn node_limit(&self) -> Option<usize> {
        match (self.traversal, self.max_nodes) {
            (Traversal::Iterative, limit) => limit,
            (Traversal::Recursive, None) => Some(RECURSIVE_MAX_NODES),
            (Traversal::Recursive, Some(max)) => Some(max.min(RECURSIVE_MAX_NODES)),
        }
    }
}

/// A position on the drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// State of the two-click edge creation gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeDraft {
    #[default]
    Idle,
    /// Waiting for endpoints; `first` is set once one node has been picked
    Selecting { first: Option<NodeId> },
}

/// What a `select` call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// First endpoint recorded
    First(NodeId),
    /// The already selected node was picked again
    Unchanged(NodeId),
    /// Second endpoint picked and the edge created
    Connected(NodeId, NodeId),
}

/// Outcome of an articulation point analysis, ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Articulation points in ascending order
    pub points: Vec<NodeId>,
    pub node_count: usize,
    pub edge_count: usize,
    /// Number of connected components
    pub components: usize,
}

impl AnalysisReport {
    pub fn is_articulation_point(&self, id: NodeId) -> bool {
        self.points.binary_search(&id).is_ok()
    }

    /// One-line status message
    pub fn summary(&self) -> String {
        if self.node_count == 0 {
            "No nodes to analyze".to_string()
        } else if self.points.is_empty() {
            "No articulation points found".to_string()
        } else {
            format!("Found {} articulation point(s)", self.points.len())
        }
    }
}

/// An editing session over a single graph
#[derive(Debug, Default)]
pub struct Session {
    config: SessionConfig,
    store: GraphStore,
    /// Position per node; `None` for nodes added without one
    layout: Vec<Option<Point>>,
    draft: EdgeDraft,
    /// Cached analysis, dropped on every mutation
    analysis: Option<AnalysisReport>,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Session {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    /// Add a node with no position
    pub fn add_node(&mut self) -> SessionResult<NodeId> {
        self.push_node(None)
    }

    /// Add a node at a position
    pub fn place_node(&mut self, x: f64, y: f64) -> SessionResult<NodeId> {
        self.push_node(Some(Point::new(x, y)))
    }

    fn push_node(&mut self, at: Option<Point>) -> SessionResult<NodeId> {
        if let Some(max) = self.config.node_limit() {
            if self.store.node_count() >= max {
                return Err(SessionError::NodeLimitReached(max));
            }
        }

        let id = self.store.add_node();
        self.layout.push(at);
        self.invalidate();
        Ok(id)
    }

    pub fn position(&self, id: NodeId) -> Option<Point> {
        self.layout.get(id.as_u64() as usize).copied().flatten()
    }

    /// Hit test: the most recently created node whose centre lies within the hit radius
    pub fn node_at(&self, x: f64, y: f64) -> Option<NodeId> {
        let probe = Point::new(x, y);
        self.layout
            .iter()
            .enumerate()
            .rev()
            .find(|(_, at)| matches!(at, Some(p) if p.distance(&probe) <= self.config.hit_radius))
            .map(|(idx, _)| NodeId::new(idx as u64))
    }

    /// Connect two nodes directly
    pub fn connect(&mut self, a: NodeId, b: NodeId) -> SessionResult<()> {
        self.store.add_edge(a, b)?;
        self.invalidate();
        Ok(())
    }

    /// Enter edge creation mode, discarding any previous selection
    pub fn begin_edge(&mut self) -> SessionResult<()> {
        if self.store.node_count() < 2 {
            return Err(SessionError::NotEnoughNodes);
        }
        self.draft = EdgeDraft::Selecting { first: None };
        Ok(())
    }

    pub fn cancel_edge(&mut self) {
        self.draft = EdgeDraft::Idle;
    }

    pub fn is_creating_edge(&self) -> bool {
        matches!(self.draft, EdgeDraft::Selecting { .. })
    }

    /// The first endpoint picked in edge creation mode, if any
    pub fn selected(&self) -> Option<NodeId> {
        match self.draft {
            EdgeDraft::Selecting { first } => first,
            EdgeDraft::Idle => None,
        }
    }

    /// Pick a node while in edge creation mode.
    ///
    /// The second distinct pick creates the edge and leaves the mode, whether
    /// or not the store accepted the edge.
    pub fn select(&mut self, id: NodeId) -> SessionResult<Selection> {
        let first = match self.draft {
            EdgeDraft::Idle => return Err(SessionError::NotCreatingEdge),
            EdgeDraft::Selecting { first } => first,
        };
        if !self.store.has_node(id) {
            return Err(GraphError::UnknownNode(id).into());
        }

        match first {
            None => {
                self.draft = EdgeDraft::Selecting { first: Some(id) };
                Ok(Selection::First(id))
            }
            Some(a) if a == id => Ok(Selection::Unchanged(id)),
            Some(a) => {
                self.draft = EdgeDraft::Idle;
                self.connect(a, id)?;
                Ok(Selection::Connected(a, id))
            }
        }
    }

    /// Reset the graph, layout, selection and cached analysis
    pub fn clear(&mut self) {
        self.store.clear();
        self.layout.clear();
        self.draft = EdgeDraft::Idle;
        self.invalidate();
        info!("session cleared");
    }

    /// Compute (or reuse) the articulation point analysis
    pub fn analyze(&mut self) -> &AnalysisReport {
        let store = &self.store;
        let config = ArticulationConfig {
            traversal: self.config.traversal,
        };

        self.analysis.get_or_insert_with(|| {
            let result = algo::analyze(store, config);
            let report = AnalysisReport {
                points: result.points.into_iter().map(NodeId::new).collect(),
                node_count: store.node_count(),
                edge_count: store.edge_count(),
                components: result.trees,
            };
            info!(summary = %report.summary(), "analysis finished");
            report
        })
    }

    /// The cached analysis, if the graph has not changed since it ran
    pub fn last_analysis(&self) -> Option<&AnalysisReport> {
        self.analysis.as_ref()
    }

    fn invalidate(&mut self) {
        if self.analysis.take().is_some() {
            debug!("cached analysis invalidated");
        }
    }
}
