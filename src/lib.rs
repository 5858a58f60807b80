//! Cutvertex
//!
//! Build an undirected graph one node and one edge at a time, then find its
//! articulation points: the nodes whose removal splits the graph into more
//! connected components.
//!
//! # Layout
//!
//! - [`graph`]: the graph store. Dense node identities, no self-loops, no
//!   duplicate edges, adjacency in edge-creation order.
//! - [`algo`]: adapter from the store to the `cutvertex-algorithms` crate,
//!   which runs a low-link DFS over every connected component.
//! - [`session`]: node placement, hit testing, two-click edge creation and a
//!   cached analysis for interactive front ends.
//! - [`command`]: a line-oriented text protocol over a session, used by the CLI.
//!
//! ## Example Usage
//!
//! ```rust
//! use cutvertex::{find_articulation_points, GraphError, GraphStore, NodeId};
//!
//! let mut store = GraphStore::new();
//! let a = store.add_node();
//! let b = store.add_node();
//! let c = store.add_node();
//!
//! store.add_edge(a, b).unwrap();
//! store.add_edge(b, c).unwrap();
//! assert_eq!(store.add_edge(c, b), Err(GraphError::DuplicateEdge(c, b)));
//!
//! let points = find_articulation_points(&store);
//! assert_eq!(points.into_iter().collect::<Vec<_>>(), vec![NodeId::new(1)]);
//! ```

#![warn(clippy::all)]

pub mod algo;
pub mod command;
pub mod graph;
pub mod session;

// Re-export main types for convenience
pub use algo::{analyze, build_view, find_articulation_points, ArticulationConfig, ArticulationResult, Traversal};
pub use command::{execute, parse_command, run_script, run_script_file, Command, CommandError, Outcome, ScriptReport};
pub use graph::{Edge, GraphError, GraphResult, GraphStatistics, GraphStore, NodeId};
pub use session::{AnalysisReport, Point, Selection, Session, SessionConfig, SessionError, SessionResult};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
