//! Line-oriented command protocol for driving a session
//!
//! ```text
//! # comments and blank lines are ignored
//! node            add a node with no position
//! node 120 80     add a node at (120, 80)
//! edge 0 1        connect nodes 0 and 1
//! neighbors 0     list the neighbors of node 0
//! edges           list every edge in creation order
//! analyze         find articulation points
//! stats           graph statistics
//! clear           reset the graph
//! ```

use crate::graph::{GraphStatistics, NodeId};
use crate::session::{AnalysisReport, Session, SessionError};
use serde::Serialize;
use std::fmt;
use std::io::BufRead;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors raised while parsing or running commands
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("{0}")]
    Parse(String),

    #[error("line {line}: {message}")]
    Script { line: usize, message: String },

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A parsed command
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    AddNode { at: Option<(f64, f64)> },
    AddEdge(NodeId, NodeId),
    Neighbors(NodeId),
    Edges,
    Analyze,
    Stats,
    Clear,
}

/// Result of a successfully executed command
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    NodeAdded { node: NodeId },
    EdgeAdded { a: NodeId, b: NodeId },
    Neighbors { node: NodeId, neighbors: Vec<NodeId> },
    Edges { edges: Vec<(NodeId, NodeId)> },
    Analysis(AnalysisReport),
    Stats(GraphStatistics),
    Cleared,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::NodeAdded { node } => write!(f, "Node {} created", node),
            Outcome::EdgeAdded { a, b } => write!(f, "Edge {}-{} created", a, b),
            Outcome::Neighbors { node, neighbors } => {
                let list: Vec<String> = neighbors.iter().map(ToString::to_string).collect();
                write!(f, "Node {}: [{}]", node, list.join(", "))
            }
            Outcome::Edges { edges } => {
                let list: Vec<String> = edges.iter().map(|(a, b)| format!("{}-{}", a, b)).collect();
                write!(f, "{} edge(s): [{}]", edges.len(), list.join(", "))
            }
            Outcome::Analysis(report) => {
                write!(f, "{}", report.summary())?;
                if !report.points.is_empty() {
                    let list: Vec<String> = report.points.iter().map(ToString::to_string).collect();
                    write!(f, ": {}", list.join(", "))?;
                }
                Ok(())
            }
            Outcome::Stats(stats) => write!(
                f,
                "{} node(s), {} edge(s), {} isolated, max degree {}, avg degree {:.2}",
                stats.node_count, stats.edge_count, stats.isolated_nodes, stats.max_degree, stats.avg_degree
            ),
            Outcome::Cleared => write!(f, "Graph cleared"),
        }
    }
}

fn parse_node_id(token: &str) -> Result<NodeId, CommandError> {
    token
        .parse::<u64>()
        .map(NodeId::new)
        .map_err(|_| CommandError::Parse(format!("invalid node id '{}': expected a non-negative integer", token)))
}

fn parse_coordinate(token: &str) -> Result<f64, CommandError> {
    match token.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(CommandError::Parse(format!("invalid coordinate '{}'", token))),
    }
}

/// Parse one line. Blank lines and `#` comments yield `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = match line.split_once('#') {
        Some((before, _)) => before,
        None => line,
    };
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((name, args)) = tokens.split_first() else {
        return Ok(None);
    };

    let command = match (name.to_lowercase().as_str(), args) {
        ("node", []) => Command::AddNode { at: None },
        ("node", [x, y]) => Command::AddNode {
            at: Some((parse_coordinate(x)?, parse_coordinate(y)?)),
        },
        ("edge", [a, b]) => Command::AddEdge(parse_node_id(a)?, parse_node_id(b)?),
        ("neighbors", [id]) => Command::Neighbors(parse_node_id(id)?),
        ("edges", []) => Command::Edges,
        ("analyze", []) => Command::Analyze,
        ("stats", []) => Command::Stats,
        ("clear", []) => Command::Clear,
        ("node" | "edge" | "neighbors" | "edges" | "analyze" | "stats" | "clear", _) => {
            return Err(CommandError::Parse(format!(
                "wrong number of arguments for '{}'",
                name
            )))
        }
        _ => return Err(CommandError::Parse(format!("unknown command '{}'", name))),
    };
    Ok(Some(command))
}

/// Apply a command to a session.
///
/// Everything the session refuses comes back as [`CommandError::Session`].
pub fn execute(session: &mut Session, command: Command) -> Result<Outcome, CommandError> {
    debug!(?command, "executing command");
    let outcome = match command {
        Command::AddNode { at: None } => Outcome::NodeAdded { node: session.add_node()? },
        Command::AddNode { at: Some((x, y)) } => Outcome::NodeAdded { node: session.place_node(x, y)? },
        Command::AddEdge(a, b) => {
            session.connect(a, b)?;
            Outcome::EdgeAdded { a, b }
        }
        Command::Neighbors(node) => {
            let neighbors = session.store().neighbors(node).map_err(SessionError::from)?.to_vec();
            Outcome::Neighbors { node, neighbors }
        }
        Command::Edges => Outcome::Edges {
            edges: session.store().edges().map(|edge| edge.endpoints()).collect(),
        },
        Command::Analyze => Outcome::Analysis(session.analyze().clone()),
        Command::Stats => Outcome::Stats(session.store().statistics()),
        Command::Clear => {
            session.clear();
            Outcome::Cleared
        }
    };
    Ok(outcome)
}

/// A command the session refused
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    pub line: usize,
    pub message: String,
}

/// Everything a script run produced, in order
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScriptReport {
    pub outcomes: Vec<Outcome>,
    pub rejected: Vec<Rejection>,
}

impl ScriptReport {
    /// The most recent analysis in the script, if any
    pub fn last_analysis(&self) -> Option<&AnalysisReport> {
        self.outcomes.iter().rev().find_map(|outcome| match outcome {
            Outcome::Analysis(report) => Some(report),
            _ => None,
        })
    }
}

/// Run every line of a script against the session.
///
/// Rejected graph operations are recorded and the script continues; a line
/// that does not parse aborts the run.
pub fn run_script<R: BufRead>(session: &mut Session, reader: R) -> Result<ScriptReport, CommandError> {
    let mut report = ScriptReport::default();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line?;

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                return Err(CommandError::Script {
                    line: line_no,
                    message: e.to_string(),
                })
            }
        };

        match execute(session, command) {
            Ok(outcome) => report.outcomes.push(outcome),
            Err(CommandError::Session(e)) => {
                warn!(line = line_no, error = %e, "command rejected");
                report.rejected.push(Rejection {
                    line: line_no,
                    message: e.to_string(),
                });
            }
            Err(e) => return Err(e),
        }
    }

    Ok(report)
}

/// Run a script file against the session
pub fn run_script_file(session: &mut Session, path: impl AsRef<Path>) -> Result<ScriptReport, CommandError> {
    let file = std::fs::File::open(path)?;
    run_script(session, std::io::BufReader::new(file))
}
