//! Core type definitions for the graph store

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a node
///
/// Equal to the node's creation index within the current graph: 0, 1, 2, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct NodeId(pub u64);

impl NodeId {
    pub fn new(id: u64) -> Self {
        NodeId(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    pub(crate) fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        NodeId(id)
    }
}

/// An undirected edge, stored as an ordered pair `(low, high)` so that
/// `{a, b}` and `{b, a}` compare and hash equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    low: NodeId,
    high: NodeId,
}

impl Edge {
    /// Create the canonical edge for the unordered pair `{a, b}`
    pub fn new(a: NodeId, b: NodeId) -> Self {
        if a <= b {
            Edge { low: a, high: b }
        } else {
            Edge { low: b, high: a }
        }
    }

    /// Both endpoints, smaller identity first
    pub fn endpoints(&self) -> (NodeId, NodeId) {
        (self.low, self.high)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}
