use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque vertex identifier. The engine only compares, orders and hashes it.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct VertexId(pub i64);

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeLabelId(pub i64);

impl fmt::Display for EdgeLabelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexLabelId(pub i64);

impl fmt::Display for VertexLabelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyId(pub i64);

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Out,
    In,
    Both,
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Out => Direction::In,
            Direction::In => Direction::Out,
            Direction::Both => Direction::Both,
        }
    }
}

/// An edge as yielded by the backend. Property values stay behind the
/// backend query filter and never cross this boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub label: EdgeLabelId,
    pub from: VertexId,
    pub to: VertexId,
}

impl Edge {
    pub fn new(label: EdgeLabelId, from: VertexId, to: VertexId) -> Self {
        Self { label, from, to }
    }

    /// Resolves the endpoint opposite to `source`.
    pub fn other_vertex(&self, source: VertexId) -> VertexId {
        if self.from == source { self.to } else { self.from }
    }
}
