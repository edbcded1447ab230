use serde::{Deserialize, Serialize};

/// A position in the plane. The graph itself never stores positions;
/// callers supply them when evaluating crossings.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// Graph vertex. `id` is the creation index, never reused or renumbered,
/// so ids stay stable across contraction even as vertices are removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vertex {
    pub id: u32,
}

/// Undirected adjacency stored in canonical direction: `from < to` always.
/// `id` is the creation index and survives repointing during contraction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub id: u32,
    pub from: u32,
    pub to: u32,
}

impl Edge {
    /// True if this edge touches vertex `v` at either end.
    pub fn touches(&self, v: u32) -> bool {
        self.from == v || self.to == v
    }

    /// True if the two edges share at least one endpoint.
    pub fn shares_vertex(&self, other: &Edge) -> bool {
        self.touches(other.from) || self.touches(other.to)
    }
}
