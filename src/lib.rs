//! Planar-graph engine for an untangling puzzle.
//!
//! A graph is generated from a random arrangement of pairwise non-parallel
//! lines (intersections become vertices, neighbouring intersections along a
//! line become edges), then contracted down to the requested vertex count.
//! Both steps preserve planarity, so the result always admits a crossing-free
//! placement; finding one is the player's job. The engine stores no
//! positions: the presentation layer owns layout and supplies current
//! positions when it asks for the live crossing count.

pub mod error;
pub mod model;
pub mod geometry {
    pub mod intersect;
    pub mod tolerance;
}
mod algorithms {
    pub(crate) mod arrangement;
    pub(crate) mod contraction;
    pub(crate) mod crossings;
}

use std::collections::HashSet;
use std::fmt::Write as _;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{json, Value};

pub use error::GraphError;
pub use model::{Edge, Point, Vertex};

/// Fewer vertices than this cannot form a meaningful puzzle.
pub const MIN_VERTICES: u32 = 4;

/// A simple graph with a planar embedding, plus the seeded random source
/// that produced it. Vertex and edge sequences are insertion-ordered;
/// after construction the graph only shrinks, one vertex per contraction.
///
/// Standing invariants, maintained through every mutation:
/// - every edge satisfies `from < to` (canonical direction),
/// - no two edges share an unordered endpoint pair,
/// - no self-loops,
/// - every edge endpoint is present in the vertex sequence.
#[derive(Debug)]
pub struct Graph {
    pub(crate) vertices: Vec<Vertex>,
    pub(crate) edges: Vec<Edge>,
    // Derived index of canonical endpoint pairs, for O(1) duplicate checks
    pub(crate) pairs: HashSet<(u32, u32)>,
    pub(crate) seed: u64,
    pub(crate) requested: u32,
    pub(crate) rng: StdRng,
}

impl Graph {
    /// Generates a puzzle graph with exactly `requested` vertices, seeding
    /// from entropy. The drawn seed is recorded on the graph so any run
    /// can be reproduced with [`Graph::with_seed`].
    pub fn generate(requested: u32) -> Result<Graph, GraphError> {
        let seed = rand::thread_rng().gen();
        Graph::with_seed(requested, seed)
    }

    /// Deterministic generation: the same `(requested, seed)` always
    /// produces the same vertex ids and edge set.
    pub fn with_seed(requested: u32, seed: u64) -> Result<Graph, GraphError> {
        if requested < MIN_VERTICES {
            return Err(GraphError::TooFewVertices {
                requested,
                min: MIN_VERTICES,
            });
        }
        let mut rng = StdRng::seed_from_u64(seed);
        let (vertex_count, pair_list) = algorithms::arrangement::build(&mut rng, requested)?;

        let vertices = (0..vertex_count as u32).map(|id| Vertex { id }).collect();
        let mut edges = Vec::with_capacity(pair_list.len());
        let mut pairs = HashSet::with_capacity(pair_list.len());
        for (id, &(from, to)) in pair_list.iter().enumerate() {
            edges.push(Edge {
                id: id as u32,
                from,
                to,
            });
            pairs.insert((from, to));
        }

        let mut g = Graph {
            vertices,
            edges,
            pairs,
            seed,
            requested,
            rng,
        };
        debug!(
            "generated seed={} requested={}: {} vertices, {} edges before contraction",
            seed,
            requested,
            g.vertex_count(),
            g.edge_count()
        );
        algorithms::contraction::contract_to(&mut g, requested)?;
        Ok(g)
    }

    /// Assembles a graph from an explicit canonical edge list, validating
    /// the simple-graph invariants. Useful for fixed test topologies and
    /// for presentation layers that restore a saved puzzle.
    pub fn from_edge_list(vertex_count: u32, pair_list: &[(u32, u32)]) -> Result<Graph, GraphError> {
        let vertices = (0..vertex_count).map(|id| Vertex { id }).collect();
        let mut edges = Vec::with_capacity(pair_list.len());
        let mut pairs = HashSet::with_capacity(pair_list.len());
        for (id, &(from, to)) in pair_list.iter().enumerate() {
            if from >= to {
                return Err(GraphError::NonCanonicalEdge { from, to });
            }
            if to >= vertex_count {
                return Err(GraphError::VertexOutOfRange {
                    id: to,
                    count: vertex_count,
                });
            }
            if !pairs.insert((from, to)) {
                return Err(GraphError::DuplicateEdge { from, to });
            }
            edges.push(Edge {
                id: id as u32,
                from,
                to,
            });
        }
        Ok(Graph {
            vertices,
            edges,
            pairs,
            seed: 0,
            requested: vertex_count,
            rng: StdRng::seed_from_u64(0),
        })
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    pub fn edge_count(&self) -> u32 {
        self.edges.len() as u32
    }

    /// True if an edge joins `a` and `b`, in either argument order.
    pub fn contains_edge(&self, a: u32, b: u32) -> bool {
        let key = if a < b { (a, b) } else { (b, a) };
        self.pairs.contains(&key)
    }

    /// Edges stored as `v -> x`, i.e. where `v` is the lower-id endpoint.
    pub fn outgoing(&self, v: u32) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter().filter(move |e| e.from == v)
    }

    /// Edges stored as `y -> v`, i.e. where `v` is the higher-id endpoint.
    pub fn incoming(&self, v: u32) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter().filter(move |e| e.to == v)
    }

    pub fn degree(&self, v: u32) -> usize {
        self.edges.iter().filter(|e| e.touches(v)).count()
    }

    /// Seed this graph was generated from; with [`Graph::requested`] it
    /// fully reproduces the run.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn requested(&self) -> u32 {
        self.requested
    }

    /// Counts unordered edge pairs whose segments properly cross under the
    /// supplied positions. Pairs sharing a vertex are never counted. The
    /// puzzle is solved when this reaches zero.
    pub fn count_crossings<F>(&self, position: F) -> usize
    where
        F: Fn(u32) -> Point,
    {
        algorithms::crossings::count_crossings_impl(self, position)
    }

    /// Per-vertex adjacency listing, for trace logs and bug reports.
    pub fn dump(&self) -> String {
        let mut s = String::from("-----\n");
        for v in &self.vertices {
            let _ = write!(s, "Vertex {}", v.id);
            for e in self.outgoing(v.id) {
                let _ = write!(s, " E({},{}->{})", e.id, e.from, e.to);
            }
            s.push('\n');
        }
        s.push_str("++++\n");
        s
    }

    /// Structural snapshot as JSON, including the reproduction data.
    pub fn snapshot(&self) -> Value {
        json!({
            "seed": self.seed,
            "requested": self.requested,
            "vertices": self.vertices.iter().map(|v| v.id).collect::<Vec<_>>(),
            "edges": self
                .edges
                .iter()
                .map(|e| json!({ "id": e.id, "from": e.from, "to": e.to }))
                .collect::<Vec<_>>(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_edge_list_rejects_bad_input() {
        assert!(matches!(
            Graph::from_edge_list(3, &[(1, 0)]).unwrap_err(),
            GraphError::NonCanonicalEdge { .. }
        ));
        assert!(matches!(
            Graph::from_edge_list(3, &[(1, 1)]).unwrap_err(),
            GraphError::NonCanonicalEdge { .. }
        ));
        assert!(matches!(
            Graph::from_edge_list(3, &[(0, 3)]).unwrap_err(),
            GraphError::VertexOutOfRange { .. }
        ));
        assert!(matches!(
            Graph::from_edge_list(3, &[(0, 1), (0, 1)]).unwrap_err(),
            GraphError::DuplicateEdge { .. }
        ));
    }

    #[test]
    fn adjacency_views_split_by_canonical_direction() {
        let g = Graph::from_edge_list(4, &[(0, 1), (0, 2), (1, 2), (2, 3)]).unwrap();
        let out: Vec<u32> = g.outgoing(2).map(|e| e.id).collect();
        let inc: Vec<u32> = g.incoming(2).map(|e| e.id).collect();
        assert_eq!(out, vec![3]);
        assert_eq!(inc, vec![1, 2]);
        assert_eq!(g.degree(2), 3);
        assert!(g.contains_edge(2, 0) && g.contains_edge(0, 2));
        assert!(!g.contains_edge(1, 3));
    }

    // Result<Graph, _> combinators like unwrap_err need Graph: Debug
    #[test]
    fn graph_is_debug_formattable() {
        let g = Graph::from_edge_list(2, &[(0, 1)]).unwrap();
        let s = format!("{:?}", g);
        assert!(s.contains("vertices") && s.contains("edges"));
        assert!(matches!(
            Graph::with_seed(2, 0),
            Err(GraphError::TooFewVertices { .. })
        ));
    }

    #[test]
    fn dump_lists_out_edges_per_vertex() {
        let g = Graph::from_edge_list(3, &[(0, 1), (0, 2)]).unwrap();
        let d = g.dump();
        assert!(d.contains("Vertex 0 E(0,0->1) E(1,0->2)"));
        assert!(d.contains("Vertex 2\n"));
    }
}
