use thiserror::Error;

/// Errors from graph construction. Generation is deterministic for a given
/// seed, so every variant that can fire mid-pipeline carries the seed and
/// requested size needed to reproduce it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("requested {requested} vertices, minimum is {min}")]
    TooFewVertices { requested: u32, min: u32 },

    #[error(
        "requested {requested} vertices needs {lines_needed} distinct-slope lines, pool has {pool_size}"
    )]
    SlopePoolExhausted {
        requested: u32,
        lines_needed: u32,
        pool_size: u32,
    },

    #[error(
        "fold would create a self-loop (seed={seed}, requested={requested}, vertices left={vertices_left})"
    )]
    SelfLoopFold {
        seed: u64,
        requested: u32,
        vertices_left: u32,
    },

    #[error("no foldable vertex pair remains (seed={seed}, requested={requested})")]
    NoFoldablePair { seed: u64, requested: u32 },

    #[error("edge references vertex {id}, graph has {count} vertices")]
    VertexOutOfRange { id: u32, count: u32 },

    #[error("edge ({from}, {to}) is not in canonical from < to order")]
    NonCanonicalEdge { from: u32, to: u32 },

    #[error("duplicate edge ({from}, {to})")]
    DuplicateEdge { from: u32, to: u32 },
}
