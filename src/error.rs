//! Error types for hedgerow.
//!
//! This module defines all error types used throughout the library.
//!
//! Every mutating mesh operator checks its preconditions before touching the
//! mesh, so each variant below reports a caller mistake, not a half-applied
//! edit. None of these conditions are transient; retrying never helps.

use thiserror::Error;

/// Result type alias using [`MeshError`].
pub type Result<T> = std::result::Result<T, MeshError>;

/// Errors that can occur during mesh operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// The required vertices are not connected by a half-edge.
    #[error("vertices are not connected by the expected half-edge")]
    NotAdjacent,

    /// An edge between the given vertices already exists.
    #[error("an edge between the given vertices already exists")]
    EdgeExists,

    /// The half-edge already has a face on its left.
    #[error("half-edge already has a face")]
    FaceExists,

    /// The half-edge was expected to be a boundary (face-free) half-edge.
    #[error("half-edge must be a boundary half-edge")]
    NotBoundary,

    /// The two half-edges must bound the same face.
    #[error("half-edges must bound the same face")]
    DifferentFaces,

    /// The operation would create a self-loop (an edge from a vertex to itself).
    #[error("operation would create a self-loop")]
    SelfLoop,

    /// The edge has no face on one side, so there are not two faces to join.
    #[error("cannot join across a boundary edge")]
    BoundaryEdge,

    /// Joining would merge a face with itself.
    #[error("cannot join a face to itself")]
    SelfJoin,

    /// The two half-edges do not share the required target vertex.
    #[error("half-edge targets must be the same vertex")]
    TargetMismatch,

    /// The degenerate vertex-split was requested on a boundary half-edge.
    #[error("degenerate vertex split requires a non-boundary half-edge")]
    DegenerateBoundary,

    /// The ring does not have exactly three half-edges.
    #[error("ring has {len} half-edges, expected 3")]
    NonTriangularRing {
        /// Number of half-edges found in the ring.
        len: usize,
    },

    /// The mesh has no faces.
    #[error("mesh has no faces")]
    EmptyMesh,

    /// A face references an invalid vertex index.
    #[error("face {face} references invalid vertex index {vertex}")]
    InvalidVertexIndex {
        /// The face index.
        face: usize,
        /// The invalid vertex index.
        vertex: usize,
    },

    /// A face has duplicate vertex indices (degenerate triangle).
    #[error("face {face} is degenerate (has duplicate vertices)")]
    DegenerateFace {
        /// The face index.
        face: usize,
    },

    /// The face list cannot be assembled by the incremental operators.
    #[error("faces cannot be assembled into a single manifold component ({remaining} unplaced)")]
    Unbuildable {
        /// Number of faces that could not be placed.
        remaining: usize,
    },

    /// An internal connectivity invariant does not hold.
    ///
    /// This indicates a bug in the mesh engine itself, not caller misuse.
    #[error("mesh connectivity is corrupt: {0}")]
    Corrupt(String),
}
