//! Core mesh data structures and topology operators.
//!
//! The primary type is [`HalfEdgeMesh`], a half-edge (doubly-connected edge
//! list) representation with a caller-chosen payload on every element kind.
//! All topology edits go through the Euler operators (see
//! [`euler`](self::euler)), each of which preserves the full connectivity
//! invariant set or fails without touching the mesh.
//!
//! # Index Types
//!
//! Mesh elements are identified by type-safe index wrappers:
//! - [`VertexId`] - Identifies a vertex
//! - [`HalfEdgeId`] - Identifies a half-edge
//! - [`EdgeId`] - Identifies a full edge
//! - [`FaceId`] - Identifies a face
//!
//! These indices are generic over the underlying integer type ([`MeshIndex`]
//! trait), allowing you to choose `u16`, `u32`, or `u64` based on mesh size.
//!
//! # Construction
//!
//! Meshes are grown one operator at a time, or assembled from face-vertex
//! lists:
//!
//! ```
//! use hedgerow::mesh::{build_from_triangles, TriangleMesh};
//! use nalgebra::Point2;
//!
//! let vertices = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(0.5, 1.0),
//! ];
//! let faces = vec![[0, 1, 2]];
//!
//! let mesh: TriangleMesh<Point2<f64>> = build_from_triangles(&vertices, &faces).unwrap();
//! assert_eq!(mesh.num_faces(), 1);
//! ```

mod builder;
mod euler;
mod halfedge;
mod index;
mod triangle;

pub use builder::{build_from_triangles, to_face_vertex};
pub use halfedge::{
    Edge, Face, HalfEdge, HalfEdgeMesh, RingIter, Vertex, VertexHalfEdgeIter, VertexIncomingIter,
};
pub use index::{EdgeId, FaceId, HalfEdgeId, MeshIndex, VertexId};
pub use triangle::TriangleMesh;
