//! # Hedgerow
//!
//! A half-edge mesh kernel with topology-preserving edit operators and
//! adaptive-precision geometric predicates.
//!
//! Hedgerow provides a half-edge (doubly-connected edge list) data structure
//! whose every edit goes through Euler operators — local, invariant-
//! preserving transitions that either succeed atomically or fail without
//! touching the mesh — plus a robust 2D orientation predicate and a point
//! location walk built on it.
//!
//! ## Features
//!
//! - **Half-edge data structure**: O(1) adjacency queries with type-safe
//!   indices and a caller-chosen payload on every element kind
//! - **Euler operators**: create/attach/close triangles, split and join
//!   faces, split vertices, fill boundary loops — with every connectivity
//!   invariant re-checked in debug builds
//! - **Robust predicates**: fast, exact, and adaptive 2D orientation tests
//!   that return the correct sign even under catastrophic cancellation
//! - **Point location**: face-walking queries on convex triangulations
//! - **Flexible indexing**: 16-bit, 32-bit, and 64-bit indices
//!
//! ## Quick Start
//!
//! ```
//! use hedgerow::prelude::*;
//! use nalgebra::Point2;
//!
//! // Seed a triangle, growing the mesh through the operators.
//! let mut mesh: TriangleMesh<Point2<f64>> = TriangleMesh::new();
//! let face = mesh.create_triangle(
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(1.0, 1.0),
//!     (),
//! );
//!
//! // Recover the vertices from the face and keep building.
//! let [v1, v2, v3] = mesh.face_triangle(face);
//! mesh.attach_triangle(v2, v1, Point2::new(0.5, -1.0), ()).unwrap();
//!
//! // Query the result.
//! assert_eq!(mesh.num_faces(), 2);
//! match mesh.locate(&Point2::new(0.8, 0.3)) {
//!     Some(Location::Face(f)) => assert_eq!(f, face),
//!     other => panic!("unexpected location {:?}", other),
//! }
//! # let _ = v3;
//! ```
//!
//! ## Building From Face Lists
//!
//! ```
//! use hedgerow::prelude::*;
//! use nalgebra::Point2;
//!
//! let vertices = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(0.0, 1.0),
//! ];
//! let faces = vec![[0, 1, 2], [0, 2, 3]];
//!
//! let mesh: TriangleMesh<Point2<f64>> = build_from_triangles(&vertices, &faces).unwrap();
//! assert_eq!(mesh.num_vertices(), 4);
//! assert_eq!(mesh.num_faces(), 2);
//! ```
//!
//! ## Robust Orientation
//!
//! ```
//! use hedgerow::predicates::{orient2d, orient2d_fast};
//!
//! // A point microscopically above a hugely skewed line: the fast test is
//! // allowed to get this wrong, the adaptive one is not.
//! let a = [0.0, 0.0];
//! let b = [1.0, 0.0];
//! let c = [1e50, 1e-80];
//! assert!(orient2d(a, b, c) > 0.0);
//! let _ = orient2d_fast(a, b, c); // sign not trustworthy here
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod error;
pub mod geometry;
pub mod mesh;
pub mod predicates;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions:
///
/// ```
/// use hedgerow::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algo::locate::{HalfedgeLocation, Location};
    pub use crate::error::{MeshError, Result};
    pub use crate::geometry::{Coords2, Coords3, CoordsMut};
    pub use crate::mesh::{
        build_from_triangles, to_face_vertex, Edge, EdgeId, Face, FaceId, HalfEdge, HalfEdgeId,
        HalfEdgeMesh, MeshIndex, TriangleMesh, Vertex, VertexId,
    };
    pub use crate::predicates::orient2d;
}

// Re-export nalgebra types for convenience
pub use nalgebra;

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use nalgebra::Point2;

    #[test]
    fn test_grow_locate_join() {
        // Square from two triangles, built through the operators.
        let vertices = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ];
        let faces = vec![[0, 1, 2], [0, 2, 3]];
        let mut mesh: TriangleMesh<Point2<f64>> =
            build_from_triangles(&vertices, &faces).unwrap();

        assert_eq!(mesh.num_vertices(), 4);
        assert_eq!(mesh.num_faces(), 2);
        assert!(mesh.validate().is_ok());

        // Each corner of the square locates to a vertex, the center to the
        // diagonal, and a point outside to nothing.
        assert!(matches!(
            mesh.locate(&Point2::new(0.0, 1.0)),
            Some(Location::Vertex(_))
        ));
        assert!(matches!(
            mesh.locate(&Point2::new(0.5, 0.5)),
            Some(Location::Edge(_))
        ));
        assert_eq!(mesh.locate(&Point2::new(1.5, 1.5)), None);

        // Joining away the diagonal leaves one quad face.
        let diagonal = mesh
            .edge_ids()
            .find(|&e| !mesh.edge_is_boundary(e))
            .unwrap();
        let he = mesh.edge(diagonal).half;
        mesh.inner_mut().join_faces(he).unwrap();
        assert_eq!(mesh.num_faces(), 1);
        assert_eq!(mesh.num_edges(), 4);
        assert!(mesh.validate().is_ok());
    }
}
