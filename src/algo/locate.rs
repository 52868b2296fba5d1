//! Point location by walking the mesh.
//!
//! Given a triangulated, convex, single-component mesh, [`TriangleMesh::locate`]
//! classifies a query point as lying on a vertex, on an edge, inside a face,
//! or outside the mesh, by walking from face to face.
//!
//! Each step classifies the query against one half-edge with the adaptive
//! orientation predicate — never the fast one, since a single wrong sign
//! would walk the query into the wrong cell:
//!
//! - `Left`/`Behind`: the point is not beyond this edge; continue around the
//!   current face. A full circuit means every edge kept it to the left, so
//!   the point is inside the face.
//! - `Right`/`Infront`: the point is beyond this edge. Cross to the face on
//!   the other side and continue there; if there is no face beyond, the
//!   mesh is convex, so the point is outside.
//! - `Inside`, `Source`, `Target`: the point sits exactly on the edge or on
//!   one of its endpoints.
//!
//! The walk assumes, and does not verify, that the mesh is a single convex
//! component of well-formed triangles; behavior on other meshes is
//! unspecified.

use crate::geometry::Coords2;
use crate::mesh::{FaceId, HalfEdgeId, HalfEdgeMesh, MeshIndex, TriangleMesh, VertexId};
use crate::predicates::orient2d;

/// Where a query point lies relative to one directed half-edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HalfedgeLocation {
    /// The point is the source vertex of the half-edge.
    Source,
    /// The point is the target vertex of the half-edge.
    Target,
    /// The point is an internal point of the half-edge.
    Inside,
    /// The point is to the left of the half-edge.
    Left,
    /// The point is to the right of the half-edge.
    Right,
    /// The point is in line with the half-edge, beyond its source.
    Behind,
    /// The point is in line with the half-edge, beyond its target.
    Infront,
}

/// Result of a successful point location: the element the point lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location<I: MeshIndex = u32> {
    /// The point coincides with a vertex.
    Vertex(VertexId<I>),
    /// The point lies on the interior of an edge; the half-edge is the one
    /// the walk approached it with.
    Edge(HalfEdgeId<I>),
    /// The point lies strictly inside a face.
    Face(FaceId<I>),
}

impl<V, H, E, F, I> HalfEdgeMesh<V, H, E, F, I>
where
    V: Coords2,
    I: MeshIndex,
{
    /// Classify a query point against one half-edge.
    pub fn classify_point(&self, he: HalfEdgeId<I>, point: &impl Coords2) -> HalfedgeLocation {
        let source = self.vertex(self.source(he)).data.coords();
        let target = self.vertex(self.target(he)).data.coords();
        classify_segment_point(source, target, [point.x(), point.y()])
    }
}

/// Classify `test` against the directed segment `source` → `target`.
///
/// The segment must not be degenerate. Collinear points are ordered along
/// the segment's dominant axis; the predicate has already certified exact
/// collinearity, so plain coordinate comparisons are enough.
fn classify_segment_point(source: [f64; 2], target: [f64; 2], test: [f64; 2]) -> HalfedgeLocation {
    debug_assert!(
        source[0] != target[0] || source[1] != target[1],
        "degenerate half-edge"
    );

    let orient = orient2d(source, target, test);
    if orient > 0.0 {
        return HalfedgeLocation::Left;
    }
    if orient < 0.0 {
        return HalfedgeLocation::Right;
    }

    // In line with the half-edge; classify where exactly.
    if test == source {
        return HalfedgeLocation::Source;
    }
    if test == target {
        return HalfedgeLocation::Target;
    }
    if target[0] > source[0] {
        if test[0] > target[0] {
            HalfedgeLocation::Infront
        } else if test[0] < source[0] {
            HalfedgeLocation::Behind
        } else {
            HalfedgeLocation::Inside
        }
    } else if target[0] < source[0] {
        if test[0] < target[0] {
            HalfedgeLocation::Infront
        } else if test[0] > source[0] {
            HalfedgeLocation::Behind
        } else {
            HalfedgeLocation::Inside
        }
    } else if target[1] > source[1] {
        if test[1] > target[1] {
            HalfedgeLocation::Infront
        } else if test[1] < source[1] {
            HalfedgeLocation::Behind
        } else {
            HalfedgeLocation::Inside
        }
    } else {
        if test[1] < target[1] {
            HalfedgeLocation::Infront
        } else if test[1] > source[1] {
            HalfedgeLocation::Behind
        } else {
            HalfedgeLocation::Inside
        }
    }
}

impl<V, H, E, F, I> TriangleMesh<V, H, E, F, I>
where
    V: Coords2,
    I: MeshIndex,
{
    /// Find the element at a query point, or `None` if the point lies
    /// outside the mesh.
    ///
    /// Walks from the first face toward the query, crossing an edge whenever
    /// the point is on its far side. On a convex triangulated mesh the walk
    /// terminates at the containing face, edge, or vertex, or exits through
    /// a boundary edge.
    pub fn locate(&self, point: &impl Coords2) -> Option<Location<I>> {
        if self.num_faces() == 0 {
            return None;
        }

        let start_face = FaceId::new(0);
        let mut start = self.face(start_face).halfedge;
        let mut current = start;
        loop {
            match self.classify_point(current, point) {
                HalfedgeLocation::Inside => return Some(Location::Edge(current)),
                HalfedgeLocation::Source => {
                    return Some(Location::Vertex(self.source(current)))
                }
                HalfedgeLocation::Target => {
                    return Some(Location::Vertex(self.target(current)))
                }
                HalfedgeLocation::Left | HalfedgeLocation::Behind => {
                    current = self.next(current);
                    if current == start {
                        return Some(Location::Face(self.face_of(start)));
                    }
                }
                HalfedgeLocation::Right | HalfedgeLocation::Infront => {
                    let twin = self.twin(current);
                    if self.is_boundary_halfedge(twin) {
                        // The mesh is convex, so beyond a boundary edge
                        // means outside the mesh.
                        return None;
                    }
                    // Cross into the adjacent face. The query is to the
                    // twin's left, so the circuit restarts past it.
                    start = twin;
                    current = self.next(twin);
                }
            }
        }
    }
}
