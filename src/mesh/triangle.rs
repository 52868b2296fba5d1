//! Triangle-constrained mesh wrapper.
//!
//! [`TriangleMesh`] restricts the edit surface of [`HalfEdgeMesh`] to the
//! operators that keep every face a triangle, so algorithms built on top of
//! it (point location, refinement) may assume three-sided faces throughout.
//! The full read surface of the underlying mesh is available through `Deref`.
//!
//! The constraint is a policy, not a proof: the wrapper re-checks it with a
//! debug assertion after every edit, and an escape hatch
//! ([`inner_mut`](TriangleMesh::inner_mut)) exists for callers that need the
//! unconstrained operators and accept responsibility for restoring the
//! constraint.

use std::ops::Deref;

use super::halfedge::HalfEdgeMesh;
use super::index::{EdgeId, FaceId, HalfEdgeId, MeshIndex, VertexId};
use crate::error::{MeshError, Result};

/// A half-edge mesh whose faces are all triangles.
#[derive(Debug, Clone)]
pub struct TriangleMesh<V = (), H = (), E = (), F = (), I: MeshIndex = u32> {
    mesh: HalfEdgeMesh<V, H, E, F, I>,
}

impl<V, H, E, F, I: MeshIndex> Default for TriangleMesh<V, H, E, F, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, H, E, F, I: MeshIndex> Deref for TriangleMesh<V, H, E, F, I> {
    type Target = HalfEdgeMesh<V, H, E, F, I>;

    fn deref(&self) -> &Self::Target {
        &self.mesh
    }
}

impl<V, H, E, F, I: MeshIndex> TriangleMesh<V, H, E, F, I> {
    /// Create a new empty triangle mesh.
    pub fn new() -> Self {
        Self {
            mesh: HalfEdgeMesh::new(),
        }
    }

    /// Create a triangle mesh with pre-allocated capacity.
    pub fn with_capacity(num_vertices: usize, num_faces: usize) -> Self {
        Self {
            mesh: HalfEdgeMesh::with_capacity(num_vertices, num_faces),
        }
    }

    /// Wrap an existing mesh, verifying that every face is a triangle.
    ///
    /// # Errors
    ///
    /// [`MeshError::NonTriangularRing`] naming the offending ring length.
    pub fn try_from_mesh(mesh: HalfEdgeMesh<V, H, E, F, I>) -> Result<Self> {
        for f in mesh.face_ids() {
            let len = mesh.face_halfedges(f).count();
            if len != 3 {
                return Err(MeshError::NonTriangularRing { len });
            }
        }
        Ok(Self { mesh })
    }

    /// Consume the wrapper, releasing the unconstrained mesh.
    pub fn into_inner(self) -> HalfEdgeMesh<V, H, E, F, I> {
        self.mesh
    }

    /// Mutable access to the unconstrained mesh.
    ///
    /// The caller takes over the all-triangles guarantee until the borrow
    /// ends; algorithms relying on the wrapper's constraint misbehave on
    /// meshes where it no longer holds.
    pub fn inner_mut(&mut self) -> &mut HalfEdgeMesh<V, H, E, F, I> {
        &mut self.mesh
    }

    /// Whether the edge may be flipped: interior edges only.
    ///
    /// The flip itself is not provided; this is the precondition shared by
    /// flip-based algorithms layered on top.
    pub fn can_flip_edge(&self, e: EdgeId<I>) -> bool {
        !self.mesh.edge_is_boundary(e)
    }

    #[inline]
    fn debug_assert_triangular(&self) {
        #[cfg(debug_assertions)]
        for f in self.mesh.face_ids() {
            let len = self.mesh.face_halfedges(f).count();
            debug_assert!(len == 3, "face {:?} has ring length {}", f, len);
        }
    }
}

impl<V, H, E, F, I> TriangleMesh<V, H, E, F, I>
where
    H: Default,
    E: Default,
    I: MeshIndex,
{
    /// Seed an isolated triangle. See [`HalfEdgeMesh::create_triangle`].
    pub fn create_triangle(&mut self, v1: V, v2: V, v3: V, face: F) -> FaceId<I> {
        let f = self.mesh.create_triangle(v1, v2, v3, face);
        self.debug_assert_triangular();
        f
    }

    /// Grow a triangle and a new vertex off the boundary between two
    /// vertices. See [`HalfEdgeMesh::attach_triangle`].
    pub fn attach_triangle(
        &mut self,
        v1: VertexId<I>,
        v2: VertexId<I>,
        vertex: V,
        face: F,
    ) -> Result<FaceId<I>> {
        let f = self.mesh.attach_triangle(v1, v2, vertex, face)?;
        self.debug_assert_triangular();
        Ok(f)
    }

    /// Grow a triangle on the far side of a boundary half-edge. See
    /// [`HalfEdgeMesh::attach_triangle_at`].
    pub fn attach_triangle_at(
        &mut self,
        he: HalfEdgeId<I>,
        vertex: V,
        face: F,
    ) -> Result<FaceId<I>> {
        let f = self.mesh.attach_triangle_at(he, vertex, face)?;
        self.debug_assert_triangular();
        Ok(f)
    }

    /// Close a triangle between three existing vertices. See
    /// [`HalfEdgeMesh::close_triangle`].
    pub fn close_triangle(
        &mut self,
        v1: VertexId<I>,
        v2: VertexId<I>,
        v3: VertexId<I>,
        face: F,
    ) -> Result<FaceId<I>> {
        let f = self.mesh.close_triangle(v1, v2, v3, face)?;
        self.debug_assert_triangular();
        Ok(f)
    }

    /// Fill a three-sided boundary loop with a face.
    ///
    /// # Errors
    ///
    /// [`MeshError::NonTriangularRing`] if the loop through `he` does not
    /// have exactly three half-edges; [`MeshError::FaceExists`] if `he`
    /// already has a face.
    pub fn fill_triangle(&mut self, he: HalfEdgeId<I>, face: F) -> Result<FaceId<I>> {
        let len = self.mesh.halfedge_ring(he).count();
        if len != 3 {
            return Err(MeshError::NonTriangularRing { len });
        }
        let f = self.mesh.create_face(he, face)?;
        self.debug_assert_triangular();
        Ok(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TriMesh = TriangleMesh<&'static str, (), (), &'static str>;

    fn two_triangles() -> TriMesh {
        let mut mesh = TriMesh::new();
        let f1 = mesh.create_triangle("v1", "v2", "v3", "f1");
        let [v1, _, v3] = mesh.face_triangle(f1);
        mesh.attach_triangle(v1, v3, "v4", "f2").unwrap();
        mesh
    }

    #[test]
    fn test_can_flip_edge() {
        let mesh = two_triangles();

        let mut interior = 0;
        let mut boundary = 0;
        for e in mesh.edge_ids() {
            if mesh.can_flip_edge(e) {
                interior += 1;
            } else {
                boundary += 1;
                assert!(mesh.edge_is_boundary(e));
            }
        }
        // The shared diagonal is the only flippable edge.
        assert_eq!(interior, 1);
        assert_eq!(boundary, 4);
    }

    #[test]
    fn test_fill_triangle_rejects_long_rings() {
        let mut mesh = two_triangles();
        let boundary = mesh
            .halfedge_ids()
            .find(|&he| mesh.is_boundary_halfedge(he))
            .unwrap();
        // The outer boundary of two adjoined triangles is a 4-ring.
        assert_eq!(
            mesh.fill_triangle(boundary, "f"),
            Err(MeshError::NonTriangularRing { len: 4 })
        );
    }

    #[test]
    fn test_fill_triangle_closes_tetrahedron() {
        let mut mesh = TriMesh::new();
        let face = mesh.create_triangle("v1", "v2", "v3", "f1");
        let bounding = mesh.face(face).halfedge;
        let v1 = mesh.source(bounding);
        let v2 = mesh.target(bounding);
        let v3 = mesh.target(mesh.next(bounding));

        let face2 = mesh.attach_triangle(v2, v1, "v4", "f2").unwrap();
        let v4 = mesh.target(mesh.next(mesh.face(face2).halfedge));
        let e24 = mesh.twin(mesh.halfedge_between(v4, v2).unwrap());
        mesh.close_triangle(v3, v4, v1, "f3").unwrap();
        mesh.fill_triangle(e24, "f4").unwrap();

        assert_eq!(mesh.num_faces(), 4);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_try_from_mesh() {
        let mut inner: crate::mesh::HalfEdgeMesh<&'static str, (), (), &'static str> =
            crate::mesh::HalfEdgeMesh::new();
        let f1 = inner.create_triangle("v1", "v2", "v3", "f1");
        let [v1, _, v3] = inner.face_triangle(f1);
        inner.attach_triangle(v1, v3, "v4", "f2").unwrap();

        // Two triangles wrap fine.
        let wrapped = TriangleMesh::try_from_mesh(inner.clone()).unwrap();
        assert_eq!(wrapped.num_faces(), 2);

        // A joined quad does not.
        let shared = inner.halfedge_between(v3, v1).unwrap();
        inner.join_faces(shared).unwrap();
        assert_eq!(
            TriangleMesh::try_from_mesh(inner).err(),
            Some(MeshError::NonTriangularRing { len: 4 })
        );
    }
}
