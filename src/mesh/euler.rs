//! Topology-preserving edit operators.
//!
//! This module implements the Euler operators: the only code paths that
//! create or delete mesh elements. Each operator checks every precondition
//! before its first write, so a failed call leaves the mesh exactly as it
//! was, and each operator restores the full invariant set (see
//! [`HalfEdgeMesh::validate`]) before returning. In debug builds every
//! operator re-validates the whole mesh on exit.
//!
//! # Operators
//!
//! - [`create_triangle`](HalfEdgeMesh::create_triangle): seed an isolated
//!   triangle from payloads
//! - [`attach_triangle`](HalfEdgeMesh::attach_triangle): grow a triangle and
//!   a new vertex off a boundary half-edge
//! - [`close_triangle`](HalfEdgeMesh::close_triangle): connect two existing
//!   boundary edges with a closing edge and face
//! - [`split_face`](HalfEdgeMesh::split_face): insert a chord, splitting a
//!   face (or a hole) in two
//! - [`join_faces`](HalfEdgeMesh::join_faces): delete an interior edge,
//!   merging its two faces
//! - [`split_vertex`](HalfEdgeMesh::split_vertex): split a vertex in two,
//!   moving a fan of incoming half-edges onto the new vertex
//! - [`create_face`](HalfEdgeMesh::create_face): fill a boundary loop with a
//!   face

use super::halfedge::{Edge, Face, HalfEdge, HalfEdgeMesh, Vertex};
use super::index::{EdgeId, FaceId, HalfEdgeId, MeshIndex, VertexId};
use crate::error::{MeshError, Result};

impl<V, H, E, F, I> HalfEdgeMesh<V, H, E, F, I>
where
    H: Default,
    E: Default,
    I: MeshIndex,
{
    // ==================== Euler Operators ====================

    /// Create an isolated triangle from scratch.
    ///
    /// Vertex payloads are supplied in counter-clockwise order. The vertices
    /// and edges can be recovered from the returned face: the first vertex is
    /// the source of the face's representative half-edge, the second its
    /// target, the third the target of the following half-edge.
    ///
    /// This is the only operator that works on an empty mesh; it is how a
    /// mesh is seeded.
    pub fn create_triangle(&mut self, v1: V, v2: V, v3: V, face: F) -> FaceId<I> {
        let v1 = self.new_vertex(v1);
        let v2 = self.new_vertex(v2);

        let e12 = self.new_edge(v1, v2);
        let e21 = self.twin(e12);
        self.vertex_mut(v1).halfedge = e12;
        self.vertex_mut(v2).halfedge = e21;

        // Thread the pair into an isolated edge: a two-element ring. Not a
        // valid mesh on its own, but exactly the boundary the attach step
        // expects.
        self.halfedge_mut(e12).next = e21;
        self.halfedge_mut(e12).prev = e21;
        self.halfedge_mut(e21).next = e12;
        self.halfedge_mut(e21).prev = e12;

        let f = self.attach(v1, v2, e12, v3, face);

        self.debug_validate();
        f
    }

    /// Create a new triangle on the far side of the boundary between two
    /// existing vertices.
    ///
    /// `v1` and `v2` must be adjacent, and the half-edge from `v1` to `v2`
    /// must be a boundary half-edge. A new vertex (payload `vertex`) is
    /// created outside the boundary, and the boundary ring is re-threaded
    /// around the new face:
    ///
    /// ```text
    ///   \  /        /
    ///    \/        / old edge
    ///  v2 o <-----o v1
    ///      \ new /
    ///   new \ f / new edge
    ///  edge  \ /
    ///         o v3 (new vertex)
    /// ```
    ///
    /// # Errors
    ///
    /// [`MeshError::NotAdjacent`] if there is no half-edge from `v1` to `v2`;
    /// [`MeshError::FaceExists`] if that half-edge already has a face.
    pub fn attach_triangle(
        &mut self,
        v1: VertexId<I>,
        v2: VertexId<I>,
        vertex: V,
        face: F,
    ) -> Result<FaceId<I>> {
        let e12 = self
            .halfedge_between(v1, v2)
            .ok_or(MeshError::NotAdjacent)?;
        if self.face_of(e12).is_valid() {
            return Err(MeshError::FaceExists);
        }

        let f = self.attach(v1, v2, e12, vertex, face);

        self.debug_validate();
        Ok(f)
    }

    /// Create a new triangle in the boundary region to the left of `he`.
    ///
    /// Convenience form of [`attach_triangle`](Self::attach_triangle) taking
    /// the boundary half-edge directly.
    ///
    /// # Errors
    ///
    /// [`MeshError::NotBoundary`] if `he` already has a face.
    pub fn attach_triangle_at(
        &mut self,
        he: HalfEdgeId<I>,
        vertex: V,
        face: F,
    ) -> Result<FaceId<I>> {
        if !self.is_boundary_halfedge(he) {
            return Err(MeshError::NotBoundary);
        }
        let v1 = self.source(he);
        let v2 = self.target(he);

        let f = self.attach(v1, v2, he, vertex, face);

        self.debug_validate();
        Ok(f)
    }

    /// Close a triangle between three existing vertices by inserting the
    /// missing edge from `v1` to `v2`.
    ///
    /// The edges `v2`→`v3` and `v3`→`v1` must already exist as boundary
    /// half-edges; `v1` and `v2` must not yet be adjacent. The hole is split
    /// with a chord, producing the face `v1`→`v2`→`v3`:
    ///
    /// ```text
    ///   \  new edge
    ///  v2 o <-----o v1
    ///   /  \ new / \
    ///   old \ f / old edge
    ///  edge  \ /
    ///         o v3
    /// ```
    ///
    /// # Errors
    ///
    /// [`MeshError::NotAdjacent`] if either required edge is missing;
    /// [`MeshError::EdgeExists`] if `v1` and `v2` are already connected;
    /// [`MeshError::NotBoundary`] if a required edge has a face on the
    /// closing side.
    pub fn close_triangle(
        &mut self,
        v1: VertexId<I>,
        v2: VertexId<I>,
        v3: VertexId<I>,
        face: F,
    ) -> Result<FaceId<I>> {
        let e23 = self
            .halfedge_between(v2, v3)
            .ok_or(MeshError::NotAdjacent)?;
        let e31 = self
            .halfedge_between(v3, v1)
            .ok_or(MeshError::NotAdjacent)?;
        if self.halfedge_between(v1, v2).is_some() {
            return Err(MeshError::EdgeExists);
        }
        if self.face_of(e23).is_valid() || self.face_of(e31).is_valid() {
            return Err(MeshError::NotBoundary);
        }

        // Split the hole with the chord v1 -> v2; the new face lies on the
        // chord's left, which is the ring [chord, e23, e31].
        let he2 = self.prev(e23);
        let e12 = self.split_face(e31, he2, face)?;
        Ok(self.face_of(e12))
    }

    /// Insert an edge between the targets of `he1` and `he2`, splitting their
    /// shared face (or hole) in two.
    ///
    /// Returns the new half-edge from `he1`'s target to `he2`'s target; the
    /// newly created face lies on its left, and the original face (or hole)
    /// keeps the right side.
    ///
    /// ```text
    ///     v2    he2
    ///      o<--------o
    ///     /  ^  old   .
    ///    .     \ face .
    ///   . new f  \   /
    ///     o-------> o
    ///       he1      v1
    /// ```
    ///
    /// # Errors
    ///
    /// [`MeshError::DifferentFaces`] if the half-edges do not bound the same
    /// face (for hole rings: the same ring); [`MeshError::EdgeExists`] if the
    /// targets are already adjacent; [`MeshError::SelfLoop`] if the chord
    /// would connect a vertex to itself.
    pub fn split_face(
        &mut self,
        he1: HalfEdgeId<I>,
        he2: HalfEdgeId<I>,
        face: F,
    ) -> Result<HalfEdgeId<I>> {
        if he1 == he2 {
            return Err(MeshError::SelfLoop);
        }
        let old_face = self.face_of(he1);
        if old_face != self.face_of(he2) {
            return Err(MeshError::DifferentFaces);
        }
        if !old_face.is_valid() {
            // Hole rings all share the invalid face marker, so equality above
            // is not enough: require membership in the same ring.
            if !self.halfedge_ring(he1).any(|he| he == he2) {
                return Err(MeshError::DifferentFaces);
            }
        }

        let v1 = self.target(he1);
        let v2 = self.target(he2);
        if v1 == v2 {
            return Err(MeshError::SelfLoop);
        }
        if self.halfedge_between(v1, v2).is_some() {
            return Err(MeshError::EdgeExists);
        }

        let e12 = self.new_edge(v1, v2);
        let e21 = self.twin(e12);

        let he1_next = self.next(he1);
        let he2_next = self.next(he2);

        self.halfedge_mut(e21).next = he1_next;
        self.halfedge_mut(he1_next).prev = e21;
        self.halfedge_mut(he1).next = e12;
        self.halfedge_mut(e21).prev = he2;

        self.halfedge_mut(e12).next = he2_next;
        self.halfedge_mut(he2_next).prev = e12;
        self.halfedge_mut(he2).next = e21;
        self.halfedge_mut(e12).prev = he1;

        // The right side keeps the old face (or stays a hole).
        self.halfedge_mut(e21).face = old_face;
        self.fill_ring(e12, face);

        // The old face's representative may have landed on the new ring.
        if old_face.is_valid() && self.face_of(self.face(old_face).halfedge) != old_face {
            self.face_mut(old_face).halfedge = e21;
        }

        // Splitting a hole can turn a chord endpoint's boundary outgoing
        // half-edge into an interior one; restore the boundary-vertex
        // condition.
        self.fix_outgoing(v1);
        self.fix_outgoing(v2);

        self.debug_validate();
        Ok(e12)
    }

    /// Delete the edge under `he`, merging the face on its right into the
    /// face on its left. The inverse of [`split_face`](Self::split_face).
    ///
    /// Returns the surviving face (the one that was on `he`'s left). Note
    /// that deletion may displace element IDs: IDs are not stable across
    /// `join_faces`.
    ///
    /// # Errors
    ///
    /// [`MeshError::BoundaryEdge`] if either side of the edge has no face;
    /// [`MeshError::SelfJoin`] if both sides are the same face.
    pub fn join_faces(&mut self, he: HalfEdgeId<I>) -> Result<FaceId<I>> {
        if self.is_boundary_edge(he) {
            return Err(MeshError::BoundaryEdge);
        }
        let twin = self.twin(he);
        let keep = self.face_of(he);
        let dead = self.face_of(twin);
        if keep == dead {
            return Err(MeshError::SelfJoin);
        }

        let next = self.next(he);
        let prev = self.prev(he);
        let twin_next = self.next(twin);
        let twin_prev = self.prev(twin);
        let src = self.source(he);
        let tgt = self.target(he);
        let edge = self.edge_of(he);

        // The surviving face must not point at the disappearing half-edge.
        if self.face(keep).halfedge == he {
            self.face_mut(keep).halfedge = next;
        }

        // Absorb the ring on the twin's side. The twin itself is re-labeled
        // too, but it is deleted below.
        let absorbed: Vec<_> = self.halfedge_ring(twin).collect();
        for r in absorbed {
            self.halfedge_mut(r).face = keep;
        }

        // Vertices whose outgoing half-edge is about to disappear. `he` is
        // interior, so neither vertex is a boundary vertex here and any
        // surviving outgoing half-edge is a legal choice.
        if self.vertex(src).halfedge == he {
            self.vertex_mut(src).halfedge = twin_next;
        }
        if self.vertex(tgt).halfedge == twin {
            self.vertex_mut(tgt).halfedge = next;
        }

        // Unthread the dead pair from the combined ring.
        self.halfedge_mut(prev).next = twin_next;
        self.halfedge_mut(twin_next).prev = prev;
        self.halfedge_mut(twin_prev).next = next;
        self.halfedge_mut(next).prev = twin_prev;

        // Delete the face record on the twin's side, then the edge pair.
        // Swap-removal may relocate the surviving face's ID.
        let keep = if keep.index() == self.num_faces() - 1 {
            dead
        } else {
            keep
        };
        self.remove_face(dead);
        self.remove_edge(edge);

        self.debug_validate();
        Ok(keep)
    }

    /// Split the target vertex of `he1`/`he2` in two, inserting a new edge
    /// between the old vertex and the new one.
    ///
    /// `he1` and `he2` must both point at the same vertex `v2`. A new vertex
    /// `v1` (payload `vertex`) and a new edge `v1`↔`v2` are created, and the
    /// incoming half-edges of `v2` in the circular range `[he1, he2)` are
    /// retargeted to `v1`. Returns the new half-edge from `v1` to `v2`.
    ///
    /// In the degenerate case `he1 == he2` no half-edge changes target: the
    /// new vertex hangs inside `he1`'s face on an edge spur (the form used by
    /// Catmull-Clark-style refinement). That case requires `he1` not be a
    /// boundary half-edge.
    ///
    /// # Errors
    ///
    /// [`MeshError::TargetMismatch`] if the half-edges point at different
    /// vertices; [`MeshError::DegenerateBoundary`] for the degenerate case on
    /// a boundary half-edge.
    pub fn split_vertex(
        &mut self,
        he1: HalfEdgeId<I>,
        he2: HalfEdgeId<I>,
        vertex: V,
    ) -> Result<HalfEdgeId<I>> {
        let v2 = self.target(he1);
        if self.target(he2) != v2 {
            return Err(MeshError::TargetMismatch);
        }
        if he1 == he2 && self.is_boundary_halfedge(he1) {
            return Err(MeshError::DegenerateBoundary);
        }

        // Collect the fan to move while the rings are still intact. Walking
        // from he1 against the rotation keeps the moved fan closed under the
        // ring links once he1's own next is redirected onto the new edge.
        let mut moved = Vec::new();
        if he1 != he2 {
            let mut current = he1;
            loop {
                moved.push(current);
                current = self.prev_at_target(current);
                if current == he2 {
                    break;
                }
            }
        }

        let v1 = self.new_vertex(vertex);
        let e12 = self.new_edge(v1, v2);
        let e21 = self.twin(e12);

        self.vertex_mut(v1).halfedge = e12;

        let f1 = self.face_of(he1);
        let f2 = self.face_of(he2);

        // Splice e12 after he1, then e21 after he2. For the degenerate case
        // the second splice reads the links the first one wrote, which
        // threads the spur correctly.
        let he1_next = self.next(he1);
        self.halfedge_mut(e12).next = he1_next;
        self.halfedge_mut(he1_next).prev = e12;
        self.halfedge_mut(he1).next = e12;
        self.halfedge_mut(e12).prev = he1;

        let he2_next = self.next(he2);
        self.halfedge_mut(e21).next = he2_next;
        self.halfedge_mut(he2_next).prev = e21;
        self.halfedge_mut(he2).next = e21;
        self.halfedge_mut(e21).prev = he2;

        self.halfedge_mut(e12).face = f1;
        self.halfedge_mut(e21).face = f2;

        for he in moved {
            self.halfedge_mut(he).target = v1;
        }

        // v2's stored outgoing may have moved to v1 along with the fan.
        if self.source(self.vertex(v2).halfedge) != v2 {
            self.vertex_mut(v2).halfedge = e21;
        }
        self.fix_outgoing(v1);
        self.fix_outgoing(v2);

        self.debug_validate();
        Ok(e12)
    }

    /// Fill the boundary loop through `he` with a new face.
    ///
    /// Every half-edge on the ring becomes a bounding half-edge of the new
    /// face. Used to close the last hole of a solid, e.g. the fourth face of
    /// a tetrahedron.
    ///
    /// # Errors
    ///
    /// [`MeshError::FaceExists`] if `he` already has a face.
    pub fn create_face(&mut self, he: HalfEdgeId<I>, face: F) -> Result<FaceId<I>> {
        if self.face_of(he).is_valid() {
            return Err(MeshError::FaceExists);
        }

        let f = self.fill_ring(he, face);

        self.debug_validate();
        Ok(f)
    }

    // ==================== Private creation and deletion ====================

    /// Append a vertex with no connectivity. Callers must wire `halfedge`
    /// before the enclosing operator returns.
    fn new_vertex(&mut self, data: V) -> VertexId<I> {
        let id = VertexId::new(self.vertices.len());
        self.vertices.push(Vertex::new(data));
        id
    }

    /// Create an edge record and its twin pair from `source` to `target`,
    /// returning the half-edge pointing at `target`. The pair's `next`/`prev`
    /// links and faces are left unset; the enclosing operator threads them.
    fn new_edge(&mut self, source: VertexId<I>, target: VertexId<I>) -> HalfEdgeId<I> {
        let h1 = HalfEdgeId::new(self.halfedges.len());
        self.halfedges.push(HalfEdge::new(H::default(), target));
        let h2 = HalfEdgeId::new(self.halfedges.len());
        self.halfedges.push(HalfEdge::new(H::default(), source));

        self.halfedge_mut(h1).twin = h2;
        self.halfedge_mut(h2).twin = h1;

        let e = EdgeId::new(self.edges.len());
        self.edges.push(Edge::new(E::default(), h1));
        self.halfedge_mut(h1).edge = e;
        self.halfedge_mut(h2).edge = e;

        h1
    }

    /// Create a face over the ring through `he`, claiming every ring member.
    fn fill_ring(&mut self, he: HalfEdgeId<I>, data: F) -> FaceId<I> {
        let f = FaceId::new(self.faces.len());
        self.faces.push(Face::new(data, he));
        let ring: Vec<_> = self.halfedge_ring(he).collect();
        for r in ring {
            self.halfedge_mut(r).face = f;
        }
        f
    }

    /// Shared tail of the triangle constructors: given the boundary half-edge
    /// `e12` from `v1` to `v2`, build a new vertex and two new edges forming
    /// a triangle on `e12`'s side, and re-thread the surrounding boundary.
    fn attach(
        &mut self,
        v1: VertexId<I>,
        v2: VertexId<I>,
        e12: HalfEdgeId<I>,
        vertex: V,
        face: F,
    ) -> FaceId<I> {
        let v3 = self.new_vertex(vertex);

        let e23 = self.new_edge(v2, v3);
        let e32 = self.twin(e23);
        let e31 = self.new_edge(v3, v1);
        let e13 = self.twin(e31);

        // The new vertex sits on the boundary; e32 is its boundary outgoing.
        // v1's outgoing moves to e13 to keep the boundary-vertex condition.
        self.vertex_mut(v3).halfedge = e32;
        self.vertex_mut(v1).halfedge = e13;

        // Swap the new corner into the boundary ring where e12 used to run.
        let old_next = self.next(e12);
        let old_prev = self.prev(e12);
        self.halfedge_mut(e32).next = old_next;
        self.halfedge_mut(e13).prev = old_prev;
        self.halfedge_mut(old_prev).next = e13;
        self.halfedge_mut(old_next).prev = e32;

        self.halfedge_mut(e12).next = e23;
        self.halfedge_mut(e12).prev = e31;

        self.halfedge_mut(e32).prev = e13;
        self.halfedge_mut(e13).next = e32;

        self.halfedge_mut(e23).prev = e12;
        self.halfedge_mut(e23).next = e31;

        self.halfedge_mut(e31).prev = e23;
        self.halfedge_mut(e31).next = e12;

        self.fill_ring(e12, face)
    }

    /// Re-point `v`'s outgoing half-edge at a boundary half-edge if its
    /// outgoing ring contains one.
    fn fix_outgoing(&mut self, v: VertexId<I>) {
        let start = self.vertex(v).halfedge;
        let mut current = start;
        loop {
            if self.is_boundary_halfedge(current) {
                self.vertex_mut(v).halfedge = current;
                return;
            }
            current = self.next(self.twin(current));
            if current == start {
                return;
            }
        }
    }

    /// Swap-remove a half-edge that has already been unthreaded, patching
    /// every reference to the element displaced from the end of the arena.
    fn remove_halfedge(&mut self, he: HalfEdgeId<I>) {
        let last = self.halfedges.len() - 1;
        let idx = he.index();
        self.halfedges.swap_remove(idx);
        if idx == last {
            return;
        }

        let old = HalfEdgeId::new(last);
        let new = HalfEdgeId::new(idx);
        let moved_twin = self.halfedges[idx].twin;
        let moved_next = self.halfedges[idx].next;
        let moved_prev = self.halfedges[idx].prev;
        let moved_edge = self.halfedges[idx].edge;
        let moved_face = self.halfedges[idx].face;

        self.halfedge_mut(moved_twin).twin = new;
        self.halfedge_mut(moved_prev).next = new;
        self.halfedge_mut(moved_next).prev = new;
        if self.edge(moved_edge).half == old {
            self.edge_mut(moved_edge).half = new;
        }
        if moved_face.is_valid() && self.face(moved_face).halfedge == old {
            self.face_mut(moved_face).halfedge = new;
        }
        let moved_source = self.target(moved_twin);
        if self.vertex(moved_source).halfedge == old {
            self.vertex_mut(moved_source).halfedge = new;
        }
    }

    /// Delete an edge record and both of its half-edges. The half-edges must
    /// already be unthreaded from all rings.
    fn remove_edge(&mut self, e: EdgeId<I>) {
        let h1 = self.edge(e).half;
        let h2 = self.twin(h1);
        // Remove the higher slot first so the lower one is not displaced.
        let (lo, hi) = if h1.index() < h2.index() {
            (h1, h2)
        } else {
            (h2, h1)
        };
        self.remove_halfedge(hi);
        self.remove_halfedge(lo);

        let last = self.edges.len() - 1;
        let idx = e.index();
        self.edges.swap_remove(idx);
        if idx != last {
            let half = self.edges[idx].half;
            let twin = self.twin(half);
            self.halfedge_mut(half).edge = EdgeId::new(idx);
            self.halfedge_mut(twin).edge = EdgeId::new(idx);
        }
    }

    /// Delete a face record whose ring has already been re-labeled.
    fn remove_face(&mut self, f: FaceId<I>) {
        let last = self.faces.len() - 1;
        let idx = f.index();
        self.faces.swap_remove(idx);
        if idx != last {
            let ring: Vec<_> = self.halfedge_ring(self.faces[idx].halfedge).collect();
            for he in ring {
                self.halfedge_mut(he).face = FaceId::new(idx);
            }
        }
    }
}
