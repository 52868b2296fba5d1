//! Half-edge mesh data structure.
//!
//! This module provides a half-edge (doubly-connected edge list) representation
//! for polygonal meshes. This structure enables O(1) adjacency queries and is
//! the foundation for the topology operators and geometry algorithms in this
//! crate.
//!
//! # Structure
//!
//! - Each edge is split into two **half-edges** pointing in opposite directions
//! - Each half-edge knows its **twin** (opposite half-edge), **next** and
//!   **prev** (the cycle of half-edges around its face), **target vertex**,
//!   incident **face**, and owning **edge** record
//! - Each vertex stores one outgoing half-edge
//! - Each edge stores one of its two half-edges
//! - Each face stores one half-edge on its boundary
//!
//! # Payloads
//!
//! Every element kind carries a caller-chosen payload (`data` field): `V` for
//! vertices, `H` for half-edges, `E` for edges, `F` for faces. Geometry-aware
//! algorithms constrain `V` (see [`crate::geometry::Coords2`]); the topology
//! core itself never looks inside a payload.
//!
//! # Boundary Handling
//!
//! Boundary half-edges (along holes and open edges) have an invalid face ID.
//! Their twins are the interior half-edges. Boundary loops are threaded
//! through the `next`/`prev` pointers just like face rings, so the same
//! traversals work on both.
//!
//! # Mutation
//!
//! Elements are created and deleted only by the Euler operators (defined in
//! a sibling module as inherent methods on [`HalfEdgeMesh`]); this module is
//! the read surface plus the storage they mutate. Element IDs are stable
//! until a deletion displaces an element.

use super::index::{EdgeId, FaceId, HalfEdgeId, MeshIndex, VertexId};
use crate::error::{MeshError, Result};

/// A vertex in the half-edge mesh.
#[derive(Debug, Clone)]
pub struct Vertex<V = (), I: MeshIndex = u32> {
    /// Caller-supplied payload.
    pub data: V,

    /// One outgoing half-edge from this vertex.
    /// For boundary vertices, this is guaranteed to be a boundary half-edge.
    pub halfedge: HalfEdgeId<I>,
}

impl<V, I: MeshIndex> Vertex<V, I> {
    /// Create a new vertex with the given payload and no connectivity yet.
    pub(crate) fn new(data: V) -> Self {
        Self {
            data,
            halfedge: HalfEdgeId::invalid(),
        }
    }
}

/// A half-edge in the mesh.
#[derive(Debug, Clone)]
pub struct HalfEdge<H = (), I: MeshIndex = u32> {
    /// Caller-supplied payload.
    pub data: H,

    /// The vertex this half-edge points at.
    pub target: VertexId<I>,

    /// The opposite half-edge (pointing in the reverse direction).
    pub twin: HalfEdgeId<I>,

    /// The next half-edge around the face (counter-clockwise).
    pub next: HalfEdgeId<I>,

    /// The previous half-edge around the face (clockwise).
    /// Redundant, but it makes the edit operators O(1).
    pub prev: HalfEdgeId<I>,

    /// The undirected edge record shared with the twin.
    pub edge: EdgeId<I>,

    /// The face this half-edge belongs to.
    /// Invalid for boundary half-edges.
    pub face: FaceId<I>,
}

impl<H, I: MeshIndex> HalfEdge<H, I> {
    /// Create a new half-edge pointing at `target`, with all links unset.
    pub(crate) fn new(data: H, target: VertexId<I>) -> Self {
        Self {
            data,
            target,
            twin: HalfEdgeId::invalid(),
            next: HalfEdgeId::invalid(),
            prev: HalfEdgeId::invalid(),
            edge: EdgeId::invalid(),
            face: FaceId::invalid(),
        }
    }

    /// Check if this half-edge is on the boundary (has no face on its left).
    #[inline]
    pub fn is_boundary(&self) -> bool {
        !self.face.is_valid()
    }
}

/// An undirected edge record, shared by a pair of twin half-edges.
#[derive(Debug, Clone)]
pub struct Edge<E = (), I: MeshIndex = u32> {
    /// Caller-supplied payload.
    pub data: E,

    /// One of the two half-edges; the other is its twin.
    pub half: HalfEdgeId<I>,
}

impl<E, I: MeshIndex> Edge<E, I> {
    pub(crate) fn new(data: E, half: HalfEdgeId<I>) -> Self {
        Self { data, half }
    }
}

/// A face in the half-edge mesh.
#[derive(Debug, Clone)]
pub struct Face<F = (), I: MeshIndex = u32> {
    /// Caller-supplied payload.
    pub data: F,

    /// One half-edge on the boundary of this face; the full boundary is the
    /// `next`-ring through it.
    pub halfedge: HalfEdgeId<I>,
}

impl<F, I: MeshIndex> Face<F, I> {
    pub(crate) fn new(data: F, halfedge: HalfEdgeId<I>) -> Self {
        Self { data, halfedge }
    }
}

/// A half-edge mesh with generic payloads on every element kind.
///
/// Type parameters: `V` vertex payload, `H` half-edge payload, `E` edge
/// payload, `F` face payload, `I` index width.
///
/// The four element collections are arenas indexed by the typed IDs in
/// [`crate::mesh::index`]. They are exposed read-only; all mutation goes
/// through the topology operators, which keep the connectivity invariants
/// (see [`validate`](HalfEdgeMesh::validate)) intact between calls.
#[derive(Debug, Clone)]
pub struct HalfEdgeMesh<V = (), H = (), E = (), F = (), I: MeshIndex = u32> {
    /// All vertices in the mesh.
    pub(crate) vertices: Vec<Vertex<V, I>>,

    /// All half-edges in the mesh.
    pub(crate) halfedges: Vec<HalfEdge<H, I>>,

    /// All edges in the mesh.
    pub(crate) edges: Vec<Edge<E, I>>,

    /// All faces in the mesh.
    pub(crate) faces: Vec<Face<F, I>>,
}

impl<V, H, E, F, I: MeshIndex> Default for HalfEdgeMesh<V, H, E, F, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, H, E, F, I: MeshIndex> HalfEdgeMesh<V, H, E, F, I> {
    /// Create a new empty mesh.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            halfedges: Vec::new(),
            edges: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated capacity.
    pub fn with_capacity(num_vertices: usize, num_faces: usize) -> Self {
        // Each triangle has 3 edges, interior edges shared between two faces.
        let num_edges = num_faces * 2;

        Self {
            vertices: Vec::with_capacity(num_vertices),
            halfedges: Vec::with_capacity(num_edges * 2),
            edges: Vec::with_capacity(num_edges),
            faces: Vec::with_capacity(num_faces),
        }
    }

    // ==================== Accessors ====================

    /// Get the number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of half-edges.
    #[inline]
    pub fn num_halfedges(&self) -> usize {
        self.halfedges.len()
    }

    /// Get the number of edges.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Get the number of faces.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Check whether the mesh has no vertices at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Get a vertex by ID.
    #[inline]
    pub fn vertex(&self, id: VertexId<I>) -> &Vertex<V, I> {
        &self.vertices[id.index()]
    }

    /// Get a mutable vertex by ID.
    #[inline]
    pub fn vertex_mut(&mut self, id: VertexId<I>) -> &mut Vertex<V, I> {
        &mut self.vertices[id.index()]
    }

    /// Get a half-edge by ID.
    #[inline]
    pub fn halfedge(&self, id: HalfEdgeId<I>) -> &HalfEdge<H, I> {
        &self.halfedges[id.index()]
    }

    /// Get a mutable half-edge by ID.
    #[inline]
    pub fn halfedge_mut(&mut self, id: HalfEdgeId<I>) -> &mut HalfEdge<H, I> {
        &mut self.halfedges[id.index()]
    }

    /// Get an edge by ID.
    #[inline]
    pub fn edge(&self, id: EdgeId<I>) -> &Edge<E, I> {
        &self.edges[id.index()]
    }

    /// Get a mutable edge by ID.
    #[inline]
    pub fn edge_mut(&mut self, id: EdgeId<I>) -> &mut Edge<E, I> {
        &mut self.edges[id.index()]
    }

    /// Get a face by ID.
    #[inline]
    pub fn face(&self, id: FaceId<I>) -> &Face<F, I> {
        &self.faces[id.index()]
    }

    /// Get a mutable face by ID.
    #[inline]
    pub fn face_mut(&mut self, id: FaceId<I>) -> &mut Face<F, I> {
        &mut self.faces[id.index()]
    }

    // ==================== Topology Queries ====================

    /// Get the twin (opposite) half-edge.
    #[inline]
    pub fn twin(&self, he: HalfEdgeId<I>) -> HalfEdgeId<I> {
        self.halfedge(he).twin
    }

    /// Get the next half-edge around the face.
    #[inline]
    pub fn next(&self, he: HalfEdgeId<I>) -> HalfEdgeId<I> {
        self.halfedge(he).next
    }

    /// Get the previous half-edge around the face.
    #[inline]
    pub fn prev(&self, he: HalfEdgeId<I>) -> HalfEdgeId<I> {
        self.halfedge(he).prev
    }

    /// Get the target vertex of a half-edge.
    #[inline]
    pub fn target(&self, he: HalfEdgeId<I>) -> VertexId<I> {
        self.halfedge(he).target
    }

    /// Get the source vertex of a half-edge (the twin's target).
    #[inline]
    pub fn source(&self, he: HalfEdgeId<I>) -> VertexId<I> {
        self.target(self.twin(he))
    }

    /// Get the face of a half-edge. Invalid for boundary half-edges.
    #[inline]
    pub fn face_of(&self, he: HalfEdgeId<I>) -> FaceId<I> {
        self.halfedge(he).face
    }

    /// Get the edge record of a half-edge.
    #[inline]
    pub fn edge_of(&self, he: HalfEdgeId<I>) -> EdgeId<I> {
        self.halfedge(he).edge
    }

    /// The next outgoing half-edge around the source vertex.
    #[inline]
    pub fn next_at_source(&self, he: HalfEdgeId<I>) -> HalfEdgeId<I> {
        self.next(self.twin(he))
    }

    /// The previous outgoing half-edge around the source vertex.
    #[inline]
    pub fn prev_at_source(&self, he: HalfEdgeId<I>) -> HalfEdgeId<I> {
        self.twin(self.prev(he))
    }

    /// The next incoming half-edge around the target vertex.
    #[inline]
    pub fn next_at_target(&self, he: HalfEdgeId<I>) -> HalfEdgeId<I> {
        self.twin(self.next(he))
    }

    /// The previous incoming half-edge around the target vertex.
    #[inline]
    pub fn prev_at_target(&self, he: HalfEdgeId<I>) -> HalfEdgeId<I> {
        self.prev(self.twin(he))
    }

    /// Check if a half-edge is on the boundary (no face on its left).
    #[inline]
    pub fn is_boundary_halfedge(&self, he: HalfEdgeId<I>) -> bool {
        self.halfedge(he).is_boundary()
    }

    /// Check if the edge of a half-edge is on the boundary (either side
    /// face-free).
    #[inline]
    pub fn is_boundary_edge(&self, he: HalfEdgeId<I>) -> bool {
        self.is_boundary_halfedge(he) || self.is_boundary_halfedge(self.twin(he))
    }

    /// Check if an edge is on the boundary (either of its half-edges is
    /// face-free).
    #[inline]
    pub fn edge_is_boundary(&self, e: EdgeId<I>) -> bool {
        self.is_boundary_edge(self.edge(e).half)
    }

    /// Check if a vertex is on the boundary.
    pub fn is_boundary_vertex(&self, v: VertexId<I>) -> bool {
        if !self.vertex(v).halfedge.is_valid() {
            return true; // Not yet wired into any face
        }
        self.vertex_incomings(v)
            .any(|he| self.is_boundary_edge(he))
    }

    /// Find the half-edge going from `from` to `to`.
    ///
    /// Scans the incoming half-edges of `to` for one whose source is `from`;
    /// O(degree of `to`). Returns `None` if the vertices are not adjacent.
    pub fn halfedge_between(&self, from: VertexId<I>, to: VertexId<I>) -> Option<HalfEdgeId<I>> {
        if !self.vertex(to).halfedge.is_valid() {
            return None;
        }
        self.vertex_incomings(to).find(|&he| self.source(he) == from)
    }

    // ==================== Iteration ====================

    /// Iterate over all vertex IDs.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId<I>> + '_ {
        (0..self.vertices.len()).map(|i| VertexId::new(i))
    }

    /// Iterate over all vertices with their IDs.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId<I>, &Vertex<V, I>)> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (VertexId::new(i), v))
    }

    /// Iterate over all half-edge IDs.
    pub fn halfedge_ids(&self) -> impl Iterator<Item = HalfEdgeId<I>> + '_ {
        (0..self.halfedges.len()).map(|i| HalfEdgeId::new(i))
    }

    /// Iterate over all half-edges with their IDs.
    pub fn halfedges(&self) -> impl Iterator<Item = (HalfEdgeId<I>, &HalfEdge<H, I>)> + '_ {
        self.halfedges
            .iter()
            .enumerate()
            .map(|(i, he)| (HalfEdgeId::new(i), he))
    }

    /// Iterate over all edge IDs.
    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId<I>> + '_ {
        (0..self.edges.len()).map(|i| EdgeId::new(i))
    }

    /// Iterate over all edges with their IDs.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId<I>, &Edge<E, I>)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .map(|(i, e)| (EdgeId::new(i), e))
    }

    /// Iterate over all face IDs.
    pub fn face_ids(&self) -> impl Iterator<Item = FaceId<I>> + '_ {
        (0..self.faces.len()).map(|i| FaceId::new(i))
    }

    /// Iterate over all faces with their IDs.
    pub fn faces(&self) -> impl Iterator<Item = (FaceId<I>, &Face<F, I>)> + '_ {
        self.faces
            .iter()
            .enumerate()
            .map(|(i, f)| (FaceId::new(i), f))
    }

    /// Iterate over the ring of half-edges starting at `he`, following `next`.
    ///
    /// For an interior half-edge this is its face's perimeter starting at
    /// `he`; for a boundary half-edge it is the hole loop.
    pub fn halfedge_ring(&self, he: HalfEdgeId<I>) -> RingIter<'_, V, H, E, F, I> {
        RingIter::new(self, he)
    }

    /// Iterate over the half-edges bounding a face, starting at its
    /// representative.
    pub fn face_halfedges(&self, f: FaceId<I>) -> RingIter<'_, V, H, E, F, I> {
        RingIter::new(self, self.face(f).halfedge)
    }

    /// Iterate over the vertices of a face (targets of its perimeter).
    pub fn face_vertices(&self, f: FaceId<I>) -> impl Iterator<Item = VertexId<I>> + '_ {
        self.face_halfedges(f).map(|he| self.target(he))
    }

    /// Iterate over the outgoing half-edges of a vertex.
    pub fn vertex_halfedges(&self, v: VertexId<I>) -> VertexHalfEdgeIter<'_, V, H, E, F, I> {
        VertexHalfEdgeIter::new(self, v)
    }

    /// Iterate over the incoming half-edges of a vertex.
    pub fn vertex_incomings(&self, v: VertexId<I>) -> VertexIncomingIter<'_, V, H, E, F, I> {
        VertexIncomingIter::new(self, v)
    }

    /// Iterate over the vertices adjacent to a vertex.
    pub fn vertex_neighbors(&self, v: VertexId<I>) -> impl Iterator<Item = VertexId<I>> + '_ {
        self.vertex_halfedges(v).map(|he| self.target(he))
    }

    /// Iterate over the faces incident to a vertex.
    pub fn vertex_faces(&self, v: VertexId<I>) -> impl Iterator<Item = FaceId<I>> + '_ {
        self.vertex_halfedges(v).filter_map(|he| {
            let f = self.face_of(he);
            if f.is_valid() {
                Some(f)
            } else {
                None
            }
        })
    }

    /// Compute the valence (degree) of a vertex.
    pub fn valence(&self, v: VertexId<I>) -> usize {
        self.vertex_halfedges(v).count()
    }

    /// Get the three vertices of a triangular face, in perimeter order
    /// starting at the representative half-edge's source.
    pub fn face_triangle(&self, f: FaceId<I>) -> [VertexId<I>; 3] {
        let he0 = self.face(f).halfedge;
        [self.source(he0), self.target(he0), self.target(self.next(he0))]
    }

    // ==================== Validation ====================

    /// Check every connectivity invariant, reporting the first violation.
    ///
    /// A failure here means the mesh engine itself is buggy: the public
    /// operators restore all invariants before returning. In debug builds
    /// every mutating operator re-validates on exit and panics on violation.
    pub fn validate(&self) -> Result<()> {
        let cap = self.halfedges.len() + 1;

        for (heid, he) in self.halfedges() {
            if !he.twin.is_valid()
                || !he.next.is_valid()
                || !he.prev.is_valid()
                || !he.edge.is_valid()
                || !he.target.is_valid()
            {
                return Err(MeshError::Corrupt(format!("{:?} has an unset link", heid)));
            }
            if he.twin == heid {
                return Err(MeshError::Corrupt(format!("{:?} is its own twin", heid)));
            }
            if self.twin(he.twin) != heid {
                return Err(MeshError::Corrupt(format!(
                    "twin of {:?} is not an involution",
                    heid
                )));
            }
            if self.source(heid) == he.target {
                return Err(MeshError::Corrupt(format!("{:?} is a self-loop", heid)));
            }
            if self.prev(he.next) != heid || self.next(he.prev) != heid {
                return Err(MeshError::Corrupt(format!(
                    "next/prev of {:?} are not mutually inverse",
                    heid
                )));
            }
            if self.face_of(he.next) != he.face {
                return Err(MeshError::Corrupt(format!(
                    "{:?} and its next bound different faces",
                    heid
                )));
            }
            if self.edge_of(he.twin) != he.edge {
                return Err(MeshError::Corrupt(format!(
                    "{:?} and its twin disagree on their edge",
                    heid
                )));
            }

            // The ring must close, and within half the half-edge count.
            let mut current = he.next;
            let mut steps = 1usize;
            while current != heid {
                if steps > self.halfedges.len() / 2 {
                    return Err(MeshError::Corrupt(format!(
                        "ring through {:?} does not close",
                        heid
                    )));
                }
                current = self.next(current);
                steps += 1;
            }
        }

        for (vid, v) in self.vertices() {
            if !v.halfedge.is_valid() {
                return Err(MeshError::Corrupt(format!("{:?} is isolated", vid)));
            }
            if self.source(v.halfedge) != vid {
                return Err(MeshError::Corrupt(format!(
                    "outgoing half-edge of {:?} does not start there",
                    vid
                )));
            }

            // Count boundary contacts, with a step cap in case the incoming
            // ring itself is corrupt.
            let mut boundary_edges = 0usize;
            let start = self.twin(v.halfedge);
            let mut current = start;
            let mut steps = 0usize;
            loop {
                if self.is_boundary_edge(current) {
                    boundary_edges += 1;
                }
                current = self.next_at_target(current);
                steps += 1;
                if current == start {
                    break;
                }
                if steps > cap {
                    return Err(MeshError::Corrupt(format!(
                        "incoming ring of {:?} does not close",
                        vid
                    )));
                }
            }
            if boundary_edges > 0 {
                if !self.is_boundary_halfedge(v.halfedge) {
                    return Err(MeshError::Corrupt(format!(
                        "boundary vertex {:?} has an interior outgoing half-edge",
                        vid
                    )));
                }
                if boundary_edges > 2 {
                    return Err(MeshError::Corrupt(format!(
                        "{:?} touches {} boundary edges (non-manifold)",
                        vid, boundary_edges
                    )));
                }
            }
        }

        for (eid, e) in self.edges() {
            if !e.half.is_valid() {
                return Err(MeshError::Corrupt(format!("{:?} has no half-edge", eid)));
            }
            if self.edge_of(e.half) != eid {
                return Err(MeshError::Corrupt(format!(
                    "half-edge of {:?} points at a different edge",
                    eid
                )));
            }
        }

        for (fid, f) in self.faces() {
            if !f.halfedge.is_valid() {
                return Err(MeshError::Corrupt(format!("{:?} has no half-edge", fid)));
            }
            if self.face_of(f.halfedge) != fid {
                return Err(MeshError::Corrupt(format!(
                    "half-edge of {:?} bounds a different face",
                    fid
                )));
            }
        }

        Ok(())
    }

    /// Panic if any invariant is violated. Compiled out of release builds.
    #[inline]
    pub(crate) fn debug_validate(&self) {
        #[cfg(debug_assertions)]
        if let Err(err) = self.validate() {
            panic!("{}", err);
        }
    }
}

/// Iterator over the ring of half-edges reached by following `next`.
pub struct RingIter<'a, V, H, E, F, I: MeshIndex = u32> {
    mesh: &'a HalfEdgeMesh<V, H, E, F, I>,
    start: HalfEdgeId<I>,
    current: HalfEdgeId<I>,
    done: bool,
}

impl<'a, V, H, E, F, I: MeshIndex> RingIter<'a, V, H, E, F, I> {
    fn new(mesh: &'a HalfEdgeMesh<V, H, E, F, I>, start: HalfEdgeId<I>) -> Self {
        Self {
            mesh,
            start,
            current: start,
            done: !start.is_valid(),
        }
    }
}

impl<'a, V, H, E, F, I: MeshIndex> Iterator for RingIter<'a, V, H, E, F, I> {
    type Item = HalfEdgeId<I>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.current;
        self.current = self.mesh.next(self.current);

        if self.current == self.start {
            self.done = true;
        }

        Some(result)
    }
}

/// Iterator over the outgoing half-edges around a vertex.
pub struct VertexHalfEdgeIter<'a, V, H, E, F, I: MeshIndex = u32> {
    mesh: &'a HalfEdgeMesh<V, H, E, F, I>,
    start: HalfEdgeId<I>,
    current: HalfEdgeId<I>,
    done: bool,
}

impl<'a, V, H, E, F, I: MeshIndex> VertexHalfEdgeIter<'a, V, H, E, F, I> {
    fn new(mesh: &'a HalfEdgeMesh<V, H, E, F, I>, v: VertexId<I>) -> Self {
        let start = mesh.vertex(v).halfedge;
        Self {
            mesh,
            start,
            current: start,
            done: !start.is_valid(),
        }
    }
}

impl<'a, V, H, E, F, I: MeshIndex> Iterator for VertexHalfEdgeIter<'a, V, H, E, F, I> {
    type Item = HalfEdgeId<I>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.current;

        // Move to the next outgoing half-edge: twin -> next.
        // If he goes v -> w, then twin(he) goes w -> v, and next(twin(he))
        // is the half-edge after it in its face, which originates at v.
        self.current = self.mesh.next(self.mesh.twin(self.current));

        if self.current == self.start {
            self.done = true;
        }

        Some(result)
    }
}

/// Iterator over the incoming half-edges around a vertex.
pub struct VertexIncomingIter<'a, V, H, E, F, I: MeshIndex = u32> {
    mesh: &'a HalfEdgeMesh<V, H, E, F, I>,
    start: HalfEdgeId<I>,
    current: HalfEdgeId<I>,
    done: bool,
}

impl<'a, V, H, E, F, I: MeshIndex> VertexIncomingIter<'a, V, H, E, F, I> {
    fn new(mesh: &'a HalfEdgeMesh<V, H, E, F, I>, v: VertexId<I>) -> Self {
        let outgoing = mesh.vertex(v).halfedge;
        let start = if outgoing.is_valid() {
            mesh.twin(outgoing)
        } else {
            HalfEdgeId::invalid()
        };
        Self {
            mesh,
            start,
            current: start,
            done: !start.is_valid(),
        }
    }
}

impl<'a, V, H, E, F, I: MeshIndex> Iterator for VertexIncomingIter<'a, V, H, E, F, I> {
    type Item = HalfEdgeId<I>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.current;
        self.current = self.mesh.next_at_target(self.current);

        if self.current == self.start {
            self.done = true;
        }

        Some(result)
    }
}
