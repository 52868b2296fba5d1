//! Mesh construction from face-vertex lists.
//!
//! This module assembles a [`TriangleMesh`] from the flat representation
//! mesh file readers produce: a slice of vertex payloads plus triangles as
//! index triples. Assembly is driven entirely through the Euler operators,
//! so every intermediate state is a valid mesh; no raw pointer surgery
//! happens here.
//!
//! Faces are placed incrementally. A face that cannot be attached yet (none
//! of its edges border the mesh built so far) is deferred and retried on the
//! next pass; input that makes no progress over a full pass — disconnected
//! pieces, inconsistent winding, non-manifold edges — is rejected with
//! [`MeshError::Unbuildable`].

use super::index::{MeshIndex, VertexId};
use super::triangle::TriangleMesh;
use crate::error::{MeshError, Result};

/// Build a triangle mesh from vertex payloads and triangle faces.
///
/// # Arguments
/// * `vertices` - One payload per vertex
/// * `faces` - Triangles as `[v0, v1, v2]` indices, counter-clockwise,
///   consistently wound, forming a single manifold component
///
/// # Example
/// ```
/// use hedgerow::mesh::{build_from_triangles, TriangleMesh};
/// use nalgebra::Point2;
///
/// let vertices = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(0.5, 1.0),
/// ];
/// let faces = vec![[0, 1, 2]];
///
/// let mesh: TriangleMesh<Point2<f64>> = build_from_triangles(&vertices, &faces).unwrap();
/// assert_eq!(mesh.num_vertices(), 3);
/// assert_eq!(mesh.num_faces(), 1);
/// ```
pub fn build_from_triangles<V, H, E, F, I>(
    vertices: &[V],
    faces: &[[usize; 3]],
) -> Result<TriangleMesh<V, H, E, F, I>>
where
    V: Clone,
    H: Default,
    E: Default,
    F: Default,
    I: MeshIndex,
{
    if faces.is_empty() {
        return Err(MeshError::EmptyMesh);
    }

    // Validate vertex indices
    for (fi, face) in faces.iter().enumerate() {
        for &vi in face {
            if vi >= vertices.len() {
                return Err(MeshError::InvalidVertexIndex {
                    face: fi,
                    vertex: vi,
                });
            }
        }
        // Check for degenerate faces
        if face[0] == face[1] || face[1] == face[2] || face[0] == face[2] {
            return Err(MeshError::DegenerateFace { face: fi });
        }
    }

    let mut mesh = TriangleMesh::with_capacity(vertices.len(), faces.len());
    let mut ids: Vec<Option<VertexId<I>>> = vec![None; vertices.len()];

    let mut pending: Vec<[usize; 3]> = faces.to_vec();
    while !pending.is_empty() {
        let before = pending.len();
        pending.retain(|face| !try_place(&mut mesh, &mut ids, vertices, *face));
        if pending.len() == before {
            return Err(MeshError::Unbuildable {
                remaining: pending.len(),
            });
        }
    }

    Ok(mesh)
}

/// Attempt to realize one face with whichever operator its surroundings
/// admit. Returns true when the face was placed.
fn try_place<V, H, E, F, I>(
    mesh: &mut TriangleMesh<V, H, E, F, I>,
    ids: &mut [Option<VertexId<I>>],
    payloads: &[V],
    [a, b, c]: [usize; 3],
) -> bool
where
    V: Clone,
    H: Default,
    E: Default,
    F: Default,
    I: MeshIndex,
{
    // The first face seeds the mesh.
    if mesh.is_empty() {
        let f = mesh.create_triangle(
            payloads[a].clone(),
            payloads[b].clone(),
            payloads[c].clone(),
            F::default(),
        );
        let [va, vb, vc] = mesh.face_triangle(f);
        ids[a] = Some(va);
        ids[b] = Some(vb);
        ids[c] = Some(vc);
        return true;
    }

    // All three vertices already exist: fill a closed 3-ring, or close the
    // one missing edge.
    if let (Some(va), Some(vb), Some(vc)) = (ids[a], ids[b], ids[c]) {
        let rotations = [[va, vb, vc], [vb, vc, va], [vc, va, vb]];

        for [p, q, r] in rotations {
            if let Some(pq) = mesh.halfedge_between(p, q) {
                if mesh.is_boundary_halfedge(pq) {
                    let qr = mesh.next(pq);
                    if mesh.target(qr) == r && mesh.next(mesh.next(qr)) == pq {
                        return mesh.fill_triangle(pq, F::default()).is_ok();
                    }
                }
            }
        }

        for [p, q, r] in rotations {
            if mesh.halfedge_between(p, q).is_some() {
                continue;
            }
            let qr = mesh.halfedge_between(q, r);
            let rp = mesh.halfedge_between(r, p);
            if let (Some(qr), Some(rp)) = (qr, rp) {
                if mesh.is_boundary_halfedge(qr) && mesh.is_boundary_halfedge(rp) {
                    return mesh.close_triangle(p, q, r, F::default()).is_ok();
                }
            }
        }

        return false;
    }

    // Two consecutive vertices exist with a boundary half-edge between them:
    // attach the triangle with a fresh third vertex.
    let rotations = [[a, b, c], [b, c, a], [c, a, b]];
    for [p, q, r] in rotations {
        if let (Some(vp), Some(vq), None) = (ids[p], ids[q], ids[r]) {
            if let Some(pq) = mesh.halfedge_between(vp, vq) {
                if mesh.is_boundary_halfedge(pq) {
                    if let Ok(f) = mesh.attach_triangle(vp, vq, payloads[r].clone(), F::default())
                    {
                        let bounding = mesh.face(f).halfedge;
                        ids[r] = Some(mesh.target(mesh.next(bounding)));
                        return true;
                    }
                }
            }
        }
    }

    false
}

/// Convert a triangle mesh back to a face-vertex representation.
///
/// Returns a `(vertices, faces)` pair. Vertices appear in arena order, which
/// is creation order — not necessarily the order an earlier
/// [`build_from_triangles`] input listed them in.
pub fn to_face_vertex<V, H, E, F, I>(
    mesh: &TriangleMesh<V, H, E, F, I>,
) -> (Vec<V>, Vec<[usize; 3]>)
where
    V: Clone,
    I: MeshIndex,
{
    let vertices: Vec<V> = mesh.vertices().map(|(_, v)| v.data.clone()).collect();

    let faces: Vec<[usize; 3]> = mesh
        .face_ids()
        .map(|f| {
            let [v0, v1, v2] = mesh.face_triangle(f);
            [v0.index(), v1.index(), v2.index()]
        })
        .collect();

    (vertices, faces)
}

#[cfg(test)]
mod tests {
    use super::*;

    type IndexMesh = TriangleMesh<usize, (), (), ()>;

    fn build(n_vertices: usize, faces: &[[usize; 3]]) -> Result<IndexMesh> {
        let payloads: Vec<usize> = (0..n_vertices).collect();
        build_from_triangles(&payloads, faces)
    }

    #[test]
    fn test_single_triangle() {
        let mesh = build(3, &[[0, 1, 2]]).unwrap();

        assert_eq!(mesh.num_vertices(), 3);
        assert_eq!(mesh.num_faces(), 1);
        assert_eq!(mesh.num_edges(), 3);
        assert_eq!(mesh.num_halfedges(), 6);
        assert!(mesh.validate().is_ok());

        // All vertices should be on the boundary.
        for v in mesh.vertex_ids() {
            assert!(mesh.is_boundary_vertex(v));
        }
    }

    #[test]
    fn test_two_triangles() {
        // Two triangles sharing the edge 0-1.
        let mesh = build(4, &[[0, 1, 2], [1, 0, 3]]).unwrap();

        assert_eq!(mesh.num_vertices(), 4);
        assert_eq!(mesh.num_faces(), 2);
        assert_eq!(mesh.num_edges(), 5);
        assert_eq!(mesh.num_halfedges(), 10);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_tetrahedron() {
        let faces = [[0, 2, 1], [0, 1, 3], [1, 2, 3], [2, 0, 3]];
        let mesh = build(4, &faces).unwrap();

        assert_eq!(mesh.num_vertices(), 4);
        assert_eq!(mesh.num_faces(), 4);
        assert_eq!(mesh.num_edges(), 6);
        assert_eq!(mesh.num_halfedges(), 12);
        assert!(mesh.validate().is_ok());

        // Closed mesh: no boundary anywhere.
        for (_, he) in mesh.halfedges() {
            assert!(!he.is_boundary());
        }
        for v in mesh.vertex_ids() {
            assert!(!mesh.is_boundary_vertex(v));
        }
    }

    #[test]
    fn test_grid() {
        let n = 3;
        let mut faces = Vec::new();
        for j in 0..n {
            for i in 0..n {
                let v00 = j * (n + 1) + i;
                let v10 = v00 + 1;
                let v01 = v00 + (n + 1);
                let v11 = v01 + 1;
                faces.push([v00, v10, v11]);
                faces.push([v00, v11, v01]);
            }
        }

        let mesh = build((n + 1) * (n + 1), &faces).unwrap();
        assert_eq!(mesh.num_vertices(), 16);
        assert_eq!(mesh.num_faces(), 18);
        assert_eq!(mesh.num_edges(), 33);
        assert!(mesh.validate().is_ok());

        let boundary_vertices = mesh
            .vertex_ids()
            .filter(|&v| mesh.is_boundary_vertex(v))
            .count();
        assert_eq!(boundary_vertices, 12);

        // Payloads map back to the input indexing.
        for (_, vertex) in mesh.vertices() {
            assert!(vertex.data < 16);
        }
    }

    #[test]
    fn test_roundtrip() {
        let mesh = build(4, &[[0, 1, 2], [1, 0, 3]]).unwrap();
        let (payloads, faces) = to_face_vertex(&mesh);

        assert_eq!(payloads.len(), 4);
        assert_eq!(faces.len(), 2);

        let rebuilt: IndexMesh = build_from_triangles(&payloads, &faces).unwrap();
        assert_eq!(rebuilt.num_vertices(), 4);
        assert_eq!(rebuilt.num_faces(), 2);
        assert_eq!(rebuilt.num_edges(), 5);
        assert!(rebuilt.validate().is_ok());
    }

    #[test]
    fn test_empty_faces() {
        assert_eq!(build(3, &[]).unwrap_err(), MeshError::EmptyMesh);
    }

    #[test]
    fn test_invalid_vertex_index() {
        assert_eq!(
            build(1, &[[0, 1, 2]]).unwrap_err(),
            MeshError::InvalidVertexIndex { face: 0, vertex: 1 }
        );
    }

    #[test]
    fn test_degenerate_face() {
        assert_eq!(
            build(3, &[[0, 0, 2]]).unwrap_err(),
            MeshError::DegenerateFace { face: 0 }
        );
    }

    #[test]
    fn test_disconnected_input() {
        assert_eq!(
            build(6, &[[0, 1, 2], [3, 4, 5]]).unwrap_err(),
            MeshError::Unbuildable { remaining: 1 }
        );
    }

    #[test]
    fn test_nonmanifold_edge() {
        // Three faces on the edge 0-1.
        assert_eq!(
            build(5, &[[0, 1, 2], [1, 0, 3], [0, 1, 4]]).unwrap_err(),
            MeshError::Unbuildable { remaining: 1 }
        );
    }
}
