//! Geometric payload traits and metric queries.
//!
//! The topology core never interprets payloads; algorithms that need
//! coordinates constrain the vertex payload type with the traits here.
//! [`Coords2`] is the minimum contract (planar point location, edge
//! lengths); [`Coords3`] extends it for payloads carrying a third
//! coordinate; [`CoordsMut`] adds in-place position updates.
//!
//! Implementations are provided for nalgebra points and plain coordinate
//! arrays, so those types can be used as vertex payloads directly.

use nalgebra::{Point2, Point3};

use crate::mesh::{EdgeId, HalfEdgeMesh, MeshIndex, VertexId};

/// Read access to planar coordinates.
pub trait Coords2 {
    /// The x coordinate.
    fn x(&self) -> f64;
    /// The y coordinate.
    fn y(&self) -> f64;

    /// Both coordinates as an array, the form the predicates consume.
    #[inline]
    fn coords(&self) -> [f64; 2] {
        [self.x(), self.y()]
    }
}

/// Read access to spatial coordinates.
pub trait Coords3: Coords2 {
    /// The z coordinate.
    fn z(&self) -> f64;
}

/// In-place update of planar coordinates.
pub trait CoordsMut: Coords2 {
    /// Overwrite both coordinates.
    fn set_xy(&mut self, x: f64, y: f64);
}

impl Coords2 for Point2<f64> {
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    fn y(&self) -> f64 {
        self.y
    }
}

impl CoordsMut for Point2<f64> {
    #[inline]
    fn set_xy(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }
}

impl Coords2 for Point3<f64> {
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    fn y(&self) -> f64 {
        self.y
    }
}

impl Coords3 for Point3<f64> {
    #[inline]
    fn z(&self) -> f64 {
        self.z
    }
}

impl Coords2 for [f64; 2] {
    #[inline]
    fn x(&self) -> f64 {
        self[0]
    }

    #[inline]
    fn y(&self) -> f64 {
        self[1]
    }
}

impl CoordsMut for [f64; 2] {
    #[inline]
    fn set_xy(&mut self, x: f64, y: f64) {
        self[0] = x;
        self[1] = y;
    }
}

/// Planar distance between two points.
pub fn distance(p: &impl Coords2, q: &impl Coords2) -> f64 {
    let dx = q.x() - p.x();
    let dy = q.y() - p.y();
    (dx * dx + dy * dy).sqrt()
}

impl<V, H, E, F, I> HalfEdgeMesh<V, H, E, F, I>
where
    V: Coords2,
    I: MeshIndex,
{
    /// Length of an edge.
    pub fn edge_length(&self, e: EdgeId<I>) -> f64 {
        let he = self.edge(e).half;
        let p = &self.vertex(self.source(he)).data;
        let q = &self.vertex(self.target(he)).data;
        distance(p, q)
    }

    /// Length of the longest edge, or `None` on an edgeless mesh.
    pub fn longest_edge(&self) -> Option<f64> {
        self.edge_ids()
            .map(|e| self.edge_length(e))
            .fold(None, |longest, len| {
                Some(longest.map_or(len, |l: f64| l.max(len)))
            })
    }
}

impl<V, H, E, F, I> HalfEdgeMesh<V, H, E, F, I>
where
    V: CoordsMut,
    I: MeshIndex,
{
    /// Move a vertex to a new position.
    pub fn update_position(&mut self, v: VertexId<I>, x: f64, y: f64) {
        self.vertex_mut(v).data.set_xy(x, y);
    }
}

impl<V, H, E, F, I> HalfEdgeMesh<V, H, E, F, I>
where
    H: CoordsMut,
    I: MeshIndex,
{
    /// Move a vertex whose position is stored per corner, on the half-edges
    /// pointing at it.
    ///
    /// Fans the update out across all incoming half-edges so every corner
    /// sharing the vertex's position sees the new value. This is the update
    /// path for meshes whose half-edge payloads mirror a shared external
    /// position buffer.
    pub fn update_corner_positions(&mut self, v: VertexId<I>, x: f64, y: f64) {
        let incomings: Vec<_> = self.vertex_incomings(v).collect();
        for he in incomings {
            self.halfedge_mut(he).data.set_xy(x, y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::{build_from_triangles, TriangleMesh};

    #[test]
    fn test_coords_impls() {
        let p2 = Point2::new(1.0, 2.0);
        assert_eq!(p2.coords(), [1.0, 2.0]);

        let p3 = Point3::new(1.0, 2.0, 3.0);
        assert_eq!(p3.coords(), [1.0, 2.0]);
        assert_eq!(p3.z(), 3.0);

        let mut a = [0.0, 0.0];
        a.set_xy(5.0, -1.0);
        assert_eq!(a.coords(), [5.0, -1.0]);
    }

    #[test]
    fn test_edge_length_and_longest() {
        // A 3-4-5 right triangle.
        let vertices = vec![
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 0.0),
            Point2::new(3.0, 4.0),
        ];
        let mesh: TriangleMesh<Point2<f64>> =
            build_from_triangles(&vertices, &[[0, 1, 2]]).unwrap();

        let mut lengths: Vec<f64> = mesh.edge_ids().map(|e| mesh.edge_length(e)).collect();
        lengths.sort_by(f64::total_cmp);
        assert_eq!(lengths, vec![3.0, 4.0, 5.0]);
        assert_eq!(mesh.longest_edge(), Some(5.0));
    }

    #[test]
    fn test_longest_edge_empty() {
        let mesh: HalfEdgeMesh<Point2<f64>> = HalfEdgeMesh::new();
        assert_eq!(mesh.longest_edge(), None);
    }

    #[test]
    fn test_update_position() {
        let mut mesh: HalfEdgeMesh<Point2<f64>> = HalfEdgeMesh::new();
        let f = mesh.create_triangle(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
            (),
        );
        let [v0, _, _] = mesh.face_triangle(f);

        mesh.update_position(v0, -1.0, -1.0);
        assert_eq!(mesh.vertex(v0).data, Point2::new(-1.0, -1.0));
    }

    #[test]
    fn test_update_corner_positions() {
        // Positions duplicated per corner in the half-edge payloads.
        let mut mesh: HalfEdgeMesh<(), [f64; 2]> = HalfEdgeMesh::new();
        let f = mesh.create_triangle((), (), (), ());
        let [_, v1, _] = mesh.face_triangle(f);

        mesh.update_corner_positions(v1, 2.0, 3.0);
        for he in mesh.halfedge_ids().collect::<Vec<_>>() {
            let expected = if mesh.target(he) == v1 {
                [2.0, 3.0]
            } else {
                [0.0, 0.0]
            };
            assert_eq!(mesh.halfedge(he).data, expected);
        }
    }
}
