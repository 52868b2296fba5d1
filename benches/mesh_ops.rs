//! Benchmarks for mesh operations and predicates.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hedgerow::prelude::*;
use nalgebra::Point2;

fn grid_input(n: usize) -> (Vec<Point2<f64>>, Vec<[usize; 3]>) {
    let mut vertices = Vec::with_capacity((n + 1) * (n + 1));
    let mut faces = Vec::with_capacity(n * n * 2);

    // Create grid vertices
    for j in 0..=n {
        for i in 0..=n {
            vertices.push(Point2::new(i as f64, j as f64));
        }
    }

    // Create triangles
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

    (vertices, faces)
}

fn create_grid_mesh(n: usize) -> TriangleMesh<Point2<f64>> {
    let (vertices, faces) = grid_input(n);
    build_from_triangles(&vertices, &faces).unwrap()
}

fn bench_mesh_construction(c: &mut Criterion) {
    let (vertices, faces) = grid_input(10);

    c.bench_function("build_grid_10x10", |b| {
        b.iter(|| {
            let mesh: TriangleMesh<Point2<f64>> =
                build_from_triangles(&vertices, &faces).unwrap();
            mesh
        });
    });
}

fn bench_mesh_traversal(c: &mut Criterion) {
    let mesh = create_grid_mesh(50);

    c.bench_function("vertex_neighbors_all", |b| {
        b.iter(|| {
            let mut count = 0;
            for v in mesh.vertex_ids() {
                count += mesh.vertex_neighbors(v).count();
            }
            count
        });
    });

    c.bench_function("face_perimeters_all", |b| {
        b.iter(|| {
            let mut count = 0;
            for f in mesh.face_ids() {
                count += mesh.face_halfedges(f).count();
            }
            count
        });
    });
}

fn bench_predicates(c: &mut Criterion) {
    use hedgerow::predicates::{orient2d, orient2d_exact};

    // Well separated: the adaptive test certifies at the first stage.
    let easy = ([0.3, 0.4], [7.1, -2.5], [4.0, 9.0]);
    c.bench_function("orient2d_certified_fast", |b| {
        b.iter(|| orient2d(black_box(easy.0), black_box(easy.1), black_box(easy.2)));
    });

    // Nearly collinear: forces escalation into the exact stages.
    let hard = ([0.0, 0.0], [1.0, 1.0], [0.5, 0.5 + 2f64.powi(-52)]);
    c.bench_function("orient2d_escalated", |b| {
        b.iter(|| orient2d(black_box(hard.0), black_box(hard.1), black_box(hard.2)));
    });

    c.bench_function("orient2d_exact", |b| {
        b.iter(|| orient2d_exact(black_box(hard.0), black_box(hard.1), black_box(hard.2)));
    });
}

fn bench_point_location(c: &mut Criterion) {
    let mesh = create_grid_mesh(50);

    // Far corner, so the walk crosses many faces from its fixed start.
    let query = Point2::new(49.25, 49.75);
    c.bench_function("locate_far_corner_50x50", |b| {
        b.iter(|| mesh.locate(black_box(&query)));
    });
}

criterion_group!(
    benches,
    bench_mesh_construction,
    bench_mesh_traversal,
    bench_predicates,
    bench_point_location
);
criterion_main!(benches);
