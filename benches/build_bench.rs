use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use polymesh_topology::prelude::*;

/// Quad grid of `n × n` cells as a `-1`-terminated corner array.
fn grid(n: usize) -> (usize, Vec<i32>) {
    let stride = n + 1;
    let mut faces = Vec::with_capacity(n * n);
    for i in 0..n {
        for j in 0..n {
            let v = (i * stride + j) as i32;
            let s = stride as i32;
            faces.push([v, v + s, v + s + 1, v + 1]);
        }
    }
    // shuffle face order so edge discovery does not follow memory order
    let mut rng = StdRng::seed_from_u64(42);
    faces.shuffle(&mut rng);
    let coord = faces
        .into_iter()
        .flat_map(|f| f.into_iter().chain(std::iter::once(-1)))
        .collect();
    (stride * stride, coord)
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for &n in &[32usize, 128, 256] {
        let (nv, coord) = grid(n);
        group.bench_with_input(BenchmarkId::new("half_edges", n), &coord, |b, coord| {
            b.iter(|| HalfEdges::new(nv, coord).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("polygon_mesh", n), &coord, |b, coord| {
            b.iter(|| PolygonMesh::new(nv, coord).unwrap())
        });
    }
    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let (nv, coord) = grid(128);
    let mesh = PolygonMesh::new(nv, &coord).unwrap();
    let he = mesh.half_edges();
    c.bench_function("prev_around_all_corners", |b| {
        b.iter(|| he.half_edge_ids().map(|h| he.prev(h)).sum::<i32>())
    });
    c.bench_function("twin_next_walk", |b| {
        b.iter(|| {
            he.half_edge_ids()
                .map(|h| he.next(he.twin(h)))
                .filter(|&h| h != NO_ID)
                .count()
        })
    });
}

criterion_group!(benches, bench_build, bench_queries);
criterion_main!(benches);
