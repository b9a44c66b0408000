//! Criterion benchmarks for shortest-path search and diffusion.

use criterion::{criterion_group, criterion_main, Criterion};
use fathom_bench::grid_profile;
use fathom_search::{saturate, shortest_path, AStar, BreadthFirst};
use std::hint::black_box;

/// Benchmark: A* origin→target on a densified 40x40-room maze.
fn bench_astar_40x40(c: &mut Criterion) {
    let (grid, origin, target) = grid_profile(7, 40, 40);

    c.bench_function("astar_40x40", |b| {
        b.iter(|| black_box(shortest_path(&grid, origin, target, &AStar).unwrap()));
    });
}

/// Benchmark: breadth-first origin→target on the same maze.
fn bench_bfs_40x40(c: &mut Criterion) {
    let (grid, origin, target) = grid_profile(7, 40, 40);

    c.bench_function("bfs_40x40", |b| {
        b.iter(|| black_box(shortest_path(&grid, origin, target, &BreadthFirst).unwrap()));
    });
}

/// Benchmark: flood the whole maze from its target.
fn bench_diffusion_40x40(c: &mut Criterion) {
    let (grid, _, target) = grid_profile(7, 40, 40);
    let source = grid.to_local(target).unwrap();

    c.bench_function("diffusion_40x40", |b| {
        b.iter(|| black_box(saturate(&grid, source).unwrap()));
    });
}

criterion_group!(benches, bench_astar_40x40, bench_bfs_40x40, bench_diffusion_40x40);
criterion_main!(benches);
