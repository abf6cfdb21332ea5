//! Benchmarks for GCRS indexing operations
//!
//! Covers range projection over growing queries, the pointer codec, and
//! sub-block extraction (sequential and parallel).

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gcrs_core::{project_ranges, IndexHints, Shape};
use gcrs_sparse::{
    compress_dimension, expand_dimension, extract_block, par_extract_block, par_project_ranges,
    CompressedMatrix,
};
use std::hint::black_box;

/// Random column-compressed matrix with the given density
fn random_matrix(nrows: usize, ncols: usize, density: f64) -> CompressedMatrix<f64> {
    let nnz = ((nrows * ncols) as f64 * density).max(1.0) as usize;
    let mut cells = std::collections::BTreeMap::new();

    // Simple pseudo-random generation for reproducibility
    let mut seed = 12345u64;
    for _ in 0..nnz {
        seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
        let i = (seed % nrows as u64) as usize;
        seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
        let j = (seed % ncols as u64) as usize;
        seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
        cells.insert((i, j), (seed % 10000) as f64 / 10000.0);
    }

    CompressedMatrix::from_triplets((nrows, ncols), cells.into_iter().map(|((i, j), v)| (i, j, v)))
        .expect("Failed to build matrix")
}

/// Every `step`-th coordinate of an axis
fn strided(size: usize, step: usize) -> Vec<usize> {
    (0..size).step_by(step).collect()
}

fn bench_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("projection");
    let shape = Shape::new(&[64, 64, 64, 64]).expect("valid shape");
    let hints = IndexHints::default();

    for step in [8, 4, 2].iter() {
        let query: Vec<Vec<usize>> = (0..4).map(|_| strided(64, *step)).collect();
        let combinations: usize = query.iter().map(|q| q.len()).product();
        group.throughput(Throughput::Elements(combinations as u64));

        group.bench_with_input(BenchmarkId::new("sequential", step), &query, |b, q| {
            b.iter(|| project_ranges(black_box(q), &shape, &shape.compressed()))
        });
        group.bench_with_input(BenchmarkId::new("parallel", step), &query, |b, q| {
            b.iter(|| par_project_ranges(black_box(q), &shape, &shape.compressed(), &hints))
        });
    }

    group.finish();
}

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    for size in [1_000, 10_000, 100_000].iter() {
        let coords: Vec<usize> = (0..*size).map(|i| i / 3 * 2).collect();
        let axis_size = coords.last().map_or(1, |&v| v + 1);
        let indptr = compress_dimension(&coords, axis_size).expect("sorted coords");
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("compress", size), &coords, |b, coords| {
            b.iter(|| compress_dimension(black_box(coords), axis_size))
        });
        group.bench_with_input(BenchmarkId::new("expand", size), &indptr, |b, indptr| {
            b.iter(|| expand_dimension(black_box(indptr)))
        });
    }

    group.finish();
}

fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extraction");

    for size in [500, 2000].iter() {
        for density in [0.01, 0.05].iter() {
            let m = random_matrix(*size, *size, *density);
            let rows = strided(*size, 3);
            let cols = strided(*size, 2);
            let id = format!("{}x{}_d{}", size, size, density);

            group.bench_function(BenchmarkId::new("sequential", &id), |b| {
                b.iter(|| extract_block(black_box(&m), &rows, &cols))
            });
            group.bench_function(BenchmarkId::new("parallel", &id), |b| {
                b.iter(|| par_extract_block(black_box(&m), &rows, &cols))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_projection, bench_codec, bench_extraction);
criterion_main!(benches);
