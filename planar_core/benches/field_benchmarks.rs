//! Performance benchmarks for field evaluation and dataset generation
//!
//! Run with: cargo bench --bench field_benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ndarray::Array2;
use planar_lab_core::{PlanarConfig, PlanarDataset, SurfaceGrid, WaveField};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Benchmark batch amplitude evaluation at different batch sizes
fn bench_field_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_evaluate");

    let mut rng = StdRng::seed_from_u64(42);
    let field = WaveField::generate(&mut rng, 10, (-5.0, 5.0)).unwrap();

    for size in [256usize, 1024, 4096].iter() {
        let points = Array2::from_shape_fn((*size, 2), |(row, col)| {
            (row * 2 + col) as f64 / (*size as f64) * 10.0 - 5.0
        });

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                black_box(field.evaluate(&points).unwrap());
            });
        });
    }

    group.finish();
}

/// Benchmark end-to-end dataset generation with default parameters
fn bench_dataset_generate(c: &mut Criterion) {
    c.bench_function("dataset_generate_default", |b| {
        b.iter(|| {
            black_box(PlanarDataset::generate(PlanarConfig::default()).unwrap());
        });
    });
}

/// Benchmark mesh construction at the default rendering resolution
fn bench_grid_build(c: &mut Criterion) {
    c.bench_function("grid_build_200x200", |b| {
        b.iter(|| {
            black_box(SurfaceGrid::build((-5.0, 5.0), (-5.0, 5.0), 0.05).unwrap());
        });
    });
}

criterion_group!(
    benches,
    bench_field_evaluate,
    bench_dataset_generate,
    bench_grid_build
);
criterion_main!(benches);
