//! Weighted regression benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability (1K to 1M points)
//! - Streaming chunk sizes
//! - Online window rebuilds
//! - Realistic error profiles (heteroscedastic, outliers with large errors)
//! - Pathological cases (NaN-heavy input, zero-error samples)
//!
//! For serial execution, use `FASTWLR_MODE=serial cargo bench`.
//! For parallel execution, use `FASTWLR_MODE=parallel cargo bench`.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fastWlr::prelude::*;
use rand::prelude::*;
use rand_distr::{Normal, Uniform};
use std::env;
use std::hint::black_box;

// ============================================================================
// Helper Functions
// ============================================================================

fn get_config() -> (bool, &'static str) {
    match env::var("FASTWLR_MODE").ok().as_deref() {
        Some("serial") => (false, "serial"),
        _ => (true, "parallel"),
    }
}

type Samples = (Vec<f64>, Vec<f64>, Vec<f64>);

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate a noisy line with constant errors.
fn generate_line_data(size: usize, seed: u64) -> Samples {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 0.3).unwrap();

    let x: Vec<f64> = (0..size).map(|i| i as f64 * 10.0 / size as f64).collect();
    let y: Vec<f64> = x
        .iter()
        .map(|&xi| 1.7 * xi - 2.0 + noise_dist.sample(&mut rng))
        .collect();
    let y_err = vec![0.3; size];
    (x, y, y_err)
}

/// Generate heteroscedastic data: errors grow with x.
fn generate_heteroscedastic_data(size: usize, seed: u64) -> Samples {
    let mut rng = StdRng::seed_from_u64(seed);
    let unit = Normal::new(0.0, 1.0).unwrap();

    let x: Vec<f64> = (0..size).map(|i| i as f64 * 0.01).collect();
    let y_err: Vec<f64> = x.iter().map(|&xi| 0.05 + 0.02 * xi).collect();
    let y: Vec<f64> = x
        .iter()
        .zip(&y_err)
        .map(|(&xi, &e)| 0.4 * xi + 1.0 + e * unit.sample(&mut rng))
        .collect();
    (x, y, y_err)
}

/// Generate data where 5% of points are outliers carrying large errors.
fn generate_outlier_data(size: usize, seed: u64) -> Samples {
    let (x, mut y, mut y_err) = generate_line_data(size, seed);
    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(1));
    let outlier_dist = Uniform::new(-20.0, 20.0).unwrap();

    for _ in 0..size / 20 {
        let idx = rng.random_range(0..size);
        y[idx] += outlier_dist.sample(&mut rng);
        y_err[idx] = 10.0;
    }
    (x, y, y_err)
}

/// Generate data where a fraction of entries are missing (NaN).
fn generate_missing_data(size: usize, seed: u64) -> Samples {
    let (mut x, mut y, mut y_err) = generate_line_data(size, seed);
    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(2));

    for _ in 0..size / 10 {
        let idx = rng.random_range(0..size);
        match idx % 3 {
            0 => x[idx] = f64::NAN,
            1 => y[idx] = f64::NAN,
            _ => y_err[idx] = f64::NAN,
        }
    }
    (x, y, y_err)
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("scalability_{}", mode_name));
    group.sample_size(50);

    for size in [1_000, 10_000, 100_000, 1_000_000] {
        group.throughput(Throughput::Elements(size as u64));

        let (x, y, e) = generate_line_data(size, 42);
        let model = Wlr::<f64>::new()
            .adapter(Batch)
            .parallel(use_parallel)
            .build()
            .unwrap();

        group.bench_with_input(BenchmarkId::new("batch", size), &size, |b, _| {
            b.iter(|| model.fit(black_box(&x), black_box(&y), black_box(&e)).unwrap())
        });
    }
    group.finish();
}

fn bench_streaming(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("streaming_{}", mode_name));
    group.sample_size(30);

    let size = 500_000;
    let (x, y, e) = generate_heteroscedastic_data(size, 42);
    group.throughput(Throughput::Elements(size as u64));

    for chunk in [1_000, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("chunk_size", chunk), &chunk, |b, &chunk| {
            b.iter(|| {
                let mut stream = Wlr::<f64>::new()
                    .chunk_size(chunk)
                    .adapter(Streaming)
                    .parallel(use_parallel)
                    .build()
                    .unwrap();
                for start in (0..size).step_by(chunk) {
                    let end = (start + chunk).min(size);
                    stream
                        .process_chunk(
                            black_box(&x[start..end]),
                            black_box(&y[start..end]),
                            black_box(&e[start..end]),
                        )
                        .unwrap();
                }
                stream.finalize()
            })
        });
    }
    group.finish();
}

fn bench_online(c: &mut Criterion) {
    let mut group = c.benchmark_group("online");
    group.sample_size(30);

    let size = 10_000;
    let (x, y, e) = generate_line_data(size, 42);
    group.throughput(Throughput::Elements(size as u64));

    group.bench_function("unbounded", |b| {
        b.iter(|| {
            let mut online = Wlr::<f64>::new().adapter(Online).build().unwrap();
            online.add_points(black_box(&x), black_box(&y), black_box(&e)).unwrap()
        })
    });

    for window in [16, 256] {
        group.bench_with_input(BenchmarkId::new("window", window), &window, |b, &window| {
            b.iter(|| {
                let mut online = Wlr::<f64>::new()
                    .window_capacity(window)
                    .adapter(Online)
                    .build()
                    .unwrap();
                online.add_points(black_box(&x), black_box(&y), black_box(&e)).unwrap()
            })
        });
    }
    group.finish();
}

fn bench_error_profiles(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("error_profiles_{}", mode_name));
    group.sample_size(50);

    let size = 100_000;
    let model = Wlr::<f64>::new()
        .adapter(Batch)
        .parallel(use_parallel)
        .build()
        .unwrap();

    let (x, y, e) = generate_heteroscedastic_data(size, 42);
    group.bench_function("heteroscedastic", |b| {
        b.iter(|| model.fit(black_box(&x), black_box(&y), black_box(&e)).unwrap())
    });

    let (x, y, e) = generate_outlier_data(size, 42);
    group.bench_function("outliers", |b| {
        b.iter(|| model.fit(black_box(&x), black_box(&y), black_box(&e)).unwrap())
    });

    group.finish();
}

fn bench_pathological(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("pathological_{}", mode_name));
    group.sample_size(50);

    let size = 100_000;
    let model = Wlr::<f64>::new()
        .adapter(Batch)
        .parallel(use_parallel)
        .build()
        .unwrap();

    // Missing values
    let (x, y, e) = generate_missing_data(size, 42);
    group.bench_function("missing_values", |b| {
        b.iter(|| model.fit(black_box(&x), black_box(&y), black_box(&e)).unwrap())
    });

    // Zero-error samples force the exact-sum path
    let (x, y, mut e) = generate_line_data(size, 42);
    e[size / 3] = 0.0;
    e[2 * size / 3] = 0.0;
    group.bench_function("zero_errors", |b| {
        b.iter(|| model.fit(black_box(&x), black_box(&y), black_box(&e)).unwrap())
    });

    // Constant x
    let x_const = vec![3.0; size];
    let (_, y, e) = generate_line_data(size, 42);
    group.bench_function("constant_x", |b| {
        b.iter(|| model.fit(black_box(&x_const), black_box(&y), black_box(&e)).unwrap())
    });

    group.finish();
}

fn bench_many_sets(c: &mut Criterion) {
    let mut group = c.benchmark_group("regress_many");
    group.sample_size(30);

    let sets: Vec<Samples> = (0..256).map(|i| generate_line_data(2_000, i)).collect();
    let views: Vec<(&[f64], &[f64], &[f64])> = sets
        .iter()
        .map(|(x, y, e)| (x.as_slice(), y.as_slice(), e.as_slice()))
        .collect();

    group.bench_function("sets_256x2000", |b| {
        b.iter(|| regress_many(black_box(&views)).unwrap())
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_scalability,
    bench_streaming,
    bench_online,
    bench_error_profiles,
    bench_pathological,
    bench_many_sets,
);

criterion_main!(benches);
