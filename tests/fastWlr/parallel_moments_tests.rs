#![cfg(all(feature = "dev", feature = "cpu"))]
//! Tests for the parallel moment pass.
//!
//! These tests verify that the rayon pass is a drop-in replacement for the
//! serial SIMD pass of the base crate:
//! - Identical sample counts and matching sums on large inputs
//! - NaN and zero-error samples handled per chunk and merged correctly
//! - Serial fallback below the parallel threshold
//!
//! ## Test Organization
//!
//! 1. **Consistency** - Parallel vs serial sums
//! 2. **Special Values** - NaN and infinite weights
//! 3. **Independent Fits** - `regress_many`

use approx::assert_relative_eq;

use fastWlr::internals::engine::executor::{
    PARALLEL_THRESHOLD, SampleSet, moment_pass_parallel, regress_many,
};
use wlr::internals::algorithms::moments::{MomentAccumulator, MomentSums};
use wlr::internals::api::regress;
use wlr::internals::math::weights::weights_from_errors;

// ============================================================================
// Helper Functions
// ============================================================================

fn generate(n: usize) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let x: Vec<f64> = (0..n).map(|i| i as f64 / n as f64 * 50.0).collect();
    let y: Vec<f64> = x
        .iter()
        .enumerate()
        .map(|(i, v)| 0.8 * v + 3.0 + (((i * 2654435761) % 1000) as f64 / 1000.0 - 0.5))
        .collect();
    let w: Vec<f64> = (0..n).map(|i| 1.0 + (i % 7) as f64).collect();
    (x, y, w)
}

fn assert_sums_close(a: &MomentSums<f64>, b: &MomentSums<f64>) {
    assert_eq!(a.points, b.points);
    assert_eq!(a.exact.count, b.exact.count);
    assert_relative_eq!(a.sum_w, b.sum_w, max_relative = 1e-10);
    assert_relative_eq!(a.sum_wx, b.sum_wx, max_relative = 1e-10);
    assert_relative_eq!(a.sum_wx2, b.sum_wx2, max_relative = 1e-10);
    assert_relative_eq!(a.sum_wy, b.sum_wy, max_relative = 1e-10);
    assert_relative_eq!(a.sum_wxy, b.sum_wxy, max_relative = 1e-10);
}

// ============================================================================
// Consistency Tests
// ============================================================================

/// Test parallel sums against the serial pass on a large input.
#[test]
fn test_parallel_matches_serial_large() {
    let (x, y, w) = generate(PARALLEL_THRESHOLD * 4 + 17);

    let parallel = moment_pass_parallel(&x, &y, &w);
    let serial = f64::accumulate_moments(&x, &y, &w);

    assert_sums_close(&parallel, &serial);
}

/// Test that small inputs take the serial path unchanged.
#[test]
fn test_parallel_small_input_is_serial() {
    let (x, y, w) = generate(100);

    assert_eq!(
        moment_pass_parallel(&x, &y, &w),
        f64::accumulate_moments(&x, &y, &w)
    );
}

/// Test the parallel pass on f32 data.
#[test]
fn test_parallel_f32() {
    let n = PARALLEL_THRESHOLD * 2;
    let x: Vec<f32> = (0..n).map(|i| (i % 100) as f32).collect();
    let y: Vec<f32> = x.iter().map(|v| 2.0 * v).collect();
    let w = vec![1.0f32; n];

    let parallel = moment_pass_parallel(&x, &y, &w);
    let serial = f32::accumulate_moments(&x, &y, &w);

    assert_eq!(parallel.points, serial.points);
    assert_relative_eq!(parallel.sum_w, serial.sum_w, max_relative = 1e-4);
    assert_relative_eq!(parallel.sum_wxy, serial.sum_wxy, max_relative = 1e-4);
}

// ============================================================================
// Special Value Tests
// ============================================================================

/// Test that NaN samples are excluded in every chunk.
#[test]
fn test_parallel_nan_handling() {
    let (x, mut y, mut w) = generate(PARALLEL_THRESHOLD * 3);
    for i in (0..y.len()).step_by(97) {
        y[i] = f64::NAN;
    }
    for i in (5..w.len()).step_by(131) {
        w[i] = f64::NAN;
    }

    let parallel = moment_pass_parallel(&x, &y, &w);
    let serial = f64::accumulate_moments(&x, &y, &w);

    assert!(parallel.sum_wy.is_finite());
    assert_sums_close(&parallel, &serial);
}

/// Test that zero-error samples found in any chunk dominate the fit.
#[test]
fn test_parallel_infinite_weights() {
    let n = PARALLEL_THRESHOLD * 3;
    let x: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let mut y: Vec<f64> = x.iter().map(|v| -v).collect();
    let mut errors = vec![1.0; n];

    // Exact samples on y = x + 1, far apart so they land in different chunks
    for &i in &[10usize, n - 10] {
        y[i] = x[i] + 1.0;
        errors[i] = 0.0;
    }
    let w = weights_from_errors(&errors);

    let sums = moment_pass_parallel(&x, &y, &w);
    assert_eq!(sums.exact.count, 2);

    let m = sums.finalize();
    assert_eq!(m.total_weight, f64::INFINITY);
    assert_relative_eq!(m.y_mean, m.x_mean + 1.0, epsilon = 1e-9);
}

// ============================================================================
// Independent Fit Tests
// ============================================================================

/// Test that each set is fit independently and in order.
#[test]
fn test_regress_many_matches_individual() {
    let (x, y, _) = generate(500);
    let e1 = vec![0.5; 500];
    let e2: Vec<f64> = (0..500).map(|i| 0.1 + (i % 4) as f64 * 0.2).collect();

    let sets: Vec<SampleSet<'_, f64>> = vec![
        (&x[..], &y[..], &e1[..]),
        (&x[..], &y[..], &e2[..]),
        (&x[..2], &y[..2], &e1[..2]),
    ];
    let fits = regress_many(&sets).unwrap();

    assert_eq!(fits.len(), 3);
    for (fit, &(sx, sy, se)) in fits.iter().zip(&sets) {
        let expected = regress(sx, sy, se).unwrap();
        assert_eq!(*fit, expected);
    }
}

/// Test that a malformed set fails the whole call.
#[test]
fn test_regress_many_mismatch() {
    let good = [1.0, 2.0, 3.0];
    let short = [1.0, 2.0];
    let sets: Vec<SampleSet<'_, f64>> = vec![
        (&good[..], &good[..], &good[..]),
        (&good[..], &good[..], &short[..]),
    ];

    assert!(regress_many(&sets).is_err());
}
