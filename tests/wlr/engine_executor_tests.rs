#![cfg(feature = "dev")]
//! Tests for the regression execution engine.
//!
//! These tests verify the orchestration of weight conversion, moment
//! reduction and solving:
//! - Full pipeline output (result, moments, sample count)
//! - Reuse of the executor's working buffer across runs
//! - Injection of a custom moment pass
//!
//! ## Test Organization
//!
//! 1. **Pipeline** - End-to-end runs
//! 2. **Buffer Reuse** - Runs of different sizes
//! 3. **Custom Passes** - Hook injection

use approx::assert_relative_eq;
use std::sync::atomic::{AtomicUsize, Ordering};

use wlr::internals::algorithms::moments::{MomentSums, accumulate_moments_scalar};
use wlr::internals::engine::executor::{RegressionConfig, RegressionExecutor};

// ============================================================================
// Helper Functions
// ============================================================================

static CUSTOM_CALLS: AtomicUsize = AtomicUsize::new(0);

fn counting_pass(x: &[f64], y: &[f64], w: &[f64]) -> MomentSums<f64> {
    CUSTOM_CALLS.fetch_add(1, Ordering::SeqCst);
    accumulate_moments_scalar(x, y, w)
}

// ============================================================================
// Pipeline Tests
// ============================================================================

/// Test a full run on an exact line.
#[test]
fn test_run_exact_line() {
    let x = [0.0f64, 1.0, 2.0, 3.0];
    let y = [1.0, 3.0, 5.0, 7.0];
    let e = [1.0; 4];

    let out = RegressionExecutor::new().run(&x, &y, &e);

    assert_eq!(out.points, 4);
    assert_relative_eq!(out.moments.total_weight, 4.0);
    assert_relative_eq!(out.moments.x_mean, 1.5);
    assert_relative_eq!(out.result.slope, 2.0, epsilon = 1e-12);
    assert_relative_eq!(out.result.intercept, 1.0, epsilon = 1e-12);
}

/// Test a run on empty input.
///
/// No samples is the degenerate-weight state, reported as a vertical fit.
#[test]
fn test_run_empty() {
    let empty: [f64; 0] = [];
    let out = RegressionExecutor::new().run(&empty, &empty, &empty);

    assert_eq!(out.points, 0);
    assert_eq!(out.moments.total_weight, 0.0);
    assert!(out.result.is_vertical());
}

/// Test that solving accumulated sums equals a full run.
#[test]
fn test_solve_sums_matches_run() {
    let x = [1.0f64, 2.0, 4.0, 8.0, 7.0];
    let y = [10.0, 11.0, 9.0, 7.0, 12.0];
    let e = [0.1, 0.2, 0.1, 0.2, 0.4];

    let mut executor = RegressionExecutor::new();
    let sums = executor.accumulate(&x, &y, &e);
    let solved = RegressionExecutor::solve_sums(&sums);
    let run = executor.run(&x, &y, &e);

    assert_eq!(solved, run);
}

// ============================================================================
// Buffer Reuse Tests
// ============================================================================

/// Test that a reused executor gives the same result as a fresh one.
#[test]
fn test_executor_reuse_across_sizes() {
    let mut executor = RegressionExecutor::new();

    let long_x: Vec<f64> = (0..50).map(|i| i as f64).collect();
    let long_y: Vec<f64> = long_x.iter().map(|v| 3.0 * v - 2.0).collect();
    let long_e = vec![0.5; 50];
    let _ = executor.run(&long_x, &long_y, &long_e);

    let x = [0.0f64, 1.0, 2.0];
    let y = [0.0, 1.0, 2.0];
    let e = [1.0; 3];

    let reused = executor.run(&x, &y, &e);
    let fresh = RegressionExecutor::new().run(&x, &y, &e);

    assert_eq!(reused, fresh);
    assert_eq!(reused.points, 3);
}

/// Test that a pre-sized executor handles smaller and larger inputs.
#[test]
fn test_presized_executor_matches_default() {
    let mut presized = RegressionExecutor::new().with_capacity(4);

    let x: Vec<f64> = (0..10).map(|i| i as f64).collect();
    let y: Vec<f64> = x.iter().map(|v| 0.5 * v + 1.0).collect();
    let e = vec![0.25; 10];

    let small = presized.run(&x[..2], &y[..2], &e[..2]);
    let large = presized.run(&x, &y, &e);

    assert_eq!(small, RegressionExecutor::new().run(&x[..2], &y[..2], &e[..2]));
    assert_eq!(large, RegressionExecutor::new().run(&x, &y, &e));
    assert_eq!(large.points, 10);
}

// ============================================================================
// Custom Pass Tests
// ============================================================================

/// Test that a configured custom moment pass is used.
#[test]
fn test_custom_moment_pass_is_used() {
    let before = CUSTOM_CALLS.load(Ordering::SeqCst);

    let config = RegressionConfig {
        custom_moment_pass: Some(counting_pass as fn(&[f64], &[f64], &[f64]) -> MomentSums<f64>),
    };
    let out = RegressionExecutor::run_with_config(
        &[0.0, 1.0, 2.0],
        &[1.0, 2.0, 3.0],
        &[1.0, 1.0, 1.0],
        config,
    );

    assert!(CUSTOM_CALLS.load(Ordering::SeqCst) > before);
    assert_relative_eq!(out.result.slope, 1.0, epsilon = 1e-12);
}

/// Test that the default configuration uses no custom pass.
#[test]
fn test_default_config() {
    let config = RegressionConfig::<f64>::default();
    assert!(config.custom_moment_pass.is_none());
}
