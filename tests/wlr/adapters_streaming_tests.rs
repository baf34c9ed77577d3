#![cfg(feature = "dev")]
//! Tests for the streaming adapter.
//!
//! These tests verify chunked accumulation through `StreamingWlr`:
//! - Chunked input gives the same fit as a single batch
//! - Internal chunk size does not change the fit
//! - Running state: current, finalize, reset, counters
//! - Builder validation
//!
//! ## Test Organization
//!
//! 1. **Equivalence** - Streaming vs batch
//! 2. **State** - Counters and reset
//! 3. **Builder** - Chunk size validation

use approx::assert_relative_eq;

use wlr::internals::adapters::batch::BatchWlrBuilder;
use wlr::internals::adapters::streaming::StreamingWlrBuilder;
use wlr::internals::engine::output::RegressionResult;
use wlr::internals::primitives::errors::WlrError;

// ============================================================================
// Helper Functions
// ============================================================================

fn noisy_line(n: usize) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let x: Vec<f64> = (0..n).map(|i| i as f64 * 0.1).collect();
    let y: Vec<f64> = x
        .iter()
        .enumerate()
        .map(|(i, v)| 1.5 * v - 4.0 + ((i * 7919) % 13) as f64 * 0.01)
        .collect();
    let e: Vec<f64> = (0..n).map(|i| 0.1 + (i % 5) as f64 * 0.05).collect();
    (x, y, e)
}

fn assert_results_close(a: &RegressionResult<f64>, b: &RegressionResult<f64>) {
    assert_relative_eq!(a.slope, b.slope, max_relative = 1e-10);
    assert_relative_eq!(a.intercept, b.intercept, max_relative = 1e-10);
    assert_relative_eq!(a.slope_err, b.slope_err, max_relative = 1e-10);
    assert_relative_eq!(a.intercept_err, b.intercept_err, max_relative = 1e-10);
    assert_relative_eq!(
        a.slope_intercept_covar,
        b.slope_intercept_covar,
        max_relative = 1e-10
    );
}

// ============================================================================
// Equivalence Tests
// ============================================================================

/// Test that feeding data in uneven chunks equals a batch fit.
#[test]
fn test_streaming_matches_batch() {
    let (x, y, e) = noisy_line(1000);
    let batch = BatchWlrBuilder::<f64>::default().build().unwrap().fit(&x, &y, &e).unwrap();

    let mut stream = StreamingWlrBuilder::<f64>::default().build().unwrap();
    for (start, end) in [(0, 1), (1, 250), (250, 251), (251, 1000)] {
        stream
            .process_chunk(&x[start..end], &y[start..end], &e[start..end])
            .unwrap();
    }

    assert_eq!(stream.points(), 1000);
    assert_eq!(stream.chunks_processed(), 4);
    assert_results_close(&stream.finalize(), &batch);
}

/// Test that the internal chunk size does not change the fit.
#[test]
fn test_streaming_chunk_size_invariance() {
    let (x, y, e) = noisy_line(257);

    let mut small = StreamingWlrBuilder::<f64>::default().chunk_size(3).build().unwrap();
    let mut large = StreamingWlrBuilder::<f64>::default().chunk_size(1000).build().unwrap();
    small.process_chunk(&x, &y, &e).unwrap();
    large.process_chunk(&x, &y, &e).unwrap();

    assert_results_close(&small.current(), &large.current());
}

/// Test that a mismatched chunk is rejected and leaves the state untouched.
#[test]
fn test_streaming_mismatched_chunk() {
    let mut stream = StreamingWlrBuilder::<f64>::default().build().unwrap();
    stream.process_chunk(&[0.0, 1.0], &[0.0, 1.0], &[1.0, 1.0]).unwrap();

    let res = stream.process_chunk(&[2.0], &[2.0, 3.0], &[1.0]);

    assert!(matches!(res, Err(WlrError::MismatchedInputs { .. })));
    assert_eq!(stream.points(), 2);
    assert_eq!(stream.chunks_processed(), 1);
}

// ============================================================================
// State Tests
// ============================================================================

/// Test that finalize resets the stream.
#[test]
fn test_streaming_finalize_resets() {
    let mut stream = StreamingWlrBuilder::<f64>::default().build().unwrap();
    stream.process_chunk(&[0.0, 1.0, 2.0], &[1.0, 2.0, 3.0], &[1.0; 3]).unwrap();

    let r = stream.finalize();
    assert_relative_eq!(r.slope, 1.0, epsilon = 1e-12);

    assert_eq!(stream.points(), 0);
    assert_eq!(stream.chunks_processed(), 0);
    assert!(stream.current().is_vertical());
}

/// Test that current does not consume the state.
#[test]
fn test_streaming_current_is_idempotent() {
    let mut stream = StreamingWlrBuilder::<f64>::default().build().unwrap();
    stream.process_chunk(&[0.0, 2.0], &[1.0, 5.0], &[1.0, 1.0]).unwrap();

    assert_eq!(stream.current(), stream.current());
    assert_eq!(stream.points(), 2);
}

/// Test explicit reset.
#[test]
fn test_streaming_reset() {
    let mut stream = StreamingWlrBuilder::<f64>::default().build().unwrap();
    stream.process_chunk(&[0.0, 2.0], &[1.0, 5.0], &[1.0, 1.0]).unwrap();
    stream.reset();
    stream.process_chunk(&[0.0, 1.0], &[0.0, -1.0], &[1.0, 1.0]).unwrap();

    assert_relative_eq!(stream.current().slope, -1.0, epsilon = 1e-12);
}

// ============================================================================
// Builder Tests
// ============================================================================

/// Test chunk size validation.
#[test]
fn test_streaming_invalid_chunk_size() {
    let res = StreamingWlrBuilder::<f64>::default().chunk_size(0).build();

    assert!(matches!(
        res,
        Err(WlrError::InvalidChunkSize { got: 0, min: 1 })
    ));
}
