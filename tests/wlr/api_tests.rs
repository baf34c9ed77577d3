#![cfg(feature = "dev")]
//! Tests for the high-level fluent API.
//!
//! These tests verify the builder-to-adapter transition of `WlrBuilder`:
//! - Each adapter marker produces a working processor
//! - Parameters reach the adapter that supports them
//! - Unsupported and duplicated parameters fail at build time
//! - The `regress` entry point
//!
//! ## Test Organization
//!
//! 1. **Adapter Selection** - Batch, Streaming, Online
//! 2. **Parameter Routing** - Supported and unsupported parameters
//! 3. **Duplicate Detection** - Repeated setters
//! 4. **Convenience Function** - `regress`

use approx::assert_relative_eq;

use wlr::internals::api::{Batch, Online, Streaming, WlrBuilder, regress};
use wlr::internals::primitives::errors::WlrError;

// ============================================================================
// Adapter Selection Tests
// ============================================================================

/// Test the batch adapter through the builder.
#[test]
fn test_api_batch() {
    let model = WlrBuilder::<f64>::new().adapter(Batch).build().unwrap();
    let r = model.fit(&[0.0, 1.0, 2.0], &[1.0, 3.0, 5.0], &[1.0; 3]).unwrap();

    assert_relative_eq!(r.slope, 2.0, epsilon = 1e-12);
}

/// Test the streaming adapter through the builder.
#[test]
fn test_api_streaming() {
    let mut stream = WlrBuilder::<f64>::new()
        .chunk_size(2)
        .adapter(Streaming)
        .build()
        .unwrap();
    stream.process_chunk(&[0.0, 1.0, 2.0], &[1.0, 3.0, 5.0], &[1.0; 3]).unwrap();
    stream.process_chunk(&[3.0], &[7.0], &[1.0]).unwrap();

    let r = stream.finalize();
    assert_relative_eq!(r.slope, 2.0, epsilon = 1e-12);
    assert_relative_eq!(r.intercept, 1.0, epsilon = 1e-12);
}

/// Test the online adapter through the builder.
#[test]
fn test_api_online() {
    let mut online = WlrBuilder::<f64>::new()
        .window_capacity(3)
        .min_points(3)
        .adapter(Online)
        .build()
        .unwrap();

    assert!(online.add_point(0.0, 0.0, 1.0).is_none());
    assert!(online.add_point(1.0, 2.0, 1.0).is_none());
    let out = online.add_point(2.0, 4.0, 1.0).unwrap();

    assert_relative_eq!(out.result.slope, 2.0, epsilon = 1e-12);
}

// ============================================================================
// Parameter Routing Tests
// ============================================================================

/// Test that the batch adapter rejects streaming and online parameters.
#[test]
fn test_api_batch_rejects_unsupported() {
    let res = WlrBuilder::<f64>::new().chunk_size(10).adapter(Batch).build();
    assert!(matches!(
        res,
        Err(WlrError::UnsupportedParameter {
            adapter: "Batch",
            parameter: "chunk_size"
        })
    ));

    let res = WlrBuilder::<f64>::new().min_points(2).adapter(Batch).build();
    assert!(matches!(
        res,
        Err(WlrError::UnsupportedParameter {
            parameter: "min_points",
            ..
        })
    ));
}

/// Test that the streaming adapter rejects online parameters.
#[test]
fn test_api_streaming_rejects_unsupported() {
    let res = WlrBuilder::<f64>::new()
        .window_capacity(4)
        .adapter(Streaming)
        .build();

    assert!(matches!(
        res,
        Err(WlrError::UnsupportedParameter {
            adapter: "Streaming",
            parameter: "window_capacity"
        })
    ));
}

/// Test that the online adapter rejects the chunk size.
#[test]
fn test_api_online_rejects_unsupported() {
    let res = WlrBuilder::<f64>::new().chunk_size(4).adapter(Online).build();

    assert!(matches!(
        res,
        Err(WlrError::UnsupportedParameter {
            adapter: "Online",
            parameter: "chunk_size"
        })
    ));
}

/// Test that parameter validation still applies after routing.
#[test]
fn test_api_streaming_invalid_chunk_size() {
    let res = WlrBuilder::<f64>::new().chunk_size(0).adapter(Streaming).build();

    assert!(matches!(res, Err(WlrError::InvalidChunkSize { .. })));
}

// ============================================================================
// Duplicate Detection Tests
// ============================================================================

/// Test that setting a parameter twice fails at build time.
#[test]
fn test_api_duplicate_parameter() {
    let res = WlrBuilder::<f64>::new()
        .window_capacity(4)
        .window_capacity(8)
        .adapter(Online)
        .build();

    assert!(matches!(
        res,
        Err(WlrError::DuplicateParameter {
            parameter: "window_capacity"
        })
    ));
}

// ============================================================================
// Convenience Function Tests
// ============================================================================

/// Test the convenience function against the reference fit.
#[test]
fn test_regress_reference() {
    let r = regress(
        &[1.0, 2.0, 4.0, 8.0, 7.0],
        &[10.0, 11.0, 9.0, 7.0, 12.0],
        &[0.1, 0.2, 0.1, 0.2, 0.4],
    )
    .unwrap();

    assert_relative_eq!(r.slope, -0.34995112414467133, epsilon = 1e-9);
    assert_relative_eq!(r.intercept, 10.54740957966764, epsilon = 1e-9);
}

/// Test the convenience function on f32 data.
#[test]
fn test_regress_f32() {
    let x: Vec<f32> = (0..20).map(|i| i as f32).collect();
    let y: Vec<f32> = x.iter().map(|v| 0.5 * v + 2.0).collect();
    let e = vec![1.0f32; 20];

    let r = regress(&x, &y, &e).unwrap();

    assert_relative_eq!(r.slope, 0.5, epsilon = 1e-4);
    assert_relative_eq!(r.intercept, 2.0, epsilon = 1e-3);
}
