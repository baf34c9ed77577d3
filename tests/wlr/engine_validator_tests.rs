#![cfg(feature = "dev")]
//! Tests for input and parameter validation.
//!
//! These tests verify the checks shared by every adapter:
//! - Length agreement of `x`, `y` and `y_err`
//! - Adapter parameters (chunk size, window capacity, activation threshold)
//! - Duplicate parameter detection and error messages
//!
//! ## Test Organization
//!
//! 1. **Input Validation** - Length checks
//! 2. **Parameter Validation** - Adapter-specific bounds
//! 3. **Error Messages** - Display output

use wlr::internals::engine::validator::Validator;
use wlr::internals::primitives::errors::WlrError;

// ============================================================================
// Input Validation Tests
// ============================================================================

/// Test that equal lengths are accepted, including empty input.
#[test]
fn test_validate_inputs_equal_lengths() {
    let v = [1.0f64, 2.0, 3.0];
    assert!(Validator::validate_inputs(&v, &v, &v).is_ok());

    let empty: [f64; 0] = [];
    assert!(Validator::validate_inputs(&empty, &empty, &empty).is_ok());
}

/// Test that NaN values are not a validation concern.
#[test]
fn test_validate_inputs_accepts_nan() {
    let x = [f64::NAN, 1.0];
    let y = [1.0, f64::NAN];
    let e = [0.0, f64::INFINITY];

    assert!(Validator::validate_inputs(&x, &y, &e).is_ok());
}

/// Test length mismatch between x and y.
#[test]
fn test_validate_inputs_mismatch_y() {
    let res = Validator::validate_inputs(&[1.0f64, 2.0], &[1.0], &[1.0, 1.0]);

    assert_eq!(
        res,
        Err(WlrError::MismatchedInputs {
            x_len: 2,
            y_len: 1,
            y_err_len: 2
        })
    );
}

/// Test length mismatch of y_err alone.
#[test]
fn test_validate_inputs_mismatch_err() {
    let res = Validator::validate_inputs(&[1.0f64, 2.0], &[1.0, 2.0], &[1.0, 1.0, 1.0]);

    assert!(matches!(
        res,
        Err(WlrError::MismatchedInputs { y_err_len: 3, .. })
    ));
}

// ============================================================================
// Parameter Validation Tests
// ============================================================================

/// Test chunk size bounds.
#[test]
fn test_validate_chunk_size() {
    assert!(Validator::validate_chunk_size(1, 1).is_ok());
    assert_eq!(
        Validator::validate_chunk_size(0, 1),
        Err(WlrError::InvalidChunkSize { got: 0, min: 1 })
    );
}

/// Test window capacity bounds.
#[test]
fn test_validate_window_capacity() {
    assert!(Validator::validate_window_capacity(2, 2).is_ok());
    assert_eq!(
        Validator::validate_window_capacity(1, 2),
        Err(WlrError::InvalidWindowCapacity { got: 1, min: 2 })
    );
}

/// Test activation threshold bounds with and without a window.
#[test]
fn test_validate_min_points() {
    assert!(Validator::validate_min_points(1, None).is_ok());
    assert!(Validator::validate_min_points(1_000_000, None).is_ok());
    assert!(Validator::validate_min_points(5, Some(5)).is_ok());

    assert_eq!(
        Validator::validate_min_points(6, Some(5)),
        Err(WlrError::InvalidMinPoints {
            got: 6,
            window_capacity: 5
        })
    );
    assert!(matches!(
        Validator::validate_min_points(0, None),
        Err(WlrError::InvalidMinPoints { got: 0, .. })
    ));
}

/// Test duplicate parameter detection.
#[test]
fn test_validate_no_duplicates() {
    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert_eq!(
        Validator::validate_no_duplicates(Some("chunk_size")),
        Err(WlrError::DuplicateParameter {
            parameter: "chunk_size"
        })
    );
}

// ============================================================================
// Error Message Tests
// ============================================================================

/// Test that error messages name the offending values.
#[test]
fn test_error_display() {
    let err = WlrError::MismatchedInputs {
        x_len: 3,
        y_len: 2,
        y_err_len: 3,
    };
    let msg = format!("{err}");
    assert!(msg.contains("x has 3"));
    assert!(msg.contains("y has 2"));

    let err = WlrError::UnsupportedParameter {
        adapter: "Batch",
        parameter: "chunk_size",
    };
    let msg = format!("{err}");
    assert!(msg.contains("Batch"));
    assert!(msg.contains("chunk_size"));
}

/// Test that the error type works with `?` into a boxed error.
#[test]
fn test_error_is_std_error() {
    fn fails() -> Result<(), Box<dyn std::error::Error>> {
        Validator::validate_chunk_size(0, 1)?;
        Ok(())
    }

    assert!(fails().is_err());
}
