//! Input validation for regression configuration and data.
//!
//! ## Purpose
//!
//! This module provides the validation functions for the regression inputs
//! and for adapter parameters.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Shape only**: Values are never checked. NaN and infinite entries are
//!   legitimate data (missing samples, zero errors) handled by the math layer.
//!
//! ## Key concepts
//!
//! * **Equal lengths**: `x`, `y` and `y_err` must line up one-to-one; nothing
//!   is truncated or broadcast.
//! * **Empty input**: Allowed. It produces the degenerate result.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not filter, clean or reorder input data.

// Internal dependencies
use crate::primitives::errors::WlrError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for regression configuration and input data.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate that the three input sequences have the same length.
    pub fn validate_inputs<T>(x: &[T], y: &[T], y_err: &[T]) -> Result<(), WlrError> {
        if x.len() != y.len() || x.len() != y_err.len() {
            return Err(WlrError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
                y_err_len: y_err.len(),
            });
        }
        Ok(())
    }

    // ========================================================================
    // Adapter-Specific Validation
    // ========================================================================

    /// Validate the chunk size for streaming mode.
    pub fn validate_chunk_size(chunk_size: usize, min: usize) -> Result<(), WlrError> {
        if chunk_size < min {
            return Err(WlrError::InvalidChunkSize {
                got: chunk_size,
                min,
            });
        }
        Ok(())
    }

    /// Validate the capacity of the sliding window in online mode.
    pub fn validate_window_capacity(window_capacity: usize, min: usize) -> Result<(), WlrError> {
        if window_capacity < min {
            return Err(WlrError::InvalidWindowCapacity {
                got: window_capacity,
                min,
            });
        }
        Ok(())
    }

    /// Validate the activation threshold for online mode.
    pub fn validate_min_points(
        min_points: usize,
        window_capacity: Option<usize>,
    ) -> Result<(), WlrError> {
        let cap = window_capacity.unwrap_or(usize::MAX);
        if min_points < 1 || min_points > cap {
            return Err(WlrError::InvalidMinPoints {
                got: min_points,
                window_capacity: cap,
            });
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), WlrError> {
        if let Some(param) = duplicate_param {
            return Err(WlrError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
