//! Error types for weighted regression operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while configuring
//! or feeding a regression: mismatched input shapes, invalid adapter settings
//! and builder misuse.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (e.g., all three input lengths).
//! * **Deferred**: Builder misuse is recorded and reported by `build()`.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Shape errors**: The three input sequences must have the same length.
//! 2. **Adapter constraints**: Invalid chunk size, window capacity or activation threshold,
//!    or a parameter that the selected adapter does not use.
//! 3. **Sentinels are not errors**: Degenerate fits (zero total weight, zero
//!    spread in x) are reported through `+inf`/`NaN` fields of the result, never here.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not classify numeric degeneracy.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for weighted regression operations.
#[derive(Debug, Clone, PartialEq)]
pub enum WlrError {
    /// `x`, `y` and `y_err` must have the same number of elements.
    MismatchedInputs {
        /// Number of elements in the `x` array.
        x_len: usize,
        /// Number of elements in the `y` array.
        y_len: usize,
        /// Number of elements in the `y_err` array.
        y_err_len: usize,
    },

    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),

    /// Chunk size must hold at least one sample.
    InvalidChunkSize {
        /// The chunk size provided.
        got: usize,
        /// Minimum allowed chunk size.
        min: usize,
    },

    /// Window capacity must be large enough to hold a line fit.
    InvalidWindowCapacity {
        /// The window capacity provided.
        got: usize,
        /// Minimum required window capacity.
        min: usize,
    },

    /// Minimum points must be at least 1 and at most the window capacity.
    InvalidMinPoints {
        /// The min_points provided.
        got: usize,
        /// The window capacity (or `usize::MAX` when unbounded).
        window_capacity: usize,
    },

    /// Parameter does not apply to the selected adapter.
    UnsupportedParameter {
        /// Name of the adapter (e.g., "Batch", "Streaming").
        adapter: &'static str,
        /// Name of the parameter.
        parameter: &'static str,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for WlrError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::MismatchedInputs {
                x_len,
                y_len,
                y_err_len,
            } => {
                write!(
                    f,
                    "Length mismatch: x has {x_len} points, y has {y_len}, y_err has {y_err_len}"
                )
            }
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::InvalidChunkSize { got, min } => {
                write!(f, "Invalid chunk_size: {got} (must be at least {min})")
            }
            Self::InvalidWindowCapacity { got, min } => {
                write!(f, "Invalid window_capacity: {got} (must be at least {min})")
            }
            Self::InvalidMinPoints {
                got,
                window_capacity,
            } => {
                write!(
                    f,
                    "Invalid min_points: {got} (must be between 1 and window_capacity {window_capacity})"
                )
            }
            Self::UnsupportedParameter { adapter, parameter } => {
                write!(f, "Adapter '{adapter}' does not support parameter: {parameter}")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for WlrError {}
