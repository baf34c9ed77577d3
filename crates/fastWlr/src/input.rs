//! Input abstractions for weighted regression.
//!
//! ## Purpose
//!
//! This module provides a unified abstraction for regression inputs, allowing
//! `fit` to accept slices, vectors and ndarray arrays through one interface.
//!
//! ## Design notes
//!
//! * **Zero-copy**: Provides direct slice access to the underlying buffers.
//! * **Fail-fast**: Non-contiguous ndarray views are rejected rather than copied.
//!
//! ## Invariants
//!
//! * Returned slices represent all elements of the input container, in order.

// External dependencies
use ndarray::{ArrayBase, Data, Ix1};
use num_traits::Float;

// Export dependencies from wlr crate
use wlr::internals::primitives::errors::WlrError;

/// Trait for types that can be used as regression input.
pub trait WlrInput<T: Float> {
    /// Convert the input to a contiguous slice.
    fn as_wlr_slice(&self) -> Result<&[T], WlrError>;
}

impl<T: Float> WlrInput<T> for [T] {
    fn as_wlr_slice(&self) -> Result<&[T], WlrError> {
        Ok(self)
    }
}

impl<T: Float> WlrInput<T> for Vec<T> {
    fn as_wlr_slice(&self) -> Result<&[T], WlrError> {
        Ok(self.as_slice())
    }
}

impl<T: Float, S> WlrInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn as_wlr_slice(&self) -> Result<&[T], WlrError> {
        self.as_slice().ok_or_else(|| {
            WlrError::InvalidInput("ndarray input must be contiguous in memory".to_string())
        })
    }
}
