//! Inverse-variance weights.
//!
//! Each sample's weight is `err^-2`. Only the magnitude of the error matters,
//! a zero error gives an infinite weight and a NaN error gives a NaN weight
//! (which later drops out of every NaN-tolerant sum).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

/// Weight of a single sample with error `err`.
#[inline]
pub fn inverse_variance_weight<T: Float>(err: T) -> T {
    err.powi(-2)
}

/// Convert a sequence of errors into a sequence of weights of the same length.
pub fn weights_from_errors<T: Float>(errors: &[T]) -> Vec<T> {
    errors.iter().map(|&e| inverse_variance_weight(e)).collect()
}

/// Write the weights of `errors` into `out`.
///
/// `out` must have the same length as `errors`.
pub fn fill_weights<T: Float>(errors: &[T], out: &mut [T]) {
    debug_assert_eq!(errors.len(), out.len(), "fill_weights: length mismatch");
    for (w, &e) in out.iter_mut().zip(errors) {
        *w = inverse_variance_weight(e);
    }
}
