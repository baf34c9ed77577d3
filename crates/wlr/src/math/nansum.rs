//! NaN-tolerant summation.
//!
//! ## Purpose
//!
//! Sums treat NaN entries as absent instead of letting a single missing value
//! poison the whole reduction. Rows with a missing `y` or a missing error
//! therefore drop out of the regression sums on their own.
//!
//! ## Design notes
//!
//! * **Dispatch**: The `NanSum` trait has a scalar default; `f64` and `f32`
//!   override it with `wide` SIMD lanes.
//! * **Ordering**: SIMD lanes change the summation order, so results agree with
//!   the scalar path up to floating-point rounding only.
//!
//! ## Invariants
//!
//! * Empty and all-NaN inputs sum to zero.
//! * Infinite entries are kept (they are not NaN).

// External dependencies
use num_traits::Float;
use wide::{f32x8, f64x2};

/// Add `v` to `acc` unless `v` is NaN.
#[inline(always)]
pub fn nan_add<T: Float>(acc: T, v: T) -> T {
    if v.is_nan() { acc } else { acc + v }
}

/// Scalar NaN-tolerant sum.
#[inline]
pub fn nan_sum_scalar<T: Float>(values: &[T]) -> T {
    values.iter().fold(T::zero(), |acc, &v| nan_add(acc, v))
}

/// SIMD NaN-tolerant sum (f64).
#[inline]
pub fn nan_sum_simd_f64(values: &[f64]) -> f64 {
    let zero = f64x2::splat(0.0);
    let mut acc = zero;

    let mut chunks = values.chunks_exact(2);
    for c in &mut chunks {
        let v = f64x2::new([c[0], c[1]]);
        acc += v.is_nan().blend(zero, v);
    }

    chunks
        .remainder()
        .iter()
        .fold(acc.reduce_add(), |s, &v| nan_add(s, v))
}

/// SIMD NaN-tolerant sum (f32).
#[inline]
pub fn nan_sum_simd_f32(values: &[f32]) -> f32 {
    let zero = f32x8::splat(0.0);
    let mut acc = zero;

    let mut chunks = values.chunks_exact(8);
    for c in &mut chunks {
        let v = f32x8::new([c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7]]);
        acc += v.is_nan().blend(zero, v);
    }

    chunks
        .remainder()
        .iter()
        .fold(acc.reduce_add(), |s, &v| nan_add(s, v))
}

/// Trait for type-specific NaN-tolerant summation.
pub trait NanSum: Float {
    /// Sum `values`, skipping NaN entries.
    #[inline]
    fn nan_sum(values: &[Self]) -> Self {
        nan_sum_scalar(values)
    }
}

impl NanSum for f64 {
    #[inline]
    fn nan_sum(values: &[f64]) -> f64 {
        nan_sum_simd_f64(values)
    }
}

impl NanSum for f32 {
    #[inline]
    fn nan_sum(values: &[f32]) -> f32 {
        nan_sum_simd_f32(values)
    }
}

/// Sum `values`, skipping NaN entries.
#[inline]
pub fn nan_sum<T: NanSum>(values: &[T]) -> T {
    T::nan_sum(values)
}
