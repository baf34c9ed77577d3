//! Weighted moment accumulation.
//!
//! ## Purpose
//!
//! This module reduces `(x, y, w)` samples to the five scalars the closed-form
//! solver needs: the total weight and the weighted means of `x`, `x²`, `y` and
//! `x·y`.
//!
//! ## Design notes
//!
//! * **Independent NaN exclusion**: Each sum skips its own NaN products. A NaN
//!   `y_i` removes sample `i` from `Σy·w` and `Σx·y·w` but not from `Σw`.
//! * **Mergeable**: Raw sums are kept until `finalize`, so chunks (streaming,
//!   rayon workers) can be accumulated separately and merged.
//! * **Zero-error samples**: An infinite weight cannot be divided out, so those
//!   samples are accumulated apart. When any are present they alone define the
//!   means (unit weight each) and the total weight is `+inf`. The means are the
//!   limit as those errors go to zero; the line is not. A single zero-error
//!   sample leaves no spread in x and the solver reports a vertical fit.
//! * **Dispatch**: `MomentAccumulator` has a scalar default; `f64`/`f32` use a
//!   fused `wide` SIMD pass when no weight is infinite.
//!
//! ## Invariants
//!
//! * `finalize` never divides by a non-positive total weight; all means are 0 then.
//! * `merge` is associative and commutative up to floating-point rounding.

// External dependencies
use num_traits::Float;
use wide::{f32x8, f64x2};

// Internal dependencies
use crate::math::nansum::{NanSum, nan_add};

// ============================================================================
// Exact (zero-error) Samples
// ============================================================================

/// Unweighted sums over samples whose weight is infinite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExactSums<T> {
    /// Number of samples with infinite weight.
    pub count: usize,
    /// Σx
    pub sum_x: T,
    /// Σx²
    pub sum_x2: T,
    /// Σy
    pub sum_y: T,
    /// Σx·y
    pub sum_xy: T,
}

impl<T: Float> ExactSums<T> {
    /// Empty accumulator.
    pub fn zero() -> Self {
        Self {
            count: 0,
            sum_x: T::zero(),
            sum_x2: T::zero(),
            sum_y: T::zero(),
            sum_xy: T::zero(),
        }
    }

    #[inline]
    fn push(&mut self, x: T, y: T) {
        self.count += 1;
        self.sum_x = nan_add(self.sum_x, x);
        self.sum_x2 = nan_add(self.sum_x2, x * x);
        self.sum_y = nan_add(self.sum_y, y);
        self.sum_xy = nan_add(self.sum_xy, x * y);
    }

    #[inline]
    fn merge(&mut self, other: &Self) {
        self.count += other.count;
        self.sum_x = self.sum_x + other.sum_x;
        self.sum_x2 = self.sum_x2 + other.sum_x2;
        self.sum_y = self.sum_y + other.sum_y;
        self.sum_xy = self.sum_xy + other.sum_xy;
    }
}

// ============================================================================
// Raw Moment Sums
// ============================================================================

/// Raw, mergeable weighted sums of a sample set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MomentSums<T> {
    /// Number of samples seen (including NaN and zero-error samples).
    pub points: usize,
    /// Σw over finite weights.
    pub sum_w: T,
    /// Σx·w
    pub sum_wx: T,
    /// Σx²·w
    pub sum_wx2: T,
    /// Σy·w
    pub sum_wy: T,
    /// Σx·y·w
    pub sum_wxy: T,
    /// Sums over infinite-weight samples.
    pub exact: ExactSums<T>,
}

impl<T: Float> Default for MomentSums<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Float> MomentSums<T> {
    /// Empty accumulator.
    pub fn zero() -> Self {
        Self {
            points: 0,
            sum_w: T::zero(),
            sum_wx: T::zero(),
            sum_wx2: T::zero(),
            sum_wy: T::zero(),
            sum_wxy: T::zero(),
            exact: ExactSums::zero(),
        }
    }

    /// Whether no sample has been accumulated.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points == 0
    }

    /// Fold a single sample with weight `w`.
    #[inline]
    pub fn push(&mut self, x: T, y: T, w: T) {
        self.points += 1;

        if w == T::infinity() {
            self.exact.push(x, y);
            return;
        }

        self.sum_w = nan_add(self.sum_w, w);
        self.sum_wx = nan_add(self.sum_wx, x * w);
        self.sum_wx2 = nan_add(self.sum_wx2, x * x * w);
        self.sum_wy = nan_add(self.sum_wy, y * w);
        self.sum_wxy = nan_add(self.sum_wxy, x * y * w);
    }

    /// Fold equal-length slices of samples and weights.
    pub fn accumulate(&mut self, x: &[T], y: &[T], w: &[T]) {
        for ((&xi, &yi), &wi) in x.iter().zip(y).zip(w) {
            self.push(xi, yi, wi);
        }
    }

    /// Combine the sums of a disjoint sample set into `self`.
    pub fn merge(&mut self, other: &Self) {
        self.points += other.points;
        self.sum_w = self.sum_w + other.sum_w;
        self.sum_wx = self.sum_wx + other.sum_wx;
        self.sum_wx2 = self.sum_wx2 + other.sum_wx2;
        self.sum_wy = self.sum_wy + other.sum_wy;
        self.sum_wxy = self.sum_wxy + other.sum_wxy;
        self.exact.merge(&other.exact);
    }

    /// Convert the raw sums into weighted means.
    pub fn finalize(&self) -> WeightedMoments<T> {
        if self.exact.count > 0 {
            let n = T::from(self.exact.count).unwrap_or(T::one());
            log::debug!(
                "{} zero-error sample(s) dominate the fit; using their unweighted means",
                self.exact.count
            );
            return WeightedMoments {
                total_weight: T::infinity(),
                x_mean: self.exact.sum_x / n,
                x2_mean: self.exact.sum_x2 / n,
                y_mean: self.exact.sum_y / n,
                xy_mean: self.exact.sum_xy / n,
            };
        }

        // Catch bad data, indicated by zero (or negative) total weight
        if self.sum_w <= T::zero() {
            log::debug!(
                "total weight {:?} over {} sample(s) is not positive",
                self.sum_w.to_f64(),
                self.points
            );
            return WeightedMoments::zero();
        }

        let w = self.sum_w;
        WeightedMoments {
            total_weight: w,
            x_mean: self.sum_wx / w,
            x2_mean: self.sum_wx2 / w,
            y_mean: self.sum_wy / w,
            xy_mean: self.sum_wxy / w,
        }
    }
}

// ============================================================================
// Weighted Moments
// ============================================================================

/// Total weight and weighted means of a sample set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedMoments<T> {
    /// W = Σw (0 for degenerate weights, `+inf` with zero-error samples).
    pub total_weight: T,
    /// Weighted mean of x.
    pub x_mean: T,
    /// Weighted mean of x².
    pub x2_mean: T,
    /// Weighted mean of y.
    pub y_mean: T,
    /// Weighted mean of x·y.
    pub xy_mean: T,
}

impl<T: Float> WeightedMoments<T> {
    /// All-zero moments (the degenerate-weight state).
    pub fn zero() -> Self {
        Self {
            total_weight: T::zero(),
            x_mean: T::zero(),
            x2_mean: T::zero(),
            y_mean: T::zero(),
            xy_mean: T::zero(),
        }
    }

    /// Weighted variance of x: `x2m - xm²`.
    #[inline]
    pub fn x_variance(&self) -> T {
        self.x2_mean - self.x_mean * self.x_mean
    }

    /// Weighted covariance of x and y: `xym - xm·ym`.
    #[inline]
    pub fn xy_covariance(&self) -> T {
        self.xy_mean - self.x_mean * self.y_mean
    }
}

// ============================================================================
// Accumulation Passes
// ============================================================================

/// Scalar moment pass (generic Float).
#[inline]
pub fn accumulate_moments_scalar<T: Float>(x: &[T], y: &[T], w: &[T]) -> MomentSums<T> {
    let mut sums = MomentSums::zero();
    sums.accumulate(x, y, w);
    sums
}

/// Fused SIMD moment pass (f64).
pub fn accumulate_moments_simd_f64(x: &[f64], y: &[f64], w: &[f64]) -> MomentSums<f64> {
    let n = x.len().min(y.len()).min(w.len());
    if w[..n].iter().any(|wi| *wi == f64::INFINITY) {
        return accumulate_moments_scalar(&x[..n], &y[..n], &w[..n]);
    }

    let zero = f64x2::splat(0.0);
    let clean = |v: f64x2| v.is_nan().blend(zero, v);

    let mut s_wx = zero;
    let mut s_wx2 = zero;
    let mut s_wy = zero;
    let mut s_wxy = zero;

    let lanes = n - n % 2;
    for i in (0..lanes).step_by(2) {
        let wv = f64x2::new([w[i], w[i + 1]]);
        let xv = f64x2::new([x[i], x[i + 1]]);
        let yv = f64x2::new([y[i], y[i + 1]]);

        s_wx += clean(xv * wv);
        s_wx2 += clean(xv * xv * wv);
        s_wy += clean(yv * wv);
        s_wxy += clean(xv * yv * wv);
    }

    let mut sums = MomentSums {
        points: lanes,
        sum_w: f64::nan_sum(&w[..lanes]),
        sum_wx: s_wx.reduce_add(),
        sum_wx2: s_wx2.reduce_add(),
        sum_wy: s_wy.reduce_add(),
        sum_wxy: s_wxy.reduce_add(),
        exact: ExactSums::zero(),
    };
    sums.accumulate(&x[lanes..n], &y[lanes..n], &w[lanes..n]);
    sums
}

/// Fused SIMD moment pass (f32).
pub fn accumulate_moments_simd_f32(x: &[f32], y: &[f32], w: &[f32]) -> MomentSums<f32> {
    let n = x.len().min(y.len()).min(w.len());
    if w[..n].iter().any(|wi| *wi == f32::INFINITY) {
        return accumulate_moments_scalar(&x[..n], &y[..n], &w[..n]);
    }

    let zero = f32x8::splat(0.0);
    let clean = |v: f32x8| v.is_nan().blend(zero, v);
    let load = |s: &[f32]| f32x8::new([s[0], s[1], s[2], s[3], s[4], s[5], s[6], s[7]]);

    let mut s_wx = zero;
    let mut s_wx2 = zero;
    let mut s_wy = zero;
    let mut s_wxy = zero;

    let lanes = n - n % 8;
    for i in (0..lanes).step_by(8) {
        let wv = load(&w[i..i + 8]);
        let xv = load(&x[i..i + 8]);
        let yv = load(&y[i..i + 8]);

        s_wx += clean(xv * wv);
        s_wx2 += clean(xv * xv * wv);
        s_wy += clean(yv * wv);
        s_wxy += clean(xv * yv * wv);
    }

    let mut sums = MomentSums {
        points: lanes,
        sum_w: f32::nan_sum(&w[..lanes]),
        sum_wx: s_wx.reduce_add(),
        sum_wx2: s_wx2.reduce_add(),
        sum_wy: s_wy.reduce_add(),
        sum_wxy: s_wxy.reduce_add(),
        exact: ExactSums::zero(),
    };
    sums.accumulate(&x[lanes..n], &y[lanes..n], &w[lanes..n]);
    sums
}

/// Trait for type-specific moment accumulation.
pub trait MomentAccumulator: NanSum {
    /// Reduce equal-length `x`, `y`, `w` slices to raw moment sums.
    #[inline]
    fn accumulate_moments(x: &[Self], y: &[Self], w: &[Self]) -> MomentSums<Self> {
        accumulate_moments_scalar(x, y, w)
    }
}

impl MomentAccumulator for f64 {
    #[inline]
    fn accumulate_moments(x: &[f64], y: &[f64], w: &[f64]) -> MomentSums<f64> {
        accumulate_moments_simd_f64(x, y, w)
    }
}

impl MomentAccumulator for f32 {
    #[inline]
    fn accumulate_moments(x: &[f32], y: &[f32], w: &[f32]) -> MomentSums<f32> {
        accumulate_moments_simd_f32(x, y, w)
    }
}
