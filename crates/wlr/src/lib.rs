//! # WLR: Weighted Linear Regression with errors on y
//!
//! A small, exact implementation of the inverse-variance weighted
//! least-squares line fit for **Rust**: given samples `(x_i, y_i)` with an
//! uncertainty `σ_i` on each `y_i`, find the line `y = slope·x + intercept`
//! minimizing `Σ (y_i − slope·x_i − intercept)² / σ_i²`, together with the
//! standard errors of slope and intercept and their covariance.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use wlr::prelude::*;
//!
//! let x: Vec<f64> = vec![1.0, 2.0, 4.0, 8.0, 7.0];
//! let y = vec![10.0, 11.0, 9.0, 7.0, 12.0];
//! let y_err = vec![0.1, 0.2, 0.1, 0.2, 0.4];
//!
//! let result = regress(&x, &y, &y_err)?;
//!
//! assert!((result.slope - -0.34995112414467133).abs() < 1e-9);
//! assert!((result.intercept - 10.54740957966764).abs() < 1e-9);
//! println!("{}", result);
//! # Result::<(), WlrError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!
//!  Parameter            Value          Std_Err
//! --------------------------------------------
//!      slope      -0.34995112       0.02831191
//!  intercept      10.54740958       0.10767243
//!
//!   Covariance(slope, intercept): -0.0024828934506353857
//! ```
//!
//! ### Adapters
//!
//! The same estimator can be fed in one go, in chunks, or one sample at a time:
//!
//! ```rust
//! use wlr::prelude::*;
//!
//! let mut stream = Wlr::<f64>::new()
//!     .chunk_size(1024)
//!     .adapter(Streaming)
//!     .build()?;
//!
//! stream.process_chunk(&[1.0, 2.0], &[10.0, 11.0], &[0.1, 0.2])?;
//! stream.process_chunk(&[4.0, 8.0, 7.0], &[9.0, 7.0, 12.0], &[0.1, 0.2, 0.4])?;
//!
//! let result = stream.finalize();
//! assert!((result.slope - -0.34995112414467133).abs() < 1e-9);
//! # Result::<(), WlrError>::Ok(())
//! ```
//!
//! ## Degenerate Fits
//!
//! Degenerate inputs never produce an error. They are reported through
//! IEEE-754 sentinels in fixed fields of [`prelude::RegressionResult`]:
//!
//! | condition                      | slope  | intercept | slope_err | intercept_err | covar |
//! |--------------------------------|--------|-----------|-----------|---------------|-------|
//! | no positive total weight       | +inf   | NaN       | +inf      | NaN           | NaN   |
//! | no weighted spread in x        | +inf   | NaN       | +inf      | NaN           | NaN   |
//! | otherwise                      | finite | finite    | finite    | finite        | finite|
//!
//! Callers check `result.is_degenerate()` (or the individual fields) instead
//! of matching on an error. The only error is a length mismatch between
//! `x`, `y` and `y_err`.
//!
//! NaN entries in any input drop out of each weighted sum they would poison.
//! A zero error gives an infinite weight. The weighted means then collapse
//! onto the zero-error samples, and the line is fitted through those samples
//! alone with zero uncertainty. A single zero-error sample has no spread in
//! x, so it is reported as a vertical fit, even though a tiny nonzero error
//! on the same sample would give an ordinary line.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! wlr = { version = "0.3", default-features = false }
//! ```
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Algorithms - moment accumulation and the closed-form solver.
mod algorithms;

// Layer 5: Engine - orchestration and execution control.
mod engine;

// Layer 6: Adapters - execution mode adapters.
mod adapters;

// High-level fluent API.
mod api;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        Adapter::{Batch, Online, Streaming},
        BatchWlr, OnlineOutput, OnlineWlr, RegressionResult, StreamingWlr, WlrBuilder as Wlr,
        WlrError, nan_sum, regress, weights_from_errors,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
