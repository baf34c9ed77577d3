//! # Fast WLR (Weighted Linear Regression)
//!
//! Parallel extension of the [`wlr`] crate: closed-form weighted least-squares
//! fitting of a straight line to samples with known errors on `y`, with the
//! sample moments reduced on all CPU cores.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use fastWlr::prelude::*;
//! use ndarray::Array1;
//!
//! let x = Array1::from_vec(vec![1.0, 2.0, 4.0, 8.0, 7.0]);
//! let y = Array1::from_vec(vec![10.0, 11.0, 9.0, 7.0, 12.0]);
//! let y_err = Array1::from_vec(vec![0.1, 0.2, 0.1, 0.2, 0.4]);
//!
//! // Build the model with parallel execution (default)
//! let model = Wlr::<f64>::new()
//!     .adapter(Batch)
//!     .build()?;
//!
//! let result = model.fit(&x, &y, &y_err)?;
//!
//! assert!((result.slope - (-0.34995112414467133)).abs() < 1e-9);
//! assert!((result.intercept - 10.54740957966764).abs() < 1e-9);
//! # Result::<(), WlrError>::Ok(())
//! ```
//!
//! ### Many Independent Fits
//!
//! ```rust
//! use fastWlr::prelude::*;
//!
//! let x: [f64; 3] = [0.0, 1.0, 2.0];
//! let rising = [0.0, 1.0, 2.0];
//! let falling = [2.0, 1.0, 0.0];
//! let err = [1.0, 1.0, 1.0];
//!
//! let fits = regress_many(&[(&x[..], &rising[..], &err[..]), (&x[..], &falling[..], &err[..])])?;
//!
//! assert!((fits[0].slope - 1.0).abs() < 1e-12);
//! assert!((fits[1].slope + 1.0).abs() < 1e-12);
//! # Result::<(), WlrError>::Ok(())
//! ```
//!
//! ## Execution Modes
//!
//! | Adapter     | Default  | Parallel work                         |
//! |-------------|----------|---------------------------------------|
//! | `Batch`     | parallel | moment reduction over the whole input |
//! | `Streaming` | parallel | moment reduction within each chunk    |
//! | `Online`    | serial   | window rebuilds (opt-in)              |
//!
//! Inputs shorter than the parallel threshold are always reduced serially.
//!
//! ## Features
//!
//! * `cpu` (default): `rayon` parallel execution. Without it every adapter
//!   runs the serial pass of the `wlr` crate.
//! * `dev`: exposes internal modules for testing.

#![allow(non_snake_case)]

// Layer 5: Engine - parallel execution passes.
mod engine;

// Layer 6: Adapters - execution mode adapters.
mod adapters;

// High-level fluent API for weighted regression.
mod api;

// Input data handling.
mod input;

// Standard fastWlr prelude.
pub mod prelude {
    pub use crate::api::{
        Adapter::{Batch, Online, Streaming},
        OnlineOutput, RegressionResult, WlrBuilder as Wlr, WlrError, regress, regress_many,
    };
    pub use crate::input::WlrInput;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
    pub mod input {
        pub use crate::input::*;
    }
}
