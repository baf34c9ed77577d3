//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure numeric building blocks of the regression:
//! - Inverse-variance weights from per-point errors
//! - NaN-tolerant summation
//!
//! These are reusable mathematical building blocks with no solver-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Inverse-variance weights.
pub mod weights;

/// NaN-tolerant summation (scalar and SIMD).
pub mod nansum;
