//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the regression: it validates inputs, drives the
//! weight/moment/solve pipeline and defines the output record.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Pipeline execution.
pub mod executor;

/// Result record.
pub mod output;

/// Input and parameter validation.
pub mod validator;
