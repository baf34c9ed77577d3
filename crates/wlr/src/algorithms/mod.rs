//! Layer 3: Algorithms
//!
//! This layer implements the regression itself: accumulation of the weighted
//! moments (the sufficient statistics of the fit) and the closed-form solver
//! that turns them into slope, intercept and their uncertainties. It is
//! orchestrated by the engine layer.

// Weighted moment accumulation.
pub mod moments;

// Closed-form slope/intercept solver with degeneracy sentinels.
pub mod solver;
