//! Layer 3: Algorithms
//!
//! This layer implements the numerical core of LOWESS: weighted and
//! ordinary least squares for the local linear fits, and bisquare
//! robustness weighting for outlier downweighting. It is orchestrated by
//! the engine layer.

/// Weighted and ordinary least squares fitting.
pub mod regression;

/// Robustness weight updates for outlier downweighting.
pub mod robustness;
