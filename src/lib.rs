//! # trend-lowess — LOWESS smoothing for a seasonal trend series
//!
//! LOWESS (Locally Weighted Scatterplot Smoothing) is a nonparametric
//! regression method that fits smooth curves through scatter plots. At each
//! point it fits a weighted linear regression using nearby data points, with
//! weights decreasing smoothly with distance. This produces flexible,
//! data-adaptive curves without assuming a global functional form.
//!
//! This crate provides a compact LOWESS library together with a demo
//! pipeline: a reproducible synthetic seasonal series (a sinusoidal trend
//! plus Gaussian noise), the smoother, and a chart presenter that overlays
//! the smoothed curve on the raw scatter.
//!
//! ## Quick Start
//!
//! ```rust
//! use trend_lowess::prelude::*;
//!
//! let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//! let y = vec![2.0, 4.1, 5.9, 8.2, 9.8];
//!
//! // Build the model
//! let model = Lowess::new()
//!     .fraction(0.6)      // Use 60% of data for each local fit
//!     .build()?;
//!
//! // Fit the model to the data
//! let curve = model.fit(&x, &y)?;
//! assert_eq!(curve.len(), x.len());
//!
//! println!("{}", curve);
//! # Result::<(), LowessError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! `fit` returns `Result<SmoothedCurve<T>, LowessError>`. Parameter errors
//! (fraction outside (0, 1], a neighborhood too small for a linear fit) and
//! degenerate inputs (fewer than 2 distinct x values, non-finite data)
//! surface as typed `LowessError` variants; the `?` operator is idiomatic.
//!
//! ## References
//!
//! - Cleveland, W. S. (1979). "Robust Locally Weighted Regression and Smoothing Scatterplots"

// Layer 1: Primitives - data structures and basic utilities.
pub mod primitives;

// Layer 2: Math - pure mathematical functions.
pub mod math;

// Layer 3: Algorithms - least squares and robustness weighting.
pub mod algorithms;

// Layer 4: Engine - validation, orchestration, and output types.
pub mod engine;

// High-level fluent API for LOWESS smoothing.
pub mod api;

// Demo pipeline: synthetic data generation and chart presentation.
pub mod demo;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{Lowess, LowessError, LowessModel, SmoothedCurve};
}
