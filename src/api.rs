//! High-level API for LOWESS smoothing.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry point: a fluent builder for
//! configuring the smoother, and the model it produces.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`Lowess`] builder via `Lowess::new()`.
//! 2. Chain configuration methods (`.fraction()`, `.iterations()`).
//! 3. Call `.build()` to validate parameters and obtain a [`LowessModel`].
//! 4. Call `.fit(&x, &y)` to smooth the data.
//!
//! ```rust
//! use trend_lowess::prelude::*;
//!
//! let x = vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
//! let y = vec![1.0, 2.2, 2.9, 4.1, 5.2, 5.8];
//!
//! let curve = Lowess::new().fraction(0.5).build()?.fit(&x, &y)?;
//! assert_eq!(curve.len(), 6);
//! # Result::<(), LowessError>::Ok(())
//! ```

use num_traits::Float;

use crate::engine::executor::LowessExecutor;
use crate::engine::validator::Validator;
use crate::primitives::sorting;

// Publicly re-exported types
pub use crate::engine::output::SmoothedCurve;
pub use crate::primitives::errors::LowessError;

/// Default smoothing fraction (Cleveland's 2/3).
const DEFAULT_FRACTION: f64 = 2.0 / 3.0;

/// Fluent builder for configuring LOWESS parameters.
#[derive(Debug, Clone, Copy)]
pub struct Lowess<T> {
    fraction: T,
    iterations: usize,
}

impl<T: Float> Default for Lowess<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> Lowess<T> {
    /// Create a new builder with default settings (fraction 2/3, no
    /// robustness iterations).
    pub fn new() -> Self {
        Self {
            fraction: T::from(DEFAULT_FRACTION).unwrap_or_else(T::one),
            iterations: 0,
        }
    }

    /// Set the smoothing fraction (bandwidth), the proportion of samples
    /// used as the local neighborhood for each fit. Must be in (0, 1].
    pub fn fraction(mut self, fraction: T) -> Self {
        self.fraction = fraction;
        self
    }

    /// Set the number of robustness iterations (typically 0-4).
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Validate the configuration and build the model.
    pub fn build(self) -> Result<LowessModel<T>, LowessError> {
        Validator::validate_fraction(self.fraction)?;
        Validator::validate_iterations(self.iterations)?;
        Ok(LowessModel {
            fraction: self.fraction,
            iterations: self.iterations,
        })
    }
}

/// Validated LOWESS model, ready to fit data.
#[derive(Debug, Clone, Copy)]
pub struct LowessModel<T> {
    fraction: T,
    iterations: usize,
}

impl<T: Float> LowessModel<T> {
    /// Smoothing fraction this model was built with.
    pub fn fraction(&self) -> T {
        self.fraction
    }

    /// Perform LOWESS smoothing on the provided data.
    ///
    /// The data is sorted by x and duplicate x values are merged (averaged)
    /// before smoothing; the returned curve has one point per unique x, in
    /// ascending order.
    pub fn fit(&self, x: &[T], y: &[T]) -> Result<SmoothedCurve<T>, LowessError> {
        Validator::validate_inputs(x, y)?;

        let prepared = sorting::prepare(x, y);
        Validator::validate_distinct_x(&prepared.x)?;

        let n = prepared.x.len();
        let neighborhood = Validator::validate_neighborhood(n, self.fraction)?;

        let executor = LowessExecutor {
            fraction: self.fraction,
            neighborhood,
            iterations: self.iterations,
        };
        let output = executor.run(&prepared.x, &prepared.y);

        Ok(SmoothedCurve {
            x: prepared.x,
            y: output.smoothed,
            fraction: output.fraction_used,
            passes: output.passes,
        })
    }
}
