//! Input validation for LOWESS configuration and data.
//!
//! ## Purpose
//!
//! This module provides the validation functions for LOWESS parameters and
//! input data: array lengths, finite values, parameter bounds, and the
//! minimum neighborhood size implied by the fraction.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or correct invalid inputs.
//! * This module does not perform the smoothing itself.

use num_traits::Float;

use crate::primitives::errors::LowessError;
use crate::primitives::window::Window;

/// Maximum supported robustness iterations.
const MAX_ITERATIONS: usize = 1000;

/// Validation utility for LOWESS configuration and input data.
///
/// All methods fail fast upon the first violation.
pub struct Validator;

impl Validator {
    /// Validate input arrays for LOWESS smoothing.
    pub fn validate_inputs<T: Float>(x: &[T], y: &[T]) -> Result<(), LowessError> {
        if x.is_empty() || y.is_empty() {
            return Err(LowessError::EmptyInput);
        }

        let n = x.len();
        if n != y.len() {
            return Err(LowessError::MismatchedInputs {
                x_len: n,
                y_len: y.len(),
            });
        }

        if n < 2 {
            return Err(LowessError::TooFewPoints { got: n, min: 2 });
        }

        // Combined loop for cache locality.
        for i in 0..n {
            if !x[i].is_finite() {
                return Err(LowessError::NonFiniteValue(format!(
                    "x[{}]={}",
                    i,
                    x[i].to_f64().unwrap_or(f64::NAN)
                )));
            }
            if !y[i].is_finite() {
                return Err(LowessError::NonFiniteValue(format!(
                    "y[{}]={}",
                    i,
                    y[i].to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    /// Validate the smoothing fraction (bandwidth) parameter.
    pub fn validate_fraction<T: Float>(fraction: T) -> Result<(), LowessError> {
        if !fraction.is_finite() || fraction <= T::zero() || fraction > T::one() {
            return Err(LowessError::InvalidFraction(
                fraction.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the number of robustness iterations.
    ///
    /// 0 iterations means initial fit only (no robustness).
    pub fn validate_iterations(iterations: usize) -> Result<(), LowessError> {
        if iterations > MAX_ITERATIONS {
            return Err(LowessError::InvalidIterations(iterations));
        }
        Ok(())
    }

    /// Validate the neighborhood size implied by the fraction.
    ///
    /// Returns k = ceil(fraction * n) on success. A linear fit needs at
    /// least 2 points, so k < 2 is a parameter error.
    pub fn validate_neighborhood<T: Float>(n: usize, fraction: T) -> Result<usize, LowessError> {
        let k = Window::neighborhood_size(n, fraction);
        if k < 2 {
            return Err(LowessError::NeighborhoodTooSmall { size: k, min: 2 });
        }
        Ok(k)
    }

    /// Validate that sorted x values contain at least 2 distinct entries.
    pub fn validate_distinct_x<T: Float>(x_sorted: &[T]) -> Result<(), LowessError> {
        let mut distinct = if x_sorted.is_empty() { 0 } else { 1 };
        for w in x_sorted.windows(2) {
            if w[1] > w[0] {
                distinct += 1;
            }
        }
        if distinct < 2 {
            return Err(LowessError::DegenerateX { distinct });
        }
        Ok(())
    }
}
