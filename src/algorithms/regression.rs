//! Least squares fitting for LOWESS local regression.
//!
//! ## Purpose
//!
//! This module provides the degree-1 least squares solvers behind each
//! local fit: weighted least squares (WLS) inside a kernel-weighted window,
//! and ordinary least squares (OLS) for the global-line case (fraction of
//! exactly 1).
//!
//! ## Design notes
//!
//! * **Single pass**: WLS accumulates the five weighted sums (w, wx, wy,
//!   wxx, wxy) in one loop and solves the 2x2 normal equations directly.
//! * **Degenerate variance**: when the weighted variance of x falls below
//!   tolerance the fit collapses to a constant at the weighted mean of y.

use num_traits::Float;

/// Linear regression fit result (slope and intercept).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit<T> {
    /// Slope (beta_1).
    pub slope: T,

    /// Intercept (beta_0).
    pub intercept: T,
}

impl<T: Float> LinearFit<T> {
    /// Predict the y value for a given x using the fitted line.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.intercept + self.slope * x
    }

    /// Fit an unweighted (ordinary) least squares line.
    ///
    /// Returns `None` for empty input. Constant x collapses to a
    /// horizontal line through the mean of y.
    pub fn fit_ols(x: &[T], y: &[T]) -> Option<Self> {
        let n = x.len();
        if n == 0 {
            return None;
        }

        let n_t = T::from(n).unwrap_or_else(T::one);
        let x_mean = x.iter().fold(T::zero(), |acc, &v| acc + v) / n_t;
        let y_mean = y.iter().fold(T::zero(), |acc, &v| acc + v) / n_t;

        let mut variance = T::zero();
        let mut covariance = T::zero();
        for i in 0..n {
            let dx = x[i] - x_mean;
            variance = variance + dx * dx;
            covariance = covariance + dx * (y[i] - y_mean);
        }

        let tol = T::from(1e-12).unwrap_or_else(T::epsilon);
        if variance <= tol {
            return Some(Self {
                slope: T::zero(),
                intercept: y_mean,
            });
        }

        let slope = covariance / variance;
        Some(Self {
            slope,
            intercept: y_mean - slope * x_mean,
        })
    }

    /// Fit a weighted least squares line.
    ///
    /// `radius` scales the variance tolerance so that numerically flat
    /// windows are detected relative to the window extent. Returns `None`
    /// when the total weight is not positive.
    pub fn fit_wls(x: &[T], y: &[T], weights: &[T], radius: T) -> Option<Self> {
        debug_assert_eq!(x.len(), y.len());
        debug_assert_eq!(x.len(), weights.len());

        let mut sum_w = T::zero();
        let mut sum_wx = T::zero();
        let mut sum_wy = T::zero();
        let mut sum_wxx = T::zero();
        let mut sum_wxy = T::zero();

        for i in 0..x.len() {
            let w = weights[i];
            let wx = w * x[i];
            sum_w = sum_w + w;
            sum_wx = sum_wx + wx;
            sum_wy = sum_wy + w * y[i];
            sum_wxx = sum_wxx + wx * x[i];
            sum_wxy = sum_wxy + wx * y[i];
        }

        if sum_w <= T::zero() {
            return None;
        }

        let x_mean = sum_wx / sum_w;
        let y_mean = sum_wy / sum_w;
        let variance = sum_wxx - (sum_wx * sum_wx) / sum_w;

        let abs_tol = T::from(1e-7).unwrap_or_else(T::epsilon);
        let rel_tol = T::epsilon() * radius * radius;
        let tol = abs_tol.max(rel_tol);

        if variance <= tol {
            return Some(Self {
                slope: T::zero(),
                intercept: y_mean,
            });
        }

        let covariance = sum_wxy - (sum_wx * sum_wy) / sum_w;
        let slope = covariance / variance;
        Some(Self {
            slope,
            intercept: y_mean - slope * x_mean,
        })
    }
}

/// Unweighted mean of a slice, used as the zero-weight fallback.
#[inline]
pub fn local_mean<T: Float>(y: &[T]) -> T {
    if y.is_empty() {
        return T::zero();
    }
    let n_t = T::from(y.len()).unwrap_or_else(T::one);
    y.iter().fold(T::zero(), |acc, &v| acc + v) / n_t
}
