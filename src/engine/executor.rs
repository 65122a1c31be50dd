//! Execution engine for LOWESS smoothing operations.
//!
//! ## Purpose
//!
//! This module runs the smoothing passes: for every evaluation point it
//! recenters the nearest-neighbor window, computes tricube weights, solves
//! the weighted linear fit, and evaluates it at the point. It also owns the
//! robustness iteration loop.
//!
//! ## Invariants
//!
//! * Input x values are strictly increasing (the API layer sorts and
//!   merges duplicates before invoking the executor).
//! * All working buffers have the same length as the input data.
//! * Robustness weights are always in [0, 1].
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `validator`).
//! * This module does not sort input data (caller's responsibility).

use num_traits::Float;

use crate::algorithms::regression::{local_mean, LinearFit};
use crate::algorithms::robustness::update_robustness_weights;
use crate::math::kernel::fill_tricube_weights;
use crate::primitives::window::Window;

/// Output from LOWESS execution.
#[derive(Debug, Clone)]
pub struct ExecutorOutput<T> {
    /// Smoothed y values, aligned with the input x.
    pub smoothed: Vec<T>,

    /// Smoothing fraction used for the fit.
    pub fraction_used: T,

    /// Number of smoothing passes performed (1 + robustness iterations).
    pub passes: usize,
}

/// LOWESS smoothing executor.
///
/// Holds the resolved parameters for one smoothing run. Construction goes
/// through the API layer, which validates fraction, iterations, and the
/// neighborhood size before handing over.
#[derive(Debug, Clone, Copy)]
pub struct LowessExecutor<T> {
    /// Smoothing fraction in (0, 1].
    pub fraction: T,

    /// Neighborhood size k = ceil(fraction * n), at least 2.
    pub neighborhood: usize,

    /// Robustness iterations (0 means initial fit only).
    pub iterations: usize,
}

impl<T: Float> LowessExecutor<T> {
    /// Run the full smoothing loop over sorted, deduplicated data.
    pub fn run(&self, x: &[T], y: &[T]) -> ExecutorOutput<T> {
        let n = x.len();

        // Fraction of exactly 1 is the global unweighted least squares
        // line evaluated at every x.
        if self.fraction >= T::one() {
            let line = LinearFit::fit_ols(x, y).unwrap_or(LinearFit {
                slope: T::zero(),
                intercept: T::zero(),
            });
            return ExecutorOutput {
                smoothed: x.iter().map(|&xi| line.predict(xi)).collect(),
                fraction_used: self.fraction,
                passes: 1,
            };
        }

        let mut y_smooth = vec![T::zero(); n];
        let mut kernel_weights = vec![T::zero(); n];
        let mut robustness_weights = vec![T::one(); n];
        let mut scratch: Vec<T> = Vec::with_capacity(n);

        let mut passes = 0;
        for iter in 0..=self.iterations {
            passes = iter + 1;

            self.smooth_pass(
                x,
                y,
                iter > 0,
                &robustness_weights,
                &mut kernel_weights,
                &mut y_smooth,
            );

            // Reweight for the next pass (skip after the last one).
            if iter < self.iterations {
                update_robustness_weights(y, &y_smooth, &mut robustness_weights, &mut scratch);
            }
        }

        ExecutorOutput {
            smoothed: y_smooth,
            fraction_used: self.fraction,
            passes,
        }
    }

    /// Perform a single smoothing pass over all points.
    fn smooth_pass(
        &self,
        x: &[T],
        y: &[T],
        use_robustness: bool,
        robustness_weights: &[T],
        kernel_weights: &mut [T],
        y_smooth: &mut [T],
    ) {
        let n = x.len();
        let mut window = Window::initialize(0, self.neighborhood, n);

        for i in 0..n {
            window.recenter(x, i);
            y_smooth[i] = self.fit_at(
                x,
                y,
                i,
                window,
                use_robustness,
                robustness_weights,
                kernel_weights,
            );
        }
    }

    /// Fit the local weighted line at index `i` and evaluate it there.
    #[allow(clippy::too_many_arguments)]
    fn fit_at(
        &self,
        x: &[T],
        y: &[T],
        i: usize,
        window: Window,
        use_robustness: bool,
        robustness_weights: &[T],
        kernel_weights: &mut [T],
    ) -> T {
        let x_current = x[i];
        let radius = window.radius(x, x_current);

        // Zero radius: all x in the window coincide; a line is
        // meaningless, return the (robustness-weighted) mean.
        if radius <= T::zero() {
            let mut sum_w = T::zero();
            let mut sum_wy = T::zero();
            for j in window.left..=window.right {
                let w = if use_robustness {
                    robustness_weights[j]
                } else {
                    T::one()
                };
                sum_w = sum_w + w;
                sum_wy = sum_wy + w * y[j];
            }
            return if sum_w > T::zero() {
                sum_wy / sum_w
            } else {
                local_mean(&y[window.left..=window.right])
            };
        }

        let mut weight_sum = fill_tricube_weights(x, window, x_current, radius, kernel_weights);

        if use_robustness {
            weight_sum = T::zero();
            for j in window.left..=window.right {
                let combined = kernel_weights[j] * robustness_weights[j];
                kernel_weights[j] = combined;
                weight_sum = weight_sum + combined;
            }
        }

        // All weights vanished (heavy robustness downweighting): fall
        // back to the unweighted local mean.
        if weight_sum <= T::zero() {
            return local_mean(&y[window.left..=window.right]);
        }

        let wx = &x[window.left..=window.right];
        let wy = &y[window.left..=window.right];
        let ww = &kernel_weights[window.left..=window.right];

        match LinearFit::fit_wls(wx, wy, ww, radius) {
            Some(line) => line.predict(x_current),
            None => local_mean(wy),
        }
    }
}
