//! Bisquare robustness weighting for outlier downweighting.
//!
//! ## Purpose
//!
//! This module implements the reweighting step of robust LOWESS. After an
//! initial fit, residuals are converted into bisquare weights that shrink
//! the influence of outliers in subsequent smoothing passes.
//!
//! ## Key concepts
//!
//! * **Bisquare**: w = (1 - u²)² for |u| < 1, else 0, with u = r / (6s).
//! * **Scale**: s is the median absolute residual, following Cleveland
//!   (1979). The tuning constant 6 makes the weights reject residuals
//!   beyond six median absolute residuals.
//!
//! ## Invariants
//!
//! * Output weights are in [0, 1].
//!
//! ## Non-goals
//!
//! * This module does not compute the fit or decide how many robustness
//!   iterations to run (the executor does).

use num_traits::Float;

/// Tuning constant applied to the median absolute residual (Cleveland 1979).
const BISQUARE_C: f64 = 6.0;

/// Floor on the tuned scale to avoid division by zero.
const MIN_SCALE: f64 = 1e-12;

/// Bisquare weight for a normalized residual u.
#[inline]
fn bisquare<T: Float>(u: T) -> T {
    let abs_u = u.abs();
    if abs_u >= T::one() {
        return T::zero();
    }
    let tmp = T::one() - abs_u * abs_u;
    tmp * tmp
}

/// Median of a slice, computed by sorting a scratch copy in place.
fn median_inplace<T: Float>(vals: &mut [T]) -> T {
    if vals.is_empty() {
        return T::zero();
    }
    vals.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let n = vals.len();
    let mid = n / 2;
    if n % 2 == 1 {
        vals[mid]
    } else {
        (vals[mid - 1] + vals[mid]) / T::from(2.0).unwrap_or_else(T::one)
    }
}

/// Recompute robustness weights from the residuals of the latest pass.
///
/// `scratch` is reused to compute the median absolute residual without a
/// fresh allocation per iteration. If the residual scale is essentially
/// zero (the fit already interpolates the data), all weights are set to 1.
pub fn update_robustness_weights<T: Float>(
    y: &[T],
    y_smooth: &[T],
    weights: &mut [T],
    scratch: &mut Vec<T>,
) {
    debug_assert_eq!(y.len(), y_smooth.len());
    debug_assert_eq!(y.len(), weights.len());

    scratch.clear();
    scratch.extend(y.iter().zip(y_smooth).map(|(&yi, &si)| (yi - si).abs()));
    let scale = median_inplace(scratch);

    let tuned = scale * T::from(BISQUARE_C).unwrap_or_else(T::one);
    if tuned <= T::from(MIN_SCALE).unwrap_or_else(T::zero) {
        for w in weights.iter_mut() {
            *w = T::one();
        }
        return;
    }

    for i in 0..y.len() {
        let u = (y[i] - y_smooth[i]) / tuned;
        weights[i] = bisquare(u);
    }
}
