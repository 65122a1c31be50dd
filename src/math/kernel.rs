//! Tricube kernel weights for LOWESS smoothing.
//!
//! ## Purpose
//!
//! This module maps normalized distances u = |x - x_i| / radius to local
//! regression weights using Cleveland's tricube kernel, and fills a weight
//! buffer over a neighborhood window.
//!
//! ## Key concepts
//!
//! * **Tricube**: K(u) = (1 - |u|³)³ for |u| < 1, else 0. Smooth, bounded
//!   on [-1, 1], and the kernel Cleveland's original LOWESS uses.
//! * **Near/far thresholds**: points closer than 0.1% of the radius get
//!   weight exactly 1; points beyond 99.9% get exactly 0. This avoids
//!   evaluating the kernel in regions where it is numerically flat.
//!
//! ## Invariants
//!
//! * Weights are non-negative and symmetric in distance.
//! * Weights are exactly zero outside the window radius.
//!
//! ## Non-goals
//!
//! * This module does not normalize weights or solve the regression.

use num_traits::Float;

use crate::primitives::window::Window;

/// Fraction of the radius below which a point gets full weight.
const NEAR_FRACTION: f64 = 0.001;

/// Fraction of the radius above which a point gets zero weight.
const FAR_FRACTION: f64 = 0.999;

/// Tricube kernel: K(u) = (1 - |u|³)³ for |u| < 1, else 0.
#[inline]
pub fn tricube<T: Float>(u: T) -> T {
    let abs_u = u.abs();
    if abs_u >= T::one() {
        return T::zero();
    }
    let tmp = T::one() - abs_u * abs_u * abs_u;
    tmp * tmp * tmp
}

/// Fill `weights[window.left..=window.right]` with tricube weights for the
/// evaluation point `x_current`, normalizing distances by `radius`.
///
/// Returns the sum of the weights written. Entries outside the window are
/// left untouched; callers slice the buffer by the window bounds.
pub fn fill_tricube_weights<T: Float>(
    x: &[T],
    window: Window,
    x_current: T,
    radius: T,
    weights: &mut [T],
) -> T {
    debug_assert!(window.right < x.len(), "window exceeds data length");

    // Degenerate radius: every point in the window shares one x value.
    if radius <= T::zero() {
        for w in &mut weights[window.left..=window.right] {
            *w = T::zero();
        }
        return T::zero();
    }

    let near = T::from(NEAR_FRACTION).unwrap_or_else(T::zero) * radius;
    let far = T::from(FAR_FRACTION).unwrap_or_else(T::one) * radius;

    let mut sum = T::zero();
    for j in window.left..=window.right {
        let distance = (x[j] - x_current).abs();
        let w = if distance <= near {
            T::one()
        } else if distance > far {
            T::zero()
        } else {
            tricube(distance / radius)
        };
        weights[j] = w;
        sum = sum + w;
    }

    sum
}
