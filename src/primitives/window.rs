//! Windowing primitives for LOWESS smoothing.
//!
//! This module provides the sliding window that tracks the k nearest
//! neighbors of each evaluation point over a sorted dataset.

use num_traits::Float;

/// Inclusive window bounds `[left, right]` for a local fit.
#[derive(Copy, Clone, Debug)]
pub struct Window {
    /// Left boundary index (inclusive).
    pub left: usize,

    /// Right boundary index (inclusive).
    pub right: usize,
}

impl Window {
    /// Initialize window boundaries around a starting index.
    #[inline]
    pub fn initialize(idx: usize, window_size: usize, n: usize) -> Self {
        debug_assert!(window_size >= 1, "window_size must be at least 1");

        if window_size >= n {
            return Self {
                left: 0,
                right: n.saturating_sub(1),
            };
        }

        let half = window_size / 2;
        let mut left = idx.saturating_sub(half);
        let max_left = n - window_size;
        if left > max_left {
            left = max_left;
        }

        Self {
            left,
            right: left + window_size - 1,
        }
    }

    /// Slide the boundaries so the window holds the nearest neighbors of
    /// `x[current]`.
    ///
    /// Evaluation proceeds left to right over sorted x, so each call only
    /// ever shifts the window forward by a few positions; the total cost
    /// over a full pass is O(n).
    #[inline]
    pub fn recenter<T: Float>(&mut self, x: &[T], current: usize) {
        let n = x.len();
        debug_assert!(current < n, "recenter: current index out of bounds");

        self.left = self.left.min(n - 1);
        self.right = self.right.min(n - 1);

        let x_current = x[current];

        // Slide right while the point past the window is closer than the
        // leftmost point in it.
        while self.right < n - 1 {
            let d_left = x_current - x[self.left];
            let d_right = x[self.right + 1] - x_current;
            if d_left <= d_right {
                break;
            }
            self.left += 1;
            self.right += 1;
        }

        // Slide left while the point before the window is closer than the
        // rightmost point in it.
        while self.left > 0 {
            let d_left = x_current - x[self.left - 1];
            let d_right = x[self.right] - x_current;
            if d_right <= d_left {
                break;
            }
            self.left -= 1;
            self.right -= 1;
        }
    }

    /// Maximum distance from `x_current` to any point in the window.
    #[inline]
    pub fn radius<T: Float>(&self, x: &[T], x_current: T) -> T {
        T::max(x_current - x[self.left], x[self.right] - x_current)
    }

    /// Neighborhood size k = ceil(frac * n), clamped to n.
    ///
    /// Validation of the lower bound (k >= 2) happens in the validator;
    /// this function only derives the size.
    #[inline]
    pub fn neighborhood_size<T: Float>(n: usize, frac: T) -> usize {
        // Guard against float representation error pushing an exact
        // product over the next integer (e.g. 0.2 * 100 = 20.000000000000004).
        let eps = T::from(1e-9).unwrap_or_else(T::epsilon);
        let k = (frac * T::from(n).unwrap_or_else(T::one) - eps).ceil();
        usize::min(n, k.to_usize().unwrap_or(0))
    }

    /// Number of points in the window.
    #[inline]
    pub fn len(&self) -> usize {
        self.right - self.left + 1
    }

    /// Check if the window is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
