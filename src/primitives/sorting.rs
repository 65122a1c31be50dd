//! Sorting and duplicate merging for LOWESS input data.
//!
//! ## Purpose
//!
//! This module prepares raw (x, y) pairs for smoothing: it sorts them by x
//! in ascending order and merges points that share an x value.
//!
//! ## Design notes
//!
//! * **Stability**: Sorting is stable, so ties keep their relative input
//!   order before they are merged.
//! * **Dedup policy**: Duplicate x values are collapsed into a single point
//!   whose y is the arithmetic mean of the duplicates. The smoothed curve
//!   therefore contains one row per unique x.
//!
//! ## Invariants
//!
//! * Output x values are strictly increasing.
//! * Output length is the number of distinct x values in the input.
//!
//! ## Non-goals
//!
//! * This module does not validate input (finiteness, lengths); the
//!   validator runs before it.

use std::cmp::Ordering;

use num_traits::Float;

/// Input data sorted by x with duplicate x values merged.
pub struct PreparedData<T> {
    /// Strictly increasing x values.
    pub x: Vec<T>,

    /// y values aligned with `x`; duplicates averaged.
    pub y: Vec<T>,
}

/// Sort (x, y) pairs by x in ascending order.
///
/// Uses a fast path when the input is already sorted, which is the common
/// case for time-series data.
pub fn sort_by_x<T: Float>(x: &[T], y: &[T]) -> (Vec<T>, Vec<T>) {
    let is_sorted = x.windows(2).all(|w| w[0] <= w[1]);
    if is_sorted {
        return (x.to_vec(), y.to_vec());
    }

    let mut pairs: Vec<(T, T)> = x.iter().copied().zip(y.iter().copied()).collect();
    pairs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

    pairs.into_iter().unzip()
}

/// Merge points sharing an x value by averaging their y values.
///
/// Expects `x` sorted ascending. Returns strictly increasing x with one
/// averaged y per unique x.
pub fn merge_duplicate_x<T: Float>(x: &[T], y: &[T]) -> PreparedData<T> {
    let n = x.len();
    let mut out_x: Vec<T> = Vec::with_capacity(n);
    let mut out_y: Vec<T> = Vec::with_capacity(n);

    let mut i = 0;
    while i < n {
        let xi = x[i];
        let mut sum = y[i];
        let mut count = 1;
        let mut j = i + 1;
        while j < n && x[j] == xi {
            sum = sum + y[j];
            count += 1;
            j += 1;
        }
        out_x.push(xi);
        out_y.push(sum / T::from(count).unwrap_or_else(T::one));
        i = j;
    }

    PreparedData { x: out_x, y: out_y }
}

/// Sort by x and merge duplicate x values in one step.
pub fn prepare<T: Float>(x: &[T], y: &[T]) -> PreparedData<T> {
    let (sx, sy) = sort_by_x(x, y);
    merge_duplicate_x(&sx, &sy)
}
