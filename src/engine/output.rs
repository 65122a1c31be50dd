//! Output types for LOWESS operations.
//!
//! ## Purpose
//!
//! This module defines [`SmoothedCurve`], the result of a LOWESS fit:
//! (x, ŷ) pairs in ascending x order plus the parameters used.
//!
//! ## Invariants
//!
//! * `x` and `y` have the same length.
//! * x values are strictly increasing (duplicates were merged upstream).
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.

use std::fmt::{Debug, Display, Formatter, Result};

use num_traits::Float;

/// Smoothed curve produced by a LOWESS fit.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothedCurve<T> {
    /// Strictly increasing x values (one per unique input x).
    pub x: Vec<T>,

    /// Smoothed y values aligned with `x`.
    pub y: Vec<T>,

    /// Smoothing fraction used for the fit.
    pub fraction: T,

    /// Number of smoothing passes performed (1 + robustness iterations).
    pub passes: usize,
}

impl<T: Float> SmoothedCurve<T> {
    /// Number of points on the curve.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Check whether the curve is empty.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterate over the (x, ŷ) pairs in ascending x order.
    pub fn points(&self) -> impl Iterator<Item = (T, T)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

impl<T: Float + Display + Debug> Display for SmoothedCurve<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.x.len())?;
        writeln!(f, "  Fraction:    {}", self.fraction)?;
        if self.passes > 1 {
            writeln!(f, "  Robustness:  {} iterations", self.passes - 1)?;
        }
        writeln!(f)?;

        writeln!(f, "Smoothed Data:")?;
        writeln!(f, "{:>8} {:>12}", "X", "Y_smooth")?;
        writeln!(f, "{:-<21}", "")?;

        // Show first 10 and last 10 rows if there are more than 20 points.
        let n = self.x.len();
        let rows: Vec<usize> = if n <= 20 {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows.iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>8}", "...")?;
            }
            prev_idx = idx;
            writeln!(f, "{:>8.2} {:>12.6}", self.x[idx], self.y[idx])?;
        }

        Ok(())
    }
}
