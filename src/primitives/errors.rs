//! Error types for LOWESS operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur during LOWESS
//! smoothing: input validation failures, parameter constraint violations,
//! and degenerate data.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (e.g., actual vs.
//!   expected lengths) so a diagnostic message can be produced without
//!   re-inspecting the inputs.
//! * **Fail-fast**: Validation surfaces the first violation; there is no
//!   recovery or fallback at this level.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself (see
//!   `engine::validator`).

use std::error::Error;
use std::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for LOWESS operations.
#[derive(Debug, Clone, PartialEq)]
pub enum LowessError {
    /// Input arrays are empty; LOWESS requires at least 2 points.
    EmptyInput,

    /// `x` and `y` arrays must have the same number of elements.
    MismatchedInputs {
        /// Number of elements in the `x` array.
        x_len: usize,
        /// Number of elements in the `y` array.
        y_len: usize,
    },

    /// Input data contains NaN or infinite values.
    NonFiniteValue(String),

    /// Number of points is below the minimum requirement.
    TooFewPoints {
        /// Number of points provided.
        got: usize,
        /// Minimum required points.
        min: usize,
    },

    /// Smoothing fraction must be in the range (0, 1].
    InvalidFraction(f64),

    /// Robustness iteration count exceeds the supported maximum.
    InvalidIterations(usize),

    /// The fraction implies a neighborhood too small for a linear fit.
    NeighborhoodTooSmall {
        /// Neighborhood size implied by the fraction.
        size: usize,
        /// Minimum required neighborhood size.
        min: usize,
    },

    /// Fewer than 2 distinct x values; a line cannot be fitted.
    DegenerateX {
        /// Number of distinct x values found.
        distinct: usize,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for LowessError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input arrays are empty"),
            Self::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {x_len} points, y has {y_len}")
            }
            Self::NonFiniteValue(s) => write!(f, "Non-finite value: {s}"),
            Self::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {got}, need at least {min}")
            }
            Self::InvalidFraction(frac) => {
                write!(f, "Invalid fraction: {frac} (must be > 0 and <= 1)")
            }
            Self::InvalidIterations(iter) => {
                write!(f, "Invalid iterations: {iter} (must be in [0, 1000])")
            }
            Self::NeighborhoodTooSmall { size, min } => {
                write!(
                    f,
                    "Neighborhood of {size} points is too small for a linear fit (need at least {min}); increase the fraction or provide more data"
                )
            }
            Self::DegenerateX { distinct } => {
                write!(
                    f,
                    "Degenerate x values: only {distinct} distinct value(s), need at least 2"
                )
            }
        }
    }
}

impl Error for LowessError {}
