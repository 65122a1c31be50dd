//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the smoothing process: it validates inputs and
//! parameters, runs the smoothing passes (including robustness
//! iterations), and defines the output type returned to callers.

/// Unified execution engine for LOWESS smoothing.
pub mod executor;

/// Output types for LOWESS operations.
pub mod output;

/// Validation utilities.
pub mod validator;
