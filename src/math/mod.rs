//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure mathematical functions used by the
//! smoother: the tricube kernel and windowed weight computation. These are
//! reusable building blocks with no algorithm-specific state.

/// Tricube kernel and windowed weight computation.
pub mod kernel;
