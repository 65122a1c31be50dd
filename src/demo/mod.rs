//! Demo pipeline: synthetic seasonal data and chart presentation.
//!
//! The pipeline has three stages, executed strictly in sequence by the
//! binary: generate a reproducible seasonal series, smooth it with LOWESS,
//! and render raw scatter plus smoothed curve on one chart.

/// Reproducible synthetic seasonal trend data.
pub mod dataset;

/// Chart rendering and console narration.
pub mod plot;
