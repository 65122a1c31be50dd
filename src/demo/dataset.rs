//! Synthetic seasonal trend data generation.
//!
//! ## Purpose
//!
//! This module produces the reproducible sample the demo smooths: x is an
//! evenly spaced time axis in months, y is a sinusoidal seasonal signal
//! plus Gaussian noise from a seeded generator.
//!
//! ## Design notes
//!
//! * **Reproducibility**: the generator state is scoped to the call; a
//!   fresh `StdRng` is seeded per invocation, so equal seeds produce
//!   bit-identical output across runs and call sites.
//! * The signal is y = BASELINE + AMPLITUDE * sin(2π * x / SEASON_PERIOD)
//!   with independent N(0, NOISE_SD²) noise per point.

use std::f64::consts::PI;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

/// Number of samples in the generated series.
pub const SAMPLE_SIZE: usize = 100;

/// Time span in months; x covers [0, MONTHS_SPAN] inclusive.
pub const MONTHS_SPAN: f64 = 24.0;

/// Baseline level of the trend indicator.
pub const BASELINE: f64 = 10.0;

/// Amplitude of the seasonal component.
pub const AMPLITUDE: f64 = 2.0;

/// Seasonal period in months.
pub const SEASON_PERIOD: f64 = 12.0;

/// Standard deviation of the Gaussian noise.
pub const NOISE_SD: f64 = 1.0;

/// Default RNG seed for the demo.
pub const DEFAULT_SEED: u64 = 42;

/// A synthetic sample of (x, y) pairs with strictly increasing x.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendSample {
    /// Time axis in months, evenly spaced over [0, MONTHS_SPAN].
    pub x: Vec<f64>,

    /// Trend indicator: seasonal signal plus noise.
    pub y: Vec<f64>,
}

impl TrendSample {
    /// Number of points in the sample.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Check whether the sample is empty.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Generate the synthetic seasonal series for the given seed.
///
/// Pure function of the seed: repeated calls with the same seed return
/// bit-identical samples.
pub fn generate(seed: u64) -> TrendSample {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, NOISE_SD).expect("noise standard deviation is positive");

    let step = MONTHS_SPAN / (SAMPLE_SIZE - 1) as f64;
    let x: Vec<f64> = (0..SAMPLE_SIZE).map(|i| i as f64 * step).collect();
    let y: Vec<f64> = x
        .iter()
        .map(|&xi| BASELINE + AMPLITUDE * (2.0 * PI * xi / SEASON_PERIOD).sin() + noise.sample(&mut rng))
        .collect();

    TrendSample { x, y }
}
