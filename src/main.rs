//! Demo binary: generate a seasonal series, smooth it with LOWESS, and
//! render the result.
//!
//! Runs with no arguments. Exit code 0 on success; any parameter or
//! computation error propagates out of `main` with a diagnostic.

use std::error::Error;
use std::path::Path;

use log::{debug, info};

use trend_lowess::demo::{dataset, plot};
use trend_lowess::prelude::*;

/// Bandwidth fraction for the demo fit.
const FRACTION: f64 = 0.2;

/// Robustness iterations, matching the conventional LOWESS default.
const ITERATIONS: usize = 3;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    plot::print_explanation();

    let sample = dataset::generate(dataset::DEFAULT_SEED);
    info!(
        "generated {} samples over {} months (seed {})",
        sample.len(),
        dataset::MONTHS_SPAN,
        dataset::DEFAULT_SEED
    );

    let model = Lowess::new()
        .fraction(FRACTION)
        .iterations(ITERATIONS)
        .build()?;
    let curve = model.fit(&sample.x, &sample.y)?;
    debug!(
        "smoothed {} points with fraction {} in {} pass(es)",
        curve.len(),
        FRACTION,
        curve.passes
    );

    let path = Path::new(plot::DEFAULT_PLOT_PATH);
    plot::render_chart(path, &sample, &curve)?;
    println!("\nWrote chart to {}", path.display());

    Ok(())
}
