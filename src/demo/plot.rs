//! Chart rendering and console narration for the demo.
//!
//! ## Purpose
//!
//! This module is the presentation stage: it prints a fixed explanation to
//! stdout and renders the raw scatter together with the smoothed curve to
//! a PNG file via `plotters`.
//!
//! ## Non-goals
//!
//! * No computation happens here; the chart reflects whatever sample and
//!   curve it is given.

use std::error::Error;
use std::path::Path;

use plotters::prelude::*;

use crate::demo::dataset::TrendSample;
use crate::engine::output::SmoothedCurve;

/// Default output path for the rendered chart.
pub const DEFAULT_PLOT_PATH: &str = "lowess_trend.png";

/// Chart size in pixels.
const CHART_SIZE: (u32, u32) = (1000, 600);

/// Print the fixed explanatory narration for the demo.
pub fn print_explanation() {
    println!();
    println!("Explanation:");
    println!("The blue points represent the original synthetic fashion trend data (with noise and seasonal effects).");
    println!("The red line is the LOWESS smoothed curve, which reveals the underlying trend by smoothing the data,");
    println!("making it easier to interpret the overall trend and patterns in fashion over time.");
}

/// Render the raw scatter and the smoothed curve to a PNG file.
///
/// Draws labeled axes, a mesh grid, a legend, and a title. Returns an
/// error if the backend cannot write the file or draw the chart.
pub fn render_chart(
    path: &Path,
    sample: &TrendSample,
    curve: &SmoothedCurve<f64>,
) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let (x_min, x_max) = axis_range(&sample.x, 0.0);
    let (y_min, y_max) = axis_range(&sample.y, 0.5);

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Local Regression (LOWESS) on Fashion Trend Data",
            ("sans-serif", 24),
        )
        .margin(12)
        .x_label_area_size(44)
        .y_label_area_size(52)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Month")
        .y_desc("Fashion Trend Indicator")
        .draw()?;

    chart
        .draw_series(
            sample
                .x
                .iter()
                .zip(sample.y.iter())
                .map(|(&x, &y)| Circle::new((x, y), 3, BLUE.mix(0.5).filled())),
        )?
        .label("Original Data")
        .legend(|(x, y)| Circle::new((x + 10, y), 3, BLUE.mix(0.5).filled()));

    chart
        .draw_series(LineSeries::new(curve.points(), RED.stroke_width(2)))?
        .label("Lowess Smoothed")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(2)));

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;

    root.present()?;
    Ok(())
}

/// Min and max of a slice, padded on both sides.
fn axis_range(values: &[f64], pad: f64) -> (f64, f64) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    (min - pad, max + pad)
}
