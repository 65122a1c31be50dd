//! Parameter and input validation tests.
//!
//! Every rejection path should fail fast with a descriptive
//! [`LowessError`] before any smoothing work is done.

use trend_lowess::prelude::*;

fn line(n: usize) -> (Vec<f64>, Vec<f64>) {
    let x: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let y = x.clone();
    (x, y)
}

// ============================================================================
// Builder Parameters
// ============================================================================

#[test]
fn test_fraction_zero_rejected() {
    let result = Lowess::<f64>::new().fraction(0.0).build();
    assert!(matches!(result, Err(LowessError::InvalidFraction(_))));
}

#[test]
fn test_fraction_negative_rejected() {
    let result = Lowess::<f64>::new().fraction(-0.3).build();
    assert!(matches!(result, Err(LowessError::InvalidFraction(_))));
}

#[test]
fn test_fraction_above_one_rejected() {
    let result = Lowess::<f64>::new().fraction(1.5).build();
    assert!(matches!(result, Err(LowessError::InvalidFraction(_))));
}

#[test]
fn test_fraction_nan_rejected() {
    let result = Lowess::<f64>::new().fraction(f64::NAN).build();
    assert!(matches!(result, Err(LowessError::InvalidFraction(_))));
}

#[test]
fn test_fraction_one_accepted() {
    assert!(Lowess::<f64>::new().fraction(1.0).build().is_ok());
}

#[test]
fn test_excessive_iterations_rejected() {
    let result = Lowess::<f64>::new().iterations(1001).build();
    assert!(matches!(result, Err(LowessError::InvalidIterations(1001))));
}

#[test]
fn test_default_build_succeeds() {
    assert!(Lowess::<f64>::new().build().is_ok());
}

// ============================================================================
// Input Data
// ============================================================================

#[test]
fn test_empty_input_rejected() {
    let model = Lowess::<f64>::new().build().unwrap();
    let result = model.fit(&[], &[]);
    assert!(matches!(result, Err(LowessError::EmptyInput)));
}

#[test]
fn test_mismatched_lengths_rejected() {
    let model = Lowess::<f64>::new().build().unwrap();
    let result = model.fit(&[1.0, 2.0, 3.0], &[1.0, 2.0]);
    assert!(matches!(
        result,
        Err(LowessError::MismatchedInputs { x_len: 3, y_len: 2 })
    ));
}

#[test]
fn test_single_point_rejected() {
    let model = Lowess::<f64>::new().build().unwrap();
    let result = model.fit(&[1.0], &[2.0]);
    assert!(matches!(result, Err(LowessError::TooFewPoints { got: 1, min: 2 })));
}

#[test]
fn test_nan_in_x_rejected() {
    let model = Lowess::<f64>::new().build().unwrap();
    let result = model.fit(&[1.0, f64::NAN, 3.0], &[1.0, 2.0, 3.0]);
    assert!(matches!(result, Err(LowessError::NonFiniteValue(_))));
}

#[test]
fn test_infinity_in_y_rejected() {
    let model = Lowess::<f64>::new().build().unwrap();
    let result = model.fit(&[1.0, 2.0, 3.0], &[1.0, f64::INFINITY, 3.0]);
    assert!(matches!(result, Err(LowessError::NonFiniteValue(_))));
}

#[test]
fn test_constant_x_rejected() {
    let model = Lowess::<f64>::new().build().unwrap();
    let result = model.fit(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]);
    assert!(matches!(result, Err(LowessError::DegenerateX { distinct: 1 })));
}

/// A fraction so small the neighborhood would hold a single point.
#[test]
fn test_undersized_neighborhood_rejected() {
    let (x, y) = line(25);
    let model = Lowess::new().fraction(0.04).build().unwrap();
    let result = model.fit(&x, &y);
    assert!(matches!(
        result,
        Err(LowessError::NeighborhoodTooSmall { size: 1, min: 2 })
    ));
}

/// Two points are the minimum viable input at fraction 1.0.
#[test]
fn test_two_points_accepted() {
    let model = Lowess::new().fraction(1.0).build().unwrap();
    let curve = model.fit(&[0.0, 1.0], &[1.0, 3.0]).unwrap();
    assert_eq!(curve.len(), 2);
}

// ============================================================================
// Error Messages
// ============================================================================

#[test]
fn test_error_display_is_descriptive() {
    let msg = LowessError::InvalidFraction(1.5).to_string();
    assert!(msg.contains("1.5"));

    let msg = LowessError::MismatchedInputs { x_len: 3, y_len: 2 }.to_string();
    assert!(msg.contains('3') && msg.contains('2'));

    let msg = LowessError::NeighborhoodTooSmall { size: 1, min: 2 }.to_string();
    assert!(msg.contains('1') && msg.contains('2'));
}
