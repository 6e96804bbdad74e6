//! OLS regression tests.

mod common;

use anofox_learn::diagnostics::mean_squared_error;
use anofox_learn::features::polynomial_features;
use anofox_learn::solvers::{FittedRegressor, OlsRegressor, RegressionError, Regressor};
use anofox_learn::utils::with_intercept_column;
use approx::assert_relative_eq;
use faer::{Col, Mat};

#[test]
fn test_ols_identity_line() {
    // X = [[1], [2], [3]], y = [1, 2, 3]
    let x = Mat::from_fn(3, 1, |i, _| (i + 1) as f64);
    let y = Col::from_fn(3, |i| (i + 1) as f64);

    let fitted = OlsRegressor::default().fit(&x, &y).expect("fit should succeed");

    assert_eq!(fitted.coefficients().nrows(), 1);
    assert_relative_eq!(fitted.coefficients()[0], 1.0, epsilon = 1e-12);
    assert_relative_eq!(fitted.mse(&x, &y).unwrap(), 0.0, epsilon = 1e-20);
}

#[test]
fn test_ols_recovers_coefficients_with_intercept_column() {
    let (x, y, true_coef) = common::generate_linear_data(100, 3, 5.0, 0.0, 42);
    let xb = with_intercept_column(&x);

    let fitted = OlsRegressor::default().fit(&xb, &y).expect("fit should succeed");

    assert_relative_eq!(fitted.coefficients()[0], 5.0, epsilon = 1e-8);
    for j in 0..3 {
        assert_relative_eq!(fitted.coefficients()[j + 1], true_coef[j], epsilon = 1e-8);
    }
    assert!(fitted.result().mse < 1e-16);
}

#[test]
fn test_ols_without_intercept_column_is_biased() {
    let (x, y, _) = common::generate_linear_data(100, 2, 5.0, 0.0, 9);

    let no_bias = OlsRegressor::default().fit(&x, &y).unwrap();
    let with_bias = OlsRegressor::default()
        .fit(&with_intercept_column(&x), &y)
        .unwrap();

    assert!(no_bias.result().mse > with_bias.result().mse);
}

#[test]
fn test_ols_predict_and_test_mse() {
    let (x, y, _) = common::generate_linear_data(60, 2, 1.0, 0.2, 5);
    let (x_test, y_test, _) = common::generate_linear_data(40, 2, 1.0, 0.2, 6);
    let xb = with_intercept_column(&x);
    let xb_test = with_intercept_column(&x_test);

    let fitted = OlsRegressor::default().fit(&xb, &y).unwrap();

    let predictions = fitted.predict(&xb_test).unwrap();
    let manual: f64 = (0..40)
        .map(|i| (y_test[i] - predictions[i]).powi(2))
        .sum::<f64>()
        / 40.0;

    let mse = mean_squared_error(fitted.coefficients(), &xb_test, &y_test).unwrap();
    assert_relative_eq!(mse, manual, epsilon = 1e-12);
    assert_relative_eq!(fitted.mse(&xb_test, &y_test).unwrap(), mse);
    // noise is uniform on [-0.2, 0.2]
    assert!(mse < 0.04);
}

#[test]
fn test_ols_training_result() {
    let (x, y, _) = common::generate_linear_data(30, 2, 0.0, 0.5, 1);
    let fitted = OlsRegressor::default().fit(&x, &y).unwrap();
    let result = fitted.result();

    assert_eq!(result.n_observations, 30);
    assert_eq!(result.n_parameters, 2);
    assert_eq!(result.lambda, 0.0);
    assert!(result.iterations.is_none());
    assert_relative_eq!(result.mse, result.rss() / 30.0, epsilon = 1e-12);
    for i in 0..30 {
        assert_relative_eq!(
            result.residuals[i] + result.fitted_values[i],
            y[i],
            epsilon = 1e-12
        );
    }
}

#[test]
fn test_ols_collinear_is_singular() {
    let (x, y) = common::generate_collinear_data(20);
    assert!(matches!(
        OlsRegressor::default().fit(&x, &y),
        Err(RegressionError::SingularMatrix)
    ));
}

#[test]
fn test_ols_shape_errors() {
    let x = Mat::from_fn(5, 2, |i, j| (i + j) as f64);

    assert!(matches!(
        OlsRegressor::default().fit(&x, &Col::zeros(4)),
        Err(RegressionError::DimensionMismatch { x_rows: 5, y_len: 4 })
    ));

    let y = Col::from_fn(5, |i| i as f64);
    let fitted = OlsRegressor::default()
        .fit(&with_intercept_column(&Mat::from_fn(5, 1, |i, _| i as f64)), &y)
        .unwrap();
    assert!(fitted.predict(&x).is_ok());
    assert!(matches!(
        fitted.predict(&Mat::zeros(2, 3)),
        Err(RegressionError::FeatureMismatch { expected: 2, got: 3 })
    ));
}

// ============================================================================
// Conditioning
// ============================================================================

#[test]
fn test_ols_small_scale_polynomial_is_not_singular() {
    // Features of magnitude <= 0.1 make the columns of x^p tiny but still
    // linearly independent.
    let mut rng = common::Lcg::new(2024);
    let values: Vec<f64> = (0..242).map(|_| 0.1 * rng.next_f64()).collect();
    let x = Col::from_fn(242, |i| values[i]);
    let y = Col::from_fn(242, |i| 150.0 + 900.0 * x[i] + 3.0 * rng_noise(i));

    let mut previous = f64::INFINITY;
    for degree in 0..=6 {
        let fitted = OlsRegressor::default()
            .fit(&polynomial_features(&x, degree), &y)
            .unwrap_or_else(|e| panic!("degree {degree} should fit: {e}"));
        let mse = fitted.result().mse;
        assert!(mse.is_finite());
        assert!(mse <= previous + 1e-9, "degree {degree}: {mse} > {previous}");
        previous = mse;
    }
}

#[test]
fn test_ols_scaled_duplicate_column_is_singular() {
    // Second column is exactly 1e-6 times the first.
    let (x, y, _) = common::generate_linear_data(50, 1, 0.0, 0.1, 3);
    let design = Mat::from_fn(50, 2, |i, j| if j == 0 { x[(i, 0)] } else { 1e-6 * x[(i, 0)] });

    assert!(matches!(
        OlsRegressor::default().fit(&design, &y),
        Err(RegressionError::SingularMatrix)
    ));
}

#[test]
fn test_ols_badly_scaled_features() {
    let (x, y, true_coef) = common::generate_linear_data(80, 2, 0.0, 0.0, 15);
    let scales = [1e4, 1e-4];
    let scaled = Mat::from_fn(80, 2, |i, j| scales[j] * x[(i, j)]);

    let fitted = OlsRegressor::default().fit(&scaled, &y).expect("fit should succeed");
    for j in 0..2 {
        assert_relative_eq!(
            fitted.coefficients()[j] * scales[j],
            true_coef[j],
            max_relative = 1e-8
        );
    }
}

fn rng_noise(i: usize) -> f64 {
    ((i as f64) * 0.77).sin()
}
