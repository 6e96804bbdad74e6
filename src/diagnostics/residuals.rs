//! Residuals and mean squared error of a weight vector on held-out data.

use crate::solvers::RegressionError;
use faer::{Col, Mat};

fn check_shapes(w: &Col<f64>, x: &Mat<f64>, y: &Col<f64>) -> Result<(), RegressionError> {
    if x.nrows() != y.nrows() {
        return Err(RegressionError::DimensionMismatch {
            x_rows: x.nrows(),
            y_len: y.nrows(),
        });
    }
    if x.ncols() != w.nrows() {
        return Err(RegressionError::FeatureMismatch {
            expected: w.nrows(),
            got: x.ncols(),
        });
    }
    Ok(())
}

/// Compute residuals e = y - Xw.
pub fn residuals(w: &Col<f64>, x: &Mat<f64>, y: &Col<f64>) -> Result<Col<f64>, RegressionError> {
    check_shapes(w, x, y)?;

    let mut e = Col::zeros(x.nrows());
    for i in 0..x.nrows() {
        let mut pred = 0.0;
        for j in 0..x.ncols() {
            pred += x[(i, j)] * w[j];
        }
        e[i] = y[i] - pred;
    }
    Ok(e)
}

/// Mean squared error (1/N) Σ (y_i - x_i·w)².
///
/// Non-negative, and zero exactly when Xw reproduces y.
///
/// # Errors
/// `DimensionMismatch` when `x` and `y` disagree on N, `FeatureMismatch`
/// when `w` does not match the columns of `x`, and
/// `InsufficientObservations` for an empty test set.
pub fn mean_squared_error(
    w: &Col<f64>,
    x: &Mat<f64>,
    y: &Col<f64>,
) -> Result<f64, RegressionError> {
    let e = residuals(w, x, y)?;
    let n = e.nrows();
    if n == 0 {
        return Err(RegressionError::InsufficientObservations { needed: 1, got: 0 });
    }

    let sse: f64 = e.iter().map(|&r| r * r).sum();
    Ok(sse / n as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_residuals() {
        let x = Mat::from_fn(3, 1, |i, _| (i + 1) as f64);
        let y = Col::from_fn(3, |i| 2.0 * (i + 1) as f64 + 1.0);
        let w = Col::from_fn(1, |_| 2.0);

        let e = residuals(&w, &x, &y).unwrap();
        for i in 0..3 {
            assert!((e[i] - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_mse_exact_fit_is_zero() {
        let x = Mat::from_fn(4, 2, |i, j| if j == 0 { 1.0 } else { i as f64 });
        let y = Col::from_fn(4, |i| 0.5 - 1.5 * i as f64);
        let w = Col::from_fn(2, |j| if j == 0 { 0.5 } else { -1.5 });

        assert_eq!(mean_squared_error(&w, &x, &y).unwrap(), 0.0);
    }

    #[test]
    fn test_mse_known_value() {
        // errors [1, -1, 2] -> (1 + 1 + 4) / 3
        let x = Mat::from_fn(3, 1, |_, _| 1.0);
        let y = Col::from_fn(3, |i| [1.0, -1.0, 2.0][i]);
        let w = Col::zeros(1);

        assert!((mean_squared_error(&w, &x, &y).unwrap() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_mse_shape_errors() {
        let x = Mat::from_fn(3, 2, |i, j| (i + j) as f64);
        let w = Col::zeros(2);

        assert!(matches!(
            mean_squared_error(&w, &x, &Col::zeros(4)),
            Err(RegressionError::DimensionMismatch { x_rows: 3, y_len: 4 })
        ));
        assert!(matches!(
            mean_squared_error(&Col::zeros(3), &x, &Col::zeros(3)),
            Err(RegressionError::FeatureMismatch { expected: 3, got: 2 })
        ));
    }

    #[test]
    fn test_mse_empty() {
        let x: Mat<f64> = Mat::zeros(0, 2);
        let y: Col<f64> = Col::zeros(0);
        assert!(matches!(
            mean_squared_error(&Col::zeros(2), &x, &y),
            Err(RegressionError::InsufficientObservations { .. })
        ));
    }
}
