//! Polynomial basis expansion of a single feature.

use crate::solvers::RegressionError;
use crate::utils::column as column_values;
use faer::{Col, Mat};

/// Expand `x` into the polynomial basis [1, x, x², ..., x^degree].
///
/// Returns an N × (degree + 1) matrix; column 0 is all ones, so the
/// expansion already carries an intercept column.
///
/// # Example
///
/// ```rust,ignore
/// let x = Col::from_fn(2, |i| (i + 2) as f64);
/// let xd = polynomial_features(&x, 2);
/// // [[1, 2, 4],
/// //  [1, 3, 9]]
/// ```
pub fn polynomial_features(x: &Col<f64>, degree: usize) -> Mat<f64> {
    Mat::from_fn(x.nrows(), degree + 1, |i, j| x[i].powi(j as i32))
}

/// Expand column `column` of `x` into the polynomial basis of `degree`.
pub fn polynomial_features_from_column(
    x: &Mat<f64>,
    column: usize,
    degree: usize,
) -> Result<Mat<f64>, RegressionError> {
    if column >= x.ncols() {
        return Err(RegressionError::FeatureMismatch {
            expected: column + 1,
            got: x.ncols(),
        });
    }
    Ok(polynomial_features(&column_values(x, column), degree))
}
