//! Ordinary Least Squares regression solver.

use crate::core::{RegressionOptions, RegressionOptionsBuilder, RegressionResult};
use crate::solvers::traits::{check_dimensions, FittedRegressor, RegressionError, Regressor};
use crate::utils::{mat_vec, solve};
use faer::{Col, Mat};

/// Ordinary Least Squares regression estimator.
///
/// Solves the normal equations w = (X'X)⁻¹ X'y. There is no implicit
/// intercept; prepend a column of ones to `x` to fit one. A singular X'X
/// (collinear features, or fewer rows than columns) is reported as
/// [`RegressionError::SingularMatrix`].
///
/// # Example
///
/// ```rust,ignore
/// use anofox_learn::solvers::{OlsRegressor, Regressor, FittedRegressor};
/// use faer::{Mat, Col};
///
/// let x = Mat::from_fn(3, 1, |i, _| (i + 1) as f64);
/// let y = Col::from_fn(3, |i| (i + 1) as f64);
///
/// let fitted = OlsRegressor::builder().build().fit(&x, &y)?;
/// println!("w = {:?}", fitted.coefficients());
/// ```
#[derive(Debug, Clone, Default)]
pub struct OlsRegressor {
    options: RegressionOptions,
}

impl OlsRegressor {
    /// Create a new OLS regressor with the given options.
    pub fn new(options: RegressionOptions) -> Self {
        Self { options }
    }

    /// Create a builder for configuring the regressor.
    pub fn builder() -> OlsRegressorBuilder {
        OlsRegressorBuilder::default()
    }
}

/// Solve (X'X + λI) w = X'y.
pub(crate) fn solve_normal_equations(
    x: &Mat<f64>,
    y: &Col<f64>,
    lambda: f64,
    rank_tolerance: f64,
) -> Result<Col<f64>, RegressionError> {
    let n_features = x.ncols();

    // Compute X'X
    let xtx = x.transpose() * x;

    // Add λI to the diagonal
    let mut xtx_reg = xtx.clone();
    for i in 0..n_features {
        xtx_reg[(i, i)] += lambda;
    }

    // Compute X'y
    let xty = x.transpose() * y;

    solve(&xtx_reg, &xty, rank_tolerance).ok_or(RegressionError::SingularMatrix)
}

impl Regressor for OlsRegressor {
    type Fitted = FittedOls;

    fn fit(&self, x: &Mat<f64>, y: &Col<f64>) -> Result<Self::Fitted, RegressionError> {
        check_dimensions(x, y)?;
        self.options.validate()?;

        let coefficients = solve_normal_equations(x, y, 0.0, self.options.rank_tolerance)?;
        let fitted_values = mat_vec(x, &coefficients);
        let result = RegressionResult::from_fit(coefficients, fitted_values, y, 0.0);

        log::debug!(
            "fitted OLS: {} observations, {} features, training mse {:.6}",
            result.n_observations,
            result.n_parameters,
            result.mse
        );

        Ok(FittedOls {
            options: self.options.clone(),
            result,
        })
    }
}

/// A fitted OLS regression model.
#[derive(Debug, Clone)]
pub struct FittedOls {
    options: RegressionOptions,
    result: RegressionResult,
}

impl FittedOls {
    /// Get the options used to fit this model.
    pub fn options(&self) -> &RegressionOptions {
        &self.options
    }
}

impl FittedRegressor for FittedOls {
    fn result(&self) -> &RegressionResult {
        &self.result
    }
}

/// Builder for `OlsRegressor`.
#[derive(Debug, Clone, Default)]
pub struct OlsRegressorBuilder {
    builder: RegressionOptionsBuilder,
}

impl OlsRegressorBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the singularity tolerance.
    pub fn rank_tolerance(mut self, tol: f64) -> Self {
        self.builder = self.builder.rank_tolerance(tol);
        self
    }

    /// Build the OLS regressor.
    pub fn build(self) -> OlsRegressor {
        OlsRegressor::new(self.builder.build_unchecked())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ols_through_origin() {
        let x = Mat::from_fn(3, 1, |i, _| (i + 1) as f64);
        let y = Col::from_fn(3, |i| (i + 1) as f64);

        let fitted = OlsRegressor::default().fit(&x, &y).expect("model should fit");

        assert!((fitted.coefficients()[0] - 1.0).abs() < 1e-12);
        assert!(fitted.result().mse < 1e-20);
    }

    #[test]
    fn test_ols_collinear_is_singular() {
        let x = Mat::from_fn(5, 2, |i, j| (i + 1) as f64 * (j + 1) as f64);
        let y = Col::from_fn(5, |i| i as f64);

        let result = OlsRegressor::default().fit(&x, &y);
        assert!(matches!(result, Err(RegressionError::SingularMatrix)));
    }

    #[test]
    fn test_ols_underdetermined_is_singular() {
        let x = Mat::from_fn(2, 3, |i, j| (i + j * j) as f64);
        let y = Col::from_fn(2, |i| i as f64);

        let result = OlsRegressor::default().fit(&x, &y);
        assert!(matches!(result, Err(RegressionError::SingularMatrix)));
    }
}
