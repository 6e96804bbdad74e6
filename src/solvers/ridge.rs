//! Ridge regression solver (L2 regularization).

use crate::core::{RegressionOptions, RegressionOptionsBuilder, RegressionResult};
use crate::solvers::ols::{solve_normal_equations, OlsRegressor};
use crate::solvers::traits::{check_dimensions, FittedRegressor, RegressionError, Regressor};
use crate::utils::mat_vec;
use faer::{Col, Mat};

/// Ridge regression estimator with L2 regularization.
///
/// Minimizes: ½||y - Xw||² + ½λ||w||²
///
/// The solution is: w = (X'X + λI)^(-1) X'y
///
/// When λ = 0, this reduces to OLS. Every weight is penalized, including a
/// bias weight if the caller prepended a column of ones.
///
/// # Example
///
/// ```rust,ignore
/// use anofox_learn::solvers::{RidgeRegressor, Regressor, FittedRegressor};
/// use anofox_learn::utils::with_intercept_column;
///
/// let fitted = RidgeRegressor::builder()
///     .lambda(0.1)
///     .build()
///     .fit(&with_intercept_column(&x), &y)?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct RidgeRegressor {
    options: RegressionOptions,
}

impl RidgeRegressor {
    /// Create a new Ridge regressor with the given options.
    pub fn new(options: RegressionOptions) -> Self {
        Self { options }
    }

    /// Create a builder for configuring the regressor.
    pub fn builder() -> RidgeRegressorBuilder {
        RidgeRegressorBuilder::default()
    }
}

impl Regressor for RidgeRegressor {
    type Fitted = FittedRidge;

    fn fit(&self, x: &Mat<f64>, y: &Col<f64>) -> Result<Self::Fitted, RegressionError> {
        self.options.validate()?;

        // When lambda = 0, delegate to OLS
        if self.options.lambda == 0.0 {
            let ols = OlsRegressor::new(self.options.clone());
            let ols_fitted = ols.fit(x, y)?;
            return Ok(FittedRidge {
                options: self.options.clone(),
                result: ols_fitted.result().clone(),
            });
        }

        check_dimensions(x, y)?;

        let lambda = self.options.lambda;
        let coefficients = solve_normal_equations(x, y, lambda, self.options.rank_tolerance)?;
        let fitted_values = mat_vec(x, &coefficients);
        let result = RegressionResult::from_fit(coefficients, fitted_values, y, lambda);

        log::debug!(
            "fitted ridge: lambda {lambda}, {} observations, {} features, training mse {:.6}",
            result.n_observations,
            result.n_parameters,
            result.mse
        );

        Ok(FittedRidge {
            options: self.options.clone(),
            result,
        })
    }
}

/// A fitted Ridge regression model.
#[derive(Debug, Clone)]
pub struct FittedRidge {
    options: RegressionOptions,
    result: RegressionResult,
}

impl FittedRidge {
    /// Get the options used to fit this model.
    pub fn options(&self) -> &RegressionOptions {
        &self.options
    }

    /// Get the lambda (regularization) parameter.
    pub fn lambda(&self) -> f64 {
        self.options.lambda
    }
}

impl FittedRegressor for FittedRidge {
    fn result(&self) -> &RegressionResult {
        &self.result
    }
}

/// Builder for `RidgeRegressor`.
#[derive(Debug, Clone, Default)]
pub struct RidgeRegressorBuilder {
    builder: RegressionOptionsBuilder,
}

impl RidgeRegressorBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the L2 regularization parameter (lambda).
    pub fn lambda(mut self, lambda: f64) -> Self {
        self.builder = self.builder.lambda(lambda);
        self
    }

    /// Set the singularity tolerance.
    pub fn rank_tolerance(mut self, tol: f64) -> Self {
        self.builder = self.builder.rank_tolerance(tol);
        self
    }

    /// Build the Ridge regressor.
    pub fn build(self) -> RidgeRegressor {
        RidgeRegressor::new(self.builder.build_unchecked())
    }
}
