//! Core traits for regression estimators.

use crate::core::RegressionResult;
use crate::diagnostics::mean_squared_error;
use crate::utils::mat_vec;
use faer::{Col, Mat};
use thiserror::Error;

/// Errors that can occur during regression fitting.
#[derive(Debug, Error)]
pub enum RegressionError {
    #[error("dimension mismatch: X has {x_rows} rows but y has {y_len} elements")]
    DimensionMismatch { x_rows: usize, y_len: usize },

    #[error("feature mismatch: expected {expected} features, got {got}")]
    FeatureMismatch { expected: usize, got: usize },

    #[error("insufficient observations: need at least {needed}, got {got}")]
    InsufficientObservations { needed: usize, got: usize },

    #[error("ill-conditioned model: matrix is singular or nearly singular")]
    SingularMatrix,

    #[error("invalid options: {0}")]
    InvalidOptions(#[from] crate::core::OptionsError),

    #[error("numerical error: {0}")]
    NumericalError(String),
}

/// Check that `x` and `y` describe the same number of observations.
pub(crate) fn check_dimensions(x: &Mat<f64>, y: &Col<f64>) -> Result<(), RegressionError> {
    if x.nrows() != y.nrows() {
        return Err(RegressionError::DimensionMismatch {
            x_rows: x.nrows(),
            y_len: y.nrows(),
        });
    }
    if x.nrows() == 0 {
        return Err(RegressionError::InsufficientObservations { needed: 1, got: 0 });
    }
    Ok(())
}

/// A regression estimator that can be fit to data.
///
/// This trait follows the sklearn pattern where fitting returns a fitted model
/// that can then make predictions.
pub trait Regressor {
    /// The type of the fitted model.
    type Fitted: FittedRegressor;

    /// Fit the model to the data.
    ///
    /// # Arguments
    /// * `x` - Design matrix of shape (n_samples, n_features)
    /// * `y` - Target vector of length n_samples
    ///
    /// No intercept is added; prepend a column of ones to `x` to fit one.
    fn fit(&self, x: &Mat<f64>, y: &Col<f64>) -> Result<Self::Fitted, RegressionError>;
}

/// A fitted regression model that can make predictions.
pub trait FittedRegressor {
    /// Access the regression results (coefficients, training fit).
    fn result(&self) -> &RegressionResult;

    /// Get the weight vector (convenience method).
    fn coefficients(&self) -> &Col<f64> {
        &self.result().coefficients
    }

    /// Make predictions X·w on new data.
    fn predict(&self, x: &Mat<f64>) -> Result<Col<f64>, RegressionError> {
        let coefficients = self.coefficients();
        if x.ncols() != coefficients.nrows() {
            return Err(RegressionError::FeatureMismatch {
                expected: coefficients.nrows(),
                got: x.ncols(),
            });
        }
        Ok(mat_vec(x, coefficients))
    }

    /// Mean squared error of the model on `(x, y)`.
    fn mse(&self, x: &Mat<f64>, y: &Col<f64>) -> Result<f64, RegressionError> {
        mean_squared_error(self.coefficients(), x, y)
    }
}
