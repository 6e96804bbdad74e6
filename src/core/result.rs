//! Fit and classification result structures.

use faer::Col;

/// Result from a regression fit.
///
/// Holds the weight vector together with the in-sample fit so that callers
/// can report training error without refitting.
#[derive(Debug, Clone)]
pub struct RegressionResult {
    /// Estimated weights, one per column of the design matrix.
    ///
    /// There is no separate intercept: a bias weight exists only when the
    /// caller prepended a column of ones.
    pub coefficients: Col<f64>,

    /// Residuals (y - fitted_values).
    pub residuals: Col<f64>,

    /// Fitted values (predictions on training data).
    pub fitted_values: Col<f64>,

    /// Number of observations.
    pub n_observations: usize,

    /// Number of weights.
    pub n_parameters: usize,

    /// L2 penalty used for the fit.
    pub lambda: f64,

    /// Mean squared error on the training data, (1/N) Σ r².
    pub mse: f64,

    /// Iterations taken by an iterative solver (None for closed-form fits).
    pub iterations: Option<usize>,
}

impl RegressionResult {
    /// Build a result from weights and the training data they were fit on.
    pub(crate) fn from_fit(
        coefficients: Col<f64>,
        fitted_values: Col<f64>,
        y: &Col<f64>,
        lambda: f64,
    ) -> Self {
        let n = y.nrows();
        let residuals = Col::from_fn(n, |i| y[i] - fitted_values[i]);
        let rss: f64 = residuals.iter().map(|&r| r.powi(2)).sum();
        let mse = if n > 0 { rss / n as f64 } else { f64::NAN };

        Self {
            n_parameters: coefficients.nrows(),
            coefficients,
            residuals,
            fitted_values,
            n_observations: n,
            lambda,
            mse,
            iterations: None,
        }
    }

    /// Residual sum of squares (RSS).
    pub fn rss(&self) -> f64 {
        self.residuals.iter().map(|&r| r.powi(2)).sum()
    }

    /// Squared L2 norm of the weights.
    pub fn coefficient_norm_squared(&self) -> f64 {
        self.coefficients.iter().map(|&c| c.powi(2)).sum()
    }

    /// Value of the ridge objective 0.5·RSS + 0.5·λ·‖w‖² at the fitted weights.
    pub fn objective_value(&self) -> f64 {
        0.5 * self.rss() + 0.5 * self.lambda * self.coefficient_norm_squared()
    }
}

/// Result of classifying a labelled test set.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationResult {
    /// Percentage of predictions equal to the supplied labels (0 to 100).
    pub accuracy: f64,
    /// Predicted class labels, 1-indexed.
    pub predictions: Vec<usize>,
}

impl ClassificationResult {
    /// Number of correctly classified rows.
    pub fn n_correct(&self) -> usize {
        (self.accuracy / 100.0 * self.predictions.len() as f64).round() as usize
    }
}
