//! Differentiable objectives for iterative solvers.

use crate::core::OptionsError;
use crate::solvers::traits::{check_dimensions, RegressionError};
use faer::{Col, Mat};

/// A smooth function of a weight vector that reports its own gradient.
pub trait Objective {
    /// Length of the weight vector the objective accepts.
    fn dimension(&self) -> usize;

    /// Evaluate the objective and its gradient at `w`.
    fn evaluate(&self, w: &Col<f64>) -> Result<(f64, Col<f64>), RegressionError>;
}

/// Ridge-regularized squared error.
///
/// loss(w) = ½ Σ (y - Xw)² + ½ λ w'w
///
/// ∇loss(w) = X'(Xw - y) + λ w
///
/// Setting the gradient to zero gives (X'X + λI) w = X'y, the equation solved
/// in closed form by [`RidgeRegressor`](crate::solvers::RidgeRegressor).
#[derive(Debug, Clone, Copy)]
pub struct RidgeObjective<'a> {
    x: &'a Mat<f64>,
    y: &'a Col<f64>,
    lambda: f64,
}

impl<'a> RidgeObjective<'a> {
    /// Borrow the training data for repeated evaluation.
    pub fn new(x: &'a Mat<f64>, y: &'a Col<f64>, lambda: f64) -> Result<Self, RegressionError> {
        check_dimensions(x, y)?;
        if lambda < 0.0 || lambda.is_nan() {
            return Err(OptionsError::InvalidLambda(lambda).into());
        }
        Ok(Self { x, y, lambda })
    }

    /// The L2 penalty.
    pub fn lambda(&self) -> f64 {
        self.lambda
    }
}

impl Objective for RidgeObjective<'_> {
    fn dimension(&self) -> usize {
        self.x.ncols()
    }

    fn evaluate(&self, w: &Col<f64>) -> Result<(f64, Col<f64>), RegressionError> {
        let n_samples = self.x.nrows();
        let n_features = self.x.ncols();
        if w.nrows() != n_features {
            return Err(RegressionError::FeatureMismatch {
                expected: n_features,
                got: w.nrows(),
            });
        }

        // r = Xw - y
        let mut residuals = Col::zeros(n_samples);
        for i in 0..n_samples {
            let mut pred = 0.0;
            for j in 0..n_features {
                pred += self.x[(i, j)] * w[j];
            }
            residuals[i] = pred - self.y[i];
        }

        let penalty: f64 = w.iter().map(|&wj| wj * wj).sum();
        let loss = 0.5 * residuals.iter().map(|&r| r * r).sum::<f64>() + 0.5 * self.lambda * penalty;

        let mut gradient = Col::zeros(n_features);
        for j in 0..n_features {
            let mut g = self.lambda * w[j];
            for i in 0..n_samples {
                g += self.x[(i, j)] * residuals[i];
            }
            gradient[j] = g;
        }

        Ok((loss, gradient))
    }
}

/// Evaluate the ridge objective and its gradient at `w`.
pub fn objective_and_gradient(
    w: &Col<f64>,
    x: &Mat<f64>,
    y: &Col<f64>,
    lambda: f64,
) -> Result<(f64, Col<f64>), RegressionError> {
    RidgeObjective::new(x, y, lambda)?.evaluate(w)
}
