//! Model selection by train/test sweeps.
//!
//! Fits one model per candidate hyperparameter on a training split and
//! records the mean squared error on both splits, so the caller can pick
//! the candidate with the lowest held-out error.
//!
//! # Example
//!
//! ```rust,ignore
//! use anofox_learn::selection::{linspace, sweep_lambdas, RegressionData};
//! use anofox_learn::solvers::RidgeRegressor;
//!
//! let data = RegressionData::new(x_train, y_train, x_test, y_test)?;
//! let sweep = sweep_lambdas(&data, &linspace(0.0, 1.0, 101), |lambda| {
//!     RidgeRegressor::builder().lambda(lambda).build()
//! })?;
//! println!("best lambda = {:?}", sweep.best_lambda());
//! ```

use crate::core::OptionsError;
use crate::diagnostics::mean_squared_error;
use crate::features::polynomial_features;
use crate::solvers::{FittedRegressor, RegressionError, Regressor, RidgeRegressor};
use faer::{Col, Mat};

/// `num` evenly spaced values from `start` to `stop`, both ends included.
///
/// `num == 0` gives an empty vector and `num == 1` gives `[start]`.
pub fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            (0..num)
                .map(|i| if i == num - 1 { stop } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// A train/test split with row-aligned targets.
#[derive(Debug, Clone)]
pub struct RegressionData {
    x_train: Mat<f64>,
    y_train: Col<f64>,
    x_test: Mat<f64>,
    y_test: Col<f64>,
}

impl RegressionData {
    /// Validate shapes and build the split.
    ///
    /// Each design matrix must have one row per target, and both matrices
    /// must have the same number of columns.
    pub fn new(
        x_train: Mat<f64>,
        y_train: Col<f64>,
        x_test: Mat<f64>,
        y_test: Col<f64>,
    ) -> Result<Self, RegressionError> {
        if x_train.nrows() != y_train.nrows() {
            return Err(RegressionError::DimensionMismatch {
                x_rows: x_train.nrows(),
                y_len: y_train.nrows(),
            });
        }
        if x_test.nrows() != y_test.nrows() {
            return Err(RegressionError::DimensionMismatch {
                x_rows: x_test.nrows(),
                y_len: y_test.nrows(),
            });
        }
        if x_train.ncols() != x_test.ncols() {
            return Err(RegressionError::FeatureMismatch {
                expected: x_train.ncols(),
                got: x_test.ncols(),
            });
        }
        Ok(Self {
            x_train,
            y_train,
            x_test,
            y_test,
        })
    }

    /// Training design matrix.
    pub fn x_train(&self) -> &Mat<f64> {
        &self.x_train
    }

    /// Training targets.
    pub fn y_train(&self) -> &Col<f64> {
        &self.y_train
    }

    /// Test design matrix.
    pub fn x_test(&self) -> &Mat<f64> {
        &self.x_test
    }

    /// Test targets.
    pub fn y_test(&self) -> &Col<f64> {
        &self.y_test
    }
}

/// Train and test error for each lambda of a sweep.
#[derive(Debug, Clone)]
pub struct LambdaSweep {
    pub lambdas: Vec<f64>,
    pub train_mse: Vec<f64>,
    pub test_mse: Vec<f64>,
}

impl LambdaSweep {
    /// Lambda with the lowest test error; the first one wins on ties.
    pub fn best_lambda(&self) -> Option<f64> {
        first_argmin(&self.test_mse).map(|i| self.lambdas[i])
    }

    /// Lowest test error in the sweep.
    pub fn best_test_mse(&self) -> Option<f64> {
        first_argmin(&self.test_mse).map(|i| self.test_mse[i])
    }
}

/// Train and test error for each polynomial degree `0..=max_degree`.
#[derive(Debug, Clone)]
pub struct DegreeSweep {
    pub lambda: f64,
    pub degrees: Vec<usize>,
    pub train_mse: Vec<f64>,
    pub test_mse: Vec<f64>,
}

impl DegreeSweep {
    /// Degree with the lowest test error; the first one wins on ties.
    pub fn best_degree(&self) -> Option<usize> {
        first_argmin(&self.test_mse).map(|i| self.degrees[i])
    }
}

fn first_argmin(values: &[f64]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, &v) in values.iter().enumerate() {
        if v.is_nan() {
            continue;
        }
        match best {
            Some(b) if values[b] <= v => {}
            _ => best = Some(i),
        }
    }
    best
}

/// Fit one regressor per lambda and record train/test MSE.
///
/// `make` builds the estimator for a given lambda, so the same sweep works
/// for the closed-form and the iterative ridge solvers. Any fit failure
/// aborts the sweep.
pub fn sweep_lambdas<R, F>(
    data: &RegressionData,
    lambdas: &[f64],
    make: F,
) -> Result<LambdaSweep, RegressionError>
where
    R: Regressor,
    F: Fn(f64) -> R,
{
    if lambdas.is_empty() {
        return Err(OptionsError::InvalidSweep("no lambdas to evaluate".to_string()).into());
    }

    let mut train_mse = Vec::with_capacity(lambdas.len());
    let mut test_mse = Vec::with_capacity(lambdas.len());

    for &lambda in lambdas {
        let fitted = make(lambda).fit(&data.x_train, &data.y_train)?;
        train_mse.push(fitted.mse(&data.x_train, &data.y_train)?);
        test_mse.push(fitted.mse(&data.x_test, &data.y_test)?);
    }

    let sweep = LambdaSweep {
        lambdas: lambdas.to_vec(),
        train_mse,
        test_mse,
    };
    log::debug!(
        "lambda sweep over {} values: best lambda {:?}, test mse {:?}",
        lambdas.len(),
        sweep.best_lambda(),
        sweep.best_test_mse()
    );
    Ok(sweep)
}

/// Fit a ridge model on polynomial expansions of degree `0..=max_degree`.
///
/// The bound is inclusive: `max_degree = 6` evaluates seven models, degrees
/// 0 through 6. Both feature columns are expanded with
/// [`polynomial_features`], so every fit includes the constant column.
pub fn sweep_polynomial_degrees(
    x_train: &Col<f64>,
    y_train: &Col<f64>,
    x_test: &Col<f64>,
    y_test: &Col<f64>,
    max_degree: usize,
    lambda: f64,
) -> Result<DegreeSweep, RegressionError> {
    let mut train_mse = Vec::with_capacity(max_degree + 1);
    let mut test_mse = Vec::with_capacity(max_degree + 1);

    for degree in 0..=max_degree {
        let xd_train = polynomial_features(x_train, degree);
        let xd_test = polynomial_features(x_test, degree);

        let fitted = RidgeRegressor::builder()
            .lambda(lambda)
            .build()
            .fit(&xd_train, y_train)?;

        train_mse.push(fitted.mse(&xd_train, y_train)?);
        test_mse.push(mean_squared_error(fitted.coefficients(), &xd_test, y_test)?);
    }

    Ok(DegreeSweep {
        lambda,
        degrees: (0..=max_degree).collect(),
        train_mse,
        test_mse,
    })
}
