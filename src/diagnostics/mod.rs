//! Regression diagnostics.
//!
//! - **Residuals**: y - Xw for a weight vector on any data set
//! - **MSE**: mean squared error, used for train/test comparison
//!
//! # Example
//!
//! ```rust,ignore
//! use anofox_learn::diagnostics::mean_squared_error;
//!
//! let fitted = RidgeRegressor::builder().lambda(0.1).build().fit(&x_train, &y_train)?;
//! let test_mse = mean_squared_error(fitted.coefficients(), &x_test, &y_test)?;
//! ```

mod residuals;

pub use residuals::{mean_squared_error, residuals};
