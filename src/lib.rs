//! Gaussian discriminant classifiers and least-squares regression.
//!
//! This library provides sklearn-style estimators built on `faer` matrices:
//!
//! - **Discriminant analysis**: LDA (shared covariance) and QDA (per-class
//!   covariance) classifiers with Gaussian class scores
//! - **Regression**: closed-form OLS and ridge, and ridge fit by conjugate
//!   gradient on its objective
//! - **Features**: polynomial basis expansion
//! - **Selection**: train/test sweeps over lambda and polynomial degree
//!
//! # Example
//!
//! ```rust,ignore
//! use anofox_learn::prelude::*;
//!
//! // Classify with LDA
//! let lda = LdaClassifier::default().fit(&x_train, &labels)?;
//! let result = lda.classify(&x_test, &test_labels)?;
//! println!("accuracy = {:.1}%", result.accuracy);
//!
//! // Ridge regression with an explicit bias column
//! let fitted = RidgeRegressor::builder()
//!     .lambda(0.1)
//!     .build()
//!     .fit(&with_intercept_column(&x), &y)?;
//! println!("test mse = {}", fitted.mse(&with_intercept_column(&x_test), &y_test)?);
//! ```

pub mod core;
pub mod diagnostics;
pub mod discriminant;
pub mod features;
pub mod selection;
pub mod solvers;
pub mod utils;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::core::{
        ClassificationResult, CovarianceNormalization, DiscriminantOptions, RegressionOptions,
        RegressionOptionsBuilder, RegressionResult,
    };
    pub use crate::diagnostics::mean_squared_error;
    pub use crate::discriminant::{
        Classifier, DiscriminantError, FittedClassifier, FittedLda, FittedQda, LdaClassifier,
        QdaClassifier,
    };
    pub use crate::features::polynomial_features;
    pub use crate::selection::{linspace, sweep_lambdas, RegressionData};
    pub use crate::solvers::{
        objective_and_gradient, FittedRegressor, GradientRidgeRegressor, OlsRegressor,
        RegressionError, Regressor, RidgeRegressor,
    };
    pub use crate::utils::with_intercept_column;
}

pub use crate::core::{
    ClassificationResult, CovarianceNormalization, DiscriminantOptions, OptionsError,
    RegressionOptions, RegressionOptionsBuilder, RegressionResult,
};
pub use crate::discriminant::{Classifier, DiscriminantError, FittedClassifier};
pub use crate::solvers::{FittedRegressor, RegressionError, Regressor};
