//! Core types shared by the classifiers and regressors.

mod options;
mod result;

pub use options::{
    CovarianceNormalization, DiscriminantOptions, DiscriminantOptionsBuilder, OptionsError,
    RegressionOptions, RegressionOptionsBuilder,
};
pub use result::{ClassificationResult, RegressionResult};
