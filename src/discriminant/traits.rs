//! Core traits for discriminant classifiers.

use super::scoring::{accuracy, argmax_rows};
use crate::core::ClassificationResult;
use faer::Mat;
use thiserror::Error;

/// Errors that can occur when fitting or applying a discriminant classifier.
#[derive(Debug, Error)]
pub enum DiscriminantError {
    #[error("dimension mismatch: X has {x_rows} rows but y has {y_len} elements")]
    DimensionMismatch { x_rows: usize, y_len: usize },

    #[error("feature mismatch: model has {expected} features, input has {got}")]
    FeatureMismatch { expected: usize, got: usize },

    #[error("invalid label {label}: class labels start at 1")]
    InvalidLabel { label: usize },

    #[error("class {class} has no training examples")]
    EmptyClass { class: usize },

    #[error("no classes: training labels are empty")]
    NoClasses,

    #[error("insufficient observations: need at least {needed}, got {got}")]
    InsufficientObservations { needed: usize, got: usize },

    #[error("insufficient observations for class {class}: need at least {needed}, got {got}")]
    InsufficientClassObservations {
        class: usize,
        needed: usize,
        got: usize,
    },

    #[error("ill-conditioned model: shared covariance matrix is singular")]
    IllConditioned,

    #[error("ill-conditioned model: covariance of class {class} is not positive definite")]
    IllConditionedClass { class: usize },

    #[error("invalid model parameters: {0}")]
    InvalidParameters(String),

    #[error("invalid options: {0}")]
    InvalidOptions(#[from] crate::core::OptionsError),
}

/// A discriminant classifier that can be fit to labelled data.
pub trait Classifier {
    /// The type of the fitted model.
    type Fitted: FittedClassifier;

    /// Fit the model to the data.
    ///
    /// # Arguments
    /// * `x` - Feature matrix of shape (n_samples, n_features)
    /// * `y` - Class labels in `1..=k`, one per row of `x`
    ///
    /// The number of classes `k` is the largest label in `y`; every class in
    /// `1..=k` must have at least one row.
    fn fit(&self, x: &Mat<f64>, y: &[usize]) -> Result<Self::Fitted, DiscriminantError>;
}

/// A fitted discriminant classifier.
pub trait FittedClassifier {
    /// Class means, one column per class (shape n_features × n_classes).
    fn means(&self) -> &Mat<f64>;

    /// Per-class likelihood scores for each row of `x` (shape n_samples × n_classes).
    fn scores(&self, x: &Mat<f64>) -> Result<Mat<f64>, DiscriminantError>;

    /// Number of classes.
    fn n_classes(&self) -> usize {
        self.means().ncols()
    }

    /// Number of features.
    fn n_features(&self) -> usize {
        self.means().nrows()
    }

    /// Predict 1-indexed class labels for each row of `x`.
    ///
    /// Ties between equal scores resolve to the lowest class label.
    fn predict(&self, x: &Mat<f64>) -> Result<Vec<usize>, DiscriminantError> {
        let scores = self.scores(x)?;
        Ok(argmax_rows(&scores))
    }

    /// Predict labels for `x` and score them against `y_true`.
    ///
    /// When no ground truth is available a vector of zeros may be passed;
    /// the predictions are still valid but the accuracy is meaningless.
    fn classify(
        &self,
        x: &Mat<f64>,
        y_true: &[usize],
    ) -> Result<ClassificationResult, DiscriminantError> {
        if x.nrows() != y_true.len() {
            return Err(DiscriminantError::DimensionMismatch {
                x_rows: x.nrows(),
                y_len: y_true.len(),
            });
        }

        let predictions = self.predict(x)?;
        let accuracy = accuracy(&predictions, y_true);

        Ok(ClassificationResult {
            accuracy,
            predictions,
        })
    }
}
