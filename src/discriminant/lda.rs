//! Linear discriminant analysis (shared covariance).

use super::scoring::{class_means, gaussian_kernel, group_by_class};
use super::traits::{Classifier, DiscriminantError, FittedClassifier};
use crate::core::{CovarianceNormalization, DiscriminantOptions, DiscriminantOptionsBuilder};
use crate::utils::{covariance, invert, mahalanobis_squared};
use faer::Mat;

/// Linear discriminant analysis classifier.
///
/// Each class is modelled as a Gaussian with its own mean and one covariance
/// matrix shared by all classes. The shared covariance is estimated from the
/// whole training set without regard to class membership, so it is not the
/// class-weighted pooled estimate of textbook LDA.
///
/// A row x is assigned to the class j maximizing
/// exp(-½ (x - μ_j)' Σ⁻¹ (x - μ_j)).
///
/// # Example
///
/// ```rust,ignore
/// use anofox_learn::discriminant::{Classifier, FittedClassifier, LdaClassifier};
///
/// let fitted = LdaClassifier::builder().build().fit(&x, &labels)?;
/// let result = fitted.classify(&x_test, &labels_test)?;
/// println!("accuracy = {}%", result.accuracy);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LdaClassifier {
    options: DiscriminantOptions,
}

impl LdaClassifier {
    /// Create a new LDA classifier with the given options.
    pub fn new(options: DiscriminantOptions) -> Self {
        Self { options }
    }

    /// Create a builder for configuring the classifier.
    pub fn builder() -> LdaClassifierBuilder {
        LdaClassifierBuilder::default()
    }
}

impl Classifier for LdaClassifier {
    type Fitted = FittedLda;

    fn fit(&self, x: &Mat<f64>, y: &[usize]) -> Result<Self::Fitted, DiscriminantError> {
        if x.nrows() != y.len() {
            return Err(DiscriminantError::DimensionMismatch {
                x_rows: x.nrows(),
                y_len: y.len(),
            });
        }
        self.options.validate()?;

        let groups = group_by_class(y)?;

        let needed = self.options.covariance.min_observations();
        if x.nrows() < needed {
            return Err(DiscriminantError::InsufficientObservations {
                needed,
                got: x.nrows(),
            });
        }

        let means = class_means(x, &groups);
        let covariance = covariance(x, self.options.covariance);

        log::debug!(
            "fitted LDA: {} classes, {} features, {} observations",
            groups.len(),
            x.ncols(),
            x.nrows()
        );

        Ok(FittedLda {
            means,
            covariance,
            singular_tolerance: self.options.singular_tolerance,
        })
    }
}

/// A fitted LDA model.
#[derive(Debug, Clone)]
pub struct FittedLda {
    means: Mat<f64>,
    covariance: Mat<f64>,
    singular_tolerance: f64,
}

impl FittedLda {
    /// Build a model directly from class means (d × k) and a shared
    /// covariance (d × d).
    pub fn from_parameters(means: Mat<f64>, covariance: Mat<f64>) -> Result<Self, DiscriminantError> {
        let d = means.nrows();
        if means.ncols() == 0 {
            return Err(DiscriminantError::NoClasses);
        }
        if covariance.nrows() != d || covariance.ncols() != d {
            return Err(DiscriminantError::InvalidParameters(format!(
                "covariance must be {d}x{d}, got {}x{}",
                covariance.nrows(),
                covariance.ncols()
            )));
        }

        Ok(Self {
            means,
            covariance,
            singular_tolerance: DiscriminantOptions::default().singular_tolerance,
        })
    }

    /// The shared covariance matrix.
    pub fn covariance(&self) -> &Mat<f64> {
        &self.covariance
    }
}

impl FittedClassifier for FittedLda {
    fn means(&self) -> &Mat<f64> {
        &self.means
    }

    fn scores(&self, x: &Mat<f64>) -> Result<Mat<f64>, DiscriminantError> {
        if x.ncols() != self.n_features() {
            return Err(DiscriminantError::FeatureMismatch {
                expected: self.n_features(),
                got: x.ncols(),
            });
        }

        let precision = invert(&self.covariance, self.singular_tolerance)
            .ok_or(DiscriminantError::IllConditioned)?;

        Ok(Mat::from_fn(x.nrows(), self.n_classes(), |i, j| {
            gaussian_kernel(mahalanobis_squared(x, i, &self.means, j, &precision))
        }))
    }
}

/// Builder for `LdaClassifier`.
#[derive(Debug, Clone, Default)]
pub struct LdaClassifierBuilder {
    builder: DiscriminantOptionsBuilder,
}

impl LdaClassifierBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the covariance normalization convention.
    pub fn covariance(mut self, normalization: CovarianceNormalization) -> Self {
        self.builder = self.builder.covariance(normalization);
        self
    }

    /// Set the singularity tolerance used when inverting the covariance.
    pub fn singular_tolerance(mut self, tol: f64) -> Self {
        self.builder = self.builder.singular_tolerance(tol);
        self
    }

    /// Build the LDA classifier.
    pub fn build(self) -> LdaClassifier {
        LdaClassifier::new(self.builder.build_unchecked())
    }
}
