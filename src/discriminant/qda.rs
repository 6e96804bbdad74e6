//! Quadratic discriminant analysis (per-class covariance).

use super::scoring::{class_means, gaussian_kernel, gaussian_normalizer, group_by_class};
use super::traits::{Classifier, DiscriminantError, FittedClassifier};
use crate::core::{CovarianceNormalization, DiscriminantOptions, DiscriminantOptionsBuilder};
use crate::utils::{covariance, mahalanobis_squared, select_rows, SpdDecomposition};
use faer::Mat;

/// Quadratic discriminant analysis classifier.
///
/// Each class j gets its own mean μ_j and covariance Σ_j, and a row x is
/// assigned to the class maximizing the full Gaussian density
///
/// exp(-½ (x - μ_j)' Σ_j⁻¹ (x - μ_j)) / ((2π)^(d/2) sqrt(det Σ_j))
///
/// The normalizing constant differs between classes, so unlike LDA it
/// changes the decision boundary and is always included.
#[derive(Debug, Clone, Default)]
pub struct QdaClassifier {
    options: DiscriminantOptions,
}

impl QdaClassifier {
    /// Create a new QDA classifier with the given options.
    pub fn new(options: DiscriminantOptions) -> Self {
        Self { options }
    }

    /// Create a builder for configuring the classifier.
    pub fn builder() -> QdaClassifierBuilder {
        QdaClassifierBuilder::default()
    }
}

impl Classifier for QdaClassifier {
    type Fitted = FittedQda;

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
        if let Some((j, rows)) = groups.iter().enumerate().find(|(_, rows)| rows.len() < needed) {
            return Err(DiscriminantError::InsufficientClassObservations {
                class: j + 1,
                needed,
                got: rows.len(),
            });
        }

        let means = class_means(x, &groups);

        // One owned matrix per class.
        let covariances: Vec<Mat<f64>> = groups
            .iter()
            .map(|rows| covariance(&select_rows(x, rows), self.options.covariance))
            .collect();

        log::debug!(
            "fitted QDA: {} classes, {} features, class sizes {:?}",
            groups.len(),
            x.ncols(),
            groups.iter().map(Vec::len).collect::<Vec<_>>()
        );

        Ok(FittedQda {
            means,
            covariances,
            singular_tolerance: self.options.singular_tolerance,
        })
    }
}

/// A fitted QDA model.
#[derive(Debug, Clone)]
pub struct FittedQda {
    means: Mat<f64>,
    covariances: Vec<Mat<f64>>,
    singular_tolerance: f64,
}

impl FittedQda {
    /// Build a model directly from class means (d × k) and one d × d
    /// covariance per class.
    pub fn from_parameters(
        means: Mat<f64>,
        covariances: Vec<Mat<f64>>,
    ) -> Result<Self, DiscriminantError> {
        let d = means.nrows();
        let k = means.ncols();
        if k == 0 {
            return Err(DiscriminantError::NoClasses);
        }
        if covariances.len() != k {
            return Err(DiscriminantError::InvalidParameters(format!(
                "expected {k} covariance matrices, got {}",
                covariances.len()
            )));
        }
        if let Some(bad) = covariances
            .iter()
            .position(|c| c.nrows() != d || c.ncols() != d)
        {
            return Err(DiscriminantError::InvalidParameters(format!(
                "covariance of class {} must be {d}x{d}",
                bad + 1
            )));
        }

        Ok(Self {
            means,
            covariances,
            singular_tolerance: DiscriminantOptions::default().singular_tolerance,
        })
    }

    /// Per-class covariance matrices; entry `j` belongs to class `j + 1`.
    pub fn covariances(&self) -> &[Mat<f64>] {
        &self.covariances
    }
}

impl FittedClassifier for FittedQda {
    fn means(&self) -> &Mat<f64> {
        &self.means
    }

    fn scores(&self, x: &Mat<f64>) -> Result<Mat<f64>, DiscriminantError> {
        let d = self.n_features();
        if x.ncols() != d {
            return Err(DiscriminantError::FeatureMismatch {
                expected: d,
                got: x.ncols(),
            });
        }

        // Inverses and determinants are computed per call, not stored.
        let mut precisions = Vec::with_capacity(self.covariances.len());
        let mut normalizers = Vec::with_capacity(self.covariances.len());
        for (j, cov) in self.covariances.iter().enumerate() {
            let spd = SpdDecomposition::new(cov, self.singular_tolerance)
                .ok_or(DiscriminantError::IllConditionedClass { class: j + 1 })?;
            normalizers.push(gaussian_normalizer(d, spd.determinant));
            precisions.push(spd.inverse);
        }

        Ok(Mat::from_fn(x.nrows(), self.n_classes(), |i, j| {
            normalizers[j] * gaussian_kernel(mahalanobis_squared(x, i, &self.means, j, &precisions[j]))
        }))
    }
}

/// Builder for `QdaClassifier`.
#[derive(Debug, Clone, Default)]
pub struct QdaClassifierBuilder {
    builder: DiscriminantOptionsBuilder,
}

impl QdaClassifierBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the covariance normalization convention.
    pub fn covariance(mut self, normalization: CovarianceNormalization) -> Self {
        self.builder = self.builder.covariance(normalization);
        self
    }

    /// Set the pivot tolerance used when factoring covariances.
    pub fn singular_tolerance(mut self, tol: f64) -> Self {
        self.builder = self.builder.singular_tolerance(tol);
        self
    }

    /// Build the QDA classifier.
    pub fn build(self) -> QdaClassifier {
        QdaClassifier::new(self.builder.build_unchecked())
    }
}
