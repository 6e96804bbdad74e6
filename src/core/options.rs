//! Estimator options and configuration.

use thiserror::Error;

/// Normalization used by the covariance estimator.
///
/// Discriminant decisions only depend on covariances up to a shared scale for
/// LDA, but QDA compares determinants across classes, so one convention must
/// be used consistently for a fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CovarianceNormalization {
    /// Divide by N - 1 (sample covariance).
    #[default]
    Unbiased,
    /// Divide by N (maximum likelihood estimate).
    MaximumLikelihood,
}

impl CovarianceNormalization {
    /// Minimum number of rows needed to produce a covariance.
    pub fn min_observations(&self) -> usize {
        match self {
            CovarianceNormalization::Unbiased => 2,
            CovarianceNormalization::MaximumLikelihood => 1,
        }
    }

    /// Divisor applied to the scatter matrix of `n` rows.
    pub fn divisor(&self, n: usize) -> f64 {
        match self {
            CovarianceNormalization::Unbiased => n as f64 - 1.0,
            CovarianceNormalization::MaximumLikelihood => n as f64,
        }
    }
}

/// Configuration options for regression models.
#[derive(Debug, Clone)]
pub struct RegressionOptions {
    /// L2 regularization parameter (0 = ordinary least squares).
    pub lambda: f64,
    /// Relative pivot size below which a system is treated as singular.
    pub rank_tolerance: f64,
    /// Iteration budget for gradient-based fitting.
    pub max_iterations: usize,
    /// Gradient norm at which gradient-based fitting stops early.
    pub tolerance: f64,
}

impl Default for RegressionOptions {
    fn default() -> Self {
        Self {
            lambda: 0.0,
            rank_tolerance: 1e-12,
            max_iterations: 20,
            tolerance: 1e-8,
        }
    }
}

/// Errors that can occur when validating options.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("lambda must be non-negative, got {0}")]
    InvalidLambda(f64),
    #[error("tolerance must be positive, got {0}")]
    InvalidTolerance(f64),
    #[error("max_iterations must be at least 1, got {0}")]
    InvalidMaxIterations(usize),
    #[error("invalid sweep: {0}")]
    InvalidSweep(String),
}

impl RegressionOptions {
    /// Create a new builder for regression options.
    pub fn builder() -> RegressionOptionsBuilder {
        RegressionOptionsBuilder::default()
    }

    /// Create default options for OLS regression.
    pub fn ols() -> Self {
        Self::default()
    }

    /// Create options for Ridge regression with given lambda.
    pub fn ridge(lambda: f64) -> Self {
        Self {
            lambda,
            ..Default::default()
        }
    }

    /// Create options for gradient-based Ridge regression.
    pub fn gradient(lambda: f64, max_iterations: usize) -> Self {
        Self {
            lambda,
            max_iterations,
            ..Default::default()
        }
    }

    /// Validate the options and return an error if invalid.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.lambda < 0.0 || self.lambda.is_nan() {
            return Err(OptionsError::InvalidLambda(self.lambda));
        }
        if self.tolerance <= 0.0 || self.tolerance.is_nan() {
            return Err(OptionsError::InvalidTolerance(self.tolerance));
        }
        if self.rank_tolerance <= 0.0 || self.rank_tolerance.is_nan() {
            return Err(OptionsError::InvalidTolerance(self.rank_tolerance));
        }
        if self.max_iterations < 1 {
            return Err(OptionsError::InvalidMaxIterations(self.max_iterations));
        }
        Ok(())
    }
}

/// Builder for `RegressionOptions`.
#[derive(Debug, Clone, Default)]
pub struct RegressionOptionsBuilder {
    options: RegressionOptions,
}

impl RegressionOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the L2 regularization parameter (lambda).
    pub fn lambda(mut self, lambda: f64) -> Self {
        self.options.lambda = lambda;
        self
    }

    /// Set the singularity tolerance.
    pub fn rank_tolerance(mut self, tol: f64) -> Self {
        self.options.rank_tolerance = tol;
        self
    }

    /// Set the maximum iterations for gradient-based fitting.
    pub fn max_iterations(mut self, max_iter: usize) -> Self {
        self.options.max_iterations = max_iter;
        self
    }

    /// Set the convergence tolerance.
    pub fn tolerance(mut self, tol: f64) -> Self {
        self.options.tolerance = tol;
        self
    }

    /// Build and validate the options.
    pub fn build(self) -> Result<RegressionOptions, OptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }

    /// Build the options without validation.
    pub fn build_unchecked(self) -> RegressionOptions {
        self.options
    }
}

/// Configuration options for discriminant classifiers.
#[derive(Debug, Clone)]
pub struct DiscriminantOptions {
    /// Covariance normalization convention.
    pub covariance: CovarianceNormalization,
    /// Relative pivot size below which a covariance is treated as singular.
    pub singular_tolerance: f64,
}

impl Default for DiscriminantOptions {
    fn default() -> Self {
        Self {
            covariance: CovarianceNormalization::Unbiased,
            singular_tolerance: 1e-12,
        }
    }
}

impl DiscriminantOptions {
    /// Create a new builder for discriminant options.
    pub fn builder() -> DiscriminantOptionsBuilder {
        DiscriminantOptionsBuilder::default()
    }

    /// Validate the options and return an error if invalid.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.singular_tolerance <= 0.0 || self.singular_tolerance.is_nan() {
            return Err(OptionsError::InvalidTolerance(self.singular_tolerance));
        }
        Ok(())
    }
}

/// Builder for `DiscriminantOptions`.
#[derive(Debug, Clone, Default)]
pub struct DiscriminantOptionsBuilder {
    options: DiscriminantOptions,
}

impl DiscriminantOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the covariance normalization convention.
    pub fn covariance(mut self, normalization: CovarianceNormalization) -> Self {
        self.options.covariance = normalization;
        self
    }

    /// Set the singularity tolerance.
    pub fn singular_tolerance(mut self, tol: f64) -> Self {
        self.options.singular_tolerance = tol;
        self
    }

    /// Build and validate the options.
    pub fn build(self) -> Result<DiscriminantOptions, OptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }

    /// Build the options without validation.
    pub fn build_unchecked(self) -> DiscriminantOptions {
        self.options
    }
}
