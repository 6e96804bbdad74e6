//! Generative Gaussian classifiers.
//!
//! - **LDA**: class means with one covariance shared by every class
//! - **QDA**: class means with one covariance per class
//!
//! Both learn from a feature matrix and 1-indexed class labels, and classify
//! by the argmax of per-class Gaussian likelihood scores.
//!
//! # Example
//!
//! ```rust,ignore
//! use anofox_learn::discriminant::{Classifier, FittedClassifier, LdaClassifier, QdaClassifier};
//!
//! let lda = LdaClassifier::default().fit(&x, &y)?;
//! let qda = QdaClassifier::default().fit(&x, &y)?;
//!
//! let lda_result = lda.classify(&x_test, &y_test)?;
//! let qda_result = qda.classify(&x_test, &y_test)?;
//! ```

mod lda;
mod qda;
pub mod scoring;
mod traits;

pub use lda::{FittedLda, LdaClassifier, LdaClassifierBuilder};
pub use qda::{FittedQda, QdaClassifier, QdaClassifierBuilder};
pub use traits::{Classifier, DiscriminantError, FittedClassifier};
