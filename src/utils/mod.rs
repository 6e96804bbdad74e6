//! Shared numeric helpers.

mod linalg;
mod matrix;

pub use linalg::{
    cholesky, column_means, covariance, invert, mahalanobis_squared, solve, SpdDecomposition,
};
pub use matrix::{column, dot, mat_vec, norm, select_rows, with_intercept_column};
