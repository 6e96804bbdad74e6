//! Dense linear algebra used by the estimators.
//!
//! Inversion and linear solves go through faer's QR decomposition followed by
//! back-substitution. Symmetric positive-definite matrices (covariances) are
//! factored with a Cholesky decomposition, which yields both the inverse and
//! the determinant in one pass.

use crate::core::CovarianceNormalization;
use faer::{Col, Mat};

/// Column-wise arithmetic mean of the rows of `x`.
pub fn column_means(x: &Mat<f64>) -> Col<f64> {
    let n_rows = x.nrows();
    let n_cols = x.ncols();
    let mut means = Col::zeros(n_cols);

    for j in 0..n_cols {
        let sum: f64 = (0..n_rows).map(|i| x[(i, j)]).sum();
        means[j] = sum / n_rows as f64;
    }

    means
}

/// Covariance matrix of the columns of `x` (rows are observations).
///
/// The data are centered on the column means before the scatter matrix is
/// formed. With fewer rows than `normalization.min_observations()` the
/// divisor is non-positive and the entries are not finite; callers check the
/// row count first.
pub fn covariance(x: &Mat<f64>, normalization: CovarianceNormalization) -> Mat<f64> {
    let n_rows = x.nrows();
    let n_cols = x.ncols();
    let means = column_means(x);
    let divisor = normalization.divisor(n_rows);

    let mut cov = Mat::zeros(n_cols, n_cols);
    for a in 0..n_cols {
        for b in a..n_cols {
            let mut sum = 0.0;
            for i in 0..n_rows {
                sum += (x[(i, a)] - means[a]) * (x[(i, b)] - means[b]);
            }
            let value = sum / divisor;
            cov[(a, b)] = value;
            cov[(b, a)] = value;
        }
    }

    cov
}

/// Diagonal scaling d with d_i = 1/sqrt(|a_ii|), so that D·A·D has a unit
/// diagonal. Zero or non-finite diagonal entries keep a factor of 1.
fn equilibration(a: &Mat<f64>) -> Col<f64> {
    Col::from_fn(a.nrows(), |i| {
        let diag = a[(i, i)].abs();
        if diag > 0.0 && diag.is_finite() {
            1.0 / diag.sqrt()
        } else {
            1.0
        }
    })
}

/// Compute D·A·D for the diagonal matrix D = diag(d).
fn scale_symmetric(a: &Mat<f64>, d: &Col<f64>) -> Mat<f64> {
    Mat::from_fn(a.nrows(), a.ncols(), |i, j| d[i] * a[(i, j)] * d[j])
}

/// Invert a square matrix using QR decomposition.
///
/// The matrix is equilibrated by its diagonal first, so the singularity test
/// does not depend on the units of the variables. Returns `None` when a
/// diagonal entry of R is below `tolerance` times the largest one in
/// magnitude (singular or nearly singular input).
pub fn invert(a: &Mat<f64>, tolerance: f64) -> Option<Mat<f64>> {
    let n = a.nrows();
    if n != a.ncols() {
        return None;
    }

    let d = equilibration(a);
    let scaled = scale_symmetric(a, &d);

    let qr = scaled.qr();
    let q = qr.compute_Q();
    let r = qr.R();

    if !is_well_conditioned((0..n).map(|i| r[(i, i)]), tolerance) {
        return None;
    }

    let mut inv = Mat::zeros(n, n);
    let qt = q.transpose();

    for col in 0..n {
        for i in (0..n).rev() {
            let mut sum = qt[(i, col)];
            for j in (i + 1)..n {
                sum -= r[(i, j)] * inv[(j, col)];
            }
            inv[(i, col)] = sum / r[(i, i)];
        }
    }

    // A⁻¹ = D (DAD)⁻¹ D
    Some(scale_symmetric(&inv, &d))
}

/// Check pivots for singularity relative to the largest pivot.
fn is_well_conditioned(pivots: impl Iterator<Item = f64>, tolerance: f64) -> bool {
    let pivots: Vec<f64> = pivots.map(f64::abs).collect();
    if pivots.iter().any(|p| !p.is_finite()) {
        return false;
    }

    let scale = pivots.iter().copied().fold(0.0, f64::max);
    if scale == 0.0 {
        return pivots.is_empty();
    }
    pivots.iter().all(|&p| p > tolerance * scale)
}

/// Solve `a · x = b` for square `a` using QR decomposition.
///
/// Like [`invert`], the system is equilibrated by the diagonal of `a` before
/// factoring. Returns `None` when `a` is singular to within `tolerance`.
pub fn solve(a: &Mat<f64>, b: &Col<f64>, tolerance: f64) -> Option<Col<f64>> {
    let n = a.nrows();
    if n != a.ncols() || n != b.nrows() {
        return None;
    }

    // (DAD) y = D b, x = D y
    let d = equilibration(a);
    let scaled = scale_symmetric(a, &d);
    let db = Col::from_fn(n, |i| d[i] * b[i]);

    let qr = scaled.qr();
    let q = qr.compute_Q();
    let r = qr.R();

    if !is_well_conditioned((0..n).map(|i| r[(i, i)]), tolerance) {
        return None;
    }

    // R y = Q' D b
    let qtb = q.transpose() * &db;

    let mut y = Col::zeros(n);
    for i in (0..n).rev() {
        let mut sum = qtb[i];
        for j in (i + 1)..n {
            sum -= r[(i, j)] * y[j];
        }
        y[i] = sum / r[(i, i)];
    }

    Some(Col::from_fn(n, |i| d[i] * y[i]))
}

/// Lower-triangular Cholesky factor L with `a = L L'`.
///
/// Returns `None` if `a` is not square or not positive definite.
pub fn cholesky(a: &Mat<f64>) -> Option<Mat<f64>> {
    let n = a.nrows();
    if n != a.ncols() {
        return None;
    }

    let mut l = Mat::zeros(n, n);
    for i in 0..n {
        for j in 0..=i {
            let mut sum = a[(i, j)];
            for k in 0..j {
                sum -= l[(i, k)] * l[(j, k)];
            }

            if i == j {
                if sum <= 0.0 || sum.is_nan() {
                    return None;
                }
                l[(i, i)] = sum.sqrt();
            } else {
                l[(i, j)] = sum / l[(j, j)];
            }
        }
    }

    Some(l)
}

/// Inverse and determinant of a symmetric positive-definite matrix.
#[derive(Debug, Clone)]
pub struct SpdDecomposition {
    /// The inverse matrix.
    pub inverse: Mat<f64>,
    /// The determinant (always positive).
    pub determinant: f64,
}

impl SpdDecomposition {
    /// Factor `a`, or `None` if it is not positive definite or any squared
    /// pivot of the diagonally equilibrated matrix falls below `tolerance`
    /// times the largest one.
    pub fn new(a: &Mat<f64>, tolerance: f64) -> Option<Self> {
        let d = equilibration(a);
        let l = cholesky(&scale_symmetric(a, &d))?;
        let n = l.nrows();

        if !is_well_conditioned((0..n).map(|i| l[(i, i)] * l[(i, i)]), tolerance) {
            return None;
        }
        // det(A) = det(DAD) / Π d_i²
        let determinant: f64 = (0..n)
            .map(|i| l[(i, i)] * l[(i, i)] / (d[i] * d[i]))
            .product();

        let mut scaled_inverse = Mat::zeros(n, n);
        for col in 0..n {
            // Forward substitution: L z = e_col
            let mut z = vec![0.0; n];
            for i in 0..n {
                let mut sum = if i == col { 1.0 } else { 0.0 };
                for k in 0..i {
                    sum -= l[(i, k)] * z[k];
                }
                z[i] = sum / l[(i, i)];
            }

            // Backward substitution: L' x = z
            for i in (0..n).rev() {
                let mut sum = z[i];
                for k in (i + 1)..n {
                    sum -= l[(k, i)] * scaled_inverse[(k, col)];
                }
                scaled_inverse[(i, col)] = sum / l[(i, i)];
            }
        }

        Some(Self {
            inverse: scale_symmetric(&scaled_inverse, &d),
            determinant,
        })
    }
}

/// Quadratic form (x - μ)' M (x - μ) for row `row` of `x` and column `class`
/// of `means`.
pub fn mahalanobis_squared(
    x: &Mat<f64>,
    row: usize,
    means: &Mat<f64>,
    class: usize,
    precision: &Mat<f64>,
) -> f64 {
    let d = x.ncols();
    let diff: Vec<f64> = (0..d).map(|a| x[(row, a)] - means[(a, class)]).collect();

    let mut total = 0.0;
    for a in 0..d {
        let mut inner = 0.0;
        for b in 0..d {
            inner += precision[(a, b)] * diff[b];
        }
        total += diff[a] * inner;
    }
    total
}
