//! Matrix utility functions.

use faer::{Col, Mat};

/// Prepend a column of ones to `x`, giving the model a bias weight.
pub fn with_intercept_column(x: &Mat<f64>) -> Mat<f64> {
    Mat::from_fn(x.nrows(), x.ncols() + 1, |i, j| {
        if j == 0 {
            1.0
        } else {
            x[(i, j - 1)]
        }
    })
}

/// Copy the rows of `x` listed in `rows`, in order.
pub fn select_rows(x: &Mat<f64>, rows: &[usize]) -> Mat<f64> {
    Mat::from_fn(rows.len(), x.ncols(), |i, j| x[(rows[i], j)])
}

/// Copy column `j` of `x` into a vector.
pub fn column(x: &Mat<f64>, j: usize) -> Col<f64> {
    Col::from_fn(x.nrows(), |i| x[(i, j)])
}

/// Compute X·w.
pub fn mat_vec(x: &Mat<f64>, w: &Col<f64>) -> Col<f64> {
    let n_samples = x.nrows();
    let n_features = x.ncols();
    let mut out = Col::zeros(n_samples);

    for i in 0..n_samples {
        let mut acc = 0.0;
        for j in 0..n_features {
            acc += x[(i, j)] * w[j];
        }
        out[i] = acc;
    }

    out
}

/// Euclidean norm of a vector.
pub fn norm(v: &Col<f64>) -> f64 {
    v.iter().map(|&a| a * a).sum::<f64>().sqrt()
}

/// Dot product of two vectors of equal length.
pub fn dot(a: &Col<f64>, b: &Col<f64>) -> f64 {
    a.iter().zip(b.iter()).map(|(&u, &v)| u * v).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_intercept_column() {
        let x = Mat::from_fn(3, 2, |i, j| (i * 2 + j) as f64);
        let aug = with_intercept_column(&x);

        assert_eq!(aug.ncols(), 3);
        for i in 0..3 {
            assert_eq!(aug[(i, 0)], 1.0);
            assert_eq!(aug[(i, 1)], x[(i, 0)]);
            assert_eq!(aug[(i, 2)], x[(i, 1)]);
        }
    }

    #[test]
    fn test_select_rows() {
        let x = Mat::from_fn(4, 2, |i, j| (10 * i + j) as f64);
        let sub = select_rows(&x, &[3, 1]);

        assert_eq!(sub.nrows(), 2);
        assert_eq!(sub[(0, 0)], 30.0);
        assert_eq!(sub[(1, 1)], 11.0);
    }

    #[test]
    fn test_select_rows_empty() {
        let x = Mat::from_fn(4, 2, |i, j| (i + j) as f64);
        let sub = select_rows(&x, &[]);
        assert_eq!(sub.nrows(), 0);
        assert_eq!(sub.ncols(), 2);
    }

    #[test]
    fn test_mat_vec() {
        let x = Mat::from_fn(2, 2, |i, j| (i + j + 1) as f64); // [[1,2],[2,3]]
        let w = Col::from_fn(2, |i| (i + 1) as f64); // [1,2]
        let out = mat_vec(&x, &w);

        assert!((out[0] - 5.0).abs() < 1e-12);
        assert!((out[1] - 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_norm_and_dot() {
        let a = Col::from_fn(2, |i| if i == 0 { 3.0 } else { 4.0 });
        assert!((norm(&a) - 5.0).abs() < 1e-12);
        assert!((dot(&a, &a) - 25.0).abs() < 1e-12);
    }

    #[test]
    fn test_column() {
        let x = Mat::from_fn(3, 2, |i, j| (i * 10 + j) as f64);
        let c = column(&x, 1);
        assert_eq!(c.nrows(), 3);
        assert_eq!(c[2], 21.0);
    }
}
