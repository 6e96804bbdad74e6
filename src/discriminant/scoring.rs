//! Class grouping, Gaussian scores and the argmax decision rule.

use super::traits::DiscriminantError;
use faer::Mat;
use std::f64::consts::PI;

/// Group row indices by class label.
///
/// Returns one entry per class `1..=k`, where `k` is the largest label.
/// Entry `i` holds the rows labelled `i + 1`.
pub fn group_by_class(y: &[usize]) -> Result<Vec<Vec<usize>>, DiscriminantError> {
    if let Some(&label) = y.iter().find(|&&label| label == 0) {
        return Err(DiscriminantError::InvalidLabel { label });
    }

    let k = y.iter().copied().max().ok_or(DiscriminantError::NoClasses)?;

    let mut groups = vec![Vec::new(); k];
    for (row, &label) in y.iter().enumerate() {
        groups[label - 1].push(row);
    }

    if let Some(empty) = groups.iter().position(|rows| rows.is_empty()) {
        return Err(DiscriminantError::EmptyClass { class: empty + 1 });
    }

    Ok(groups)
}

/// Class means as a d × k matrix; column `j` is the mean of the rows in
/// `groups[j]`.
pub fn class_means(x: &Mat<f64>, groups: &[Vec<usize>]) -> Mat<f64> {
    let d = x.ncols();
    let k = groups.len();
    let mut means = Mat::zeros(d, k);

    for (j, rows) in groups.iter().enumerate() {
        let count = rows.len() as f64;
        for a in 0..d {
            let sum: f64 = rows.iter().map(|&i| x[(i, a)]).sum();
            means[(a, j)] = sum / count;
        }
    }

    means
}

/// Unnormalized Gaussian likelihood exp(-q/2) for squared Mahalanobis
/// distance `q`.
pub fn gaussian_kernel(mahalanobis_squared: f64) -> f64 {
    (-0.5 * mahalanobis_squared).exp()
}

/// Multivariate normal constant 1 / ((2π)^(d/2) · sqrt(det Σ)).
pub fn gaussian_normalizer(n_features: usize, determinant: f64) -> f64 {
    1.0 / ((2.0 * PI).powf(n_features as f64 / 2.0) * determinant.sqrt())
}

/// 1-indexed argmax of each row of `scores`.
///
/// The first column holding the maximum wins, so ties go to the lowest
/// class label.
pub fn argmax_rows(scores: &Mat<f64>) -> Vec<usize> {
    let k = scores.ncols();

    (0..scores.nrows())
        .map(|i| {
            let mut best = 0;
            for j in 1..k {
                if scores[(i, j)] > scores[(i, best)] {
                    best = j;
                }
            }
            best + 1
        })
        .collect()
}

/// Percentage of `predictions` equal to `truth`.
///
/// Returns NaN for empty input.
pub fn accuracy(predictions: &[usize], truth: &[usize]) -> f64 {
    let n = predictions.len();
    if n == 0 {
        return f64::NAN;
    }

    let correct = predictions
        .iter()
        .zip(truth.iter())
        .filter(|(p, t)| p == t)
        .count();

    correct as f64 / n as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_by_class() {
        let groups = group_by_class(&[2, 1, 2, 3, 1]).unwrap();
        assert_eq!(groups, vec![vec![1, 4], vec![0, 2], vec![3]]);
    }

    #[test]
    fn test_group_by_class_zero_label() {
        let result = group_by_class(&[1, 0, 2]);
        assert!(matches!(
            result,
            Err(DiscriminantError::InvalidLabel { label: 0 })
        ));
    }

    #[test]
    fn test_group_by_class_empty_class() {
        let result = group_by_class(&[1, 3, 3]);
        assert!(matches!(
            result,
            Err(DiscriminantError::EmptyClass { class: 2 })
        ));
    }

    #[test]
    fn test_group_by_class_no_labels() {
        assert!(matches!(
            group_by_class(&[]),
            Err(DiscriminantError::NoClasses)
        ));
    }

    #[test]
    fn test_class_means() {
        let x = Mat::from_fn(4, 2, |i, j| (i * 2 + j) as f64);
        let groups = vec![vec![0, 2], vec![1, 3]];
        let means = class_means(&x, &groups);

        assert_eq!(means.nrows(), 2);
        assert_eq!(means.ncols(), 2);
        assert!((means[(0, 0)] - 2.0).abs() < 1e-12);
        assert!((means[(1, 0)] - 3.0).abs() < 1e-12);
        assert!((means[(0, 1)] - 4.0).abs() < 1e-12);
        assert!((means[(1, 1)] - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_argmax_ties_first_occurrence() {
        let scores = Mat::from_fn(3, 3, |i, j| match (i, j) {
            (0, _) => 0.5,
            (1, 2) => 0.9,
            (1, _) => 0.1,
            (2, 0) => 0.2,
            (2, _) => 0.7,
            _ => 0.0,
        });

        assert_eq!(argmax_rows(&scores), vec![1, 3, 2]);
    }

    #[test]
    fn test_gaussian_normalizer_standard_normal() {
        let c = gaussian_normalizer(1, 1.0);
        assert!((c - 1.0 / (2.0 * PI).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_gaussian_kernel() {
        assert!((gaussian_kernel(0.0) - 1.0).abs() < 1e-15);
        assert!((gaussian_kernel(2.0) - (-1.0f64).exp()).abs() < 1e-15);
    }

    #[test]
    fn test_accuracy() {
        assert!((accuracy(&[1, 2, 2, 1], &[1, 2, 1, 1]) - 75.0).abs() < 1e-12);
        assert!(accuracy(&[], &[]).is_nan());
    }
}
