//! Common test utilities and data generators.

#![allow(dead_code)]

use faer::{Col, Mat};

/// Deterministic uniform values in [-1, 1) from a 64-bit LCG.
pub struct Lcg {
    state: u64,
}

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_f64(&mut self) -> f64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1);
        ((self.state >> 33) as f64) / (u32::MAX as f64) * 2.0 - 1.0
    }
}

/// Generate simple linear data: y = x * beta + intercept + noise
///
/// The true coefficients are 1, 2, ..., n_features. `x` carries no
/// intercept column.
pub fn generate_linear_data(
    n_samples: usize,
    n_features: usize,
    intercept: f64,
    noise_std: f64,
    seed: u64,
) -> (Mat<f64>, Col<f64>, Col<f64>) {
    let mut rng = Lcg::new(seed);

    let mut x = Mat::zeros(n_samples, n_features);
    let mut y = Col::zeros(n_samples);
    let true_coefficients = Col::from_fn(n_features, |j| (j + 1) as f64);

    for i in 0..n_samples {
        let mut yi = intercept;
        for j in 0..n_features {
            x[(i, j)] = rng.next_f64();
            yi += x[(i, j)] * true_coefficients[j];
        }
        yi += noise_std * rng.next_f64();
        y[i] = yi;
    }

    (x, y, true_coefficients)
}

/// Generate data with collinear features.
pub fn generate_collinear_data(n_samples: usize) -> (Mat<f64>, Col<f64>) {
    let mut x = Mat::zeros(n_samples, 3);
    let mut y = Col::zeros(n_samples);

    for i in 0..n_samples {
        x[(i, 0)] = i as f64;
        x[(i, 1)] = 2.0 * i as f64; // Perfectly collinear with x0
        x[(i, 2)] = (i * i) as f64;
        y[i] = 1.0 + 2.0 * x[(i, 0)] + 3.0 * x[(i, 2)];
    }

    (x, y)
}

/// Generate labelled points scattered uniformly around class centers.
///
/// Class `j + 1` is centered on `centers[j]`; each coordinate is offset by
/// up to `spread[j]` in either direction. Rows are interleaved by class.
pub fn generate_class_blobs(
    centers: &[&[f64]],
    spread: &[f64],
    per_class: usize,
    seed: u64,
) -> (Mat<f64>, Vec<usize>) {
    let mut rng = Lcg::new(seed);
    let k = centers.len();
    let d = centers.first().map_or(0, |c| c.len());

    let mut x = Mat::zeros(k * per_class, d);
    let mut y = Vec::with_capacity(k * per_class);

    for i in 0..per_class {
        for (j, center) in centers.iter().enumerate() {
            let row = i * k + j;
            for a in 0..d {
                x[(row, a)] = center[a] + spread[j] * rng.next_f64();
            }
            y.push(j + 1);
        }
    }

    (x, y)
}

/// Approximate equality check for floating point values.
pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}
