//! # Gaussian Discriminant Analysis (LDA and QDA)
//!
//! Both classifiers model each class as a multivariate normal and predict
//! the class with the highest likelihood score.
//!
//! ## When to Use
//! - LDA: classes differ in location but share a common spread
//! - QDA: classes differ in spread or orientation as well
//!
//! ## Key Features
//! - Labels are 1-indexed; the number of classes is the largest label
//! - LDA scores: exp(-0.5 (x-μ)' Σ⁻¹ (x-μ)) with one shared Σ
//! - QDA scores add the Gaussian constant 1/((2π)^(d/2) sqrt(det Σ_j))
//! - Ties resolve to the lowest class label
//!
//! Run with: `cargo run --example discriminant`
//! Set `RUST_LOG=debug` to see fit summaries.

use anofox_learn::core::CovarianceNormalization;
use anofox_learn::discriminant::{
    Classifier, FittedClassifier, FittedLda, LdaClassifier, QdaClassifier,
};
use faer::Mat;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("=== Gaussian Discriminant Analysis ===\n");

    two_class_scenario();
    compare_lda_qda();
    normalization_choice();
}

/// Three classes in the plane. Class 3 is much wider than the others.
fn generate(n_per_class: usize, offset: f64) -> (Mat<f64>, Vec<usize>) {
    let centers = [(0.0, 0.0), (4.0, 0.5), (1.5, 4.0)];
    let spreads = [0.8, 0.8, 2.5];
    let n = 3 * n_per_class;

    let x = Mat::from_fn(n, 2, |i, j| {
        let class = i % 3;
        let t = (i / 3) as f64 + offset;
        let (cx, cy) = centers[class];
        let wobble = if j == 0 {
            (t * 1.7).sin() * (t * 0.31).cos()
        } else {
            (t * 2.3).cos() * (t * 0.53).sin()
        };
        let center = if j == 0 { cx } else { cy };
        center + spreads[class] * wobble
    });
    let y = (0..n).map(|i| i % 3 + 1).collect();

    (x, y)
}

/// Hand-set parameters: means [0,0] and [5,5] with identity covariance.
fn two_class_scenario() {
    println!("--- Two Classes, Known Parameters ---\n");

    let means = Mat::from_fn(2, 2, |_, j| 5.0 * j as f64);
    let cov = Mat::from_fn(2, 2, |i, j| if i == j { 1.0 } else { 0.0 });
    let lda = FittedLda::from_parameters(means, cov).expect("valid parameters");

    let x_test = Mat::from_fn(2, 2, |i, j| match (i, j) {
        (0, _) => 0.1,
        (1, 0) => 4.9,
        _ => 5.1,
    });

    let result = lda.classify(&x_test, &[1, 2]).expect("classify should succeed");
    println!("Test points: [0.1, 0.1], [4.9, 5.1]");
    println!("Predictions: {:?}", result.predictions);
    println!("Accuracy:    {:.1}%", result.accuracy);
    println!();
}

/// Fit both models on the same data and compare test accuracy.
fn compare_lda_qda() {
    println!("--- LDA vs QDA ---\n");

    let (x_train, y_train) = generate(60, 0.0);
    let (x_test, y_test) = generate(40, 1000.0);

    let lda = LdaClassifier::default().fit(&x_train, &y_train).expect("LDA fit should succeed");
    let qda = QdaClassifier::default().fit(&x_train, &y_train).expect("QDA fit should succeed");

    println!("{:<8} {:>12} {:>12}", "Class", "mean x1", "mean x2");
    println!("{}", "-".repeat(34));
    for j in 0..lda.n_classes() {
        println!(
            "{:<8} {:>12.4} {:>12.4}",
            j + 1,
            lda.means()[(0, j)],
            lda.means()[(1, j)]
        );
    }
    println!();

    let lda_result = lda.classify(&x_test, &y_test).expect("classify should succeed");
    let qda_result = qda.classify(&x_test, &y_test).expect("classify should succeed");

    println!("{:<8} {:>12}", "Model", "Accuracy");
    println!("{}", "-".repeat(21));
    println!("{:<8} {:>11.2}%", "LDA", lda_result.accuracy);
    println!("{:<8} {:>11.2}%", "QDA", qda_result.accuracy);

    println!("\nQDA per-class variance of x1:");
    for (j, cov) in qda.covariances().iter().enumerate() {
        println!("  class {}: {:.4}", j + 1, cov[(0, 0)]);
    }

    // Predictions without ground truth: pass zeros and ignore the accuracy.
    let unlabeled = qda
        .classify(&x_test, &vec![0; x_test.nrows()])
        .expect("classify should succeed");
    println!("\nFirst 9 QDA predictions: {:?}", &unlabeled.predictions[..9]);
    println!();
}

/// Covariance divisor N-1 (default) vs N.
fn normalization_choice() {
    println!("--- Covariance Normalization ---\n");

    let (x_train, y_train) = generate(5, 0.0);

    for normalization in [
        CovarianceNormalization::Unbiased,
        CovarianceNormalization::MaximumLikelihood,
    ] {
        let fitted = LdaClassifier::builder()
            .covariance(normalization)
            .build()
            .fit(&x_train, &y_train)
            .expect("fit should succeed");
        println!(
            "{:<20} cov[0,0] = {:.4}",
            format!("{normalization:?}"),
            fitted.covariance()[(0, 0)]
        );
    }
    println!();
}
