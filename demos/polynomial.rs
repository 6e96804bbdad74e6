//! # Polynomial Regression on a Single Feature
//!
//! Expands one feature into [1, x, x², ..., x^p] and fits ridge regression
//! on the expansion, for every degree p from 0 to 6.
//!
//! ## Key Features
//! - Column 0 of the expansion is the bias column
//! - Training error never increases with the degree
//! - Test error shows where extra degrees start to overfit
//! - A small λ tames the high-degree fits
//!
//! Run with: `cargo run --example polynomial`

use anofox_learn::features::polynomial_features;
use anofox_learn::selection::{sweep_polynomial_degrees, DegreeSweep};
use anofox_learn::solvers::{FittedRegressor, Regressor, RidgeRegressor};
use faer::Col;

/// Highest degree evaluated; the sweep covers 0..=MAX_DEGREE.
const MAX_DEGREE: usize = 6;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("=== Polynomial Regression ===\n");

    expansion_example();
    degree_sweep();
}

/// Noisy samples of a smooth curve on [-1, 1].
fn generate(n: usize, phase: f64) -> (Col<f64>, Col<f64>) {
    let x = Col::from_fn(n, |i| ((i as f64 + phase) * 0.618).sin());
    let y = Col::from_fn(n, |i| {
        let noise = ((i as f64 + phase) * 2.71).cos() * 0.15;
        1.0 + 0.8 * x[i] - 1.2 * x[i].powi(2) + 0.4 * x[i].powi(3) + noise
    });
    (x, y)
}

fn expansion_example() {
    println!("--- Feature Expansion ---\n");

    let x = Col::from_fn(2, |i| (i + 2) as f64);
    let xd = polynomial_features(&x, 2);

    println!("x = [2, 3], degree 2:");
    for i in 0..xd.nrows() {
        let row: Vec<f64> = (0..xd.ncols()).map(|j| xd[(i, j)]).collect();
        println!("  {:?}", row);
    }
    println!();
}

fn print_sweep(sweep: &DegreeSweep) {
    println!("lambda = {}\n", sweep.lambda);
    println!("{:<8} {:>14} {:>14}", "Degree", "Train MSE", "Test MSE");
    println!("{}", "-".repeat(38));
    for (i, degree) in sweep.degrees.iter().enumerate() {
        println!(
            "{:<8} {:>14.6} {:>14.6}",
            degree, sweep.train_mse[i], sweep.test_mse[i]
        );
    }
    if let Some(best) = sweep.best_degree() {
        println!("\nBest degree: {best}");
    }
    println!();
}

fn degree_sweep() {
    println!("--- Degree Sweep ---\n");

    let (x_train, y_train) = generate(40, 0.0);
    let (x_test, y_test) = generate(200, 300.0);

    for lambda in [0.0, 0.1] {
        let sweep =
            sweep_polynomial_degrees(&x_train, &y_train, &x_test, &y_test, MAX_DEGREE, lambda)
                .expect("sweep should succeed");
        print_sweep(&sweep);
    }

    let fitted = RidgeRegressor::builder()
        .lambda(0.0)
        .build()
        .fit(&polynomial_features(&x_train, 3), &y_train)
        .expect("fit should succeed");
    println!("Cubic weights (true: 1.0, 0.8, -1.2, 0.4):");
    for (j, w) in fitted.coefficients().iter().enumerate() {
        println!("  w{j} = {w:.4}");
    }
    println!();
}
