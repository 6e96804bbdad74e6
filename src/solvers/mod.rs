//! Least-squares solvers: closed-form OLS and ridge, and ridge by conjugate
//! gradient on its objective.

mod gradient;
mod objective;
mod ols;
mod optimizer;
mod ridge;
mod traits;

pub use gradient::{FittedGradientRidge, GradientRidgeRegressor, GradientRidgeRegressorBuilder};
pub use objective::{objective_and_gradient, Objective, RidgeObjective};
pub use ols::{FittedOls, OlsRegressor, OlsRegressorBuilder};
pub use optimizer::{ConjugateGradient, OptimizationResult};
pub use ridge::{FittedRidge, RidgeRegressor, RidgeRegressorBuilder};
pub use traits::{FittedRegressor, RegressionError, Regressor};
