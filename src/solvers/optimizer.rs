//! Nonlinear conjugate gradient minimizer.

use crate::solvers::objective::Objective;
use crate::solvers::traits::RegressionError;
use crate::utils::{dot, norm};
use faer::Col;

/// Sufficient-decrease constant for the Armijo condition.
const ARMIJO_C1: f64 = 1e-4;

/// Maximum step halvings per line search.
const MAX_BACKTRACKS: usize = 60;

/// Outcome of a minimization run.
#[derive(Debug, Clone)]
pub struct OptimizationResult {
    /// Final weights.
    pub weights: Col<f64>,
    /// Objective value at `weights`.
    pub value: f64,
    /// Euclidean norm of the gradient at `weights`.
    pub gradient_norm: f64,
    /// Number of accepted steps.
    pub iterations: usize,
    /// Whether the gradient norm fell below the tolerance.
    pub converged: bool,
}

/// Polak–Ribière+ conjugate gradient with a backtracking line search.
///
/// Each line search first tries the minimizer of the quadratic interpolating
/// the objective along the search direction, which is exact for quadratic
/// objectives such as [`RidgeObjective`](crate::solvers::RidgeObjective), and
/// then halves the step until the Armijo condition holds.
#[derive(Debug, Clone)]
pub struct ConjugateGradient {
    max_iterations: usize,
    gradient_tolerance: f64,
}

impl Default for ConjugateGradient {
    fn default() -> Self {
        Self {
            max_iterations: 20,
            gradient_tolerance: 1e-8,
        }
    }
}

impl ConjugateGradient {
    /// Create a minimizer with an iteration budget and gradient tolerance.
    pub fn new(max_iterations: usize, gradient_tolerance: f64) -> Self {
        Self {
            max_iterations,
            gradient_tolerance,
        }
    }

    /// Minimize `objective` starting from `initial`.
    pub fn minimize<O: Objective + ?Sized>(
        &self,
        objective: &O,
        initial: &Col<f64>,
    ) -> Result<OptimizationResult, RegressionError> {
        if initial.nrows() != objective.dimension() {
            return Err(RegressionError::FeatureMismatch {
                expected: objective.dimension(),
                got: initial.nrows(),
            });
        }

        let mut w = initial.clone();
        let (mut value, mut gradient) = objective.evaluate(&w)?;
        if !value.is_finite() {
            return Err(RegressionError::NumericalError(
                "objective is not finite at the initial weights".to_string(),
            ));
        }

        let mut direction = Col::from_fn(gradient.nrows(), |i| -gradient[i]);
        let mut step = 1.0;
        let mut iterations = 0;
        let mut converged = false;

        while iterations < self.max_iterations {
            if norm(&gradient) <= self.gradient_tolerance {
                converged = true;
                break;
            }

            let mut slope = dot(&gradient, &direction);
            if slope >= 0.0 {
                // Not a descent direction; restart along the negative gradient.
                direction = Col::from_fn(gradient.nrows(), |i| -gradient[i]);
                slope = -dot(&gradient, &gradient);
            }

            let Some((accepted, w_new, value_new, gradient_new)) =
                self.line_search(objective, &w, value, &direction, slope, step)?
            else {
                log::warn!(
                    "line search failed after {iterations} iterations, objective {value:.6e}"
                );
                break;
            };

            // Polak–Ribière+ update.
            let denom = dot(&gradient, &gradient);
            let beta = if denom > 0.0 {
                let num: f64 = gradient_new
                    .iter()
                    .zip(gradient.iter())
                    .map(|(&gn, &g)| gn * (gn - g))
                    .sum();
                (num / denom).max(0.0)
            } else {
                0.0
            };
            direction = Col::from_fn(gradient_new.nrows(), |i| -gradient_new[i] + beta * direction[i]);

            w = w_new;
            value = value_new;
            gradient = gradient_new;
            step = accepted;
            iterations += 1;
        }

        let gradient_norm = norm(&gradient);
        if !converged && gradient_norm <= self.gradient_tolerance {
            converged = true;
        }
        if !converged {
            log::debug!(
                "conjugate gradient stopped after {iterations} iterations, gradient norm {gradient_norm:.3e}"
            );
        }

        Ok(OptimizationResult {
            weights: w,
            value,
            gradient_norm,
            iterations,
            converged,
        })
    }

    /// Find a step along `direction` that satisfies the Armijo condition.
    ///
    /// Returns the accepted step length with the new point, value and
    /// gradient, or `None` if no acceptable step was found.
    #[allow(clippy::type_complexity)]
    fn line_search<O: Objective + ?Sized>(
        &self,
        objective: &O,
        w: &Col<f64>,
        value: f64,
        direction: &Col<f64>,
        slope: f64,
        trial: f64,
    ) -> Result<Option<(f64, Col<f64>, f64, Col<f64>)>, RegressionError> {
        let along = |t: f64| Col::from_fn(w.nrows(), |i| w[i] + t * direction[i]);

        // Fit q(t) = value + slope·t + c·t² through the trial point.
        let (trial_value, _) = objective.evaluate(&along(trial))?;
        let curvature = (trial_value - value - slope * trial) / (trial * trial);
        let mut t = if curvature.is_finite() && curvature > 0.0 {
            -slope / (2.0 * curvature)
        } else {
            trial
        };

        for _ in 0..MAX_BACKTRACKS {
            let candidate = along(t);
            let (candidate_value, candidate_gradient) = objective.evaluate(&candidate)?;
            if candidate_value.is_finite() && candidate_value <= value + ARMIJO_C1 * t * slope {
                return Ok(Some((t, candidate, candidate_value, candidate_gradient)));
            }
            t *= 0.5;
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// f(w) = Σ a_i (w_i - c_i)²
    struct Bowl {
        scales: Vec<f64>,
        center: Vec<f64>,
    }

    impl Objective for Bowl {
        fn dimension(&self) -> usize {
            self.center.len()
        }

        fn evaluate(&self, w: &Col<f64>) -> Result<(f64, Col<f64>), RegressionError> {
            let n = self.center.len();
            let value = (0..n)
                .map(|i| self.scales[i] * (w[i] - self.center[i]).powi(2))
                .sum::<f64>();
            let gradient = Col::from_fn(n, |i| 2.0 * self.scales[i] * (w[i] - self.center[i]));
            Ok((value, gradient))
        }
    }

    #[test]
    fn test_minimize_bowl() {
        let bowl = Bowl {
            scales: vec![1.0, 10.0, 100.0],
            center: vec![1.0, -2.0, 0.5],
        };
        let initial = Col::zeros(3);

        let result = ConjugateGradient::new(50, 1e-10)
            .minimize(&bowl, &initial)
            .unwrap();

        assert!(result.converged);
        for i in 0..3 {
            assert!((result.weights[i] - bowl.center[i]).abs() < 1e-8);
        }
    }

    #[test]
    fn test_iteration_budget() {
        let bowl = Bowl {
            scales: vec![1.0, 1000.0],
            center: vec![3.0, 3.0],
        };
        let initial = Col::zeros(2);

        let result = ConjugateGradient::new(1, 1e-12)
            .minimize(&bowl, &initial)
            .unwrap();

        assert_eq!(result.iterations, 1);
        let (start, _) = bowl.evaluate(&initial).unwrap();
        assert!(result.value < start);
    }

    #[test]
    fn test_initial_dimension_mismatch() {
        let bowl = Bowl {
            scales: vec![1.0],
            center: vec![0.0],
        };
        let initial = Col::zeros(2);
        assert!(matches!(
            ConjugateGradient::default().minimize(&bowl, &initial),
            Err(RegressionError::FeatureMismatch { expected: 1, got: 2 })
        ));
    }

    #[test]
    fn test_already_at_minimum() {
        let bowl = Bowl {
            scales: vec![1.0, 1.0],
            center: vec![0.0, 0.0],
        };
        let result = ConjugateGradient::default()
            .minimize(&bowl, &Col::zeros(2))
            .unwrap();
        assert!(result.converged);
        assert_eq!(result.iterations, 0);
    }
}
