//! Minimizer capability used by the inverse solver.
//!
//! The solver only needs `minimize(objective, initial_guess)`; the method,
//! tolerances and iteration cap belong to the minimizer value itself, so they
//! are chosen by whoever builds the solver.

use argmin::core::{CostFunction, Error, Executor, Gradient, State, TerminationReason};
use argmin::solver::linesearch::MoreThuenteLineSearch;
use argmin::solver::quasinewton::LBFGS;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::solver::SolverConfig;

/// Result of one minimization run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinimizeOutcome {
    pub solution: Vec<f64>,
    /// The method reported convergence (not merely an iteration cap or error)
    pub converged: bool,
    pub final_value: f64,
    pub iterations: u64,
}

/// Local minimization of a scalar objective over a real vector.
pub trait Minimizer {
    fn minimize(&self, objective: &dyn Fn(&[f64]) -> f64, initial_guess: &[f64]) -> MinimizeOutcome;
}

// ============================================================================
// L-BFGS (argmin)
// ============================================================================

/// Quasi-Newton L-BFGS with a More-Thuente line search.
///
/// Gradients come from central finite differences of the objective.
#[derive(Debug, Clone, PartialEq)]
pub struct LbfgsMinimizer {
    /// Stop when the gradient norm falls below this
    pub tolerance_grad: f64,
    /// Stop when the cost changes by less than this between iterations
    pub tolerance_cost: f64,
    pub max_iterations: u64,
    /// Number of correction pairs kept by L-BFGS
    pub memory: usize,
    /// Finite-difference step
    pub gradient_step: f64,
}

impl Default for LbfgsMinimizer {
    fn default() -> Self {
        Self::from_config(&SolverConfig::default())
    }
}

impl LbfgsMinimizer {
    /// Central-difference step. Smaller steps drown the gradient in round-off
    /// before it reaches the 1e-8 tolerance.
    pub const DEFAULT_GRADIENT_STEP: f64 = 1e-5;

    pub fn from_config(config: &SolverConfig) -> Self {
        Self {
            tolerance_grad: config.tolerance,
            tolerance_cost: config.cost_tolerance,
            max_iterations: config.max_iterations,
            memory: config.memory,
            gradient_step: Self::DEFAULT_GRADIENT_STEP,
        }
    }

    pub fn with_gradient_step(mut self, step: f64) -> Self {
        self.gradient_step = step;
        self
    }

    fn run(&self, problem: FiniteDifferenceProblem<'_>, initial_guess: &[f64]) -> Result<MinimizeOutcome, Error> {
        let linesearch = MoreThuenteLineSearch::new();
        let solver = LBFGS::new(linesearch, self.memory)
            .with_tolerance_grad(self.tolerance_grad)?
            .with_tolerance_cost(self.tolerance_cost)?;

        let result = Executor::new(problem, solver)
            .configure(|state| state.param(initial_guess.to_vec()).max_iters(self.max_iterations))
            .run()?;

        let state = result.state();
        let converged = matches!(state.get_termination_reason(), Some(TerminationReason::SolverConverged));
        let solution = state
            .get_best_param()
            .cloned()
            .unwrap_or_else(|| initial_guess.to_vec());

        debug!(
            "L-BFGS stopped after {} iterations: {:?}",
            state.get_iter(),
            state.get_termination_reason()
        );

        Ok(MinimizeOutcome {
            solution,
            converged,
            final_value: state.get_best_cost(),
            iterations: state.get_iter(),
        })
    }
}

impl Minimizer for LbfgsMinimizer {
    fn minimize(&self, objective: &dyn Fn(&[f64]) -> f64, initial_guess: &[f64]) -> MinimizeOutcome {
        let problem = FiniteDifferenceProblem {
            objective,
            step: self.gradient_step,
        };
        match self.run(problem, initial_guess) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("L-BFGS failed: {}", e);
                MinimizeOutcome {
                    solution: initial_guess.to_vec(),
                    converged: false,
                    final_value: objective(initial_guess),
                    iterations: 0,
                }
            }
        }
    }
}

/// Adapts a plain objective to argmin, differentiating it numerically.
struct FiniteDifferenceProblem<'a> {
    objective: &'a dyn Fn(&[f64]) -> f64,
    step: f64,
}

impl CostFunction for FiniteDifferenceProblem<'_> {
    type Param = Vec<f64>;
    type Output = f64;

    fn cost(&self, param: &Self::Param) -> Result<Self::Output, Error> {
        Ok((self.objective)(param))
    }
}

impl Gradient for FiniteDifferenceProblem<'_> {
    type Param = Vec<f64>;
    type Gradient = Vec<f64>;

    fn gradient(&self, param: &Self::Param) -> Result<Self::Gradient, Error> {
        Ok(central_difference(self.objective, param, self.step))
    }
}

/// Central-difference gradient of `f` at `x`.
pub fn central_difference(f: &dyn Fn(&[f64]) -> f64, x: &[f64], step: f64) -> Vec<f64> {
    let mut probe = x.to_vec();
    (0..x.len())
        .map(|i| {
            probe[i] = x[i] + step;
            let forward = f(&probe);
            probe[i] = x[i] - step;
            let backward = f(&probe);
            probe[i] = x[i];
            (forward - backward) / (2.0 * step)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_central_difference() {
        let f = |x: &[f64]| x[0] * x[0] + 3.0 * x[0] * x[1];
        let g = central_difference(&f, &[1.0, 2.0], 1e-5);
        assert!((g[0] - 8.0).abs() < 1e-8);
        assert!((g[1] - 3.0).abs() < 1e-8);
    }

    #[test]
    fn test_minimize_quadratic() {
        let f = |x: &[f64]| (x[0] - 1.0).powi(2) + 10.0 * (x[1] + 0.5).powi(2);
        let outcome = LbfgsMinimizer::default().minimize(&f, &[0.1, 0.2]);

        println!("quadratic: {:?}", outcome);
        assert!(outcome.converged);
        assert!(outcome.final_value < 1e-8);
        assert!((outcome.solution[0] - 1.0).abs() < 1e-4);
        assert!((outcome.solution[1] + 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_minimize_coupled_quadratic() {
        let f = |x: &[f64]| {
            let (a, b, c) = (x[0] - 0.5, x[1] + 1.0, x[2] - 2.0);
            a * a + 2.0 * b * b + 3.0 * c * c + a * b + b * c
        };
        let outcome = LbfgsMinimizer::default().minimize(&f, &[0.1, 0.2, 0.3]);

        assert!(outcome.converged, "{:?}", outcome);
        assert!(outcome.final_value < 1e-8);
        assert!(outcome.iterations > 0);
    }

    #[test]
    fn test_minimum_above_zero_still_converges() {
        // Converging is not the same as reaching zero
        let f = |x: &[f64]| (x[0] - 2.0).powi(2) + 4.0;
        let outcome = LbfgsMinimizer::default().minimize(&f, &[0.1]);
        assert!(outcome.converged);
        assert!((outcome.final_value - 4.0).abs() < 1e-8);
    }
}
