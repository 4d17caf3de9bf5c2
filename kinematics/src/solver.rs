//! Inverse kinematics by minimizing the pose objective.
//!
//! One local search from a fixed seed, no restarts. Callers that need
//! robustness to local minima run several solves with their own seeds.

use std::f64::consts::PI;

use cga::{Conformal, PoseVector, VersorAlgebra};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::chain::KinematicChain;
use crate::errors::{KinematicsError, Result};
use crate::minimizer::{LbfgsMinimizer, Minimizer};
use crate::objective::PoseObjective;

/// Options for one inverse solve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Gradient tolerance of the minimizer, and the largest residual accepted as a solution
    pub tolerance: f64,
    /// Cost-change tolerance of the minimizer
    pub cost_tolerance: f64,
    pub max_iterations: u64,
    /// L-BFGS history length
    pub memory: usize,
    /// Starting joint vector; defaults to [`default_seed`]
    pub initial_guess: Option<Vec<f64>>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-8,
            cost_tolerance: 1e-10,
            max_iterations: 200,
            memory: 7,
            initial_guess: None,
        }
    }
}

impl SolverConfig {
    /// Reject options the minimizer cannot run with.
    pub fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(KinematicsError::InvalidSolverConfiguration(format!(
                "tolerance is {}, expected a positive finite value",
                self.tolerance
            )));
        }
        if !self.cost_tolerance.is_finite() || self.cost_tolerance < 0.0 {
            return Err(KinematicsError::InvalidSolverConfiguration(format!(
                "cost_tolerance is {}, expected a non-negative finite value",
                self.cost_tolerance
            )));
        }
        if self.memory == 0 {
            return Err(KinematicsError::InvalidSolverConfiguration(
                "memory must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// `[0.1, 0.2, 0.3, ...]`: small, distinct and never all zero, where the
/// objective can be stationary for some chains.
pub fn default_seed(dof: usize) -> Vec<f64> {
    (0..dof).map(|i| 0.1 * (i + 1) as f64).collect()
}

/// Joint vector that reproduces a goal pose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IkSolution {
    /// Joint values wrapped into (-π, π]
    pub joints: Vec<f64>,
    pub residual: f64,
    pub iterations: u64,
}

pub struct InverseSolver<'c, A: VersorAlgebra = Conformal, M: Minimizer = LbfgsMinimizer> {
    chain: &'c KinematicChain<A>,
    config: SolverConfig,
    minimizer: M,
}

impl<'c, A: VersorAlgebra> InverseSolver<'c, A, LbfgsMinimizer> {
    /// Solver with default options.
    pub fn new(chain: &'c KinematicChain<A>) -> Self {
        Self::with_config(chain, SolverConfig::default())
    }

    /// L-BFGS solver using the tolerances and limits in `config`.
    pub fn with_config(chain: &'c KinematicChain<A>, config: SolverConfig) -> Self {
        let minimizer = LbfgsMinimizer::from_config(&config);
        Self::with_minimizer(chain, config, minimizer)
    }
}

impl<'c, A: VersorAlgebra, M: Minimizer> InverseSolver<'c, A, M> {
    /// Solver driven by any minimizer. `config.tolerance` still decides
    /// whether a minimum counts as a solution.
    pub fn with_minimizer(chain: &'c KinematicChain<A>, config: SolverConfig, minimizer: M) -> Self {
        Self {
            chain,
            config,
            minimizer,
        }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn chain(&self) -> &KinematicChain<A> {
        self.chain
    }

    /// The starting joint vector, checked against the chain.
    pub fn initial_guess(&self) -> Result<Vec<f64>> {
        let dof = self.chain.dof();
        match &self.config.initial_guess {
            None => Ok(default_seed(dof)),
            Some(seed) => {
                if seed.len() != dof {
                    return Err(KinematicsError::InvalidSolverConfiguration(format!(
                        "initial guess has {} entries, chain has {} joints",
                        seed.len(),
                        dof
                    )));
                }
                if seed.iter().all(|&q| q == 0.0) {
                    return Err(KinematicsError::InvalidSolverConfiguration(
                        "initial guess must not be all zeros".to_string(),
                    ));
                }
                if seed.iter().any(|q| !q.is_finite()) {
                    return Err(KinematicsError::InvalidSolverConfiguration(
                        "initial guess must be finite".to_string(),
                    ));
                }
                Ok(seed.clone())
            }
        }
    }

    /// Search for joints whose forward pose matches `goal`.
    ///
    /// Succeeds only if the minimizer converged and the residual is below
    /// `config.tolerance`. Otherwise returns
    /// [`KinematicsError::NoSolutionFound`] with no joint vector.
    pub fn inverse(&self, goal: &A::Pose) -> Result<IkSolution> {
        self.config.validate()?;
        let seed = self.initial_guess()?;

        debug!("Solving IK for {} joints from seed {:?}", self.chain.dof(), seed);

        let objective = PoseObjective::new(self.chain, goal);
        let outcome = self.minimizer.minimize(&|q: &[f64]| objective.eval(q), &seed);

        let residual = outcome.final_value;
        if outcome.converged && residual.abs() < self.config.tolerance {
            let joints: Vec<f64> = outcome.solution.iter().map(|&q| normalize_angle_rad(q)).collect();
            info!(
                "IK solved: joints={:?} residual={:e} iterations={}",
                joints, residual, outcome.iterations
            );
            Ok(IkSolution {
                joints,
                residual,
                iterations: outcome.iterations,
            })
        } else {
            warn!(
                "IK failed: converged={} residual={:e} iterations={}",
                outcome.converged, residual, outcome.iterations
            );
            Err(KinematicsError::NoSolutionFound {
                residual,
                converged: outcome.converged,
            })
        }
    }

    /// Like [`inverse`](Self::inverse), also reporting the pose the solution reaches.
    pub fn inverse_pose_vector(&self, goal: &A::Pose) -> Result<(IkSolution, PoseVector)> {
        let solution = self.inverse(goal)?;
        let reached = self.chain.forward(&solution.joints)?;
        let pose = self.chain.algebra().to_pose_vector(&reached);
        Ok((solution, pose))
    }
}

/// Normalize angle to the range (-π, π] radians
pub fn normalize_angle_rad(angle: f64) -> f64 {
    PI - (PI - angle).rem_euclid(2.0 * PI)
}
