//! Forward and inverse kinematics for serial link chains, with poses as
//! conformal-geometric-algebra motors.
//!
//! - [`KinematicChain`] composes one rotor and one translator per joint.
//! - [`PoseObjective`] measures how far a joint vector lands from a goal pose.
//! - [`InverseSolver`] minimizes that objective from a fixed seed.
//!
//! ```rust
//! use cga_kinematics::{ChainConfig, InverseSolver, KinematicChain};
//!
//! let chain = KinematicChain::new(ChainConfig::planar_three_link()).unwrap();
//! let goal = chain.forward(&[0.5, -0.25, 0.75]).unwrap();
//! let solution = InverseSolver::new(&chain).inverse(&goal).unwrap();
//! assert!(solution.residual < 1e-8);
//! ```

pub mod chain;
pub mod chain_config;
pub mod errors;
pub mod minimizer;
pub mod objective;
pub mod request;
pub mod solver;

pub use chain::KinematicChain;
pub use chain_config::ChainConfig;
pub use errors::{KinematicsError, Result};
pub use minimizer::{LbfgsMinimizer, MinimizeOutcome, Minimizer};
pub use objective::PoseObjective;
pub use request::{run_request, Request, Response};
pub use solver::{default_seed, normalize_angle_rad, IkSolution, InverseSolver, SolverConfig};

pub use cga::{Axis, Conformal, Plane, PoseVector, Versor, VersorAlgebra};
