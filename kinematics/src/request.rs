//! JSON batch queries: one chain, an optional forward query and an optional
//! inverse query per request.
//!
//! ```json
//! {
//!   "chain": { "link_lengths": [1.0, 1.0, 1.0] },
//!   "solver": { "max_iterations": 200 },
//!   "forward": [1.0, 1.0, 1.0],
//!   "inverse": { "x": -0.8658, "y": 1.8919, "z": 0.0, "rx": 0.0, "ry": 0.0, "rz": 3.0 }
//! }
//! ```

use std::io::Read;

use cga::{PoseVector, Versor};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::chain::KinematicChain;
use crate::chain_config::ChainConfig;
use crate::errors::{KinematicsError, Result};
use crate::solver::{InverseSolver, SolverConfig};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub chain: ChainConfig,
    #[serde(default)]
    pub solver: SolverConfig,
    /// Joint vector to run forward kinematics on
    #[serde(default)]
    pub forward: Option<Vec<f64>>,
    /// Goal pose to solve for
    #[serde(default)]
    pub inverse: Option<PoseVector>,
}

impl Request {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForwardReport {
    pub joints: Vec<f64>,
    pub pose: PoseVector,
    /// Pose of every link in joint order
    pub links: Vec<PoseVector>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum InverseReport {
    Solved {
        joints: Vec<f64>,
        residual: f64,
        iterations: u64,
        /// Pose the solved joints reach
        reached: PoseVector,
    },
    Failed {
        error: KinematicsError,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Response {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forward: Option<ForwardReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inverse: Option<InverseReport>,
}

/// Answer a request.
///
/// An unreachable or unsolved goal is reported inside the response. Invalid
/// chain or solver configuration and mismatched joint vectors are errors.
pub fn run_request(request: &Request) -> Result<Response> {
    let chain = KinematicChain::new(request.chain.clone())?;
    let mut response = Response::default();

    if let Some(joints) = &request.forward {
        let (pose, links) = chain.forward_with_links(joints)?;
        response.forward = Some(ForwardReport {
            joints: joints.clone(),
            pose: pose.to_pose_vector(),
            links: links.iter().map(Versor::to_pose_vector).collect(),
        });
    }

    if let Some(goal) = &request.inverse {
        let solver = InverseSolver::with_config(&chain, request.solver.clone());
        let report = match solver.inverse_pose_vector(&Versor::from_pose_vector(goal)) {
            Ok((solution, reached)) => InverseReport::Solved {
                joints: solution.joints,
                residual: solution.residual,
                iterations: solution.iterations,
                reached,
            },
            Err(error @ KinematicsError::NoSolutionFound { .. }) => InverseReport::Failed { error },
            Err(e) => return Err(e),
        };
        response.inverse = Some(report);
    }

    info!(
        "Answered request: forward={} inverse={}",
        response.forward.is_some(),
        response.inverse.is_some()
    );
    Ok(response)
}
