use std::error::Error;
use std::fmt;
use serde::{Deserialize, Serialize};

/// Every failure the chain, objective and solver can report.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum KinematicsError {
    /// Empty link sequence, or a link length that is not a positive finite number.
    InvalidChainConfiguration(String),
    /// Joint vector length differs from the number of links.
    JointDimensionMismatch { expected: usize, actual: usize },
    /// The minimizer did not converge, or converged away from zero residual.
    NoSolutionFound { residual: f64, converged: bool },
    /// Solver options that cannot be used with this chain.
    InvalidSolverConfiguration(String),
    /// I/O or JSON failure while loading configuration.
    Config(String),
}

impl Error for KinematicsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        None
    }
}

impl fmt::Display for KinematicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            KinematicsError::InvalidChainConfiguration(ref msg) => write!(f, "Invalid chain configuration: {}", msg),
            KinematicsError::JointDimensionMismatch { expected, actual } => {
                write!(f, "Joint vector has {} entries, chain has {} links", actual, expected)
            }
            KinematicsError::NoSolutionFound { residual, converged } => {
                if converged {
                    write!(f, "No solution found: converged to residual {:e}", residual)
                } else {
                    write!(f, "No solution found: minimizer did not converge (residual {:e})", residual)
                }
            }
            KinematicsError::InvalidSolverConfiguration(ref msg) => write!(f, "Invalid solver configuration: {}", msg),
            KinematicsError::Config(ref msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl From<std::io::Error> for KinematicsError {
    fn from(e: std::io::Error) -> Self {
        KinematicsError::Config(e.to_string())
    }
}

impl From<serde_json::Error> for KinematicsError {
    fn from(e: serde_json::Error) -> Self {
        KinematicsError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, KinematicsError>;
