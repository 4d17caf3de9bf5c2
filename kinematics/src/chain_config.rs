//! Chain configuration
//!
//! A serial chain is described by its ordered link lengths, the plane every
//! joint rotates in, and the axis each link extends along in its own frame.
//! Configurations load from JSON so batch runs can describe chains in files.

use std::path::Path;

use cga::{Axis, Plane};
use serde::{Deserialize, Serialize};

use crate::errors::{KinematicsError, Result};

/// Static description of a serial link chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainConfig {
    /// Link lengths in joint order; each must be positive and finite
    pub link_lengths: Vec<f64>,

    /// Plane every joint rotor rotates in
    #[serde(default)]
    pub rotation_plane: Plane,

    /// Direction each link extends along, in the frame of its joint
    #[serde(default)]
    pub link_axis: Axis,
}

impl ChainConfig {
    pub fn new(link_lengths: Vec<f64>) -> Self {
        Self {
            link_lengths,
            rotation_plane: Plane::default(),
            link_axis: Axis::default(),
        }
    }

    /// Three unit links rotating in the XY plane.
    pub fn planar_three_link() -> Self {
        Self::new(vec![1.0, 1.0, 1.0])
    }

    pub fn with_rotation_plane(mut self, plane: Plane) -> Self {
        self.rotation_plane = plane;
        self
    }

    pub fn with_link_axis(mut self, axis: Axis) -> Self {
        self.link_axis = axis;
        self
    }

    /// Check the link sequence is non-empty and every length is a positive finite number.
    pub fn validate(&self) -> Result<()> {
        if self.link_lengths.is_empty() {
            return Err(KinematicsError::InvalidChainConfiguration(
                "chain needs at least one link".to_string(),
            ));
        }
        for (i, &length) in self.link_lengths.iter().enumerate() {
            if !length.is_finite() || length <= 0.0 {
                return Err(KinematicsError::InvalidChainConfiguration(format!(
                    "link {} has length {}, expected a positive finite value",
                    i, length
                )));
            }
        }
        Ok(())
    }

    /// Parse and validate a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: ChainConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self::planar_three_link()
    }
}
