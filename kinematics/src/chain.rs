//! Serial kinematic chain: forward kinematics by versor composition.
//!
//! Each joint contributes a rotor about the configured plane followed by a
//! translator along the configured link axis, both expressed in the frame of
//! the previous link (body-frame chaining):
//!
//! ```text
//! pose_0 = identity
//! pose_k = pose_{k-1} * rotor(q_k) * translator(l_k)
//! ```
//!
//! With `compose(a, b)` applying `b` first, `pose_k` is directly the pose of
//! link `k` in the base frame, so no final inversion is needed.

use cga::{Conformal, VersorAlgebra};

use crate::chain_config::ChainConfig;
use crate::errors::{KinematicsError, Result};

#[derive(Debug, Clone)]
pub struct KinematicChain<A: VersorAlgebra = Conformal> {
    config: ChainConfig,
    algebra: A,
}

impl KinematicChain<Conformal> {
    /// Build a chain over the conformal backend.
    pub fn new(config: ChainConfig) -> Result<Self> {
        Self::with_algebra(config, Conformal)
    }
}

impl<A: VersorAlgebra> KinematicChain<A> {
    /// Build a chain over any backend. Fails if the configuration is invalid.
    pub fn with_algebra(config: ChainConfig, algebra: A) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, algebra })
    }

    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    pub fn algebra(&self) -> &A {
        &self.algebra
    }

    /// Number of joints (one per link).
    pub fn dof(&self) -> usize {
        self.config.link_lengths.len()
    }

    pub fn link_lengths(&self) -> &[f64] {
        &self.config.link_lengths
    }

    /// Sum of the link lengths: no pose farther from the base is reachable.
    pub fn reach(&self) -> f64 {
        self.config.link_lengths.iter().sum()
    }

    pub fn check_dimension(&self, joints: &[f64]) -> Result<()> {
        if joints.len() != self.dof() {
            return Err(KinematicsError::JointDimensionMismatch {
                expected: self.dof(),
                actual: joints.len(),
            });
        }
        Ok(())
    }

    /// End-effector pose for `joints`.
    pub fn forward(&self, joints: &[f64]) -> Result<A::Pose> {
        self.check_dimension(joints)?;
        Ok(self.compose_links(joints, |_| {}))
    }

    /// End-effector pose plus the pose of every link, in joint order.
    ///
    /// The last link pose equals the end-effector pose.
    pub fn forward_with_links(&self, joints: &[f64]) -> Result<(A::Pose, Vec<A::Pose>)> {
        self.check_dimension(joints)?;
        let mut links = Vec::with_capacity(joints.len());
        let pose = self.compose_links(joints, |pose| links.push(pose.clone()));
        Ok((pose, links))
    }

    fn compose_links<F: FnMut(&A::Pose)>(&self, joints: &[f64], mut on_link: F) -> A::Pose {
        let algebra = &self.algebra;
        let plane = self.config.rotation_plane;
        let axis = self.config.link_axis;

        let mut pose = algebra.identity();
        for (&q, &length) in joints.iter().zip(self.config.link_lengths.iter()) {
            let joint = algebra.compose(&pose, &algebra.rotor(q, plane));
            pose = algebra.compose(&joint, &algebra.translator(length, axis));
            on_link(&pose);
        }
        pose
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cga::{Axis, Plane, Versor};
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_forward_zero_position() {
        let chain = KinematicChain::new(ChainConfig::new(vec![1.0, 2.0, 0.5])).unwrap();
        let pose = chain.forward(&[0.0, 0.0, 0.0]).unwrap();

        println!("FK at zero position: {:?}", pose.to_pose_vector());

        // Straight out along x, no rotation
        assert!(pose.approx_eq(&Versor::translator(3.5, Axis::X), 1e-12));
        assert!((chain.reach() - 3.5).abs() < 1e-15);
    }

    #[test]
    fn test_forward_right_angle() {
        let chain = KinematicChain::new(ChainConfig::new(vec![1.0, 1.0])).unwrap();
        let pose = chain.forward(&[FRAC_PI_2, -FRAC_PI_2]).unwrap().to_pose_vector();

        // Up one unit along y, then one unit along x with the frame turned back
        assert!((pose.x - 1.0).abs() < 1e-12);
        assert!((pose.y - 1.0).abs() < 1e-12);
        assert!(pose.rz.abs() < 1e-12);
    }

    #[test]
    fn test_forward_with_links() {
        let chain = KinematicChain::new(ChainConfig::planar_three_link()).unwrap();
        let joints = [0.3, -0.2, 0.9];
        let (pose, links) = chain.forward_with_links(&joints).unwrap();

        assert_eq!(links.len(), 3);
        assert!(links[2].approx_eq(&pose, 1e-15));

        // Each link pose is the forward pose of the prefix chain
        let first = KinematicChain::new(ChainConfig::new(vec![1.0])).unwrap();
        assert!(links[0].approx_eq(&first.forward(&joints[..1]).unwrap(), 1e-12));
        let p0 = links[0].to_pose_vector();
        assert!((p0.x - 0.3f64.cos()).abs() < 1e-12);
        assert!((p0.y - 0.3f64.sin()).abs() < 1e-12);
    }

    #[test]
    fn test_other_planes() {
        let config = ChainConfig::new(vec![1.0, 1.0])
            .with_rotation_plane(Plane::ZX)
            .with_link_axis(Axis::Z);
        let chain = KinematicChain::new(config).unwrap();
        let pose = chain.forward(&[FRAC_PI_2, 0.0]).unwrap().to_pose_vector();

        // Quarter turn about +y swings the z links onto +x
        assert!((pose.x - 2.0).abs() < 1e-12);
        assert!(pose.z.abs() < 1e-12);
        assert!((pose.ry - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_dimension_mismatch() {
        let chain = KinematicChain::new(ChainConfig::planar_three_link()).unwrap();
        let err = chain.forward(&[0.1, 0.2]).unwrap_err();
        assert_eq!(err, KinematicsError::JointDimensionMismatch { expected: 3, actual: 2 });
        assert!(chain.forward_with_links(&[0.0; 4]).is_err());
    }

    #[test]
    fn test_invalid_configuration() {
        let err = KinematicChain::new(ChainConfig::new(vec![1.0, -1.0])).unwrap_err();
        assert!(matches!(err, KinematicsError::InvalidChainConfiguration(_)));
    }
}
