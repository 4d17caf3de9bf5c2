//! Pose-distance objective minimized by the inverse solver.

use cga::VersorAlgebra;

use crate::chain::KinematicChain;
use crate::errors::Result;

/// Squared chordal distance between the chain pose at some joint vector and a
/// fixed goal pose.
///
/// Both poses are applied to the algebra's reference probe and compared with
/// `-2 (<a, b> - K)`, where `K` is the probe's self-pairing. The value is zero
/// when the poses coincide and positive otherwise. It is not a geodesic
/// distance and does not satisfy the triangle inequality.
pub struct PoseObjective<'a, A: VersorAlgebra> {
    chain: &'a KinematicChain<A>,
    goal_point: A::Point,
}

impl<'a, A: VersorAlgebra> PoseObjective<'a, A> {
    pub fn new(chain: &'a KinematicChain<A>, goal: &A::Pose) -> Self {
        let goal_point = chain.algebra().apply_to_reference(goal);
        Self { chain, goal_point }
    }

    pub fn chain(&self) -> &KinematicChain<A> {
        self.chain
    }

    /// Objective value at `joints`.
    pub fn distance(&self, joints: &[f64]) -> Result<f64> {
        let pose = self.chain.forward(joints)?;
        Ok(self.distance_to(&pose))
    }

    /// Infallible form for the minimizer loop, used once
    /// [`KinematicChain::check_dimension`] has passed. A joint vector of the
    /// wrong length evaluates to infinity.
    pub fn eval(&self, joints: &[f64]) -> f64 {
        match self.chain.forward(joints) {
            Ok(pose) => self.distance_to(&pose),
            Err(_) => f64::INFINITY,
        }
    }

    fn distance_to(&self, pose: &A::Pose) -> f64 {
        let algebra = self.chain.algebra();
        let point = algebra.apply_to_reference(pose);
        let pairing = algebra.scalar_product(&point, &self.goal_point);
        // Clamp round-off below zero
        (-2.0 * (pairing - A::REFERENCE_SELF_PRODUCT)).max(0.0)
    }
}
