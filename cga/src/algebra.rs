//! The rigid-motion capability consumed by kinematic chains.
//!
//! A backend supplies the pose type, the probe ("point") type it conjugates,
//! and the handful of operations a chain and its objective need. Chains are
//! generic over the backend, so the numeric representation is chosen when a
//! chain is built rather than through any global switch.

use std::fmt::Debug;

use crate::pose::{Axis, Plane, PoseVector};
use crate::probe::{self, FrameProbe};
use crate::versor::Versor;

/// Rigid-motion group operations plus a pose comparison kernel.
///
/// All methods are pure. `compose(a, b)` applies `b` first, then `a`.
pub trait VersorAlgebra: Clone + Debug {
    type Pose: Clone + Debug;
    type Point: Clone + Debug;

    /// `scalar_product(p, p)` for any probe image `p`.
    const REFERENCE_SELF_PRODUCT: f64;

    fn identity(&self) -> Self::Pose;

    fn rotor(&self, angle: f64, plane: Plane) -> Self::Pose;

    fn translator(&self, distance: f64, axis: Axis) -> Self::Pose;

    fn compose(&self, a: &Self::Pose, b: &Self::Pose) -> Self::Pose;

    fn invert(&self, pose: &Self::Pose) -> Self::Pose;

    /// Conjugates the reference probe by `pose`.
    fn apply_to_reference(&self, pose: &Self::Pose) -> Self::Point;

    /// Symmetric bilinear pairing of two probe images.
    fn scalar_product(&self, a: &Self::Point, b: &Self::Point) -> f64;

    fn to_pose_vector(&self, pose: &Self::Pose) -> PoseVector;
}

/// Motors of the conformal model Cl(4,1).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Conformal;

impl VersorAlgebra for Conformal {
    type Pose = Versor;
    type Point = FrameProbe;

    const REFERENCE_SELF_PRODUCT: f64 = probe::REFERENCE_SELF_PRODUCT;

    fn identity(&self) -> Versor {
        Versor::identity()
    }

    fn rotor(&self, angle: f64, plane: Plane) -> Versor {
        Versor::rotor(angle, plane)
    }

    fn translator(&self, distance: f64, axis: Axis) -> Versor {
        Versor::translator(distance, axis)
    }

    fn compose(&self, a: &Versor, b: &Versor) -> Versor {
        a.compose(b)
    }

    fn invert(&self, pose: &Versor) -> Versor {
        pose.inverse()
    }

    fn apply_to_reference(&self, pose: &Versor) -> FrameProbe {
        FrameProbe::transformed(pose)
    }

    fn scalar_product(&self, a: &FrameProbe, b: &FrameProbe) -> f64 {
        a.scalar_product(b)
    }

    fn to_pose_vector(&self, pose: &Versor) -> PoseVector {
        pose.to_pose_vector()
    }
}
