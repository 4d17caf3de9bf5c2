//! Interop with nalgebra, available with the `nalgebra-support` feature.
//!
//! Provides conversions between [`Versor`] and `nalgebra::Isometry3<f64>`, and
//! [`IsometryAlgebra`], a second backend for kinematic chains that works on
//! isometries directly.
//!
//! # Feature Flag
//!
//! ```toml
//! [dependencies]
//! cga = { path = "../cga", features = ["nalgebra-support"] }
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use cga::{Plane, Versor};
//! use nalgebra::Isometry3;
//!
//! let motor = Versor::rotor(0.5, Plane::XY);
//! let iso: Isometry3<f64> = (&motor).into();
//! let back: Versor = (&iso).into();
//! assert!(back.same_motion(&motor, 1e-12));
//! ```

use nalgebra::{Isometry3, Matrix3, Translation3, Unit, UnitQuaternion, Vector3};

use crate::algebra::VersorAlgebra;
use crate::pose::{Axis, Plane, PoseVector};
use crate::probe;
use crate::versor::Versor;

/// Convert a motor to an isometry.
///
/// The translation is where the motor takes the origin, the rotation comes
/// from its rotor factor.
impl From<&Versor> for Isometry3<f64> {
    fn from(v: &Versor) -> Self {
        let t = v.translation_part();
        let rotation = UnitQuaternion::from_scaled_axis(Vector3::from(v.rotation_vector()));
        Isometry3::from_parts(Translation3::new(t[0], t[1], t[2]), rotation)
    }
}

impl From<Versor> for Isometry3<f64> {
    fn from(v: Versor) -> Self {
        (&v).into()
    }
}

/// Convert an isometry to a motor (rotation first, then translation).
impl From<&Isometry3<f64>> for Versor {
    fn from(iso: &Isometry3<f64>) -> Self {
        Versor::from_pose_vector(&isometry_pose_vector(iso))
    }
}

impl From<Isometry3<f64>> for Versor {
    fn from(iso: Isometry3<f64>) -> Self {
        (&iso).into()
    }
}

fn isometry_pose_vector(iso: &Isometry3<f64>) -> PoseVector {
    let t = iso.translation.vector;
    let r = iso.rotation.scaled_axis();
    PoseVector::new([t.x, t.y, t.z], [r.x, r.y, r.z])
}

fn plane_axis(plane: Plane) -> Unit<Vector3<f64>> {
    Unit::new_unchecked(Vector3::from(plane.normal()))
}

/// The reference frame carried through an isometry: origin position and the
/// images of the unit axes (as matrix columns).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IsometryProbe {
    pub origin: Vector3<f64>,
    pub axes: Matrix3<f64>,
}

/// Rigid motions as `nalgebra::Isometry3<f64>`.
///
/// The pairing `tr(R_aᵀ R_b) - ½|t_a - t_b|²` matches the conformal frame
/// probe term for term, so objective values agree across backends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IsometryAlgebra;

impl VersorAlgebra for IsometryAlgebra {
    type Pose = Isometry3<f64>;
    type Point = IsometryProbe;

    const REFERENCE_SELF_PRODUCT: f64 = probe::REFERENCE_SELF_PRODUCT;

    fn identity(&self) -> Isometry3<f64> {
        Isometry3::identity()
    }

    fn rotor(&self, angle: f64, plane: Plane) -> Isometry3<f64> {
        Isometry3::from_parts(
            Translation3::identity(),
            UnitQuaternion::from_axis_angle(&plane_axis(plane), angle),
        )
    }

    fn translator(&self, distance: f64, axis: Axis) -> Isometry3<f64> {
        let u = axis.unit();
        Isometry3::translation(u[0] * distance, u[1] * distance, u[2] * distance)
    }

    fn compose(&self, a: &Isometry3<f64>, b: &Isometry3<f64>) -> Isometry3<f64> {
        a * b
    }

    fn invert(&self, pose: &Isometry3<f64>) -> Isometry3<f64> {
        pose.inverse()
    }

    fn apply_to_reference(&self, pose: &Isometry3<f64>) -> IsometryProbe {
        IsometryProbe {
            origin: pose.translation.vector,
            axes: pose.rotation.to_rotation_matrix().into_inner(),
        }
    }

    fn scalar_product(&self, a: &IsometryProbe, b: &IsometryProbe) -> f64 {
        a.axes.dot(&b.axes) - 0.5 * (a.origin - b.origin).norm_squared()
    }

    fn to_pose_vector(&self, pose: &Isometry3<f64>) -> PoseVector {
        isometry_pose_vector(pose)
    }
}
