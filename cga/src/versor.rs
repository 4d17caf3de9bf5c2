//! Rigid-motion versors (motors) of the conformal model.
//!
//! Every versor built here is a product of rotors and translators and is
//! therefore a unit motor: `V * reverse(V) == 1`.
//!
//! # Composition
//!
//! `a.compose(&b)` is the geometric product `a * b`: the motion `b` is
//! applied first, then `a`. Chaining body-frame transforms therefore reads
//! left to right, `base.compose(&joint).compose(&link)`.

use std::fmt;
use std::ops::Mul;

use crate::blade::{E12, E13, E23, SCALAR};
use crate::multivector::Multivector;
use crate::pose::{Axis, Plane, PoseVector};

/// Below this the rotation angle of a rotor is treated as zero.
const ANGLE_EPSILON: f64 = 1e-12;

/// A rigid motion (rotation and/or translation) encoded as an even multivector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Versor {
    mv: Multivector,
}

impl Versor {
    /// The null motion.
    pub const fn identity() -> Self {
        Self {
            mv: Multivector::scalar(1.0),
        }
    }

    fn from_multivector(mv: Multivector) -> Self {
        Self { mv }
    }

    /// Pure rotation by `angle` radians in `plane`.
    ///
    /// Built as `cos(θ/2) - sin(θ/2) B` with `B` the positively oriented unit
    /// bivector of the plane.
    pub fn rotor(angle: f64, plane: Plane) -> Self {
        let (blade, orientation) = plane.oriented_blade();
        let half = 0.5 * angle;
        Self::from_multivector(
            Multivector::scalar(half.cos()) + Multivector::blade(blade, -orientation * half.sin()),
        )
    }

    /// Pure translation by `distance` along `axis`.
    pub fn translator(distance: f64, axis: Axis) -> Self {
        let unit = axis.unit();
        Self::translation([unit[0] * distance, unit[1] * distance, unit[2] * distance])
    }

    /// Pure translation by the Euclidean offset `t`: `1 - ½ t e_inf`.
    pub fn translation(t: [f64; 3]) -> Self {
        let offset = Multivector::vector(t) * Multivector::e_inf();
        Self::from_multivector(Multivector::scalar(1.0) - offset * 0.5)
    }

    /// Rotation about the axis of `r` by the angle `|r|`.
    pub fn from_rotation_vector(r: [f64; 3]) -> Self {
        let angle = (r[0] * r[0] + r[1] * r[1] + r[2] * r[2]).sqrt();
        if angle < ANGLE_EPSILON {
            return Self::identity();
        }
        let n = [r[0] / angle, r[1] / angle, r[2] / angle];
        let (s, c) = (0.5 * angle).sin_cos();

        let mut coeffs = [0.0; crate::blade::BLADE_COUNT];
        coeffs[SCALAR] = c;
        coeffs[E23] = -s * n[0];
        coeffs[E13] = s * n[1];
        coeffs[E12] = -s * n[2];
        Self::from_multivector(Multivector::from_coeffs(coeffs))
    }

    /// The motion that rotates by `pose.rotation()` and then translates to
    /// `pose.position()`.
    pub fn from_pose_vector(pose: &PoseVector) -> Self {
        Self::translation(pose.position()).compose(&Self::from_rotation_vector(pose.rotation()))
    }

    /// Group product: applies `other` first, then `self`.
    pub fn compose(&self, other: &Versor) -> Versor {
        Self::from_multivector(self.mv.geometric(&other.mv))
    }

    /// `V * reverse(V)`, scalar for every versor.
    pub fn norm_squared(&self) -> f64 {
        self.mv.geometric(&self.mv.reverse()).scalar_part()
    }

    /// Two-sided inverse: `reverse(V) / (V * reverse(V))`.
    pub fn inverse(&self) -> Versor {
        Self::from_multivector(self.mv.reverse() * (1.0 / self.norm_squared()))
    }

    /// Conjugates a conformal object: `V X reverse(V)`.
    pub fn sandwich(&self, x: &Multivector) -> Multivector {
        self.mv.geometric(x).geometric(&self.mv.reverse())
    }

    pub fn as_multivector(&self) -> &Multivector {
        &self.mv
    }

    /// Where the motion takes the origin.
    pub fn translation_part(&self) -> [f64; 3] {
        let image = self.sandwich(&Multivector::e_origin());
        let weight = -image.vector_inner(&Multivector::e_inf());
        let p = image.euclidean_part();
        [p[0] / weight, p[1] / weight, p[2] / weight]
    }

    /// The rotor factor (scalar and Euclidean bivector coefficients).
    pub fn rotation_part(&self) -> Versor {
        let mut coeffs = [0.0; crate::blade::BLADE_COUNT];
        for blade in [SCALAR, E12, E13, E23] {
            coeffs[blade] = self.mv.coeff(blade);
        }
        Self::from_multivector(Multivector::from_coeffs(coeffs))
    }

    /// Rotation as axis times angle, angle in [0, π].
    pub fn rotation_vector(&self) -> [f64; 3] {
        let mut s = self.mv.coeff(SCALAR);
        let mut b12 = self.mv.coeff(E12);
        let mut b13 = self.mv.coeff(E13);
        let mut b23 = self.mv.coeff(E23);
        // R and -R are the same rotation
        if s < 0.0 {
            s = -s;
            b12 = -b12;
            b13 = -b13;
            b23 = -b23;
        }

        let sin_half = (b12 * b12 + b13 * b13 + b23 * b23).sqrt();
        if sin_half < ANGLE_EPSILON {
            return [0.0; 3];
        }
        let angle = 2.0 * sin_half.atan2(s);
        let scale = angle / sin_half;
        [-b23 * scale, b13 * scale, -b12 * scale]
    }

    pub fn to_pose_vector(&self) -> PoseVector {
        PoseVector::new(self.translation_part(), self.rotation_vector())
    }

    /// Coefficient-wise comparison.
    pub fn approx_eq(&self, other: &Versor, eps: f64) -> bool {
        self.mv.approx_eq(&other.mv, eps)
    }

    /// Like [`approx_eq`](Self::approx_eq) but treats `V` and `-V` as equal,
    /// since both encode the same motion.
    pub fn same_motion(&self, other: &Versor, eps: f64) -> bool {
        self.mv.approx_eq(&other.mv, eps) || self.mv.approx_eq(&(-other.mv), eps)
    }
}

impl Default for Versor {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for Versor {
    type Output = Versor;
    fn mul(self, rhs: Versor) -> Versor {
        self.compose(&rhs)
    }
}

impl fmt::Display for Versor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.mv, f)
    }
}
