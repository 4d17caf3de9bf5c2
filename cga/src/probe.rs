//! Frame probe: the reference point a pose is applied to for comparison.
//!
//! A bare conformal origin only sees the translation of a motion, so the probe
//! carries the three Euclidean unit directions alongside it. Conjugating the
//! probe by a pose yields the moved origin plus the rotated axes, and the
//! pairing below measures both.

use crate::multivector::Multivector;
use crate::versor::Versor;

/// Self-pairing of any probe image. The origin is null and contributes 0,
/// each unit direction contributes 1.
pub const REFERENCE_SELF_PRODUCT: f64 = 3.0;

/// The reference frame (origin and unit axes) carried through a pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameProbe {
    origin: Multivector,
    axes: [Multivector; 3],
}

impl FrameProbe {
    /// The untransformed probe: `e_0` together with `e1`, `e2`, `e3`.
    pub fn reference() -> Self {
        Self {
            origin: Multivector::e_origin(),
            axes: [
                Multivector::vector([1.0, 0.0, 0.0]),
                Multivector::vector([0.0, 1.0, 0.0]),
                Multivector::vector([0.0, 0.0, 1.0]),
            ],
        }
    }

    /// The reference probe conjugated by `pose`.
    pub fn transformed(pose: &Versor) -> Self {
        let reference = Self::reference();
        Self {
            origin: pose.sandwich(&reference.origin),
            axes: reference.axes.map(|axis| pose.sandwich(&axis)),
        }
    }

    pub fn origin(&self) -> &Multivector {
        &self.origin
    }

    pub fn axes(&self) -> &[Multivector; 3] {
        &self.axes
    }

    /// Sum of the inner products of corresponding conformal vectors.
    ///
    /// `-2 (a·b - 3)` equals `|R_a - R_b|²` (Frobenius) plus `|t_a - t_b|²`.
    pub fn scalar_product(&self, other: &FrameProbe) -> f64 {
        self.origin.vector_inner(&other.origin)
            + self
                .axes
                .iter()
                .zip(other.axes.iter())
                .map(|(a, b)| a.vector_inner(b))
                .sum::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::{Axis, Plane};

    #[test]
    fn test_self_product() {
        let pose = Versor::translation([3.0, -1.0, 2.0]) * Versor::rotor(0.9, Plane::ZX);
        let probe = FrameProbe::transformed(&pose);
        assert!((probe.scalar_product(&probe) - REFERENCE_SELF_PRODUCT).abs() < 1e-12);
        let reference = FrameProbe::reference();
        assert!((reference.scalar_product(&reference) - REFERENCE_SELF_PRODUCT).abs() < 1e-15);
    }

    #[test]
    fn test_pairing_measures_translation() {
        let a = FrameProbe::transformed(&Versor::translator(1.0, Axis::X));
        let b = FrameProbe::transformed(&Versor::translator(-1.0, Axis::X));
        let distance = -2.0 * (a.scalar_product(&b) - REFERENCE_SELF_PRODUCT);
        assert!((distance - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_pairing_measures_rotation() {
        // |R(θ) - I|² over a planar rotation is 4 (1 - cos θ)
        let theta = 0.8;
        let a = FrameProbe::transformed(&Versor::rotor(theta, Plane::XY));
        let b = FrameProbe::reference();
        let distance = -2.0 * (a.scalar_product(&b) - REFERENCE_SELF_PRODUCT);
        assert!((distance - 4.0 * (1.0 - theta.cos())).abs() < 1e-12);
    }

    #[test]
    fn test_scalar_product_is_symmetric() {
        let a = FrameProbe::transformed(&(Versor::rotor(0.3, Plane::YZ) * Versor::translator(2.0, Axis::Y)));
        let b = FrameProbe::transformed(&Versor::rotor(-1.1, Plane::XY));
        assert!((a.scalar_product(&b) - b.scalar_product(&a)).abs() < 1e-15);
    }
}
