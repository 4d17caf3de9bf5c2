//! Plane/axis selectors and the 6-component reporting format for poses.

use serde::{Deserialize, Serialize};

use crate::blade::{E12, E13, E23};

/// Coordinate plane a rotor rotates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Plane {
    /// Rotates e1 toward e2 (about +z).
    #[default]
    XY,
    /// Rotates e2 toward e3 (about +x).
    YZ,
    /// Rotates e3 toward e1 (about +y).
    ZX,
}

impl Plane {
    /// Bivector blade spanning the plane and the sign that orients it so that
    /// `sign * blade` is the rotation plane in the positive sense.
    pub(crate) fn oriented_blade(self) -> (usize, f64) {
        match self {
            Plane::XY => (E12, 1.0),
            Plane::YZ => (E23, 1.0),
            Plane::ZX => (E13, -1.0),
        }
    }

    /// Rotation axis of the plane (right-handed).
    pub fn normal(self) -> [f64; 3] {
        match self {
            Plane::XY => [0.0, 0.0, 1.0],
            Plane::YZ => [1.0, 0.0, 0.0],
            Plane::ZX => [0.0, 1.0, 0.0],
        }
    }
}

/// Coordinate axis a translator moves along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    #[default]
    X,
    Y,
    Z,
}

impl Axis {
    pub fn unit(self) -> [f64; 3] {
        match self {
            Axis::X => [1.0, 0.0, 0.0],
            Axis::Y => [0.0, 1.0, 0.0],
            Axis::Z => [0.0, 0.0, 1.0],
        }
    }
}

/// Position followed by a rotation vector (axis scaled by angle, angle in [0, π]).
///
/// Planar chains leave the unused components at zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct PoseVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub rx: f64,
    pub ry: f64,
    pub rz: f64,
}

impl PoseVector {
    pub fn new(position: [f64; 3], rotation: [f64; 3]) -> Self {
        Self {
            x: position[0],
            y: position[1],
            z: position[2],
            rx: rotation[0],
            ry: rotation[1],
            rz: rotation[2],
        }
    }

    pub fn from_array(values: [f64; 6]) -> Self {
        Self::new(
            [values[0], values[1], values[2]],
            [values[3], values[4], values[5]],
        )
    }

    pub fn as_array(&self) -> [f64; 6] {
        [self.x, self.y, self.z, self.rx, self.ry, self.rz]
    }

    pub fn position(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    pub fn rotation(&self) -> [f64; 3] {
        [self.rx, self.ry, self.rz]
    }

    /// Largest component-wise difference to `other`.
    pub fn max_difference(&self, other: &PoseVector) -> f64 {
        self.as_array()
            .iter()
            .zip(other.as_array().iter())
            .fold(0.0, |acc, (a, b)| acc.max((a - b).abs()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_and_axis_serde_names() {
        assert_eq!(serde_json::to_string(&Plane::ZX).unwrap(), "\"zx\"");
        assert_eq!(serde_json::to_string(&Axis::Y).unwrap(), "\"y\"");
        let plane: Plane = serde_json::from_str("\"yz\"").unwrap();
        assert_eq!(plane, Plane::YZ);
    }

    #[test]
    fn test_plane_normal_is_rotation_axis() {
        // The rotation axis is the cross product of the plane's ordered directions
        assert_eq!(Plane::XY.normal(), [0.0, 0.0, 1.0]);
        assert_eq!(Plane::YZ.normal(), [1.0, 0.0, 0.0]);
        assert_eq!(Plane::ZX.normal(), [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_pose_vector_layout() {
        let pose = PoseVector::from_array([1.0, 2.0, 3.0, 0.1, 0.2, 0.3]);
        assert_eq!(pose.position(), [1.0, 2.0, 3.0]);
        assert_eq!(pose.rotation(), [0.1, 0.2, 0.3]);
        assert_eq!(pose.as_array(), [1.0, 2.0, 3.0, 0.1, 0.2, 0.3]);

        let json = serde_json::to_string(&pose).unwrap();
        let back: PoseVector = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pose);
    }

    #[test]
    fn test_max_difference() {
        let a = PoseVector::new([0.0, 0.0, 0.0], [0.0, 0.0, 1.0]);
        let b = PoseVector::new([0.0, -0.5, 0.0], [0.0, 0.0, 1.25]);
        assert!((a.max_difference(&b) - 0.5).abs() < 1e-15);
    }
}
