//! Rigid motions in the conformal model of 3-D space, Cl(4,1).
//!
//! This crate carries only the motor sub-algebra a kinematic chain needs:
//! rotors, translators, their composition and inverse, conjugation of a
//! reference probe, and a pose comparison kernel. It is not a general
//! multivector engine.
//!
//! ```rust
//! use cga::{Axis, Plane, Versor};
//!
//! // Rotate a quarter turn about +z, then step one unit along x.
//! let pose = Versor::translator(1.0, Axis::X).compose(&Versor::rotor(std::f64::consts::FRAC_PI_2, Plane::XY));
//! let v = pose.to_pose_vector();
//! assert!((v.x - 1.0).abs() < 1e-12);
//! assert!((v.rz - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
//! ```

pub mod algebra;
pub mod blade;
pub mod multivector;
pub mod pose;
pub mod probe;
pub mod versor;

#[cfg(feature = "nalgebra-support")]
pub mod transforms;

pub use algebra::{Conformal, VersorAlgebra};
pub use multivector::Multivector;
pub use pose::{Axis, Plane, PoseVector};
pub use probe::{FrameProbe, REFERENCE_SELF_PRODUCT};
pub use versor::Versor;

#[cfg(feature = "nalgebra-support")]
pub use transforms::{IsometryAlgebra, IsometryProbe};
