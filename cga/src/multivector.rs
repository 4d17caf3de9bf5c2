//! Dense multivector storage for Cl(4,1).
//!
//! Only what the versor layer needs: construction of scalars and vectors,
//! the geometric product, reversion and the inner product of two vectors.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::blade::{self, BLADE_COUNT, DIMENSION, E1, E2, E3, E4, E5, SCALAR};

/// A multivector with one coefficient per basis blade (indexed by blade mask).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Multivector {
    coeffs: [f64; BLADE_COUNT],
}

impl Multivector {
    pub const fn zero() -> Self {
        Self {
            coeffs: [0.0; BLADE_COUNT],
        }
    }

    pub const fn scalar(value: f64) -> Self {
        let mut coeffs = [0.0; BLADE_COUNT];
        coeffs[SCALAR] = value;
        Self { coeffs }
    }

    /// A single basis blade scaled by `value`.
    pub fn blade(blade: usize, value: f64) -> Self {
        let mut mv = Self::zero();
        mv.coeffs[blade] = value;
        mv
    }

    /// Euclidean vector x·e1 + y·e2 + z·e3.
    pub fn vector(v: [f64; 3]) -> Self {
        let mut mv = Self::zero();
        mv.coeffs[E1] = v[0];
        mv.coeffs[E2] = v[1];
        mv.coeffs[E3] = v[2];
        mv
    }

    /// The point at infinity, e_inf = e4 + e5.
    pub fn e_inf() -> Self {
        let mut mv = Self::zero();
        mv.coeffs[E4] = 1.0;
        mv.coeffs[E5] = 1.0;
        mv
    }

    /// The conformal origin, e_0 = (e5 - e4) / 2.
    pub fn e_origin() -> Self {
        let mut mv = Self::zero();
        mv.coeffs[E4] = -0.5;
        mv.coeffs[E5] = 0.5;
        mv
    }

    /// Conformal embedding of a Euclidean point: x + ½|x|² e_inf + e_0.
    pub fn point(x: [f64; 3]) -> Self {
        let half_sq = 0.5 * (x[0] * x[0] + x[1] * x[1] + x[2] * x[2]);
        Self::vector(x) + Self::e_inf() * half_sq + Self::e_origin()
    }

    pub fn from_coeffs(coeffs: [f64; BLADE_COUNT]) -> Self {
        Self { coeffs }
    }

    pub fn coeffs(&self) -> &[f64; BLADE_COUNT] {
        &self.coeffs
    }

    pub fn coeff(&self, blade: usize) -> f64 {
        self.coeffs[blade]
    }

    pub fn scalar_part(&self) -> f64 {
        self.coeffs[SCALAR]
    }

    /// The e1, e2, e3 coefficients.
    pub fn euclidean_part(&self) -> [f64; 3] {
        [self.coeffs[E1], self.coeffs[E2], self.coeffs[E3]]
    }

    /// Geometric product.
    pub fn geometric(&self, rhs: &Multivector) -> Multivector {
        let mut out = [0.0; BLADE_COUNT];
        for (a, &ca) in self.coeffs.iter().enumerate() {
            if ca == 0.0 {
                continue;
            }
            for (b, &cb) in rhs.coeffs.iter().enumerate() {
                if cb == 0.0 {
                    continue;
                }
                out[a ^ b] += blade::product_sign(a, b) * ca * cb;
            }
        }
        Multivector { coeffs: out }
    }

    /// Reversion: flips the order of the vectors in every blade.
    pub fn reverse(&self) -> Multivector {
        let mut out = self.coeffs;
        for (i, c) in out.iter_mut().enumerate() {
            *c *= blade::reverse_sign(i);
        }
        Multivector { coeffs: out }
    }

    /// Inner product of the grade-1 parts of two multivectors.
    ///
    /// Equal to the scalar part of ½(ab + ba) when both are vectors.
    pub fn vector_inner(&self, rhs: &Multivector) -> f64 {
        (0..DIMENSION)
            .map(|i| {
                let b = 1 << i;
                blade::vector_metric(i) * self.coeffs[b] * rhs.coeffs[b]
            })
            .sum()
    }

    pub fn approx_eq(&self, other: &Multivector, eps: f64) -> bool {
        self.coeffs
            .iter()
            .zip(other.coeffs.iter())
            .all(|(a, b)| (a - b).abs() <= eps)
    }
}

impl Default for Multivector {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for Multivector {
    type Output = Multivector;
    fn add(mut self, rhs: Multivector) -> Multivector {
        for (a, b) in self.coeffs.iter_mut().zip(rhs.coeffs.iter()) {
            *a += b;
        }
        self
    }
}

impl Sub for Multivector {
    type Output = Multivector;
    fn sub(mut self, rhs: Multivector) -> Multivector {
        for (a, b) in self.coeffs.iter_mut().zip(rhs.coeffs.iter()) {
            *a -= b;
        }
        self
    }
}

impl Mul<f64> for Multivector {
    type Output = Multivector;
    fn mul(mut self, scalar: f64) -> Multivector {
        for c in self.coeffs.iter_mut() {
            *c *= scalar;
        }
        self
    }
}

impl Mul for Multivector {
    type Output = Multivector;
    fn mul(self, rhs: Multivector) -> Multivector {
        self.geometric(&rhs)
    }
}

impl Neg for Multivector {
    type Output = Multivector;
    fn neg(self) -> Multivector {
        self * -1.0
    }
}

impl fmt::Display for Multivector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (i, &c) in self.coeffs.iter().enumerate() {
            if c.abs() < 1e-12 {
                continue;
            }
            if first {
                if c < 0.0 {
                    write!(f, "-")?;
                }
            } else if c < 0.0 {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }
            if i == SCALAR {
                write!(f, "{:.6}", c.abs())?;
            } else {
                write!(f, "{:.6}·{}", c.abs(), blade::blade_name(i))?;
            }
            first = false;
        }
        if first {
            write!(f, "0")?;
        }
        Ok(())
    }
}
