//! Basis blades of the conformal algebra Cl(4,1).
//!
//! A blade is a bitmask over the five basis vectors:
//! - bits 0..=2: the Euclidean directions e1, e2, e3 (square to +1)
//! - bit 3: e4 (squares to +1)
//! - bit 4: e5 (squares to -1)
//!
//! The conformal null vectors are built from the last two:
//! e_inf = e4 + e5 (point at infinity) and e_0 = (e5 - e4) / 2 (origin),
//! so that e_inf · e_0 = -1.
//!
//! The sign table for the geometric product of two blades is generated at
//! compile time.

/// Number of basis vectors.
pub const DIMENSION: usize = 5;

/// Number of basis blades (2^5).
pub const BLADE_COUNT: usize = 1 << DIMENSION;

pub const SCALAR: usize = 0;
pub const E1: usize = 0b00001;
pub const E2: usize = 0b00010;
pub const E3: usize = 0b00100;
pub const E4: usize = 0b01000;
pub const E5: usize = 0b10000;

pub const E12: usize = E1 | E2;
pub const E13: usize = E1 | E3;
pub const E23: usize = E2 | E3;

/// Squares of the basis vectors, indexed by bit position.
const METRIC: [i8; DIMENSION] = [1, 1, 1, 1, -1];

/// Grade of a blade (number of basis vectors in it).
pub const fn grade(blade: usize) -> u32 {
    blade.count_ones()
}

/// Sign picked up by a blade under reversion: negative for grades 2 and 3 (mod 4).
pub const fn reverse_sign(blade: usize) -> f64 {
    match grade(blade) % 4 {
        2 | 3 => -1.0,
        _ => 1.0,
    }
}

/// Sign of the product of two basis blades.
///
/// Counts the transpositions needed to bring the vectors of `b` into
/// canonical order behind those of `a`, then applies the metric of every
/// vector the two blades share.
const fn blade_product_sign(a: usize, b: usize) -> i8 {
    let mut swaps = 0;
    let mut shifted = a >> 1;
    while shifted != 0 {
        swaps += (shifted & b).count_ones();
        shifted >>= 1;
    }

    let mut sign: i8 = if swaps % 2 == 0 { 1 } else { -1 };

    let shared = a & b;
    let mut i = 0;
    while i < DIMENSION {
        if (shared >> i) & 1 == 1 {
            sign *= METRIC[i];
        }
        i += 1;
    }
    sign
}

const fn build_sign_table() -> [[i8; BLADE_COUNT]; BLADE_COUNT] {
    let mut table = [[0i8; BLADE_COUNT]; BLADE_COUNT];
    let mut a = 0;
    while a < BLADE_COUNT {
        let mut b = 0;
        while b < BLADE_COUNT {
            table[a][b] = blade_product_sign(a, b);
            b += 1;
        }
        a += 1;
    }
    table
}

static SIGN_TABLE: [[i8; BLADE_COUNT]; BLADE_COUNT] = build_sign_table();

/// Sign of `blade_a * blade_b`. The resulting blade is always `a ^ b`.
#[inline]
pub fn product_sign(a: usize, b: usize) -> f64 {
    SIGN_TABLE[a][b] as f64
}

/// Metric signature of a single basis vector (bit index 0..5).
#[inline]
pub fn vector_metric(index: usize) -> f64 {
    METRIC[index] as f64
}

/// Human-readable blade name, e.g. `e13` or `1` for the scalar.
pub fn blade_name(blade: usize) -> String {
    if blade == SCALAR {
        return "1".to_string();
    }
    let digits: String = (0..DIMENSION)
        .filter(|i| (blade >> i) & 1 == 1)
        .map(|i| char::from(b'1' + i as u8))
        .collect();
    format!("e{}", digits)
}
