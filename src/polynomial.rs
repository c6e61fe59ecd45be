//! Ring element type for GF(2)[x]/(x^n + 1).

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul};

/// f(x) = coeffs[0] + coeffs[1]·x + ...  (every coefficient 0 or 1)
///
/// The coefficient vector always has length exactly `n`, the ring
/// dimension; arithmetic never grows it. Reduction rule: x^n = 1, because
/// -1 = 1 in GF(2).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryPoly {
    coeffs: Vec<u8>,
}

impl BinaryPoly {
    /// Build an element from raw coefficients. Inputs are reduced mod 2 and
    /// the vector is truncated or zero-padded to exactly `dim`.
    #[must_use]
    pub fn new(coeffs: Vec<u8>, dim: usize) -> Self {
        assert!(dim > 0, "ring dimension must be positive");
        let mut coeffs: Vec<u8> = coeffs.into_iter().map(|c| c % 2).collect();
        coeffs.resize(dim, 0);
        Self { coeffs }
    }

    /// The additive identity of the ring of dimension `dim`.
    #[must_use]
    pub fn zero(dim: usize) -> Self {
        assert!(dim > 0, "ring dimension must be positive");
        Self {
            coeffs: vec![0; dim],
        }
    }

    /// Ring dimension `n`.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.coeffs.len()
    }

    /// Coefficient of x^i, or 0 when `i` is out of range.
    #[must_use]
    pub fn coeff(&self, i: usize) -> u8 {
        self.coeffs.get(i).copied().unwrap_or(0)
    }

    /// Set the coefficient of x^i to `val % 2`. An out-of-range index is a
    /// no-op; the element never grows.
    pub fn set_coeff(&mut self, i: usize, val: u8) {
        if let Some(c) = self.coeffs.get_mut(i) {
            *c = val % 2;
        }
    }

    /// Borrow the full coefficient vector.
    #[must_use]
    pub fn coeffs(&self) -> &[u8] {
        &self.coeffs
    }

    /// Highest index with a nonzero coefficient, `None` for the zero
    /// polynomial.
    #[must_use]
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.iter().rposition(|&c| c != 0)
    }

    /// Number of nonzero coefficients.
    #[must_use]
    pub fn weight(&self) -> usize {
        self.coeffs.iter().filter(|&&c| c != 0).count()
    }
}

impl Add for &BinaryPoly {
    type Output = BinaryPoly;

    /// Coefficientwise XOR. Every element is its own additive inverse.
    fn add(self, rhs: Self) -> BinaryPoly {
        assert_eq!(self.dim(), rhs.dim(), "ring dimension mismatch in add");
        let coeffs = self
            .coeffs
            .iter()
            .zip(&rhs.coeffs)
            .map(|(&a, &b)| a ^ b)
            .collect();
        BinaryPoly { coeffs }
    }
}

impl Add for BinaryPoly {
    type Output = BinaryPoly;
    fn add(self, rhs: BinaryPoly) -> BinaryPoly {
        &self + &rhs
    }
}

impl Add<&BinaryPoly> for BinaryPoly {
    type Output = BinaryPoly;
    fn add(self, rhs: &BinaryPoly) -> BinaryPoly {
        &self + rhs
    }
}

impl Add<BinaryPoly> for &BinaryPoly {
    type Output = BinaryPoly;
    fn add(self, rhs: BinaryPoly) -> BinaryPoly {
        self + &rhs
    }
}

impl Mul for &BinaryPoly {
    type Output = BinaryPoly;

    /// Convolution in the quotient ring: the coefficient at (i + j) mod n
    /// accumulates a[i]·b[j] by XOR. O(n²); the dominant cost of the whole
    /// engine.
    fn mul(self, rhs: Self) -> BinaryPoly {
        assert_eq!(self.dim(), rhs.dim(), "ring dimension mismatch in mul");
        let n = self.dim();
        let mut out = vec![0u8; n];
        for (i, &a) in self.coeffs.iter().enumerate() {
            if a == 0 {
                continue;
            }
            for (j, &b) in rhs.coeffs.iter().enumerate() {
                if b != 0 {
                    out[(i + j) % n] ^= 1;
                }
            }
        }
        BinaryPoly { coeffs: out }
    }
}

impl Mul for BinaryPoly {
    type Output = BinaryPoly;
    fn mul(self, rhs: BinaryPoly) -> BinaryPoly {
        &self * &rhs
    }
}

impl Mul<&BinaryPoly> for BinaryPoly {
    type Output = BinaryPoly;
    fn mul(self, rhs: &BinaryPoly) -> BinaryPoly {
        &self * rhs
    }
}

impl Mul<BinaryPoly> for &BinaryPoly {
    type Output = BinaryPoly;
    fn mul(self, rhs: BinaryPoly) -> BinaryPoly {
        self * &rhs
    }
}

impl fmt::Display for BinaryPoly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.degree().is_none() {
            return write!(f, "0");
        }
        let terms = self
            .coeffs
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c != 0)
            .map(|(i, _)| match i {
                0 => "1".to_string(),
                1 => "x".to_string(),
                _ => format!("x^{i}"),
            });
        write!(f, "{}", terms.format(" + "))
    }
}
