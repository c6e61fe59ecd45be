//! Ciphertext container.

use crate::polynomial::BinaryPoly;
use serde::{Deserialize, Serialize};

/// (c0, c1) pair plus a noise tracker.
///
/// `noise` is an accounting heuristic, not a bound: addition sums it,
/// multiplication compounds it, refresh resets it. It says nothing exact
/// about the error actually present in the components.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Ciphertext {
    /// First component, `v·pk_b + m + e0` for a fresh encryption.
    pub c0: BinaryPoly,
    /// Second component, `v·pk_a + e1` for a fresh encryption.
    pub c1: BinaryPoly,
    /// Heuristic noise estimate.
    pub noise: f64,
}

impl Ciphertext {
    /// Pair two components with a noise estimate. Both components must
    /// share the ring dimension.
    #[must_use]
    pub fn new(c0: BinaryPoly, c1: BinaryPoly, noise: f64) -> Self {
        assert_eq!(
            c0.dim(),
            c1.dim(),
            "ciphertext components must share the ring dimension"
        );
        Self { c0, c1, noise }
    }

    /// Ring dimension of both components.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.c0.dim()
    }
}
