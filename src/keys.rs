//! Key material container.

use crate::polynomial::BinaryPoly;
use serde::{Deserialize, Serialize};

/// Secret, public and evaluation keys of one scheme instance.
///
/// `pk_b = pk_a·secret + e` and `evk_b = evk_a·secret + e0 + secret²` for
/// fresh noise e, e0. The secret has exact Hamming weight `h`. Anyone
/// holding `secret` can decrypt; treat the whole struct as an opaque
/// capability owned by the caller.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct KeyMaterial {
    /// Secret key, exact Hamming weight `h`.
    pub secret: BinaryPoly,
    /// Uniform half of the public key.
    pub pk_a: BinaryPoly,
    /// `pk_a·secret + e`.
    pub pk_b: BinaryPoly,
    /// Uniform half of the evaluation (relinearization) key.
    pub evk_a: BinaryPoly,
    /// `evk_a·secret + e0 + secret²`.
    pub evk_b: BinaryPoly,
}

impl KeyMaterial {
    /// Ring dimension shared by all five components.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.secret.dim()
    }
}
