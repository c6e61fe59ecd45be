//! Homomorphic addition and multiplication.

use crate::{
    cipher::Ciphertext, error::SchemeError, keys::KeyMaterial, polynomial::BinaryPoly,
    scheme::BinaryCkks,
};

/// Degree-2 tensor product of two ciphertexts:
/// (c0, c1)·(d0', d1') = (c0·c0', c0·c1' + c1·c0', c1·c1').
fn tensor(a: &Ciphertext, b: &Ciphertext) -> (BinaryPoly, BinaryPoly, BinaryPoly) {
    let d0 = &a.c0 * &b.c0;
    let d1 = &(&a.c0 * &b.c1) + &(&a.c1 * &b.c0);
    let d2 = &a.c1 * &b.c1;
    (d0, d1, d2)
}

/// Key-switch the degree-2 term back to a two-component ciphertext using
/// the evaluation key: (d0 + d2·evk_b, d1 + d2·evk_a).
fn relinearize(
    d0: &BinaryPoly,
    d1: &BinaryPoly,
    d2: &BinaryPoly,
    keys: &KeyMaterial,
) -> (BinaryPoly, BinaryPoly) {
    let c0 = d0 + &(d2 * &keys.evk_b);
    let c1 = d1 + &(d2 * &keys.evk_a);
    (c0, c1)
}

impl BinaryCkks {
    /// Componentwise ciphertext addition; the noise estimates sum.
    ///
    /// # Errors
    /// [`SchemeError::DimensionMismatch`] when the operands disagree on
    /// the ring dimension, rejected before any arithmetic.
    pub fn add(&self, ct1: &Ciphertext, ct2: &Ciphertext) -> Result<Ciphertext, SchemeError> {
        if ct1.dim() != ct2.dim() {
            return Err(SchemeError::DimensionMismatch {
                left: ct1.dim(),
                right: ct2.dim(),
            });
        }
        Ok(Ciphertext::new(
            &ct1.c0 + &ct2.c0,
            &ct1.c1 + &ct2.c1,
            ct1.noise + ct2.noise,
        ))
    }

    /// Ciphertext multiplication: tensor product followed by
    /// relinearization under the evaluation key, keeping the result at two
    /// components. Noise estimate becomes `noise1·noise2 + sigma`, a
    /// heuristic for the multiplicative growth, not a bound.
    ///
    /// # Errors
    /// [`SchemeError::DimensionMismatch`] when the operands or key
    /// material disagree on the ring dimension.
    pub fn multiply(
        &self,
        ct1: &Ciphertext,
        ct2: &Ciphertext,
        keys: &KeyMaterial,
    ) -> Result<Ciphertext, SchemeError> {
        if ct1.dim() != ct2.dim() {
            return Err(SchemeError::DimensionMismatch {
                left: ct1.dim(),
                right: ct2.dim(),
            });
        }
        if ct1.dim() != keys.dim() {
            return Err(SchemeError::DimensionMismatch {
                left: ct1.dim(),
                right: keys.dim(),
            });
        }

        let (d0, d1, d2) = tensor(ct1, ct2);
        let (c0, c1) = relinearize(&d0, &d1, &d2, keys);
        let noise = ct1.noise * ct2.noise + self.params.sigma;
        Ok(Ciphertext::new(c0, c1, noise))
    }
}
