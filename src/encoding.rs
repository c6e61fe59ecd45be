//! Bit-vector encode / decode adapters.
//!
//! Direct coefficient packing, lossy and bit-only: no scaling factor and
//! no embedding transform. It exists so the homomorphic operations have
//! meaningful plaintext semantics to act on.

use crate::{polynomial::BinaryPoly, scheme::BinaryCkks};

impl BinaryCkks {
    /// Pack `data[i] mod 2` into coefficient `i`; remaining coefficients
    /// are zero and input past the ring dimension is ignored.
    #[must_use]
    pub fn encode(&self, data: &[u64]) -> BinaryPoly {
        let mut poly = BinaryPoly::zero(self.params.n);
        for (i, &value) in data.iter().take(self.params.n).enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            poly.set_coeff(i, (value % 2) as u8);
        }
        poly
    }

    /// Read the first `expected` coefficients verbatim. Positions past the
    /// ring dimension read as 0.
    #[must_use]
    pub fn decode(&self, poly: &BinaryPoly, expected: usize) -> Vec<u64> {
        (0..expected).map(|i| u64::from(poly.coeff(i))).collect()
    }
}
