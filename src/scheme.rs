//! Scheme state, key generation, encryption and decryption.

use crate::{
    cipher::Ciphertext,
    error::SchemeError,
    keys::KeyMaterial,
    params::SchemeParams,
    polynomial::BinaryPoly,
    sampler::{GaussianSampler, HammingWeightSampler, UniformBinarySampler},
};

/// Main state object: parameters plus the three owned samplers.
///
/// Operations that draw randomness (`key_gen`, `encrypt`, `refresh`) take
/// `&mut self` because they advance sampler RNG state; everything else is
/// read-only. Independent instances with distinct seeds may run fully in
/// parallel.
pub struct BinaryCkks {
    pub(crate) params: SchemeParams,
    pub(crate) gaussian: GaussianSampler,
    pub(crate) uniform: UniformBinarySampler,
    pub(crate) hamming: HammingWeightSampler,
}

impl BinaryCkks {
    /// Build an instance with parameters derived from `security` and
    /// entropy-seeded samplers.
    #[must_use]
    pub fn new(security: usize, ring_dim: usize) -> Self {
        Self::with_params(SchemeParams::new(security, ring_dim))
    }

    /// Build an instance from explicit parameters, entropy-seeded.
    #[must_use]
    pub fn with_params(params: SchemeParams) -> Self {
        Self {
            gaussian: GaussianSampler::new(params.sigma),
            uniform: UniformBinarySampler::new(),
            hamming: HammingWeightSampler::new(),
            params,
        }
    }

    /// Build a fully deterministic instance; the three samplers are seeded
    /// from `seed`, `seed + 1` and `seed + 2`.
    #[must_use]
    pub fn with_seed(params: SchemeParams, seed: u64) -> Self {
        Self {
            gaussian: GaussianSampler::with_seed(params.sigma, seed),
            uniform: UniformBinarySampler::with_seed(seed.wrapping_add(1)),
            hamming: HammingWeightSampler::with_seed(seed.wrapping_add(2)),
            params,
        }
    }

    /// Instance parameters.
    #[must_use]
    pub fn params(&self) -> &SchemeParams {
        &self.params
    }

    pub(crate) fn check_dim(&self, dim: usize) -> Result<(), SchemeError> {
        if dim == self.params.n {
            Ok(())
        } else {
            Err(SchemeError::DimensionMismatch {
                left: dim,
                right: self.params.n,
            })
        }
    }

    /// Generate a fresh key set.
    ///
    /// secret has exact Hamming weight `h`; `pk_b = pk_a·secret + e` and
    /// `evk_b = evk_a·secret + e0 + secret²` (in GF(2), -a·s = a·s, so the
    /// usual minus signs vanish). Cannot fail; advances all three samplers.
    pub fn key_gen(&mut self) -> KeyMaterial {
        let n = self.params.n;

        let secret = self.hamming.sample_poly(n, self.params.h);

        let pk_a = self.uniform.sample_poly(n);
        let e = self.gaussian.sample_poly(n);
        let pk_b = &(&pk_a * &secret) + &e;

        let evk_a = self.uniform.sample_poly(n);
        let e0 = self.gaussian.sample_poly(n);
        let evk_b = &(&(&evk_a * &secret) + &e0) + &(&secret * &secret);

        KeyMaterial {
            secret,
            pk_a,
            pk_b,
            evk_a,
            evk_b,
        }
    }

    /// Encrypt a ring element under the public key.
    ///
    /// `c0 = v·pk_b + m + e0`, `c1 = v·pk_a + e1` for a uniform ephemeral
    /// `v` and fresh Gaussian bits e0, e1. The noise estimate starts at
    /// sigma regardless of the actual error drawn.
    ///
    /// # Errors
    /// [`SchemeError::DimensionMismatch`] if the plaintext or key dimension
    /// differs from the instance's `n`.
    pub fn encrypt(
        &mut self,
        plaintext: &BinaryPoly,
        keys: &KeyMaterial,
    ) -> Result<Ciphertext, SchemeError> {
        self.check_dim(plaintext.dim())?;
        self.check_dim(keys.dim())?;
        let n = self.params.n;

        let v = self.uniform.sample_poly(n);
        let e0 = self.gaussian.sample_poly(n);
        let e1 = self.gaussian.sample_poly(n);

        let c0 = &(&(&v * &keys.pk_b) + plaintext) + &e0;
        let c1 = &(&v * &keys.pk_a) + &e1;

        Ok(Ciphertext::new(c0, c1, self.params.sigma))
    }

    /// Decrypt: `c0 + c1·secret`.
    ///
    /// There is no integrity signal. A wrong key, or noise that has grown
    /// past what the construction tolerates, yields a structurally valid
    /// but semantically wrong element indistinguishable from a correct
    /// one. Callers needing integrity must layer their own check on top.
    ///
    /// # Errors
    /// [`SchemeError::DimensionMismatch`] if the ciphertext or key
    /// dimension differs from the instance's `n`.
    pub fn decrypt(
        &self,
        ciphertext: &Ciphertext,
        keys: &KeyMaterial,
    ) -> Result<BinaryPoly, SchemeError> {
        self.check_dim(ciphertext.dim())?;
        self.check_dim(keys.dim())?;
        Ok(&ciphertext.c0 + &(&ciphertext.c1 * &keys.secret))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noiseless(n: usize, h: usize, seed: u64) -> BinaryCkks {
        let params = SchemeParams {
            n,
            lambda: 2 * h,
            h,
            sigma: 0.0,
        };
        BinaryCkks::with_seed(params, seed)
    }

    #[test]
    fn test_key_gen_shapes() {
        let mut scheme = BinaryCkks::with_seed(SchemeParams::new(64, 128), 11);
        let keys = scheme.key_gen();
        assert_eq!(keys.dim(), 128);
        assert_eq!(keys.secret.weight(), 32);
        for poly in [&keys.pk_a, &keys.pk_b, &keys.evk_a, &keys.evk_b] {
            assert_eq!(poly.dim(), 128);
        }
    }

    #[test]
    fn test_key_relations_without_noise() {
        let mut scheme = noiseless(32, 4, 5);
        let keys = scheme.key_gen();
        assert_eq!(keys.pk_b, &keys.pk_a * &keys.secret);
        let s_sq = &keys.secret * &keys.secret;
        assert_eq!(keys.evk_b, &(&keys.evk_a * &keys.secret) + &s_sq);
    }

    #[test]
    fn test_encrypt_decrypt_round_trip_without_noise() {
        let mut scheme = noiseless(16, 2, 9);
        let keys = scheme.key_gen();
        let m = BinaryPoly::new(vec![1, 0, 1, 1, 0, 0, 1, 0, 1, 1, 1, 0, 0, 1, 0, 1], 16);
        let ct = scheme.encrypt(&m, &keys).unwrap();
        assert_eq!(scheme.decrypt(&ct, &keys).unwrap(), m);
    }

    #[test]
    fn test_fresh_noise_estimate_is_sigma() {
        let mut scheme = BinaryCkks::with_seed(SchemeParams::new(8, 32), 3);
        let keys = scheme.key_gen();
        let m = BinaryPoly::zero(32);
        let ct = scheme.encrypt(&m, &keys).unwrap();
        assert!((ct.noise - scheme.params().sigma).abs() < f64::EPSILON);
    }

    #[test]
    fn test_end_to_end_xor_scenario() {
        // n = 8, h = 2, noiseless instance: encrypt, add, decrypt, decode
        let mut scheme = noiseless(8, 2, 42);
        let keys = scheme.key_gen();

        let data1 = [1, 0, 1, 1, 0, 1, 0, 0];
        let data2 = [0, 1, 1, 0, 1, 0, 1, 1];
        let m1 = scheme.encode(&data1);
        let m2 = scheme.encode(&data2);

        let ct1 = scheme.encrypt(&m1, &keys).unwrap();
        let ct2 = scheme.encrypt(&m2, &keys).unwrap();
        let ct_sum = scheme.add(&ct1, &ct2).unwrap();

        let decoded = scheme.decode(&scheme.decrypt(&ct_sum, &keys).unwrap(), 8);
        assert_eq!(decoded, vec![1, 1, 0, 1, 1, 1, 1, 1]);
    }

    #[test]
    fn test_encrypt_rejects_foreign_dimension() {
        let mut scheme = BinaryCkks::with_seed(SchemeParams::new(8, 16), 1);
        let keys = scheme.key_gen();
        let wrong = BinaryPoly::zero(8);
        assert_eq!(
            scheme.encrypt(&wrong, &keys).unwrap_err(),
            SchemeError::DimensionMismatch { left: 8, right: 16 }
        );
    }

    #[test]
    fn test_decrypt_rejects_foreign_dimension() {
        let mut small = BinaryCkks::with_seed(SchemeParams::new(8, 16), 1);
        let mut large = BinaryCkks::with_seed(SchemeParams::new(8, 32), 2);
        let small_keys = small.key_gen();
        let large_keys = large.key_gen();
        let ct = large
            .encrypt(&BinaryPoly::zero(32), &large_keys)
            .unwrap();
        assert!(matches!(
            small.decrypt(&ct, &small_keys),
            Err(SchemeError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_wrong_key_decrypts_silently() {
        // No integrity signal: a wrong key still yields a well-formed element.
        let mut scheme = noiseless(16, 2, 21);
        let keys = scheme.key_gen();
        let other_keys = scheme.key_gen();
        let m = BinaryPoly::new(vec![1; 16], 16);
        let ct = scheme.encrypt(&m, &keys).unwrap();
        let out = scheme.decrypt(&ct, &other_keys).unwrap();
        assert_eq!(out.dim(), 16);
    }

    #[test]
    fn test_seeded_schemes_reproduce() {
        let params = SchemeParams::new(16, 64);
        let mut a = BinaryCkks::with_seed(params, 77);
        let mut b = BinaryCkks::with_seed(params, 77);
        let ka = a.key_gen();
        let kb = b.key_gen();
        assert_eq!(ka.secret, kb.secret);
        assert_eq!(ka.pk_b, kb.pk_b);
        assert_eq!(ka.evk_b, kb.evk_b);
    }
}
