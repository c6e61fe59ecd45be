//! Randomness sources for key generation and encryption.
//!
//! Three independent samplers, each owning its own RNG so instances can be
//! seeded for deterministic tests and run in parallel on separate threads.
//! A single instance is stateful and must not be shared between threads
//! without external synchronization.

use crate::polynomial::BinaryPoly;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rand_distr::{Distribution, Normal};

/// Rounded-Gaussian noise sampler reduced into {0, 1}.
///
/// Draws from N(0, sigma), rounds to the nearest integer and reduces the
/// result via `|x| mod 2` before it is used as a ring coefficient. The
/// reduction collapses most of the distribution's shape; it is kept exactly
/// as the reference behavior.
pub struct GaussianSampler {
    sigma: f64,
    dist: Normal<f64>,
    rng: ChaCha20Rng,
}

impl GaussianSampler {
    /// Create a sampler with entropy-derived RNG state.
    #[must_use]
    pub fn new(sigma: f64) -> Self {
        Self::from_rng(sigma, ChaCha20Rng::from_entropy())
    }

    /// Create a deterministic sampler from a seed.
    #[must_use]
    pub fn with_seed(sigma: f64, seed: u64) -> Self {
        Self::from_rng(sigma, ChaCha20Rng::seed_from_u64(seed))
    }

    fn from_rng(sigma: f64, rng: ChaCha20Rng) -> Self {
        let dist = Normal::new(0.0, sigma).expect("sigma must be non-negative and finite");
        Self { sigma, dist, rng }
    }

    /// Standard deviation of the underlying Gaussian.
    #[must_use]
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// One rounded draw from N(0, sigma).
    pub fn sample(&mut self) -> i64 {
        #[allow(clippy::cast_possible_truncation)]
        let rounded = self.dist.sample(&mut self.rng).round() as i64;
        rounded
    }

    /// One draw reduced to a ring coefficient via `|x| mod 2`.
    pub fn sample_bit(&mut self) -> u8 {
        #[allow(clippy::cast_possible_truncation)]
        let bit = (self.sample().unsigned_abs() % 2) as u8;
        bit
    }

    /// A length-`n` noise element.
    pub fn sample_poly(&mut self, n: usize) -> BinaryPoly {
        BinaryPoly::new((0..n).map(|_| self.sample_bit()).collect(), n)
    }
}

/// I.i.d. Bernoulli(0.5) bit sampler.
///
/// Used for the ephemeral value at encryption time and for the uniform
/// halves of the key material.
pub struct UniformBinarySampler {
    rng: ChaCha20Rng,
}

impl UniformBinarySampler {
    /// Create a sampler with entropy-derived RNG state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: ChaCha20Rng::from_entropy(),
        }
    }

    /// Create a deterministic sampler from a seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// One uniform bit.
    pub fn sample_bit(&mut self) -> u8 {
        u8::from(self.rng.gen_bool(0.5))
    }

    /// A length-`n` uniform element.
    pub fn sample_poly(&mut self, n: usize) -> BinaryPoly {
        BinaryPoly::new((0..n).map(|_| self.sample_bit()).collect(), n)
    }
}

impl Default for UniformBinarySampler {
    fn default() -> Self {
        Self::new()
    }
}

/// Exact fixed-Hamming-weight sampler.
///
/// Shuffles the index set [0, n) and marks the first `h` positions, so the
/// output weight is exactly `h`, not merely expected.
pub struct HammingWeightSampler {
    rng: ChaCha20Rng,
}

impl HammingWeightSampler {
    /// Create a sampler with entropy-derived RNG state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: ChaCha20Rng::from_entropy(),
        }
    }

    /// Create a deterministic sampler from a seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// A length-`n` element with exactly `h` coefficients set to 1.
    pub fn sample_poly(&mut self, n: usize, h: usize) -> BinaryPoly {
        assert!(h <= n, "target weight exceeds ring dimension");
        let mut positions: Vec<usize> = (0..n).collect();
        positions.shuffle(&mut self.rng);
        let mut poly = BinaryPoly::zero(n);
        for &pos in &positions[..h] {
            poly.set_coeff(pos, 1);
        }
        poly
    }
}

impl Default for HammingWeightSampler {
    fn default() -> Self {
        Self::new()
    }
}
