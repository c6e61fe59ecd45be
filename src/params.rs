//! Scheme parameters.

use serde::{Deserialize, Serialize};

/// Default Gaussian standard deviation.
pub const DEFAULT_SIGMA: f64 = 3.2;

/// Per-instance parameters, immutable after construction.
///
/// Fields are public so tests and benchmarks can build explicit instances
/// (including sigma = 0 ones, where every noise draw is zero and all
/// round trips become exact).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SchemeParams {
    /// Ring dimension `n`.
    pub n: usize,
    /// Security level the instance was derived from.
    pub lambda: usize,
    /// Hamming weight of the secret key.
    pub h: usize,
    /// Gaussian noise standard deviation.
    pub sigma: f64,
}

impl SchemeParams {
    /// Derive parameters from a security level: `h = security / 2`,
    /// `sigma` fixed at [`DEFAULT_SIGMA`].
    #[must_use]
    pub fn new(security: usize, ring_dim: usize) -> Self {
        assert!(ring_dim > 0, "ring dimension must be positive");
        let h = security / 2;
        assert!(h <= ring_dim, "ring dimension too small for security level");
        Self {
            n: ring_dim,
            lambda: security,
            h,
            sigma: DEFAULT_SIGMA,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derivation() {
        let params = SchemeParams::new(128, 1024);
        assert_eq!(params.n, 1024);
        assert_eq!(params.lambda, 128);
        assert_eq!(params.h, 64);
        assert!((params.sigma - 3.2).abs() < f64::EPSILON);
    }

    #[test]
    #[should_panic(expected = "ring dimension too small")]
    fn test_ring_too_small() {
        let _ = SchemeParams::new(128, 32);
    }
}
