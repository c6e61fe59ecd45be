//! Binary CKKS (research prototype)
//!
//! A Ring-LWE style homomorphic encryption engine working entirely in the
//! binary quotient ring GF(2)[x]/(x^n + 1): key generation with a fixed
//! Hamming-weight secret, encryption of bit vectors, homomorphic addition
//! and multiplication with relinearization, heuristic noise tracking and a
//! trusted refresh (decrypt, then re-encrypt under fresh key material).

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, missing_docs)]

pub mod algebra;
pub mod cipher;
pub mod encoding;
pub mod error;
pub mod keys;
pub mod params;
pub mod polynomial;
pub mod refresher;
pub mod sampler;
pub mod scheme;

pub use cipher::Ciphertext;
pub use error::SchemeError;
pub use keys::KeyMaterial;
pub use params::{SchemeParams, DEFAULT_SIGMA};
pub use polynomial::BinaryPoly;
pub use refresher::DEFAULT_REFRESH_THRESHOLD;
pub use sampler::{GaussianSampler, HammingWeightSampler, UniformBinarySampler};
pub use scheme::BinaryCkks;
