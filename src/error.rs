//! Scheme-level error type.

use thiserror::Error;

/// Errors surfaced by the public scheme operations.
///
/// Dimension mismatches are rejected before any ring arithmetic runs.
/// Decrypting with a wrong key or past the tolerable noise level is NOT an
/// error: it silently yields a structurally valid but wrong element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SchemeError {
    /// Two operands (or an operand and the scheme instance) disagree on the
    /// ring dimension `n`.
    #[error("ring dimension mismatch: {left} != {right}")]
    DimensionMismatch {
        /// Dimension of the first operand.
        left: usize,
        /// Dimension of the second operand (or of the scheme instance).
        right: usize,
    },
}
