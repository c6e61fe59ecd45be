//! Noise threshold check and trusted refresh.
//!
//! Refresh here is re-encryption by a party holding both key sets: the
//! ciphertext is decrypted under the old keys and encrypted again under
//! the new ones, so the plaintext is visible in the clear during the
//! operation. It is deliberately NOT called bootstrapping; it is a
//! capability, not a security primitive.

use crate::{cipher::Ciphertext, error::SchemeError, keys::KeyMaterial, scheme::BinaryCkks};

/// Default noise threshold above which a refresh is recommended.
pub const DEFAULT_REFRESH_THRESHOLD: f64 = 1000.0;

impl BinaryCkks {
    /// True iff the ciphertext's noise estimate strictly exceeds
    /// `threshold`. Pure predicate, no side effects.
    #[must_use]
    pub fn needs_refresh(&self, ciphertext: &Ciphertext, threshold: f64) -> bool {
        ciphertext.noise > threshold
    }

    /// Decrypt under `old_keys`, re-encrypt under `new_keys`. Always
    /// succeeds for matching dimensions regardless of the noise level, and
    /// resets the noise estimate to sigma.
    ///
    /// # Errors
    /// [`SchemeError::DimensionMismatch`] if the ciphertext or either key
    /// set differs from the instance's ring dimension.
    pub fn refresh(
        &mut self,
        ciphertext: &Ciphertext,
        old_keys: &KeyMaterial,
        new_keys: &KeyMaterial,
    ) -> Result<Ciphertext, SchemeError> {
        let plaintext = self.decrypt(ciphertext, old_keys)?;
        self.encrypt(&plaintext, new_keys)
    }
}
