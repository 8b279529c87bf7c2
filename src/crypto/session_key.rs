//! Session-scoped symmetric key

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::aead::OsRng;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A 256-bit symmetric key generated once per session
///
/// Never persisted, never serialized; zeroed on drop. Key storage and
/// rotation are explicitly out of scope, the key lives exactly as long
/// as the session that owns it.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SessionKey {
    key: [u8; 32],
}

impl SessionKey {
    /// Generate a fresh random key from the OS entropy source
    pub fn generate() -> Self {
        let mut key = [0u8; 32];
        OsRng.fill_bytes(&mut key);
        Self { key }
    }

    /// Get the key bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.key
    }
}

// Never print key material
impl fmt::Debug for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionKey").finish_non_exhaustive()
    }
}
