//! AES-256-GCM seal/open for ledger snapshots
//!
//! Authenticated encryption with a fresh random nonce per seal. The
//! sealed layout is `nonce || ciphertext+tag`, so `open` is
//! self-contained given only the key.

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::{
    aead::{Aead, KeyInit, OsRng},
    Aes256Gcm, Nonce,
};

use crate::error::{CryptoError, CryptoResult};

use super::SessionKey;

/// Size of the AES-GCM nonce in bytes (96 bits)
pub const NONCE_SIZE: usize = 12;

/// Size of the GCM authentication tag in bytes
pub const TAG_SIZE: usize = 16;

/// Minimum length of any well-formed sealed blob
pub const MIN_SEALED_LEN: usize = NONCE_SIZE + TAG_SIZE;

/// Seal plaintext under the session key
///
/// Generates a random nonce for each call and prepends it to the
/// authenticated ciphertext. Fails only on an underlying cipher fault;
/// never returns partial output.
pub fn seal(plaintext: &[u8], key: &SessionKey) -> CryptoResult<Vec<u8>> {
    let cipher = Aes256Gcm::new(key.as_bytes().into());

    let mut nonce_bytes = [0u8; NONCE_SIZE];
    OsRng.fill_bytes(&mut nonce_bytes);
    let nonce = Nonce::from_slice(&nonce_bytes);

    let ciphertext = cipher
        .encrypt(nonce, plaintext)
        .map_err(|_| CryptoError::SealFailure)?;

    let mut sealed = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
    sealed.extend_from_slice(&nonce_bytes);
    sealed.extend_from_slice(&ciphertext);
    Ok(sealed)
}

/// Open a sealed blob, verifying the authentication tag
///
/// Returns `MalformedInput` when the blob is too short to hold a nonce
/// and tag, and `AuthenticationFailure` when the tag does not verify
/// (tampered data or wrong key). No plaintext is ever released on
/// failure.
pub fn open(sealed: &[u8], key: &SessionKey) -> CryptoResult<Vec<u8>> {
    if sealed.len() < MIN_SEALED_LEN {
        return Err(CryptoError::MalformedInput {
            len: sealed.len(),
            min: MIN_SEALED_LEN,
        });
    }

    let (nonce_bytes, ciphertext) = sealed.split_at(NONCE_SIZE);
    let cipher = Aes256Gcm::new(key.as_bytes().into());

    cipher
        .decrypt(Nonce::from_slice(nonce_bytes), ciphertext)
        .map_err(|_| CryptoError::AuthenticationFailure)
}
