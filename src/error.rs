//! Custom error types for vaultledger
//!
//! This module defines the error taxonomy for the crate using thiserror.
//! Errors are split by layer: input validation, cryptographic operations,
//! and export orchestration. Nothing here is fatal to the process; every
//! failure is surfaced to the caller as a typed result.

use thiserror::Error;

/// Errors produced while validating user input for the ledger
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The amount string did not parse to a strictly positive value
    #[error("invalid amount: {0:?}")]
    InvalidAmount(String),
}

/// Errors produced by the AEAD codec
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// The underlying cipher failed to seal (library fault, extremely rare)
    #[error("seal operation failed")]
    SealFailure,

    /// The authentication tag did not verify: wrong key or tampered data
    #[error("authentication failed: wrong key or corrupted data")]
    AuthenticationFailure,

    /// The sealed bytes are too short to contain a nonce and tag
    #[error("malformed sealed input: {len} bytes, need at least {min}")]
    MalformedInput { len: usize, min: usize },
}

/// Errors produced while exporting an encrypted ledger snapshot
#[derive(Error, Debug)]
pub enum ExportError {
    /// The record snapshot could not be encoded or decoded. Encoding is
    /// defensive (ledger invariants should make it unreachable); decoding
    /// sees opened bytes that may not hold a valid record list
    #[error("snapshot encode/decode failed: {0}")]
    SerializationFailure(#[from] serde_json::Error),

    /// The sealed artifact could not be produced
    #[error("snapshot encryption failed: {0}")]
    EncryptionFailure(#[from] CryptoError),
}

/// Result type alias for crypto operations
pub type CryptoResult<T> = Result<T, CryptoError>;
