//! Cryptographic functions for vaultledger
//!
//! AES-256-GCM authenticated encryption for exported ledger snapshots,
//! keyed by a random session-scoped key.

pub mod sealed;
pub mod session_key;

pub use sealed::{open, seal, MIN_SEALED_LEN, NONCE_SIZE, TAG_SIZE};
pub use session_key::SessionKey;
