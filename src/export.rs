//! Encrypted snapshot export
//!
//! Orchestrates Ledger -> canonical JSON -> AEAD seal. The export is
//! local-only and simulates handing the sealed bytes to a transport; the
//! caller only ever sees the artifact and its byte length, never the
//! session key.

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::crypto::{self, SessionKey};
use crate::error::ExportError;
use crate::ledger::Ledger;
use crate::models::ExpenseRecord;

/// A sealed ledger snapshot
///
/// Opaque bytes in the codec's `nonce || ciphertext+tag` layout. Only
/// the most recent artifact of a session is retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    bytes: Vec<u8>,
}

impl ExportArtifact {
    /// Byte length of the sealed snapshot, for display
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Sealed snapshots are never empty (nonce and tag are always present)
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The sealed bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Printable form for the simulated transport
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }
}

/// Produces and retains encrypted ledger snapshots
#[derive(Debug, Default)]
pub struct ExportCoordinator {
    last: Option<ExportArtifact>,
}

impl ExportCoordinator {
    /// Create a coordinator with no prior export
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize the ledger and seal it under the session key
    ///
    /// The snapshot encoding is canonical: struct-declaration field
    /// order, ISO-8601 timestamps, integer-cent amounts. On success the
    /// previous artifact, if any, is replaced.
    pub fn export_snapshot(
        &mut self,
        ledger: &Ledger,
        key: &SessionKey,
    ) -> Result<ExportArtifact, ExportError> {
        let plaintext = serde_json::to_vec(ledger.records())?;
        let sealed = crypto::seal(&plaintext, key)?;

        let artifact = ExportArtifact { bytes: sealed };
        log::debug!(
            "sealed export of {} records ({} bytes)",
            ledger.len(),
            artifact.len()
        );
        self.last = Some(artifact.clone());
        Ok(artifact)
    }

    /// The most recent artifact, if an export has happened
    pub fn last_artifact(&self) -> Option<&ExportArtifact> {
        self.last.as_ref()
    }
}

/// Decode an opened snapshot back into expense records
///
/// Counterpart to the coordinator's encoding, for callers that open an
/// artifact with the session key and want the records back.
pub fn decode_snapshot(plaintext: &[u8]) -> Result<Vec<ExpenseRecord>, ExportError> {
    Ok(serde_json::from_slice(plaintext)?)
}
