//! vaultledger - security and export core for a personal expense tracker
//!
//! This library implements the non-UI core of a biometric-gated expense
//! tracker: an in-memory ledger with input validation, AES-256-GCM
//! sealing of exported snapshots, and an advisory security status
//! derived from failed authentication attempts. The UI and the
//! biometric prompt are external callers; authentication outcomes are
//! handed in as plain values.
//!
//! # Architecture
//!
//! - `error`: typed error taxonomy
//! - `models`: core data models (expenses, login failures, money)
//! - `ledger`: the ordered expense collection
//! - `security`: the failed-attempt tracker
//! - `crypto`: session key and AEAD seal/open
//! - `export`: encrypted snapshot coordination
//! - `session`: the per-session context object tying it all together
//!
//! # Example
//!
//! ```rust
//! use vaultledger::Session;
//!
//! let session = Session::new();
//! session.add_expense("Lunch", "Food", "12.50", chrono::Utc::now())?;
//! let exported_bytes = session.export_encrypted()?;
//! assert!(exported_bytes > 0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod crypto;
pub mod error;
pub mod export;
pub mod ledger;
pub mod models;
pub mod security;
pub mod session;

pub use error::{CryptoError, ExportError, ValidationError};
pub use export::{ExportArtifact, ExportCoordinator};
pub use ledger::Ledger;
pub use models::{ExpenseRecord, LoginFailureEvent, Money, SecurityStatus};
pub use security::SecurityTracker;
pub use session::Session;
