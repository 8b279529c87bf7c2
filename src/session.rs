//! Session context
//!
//! One `Session` owns everything a single interactive user session
//! mutates: the ledger, the failure tracker, the export coordinator and
//! the session key. All of it sits behind one mutex, so calls arriving
//! from an authentication callback on another thread serialize with UI
//! driven calls and `status()` always reflects every completed
//! `record_failed_login`.
//!
//! Tests construct independent sessions; nothing here is global.

use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};

use crate::crypto::{self, SessionKey};
use crate::error::{ExportError, ValidationError};
use crate::export::{self, ExportArtifact, ExportCoordinator};
use crate::ledger::Ledger;
use crate::models::{ExpenseRecord, LoginFailureEvent, Money, SecurityStatus};
use crate::security::SecurityTracker;

struct SessionInner {
    ledger: Ledger,
    tracker: SecurityTracker,
    exporter: ExportCoordinator,
    key: SessionKey,
}

/// Mutable state for one user session
///
/// `Send + Sync`; safe to share behind an `Arc` with an off-thread
/// biometric callback.
pub struct Session {
    inner: Mutex<SessionInner>,
}

impl Session {
    /// Create a fresh session with an empty ledger, no recorded
    /// failures, and a newly generated encryption key
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(SessionInner {
                ledger: Ledger::new(),
                tracker: SecurityTracker::new(),
                exporter: ExportCoordinator::new(),
                key: SessionKey::generate(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionInner> {
        match self.inner.lock() {
            Ok(guard) => guard,
            // State stays consistent under poison: every mutation is a
            // single append or replace
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Validate and record a new expense
    pub fn add_expense(
        &self,
        title: &str,
        category: &str,
        amount_text: &str,
        date: DateTime<Utc>,
    ) -> Result<ExpenseRecord, ValidationError> {
        self.lock().ledger.add(title, category, amount_text, date)
    }

    /// Sum of all recorded expenses
    pub fn total_spent(&self) -> Money {
        self.lock().ledger.total_spent()
    }

    /// Category list for filter pickers
    pub fn distinct_categories(&self) -> Vec<String> {
        self.lock().ledger.distinct_categories()
    }

    /// Expenses sorted by date descending, optionally filtered
    pub fn filtered_and_sorted(&self, category: Option<&str>) -> Vec<ExpenseRecord> {
        self.lock()
            .ledger
            .filtered_and_sorted(category)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Number of recorded expenses
    pub fn expense_count(&self) -> usize {
        self.lock().ledger.len()
    }

    /// Remove all expenses
    pub fn clear_expenses(&self) {
        self.lock().ledger.clear();
    }

    /// Record one failed authentication outcome
    ///
    /// Callable from the biometric completion callback; events are
    /// recorded in the order the calls acquire the session lock.
    pub fn record_failed_login(&self, reason: impl Into<String>) -> LoginFailureEvent {
        self.lock().tracker.record_failure(reason)
    }

    /// Current advisory security status
    pub fn security_status(&self) -> SecurityStatus {
        self.lock().tracker.status()
    }

    /// Total failed logins this session
    pub fn failed_login_count(&self) -> usize {
        self.lock().tracker.failure_count()
    }

    /// The last `n` failures in chronological order
    pub fn recent_failures(&self, n: usize) -> Vec<LoginFailureEvent> {
        self.lock().tracker.recent_failures(n).to_vec()
    }

    /// Seal a snapshot of the current ledger under the session key
    ///
    /// Returns the artifact's byte length for display; the artifact
    /// itself is retained and available via [`Session::last_export`].
    pub fn export_encrypted(&self) -> Result<usize, ExportError> {
        let mut guard = self.lock();
        let inner = &mut *guard;
        let artifact = inner.exporter.export_snapshot(&inner.ledger, &inner.key)?;
        Ok(artifact.len())
    }

    /// The most recent export artifact, if any
    pub fn last_export(&self) -> Option<ExportArtifact> {
        self.lock().exporter.last_artifact().cloned()
    }

    /// Open a sealed artifact with this session's key and decode the
    /// records it contains
    pub fn decode_export(&self, sealed: &[u8]) -> Result<Vec<ExpenseRecord>, ExportError> {
        let inner = self.lock();
        let plaintext = crypto::open(sealed, &inner.key)?;
        export::decode_snapshot(&plaintext)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
