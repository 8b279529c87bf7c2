//! Failed-authentication tracker
//!
//! Records biometric authentication failures reported by the caller and
//! derives an advisory [`SecurityStatus`] from the accumulated count.
//! The count only grows within a session; there is no reset or unlock
//! operation, so the status is a one-way escalation ratchet. `Locked`
//! carries no enforcement here, it is a label for the caller to act on.

use crate::models::{LoginFailureEvent, SecurityStatus};

/// Tracks failed authentication attempts for one session
#[derive(Debug, Default)]
pub struct SecurityTracker {
    failures: Vec<LoginFailureEvent>,
}

impl SecurityTracker {
    /// Create a tracker with no recorded failures
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one failed authentication attempt
    ///
    /// Always succeeds; any reason string is accepted, including empty.
    /// Events are appended in the order the outcomes are observed.
    /// Returns the created event.
    pub fn record_failure(&mut self, reason: impl Into<String>) -> LoginFailureEvent {
        let before = self.status();
        let event = LoginFailureEvent::new(reason);
        self.failures.push(event.clone());

        let after = self.status();
        if after != before {
            log::warn!(
                "security status escalated to {} after {} failed attempts",
                after,
                self.failures.len()
            );
        }
        event
    }

    /// Current advisory status, recomputed from the failure count
    pub fn status(&self) -> SecurityStatus {
        SecurityStatus::from_failure_count(self.failures.len())
    }

    /// Total number of failures recorded this session
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// The last `n` failures in chronological order
    ///
    /// Returns fewer than `n` events when the history is shorter, and an
    /// empty slice when nothing has been recorded.
    pub fn recent_failures(&self, n: usize) -> &[LoginFailureEvent] {
        let start = self.failures.len().saturating_sub(n);
        &self.failures[start..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_tracker_is_normal() {
        let tracker = SecurityTracker::new();
        assert_eq!(tracker.status(), SecurityStatus::Normal);
        assert_eq!(tracker.failure_count(), 0);
        assert!(tracker.recent_failures(10).is_empty());
    }

    #[test]
    fn test_escalation_thresholds() {
        let mut tracker = SecurityTracker::new();

        for _ in 0..2 {
            tracker.record_failure("face mismatch");
        }
        assert_eq!(tracker.status(), SecurityStatus::Normal);

        tracker.record_failure("face mismatch");
        assert_eq!(tracker.status(), SecurityStatus::Watch);

        tracker.record_failure("timeout");
        assert_eq!(tracker.status(), SecurityStatus::Watch);

        tracker.record_failure("timeout");
        assert_eq!(tracker.status(), SecurityStatus::Locked);
    }

    #[test]
    fn test_status_never_decreases() {
        let mut tracker = SecurityTracker::new();
        for _ in 0..5 {
            tracker.record_failure("x");
        }
        assert_eq!(tracker.status(), SecurityStatus::Locked);

        // Further failures keep it locked; nothing resets the count
        tracker.record_failure("x");
        assert_eq!(tracker.status(), SecurityStatus::Locked);
        assert_eq!(tracker.failure_count(), 6);
    }

    #[test]
    fn test_record_returns_created_event() {
        let mut tracker = SecurityTracker::new();
        let event = tracker.record_failure("sensor unavailable");
        assert_eq!(event.reason, "sensor unavailable");
        assert_eq!(tracker.recent_failures(1), &[event]);
    }

    #[test]
    fn test_recent_failures_window() {
        let mut tracker = SecurityTracker::new();
        for i in 0..4 {
            tracker.record_failure(format!("attempt {}", i));
        }

        let recent = tracker.recent_failures(2);
        assert_eq!(recent.len(), 2);
        // Chronological: oldest of the window first
        assert_eq!(recent[0].reason, "attempt 2");
        assert_eq!(recent[1].reason, "attempt 3");

        // Window larger than history returns everything
        assert_eq!(tracker.recent_failures(100).len(), 4);
        assert!(tracker.recent_failures(0).is_empty());
    }

    #[test]
    fn test_empty_reason_accepted() {
        let mut tracker = SecurityTracker::new();
        let event = tracker.record_failure("");
        assert!(event.reason.is_empty());
        assert_eq!(tracker.failure_count(), 1);
    }
}
