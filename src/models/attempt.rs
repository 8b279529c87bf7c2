//! Failed login attempt model and derived security status

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AttemptId;

/// A single failed authentication attempt
///
/// Created exactly once per failure, immutable, retained for the session
/// lifetime (append-only, no eviction).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginFailureEvent {
    /// Unique identifier
    pub id: AttemptId,

    /// When the failure was observed
    pub timestamp: DateTime<Utc>,

    /// Free-text description of the failure cause; may be empty
    pub reason: String,
}

impl LoginFailureEvent {
    /// Create a new event stamped with the current time
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            id: AttemptId::new(),
            timestamp: Utc::now(),
            reason: reason.into(),
        }
    }
}

/// Advisory risk tier derived from the number of accumulated failures
///
/// Never stored; recomputed on demand from the failure count. `Locked`
/// does not deny any operation by itself, callers decide what to do
/// with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SecurityStatus {
    /// 0-2 failures
    Normal,
    /// 3-4 failures
    Watch,
    /// 5 or more failures
    Locked,
}

impl SecurityStatus {
    /// Derive the status from a failure count
    pub fn from_failure_count(count: usize) -> Self {
        if count >= 5 {
            Self::Locked
        } else if count >= 3 {
            Self::Watch
        } else {
            Self::Normal
        }
    }
}

impl fmt::Display for SecurityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "Normal"),
            Self::Watch => write!(f, "Watch"),
            Self::Locked => write!(f, "Locked"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_boundaries() {
        assert_eq!(SecurityStatus::from_failure_count(0), SecurityStatus::Normal);
        assert_eq!(SecurityStatus::from_failure_count(2), SecurityStatus::Normal);
        assert_eq!(SecurityStatus::from_failure_count(3), SecurityStatus::Watch);
        assert_eq!(SecurityStatus::from_failure_count(4), SecurityStatus::Watch);
        assert_eq!(SecurityStatus::from_failure_count(5), SecurityStatus::Locked);
        assert_eq!(SecurityStatus::from_failure_count(100), SecurityStatus::Locked);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(SecurityStatus::Watch.to_string(), "Watch");
    }

    #[test]
    fn test_event_accepts_empty_reason() {
        let event = LoginFailureEvent::new("");
        assert!(event.reason.is_empty());
        assert!(!event.id.as_uuid().is_nil());
    }
}
