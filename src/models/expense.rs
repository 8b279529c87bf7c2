//! Expense record model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::ExpenseId;
use super::money::Money;

/// Fallback title for expenses created with a blank title
pub const UNTITLED: &str = "Untitled";

/// Fallback category for expenses created with a blank category
pub const GENERAL_CATEGORY: &str = "General";

/// A single expense entry
///
/// Immutable after creation; the ledger only appends records and clears
/// them wholesale. Field order is the canonical serialization order for
/// exported snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Unique identifier
    pub id: ExpenseId,

    /// Display title, never empty
    pub title: String,

    /// Display category, never empty
    pub category: String,

    /// Amount spent, strictly positive
    pub amount: Money,

    /// When the expense occurred (ISO-8601 in serialized form)
    pub date: DateTime<Utc>,
}

impl ExpenseRecord {
    /// Create a new expense record, normalizing title and category
    ///
    /// Whitespace is trimmed; blank fields fall back to [`UNTITLED`] and
    /// [`GENERAL_CATEGORY`]. The caller is responsible for ensuring the
    /// amount is positive.
    pub fn new(
        title: &str,
        category: &str,
        amount: Money,
        date: DateTime<Utc>,
    ) -> Self {
        let title = title.trim();
        let category = category.trim();
        Self {
            id: ExpenseId::new(),
            title: if title.is_empty() {
                UNTITLED.to_string()
            } else {
                title.to_string()
            },
            category: if category.is_empty() {
                GENERAL_CATEGORY.to_string()
            } else {
                category.to_string()
            },
            amount,
            date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_whitespace() {
        let record = ExpenseRecord::new(
            "  Coffee  ",
            " Food ",
            Money::from_cents(450),
            Utc::now(),
        );
        assert_eq!(record.title, "Coffee");
        assert_eq!(record.category, "Food");
    }

    #[test]
    fn test_new_applies_fallbacks() {
        let record = ExpenseRecord::new("   ", "", Money::from_cents(100), Utc::now());
        assert_eq!(record.title, UNTITLED);
        assert_eq!(record.category, GENERAL_CATEGORY);
    }

    #[test]
    fn test_serialization_round_trip() {
        let record = ExpenseRecord::new("Gas", "Auto", Money::from_cents(2000), Utc::now());
        let json = serde_json::to_string(&record).unwrap();
        let back: ExpenseRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }

    #[test]
    fn test_canonical_field_order() {
        let record = ExpenseRecord::new("Gas", "Auto", Money::from_cents(2000), Utc::now());
        let json = serde_json::to_string(&record).unwrap();
        let id_pos = json.find("\"id\"").unwrap();
        let title_pos = json.find("\"title\"").unwrap();
        let amount_pos = json.find("\"amount\"").unwrap();
        let date_pos = json.find("\"date\"").unwrap();
        assert!(id_pos < title_pos && title_pos < amount_pos && amount_pos < date_pos);
    }
}
