//! In-memory expense ledger
//!
//! Owns the ordered collection of expense records for one session and
//! performs input validation. Insertion order is preserved; records are
//! immutable once added and removed only by clearing the ledger.

use chrono::{DateTime, Utc};
use std::collections::BTreeSet;

use crate::error::ValidationError;
use crate::models::{ExpenseRecord, Money};

/// Synthetic category entry representing "no filter" in category lists
pub const ALL_CATEGORIES: &str = "All";

/// The in-memory expense collection for the current session
#[derive(Debug, Default)]
pub struct Ledger {
    records: Vec<ExpenseRecord>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append a new expense
    ///
    /// Parses `amount_text` as a decimal amount and rejects anything
    /// unparsable or not strictly positive with
    /// [`ValidationError::InvalidAmount`], leaving the ledger unchanged.
    /// Title and category are trimmed, with blank values falling back to
    /// the standard placeholders. Returns the created record.
    pub fn add(
        &mut self,
        title: &str,
        category: &str,
        amount_text: &str,
        date: DateTime<Utc>,
    ) -> Result<ExpenseRecord, ValidationError> {
        let amount = Money::parse(amount_text)
            .map_err(|_| ValidationError::InvalidAmount(amount_text.to_string()))?;
        if !amount.is_positive() {
            return Err(ValidationError::InvalidAmount(amount_text.to_string()));
        }

        let record = ExpenseRecord::new(title, category, amount, date);
        self.records.push(record.clone());
        Ok(record)
    }

    /// Sum of all record amounts; zero for an empty ledger
    pub fn total_spent(&self) -> Money {
        self.records.iter().map(|r| r.amount).sum()
    }

    /// Category list for filter pickers
    ///
    /// Empty ledger yields an empty list, no synthetic "All" entry.
    /// Otherwise "All" followed by the distinct categories in
    /// lexicographic order.
    pub fn distinct_categories(&self) -> Vec<String> {
        if self.records.is_empty() {
            return Vec::new();
        }

        let distinct: BTreeSet<&str> =
            self.records.iter().map(|r| r.category.as_str()).collect();

        let mut categories = Vec::with_capacity(distinct.len() + 1);
        categories.push(ALL_CATEGORIES.to_string());
        categories.extend(distinct.into_iter().map(String::from));
        categories
    }

    /// Records sorted by date descending, optionally restricted to one
    /// category
    ///
    /// `None` and `"All"` both mean unfiltered. Records with equal dates
    /// keep their insertion order.
    pub fn filtered_and_sorted(&self, category: Option<&str>) -> Vec<&ExpenseRecord> {
        let mut selected: Vec<&ExpenseRecord> = match category {
            None | Some(ALL_CATEGORIES) => self.records.iter().collect(),
            Some(cat) => self.records.iter().filter(|r| r.category == cat).collect(),
        };
        // Stable sort keeps insertion order for equal dates
        selected.sort_by(|a, b| b.date.cmp(&a.date));
        selected
    }

    /// All records in insertion order
    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the ledger has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Remove all records
    pub fn clear(&mut self) {
        self.records.clear();
    }
}
