//! Core data models for vaultledger
//!
//! This module contains the data structures for the expense-tracking
//! domain: expense records, failed login attempts, the derived security
//! status, and the money type used for amounts.

pub mod attempt;
pub mod expense;
pub mod ids;
pub mod money;

pub use attempt::{LoginFailureEvent, SecurityStatus};
pub use expense::{ExpenseRecord, GENERAL_CATEGORY, UNTITLED};
pub use ids::{AttemptId, ExpenseId};
pub use money::{Money, MoneyParseError};
