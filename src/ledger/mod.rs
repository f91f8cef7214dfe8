//! Ledger domain models, persistence-friendly types, and helpers.

pub mod book;
pub mod budget;
pub mod month;
pub mod period;
pub mod transaction;

pub use book::BudgetBook;
pub use budget::{CategoryLimit, MonthlyBudget, SUGGESTED_CATEGORIES};
pub use month::MonthKey;
pub use period::{transactions_in_month, transactions_in_period, Period};
pub use transaction::{Transaction, TransactionKind};
