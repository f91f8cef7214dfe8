pub mod json_store;

use crate::errors::Result;
use crate::ledger::{BudgetBook, MonthlyBudget, Transaction};

/// Abstraction over persistence backends holding the two keyed collections.
///
/// Backends are whole-collection, all-or-nothing: a save replaces the stored
/// blob, and loads never hand back partially written data. Concurrent
/// read-modify-write cycles against one backend require external mutual
/// exclusion.
pub trait StorageBackend: Send + Sync {
    fn load_budgets(&self) -> Result<BudgetBook>;
    fn save_budgets(&self, book: &BudgetBook) -> Result<()>;
    fn load_transactions(&self) -> Result<Vec<Transaction>>;
    fn save_transactions(&self, transactions: &[Transaction]) -> Result<()>;

    /// Merges one budget into the stored collection, replacing any existing
    /// entry with the same month key rather than appending a duplicate.
    fn upsert_budget(&self, budget: MonthlyBudget) -> Result<()> {
        let mut book = self.load_budgets()?;
        book.upsert(budget);
        self.save_budgets(&book)
    }

    /// Appends one transaction to the stored history.
    fn append_transaction(&self, transaction: Transaction) -> Result<()> {
        let mut transactions = self.load_transactions()?;
        transactions.push(transaction);
        self.save_transactions(&transactions)
    }
}

pub use json_store::{JsonStore, SCHEMA_VERSION};
