use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{budget::MonthlyBudget, month::MonthKey};

/// The persisted budget collection, keyed by month.
///
/// On the wire this is a plain array of [`MonthlyBudget`] records, so data
/// exported before the keyed representation existed still loads. Internally
/// the map makes the one-budget-per-month invariant structural: inserting is
/// always an upsert, and duplicate months in imported data collapse to the
/// first record seen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BudgetBook {
    entries: BTreeMap<MonthKey, MonthlyBudget>,
}

impl BudgetBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a book from raw records, keeping the first record per month.
    pub fn from_records(records: Vec<MonthlyBudget>) -> Self {
        let mut entries = BTreeMap::new();
        for budget in records {
            if entries.contains_key(&budget.month) {
                tracing::warn!(month = %budget.month, "ignoring duplicate budget record");
                continue;
            }
            entries.insert(budget.month, budget);
        }
        Self { entries }
    }

    pub fn get(&self, month: MonthKey) -> Option<&MonthlyBudget> {
        self.entries.get(&month)
    }

    /// Inserts `budget`, replacing any existing entry for the same month.
    /// Returns the replaced entry, if any.
    pub fn upsert(&mut self, budget: MonthlyBudget) -> Option<MonthlyBudget> {
        self.entries.insert(budget.month, budget)
    }

    /// Budgets in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = &MonthlyBudget> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<MonthlyBudget> for BudgetBook {
    fn from_iter<I: IntoIterator<Item = MonthlyBudget>>(iter: I) -> Self {
        Self::from_records(iter.into_iter().collect())
    }
}

impl Serialize for BudgetBook {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.entries.values())
    }
}

impl<'de> Deserialize<'de> for BudgetBook {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let records = Vec::<MonthlyBudget>::deserialize(deserializer)?;
        Ok(Self::from_records(records))
    }
}
