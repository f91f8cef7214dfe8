use serde::{Deserialize, Serialize};

use super::month::MonthKey;

/// Category names offered by front-ends when adding a limit.
pub const SUGGESTED_CATEGORIES: &[&str] = &[
    "Food",
    "Transport",
    "Utilities",
    "Leisure",
    "Clothing",
    "Health",
    "Education",
    "Investments",
];

/// A per-category spending ceiling inside one month's budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryLimit {
    pub category: String,
    pub cap: f64,
}

/// A spending plan for one calendar month: an overall ceiling plus ordered
/// per-category limits. `overall_cap == 0.0` means the ceiling is unset.
///
/// Category names are unique within one budget; the order of
/// `category_limits` is the user's display order and is preserved by every
/// operation in this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyBudget {
    pub month: MonthKey,
    #[serde(default)]
    pub overall_cap: f64,
    #[serde(default)]
    pub category_limits: Vec<CategoryLimit>,
}

impl MonthlyBudget {
    /// A fresh budget with no ceiling and no limits.
    pub fn empty(month: MonthKey) -> Self {
        Self {
            month,
            overall_cap: 0.0,
            category_limits: Vec::new(),
        }
    }

    /// Derives a budget for `month` from this one, copying the overall cap
    /// and the category limits. The copied list is independent: mutating the
    /// result never touches the source month.
    pub fn carried_forward(&self, month: MonthKey) -> Self {
        Self {
            month,
            overall_cap: self.overall_cap,
            category_limits: self.category_limits.clone(),
        }
    }

    /// Sets the cap for `category`, overwriting an existing entry in place
    /// (preserving its position) or appending a new one. Never duplicates a
    /// category name.
    pub fn set_limit(&mut self, category: impl Into<String>, cap: f64) {
        let category = category.into();
        match self
            .category_limits
            .iter_mut()
            .find(|limit| limit.category == category)
        {
            Some(existing) => existing.cap = cap,
            None => self.category_limits.push(CategoryLimit { category, cap }),
        }
    }

    /// Removes the limit for `category`, returning whether one existed.
    pub fn remove_limit(&mut self, category: &str) -> bool {
        let before = self.category_limits.len();
        self.category_limits
            .retain(|limit| limit.category != category);
        self.category_limits.len() != before
    }

    pub fn limit(&self, category: &str) -> Option<&CategoryLimit> {
        self.category_limits
            .iter()
            .find(|limit| limit.category == category)
    }

    /// Sum of all category caps, the "budgeted total" shown next to actual
    /// spending on the home view.
    pub fn total_limit(&self) -> f64 {
        self.category_limits.iter().map(|limit| limit.cap).sum()
    }
}
