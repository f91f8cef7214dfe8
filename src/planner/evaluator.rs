use serde::Serialize;

use crate::ledger::{MonthlyBudget, Transaction};

/// Fraction of a cap above which spending is flagged before going over.
pub const WARNING_RATIO: f64 = 0.8;

/// Three-level spend classification used to color progress indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Ok,
    Warning,
    Over,
}

impl Severity {
    fn classify(spent: f64, cap: f64) -> Self {
        if spent > cap {
            Severity::Over
        } else if spent > WARNING_RATIO * cap {
            Severity::Warning
        } else {
            Severity::Ok
        }
    }
}

/// Derived spend-to-limit state for one category in one month. Not persisted;
/// recomputed from the budget and the month's transactions on demand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryStatus {
    pub category: String,
    pub cap: f64,
    pub spent: f64,
    /// `spent / cap` clamped to `[0, 1]` for display; `0` when the cap is unset.
    pub ratio: f64,
    pub severity: Severity,
}

/// Evaluates each category limit against the month's expenses.
///
/// Output order matches `budget.category_limits` order. Categories with a
/// zero cap are legal: their ratio is forced to zero, and any spending at all
/// puts them over.
pub fn evaluate(budget: &MonthlyBudget, month_transactions: &[Transaction]) -> Vec<CategoryStatus> {
    budget
        .category_limits
        .iter()
        .map(|limit| {
            let spent = spent_in_category(month_transactions, &limit.category);
            status_for(&limit.category, limit.cap, spent)
        })
        .collect()
}

/// Evaluates the month as a whole against the sum of all category caps.
/// Only spending in budgeted categories counts toward the total, so this is
/// exactly the sum of the per-category statuses. Returns `None` when the
/// budget has no limits to measure against.
pub fn evaluate_overall(
    budget: &MonthlyBudget,
    month_transactions: &[Transaction],
) -> Option<CategoryStatus> {
    if budget.category_limits.is_empty() {
        return None;
    }
    let spent: f64 = month_transactions
        .iter()
        .filter(|txn| txn.is_expense() && budget.limit(&txn.category).is_some())
        .map(|txn| txn.amount)
        .sum();
    Some(status_for("Overall", budget.total_limit(), spent))
}

fn status_for(category: &str, cap: f64, spent: f64) -> CategoryStatus {
    let ratio = if cap > 0.0 {
        (spent / cap).min(1.0)
    } else {
        0.0
    };
    CategoryStatus {
        category: category.to_string(),
        cap,
        spent,
        ratio,
        severity: Severity::classify(spent, cap),
    }
}

fn spent_in_category(transactions: &[Transaction], category: &str) -> f64 {
    transactions
        .iter()
        .filter(|txn| txn.is_expense() && txn.category == category)
        .map(|txn| txn.amount)
        .sum()
}
