use std::collections::BTreeSet;

use crate::ledger::{MonthlyBudget, Transaction};

/// A category whose long-run monthly average exceeds its cap by more than
/// this factor is flagged as chronically over-budget.
pub const RAISE_CAP_RATIO: f64 = 1.1;

/// A category whose long-run monthly average stays below this fraction of
/// its cap gets a lower-the-cap suggestion.
pub const LOWER_CAP_RATIO: f64 = 0.6;

/// Compares each budgeted category against its long-run monthly spending
/// average, computed over the whole transaction history (not just the
/// current month), and emits advisory messages for chronic mismatches.
///
/// The average divides total historical spend by the number of distinct
/// calendar months that actually contain a matching expense, so sparse
/// histories are not diluted by empty months. Categories with no matching
/// expenses at all are skipped. Output order matches `category_limits`.
pub fn recommend(budget: &MonthlyBudget, all_transactions: &[Transaction]) -> Vec<String> {
    let mut messages = Vec::new();

    for limit in &budget.category_limits {
        let matching: Vec<&Transaction> = all_transactions
            .iter()
            .filter(|txn| txn.is_expense() && txn.category == limit.category)
            .collect();
        if matching.is_empty() {
            continue;
        }

        let months: BTreeSet<_> = matching.iter().map(|txn| txn.month_key()).collect();
        let month_count = months.len().max(1);
        let total: f64 = matching.iter().map(|txn| txn.amount).sum();
        let average = total / month_count as f64;

        if average > RAISE_CAP_RATIO * limit.cap {
            messages.push(format!(
                "You spend an average of {average:.0} per month on \"{}\", \
                 over its cap of {:.0}. Consider raising the cap.",
                limit.category, limit.cap
            ));
        } else if average < LOWER_CAP_RATIO * limit.cap {
            messages.push(format!(
                "You spend an average of {average:.0} per month on \"{}\", \
                 well under its cap of {:.0}. You could lower it.",
                limit.category, limit.cap
            ));
        }
    }

    messages
}
