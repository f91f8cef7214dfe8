//! Aggregations behind the balance card, the category chart, and the
//! home-view spending trend. Pure reductions over the transaction history.

use std::collections::BTreeMap;

use crate::ledger::{MonthKey, Transaction, TransactionKind};

/// Income, expenses, and their difference for one set of transactions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MonthlyTotals {
    pub income: f64,
    pub expenses: f64,
    pub net: f64,
}

/// Totals for the transactions dated inside `month`.
pub fn monthly_totals(transactions: &[Transaction], month: MonthKey) -> MonthlyTotals {
    let mut totals = MonthlyTotals::default();
    for txn in transactions.iter().filter(|txn| month.contains(txn.date)) {
        match txn.kind {
            TransactionKind::Income => totals.income += txn.amount,
            TransactionKind::Expense => totals.expenses += txn.amount,
        }
    }
    totals.net = totals.income - totals.expenses;
    totals
}

/// Total expense per category, largest first. Ties keep alphabetical order.
pub fn expense_by_category(transactions: &[Transaction]) -> Vec<(String, f64)> {
    let mut by_category: BTreeMap<&str, f64> = BTreeMap::new();
    for txn in transactions.iter().filter(|txn| txn.is_expense()) {
        *by_category.entry(txn.category.as_str()).or_default() += txn.amount;
    }
    let mut totals: Vec<(String, f64)> = by_category
        .into_iter()
        .map(|(category, total)| (category.to_string(), total))
        .collect();
    totals.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    totals
}

/// Expense totals for the `months` calendar months ending at `reference`,
/// oldest first. Months without expenses appear with a zero total so the
/// series is gapless.
pub fn expense_trend(
    transactions: &[Transaction],
    reference: MonthKey,
    months: usize,
) -> Vec<(MonthKey, f64)> {
    let mut keys = Vec::with_capacity(months);
    let mut key = reference;
    for _ in 0..months {
        keys.push(key);
        key = key.pred();
    }
    keys.reverse();

    keys.into_iter()
        .map(|month| {
            let total = transactions
                .iter()
                .filter(|txn| txn.is_expense() && month.contains(txn.date))
                .map(|txn| txn.amount)
                .sum();
            (month, total)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn history() -> Vec<Transaction> {
        vec![
            Transaction::income(2000.0, "Salary", ymd(2025, 3, 1)),
            Transaction::expense(300.0, "Food", ymd(2025, 3, 5)),
            Transaction::expense(120.0, "Transport", ymd(2025, 3, 9)),
            Transaction::expense(450.0, "Food", ymd(2025, 2, 14)),
            Transaction::expense(80.0, "Leisure", ymd(2025, 1, 20)),
        ]
    }

    #[test]
    fn monthly_totals_split_income_and_expenses() {
        let totals = monthly_totals(&history(), "2025-03".parse().unwrap());
        assert_eq!(totals.income, 2000.0);
        assert_eq!(totals.expenses, 420.0);
        assert_eq!(totals.net, 1580.0);
    }

    #[test]
    fn expense_by_category_orders_largest_first() {
        let totals = expense_by_category(&history());
        assert_eq!(
            totals,
            vec![
                ("Food".to_string(), 750.0),
                ("Transport".to_string(), 120.0),
                ("Leisure".to_string(), 80.0),
            ]
        );
    }

    #[test]
    fn expense_trend_is_gapless_and_oldest_first() {
        let trend = expense_trend(&history(), "2025-03".parse().unwrap(), 4);
        let rendered: Vec<(String, f64)> = trend
            .into_iter()
            .map(|(month, total)| (month.to_string(), total))
            .collect();
        assert_eq!(
            rendered,
            vec![
                ("2024-12".to_string(), 0.0),
                ("2025-01".to_string(), 80.0),
                ("2025-02".to_string(), 450.0),
                ("2025-03".to_string(), 420.0),
            ]
        );
    }
}
