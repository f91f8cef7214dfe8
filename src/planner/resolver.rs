use std::borrow::Cow;

use chrono::NaiveDate;

use crate::ledger::{BudgetBook, MonthKey, MonthlyBudget};

/// Finds or derives the active budget for the month containing `reference`.
///
/// Lookup order:
/// 1. a budget already stored for that month is returned as-is (borrowed);
/// 2. otherwise the immediately preceding month's budget, if any, is carried
///    forward into a new budget for the reference month;
/// 3. otherwise an empty budget for the reference month.
///
/// Derived budgets are not written anywhere; the caller decides whether to
/// persist them (see [`BudgetBook::upsert`]). This function never fails.
pub fn resolve(book: &BudgetBook, reference: NaiveDate) -> Cow<'_, MonthlyBudget> {
    let key = MonthKey::from_date(reference);
    if let Some(existing) = book.get(key) {
        return Cow::Borrowed(existing);
    }
    if let Some(previous) = book.get(key.pred()) {
        return Cow::Owned(previous.carried_forward(key));
    }
    Cow::Owned(MonthlyBudget::empty(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn march_budget() -> MonthlyBudget {
        let mut budget = MonthlyBudget::empty("2025-03".parse().unwrap());
        budget.overall_cap = 1000.0;
        budget.set_limit("Food", 300.0);
        budget
    }

    #[test]
    fn existing_month_is_returned_borrowed() {
        let book = BudgetBook::from_records(vec![march_budget()]);
        let resolved = resolve(&book, ymd(2025, 3, 10));
        assert!(matches!(resolved, Cow::Borrowed(_)));
        assert_eq!(resolved.month.to_string(), "2025-03");
        assert_eq!(resolved.overall_cap, 1000.0);
    }

    #[test]
    fn missing_month_carries_forward_the_previous_one() {
        let book = BudgetBook::from_records(vec![march_budget()]);
        let resolved = resolve(&book, ymd(2025, 4, 15));
        assert_eq!(resolved.month.to_string(), "2025-04");
        assert_eq!(resolved.overall_cap, 1000.0);
        assert_eq!(resolved.category_limits.len(), 1);
        assert_eq!(resolved.category_limits[0].category, "Food");
        assert_eq!(resolved.category_limits[0].cap, 300.0);
    }

    #[test]
    fn carry_forward_handles_year_rollover() {
        let mut december = MonthlyBudget::empty("2024-12".parse().unwrap());
        december.set_limit("Food", 250.0);
        let book = BudgetBook::from_records(vec![december]);

        let resolved = resolve(&book, ymd(2025, 1, 1));
        assert_eq!(resolved.month.to_string(), "2025-01");
        assert_eq!(resolved.category_limits[0].cap, 250.0);
    }

    #[test]
    fn carried_copy_is_isolated_from_the_source_month() {
        let book = BudgetBook::from_records(vec![march_budget()]);
        let mut resolved = resolve(&book, ymd(2025, 4, 15)).into_owned();
        resolved.set_limit("Food", 999.0);
        resolved.set_limit("Leisure", 50.0);

        let source = book.get("2025-03".parse().unwrap()).unwrap();
        assert_eq!(source.category_limits.len(), 1);
        assert_eq!(source.category_limits[0].cap, 300.0);
    }

    #[test]
    fn gap_older_than_one_month_yields_empty_default() {
        // A budget two months back is not carried forward; only the
        // immediately preceding month is consulted.
        let book = BudgetBook::from_records(vec![march_budget()]);
        let resolved = resolve(&book, ymd(2025, 5, 20));
        assert_eq!(resolved.month.to_string(), "2025-05");
        assert_eq!(resolved.overall_cap, 0.0);
        assert!(resolved.category_limits.is_empty());
    }

    #[test]
    fn empty_history_yields_empty_default() {
        let book = BudgetBook::new();
        let resolved = resolve(&book, ymd(2025, 7, 4));
        assert_eq!(
            *resolved,
            MonthlyBudget::empty("2025-07".parse().unwrap())
        );
    }

    #[test]
    fn resolution_is_idempotent_after_persisting() {
        let mut book = BudgetBook::from_records(vec![march_budget()]);
        let first = resolve(&book, ymd(2025, 4, 15)).into_owned();
        book.upsert(first.clone());
        let second = resolve(&book, ymd(2025, 4, 15));
        assert_eq!(*second, first);
        assert!(matches!(second, Cow::Borrowed(_)));
    }
}
