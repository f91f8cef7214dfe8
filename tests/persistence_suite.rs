use chrono::NaiveDate;
use homebudget::{
    ledger::{transactions_in_month, MonthlyBudget, Transaction},
    planner::{self, Severity},
    storage::{JsonStore, StorageBackend},
};
use std::fs;
use tempfile::tempdir;

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn resolve_edit_upsert_reload_cycle() {
    let temp = tempdir().unwrap();
    let store = JsonStore::new(Some(temp.path().to_path_buf())).unwrap();

    // First run of a month: resolution yields an empty budget the user edits.
    let book = store.load_budgets().unwrap();
    let mut budget = planner::resolve(&book, ymd(2025, 3, 5)).into_owned();
    budget.overall_cap = 1000.0;
    budget.set_limit("Food", 300.0);
    store.upsert_budget(budget).unwrap();

    // A second edit in the same month must replace, not duplicate.
    let book = store.load_budgets().unwrap();
    let mut budget = planner::resolve(&book, ymd(2025, 3, 20)).into_owned();
    budget.set_limit("Food", 350.0);
    budget.set_limit("Leisure", 80.0);
    store.upsert_budget(budget).unwrap();

    let book = store.load_budgets().unwrap();
    assert_eq!(book.len(), 1);
    let march = book.get("2025-03".parse().unwrap()).unwrap();
    assert_eq!(march.limit("Food").unwrap().cap, 350.0);
    assert_eq!(march.category_limits.len(), 2);

    // The next month resolves by carry-forward from the stored record.
    let april = planner::resolve(&book, ymd(2025, 4, 1));
    assert_eq!(april.month.to_string(), "2025-04");
    assert_eq!(april.limit("Leisure").unwrap().cap, 80.0);
}

#[test]
fn stored_history_feeds_the_evaluator() {
    let temp = tempdir().unwrap();
    let store = JsonStore::new(Some(temp.path().to_path_buf())).unwrap();

    let mut budget = MonthlyBudget::empty("2025-03".parse().unwrap());
    budget.set_limit("Food", 100.0);
    store.upsert_budget(budget).unwrap();

    store
        .append_transaction(Transaction::expense(85.0, "Food", ymd(2025, 3, 10)))
        .unwrap();
    store
        .append_transaction(Transaction::expense(85.0, "Food", ymd(2025, 4, 10)))
        .unwrap();

    let book = store.load_budgets().unwrap();
    let history = store.load_transactions().unwrap();
    let budget = planner::resolve(&book, ymd(2025, 3, 31));
    let statuses = planner::evaluate(
        &budget,
        &transactions_in_month(&history, "2025-03".parse().unwrap()),
    );
    assert_eq!(statuses[0].spent, 85.0);
    assert_eq!(statuses[0].severity, Severity::Warning);
}

#[test]
fn corrupt_budget_blob_degrades_to_a_fresh_start() {
    let temp = tempdir().unwrap();
    let store = JsonStore::new(Some(temp.path().to_path_buf())).unwrap();
    fs::write(store.budgets_path(), "not json at all").unwrap();

    let book = store.load_budgets().unwrap();
    assert!(book.is_empty());
    let budget = planner::resolve(&book, ymd(2025, 6, 1));
    assert_eq!(budget.overall_cap, 0.0);
    assert!(budget.category_limits.is_empty());
}

#[test]
fn duplicate_months_in_an_imported_blob_collapse_to_the_first() {
    let temp = tempdir().unwrap();
    let store = JsonStore::new(Some(temp.path().to_path_buf())).unwrap();
    // A hand-merged export with two records for the same month.
    fs::write(
        store.budgets_path(),
        r#"[
            {"month":"2025-03","overall_cap":1000.0,"category_limits":[]},
            {"month":"2025-03","overall_cap":2000.0,"category_limits":[]}
        ]"#,
    )
    .unwrap();

    let book = store.load_budgets().unwrap();
    assert_eq!(book.len(), 1);
    assert_eq!(
        book.get("2025-03".parse().unwrap()).unwrap().overall_cap,
        1000.0
    );

    // Saving normalizes the blob; the duplicate is gone after a round trip.
    store.save_budgets(&book).unwrap();
    let raw = fs::read_to_string(store.budgets_path()).unwrap();
    assert_eq!(raw.matches("2025-03").count(), 1);
}
