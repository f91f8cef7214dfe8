use chrono::{Datelike, Duration, NaiveDate};

use super::{month::MonthKey, transaction::Transaction};

/// Reporting window granularity used by history filters and statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Yearly,
    Monthly,
    Weekly,
    Daily,
}

/// Transactions dated inside the period containing `reference`.
/// Weeks run Sunday through Saturday.
pub fn transactions_in_period(
    transactions: &[Transaction],
    reference: NaiveDate,
    period: Period,
) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|txn| in_period(txn.date, reference, period))
        .cloned()
        .collect()
}

/// Transactions dated inside the given calendar month.
pub fn transactions_in_month(transactions: &[Transaction], month: MonthKey) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|txn| month.contains(txn.date))
        .cloned()
        .collect()
}

fn in_period(date: NaiveDate, reference: NaiveDate, period: Period) -> bool {
    match period {
        Period::Yearly => date.year() == reference.year(),
        Period::Monthly => date.year() == reference.year() && date.month() == reference.month(),
        Period::Daily => date == reference,
        Period::Weekly => {
            let start =
                reference - Duration::days(reference.weekday().num_days_from_sunday() as i64);
            let end = start + Duration::days(6);
            date >= start && date <= end
        }
    }
}
