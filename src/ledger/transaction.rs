use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::month::MonthKey;

/// A single money movement. The budgeting pipeline only ever reads these;
/// it never mutates or reorders the history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub amount: f64,
    pub kind: TransactionKind,
    pub category: String,
    #[serde(default)]
    pub concept: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl Transaction {
    pub fn new(
        amount: f64,
        kind: TransactionKind,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            amount,
            kind,
            category: category.into(),
            concept: String::new(),
            date,
            payment_method: None,
            currency: None,
        }
    }

    pub fn expense(amount: f64, category: impl Into<String>, date: NaiveDate) -> Self {
        Self::new(amount, TransactionKind::Expense, category, date)
    }

    pub fn income(amount: f64, category: impl Into<String>, date: NaiveDate) -> Self {
        Self::new(amount, TransactionKind::Income, category, date)
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// The calendar month this transaction belongs to.
    pub fn month_key(&self) -> MonthKey {
        MonthKey::from_date(self.date)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_key_matches_date() {
        let txn = Transaction::expense(
            12.5,
            "Food",
            NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
        );
        assert_eq!(txn.month_key().to_string(), "2025-03");
    }

    #[test]
    fn kind_serializes_lowercase() {
        let txn = Transaction::income(
            100.0,
            "Salary",
            NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
        );
        let json = serde_json::to_string(&txn).unwrap();
        assert!(json.contains("\"kind\":\"income\""));
    }

    #[test]
    fn deserializes_minimal_record() {
        let json = r#"{"amount":42.0,"kind":"expense","category":"Food","date":"2025-02-01"}"#;
        let txn: Transaction = serde_json::from_str(json).unwrap();
        assert!(txn.is_expense());
        assert!(txn.concept.is_empty());
        assert!(txn.payment_method.is_none());
        assert!(txn.currency.is_none());
    }
}
