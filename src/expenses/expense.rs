//! The expense record value type.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::Serialize;

use crate::errors::ExpenseError;

/// One spending event. Immutable once constructed.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Expense {
    id: String,
    title: String,
    amount: f64,
    category: String,
    date: NaiveDate,
    description: String,
}

impl Expense {
    /// Builds an expense, rejecting empty ids and negative or non-finite amounts.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> Result<Self, ExpenseError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ExpenseError::EmptyId);
        }
        if !amount.is_finite() || amount < 0.0 {
            return Err(ExpenseError::InvalidAmount { id, amount });
        }
        Ok(Self {
            id,
            title: title.into(),
            amount,
            category: category.into(),
            date,
            description: description.into(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Case-insensitive category comparison.
    pub fn in_category(&self, category: &str) -> bool {
        self.category.trim().to_lowercase() == category.trim().to_lowercase()
    }
}

/// Checks that every id in `expenses` is distinct.
pub fn ensure_unique_ids(expenses: &[Expense]) -> Result<(), ExpenseError> {
    let mut seen = HashSet::with_capacity(expenses.len());
    for expense in expenses {
        if !seen.insert(expense.id()) {
            return Err(ExpenseError::DuplicateId(expense.id().to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn rejects_negative_amount() {
        let err = Expense::new("1", "Refund", -5.0, "Food", date(), "").unwrap_err();
        assert!(matches!(err, ExpenseError::InvalidAmount { .. }));
    }

    #[test]
    fn rejects_nan_amount() {
        assert!(Expense::new("1", "Broken", f64::NAN, "Food", date(), "").is_err());
    }

    #[test]
    fn rejects_blank_id() {
        let err = Expense::new("  ", "Lunch", 10.0, "Food", date(), "").unwrap_err();
        assert_eq!(err, ExpenseError::EmptyId);
    }

    #[test]
    fn zero_amount_is_allowed() {
        let expense = Expense::new("1", "Free sample", 0.0, "Food", date(), "").unwrap();
        assert_eq!(expense.amount(), 0.0);
    }

    #[test]
    fn category_match_ignores_case_and_whitespace() {
        let expense = Expense::new("1", "Lunch", 10.0, "Food", date(), "").unwrap();
        assert!(expense.in_category("FOOD"));
        assert!(expense.in_category(" food "));
        assert!(!expense.in_category("drinks"));
    }

    #[test]
    fn duplicate_ids_are_reported() {
        let a = Expense::new("7", "A", 1.0, "Food", date(), "").unwrap();
        let b = Expense::new("7", "B", 2.0, "Food", date(), "").unwrap();
        assert_eq!(
            ensure_unique_ids(&[a, b]),
            Err(ExpenseError::DuplicateId("7".into()))
        );
    }
}
