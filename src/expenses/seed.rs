//! The fixed in-memory expense list shown by the application.

use chrono::{Duration, NaiveDate};

use crate::errors::ExpenseError;

use super::{expense::ensure_unique_ids, Expense};

/// (id, title, amount, category, days before today, description)
const SEED: [(&str, &str, f64, &str, i64, &str); 8] = [
    (
        "1",
        "Grocery Shopping",
        150_000.0,
        "Food",
        0,
        "Weekly groceries at the supermarket",
    ),
    (
        "2",
        "Fuel",
        50_000.0,
        "Transportation",
        1,
        "Motorbike fuel refill",
    ),
    (
        "3",
        "Coffee Shop",
        25_000.0,
        "Food",
        1,
        "Iced latte with friends",
    ),
    (
        "4",
        "Electricity Bill",
        300_000.0,
        "Utilities",
        3,
        "Monthly electricity token",
    ),
    (
        "5",
        "Movie Tickets",
        100_000.0,
        "Entertainment",
        5,
        "Two tickets for the weekend show",
    ),
    ("6", "Lunch", 75_000.0, "Food", 6, "Team lunch near the office"),
    (
        "7",
        "Pharmacy",
        35_000.0,
        "Health",
        9,
        "Vitamins and cold medicine",
    ),
    (
        "8",
        "Parking",
        10_000.0,
        "Transportation",
        12,
        "Mall parking fee",
    ),
];

/// Builds the seed list with dates relative to `today`.
pub fn seed_expenses(today: NaiveDate) -> Result<Vec<Expense>, ExpenseError> {
    let expenses = SEED
        .iter()
        .map(|(id, title, amount, category, days_ago, description)| {
            let date = today
                .checked_sub_signed(Duration::days(*days_ago))
                .unwrap_or(today);
            Expense::new(*id, *title, *amount, *category, date, *description)
        })
        .collect::<Result<Vec<_>, _>>()?;
    ensure_unique_ids(&expenses)?;
    Ok(expenses)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_eight_distinct_records_dated_on_or_before_today() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let expenses = seed_expenses(today).expect("seed is valid");
        assert_eq!(expenses.len(), 8);
        assert!(expenses.iter().all(|e| e.date() <= today));
        assert_eq!(expenses[0].date(), today);
    }
}
