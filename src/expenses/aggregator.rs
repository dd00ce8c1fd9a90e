//! Pure transforms over ordered expense sequences.
//!
//! Every function accepts anything that iterates `&Expense` (a slice, a
//! `Vec<Expense>` by reference, or the output of another filter), never
//! mutates its input, and borrows records rather than cloning them.

use chrono::{Duration, NaiveDateTime, NaiveTime};

use super::Expense;

/// Sum of all amounts. An empty input sums to `0.0`.
pub fn total<'a, I>(expenses: I) -> f64
where
    I: IntoIterator<Item = &'a Expense>,
{
    expenses
        .into_iter()
        .fold(0.0, |acc, expense| acc + expense.amount())
}

/// Records whose category matches `category` case-insensitively, in input order.
pub fn filter_by_category<'a, I>(expenses: I, category: &str) -> Vec<&'a Expense>
where
    I: IntoIterator<Item = &'a Expense>,
{
    expenses
        .into_iter()
        .filter(|expense| expense.in_category(category))
        .collect()
}

/// Records dated strictly after `reference - window`.
///
/// Dates are compared at midnight. Records dated after `reference` are kept.
/// If `reference - window` is out of range every record is kept.
pub fn filter_recent<'a, I>(
    expenses: I,
    reference: NaiveDateTime,
    window: Duration,
) -> Vec<&'a Expense>
where
    I: IntoIterator<Item = &'a Expense>,
{
    let Some(cutoff) = reference.checked_sub_signed(window) else {
        return expenses.into_iter().collect();
    };
    expenses
        .into_iter()
        .filter(|expense| expense.date().and_time(NaiveTime::MIN) > cutoff)
        .collect()
}

pub fn map_titles<'a, I>(expenses: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a Expense>,
{
    expenses.into_iter().map(Expense::title).collect()
}

/// Per-category sums in first-seen order. Categories differing only in case
/// share a bucket labelled with the first spelling seen.
pub fn total_by_category<'a, I>(expenses: I) -> Vec<(String, f64)>
where
    I: IntoIterator<Item = &'a Expense>,
{
    let mut buckets: Vec<(String, f64)> = Vec::new();
    for expense in expenses {
        match buckets
            .iter_mut()
            .find(|(name, _)| expense.in_category(name))
        {
            Some((_, sum)) => *sum += expense.amount(),
            None => buckets.push((expense.category().to_string(), expense.amount())),
        }
    }
    buckets
}

pub fn find_by_id<'a, I>(expenses: I, id: &str) -> Option<&'a Expense>
where
    I: IntoIterator<Item = &'a Expense>,
{
    expenses.into_iter().find(|expense| expense.id() == id)
}
