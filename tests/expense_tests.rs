use chrono::{Duration, NaiveDate, NaiveTime};
use expense_core::expenses::{
    classify, filter_by_category, filter_recent, map_titles, seed_expenses, total,
    total_by_category, ColorKey, Expense, IconKey, DEFAULT_STYLE,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn seed() -> Vec<Expense> {
    seed_expenses(today()).expect("seed list is valid")
}

#[test]
fn seeded_total_matches_sum_of_amounts() {
    let expenses = seed();
    let amounts: Vec<f64> = expenses.iter().map(Expense::amount).collect();
    assert_eq!(
        amounts,
        vec![
            150_000.0, 50_000.0, 25_000.0, 300_000.0, 100_000.0, 75_000.0, 35_000.0, 10_000.0
        ]
    );
    assert_eq!(total(&expenses), 745_000.0);
}

#[test]
fn total_of_nothing_is_zero() {
    let none: Vec<Expense> = Vec::new();
    assert_eq!(total(&none), 0.0);
}

#[test]
fn food_filter_keeps_relative_order() {
    let expenses = seed();
    let food = filter_by_category(&expenses, "food");
    assert_eq!(
        map_titles(food),
        vec!["Grocery Shopping", "Coffee Shop", "Lunch"]
    );
}

#[test]
fn category_filter_ignores_case() {
    let expenses = seed();
    assert_eq!(
        filter_by_category(&expenses, "FOOD"),
        filter_by_category(&expenses, "Food")
    );
    assert!(filter_by_category(&expenses, "gifts").is_empty());
}

#[test]
fn filters_compose_and_leave_input_untouched() {
    let expenses = seed();
    let snapshot = expenses.clone();
    let reference = today().and_time(NaiveTime::MIN);

    let recent = filter_recent(&expenses, reference, Duration::days(7));
    let recent_food = filter_by_category(recent, "food");
    assert_eq!(total(recent_food), 250_000.0);
    assert_eq!(expenses, snapshot);
}

#[test]
fn recent_window_uses_strict_lower_bound() {
    let expenses = seed();
    let reference = today().and_time(NaiveTime::MIN);

    // Lunch is 6 days old: inside a 7 day window, outside a 6 day window.
    let week = map_titles(filter_recent(&expenses, reference, Duration::days(7)));
    assert!(week.contains(&"Lunch"));
    assert!(!week.contains(&"Pharmacy"));

    let six_days = map_titles(filter_recent(&expenses, reference, Duration::days(6)));
    assert!(!six_days.contains(&"Lunch"));
}

#[test]
fn map_titles_is_a_pure_projection() {
    let expenses = seed();
    let titles = map_titles(&expenses);
    assert_eq!(titles.len(), expenses.len());
    assert_eq!(titles.first(), Some(&"Grocery Shopping"));
    assert_eq!(titles.last(), Some(&"Parking"));
}

#[test]
fn classification_is_total_and_case_insensitive() {
    assert_eq!(classify("FOOD"), classify("food"));
    assert_eq!(classify("Transportation").icon, IconKey::Car);
    for unknown in ["", "   ", "Gifts", "ÜBER", "food!"] {
        assert_eq!(classify(unknown), DEFAULT_STYLE, "input {unknown:?}");
    }
    assert_eq!(DEFAULT_STYLE.color, ColorKey::Grey);
}

#[test]
fn every_seed_category_has_a_dedicated_style() {
    for expense in seed() {
        assert_ne!(
            classify(expense.category()),
            DEFAULT_STYLE,
            "category {} fell back to default",
            expense.category()
        );
    }
}

#[test]
fn category_totals_add_up_to_grand_total() {
    let expenses = seed();
    let by_category = total_by_category(&expenses);
    let sum: f64 = by_category.iter().map(|(_, amount)| amount).sum();
    assert_eq!(sum, total(&expenses));
    assert_eq!(by_category[0], ("Food".to_string(), 250_000.0));
}
