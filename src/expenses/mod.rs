//! Expense records, classification, and aggregation helpers.

pub mod aggregator;
pub mod category;
pub mod expense;
pub mod seed;

pub use aggregator::{
    filter_by_category, filter_recent, find_by_id, map_titles, total, total_by_category,
};
pub use category::{classify, CategoryStyle, ColorKey, IconKey, DEFAULT_STYLE};
pub use expense::{ensure_unique_ids, Expense};
pub use seed::seed_expenses;
