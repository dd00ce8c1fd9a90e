//! Fixed category → display attribute lookup.

use std::fmt;

use serde::Serialize;

/// Palette key a renderer maps to an actual colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ColorKey {
    Orange,
    Blue,
    Purple,
    Red,
    Pink,
    Green,
    Grey,
}

/// Icon key a renderer maps to a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IconKey {
    Restaurant,
    Car,
    Receipt,
    Movie,
    Health,
    ShoppingBag,
    Money,
}

/// Display attributes for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CategoryStyle {
    pub color: ColorKey,
    pub icon: IconKey,
}

impl CategoryStyle {
    pub const fn new(color: ColorKey, icon: IconKey) -> Self {
        Self { color, icon }
    }
}

/// Returned for any category not in [`CLASSIFICATION_TABLE`].
pub const DEFAULT_STYLE: CategoryStyle = CategoryStyle::new(ColorKey::Grey, IconKey::Money);

/// Keys are lower-case.
pub const CLASSIFICATION_TABLE: &[(&str, CategoryStyle)] = &[
    ("food", CategoryStyle::new(ColorKey::Orange, IconKey::Restaurant)),
    (
        "transportation",
        CategoryStyle::new(ColorKey::Blue, IconKey::Car),
    ),
    ("utilities", CategoryStyle::new(ColorKey::Purple, IconKey::Receipt)),
    (
        "entertainment",
        CategoryStyle::new(ColorKey::Pink, IconKey::Movie),
    ),
    ("health", CategoryStyle::new(ColorKey::Red, IconKey::Health)),
    (
        "shopping",
        CategoryStyle::new(ColorKey::Green, IconKey::ShoppingBag),
    ),
];

/// Resolves the display attributes for `category`, ignoring case and
/// surrounding whitespace. Never fails: unknown names get [`DEFAULT_STYLE`].
pub fn classify(category: &str) -> CategoryStyle {
    let key = category.trim().to_lowercase();
    CLASSIFICATION_TABLE
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, style)| *style)
        .unwrap_or(DEFAULT_STYLE)
}

impl fmt::Display for ColorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ColorKey::Orange => "orange",
            ColorKey::Blue => "blue",
            ColorKey::Purple => "purple",
            ColorKey::Red => "red",
            ColorKey::Pink => "pink",
            ColorKey::Green => "green",
            ColorKey::Grey => "grey",
        };
        f.write_str(label)
    }
}

impl fmt::Display for IconKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            IconKey::Restaurant => "restaurant",
            IconKey::Car => "car",
            IconKey::Receipt => "receipt",
            IconKey::Movie => "movie",
            IconKey::Health => "health",
            IconKey::ShoppingBag => "shopping_bag",
            IconKey::Money => "money",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(classify("FOOD"), classify("food"));
        assert_eq!(classify("Food"), classify("food"));
        assert_eq!(classify("food").color, ColorKey::Orange);
    }

    #[test]
    fn unknown_category_falls_back_to_default() {
        assert_eq!(classify("gifts"), DEFAULT_STYLE);
        assert_eq!(classify(""), DEFAULT_STYLE);
    }

    #[test]
    fn table_keys_are_lower_case_and_distinct() {
        let mut seen = std::collections::HashSet::new();
        for (name, _) in CLASSIFICATION_TABLE {
            assert_eq!(*name, name.to_lowercase());
            assert!(seen.insert(*name), "duplicate key {name}");
        }
    }
}
