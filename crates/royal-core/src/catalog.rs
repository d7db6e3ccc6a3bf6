//! # Catalog Views
//!
//! Browsing helpers over a loaded menu: the category/name filter used while
//! taking an order, and the summary figures shown above the menu.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::report::average;
use crate::types::MenuItem;

/// Category and name filter for the menu.
///
/// Both parts are optional; an empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuFilter {
    /// Exact category, compared case-insensitively.
    pub category: Option<String>,
    /// Substring of the item name, case-insensitive.
    pub search: Option<String>,
}

impl MenuFilter {
    pub fn new(category: Option<&str>, search: Option<&str>) -> Self {
        MenuFilter {
            category: category.map(str::trim).filter(|c| !c.is_empty()).map(str::to_string),
            search: search.map(str::trim).filter(|s| !s.is_empty()).map(str::to_lowercase),
        }
    }

    pub fn matches(&self, item: &MenuItem) -> bool {
        let category_ok = self
            .category
            .as_deref()
            .map_or(true, |c| item.category.eq_ignore_ascii_case(c));
        let search_ok = self
            .search
            .as_deref()
            .map_or(true, |s| item.name.to_lowercase().contains(s));

        category_ok && search_ok
    }

    /// Items passing the filter, in their original order.
    pub fn apply<'a>(&self, items: &'a [MenuItem]) -> Vec<&'a MenuItem> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}

/// Distinct categories, sorted.
pub fn categories(items: &[MenuItem]) -> Vec<String> {
    let mut names: Vec<String> = items.iter().map(|i| i.category.clone()).collect();
    names.sort();
    names.dedup();
    names
}

/// Headline figures for the menu page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MenuStats {
    pub total_items: i64,
    pub categories: i64,
    pub available_items: i64,
    /// Mean list price, rounded half up to the paisa.
    pub average_price: Money,
}

impl MenuStats {
    pub fn from_items(items: &[MenuItem]) -> Self {
        let total_items = items.len() as i64;
        let price_sum: Money = items.iter().map(|i| i.price).sum();

        MenuStats {
            total_items,
            categories: categories(items).len() as i64,
            available_items: items.iter().filter(|i| i.available).count() as i64,
            average_price: average(price_sum, total_items),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TaxRate;
    use chrono::NaiveDate;

    fn dish(id: i64, name: &str, category: &str, cents: i64, available: bool) -> MenuItem {
        MenuItem {
            id,
            name: name.to_string(),
            category: category.to_string(),
            price: Money::from_cents(cents),
            tax_rate: TaxRate::STANDARD_GST,
            available,
            created_at: NaiveDate::from_ymd_opt(2026, 1, 1)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
        }
    }

    fn menu() -> Vec<MenuItem> {
        vec![
            dish(1, "Butter Naan", "Bread & Rice", 6000, true),
            dish(2, "Garlic Naan", "Bread & Rice", 8000, true),
            dish(3, "Butter Chicken", "Main Course", 32000, false),
            dish(4, "Masala Chai", "Beverages", 4000, true),
        ]
    }

    #[test]
    fn test_filter_by_category_and_name() {
        let items = menu();

        let naan = MenuFilter::new(None, Some("NAAN")).apply(&items);
        assert_eq!(naan.iter().map(|i| i.id).collect::<Vec<_>>(), vec![1, 2]);

        let butter_breads = MenuFilter::new(Some("bread & rice"), Some("butter")).apply(&items);
        assert_eq!(butter_breads.len(), 1);
        assert_eq!(butter_breads[0].name, "Butter Naan");

        assert_eq!(MenuFilter::new(Some("  "), None).apply(&items).len(), 4);
        assert!(MenuFilter::new(Some("Desserts"), None).apply(&items).is_empty());
    }

    #[test]
    fn test_categories_are_sorted_and_distinct() {
        assert_eq!(categories(&menu()), vec!["Beverages", "Bread & Rice", "Main Course"]);
    }

    #[test]
    fn test_menu_stats() {
        let stats = MenuStats::from_items(&menu());

        assert_eq!(stats.total_items, 4);
        assert_eq!(stats.categories, 3);
        assert_eq!(stats.available_items, 3);
        assert_eq!(stats.average_price.cents(), 12500);

        assert_eq!(MenuStats::from_items(&[]), MenuStats::default());
    }
}
