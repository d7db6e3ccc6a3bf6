//! # Repository Module
//!
//! Database repository implementations for Royal POS.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Counter command                                                       │
//! │       │                                                                 │
//! │       │  db.menu().list_available()                                    │
//! │       ▼                                                                 │
//! │  MenuRepository / OrderRepository                                      │
//! │       │                                                                 │
//! │       │  SQL query → *Row (sqlx::FromRow) → domain type                │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rows are decoded into private `*Row` structs that mirror the columns, then
//! converted into royal-core types. The REAL money columns become integer
//! paise here and nowhere else.
//!
//! ## Available Repositories
//!
//! - [`menu::MenuRepository`] - Menu CRUD and the sample catalog
//! - [`order::OrderRepository`] - Order numbers, saving, history and reports

pub mod menu;
pub mod order;

use chrono::Local;
use royal_core::Money;

/// Format of every timestamp the application writes.
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Local wall-clock now, in the stored timestamp format.
///
/// Rows written by the application always carry this instead of SQLite's
/// `CURRENT_TIMESTAMP`, which is UTC.
pub(crate) fn local_timestamp() -> String {
    Local::now().naive_local().format(TIMESTAMP_FORMAT).to_string()
}

/// Paise → REAL rupees column value.
pub(crate) fn money_to_rupees(amount: Money) -> f64 {
    amount.cents() as f64 / 100.0
}

/// REAL rupees column value → paise, rounded to the nearest paisa.
pub(crate) fn rupees_to_money(rupees: f64) -> Money {
    Money::from_cents((rupees * 100.0).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rupee_conversion() {
        assert_eq!(money_to_rupees(Money::from_cents(26250)), 262.5);
        assert_eq!(rupees_to_money(262.5).cents(), 26250);
        // 0.1 + 0.2 style drift is absorbed by rounding
        assert_eq!(rupees_to_money(0.1 + 0.2).cents(), 30);
        assert_eq!(rupees_to_money(money_to_rupees(Money::from_cents(1999))).cents(), 1999);
    }
}
