//! # Cart Session
//!
//! The order a cashier is building at the counter, before it is billed.
//!
//! ## Session Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Session Operations                              │
//! │                                                                         │
//! │  Counter Action           Method                  State Change          │
//! │  ──────────────           ──────                  ────────────          │
//! │                                                                         │
//! │  Pick dish ──────────────► add_item() ───────────► merge or push line  │
//! │  Change quantity ────────► update_quantity() ────► line.qty = n        │
//! │  Remove dish ────────────► remove_item() ────────► line dropped        │
//! │  Discount slider ────────► set_discount_percent()► clamped to 0..=50   │
//! │  Customer fields ────────► set_customer() ───────► name/phone/table    │
//! │  Checkout succeeded ─────► reset() ──────────────► fresh session       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Lines are unique by menu item id: picking the same dish twice increases
//! the quantity of the existing line. Each line freezes the menu item's
//! name and price at the moment it was added.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult, OrderValidationError};
use crate::pricing::{compute_totals, validate_order, OrderTotals};
use crate::types::{non_blank, MenuItem, OrderHeader, OrderLine, PaymentMethod, ServiceMode};
use crate::validation::validate_quantity;
use crate::{MAX_CART_ITEMS, MAX_DISCOUNT_PERCENT, MAX_ITEM_QUANTITY};

/// Optional customer details collected at the counter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CustomerDetails {
    pub name: Option<String>,
    pub phone: Option<String>,
    /// Only kept for dine-in orders.
    pub table: Option<String>,
}

/// One counter session's in-progress order.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartSession {
    #[ts(as = "String")]
    pub id: Uuid,
    pub service_mode: ServiceMode,
    pub lines: Vec<OrderLine>,
    pub customer: CustomerDetails,
    pub discount_percent: f64,
}

impl CartSession {
    /// Creates an empty session.
    pub fn new(service_mode: ServiceMode) -> Self {
        CartSession {
            id: Uuid::new_v4(),
            service_mode,
            lines: Vec::new(),
            customer: CustomerDetails::default(),
            discount_percent: 0.0,
        }
    }

    /// Adds a dish or increases the quantity of its existing line.
    pub fn add_item(&mut self, item: &MenuItem, quantity: i64) -> CoreResult<()> {
        validate_quantity(quantity)?;

        if !item.available {
            return Err(CoreError::ItemUnavailable(item.name.clone()));
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.menu_item_id == item.id) {
            let new_qty = line.quantity.saturating_add(quantity);
            if new_qty > MAX_ITEM_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested: new_qty,
                    max: MAX_ITEM_QUANTITY,
                });
            }
            line.quantity = new_qty;
            return Ok(());
        }

        if self.lines.len() >= MAX_CART_ITEMS {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_ITEMS,
            });
        }
        self.lines.push(OrderLine::from_menu_item(item, quantity));
        Ok(())
    }

    /// Sets a line's quantity. Zero removes the line.
    pub fn update_quantity(&mut self, menu_item_id: i64, quantity: i64) -> CoreResult<()> {
        if quantity == 0 {
            return self.remove_item(menu_item_id);
        }

        if quantity > MAX_ITEM_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: quantity,
                max: MAX_ITEM_QUANTITY,
            });
        }
        validate_quantity(quantity)?;

        let line = self
            .lines
            .iter_mut()
            .find(|l| l.menu_item_id == menu_item_id)
            .ok_or(CoreError::LineNotFound(menu_item_id))?;
        line.quantity = quantity;
        Ok(())
    }

    /// Removes a line by menu item id.
    pub fn remove_item(&mut self, menu_item_id: i64) -> CoreResult<()> {
        let initial_len = self.lines.len();
        self.lines.retain(|l| l.menu_item_id != menu_item_id);

        if self.lines.len() == initial_len {
            Err(CoreError::LineNotFound(menu_item_id))
        } else {
            Ok(())
        }
    }

    pub fn set_service_mode(&mut self, service_mode: ServiceMode) {
        self.service_mode = service_mode;
    }

    /// Records customer details; blank values count as absent.
    pub fn set_customer(&mut self, name: Option<&str>, phone: Option<&str>, table: Option<&str>) {
        self.customer = CustomerDetails {
            name: non_blank(name),
            phone: non_blank(phone),
            table: non_blank(table),
        };
    }

    /// Sets the discount, clamped to `0..=MAX_DISCOUNT_PERCENT`.
    ///
    /// Returns the value actually applied.
    pub fn set_discount_percent(&mut self, pct: f64) -> f64 {
        self.discount_percent = if pct.is_nan() {
            0.0
        } else {
            pct.clamp(0.0, MAX_DISCOUNT_PERCENT)
        };
        self.discount_percent
    }

    /// Clears lines, customer details and discount, and starts a new session id.
    ///
    /// The service mode carries over to the next order.
    pub fn reset(&mut self) {
        *self = CartSession::new(self.service_mode);
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines.
    pub fn item_count(&self) -> usize {
        self.lines.len()
    }

    /// Sum of all line quantities.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Live totals for the current lines and discount.
    pub fn totals(&self) -> OrderTotals {
        compute_totals(&self.lines, self.discount_percent)
    }

    /// Billing checks for the current lines.
    pub fn validate(&self) -> Result<(), OrderValidationError> {
        validate_order(&self.lines)
    }

    /// Builds the bill header for this session.
    ///
    /// The table number is dropped unless the order is dine-in.
    pub fn header(
        &self,
        order_number: impl Into<String>,
        payment_method: PaymentMethod,
        order_date: NaiveDateTime,
    ) -> OrderHeader {
        let table = match self.service_mode {
            ServiceMode::DineIn => self.customer.table.as_deref(),
            ServiceMode::Takeaway => None,
        };

        OrderHeader::new(order_number, self.service_mode, payment_method, order_date).with_customer(
            self.customer.name.as_deref(),
            self.customer.phone.as_deref(),
            table,
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::TaxRate;

    fn menu_item(id: i64, rupees: i64) -> MenuItem {
        MenuItem {
            id,
            name: format!("Dish {}", id),
            category: "Main Course".to_string(),
            price: Money::from_major_minor(rupees, 0),
            tax_rate: TaxRate::STANDARD_GST,
            available: true,
            created_at: chrono::NaiveDate::from_ymd_opt(2026, 1, 1)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn test_add_item() {
        let mut cart = CartSession::new(ServiceMode::DineIn);
        cart.add_item(&menu_item(1, 120), 2).unwrap();

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_quantity(), 2);
        assert_eq!(cart.totals().subtotal.cents(), 24000);
    }

    #[test]
    fn test_add_same_item_merges_lines() {
        let mut cart = CartSession::new(ServiceMode::DineIn);
        let item = menu_item(1, 120);

        cart.add_item(&item, 2).unwrap();
        cart.add_item(&item, 3).unwrap();

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_quantity(), 5);
    }

    #[test]
    fn test_line_keeps_price_at_time_of_adding() {
        let mut cart = CartSession::new(ServiceMode::Takeaway);
        let mut item = menu_item(1, 120);
        cart.add_item(&item, 1).unwrap();

        item.price = Money::from_major_minor(150, 0);
        cart.add_item(&item, 1).unwrap();

        assert_eq!(cart.lines[0].unit_price.cents(), 12000);
        assert_eq!(cart.totals().subtotal.cents(), 24000);
    }

    #[test]
    fn test_add_rejects_bad_input() {
        let mut cart = CartSession::new(ServiceMode::DineIn);
        let mut item = menu_item(1, 120);

        assert!(matches!(cart.add_item(&item, 0), Err(CoreError::Validation(_))));
        assert!(matches!(cart.add_item(&item, 1000), Err(CoreError::Validation(_))));

        cart.add_item(&item, 998).unwrap();
        assert!(matches!(
            cart.add_item(&item, 2),
            Err(CoreError::QuantityTooLarge { requested: 1000, .. })
        ));

        item.id = 2;
        item.available = false;
        assert!(matches!(cart.add_item(&item, 1), Err(CoreError::ItemUnavailable(_))));
    }

    #[test]
    fn test_cart_size_limit() {
        let mut cart = CartSession::new(ServiceMode::DineIn);
        for id in 0..MAX_CART_ITEMS as i64 {
            cart.add_item(&menu_item(id, 10), 1).unwrap();
        }
        assert!(matches!(
            cart.add_item(&menu_item(10_000, 10), 1),
            Err(CoreError::CartTooLarge { max: MAX_CART_ITEMS })
        ));
        // merging into an existing line is still fine
        assert!(cart.add_item(&menu_item(0, 10), 1).is_ok());
    }

    #[test]
    fn test_update_and_remove() {
        let mut cart = CartSession::new(ServiceMode::DineIn);
        cart.add_item(&menu_item(1, 100), 1).unwrap();
        cart.add_item(&menu_item(2, 50), 1).unwrap();

        cart.update_quantity(1, 4).unwrap();
        assert_eq!(cart.lines[0].quantity, 4);

        cart.update_quantity(2, 0).unwrap();
        assert_eq!(cart.item_count(), 1);

        assert!(matches!(cart.update_quantity(9, 1), Err(CoreError::LineNotFound(9))));
        assert!(matches!(cart.remove_item(2), Err(CoreError::LineNotFound(2))));
        assert!(cart.update_quantity(1, -3).is_err());
    }

    #[test]
    fn test_discount_is_clamped() {
        let mut cart = CartSession::new(ServiceMode::DineIn);
        assert_eq!(cart.set_discount_percent(75.0), 50.0);
        assert_eq!(cart.set_discount_percent(-5.0), 0.0);
        assert_eq!(cart.set_discount_percent(f64::NAN), 0.0);
        assert_eq!(cart.set_discount_percent(12.5), 12.5);
    }

    #[test]
    fn test_validate_empty_session() {
        let cart = CartSession::new(ServiceMode::DineIn);
        assert_eq!(cart.validate(), Err(OrderValidationError::EmptyOrder));
    }

    #[test]
    fn test_reset_keeps_service_mode() {
        let mut cart = CartSession::new(ServiceMode::Takeaway);
        let first_id = cart.id;
        cart.add_item(&menu_item(1, 100), 1).unwrap();
        cart.set_discount_percent(10.0);
        cart.set_customer(Some("Asha"), None, None);

        cart.reset();

        assert!(cart.is_empty());
        assert_eq!(cart.discount_percent, 0.0);
        assert_eq!(cart.customer, CustomerDetails::default());
        assert_eq!(cart.service_mode, ServiceMode::Takeaway);
        assert_ne!(cart.id, first_id);
    }

    #[test]
    fn test_header_drops_table_for_takeaway() {
        let date = chrono::NaiveDate::from_ymd_opt(2026, 1, 1)
            .unwrap()
            .and_hms_opt(13, 30, 0)
            .unwrap();
        let mut cart = CartSession::new(ServiceMode::DineIn);
        cart.set_customer(Some("Ravi"), Some(""), Some("T4"));

        let header = cart.header("ORD20260101133000", PaymentMethod::Upi, date);
        assert_eq!(header.table_number.as_deref(), Some("T4"));
        assert_eq!(header.customer_phone, None);

        cart.set_service_mode(ServiceMode::Takeaway);
        let header = cart.header("ORD20260101133000", PaymentMethod::Upi, date);
        assert_eq!(header.table_number, None);
        assert_eq!(header.customer_name.as_deref(), Some("Ravi"));
    }
}
