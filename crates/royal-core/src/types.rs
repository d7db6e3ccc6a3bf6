//! # Domain Types
//!
//! Core domain types used throughout Royal POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    MenuItem     │   │   OrderLine     │   │     Order       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (i64)       │──►│  menu_item_id   │──►│  id (i64)       │       │
//! │  │  name, category │   │  name snapshot  │   │  order_number   │       │
//! │  │  price          │   │  unit_price     │   │  totals         │       │
//! │  │  tax_rate       │   │  quantity       │   │  items (frozen) │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    TaxRate      │   │  ServiceMode    │   │ PaymentMethod   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  bps (u32)      │   │  Dine-In        │   │  Cash, Card     │       │
//! │  │  500 = 5%       │   │  Takeaway       │   │  UPI            │       │
//! │  └─────────────────┘   └─────────────────┘   │  Net Banking    │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity
//! Orders carry both a store-assigned integer `id` (used for relations) and
//! a human-readable `order_number` (printed on the bill).

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::pricing::OrderTotals;
use crate::validation::{
    validate_item_name, validate_price_cents, validate_tax_rate_bps, ValidationResult,
};

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// 1 basis point = 0.01%, so 500 bps = 5% GST.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// The flat GST rate applied to every bill (5%).
    pub const STANDARD_GST: TaxRate = TaxRate(500);

    /// Highest rate a menu item may carry (28%).
    pub const MAX: TaxRate = TaxRate(2800);

    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage, rounded to the nearest basis point.
    ///
    /// Negative and NaN inputs become zero; callers validate the range.
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display and the `gst_rate` column).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::STANDARD_GST
    }
}

// =============================================================================
// Menu Item
// =============================================================================

/// A dish or drink on the menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MenuItem {
    /// Store-assigned identifier.
    pub id: i64,

    /// Display name shown at the counter and on the bill.
    pub name: String,

    /// Free-form grouping ("Main Course", "Beverages", ...).
    pub category: String,

    /// Price per unit.
    pub price: Money,

    /// GST rate configured for this item.
    ///
    /// Stored and carried into order snapshots, but billing applies the flat
    /// [`TaxRate::STANDARD_GST`] to the subtotal.
    pub tax_rate: TaxRate,

    /// Only available items are offered for ordering.
    pub available: bool,

    /// When the item was added.
    #[ts(as = "String")]
    pub created_at: NaiveDateTime,
}

/// Fields for creating a menu item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewMenuItem {
    pub name: String,
    pub category: String,
    pub price: Money,
    pub tax_rate: TaxRate,
}

impl NewMenuItem {
    /// Creates a new item at the default 5% tax rate.
    pub fn new(name: impl Into<String>, category: impl Into<String>, price: Money) -> Self {
        NewMenuItem {
            name: name.into(),
            category: category.into(),
            price,
            tax_rate: TaxRate::default(),
        }
    }

    /// Overrides the tax rate.
    pub fn with_tax_rate(mut self, tax_rate: TaxRate) -> Self {
        self.tax_rate = tax_rate;
        self
    }

    /// Checks name, price and tax rate rules.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_menu_fields(&self.name, self.price, self.tax_rate)
    }
}

/// Full overwrite of a menu item's mutable fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MenuItemUpdate {
    pub name: String,
    pub category: String,
    pub price: Money,
    pub tax_rate: TaxRate,
    pub available: bool,
}

impl MenuItemUpdate {
    /// Starts an update from the item's current values.
    pub fn from_item(item: &MenuItem) -> Self {
        MenuItemUpdate {
            name: item.name.clone(),
            category: item.category.clone(),
            price: item.price,
            tax_rate: item.tax_rate,
            available: item.available,
        }
    }

    /// Checks name, price and tax rate rules.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_menu_fields(&self.name, self.price, self.tax_rate)
    }
}

fn validate_menu_fields(name: &str, price: Money, tax_rate: TaxRate) -> ValidationResult<()> {
    validate_item_name(name)?;
    validate_price_cents(price.cents())?;
    validate_tax_rate_bps(tax_rate.bps())?;
    Ok(())
}

// =============================================================================
// Service Mode
// =============================================================================

/// How the order is served. Only dine-in orders collect a table number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[ts(export)]
pub enum ServiceMode {
    #[serde(rename = "Dine-In")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "Dine-In"))]
    DineIn,
    #[serde(rename = "Takeaway")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "Takeaway"))]
    Takeaway,
}

impl ServiceMode {
    /// The label stored in the database and printed on the bill.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ServiceMode::DineIn => "Dine-In",
            ServiceMode::Takeaway => "Takeaway",
        }
    }
}

impl fmt::Display for ServiceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "dinein" => Ok(ServiceMode::DineIn),
            "takeaway" => Ok(ServiceMode::Takeaway),
            _ => Err(ValidationError::NotAllowed {
                field: "service mode".to_string(),
                allowed: vec!["Dine-In".to_string(), "Takeaway".to_string()],
            }),
        }
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// How the bill was settled. Recorded only; no gateway is involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[ts(export)]
pub enum PaymentMethod {
    #[serde(rename = "Cash")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "Cash"))]
    Cash,
    #[serde(rename = "Card")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "Card"))]
    Card,
    #[serde(rename = "UPI")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "UPI"))]
    Upi,
    #[serde(rename = "Net Banking")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "Net Banking"))]
    NetBanking,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Cash,
        PaymentMethod::Card,
        PaymentMethod::Upi,
        PaymentMethod::NetBanking,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Card => "Card",
            PaymentMethod::Upi => "UPI",
            PaymentMethod::NetBanking => "Net Banking",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "cash" => Ok(PaymentMethod::Cash),
            "card" => Ok(PaymentMethod::Card),
            "upi" => Ok(PaymentMethod::Upi),
            "netbanking" => Ok(PaymentMethod::NetBanking),
            _ => Err(ValidationError::NotAllowed {
                field: "payment method".to_string(),
                allowed: PaymentMethod::ALL
                    .iter()
                    .map(|m| m.as_str().to_string())
                    .collect(),
            }),
        }
    }
}

/// Lowercases and drops separators so "Dine-In", "dine in" and "DINEIN" agree.
fn normalize_label(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

// =============================================================================
// Order Status
// =============================================================================

/// Lifecycle status of a saved order. Orders are created completed and never
/// transition afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[ts(export)]
pub enum OrderStatus {
    #[default]
    #[serde(rename = "Completed")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "Completed"))]
    Completed,
}

impl OrderStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Order Line
// =============================================================================

/// One line of an order.
///
/// Uses the snapshot pattern: name, category, price and tax rate are copied
/// from the menu when the line is created, so a saved bill never changes when
/// the menu does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderLine {
    pub menu_item_id: i64,
    pub name: String,
    pub category: String,
    pub unit_price: Money,
    pub tax_rate: TaxRate,
    pub quantity: i64,
}

impl OrderLine {
    pub fn new(
        menu_item_id: i64,
        name: impl Into<String>,
        category: impl Into<String>,
        unit_price: Money,
        tax_rate: TaxRate,
        quantity: i64,
    ) -> Self {
        OrderLine {
            menu_item_id,
            name: name.into(),
            category: category.into(),
            unit_price,
            tax_rate,
            quantity,
        }
    }

    /// Freezes a menu item into a line.
    pub fn from_menu_item(item: &MenuItem, quantity: i64) -> Self {
        OrderLine::new(
            item.id,
            item.name.clone(),
            item.category.clone(),
            item.price,
            item.tax_rate,
            quantity,
        )
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Order Header
// =============================================================================

/// Everything printed above the item list of a bill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderHeader {
    pub order_number: String,
    pub service_mode: ServiceMode,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub table_number: Option<String>,
    pub payment_method: PaymentMethod,
    pub status: OrderStatus,
    #[ts(as = "String")]
    pub order_date: NaiveDateTime,
}

impl OrderHeader {
    /// Creates a completed-order header with no customer details.
    pub fn new(
        order_number: impl Into<String>,
        service_mode: ServiceMode,
        payment_method: PaymentMethod,
        order_date: NaiveDateTime,
    ) -> Self {
        OrderHeader {
            order_number: order_number.into(),
            service_mode,
            customer_name: None,
            customer_phone: None,
            table_number: None,
            payment_method,
            status: OrderStatus::Completed,
            order_date,
        }
    }

    /// Sets the optional customer fields; blank strings count as absent.
    pub fn with_customer(
        mut self,
        name: Option<&str>,
        phone: Option<&str>,
        table: Option<&str>,
    ) -> Self {
        self.customer_name = non_blank(name);
        self.customer_phone = non_blank(phone);
        self.table_number = non_blank(table);
        self
    }
}

/// Trims a string and maps empty to `None`.
pub fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

// =============================================================================
// Orders
// =============================================================================

/// An order ready to be persisted. Totals must already come from
/// [`crate::pricing::compute_totals`]; the store does not recompute them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewOrder {
    pub header: OrderHeader,
    pub totals: OrderTotals,
    pub lines: Vec<OrderLine>,
}

/// A saved order, with its frozen line snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Order {
    pub id: i64,
    pub order_number: String,
    pub service_mode: ServiceMode,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub table_number: Option<String>,
    pub subtotal: Money,
    pub tax_amount: Money,
    pub discount_amount: Money,
    pub grand_total: Money,
    pub payment_method: PaymentMethod,
    pub status: OrderStatus,
    #[ts(as = "String")]
    pub order_date: NaiveDateTime,
    pub items: Vec<OrderLine>,
}

impl Order {
    /// The bill header of this order.
    pub fn header(&self) -> OrderHeader {
        OrderHeader {
            order_number: self.order_number.clone(),
            service_mode: self.service_mode,
            customer_name: self.customer_name.clone(),
            customer_phone: self.customer_phone.clone(),
            table_number: self.table_number.clone(),
            payment_method: self.payment_method,
            status: self.status,
            order_date: self.order_date,
        }
    }

    /// Case-insensitive substring match on the order number or customer name.
    ///
    /// A blank term matches every order.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        term.is_empty()
            || self.order_number.to_lowercase().contains(&term)
            || self
                .customer_name
                .as_deref()
                .is_some_and(|name| name.to_lowercase().contains(&term))
    }

    /// The totals as they were stored at checkout.
    pub fn totals(&self) -> OrderTotals {
        OrderTotals {
            subtotal: self.subtotal,
            tax_amount: self.tax_amount,
            discount_amount: self.discount_amount,
            grand_total: self.grand_total,
        }
    }
}

/// Normalized, queryable copy of one order line (reporting only).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderItemRecord {
    pub id: i64,
    pub order_id: i64,
    pub item_name: String,
    pub category: String,
    pub quantity: i64,
    pub unit_price: Money,
    pub total_price: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================
