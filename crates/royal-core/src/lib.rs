//! # royal-core: Pure Business Logic for Royal POS
//!
//! Everything the counter needs to price, validate and print an order,
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Royal POS Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Dashboard / Counter front end                   │   │
//! │  │    Menu page ──► Order entry ──► Bills history ──► Reports      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ royal-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐  │   │
//! │  │   │  types  │ │ pricing │ │  cart   │ │ receipt │ │ export  │  │   │
//! │  │   │MenuItem │ │ totals  │ │ session │ │  bill   │ │ csv/json│  │   │
//! │  │   │ Order   │ │validate │ │  merge  │ │  text   │ │         │  │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └─────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    royal-db (Database Layer)                    │   │
//! │  │              SQLite queries, migrations, repositories           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (MenuItem, OrderLine, Order, ...)
//! - [`money`] - Money type with integer arithmetic (paise, no floating point)
//! - [`pricing`] - Order totals and order validation
//! - [`cart`] - The in-progress order of one counter session
//! - [`catalog`] - Menu filter and menu summary figures
//! - [`receipt`] - Plain-text bill formatting
//! - [`report`] - Sales summary row types
//! - [`export`] - CSV and JSON dumps
//! - [`error`] - Domain error types
//! - [`validation`] - Field-level validation
//!
//! ## Example Usage
//!
//! ```rust
//! use royal_core::money::Money;
//! use royal_core::pricing::compute_totals;
//! use royal_core::types::{OrderLine, TaxRate};
//!
//! let lines = vec![
//!     OrderLine::new(1, "Butter Naan", "Bread & Rice", Money::from_cents(10000), TaxRate::STANDARD_GST, 2),
//!     OrderLine::new(2, "Masala Chai", "Beverages", Money::from_cents(5000), TaxRate::STANDARD_GST, 1),
//! ];
//!
//! let totals = compute_totals(&lines, 0.0);
//! assert_eq!(totals.subtotal.cents(), 25000);
//! assert_eq!(totals.tax_amount.cents(), 1250);
//! assert_eq!(totals.grand_total.cents(), 26250);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod export;
pub mod money;
pub mod pricing;
pub mod receipt;
pub mod report;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::CartSession;
pub use catalog::{MenuFilter, MenuStats};
pub use error::{CoreError, OrderValidationError, ValidationError};
pub use money::Money;
pub use pricing::{compute_totals, validate_order, OrderTotals};
pub use receipt::format_receipt;
pub use report::{
    DailySales, HourlySales, PaymentBreakdown, SalesSummary, ServiceModeBreakdown, TopItem,
};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Currency symbol printed on bills and in `Money`'s `Display`.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Maximum distinct lines allowed in a single cart.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single line in the cart.
///
/// Guards against typing 1000 instead of 10 at the counter.
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Highest discount the counter may apply, in percent.
///
/// Enforced by the cart session, never by [`pricing::compute_totals`].
pub const MAX_DISCOUNT_PERCENT: f64 = 50.0;

/// Number of rows returned by the top-selling items report.
pub const TOP_ITEMS_LIMIT: usize = 10;
