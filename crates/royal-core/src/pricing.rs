//! # Pricing
//!
//! Turns order lines and a discount into the four numbers printed on a bill.
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Order Totals                                    │
//! │                                                                         │
//! │  lines ──► Σ unit_price × quantity ──────────────► subtotal            │
//! │                                                       │                 │
//! │                         ┌─────────────────────────────┼──────────┐      │
//! │                         ▼                             ▼          │      │
//! │              subtotal × 5% (GST)          subtotal × discount%   │      │
//! │                         │                             │          │      │
//! │                         ▼                             ▼          │      │
//! │                    tax_amount                 discount_amount    │      │
//! │                         │                             │          │      │
//! │                         └──────► subtotal + tax − discount ◄─────┘      │
//! │                                          │                              │
//! │                                          ▼                              │
//! │                                     grand_total                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! GST is always the flat [`TaxRate::STANDARD_GST`] on the subtotal, and the
//! discount is taken off the pre-tax subtotal. Each amount is rounded half-up
//! to the paisa on its own; the grand total is then exact arithmetic on the
//! rounded parts, so the printed figures always add up.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::OrderValidationError;
use crate::money::Money;
use crate::types::{OrderLine, TaxRate};

/// The monetary summary of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderTotals {
    pub subtotal: Money,
    pub tax_amount: Money,
    pub discount_amount: Money,
    pub grand_total: Money,
}

/// Computes subtotal, GST, discount and grand total.
///
/// Pure and total: any input yields a result. The discount is not range
/// checked here (the cart session clamps it), and an out-of-range value
/// simply scales the discount; NaN counts as no discount. The grand total is
/// not clamped and may go negative for a discount above 105%.
///
/// ## Example
/// ```rust
/// use royal_core::money::Money;
/// use royal_core::pricing::compute_totals;
/// use royal_core::types::{OrderLine, TaxRate};
///
/// let lines = vec![
///     OrderLine::new(1, "Butter Naan", "Bread & Rice", Money::from_cents(10000), TaxRate::STANDARD_GST, 2),
///     OrderLine::new(2, "Masala Chai", "Beverages", Money::from_cents(5000), TaxRate::STANDARD_GST, 1),
/// ];
///
/// let totals = compute_totals(&lines, 10.0);
/// assert_eq!(totals.discount_amount.cents(), 2500);
/// assert_eq!(totals.grand_total.cents(), 23750);
/// ```
pub fn compute_totals(lines: &[OrderLine], discount_percent: f64) -> OrderTotals {
    let subtotal: Money = lines.iter().map(OrderLine::line_total).sum();
    let tax_amount = subtotal.calculate_tax(TaxRate::STANDARD_GST);

    let discount_amount = subtotal.percentage_of(discount_percent);

    let grand_total = subtotal
        .saturating_add(tax_amount)
        .saturating_sub(discount_amount);

    OrderTotals {
        subtotal,
        tax_amount,
        discount_amount,
        grand_total,
    }
}

/// Checks that an order may be billed.
///
/// Rules are applied in order and the first violation wins: the order must
/// have at least one line, then each line (in order) must have a positive
/// quantity and then a positive unit price.
pub fn validate_order(lines: &[OrderLine]) -> Result<(), OrderValidationError> {
    if lines.is_empty() {
        return Err(OrderValidationError::EmptyOrder);
    }

    for line in lines {
        if line.quantity <= 0 {
            return Err(OrderValidationError::InvalidQuantity(line.name.clone()));
        }
        if !line.unit_price.is_positive() {
            return Err(OrderValidationError::InvalidPrice(line.name.clone()));
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
