//! # Checkout
//!
//! Turns a cart session into a saved, billed order.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          checkout()                                     │
//! │                                                                         │
//! │  session.validate() ──✗──► CheckoutError::Validation (cart untouched)  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  totals = session.totals()                                             │
//! │  instant = clock.now()  ──► order_number = ORDyyyymmddHHMMSS           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  orders().save() ──UniqueViolation(order_number)──► one retry at a     │
//! │       │                                             later second        │
//! │       ├──✗──► CheckoutError::Persistence (cart untouched)              │
//! │       ▼                                                                 │
//! │  receipt text, session.reset(), CompletedOrder                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{Duration, Local, NaiveDateTime, Timelike};
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::error::DbError;
use crate::pool::Database;
use crate::repository::order::OrderRepository;
use royal_core::{
    format_receipt, CartSession, NewOrder, OrderHeader, OrderLine, OrderTotals,
    OrderValidationError, PaymentMethod,
};

// =============================================================================
// Clock
// =============================================================================

/// Source of the order timestamp.
pub trait Clock: Send + Sync {
    /// Current local wall-clock time.
    fn now(&self) -> NaiveDateTime;
}

/// The machine's local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock stuck at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Why an order could not be billed.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The cart breaks a billing rule; nothing was written.
    #[error("{0}")]
    Validation(#[from] OrderValidationError),

    /// The store refused the order; nothing was written.
    #[error("Could not save order: {0}")]
    Persistence(#[from] DbError),
}

// =============================================================================
// Checkout
// =============================================================================

/// A billed order, as returned to the counter.
#[derive(Debug, Clone, Serialize)]
pub struct CompletedOrder {
    pub id: i64,
    pub header: OrderHeader,
    pub totals: OrderTotals,
    pub lines: Vec<OrderLine>,
    pub receipt: String,
}

/// Validates, prices and saves the session's order, then clears the session.
///
/// The session is left exactly as it was on any error.
pub async fn checkout(
    db: &Database,
    clock: &dyn Clock,
    session: &mut CartSession,
    payment_method: PaymentMethod,
) -> Result<CompletedOrder, CheckoutError> {
    session.validate()?;

    let totals = session.totals();
    let first = whole_second(clock.now());
    let mut order = NewOrder {
        header: session.header(OrderRepository::order_number_at(first), payment_method, first),
        totals,
        lines: session.lines.clone(),
    };

    let orders = db.orders();
    let id = match orders.save(&order).await {
        Ok(id) => id,
        Err(err) if err.is_unique_violation_on("orders.order_number") => {
            let retry = whole_second(clock.now()).max(first + Duration::seconds(1));
            warn!(
                order_number = %order.header.order_number,
                "Order number already taken, retrying at a later second"
            );
            order.header.order_number = OrderRepository::order_number_at(retry);
            order.header.order_date = retry;
            orders.save(&order).await?
        }
        Err(err) => return Err(err.into()),
    };

    let receipt = format_receipt(&order.header, &order.lines, &order.totals);

    info!(
        order_id = id,
        order_number = %order.header.order_number,
        grand_total = %order.totals.grand_total,
        payment_method = %payment_method,
        "Checkout complete"
    );

    session.reset();

    Ok(CompletedOrder {
        id,
        header: order.header,
        totals: order.totals,
        lines: order.lines,
        receipt,
    })
}

/// Drops sub-second precision so the stored timestamp matches the order number.
fn whole_second(instant: NaiveDateTime) -> NaiveDateTime {
    instant.with_nanosecond(0).unwrap_or(instant)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DbConfig;
    use royal_core::{Money, NewMenuItem, ServiceMode};

    fn noon() -> NaiveDateTime {
        chrono::NaiveDate::from_ymd_opt(2026, 4, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    async fn db_with_dish() -> (Database, i64) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let id = db
            .menu()
            .add(&NewMenuItem::new("Paneer Tikka", "Appetizers", Money::from_cents(18000)))
            .await
            .unwrap();
        (db, id)
    }

    #[tokio::test]
    async fn test_checkout_saves_and_resets() {
        let (db, dish) = db_with_dish().await;
        let item = db.menu().get_by_id(dish).await.unwrap().unwrap();

        let mut session = CartSession::new(ServiceMode::DineIn);
        session.add_item(&item, 2).unwrap();
        session.set_discount_percent(10.0);

        let done = checkout(&db, &FixedClock(noon()), &mut session, PaymentMethod::Card)
            .await
            .unwrap();

        assert_eq!(done.header.order_number, "ORD20260401120000");
        assert_eq!(done.totals.subtotal.cents(), 36000);
        assert_eq!(done.totals.discount_amount.cents(), 3600);
        assert_eq!(done.totals.grand_total.cents(), 34200);
        assert!(done.receipt.contains("GRAND TOTAL:        ₹342.00"));
        assert!(session.is_empty());
        assert_eq!(session.discount_percent, 0.0);
    }

    #[tokio::test]
    async fn test_empty_session_is_rejected() {
        let (db, _) = db_with_dish().await;
        let mut session = CartSession::new(ServiceMode::Takeaway);

        let err = checkout(&db, &FixedClock(noon()), &mut session, PaymentMethod::Cash)
            .await
            .unwrap_err();

        assert!(matches!(err, CheckoutError::Validation(OrderValidationError::EmptyOrder)));
        assert_eq!(db.orders().count().await.unwrap(), 0);
    }

    #[test]
    fn test_whole_second() {
        let t = noon().with_nanosecond(750_000_000).unwrap();
        assert_eq!(whole_second(t), noon());
    }
}
