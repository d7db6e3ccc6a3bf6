//! # Sales Report Types
//!
//! Row types for the reports view. The aggregation itself runs as SQL in
//! royal-db; these types only carry the results.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{PaymentMethod, ServiceMode};

/// Orders and revenue for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DailySales {
    #[ts(as = "String")]
    pub date: NaiveDate,
    pub total_orders: i64,
    pub total_sales: Money,
    pub avg_order_value: Money,
}

impl DailySales {
    /// Builds a day row, deriving the average order value.
    pub fn new(date: NaiveDate, total_orders: i64, total_sales: Money) -> Self {
        DailySales {
            date,
            total_orders,
            total_sales,
            avg_order_value: average(total_sales, total_orders),
        }
    }
}

/// One of the best-selling dishes in a period, by quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TopItem {
    pub item_name: String,
    pub category: String,
    pub total_quantity: i64,
    pub total_revenue: Money,
}

/// Orders and revenue per payment method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PaymentBreakdown {
    pub payment_method: PaymentMethod,
    pub order_count: i64,
    pub total_amount: Money,
}

/// Orders and revenue per service mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ServiceModeBreakdown {
    pub service_mode: ServiceMode,
    pub order_count: i64,
    pub total_revenue: Money,
    pub avg_order_value: Money,
}

impl ServiceModeBreakdown {
    pub fn new(service_mode: ServiceMode, order_count: i64, total_revenue: Money) -> Self {
        ServiceModeBreakdown {
            service_mode,
            order_count,
            total_revenue,
            avg_order_value: average(total_revenue, order_count),
        }
    }
}

/// Orders and revenue for one clock hour (0-23) of a single day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HourlySales {
    pub hour: i64,
    pub order_count: i64,
    pub total_sales: Money,
}

/// Everything the reports view shows for a date range.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SalesSummary {
    /// Ascending by date.
    pub daily: Vec<DailySales>,
    /// At most [`crate::TOP_ITEMS_LIMIT`] rows, quantity descending.
    pub top_items: Vec<TopItem>,
    pub payment_breakdown: Vec<PaymentBreakdown>,
    /// Revenue descending.
    pub service_modes: Vec<ServiceModeBreakdown>,
    /// Only filled for a single-day range; ascending by hour.
    pub hourly: Vec<HourlySales>,
}

impl SalesSummary {
    pub fn total_orders(&self) -> i64 {
        self.daily.iter().map(|d| d.total_orders).sum()
    }

    pub fn total_revenue(&self) -> Money {
        self.daily.iter().map(|d| d.total_sales).sum()
    }

    /// Revenue per order over the whole range.
    pub fn avg_order_value(&self) -> Money {
        average(self.total_revenue(), self.total_orders())
    }

    pub fn is_empty(&self) -> bool {
        self.daily.is_empty()
    }
}

/// Integer division rounded half up; zero when there are no orders.
pub(crate) fn average(total: Money, count: i64) -> Money {
    if count <= 0 {
        return Money::zero();
    }
    let cents = total.cents() as i128;
    let count = count as i128;
    let half = count / 2;
    let avg = if cents >= 0 {
        (cents + half) / count
    } else {
        (cents - half) / count
    };
    Money::from_cents(avg as i64)
}
