//! # Order Repository
//!
//! Database operations for orders, order lines and sales reports.
//!
//! ## Save Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       save(NewOrder)                                    │
//! │                                                                         │
//! │  BEGIN                                                                 │
//! │   ├── INSERT orders       header + totals + items_json snapshot        │
//! │   ├── INSERT order_items  one row per line (reporting copy)            │
//! │   └── ...                                                              │
//! │  COMMIT  ── any failure before this point rolls everything back        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store persists totals exactly as given; pricing happens in
//! royal-core before an order ever reaches this module.
//!
//! ## Date Filters
//! History and report bounds are inclusive calendar dates compared against
//! `DATE(order_date)`, so `to = 2026-01-31` includes orders at 23:59:59.

use chrono::{Local, NaiveDate, NaiveDateTime};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use crate::repository::{money_to_rupees, rupees_to_money, TIMESTAMP_FORMAT};
use royal_core::{
    DailySales, HourlySales, Money, NewOrder, Order, OrderItemRecord, OrderLine, OrderStatus,
    PaymentBreakdown, PaymentMethod, SalesSummary, ServiceMode, ServiceModeBreakdown, TopItem,
    TOP_ITEMS_LIMIT,
};

const DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Row Types
// =============================================================================

/// An `orders` row as stored.
#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    id: i64,
    order_number: String,
    service_mode: ServiceMode,
    customer_name: Option<String>,
    customer_phone: Option<String>,
    table_number: Option<String>,
    subtotal: f64,
    gst_amount: f64,
    discount_amount: f64,
    grand_total: f64,
    payment_method: PaymentMethod,
    order_status: OrderStatus,
    order_date: NaiveDateTime,
    items_json: String,
}

impl TryFrom<OrderRow> for Order {
    type Error = DbError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        let items: Vec<OrderLine> = serde_json::from_str(&row.items_json)?;

        Ok(Order {
            id: row.id,
            order_number: row.order_number,
            service_mode: row.service_mode,
            customer_name: row.customer_name.filter(|s| !s.is_empty()),
            customer_phone: row.customer_phone.filter(|s| !s.is_empty()),
            table_number: row.table_number.filter(|s| !s.is_empty()),
            subtotal: rupees_to_money(row.subtotal),
            tax_amount: rupees_to_money(row.gst_amount),
            discount_amount: rupees_to_money(row.discount_amount),
            grand_total: rupees_to_money(row.grand_total),
            payment_method: row.payment_method,
            status: row.order_status,
            order_date: row.order_date,
            items,
        })
    }
}

/// An `order_items` row as stored.
#[derive(Debug, sqlx::FromRow)]
struct OrderItemRow {
    id: i64,
    order_id: i64,
    item_name: String,
    category: Option<String>,
    quantity: i64,
    unit_price: f64,
    total_price: f64,
}

impl From<OrderItemRow> for OrderItemRecord {
    fn from(row: OrderItemRow) -> Self {
        OrderItemRecord {
            id: row.id,
            order_id: row.order_id,
            item_name: row.item_name,
            category: row.category.unwrap_or_default(),
            quantity: row.quantity,
            unit_price: rupees_to_money(row.unit_price),
            total_price: rupees_to_money(row.total_price),
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct DailySalesRow {
    date: NaiveDate,
    total_orders: i64,
    total_sales_cents: i64,
}

#[derive(Debug, sqlx::FromRow)]
struct TopItemRow {
    item_name: String,
    category: String,
    total_quantity: i64,
    total_revenue_cents: i64,
}

#[derive(Debug, sqlx::FromRow)]
struct PaymentBreakdownRow {
    payment_method: PaymentMethod,
    order_count: i64,
    total_amount_cents: i64,
}

#[derive(Debug, sqlx::FromRow)]
struct ServiceModeRow {
    service_mode: ServiceMode,
    order_count: i64,
    total_revenue_cents: i64,
}

#[derive(Debug, sqlx::FromRow)]
struct HourlySalesRow {
    hour: i64,
    order_count: i64,
    total_sales_cents: i64,
}

const SELECT_ORDER: &str = r#"
    SELECT
        id, order_number, service_mode, customer_name, customer_phone,
        table_number, subtotal, gst_amount, discount_amount, grand_total,
        payment_method, order_status, order_date, items_json
    FROM orders
"#;

// =============================================================================
// Repository
// =============================================================================

/// Repository for order database operations.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: SqlitePool,
}

impl OrderRepository {
    /// Creates a new OrderRepository.
    pub fn new(pool: SqlitePool) -> Self {
        OrderRepository { pool }
    }

    /// Order number for the current local time.
    pub fn generate_order_number() -> String {
        Self::order_number_at(Local::now().naive_local())
    }

    /// Order number for a given instant: `ORD` + `YYYYMMDDHHMMSS`.
    ///
    /// Two orders in the same second get the same number; the UNIQUE
    /// constraint on `orders.order_number` catches that.
    pub fn order_number_at(instant: NaiveDateTime) -> String {
        format!("ORD{}", instant.format("%Y%m%d%H%M%S"))
    }

    /// Persists an order and its lines in one transaction.
    ///
    /// ## Returns
    /// * `Ok(id)` - The new order id
    /// * `Err(DbError::UniqueViolation)` - The order number is taken
    /// * `Err(DbError::CheckViolation)` - A line has quantity ≤ 0
    ///
    /// Nothing is written on any error.
    pub async fn save(&self, order: &NewOrder) -> DbResult<i64> {
        let header = &order.header;
        let items_json = serde_json::to_string(&order.lines)?;

        debug!(
            order_number = %header.order_number,
            lines = order.lines.len(),
            grand_total = %order.totals.grand_total,
            "Saving order"
        );

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        let result = sqlx::query(
            r#"
            INSERT INTO orders (
                order_number, service_mode, customer_name, customer_phone,
                table_number, subtotal, gst_amount, discount_amount,
                grand_total, payment_method, order_status, order_date,
                items_json
            ) VALUES (
                ?1, ?2, ?3, ?4,
                ?5, ?6, ?7, ?8,
                ?9, ?10, ?11, ?12,
                ?13
            )
            "#,
        )
        .bind(&header.order_number)
        .bind(header.service_mode)
        .bind(&header.customer_name)
        .bind(&header.customer_phone)
        .bind(&header.table_number)
        .bind(money_to_rupees(order.totals.subtotal))
        .bind(money_to_rupees(order.totals.tax_amount))
        .bind(money_to_rupees(order.totals.discount_amount))
        .bind(money_to_rupees(order.totals.grand_total))
        .bind(header.payment_method)
        .bind(header.status)
        .bind(header.order_date.format(TIMESTAMP_FORMAT).to_string())
        .bind(&items_json)
        .execute(&mut *tx)
        .await?;

        let order_id = result.last_insert_rowid();

        for line in &order.lines {
            sqlx::query(
                r#"
                INSERT INTO order_items (
                    order_id, item_name, category, quantity, unit_price, total_price
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                "#,
            )
            .bind(order_id)
            .bind(&line.name)
            .bind(&line.category)
            .bind(line.quantity)
            .bind(money_to_rupees(line.unit_price))
            .bind(money_to_rupees(line.line_total()))
            .execute(&mut *tx)
            .await?;
        }

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        info!(order_id, order_number = %header.order_number, "Order saved");
        Ok(order_id)
    }

    /// Orders within inclusive date bounds, newest first.
    ///
    /// Either bound may be omitted.
    pub async fn list(&self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> DbResult<Vec<Order>> {
        debug!(?from, ?to, "Listing orders");

        let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new(SELECT_ORDER);
        let mut has_where = false;

        if let Some(from) = from {
            qb.push(" WHERE DATE(order_date) >= ");
            qb.push_bind(from.format(DATE_FORMAT).to_string());
            has_where = true;
        }
        if let Some(to) = to {
            qb.push(if has_where { " AND " } else { " WHERE " });
            qb.push("DATE(order_date) <= ");
            qb.push_bind(to.format(DATE_FORMAT).to_string());
        }
        qb.push(" ORDER BY order_date DESC, id DESC");

        let rows = qb
            .build_query_as::<OrderRow>()
            .fetch_all(&self.pool)
            .await?;

        debug!(count = rows.len(), "Orders listed");
        rows.into_iter().map(Order::try_from).collect()
    }

    /// Gets an order by its printed number.
    pub async fn get_by_number(&self, order_number: &str) -> DbResult<Option<Order>> {
        let sql = format!("{SELECT_ORDER} WHERE order_number = ?1");
        let row = sqlx::query_as::<_, OrderRow>(&sql)
            .bind(order_number.trim())
            .fetch_optional(&self.pool)
            .await?;

        row.map(Order::try_from).transpose()
    }

    /// Normalized line records of one order, in insertion order.
    pub async fn items_for(&self, order_id: i64) -> DbResult<Vec<OrderItemRecord>> {
        let rows = sqlx::query_as::<_, OrderItemRow>(
            r#"
            SELECT id, order_id, item_name, category, quantity, unit_price, total_price
            FROM order_items
            WHERE order_id = ?1
            ORDER BY id
            "#,
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(OrderItemRecord::from).collect())
    }

    /// Daily sales, best sellers, payment mix and service-mode split for an
    /// inclusive date range. A single-day range also gets the hourly pattern.
    pub async fn sales_summary(&self, from: NaiveDate, to: NaiveDate) -> DbResult<SalesSummary> {
        let service_modes = self.service_mode_breakdown(from, to).await?;
        let hourly = if from == to {
            self.hourly_sales(from).await?
        } else {
            Vec::new()
        };

        let from = from.format(DATE_FORMAT).to_string();
        let to = to.format(DATE_FORMAT).to_string();

        debug!(%from, %to, "Building sales summary");

        // Each stored amount is rounded to paise before summing so the
        // aggregate is exact integer arithmetic.
        let daily = sqlx::query_as::<_, DailySalesRow>(
            r#"
            SELECT
                DATE(order_date) AS date,
                COUNT(*) AS total_orders,
                SUM(CAST(ROUND(grand_total * 100) AS INTEGER)) AS total_sales_cents
            FROM orders
            WHERE DATE(order_date) BETWEEN ?1 AND ?2
            GROUP BY DATE(order_date)
            ORDER BY date
            "#,
        )
        .bind(&from)
        .bind(&to)
        .fetch_all(&self.pool)
        .await?;

        let top_items = sqlx::query_as::<_, TopItemRow>(
            r#"
            SELECT
                oi.item_name AS item_name,
                COALESCE(oi.category, '') AS category,
                SUM(oi.quantity) AS total_quantity,
                SUM(CAST(ROUND(oi.total_price * 100) AS INTEGER)) AS total_revenue_cents
            FROM order_items oi
            JOIN orders o ON oi.order_id = o.id
            WHERE DATE(o.order_date) BETWEEN ?1 AND ?2
            GROUP BY oi.item_name, oi.category
            ORDER BY total_quantity DESC, oi.item_name ASC
            LIMIT ?3
            "#,
        )
        .bind(&from)
        .bind(&to)
        .bind(TOP_ITEMS_LIMIT as i64)
        .fetch_all(&self.pool)
        .await?;

        let payment_breakdown = sqlx::query_as::<_, PaymentBreakdownRow>(
            r#"
            SELECT
                payment_method,
                COUNT(*) AS order_count,
                SUM(CAST(ROUND(grand_total * 100) AS INTEGER)) AS total_amount_cents
            FROM orders
            WHERE DATE(order_date) BETWEEN ?1 AND ?2
            GROUP BY payment_method
            ORDER BY total_amount_cents DESC, payment_method ASC
            "#,
        )
        .bind(&from)
        .bind(&to)
        .fetch_all(&self.pool)
        .await?;

        Ok(SalesSummary {
            daily: daily
                .into_iter()
                .map(|r| DailySales::new(r.date, r.total_orders, Money::from_cents(r.total_sales_cents)))
                .collect(),
            top_items: top_items
                .into_iter()
                .map(|r| TopItem {
                    item_name: r.item_name,
                    category: r.category,
                    total_quantity: r.total_quantity,
                    total_revenue: Money::from_cents(r.total_revenue_cents),
                })
                .collect(),
            payment_breakdown: payment_breakdown
                .into_iter()
                .map(|r| PaymentBreakdown {
                    payment_method: r.payment_method,
                    order_count: r.order_count,
                    total_amount: Money::from_cents(r.total_amount_cents),
                })
                .collect(),
            service_modes,
            hourly,
        })
    }

    /// Order count, revenue and average bill per service mode, revenue first.
    pub async fn service_mode_breakdown(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> DbResult<Vec<ServiceModeBreakdown>> {
        debug!(%from, %to, "Service mode breakdown");

        let rows = sqlx::query_as::<_, ServiceModeRow>(
            r#"
            SELECT
                service_mode,
                COUNT(*) AS order_count,
                SUM(CAST(ROUND(grand_total * 100) AS INTEGER)) AS total_revenue_cents
            FROM orders
            WHERE DATE(order_date) BETWEEN ?1 AND ?2
            GROUP BY service_mode
            ORDER BY total_revenue_cents DESC, service_mode ASC
            "#,
        )
        .bind(from.format(DATE_FORMAT).to_string())
        .bind(to.format(DATE_FORMAT).to_string())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| {
                ServiceModeBreakdown::new(
                    r.service_mode,
                    r.order_count,
                    Money::from_cents(r.total_revenue_cents),
                )
            })
            .collect())
    }

    /// Orders and sales per clock hour of one day. Hours without orders are
    /// left out.
    pub async fn hourly_sales(&self, day: NaiveDate) -> DbResult<Vec<HourlySales>> {
        debug!(%day, "Hourly sales");

        let rows = sqlx::query_as::<_, HourlySalesRow>(
            r#"
            SELECT
                CAST(strftime('%H', order_date) AS INTEGER) AS hour,
                COUNT(*) AS order_count,
                SUM(CAST(ROUND(grand_total * 100) AS INTEGER)) AS total_sales_cents
            FROM orders
            WHERE DATE(order_date) = ?1
            GROUP BY hour
            ORDER BY hour
            "#,
        )
        .bind(day.format(DATE_FORMAT).to_string())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| HourlySales {
                hour: r.hour,
                order_count: r.order_count,
                total_sales: Money::from_cents(r.total_sales_cents),
            })
            .collect())
    }

    /// Counts all orders (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Database, DbConfig};
    use royal_core::{compute_totals, OrderHeader, TaxRate};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn at(day: u32, h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, day)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, day).unwrap()
    }

    fn line(id: i64, name: &str, rupees: i64, quantity: i64) -> OrderLine {
        OrderLine::new(
            id,
            name,
            "Main Course",
            Money::from_major_minor(rupees, 0),
            TaxRate::STANDARD_GST,
            quantity,
        )
    }

    fn new_order(instant: NaiveDateTime, payment: PaymentMethod, lines: Vec<OrderLine>) -> NewOrder {
        NewOrder {
            header: OrderHeader::new(
                OrderRepository::order_number_at(instant),
                ServiceMode::DineIn,
                payment,
                instant,
            ),
            totals: compute_totals(&lines, 0.0),
            lines,
        }
    }

    #[test]
    fn test_order_number_format() {
        assert_eq!(OrderRepository::order_number_at(at(5, 9, 7, 3)), "ORD20260305090703");
        let generated = OrderRepository::generate_order_number();
        assert_eq!(generated.len(), 17);
        assert!(generated.starts_with("ORD"));
    }

    #[tokio::test]
    async fn test_save_and_get_by_number() {
        let db = test_db().await;
        let order = new_order(
            at(5, 19, 30, 0),
            PaymentMethod::Upi,
            vec![line(1, "Butter Chicken", 320, 1), line(2, "Garlic Naan", 80, 2)],
        );

        let id = db.orders().save(&order).await.unwrap();
        let saved = db.orders().get_by_number("ORD20260305193000").await.unwrap().unwrap();

        assert_eq!(saved.id, id);
        assert_eq!(saved.totals(), order.totals);
        assert_eq!(saved.items, order.lines);
        assert_eq!(saved.order_date, at(5, 19, 30, 0));
        assert_eq!(saved.payment_method, PaymentMethod::Upi);
        assert_eq!(saved.status, OrderStatus::Completed);
        assert_eq!(saved.customer_name, None);

        let records = db.orders().items_for(id).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].item_name, "Garlic Naan");
        assert_eq!(records[1].total_price.cents(), 16000);
    }

    #[tokio::test]
    async fn test_duplicate_order_number() {
        let db = test_db().await;
        let order = new_order(at(5, 12, 0, 0), PaymentMethod::Cash, vec![line(1, "Kulfi", 90, 1)]);

        db.orders().save(&order).await.unwrap();
        let err = db.orders().save(&order).await.unwrap_err();

        assert!(err.is_unique_violation_on("orders.order_number"));
        assert_eq!(db.orders().count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_failed_line_rolls_back_order() {
        let db = test_db().await;
        let mut order = new_order(
            at(5, 12, 0, 0),
            PaymentMethod::Cash,
            vec![line(1, "Kulfi", 90, 1), line(2, "Rasgulla", 100, 1)],
        );
        order.lines[1].quantity = 0;

        let err = db.orders().save(&order).await.unwrap_err();

        assert!(matches!(err, DbError::CheckViolation { .. }));
        assert_eq!(db.orders().count().await.unwrap(), 0);
        assert!(db.orders().items_for(1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_date_bounds_are_inclusive() {
        let db = test_db().await;
        let orders = db.orders();
        for instant in [at(1, 10, 0, 0), at(2, 0, 0, 0), at(2, 23, 59, 59), at(3, 8, 0, 0)] {
            orders
                .save(&new_order(instant, PaymentMethod::Cash, vec![line(1, "Kulfi", 90, 1)]))
                .await
                .unwrap();
        }

        let all = orders.list(None, None).await.unwrap();
        assert_eq!(all.len(), 4);
        assert_eq!(all[0].order_date, at(3, 8, 0, 0));
        assert_eq!(all[3].order_date, at(1, 10, 0, 0));

        let second = orders.list(Some(date(2)), Some(date(2))).await.unwrap();
        assert_eq!(second.len(), 2);
        assert_eq!(second[0].order_date, at(2, 23, 59, 59));

        assert_eq!(orders.list(Some(date(2)), None).await.unwrap().len(), 3);
        assert_eq!(orders.list(None, Some(date(1))).await.unwrap().len(), 1);
        assert!(orders.list(Some(date(4)), None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_sales_summary() {
        let db = test_db().await;
        let orders = db.orders();
        orders
            .save(&new_order(
                at(1, 12, 0, 0),
                PaymentMethod::Cash,
                vec![line(1, "Butter Naan", 60, 4), line(2, "Dal Makhani", 220, 1)],
            ))
            .await
            .unwrap();
        orders
            .save(&new_order(
                at(1, 20, 0, 0),
                PaymentMethod::Card,
                vec![line(1, "Butter Naan", 60, 2)],
            ))
            .await
            .unwrap();
        orders
            .save(&new_order(
                at(2, 13, 0, 0),
                PaymentMethod::Cash,
                vec![line(3, "Biryani (Veg)", 280, 1)],
            ))
            .await
            .unwrap();
        // outside the range
        orders
            .save(&new_order(at(9, 13, 0, 0), PaymentMethod::Upi, vec![line(3, "Kulfi", 90, 50)]))
            .await
            .unwrap();

        let summary = orders.sales_summary(date(1), date(2)).await.unwrap();

        assert_eq!(summary.daily.len(), 2);
        assert_eq!(summary.daily[0].date, date(1));
        assert_eq!(summary.daily[0].total_orders, 2);
        // (460 + 23) + (120 + 6)
        assert_eq!(summary.daily[0].total_sales.cents(), 60900);
        assert_eq!(summary.daily[0].avg_order_value.cents(), 30450);

        assert_eq!(summary.top_items[0].item_name, "Butter Naan");
        assert_eq!(summary.top_items[0].total_quantity, 6);
        assert_eq!(summary.top_items[0].total_revenue.cents(), 36000);
        assert!(summary.top_items.iter().all(|i| i.item_name != "Kulfi"));

        assert_eq!(summary.payment_breakdown.len(), 2);
        let cash = summary
            .payment_breakdown
            .iter()
            .find(|p| p.payment_method == PaymentMethod::Cash)
            .unwrap();
        assert_eq!(cash.order_count, 2);
        assert_eq!(summary.total_orders(), 3);

        assert_eq!(summary.service_modes.len(), 1);
        assert_eq!(summary.service_modes[0].service_mode, ServiceMode::DineIn);
        assert_eq!(summary.service_modes[0].order_count, 3);
        // 609.00 + 294.00
        assert_eq!(summary.service_modes[0].total_revenue.cents(), 90300);
        assert_eq!(summary.service_modes[0].avg_order_value.cents(), 30100);

        // multi-day ranges carry no hourly pattern
        assert!(summary.hourly.is_empty());
    }

    #[tokio::test]
    async fn test_service_modes_and_hourly_for_one_day() {
        let db = test_db().await;
        let orders = db.orders();

        let mut takeaway = new_order(at(4, 9, 10, 0), PaymentMethod::Upi, vec![line(1, "Samosa", 40, 5)]);
        takeaway.header.service_mode = ServiceMode::Takeaway;
        orders.save(&takeaway).await.unwrap();
        for instant in [at(4, 9, 45, 0), at(4, 21, 5, 0)] {
            orders
                .save(&new_order(instant, PaymentMethod::Cash, vec![line(2, "Thali", 300, 1)]))
                .await
                .unwrap();
        }
        // next day, excluded
        orders
            .save(&new_order(at(5, 9, 0, 0), PaymentMethod::Cash, vec![line(2, "Thali", 300, 1)]))
            .await
            .unwrap();

        let summary = orders.sales_summary(date(4), date(4)).await.unwrap();

        let modes: Vec<_> = summary
            .service_modes
            .iter()
            .map(|m| (m.service_mode, m.order_count, m.total_revenue.cents()))
            .collect();
        assert_eq!(modes, vec![(ServiceMode::DineIn, 2, 63000), (ServiceMode::Takeaway, 1, 21000)]);

        let hours: Vec<_> = summary
            .hourly
            .iter()
            .map(|h| (h.hour, h.order_count, h.total_sales.cents()))
            .collect();
        assert_eq!(hours, vec![(9, 2, 52500), (21, 1, 31500)]);
    }

    #[tokio::test]
    async fn test_sales_summary_empty_range() {
        let db = test_db().await;
        let summary = db.orders().sales_summary(date(1), date(31)).await.unwrap();

        assert!(summary.is_empty());
        assert!(summary.top_items.is_empty());
        assert!(summary.payment_breakdown.is_empty());
        assert!(summary.service_modes.is_empty());
    }
}
