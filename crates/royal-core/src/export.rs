//! # Export
//!
//! CSV and JSON dumps of the menu, order history and report tables.
//!
//! Money columns are written as plain decimal rupees (`262.50`) so the files
//! open cleanly in a spreadsheet; JSON keeps the integer paise.

use serde::Serialize;

use crate::pricing::OrderTotals;
use crate::report::{DailySales, HourlySales, PaymentBreakdown, ServiceModeBreakdown, TopItem};
use crate::types::{MenuItem, Order, OrderLine};

const DELIMITER: char = ',';

// =============================================================================
// CSV
// =============================================================================

/// Menu items, one row per item.
pub fn menu_to_csv(items: &[MenuItem]) -> String {
    let rows = items.iter().map(|item| {
        vec![
            item.id.to_string(),
            item.name.clone(),
            item.category.clone(),
            item.price.to_decimal_string(),
            format!("{:.2}", item.tax_rate.percentage()),
            item.available.to_string(),
            item.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        ]
    });
    to_csv(
        &["id", "name", "category", "price", "gst_rate", "available", "created_at"],
        rows,
    )
}

/// Order headers as shown in bills history, one row per order.
pub fn orders_to_csv(orders: &[Order]) -> String {
    let rows = orders.iter().map(|order| {
        vec![
            order.order_number.clone(),
            order.order_date.format("%Y-%m-%d %H:%M:%S").to_string(),
            order.service_mode.to_string(),
            order.customer_name.clone().unwrap_or_default(),
            order.customer_phone.clone().unwrap_or_default(),
            order.table_number.clone().unwrap_or_default(),
            order.items.len().to_string(),
            order.subtotal.to_decimal_string(),
            order.tax_amount.to_decimal_string(),
            order.discount_amount.to_decimal_string(),
            order.grand_total.to_decimal_string(),
            order.payment_method.to_string(),
            order.status.to_string(),
        ]
    });
    to_csv(
        &[
            "order_number",
            "order_date",
            "service_mode",
            "customer_name",
            "customer_phone",
            "table_number",
            "items",
            "subtotal",
            "gst_amount",
            "discount_amount",
            "grand_total",
            "payment_method",
            "order_status",
        ],
        rows,
    )
}

pub fn daily_sales_to_csv(days: &[DailySales]) -> String {
    let rows = days.iter().map(|d| {
        vec![
            d.date.format("%Y-%m-%d").to_string(),
            d.total_orders.to_string(),
            d.total_sales.to_decimal_string(),
            d.avg_order_value.to_decimal_string(),
        ]
    });
    to_csv(&["date", "total_orders", "total_sales", "avg_order_value"], rows)
}

pub fn top_items_to_csv(items: &[TopItem]) -> String {
    let rows = items.iter().map(|i| {
        vec![
            i.item_name.clone(),
            i.category.clone(),
            i.total_quantity.to_string(),
            i.total_revenue.to_decimal_string(),
        ]
    });
    to_csv(&["item_name", "category", "total_quantity", "total_revenue"], rows)
}

pub fn payment_breakdown_to_csv(rows: &[PaymentBreakdown]) -> String {
    let rows = rows.iter().map(|p| {
        vec![
            p.payment_method.to_string(),
            p.order_count.to_string(),
            p.total_amount.to_decimal_string(),
        ]
    });
    to_csv(&["payment_method", "order_count", "total_amount"], rows)
}

pub fn service_modes_to_csv(rows: &[ServiceModeBreakdown]) -> String {
    let rows = rows.iter().map(|m| {
        vec![
            m.service_mode.to_string(),
            m.order_count.to_string(),
            m.total_revenue.to_decimal_string(),
            m.avg_order_value.to_decimal_string(),
        ]
    });
    to_csv(&["service_mode", "order_count", "total_revenue", "avg_order_value"], rows)
}

/// Hours are written as `HH:00`.
pub fn hourly_sales_to_csv(rows: &[HourlySales]) -> String {
    let rows = rows.iter().map(|h| {
        vec![
            format!("{:02}:00", h.hour),
            h.order_count.to_string(),
            h.total_sales.to_decimal_string(),
        ]
    });
    to_csv(&["hour", "order_count", "total_sales"], rows)
}

fn to_csv<I>(header: &[&str], rows: I) -> String
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut out = String::new();
    push_row(&mut out, header.iter().copied());
    for row in rows {
        push_row(&mut out, row.iter().map(String::as_str));
    }
    out
}

fn push_row<'a>(out: &mut String, fields: impl Iterator<Item = &'a str>) {
    let line: Vec<String> = fields.map(|f| escape_field(f, DELIMITER)).collect();
    out.push_str(&line.join(&DELIMITER.to_string()));
    out.push('\n');
}

fn escape_field(value: &str, delimiter: char) -> String {
    if value.contains(delimiter) || value.contains('"') || value.contains('\n') {
        let escaped = value.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        value.to_string()
    }
}

// =============================================================================
// JSON
// =============================================================================

/// One bill as a standalone document.
#[derive(Debug, Clone, Serialize)]
pub struct OrderDocument<'a> {
    pub order: &'a Order,
    pub items: &'a [OrderLine],
    pub totals: OrderTotals,
}

impl<'a> OrderDocument<'a> {
    pub fn new(order: &'a Order) -> Self {
        OrderDocument {
            order,
            items: &order.items,
            totals: order.totals(),
        }
    }
}

/// Pretty-printed JSON of any exportable value.
pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

/// `{ order, items, totals }` for a single bill.
pub fn order_to_json(order: &Order) -> serde_json::Result<String> {
    to_json_pretty(&OrderDocument::new(order))
}

// =============================================================================
// Unit Tests
// =============================================================================
