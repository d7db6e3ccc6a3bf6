//! # Bills History
//!
//! Saved orders in a date range, optionally narrowed by order number or
//! customer name, and reprinting a single bill.

use anyhow::{bail, Result};
use clap::Args;
use tracing::debug;

use royal_core::export::{order_to_json, orders_to_csv};
use royal_core::{format_receipt, Money, Order};
use royal_db::Database;

use super::{print_json, today, DateRangeArgs, OutputFormat};

#[derive(Debug, Args)]
pub struct HistoryArgs {
    #[command(flatten)]
    pub range: DateRangeArgs,

    /// Part of an order number or customer name
    #[arg(long)]
    pub search: Option<String>,

    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct BillArgs {
    /// Printed order number, e.g. ORD20260401193005
    pub order_number: String,

    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

pub async fn run(db: &Database, args: HistoryArgs) -> Result<()> {
    let (from, to) = args.range.resolve(today())?;
    let orders = db.orders().list(Some(from), Some(to)).await?;
    let orders = filter_orders(orders, args.search.as_deref());
    debug!(%from, %to, count = orders.len(), "History loaded");

    match args.format {
        OutputFormat::Text => {
            println!("Bills from {from} to {to}");
            print!("{}", render_history(&orders));
        }
        OutputFormat::Csv => print!("{}", orders_to_csv(&orders)),
        OutputFormat::Json => print_json(&orders)?,
    }
    Ok(())
}

pub async fn reprint(db: &Database, args: BillArgs) -> Result<()> {
    let Some(order) = db.orders().get_by_number(&args.order_number).await? else {
        bail!("Order {} not found", args.order_number.trim());
    };

    match args.format {
        OutputFormat::Json => println!("{}", order_to_json(&order)?),
        _ => print!("{}", format_receipt(&order.header(), &order.items, &order.totals())),
    }
    Ok(())
}

fn filter_orders(orders: Vec<Order>, search: Option<&str>) -> Vec<Order> {
    match search {
        Some(term) => orders.into_iter().filter(|o| o.matches_search(term)).collect(),
        None => orders,
    }
}

fn render_history(orders: &[Order]) -> String {
    if orders.is_empty() {
        return "No bills in this range.\n".to_string();
    }

    let mut out = format!(
        "{:<18} {:<19} {:<9} {:<20} {:<12} {:>12}\n",
        "Order", "Date", "Mode", "Customer", "Payment", "Total"
    );
    for order in orders {
        out.push_str(&format!(
            "{:<18} {:<19} {:<9} {:<20} {:<12} {:>12}\n",
            order.order_number,
            order.order_date.format("%Y-%m-%d %H:%M:%S").to_string(),
            order.service_mode.as_str(),
            order.customer_name.as_deref().unwrap_or("Walk-in Customer"),
            order.payment_method.as_str(),
            order.grand_total.to_string(),
        ));
    }

    let revenue: Money = orders.iter().map(|o| o.grand_total).sum();
    out.push_str(&format!("\n{} bill(s), total {}\n", orders.len(), revenue));
    out
}
