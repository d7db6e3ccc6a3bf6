//! # Sales Reports
//!
//! Daily sales, top ten dishes, payment mix and service-mode split for a
//! date range. A single-day report adds the hourly pattern.

use anyhow::Result;
use clap::Args;

use royal_core::export::{
    daily_sales_to_csv, hourly_sales_to_csv, payment_breakdown_to_csv, service_modes_to_csv,
    top_items_to_csv,
};
use royal_core::SalesSummary;
use royal_db::Database;

use super::{print_json, today, DateRangeArgs, OutputFormat};

#[derive(Debug, Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub range: DateRangeArgs,

    /// csv prints the tables one after another
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

pub async fn run(db: &Database, args: ReportArgs) -> Result<()> {
    let (from, to) = args.range.resolve(today())?;
    let summary = db.orders().sales_summary(from, to).await?;

    match args.format {
        OutputFormat::Text => {
            println!("Sales report {from} to {to}");
            print!("{}", render_summary(&summary));
        }
        OutputFormat::Csv => {
            print!("{}", daily_sales_to_csv(&summary.daily));
            println!();
            print!("{}", top_items_to_csv(&summary.top_items));
            println!();
            print!("{}", payment_breakdown_to_csv(&summary.payment_breakdown));
            println!();
            print!("{}", service_modes_to_csv(&summary.service_modes));
            if !summary.hourly.is_empty() {
                println!();
                print!("{}", hourly_sales_to_csv(&summary.hourly));
            }
        }
        OutputFormat::Json => print_json(&summary)?,
    }
    Ok(())
}

fn render_summary(summary: &SalesSummary) -> String {
    if summary.is_empty() {
        return "No sales in this range.\n".to_string();
    }

    let mut out = String::new();
    out.push_str(&format!(
        "\nOrders: {}   Revenue: {}   Avg order: {}\n",
        summary.total_orders(),
        summary.total_revenue(),
        summary.avg_order_value()
    ));

    out.push_str("\nDaily sales\n");
    for day in &summary.daily {
        out.push_str(&format!(
            "  {}  {:>4} orders  {:>12}  avg {:>10}\n",
            day.date,
            day.total_orders,
            day.total_sales.to_string(),
            day.avg_order_value.to_string()
        ));
    }

    out.push_str("\nTop items\n");
    for (rank, item) in summary.top_items.iter().enumerate() {
        out.push_str(&format!(
            "  {:>2}. {:<28} {:<14} x{:<5} {:>12}\n",
            rank + 1,
            item.item_name,
            item.category,
            item.total_quantity,
            item.total_revenue.to_string()
        ));
    }

    out.push_str("\nPayment methods\n");
    for row in &summary.payment_breakdown {
        out.push_str(&format!(
            "  {:<12} {:>4} orders  {:>12}\n",
            row.payment_method.as_str(),
            row.order_count,
            row.total_amount.to_string()
        ));
    }

    out.push_str("\nService modes\n");
    for row in &summary.service_modes {
        out.push_str(&format!(
            "  {:<12} {:>4} orders  {:>12}  avg {:>10}\n",
            row.service_mode.as_str(),
            row.order_count,
            row.total_revenue.to_string(),
            row.avg_order_value.to_string()
        ));
    }

    if !summary.hourly.is_empty() {
        out.push_str("\nBy hour\n");
        for row in &summary.hourly {
            out.push_str(&format!(
                "  {:02}:00  {:>4} orders  {:>12}\n",
                row.hour,
                row.order_count,
                row.total_sales.to_string()
            ));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use royal_core::{
        DailySales, HourlySales, Money, PaymentBreakdown, PaymentMethod, ServiceMode,
        ServiceModeBreakdown, TopItem,
    };

    #[test]
    fn test_render_summary() {
        let summary = SalesSummary {
            daily: vec![DailySales::new(
                NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
                2,
                Money::from_cents(60900),
            )],
            top_items: vec![TopItem {
                item_name: "Butter Naan".to_string(),
                category: "Bread & Rice".to_string(),
                total_quantity: 6,
                total_revenue: Money::from_cents(36000),
            }],
            payment_breakdown: vec![PaymentBreakdown {
                payment_method: PaymentMethod::Upi,
                order_count: 2,
                total_amount: Money::from_cents(60900),
            }],
            service_modes: vec![ServiceModeBreakdown::new(
                ServiceMode::Takeaway,
                2,
                Money::from_cents(60900),
            )],
            hourly: Vec::new(),
        };

        let text = render_summary(&summary);
        assert!(text.contains("Orders: 2   Revenue: ₹609.00   Avg order: ₹304.50"));
        assert!(text.contains(" 1. Butter Naan"));
        assert!(text.contains("UPI"));
        assert!(text.contains("Takeaway"));
        assert!(!text.contains("By hour"));

        let single_day = SalesSummary {
            hourly: vec![HourlySales { hour: 9, order_count: 2, total_sales: Money::from_cents(60900) }],
            ..summary
        };
        assert!(render_summary(&single_day).contains("09:00     2 orders"));
    }

    #[test]
    fn test_render_empty_summary() {
        assert_eq!(render_summary(&SalesSummary::default()), "No sales in this range.\n");
    }
}
