//! # Receipt
//!
//! Plain-text bill, printed at checkout and on reprint from history.
//!
//! ## Layout
//! ```text
//! ================================================
//!                 ROYAL RESTAURANT
//!             Premium Dining Experience
//! ================================================
//! Order Number: ORD20260115193045
//! Service Mode: Dine-In
//! Date & Time: 2026-01-15 19:30:45
//!
//! Customer: Walk-in Customer
//! Phone: N/A
//! Table: 7                       (dine-in only)
//! ================================================
//!                  ORDER DETAILS
//! ================================================
//! Butter Naan
//! Qty: 2 x ₹100.00 = ₹200.00
//! ...
//! ================================================
//!                 PAYMENT SUMMARY
//! ================================================
//! Subtotal:           ₹250.00
//! GST (5%):           ₹12.50
//! Discount:          -₹0.00
//! ------------------------------------------------
//! GRAND TOTAL:        ₹262.50
//!
//! Payment Method:     Cash
//! Status:             Completed
//! ================================================
//!           Thank you for dining with us!
//!      Visit us again for premium experience
//! ================================================
//! ```

use crate::pricing::OrderTotals;
use crate::types::{OrderHeader, OrderLine, ServiceMode};
use crate::CURRENCY_SYMBOL;

const WIDTH: usize = 48;

/// Renders the bill for a header, its lines and the stored totals.
///
/// Totals are printed as given, never recomputed, so a reprint always shows
/// what was charged.
pub fn format_receipt(header: &OrderHeader, lines: &[OrderLine], totals: &OrderTotals) -> String {
    let rule = "=".repeat(WIDTH);
    let mut out = String::new();

    push_line(&mut out, &rule);
    push_line(&mut out, &centered("ROYAL RESTAURANT"));
    push_line(&mut out, &centered("Premium Dining Experience"));
    push_line(&mut out, &rule);

    push_line(&mut out, &format!("Order Number: {}", header.order_number));
    push_line(&mut out, &format!("Service Mode: {}", header.service_mode));
    push_line(
        &mut out,
        &format!("Date & Time: {}", header.order_date.format("%Y-%m-%d %H:%M:%S")),
    );
    push_line(&mut out, "");
    push_line(
        &mut out,
        &format!(
            "Customer: {}",
            header.customer_name.as_deref().unwrap_or("Walk-in Customer")
        ),
    );
    push_line(
        &mut out,
        &format!("Phone: {}", header.customer_phone.as_deref().unwrap_or("N/A")),
    );
    if header.service_mode == ServiceMode::DineIn {
        push_line(
            &mut out,
            &format!("Table: {}", header.table_number.as_deref().unwrap_or("N/A")),
        );
    }

    push_line(&mut out, &rule);
    push_line(&mut out, &centered("ORDER DETAILS"));
    push_line(&mut out, &rule);

    for line in lines {
        push_line(&mut out, &line.name);
        push_line(
            &mut out,
            &format!(
                "Qty: {} x {} = {}",
                line.quantity,
                line.unit_price,
                line.line_total()
            ),
        );
    }

    push_line(&mut out, &rule);
    push_line(&mut out, &centered("PAYMENT SUMMARY"));
    push_line(&mut out, &rule);

    push_line(&mut out, &format!("{:<20}{}", "Subtotal:", totals.subtotal));
    push_line(&mut out, &format!("{:<20}{}", "GST (5%):", totals.tax_amount));
    push_line(
        &mut out,
        &format!(
            "{:<19}-{}{}",
            "Discount:",
            CURRENCY_SYMBOL,
            totals.discount_amount.to_decimal_string()
        ),
    );
    push_line(&mut out, &"-".repeat(WIDTH));
    push_line(&mut out, &format!("{:<20}{}", "GRAND TOTAL:", totals.grand_total));
    push_line(&mut out, "");
    push_line(&mut out, &format!("{:<20}{}", "Payment Method:", header.payment_method));
    push_line(&mut out, &format!("{:<20}{}", "Status:", header.status));

    push_line(&mut out, &rule);
    push_line(&mut out, &centered("Thank you for dining with us!"));
    push_line(&mut out, &centered("Visit us again for premium experience"));
    push_line(&mut out, &rule);

    out
}

fn centered(text: &str) -> String {
    format!("{:^width$}", text, width = WIDTH)
        .trim_end()
        .to_string()
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::pricing::compute_totals;
    use crate::types::{PaymentMethod, TaxRate};

    fn header(mode: ServiceMode) -> OrderHeader {
        let date = chrono::NaiveDate::from_ymd_opt(2026, 1, 15)
            .unwrap()
            .and_hms_opt(19, 30, 45)
            .unwrap();
        OrderHeader::new("ORD20260115193045", mode, PaymentMethod::Cash, date)
    }

    fn lines() -> Vec<OrderLine> {
        vec![
            OrderLine::new(1, "Butter Naan", "Bread & Rice", Money::from_cents(10000), TaxRate::STANDARD_GST, 2),
            OrderLine::new(2, "Masala Chai", "Beverages", Money::from_cents(5000), TaxRate::STANDARD_GST, 1),
        ]
    }

    #[test]
    fn test_receipt_contents() {
        let lines = lines();
        let totals = compute_totals(&lines, 0.0);
        let text = format_receipt(&header(ServiceMode::DineIn), &lines, &totals);

        assert!(text.contains("ROYAL RESTAURANT"));
        assert!(text.contains("Order Number: ORD20260115193045"));
        assert!(text.contains("Date & Time: 2026-01-15 19:30:45"));
        assert!(text.contains("Customer: Walk-in Customer"));
        assert!(text.contains("Phone: N/A"));
        assert!(text.contains("Table: N/A"));
        assert!(text.contains("Qty: 2 x ₹100.00 = ₹200.00"));
        assert!(text.contains("GST (5%):           ₹12.50"));
        assert!(text.contains("Discount:          -₹0.00"));
        assert!(text.contains("Status:             Completed"));
        assert!(text.contains("Thank you for dining with us!"));
    }

    #[test]
    fn test_takeaway_has_no_table_line() {
        let lines = lines();
        let totals = compute_totals(&lines, 0.0);
        let text = format_receipt(&header(ServiceMode::Takeaway), &lines, &totals);

        assert!(!text.contains("Table:"));
        assert!(text.contains("Service Mode: Takeaway"));
    }

    #[test]
    fn test_grand_total_line_matches_totals() {
        let lines = lines();
        let totals = compute_totals(&lines, 10.0);
        let text = format_receipt(&header(ServiceMode::DineIn), &lines, &totals);

        let grand = text
            .lines()
            .find(|l| l.starts_with("GRAND TOTAL:"))
            .and_then(|l| l.split(CURRENCY_SYMBOL).nth(1))
            .unwrap();
        assert_eq!(grand, totals.grand_total.to_decimal_string());
        assert_eq!(grand, "237.50");
    }

    #[test]
    fn test_customer_details_printed() {
        let lines = lines();
        let totals = compute_totals(&lines, 0.0);
        let header = header(ServiceMode::DineIn).with_customer(Some("Meera"), Some("98450 12345"), Some("12"));
        let text = format_receipt(&header, &lines, &totals);

        assert!(text.contains("Customer: Meera"));
        assert!(text.contains("Phone: 98450 12345"));
        assert!(text.contains("Table: 12"));
    }
}
