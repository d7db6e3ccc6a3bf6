//! # Order Command
//!
//! Builds a cart session from `--item` picks, checks it out and prints the bill.
//!
//! ```text
//! royal-counter order --mode dine-in --table 4 \
//!     --item "Paneer Tikka:2" --item 11 --discount 10 --payment upi
//! ```

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use clap::Args;
use tracing::debug;

use royal_core::{CartSession, MenuItem, PaymentMethod, ServiceMode};
use royal_db::{checkout, Database, SystemClock};

use super::{discount_arg, print_json, OutputFormat};

#[derive(Debug, Args)]
pub struct OrderArgs {
    /// Dine-In or Takeaway
    #[arg(long, default_value = "Dine-In")]
    pub mode: ServiceMode,

    /// Dish to add, by id or name, with optional quantity: `5`, `5:2`, `"Kulfi:3"`
    #[arg(long = "item", required = true)]
    pub items: Vec<ItemPick>,

    #[arg(long)]
    pub customer: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    /// Table number (dine-in only)
    #[arg(long)]
    pub table: Option<String>,

    /// Discount percent, 0 to 50
    #[arg(long, value_parser = discount_arg, default_value = "0")]
    pub discount: f64,

    /// Cash, Card, UPI or Net Banking
    #[arg(long, default_value = "Cash")]
    pub payment: PaymentMethod,

    /// text prints the receipt; json prints the saved order
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

/// Which dish an `--item` refers to.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemKey {
    Id(i64),
    Name(String),
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKey::Id(id) => write!(f, "#{id}"),
            ItemKey::Name(name) => write!(f, "'{name}'"),
        }
    }
}

/// One `--item` argument.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemPick {
    pub key: ItemKey,
    pub quantity: i64,
}

impl FromStr for ItemPick {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (key, quantity) = match s.rsplit_once(':') {
            Some((key, qty)) => {
                let qty = qty
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| format!("bad quantity in '{s}'"))?;
                (key.trim(), qty)
            }
            None => (s, 1),
        };

        if key.is_empty() {
            return Err("item is empty".to_string());
        }

        let key = match key.parse::<i64>() {
            Ok(id) => ItemKey::Id(id),
            Err(_) => ItemKey::Name(key.to_string()),
        };
        Ok(ItemPick { key, quantity })
    }
}

impl ItemPick {
    fn find<'a>(&self, menu: &'a [MenuItem]) -> Option<&'a MenuItem> {
        menu.iter().find(|item| match &self.key {
            ItemKey::Id(id) => item.id == *id,
            ItemKey::Name(name) => item.name.eq_ignore_ascii_case(name),
        })
    }
}

pub async fn run(db: &Database, args: OrderArgs) -> Result<()> {
    let menu = db.menu().list_all().await?;

    let mut session = CartSession::new(args.mode);
    for pick in &args.items {
        let item = pick
            .find(&menu)
            .ok_or_else(|| anyhow!("{} is not on the menu", pick.key))?;
        session
            .add_item(item, pick.quantity)
            .with_context(|| format!("adding {}", item.name))?;
    }
    session.set_customer(
        args.customer.as_deref(),
        args.phone.as_deref(),
        args.table.as_deref(),
    );
    session.set_discount_percent(args.discount);

    debug!(
        session = %session.id,
        lines = session.item_count(),
        quantity = session.total_quantity(),
        "Cart ready for checkout"
    );

    let done = checkout(db, &SystemClock, &mut session, args.payment)
        .await
        .context("checkout failed")?;

    match args.format {
        OutputFormat::Json => print_json(&done)?,
        _ => print!("{}", done.receipt),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_item_pick() {
        assert_eq!(
            "5".parse::<ItemPick>().unwrap(),
            ItemPick { key: ItemKey::Id(5), quantity: 1 }
        );
        assert_eq!(
            "Butter Naan:3".parse::<ItemPick>().unwrap(),
            ItemPick { key: ItemKey::Name("Butter Naan".to_string()), quantity: 3 }
        );
        assert!("Kulfi:lots".parse::<ItemPick>().is_err());
        assert!(":2".parse::<ItemPick>().is_err());
    }

    #[test]
    fn test_find_by_name_ignores_case() {
        let menu = vec![MenuItem {
            id: 7,
            name: "Masala Chai".to_string(),
            category: "Beverages".to_string(),
            price: royal_core::Money::from_cents(4000),
            tax_rate: royal_core::TaxRate::STANDARD_GST,
            available: true,
            created_at: chrono::NaiveDate::from_ymd_opt(2026, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        }];

        let pick: ItemPick = "masala chai".parse().unwrap();
        assert_eq!(pick.find(&menu).map(|m| m.id), Some(7));
        assert!("8".parse::<ItemPick>().unwrap().find(&menu).is_none());
    }
}
