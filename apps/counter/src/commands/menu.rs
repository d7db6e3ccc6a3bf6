//! # Menu Commands
//!
//! Menu maintenance: list, add, update, delete, and seeding the sample menu.

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use tracing::debug;

use royal_core::export::menu_to_csv;
use royal_core::{MenuFilter, MenuItem, MenuItemUpdate, MenuStats, Money, NewMenuItem, TaxRate};
use royal_db::Database;

use super::{price_arg, print_json, OutputFormat};

#[derive(Debug, Subcommand)]
pub enum MenuCommand {
    /// Show the menu (available items unless --all)
    List(ListArgs),
    /// Add a dish
    Add(AddArgs),
    /// Change a dish; omitted fields keep their current value
    Update(UpdateArgs),
    /// Remove a dish (past bills are unaffected)
    Delete(DeleteArgs),
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Include items marked unavailable
    #[arg(long)]
    pub all: bool,

    /// Only this category
    #[arg(long)]
    pub category: Option<String>,

    /// Part of the dish name
    #[arg(long)]
    pub search: Option<String>,

    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub category: String,

    /// Price in rupees, e.g. 180 or 180.50
    #[arg(long, value_parser = price_arg)]
    pub price: Money,

    /// GST rate in percent
    #[arg(long, default_value_t = 5.0)]
    pub gst: f64,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Menu item id
    pub id: i64,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub category: Option<String>,

    #[arg(long, value_parser = price_arg)]
    pub price: Option<Money>,

    #[arg(long)]
    pub gst: Option<f64>,

    /// true / false
    #[arg(long)]
    pub available: Option<bool>,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Menu item id
    pub id: i64,
}

pub async fn run(db: &Database, command: MenuCommand) -> Result<()> {
    match command {
        MenuCommand::List(args) => list(db, args).await,
        MenuCommand::Add(args) => add(db, args).await,
        MenuCommand::Update(args) => update(db, args).await,
        MenuCommand::Delete(args) => delete(db, args).await,
    }
}

/// Inserts the sample menu, skipping names already present.
pub async fn seed(db: &Database) -> Result<()> {
    let inserted = db
        .menu()
        .seed_sample_menu()
        .await
        .context("seeding sample menu")?;

    println!(
        "Sample menu seeded: {inserted} new item(s), {} on the menu",
        db.menu().count().await?
    );
    Ok(())
}

async fn list(db: &Database, args: ListArgs) -> Result<()> {
    let items = if args.all {
        db.menu().list_all().await?
    } else {
        db.menu().list_available().await?
    };
    let stats = MenuStats::from_items(&items);

    let filter = MenuFilter::new(args.category.as_deref(), args.search.as_deref());
    let items: Vec<MenuItem> = items.into_iter().filter(|i| filter.matches(i)).collect();
    debug!(count = items.len(), ?filter, "Menu loaded");

    match args.format {
        OutputFormat::Text => {
            println!("{}", render_stats(&stats));
            print!("{}", render_menu(&items));
        }
        OutputFormat::Csv => print!("{}", menu_to_csv(&items)),
        OutputFormat::Json => print_json(&items)?,
    }
    Ok(())
}

async fn add(db: &Database, args: AddArgs) -> Result<()> {
    let item = NewMenuItem::new(args.name.trim(), args.category.trim(), args.price)
        .with_tax_rate(TaxRate::from_percentage(args.gst));

    let id = db.menu().add(&item).await.context("adding menu item")?;
    println!("Added {} ({}) as #{id}", item.name, item.price);
    Ok(())
}

async fn update(db: &Database, args: UpdateArgs) -> Result<()> {
    let Some(current) = db.menu().get_by_id(args.id).await? else {
        bail!("Menu item #{} not found", args.id);
    };

    let mut change = MenuItemUpdate::from_item(&current);
    if let Some(name) = args.name {
        change.name = name.trim().to_string();
    }
    if let Some(category) = args.category {
        change.category = category.trim().to_string();
    }
    if let Some(price) = args.price {
        change.price = price;
    }
    if let Some(gst) = args.gst {
        change.tax_rate = TaxRate::from_percentage(gst);
    }
    if let Some(available) = args.available {
        change.available = available;
    }

    db.menu()
        .update(args.id, &change)
        .await
        .with_context(|| format!("updating menu item #{}", args.id))?;
    println!("Updated #{}: {}", args.id, change.name);
    Ok(())
}

async fn delete(db: &Database, args: DeleteArgs) -> Result<()> {
    db.menu()
        .delete(args.id)
        .await
        .with_context(|| format!("deleting menu item #{}", args.id))?;
    println!("Deleted menu item #{}", args.id);
    Ok(())
}

fn render_stats(stats: &MenuStats) -> String {
    format!(
        "{} item(s) in {} categories, {} available, average price {}",
        stats.total_items, stats.categories, stats.available_items, stats.average_price
    )
}

/// Menu grouped by category, one dish per line.
fn render_menu(items: &[MenuItem]) -> String {
    if items.is_empty() {
        return "No menu items. Run `royal-counter seed` to load the sample menu.\n".to_string();
    }

    let mut out = String::new();
    let mut category: Option<&str> = None;

    for item in items {
        if category != Some(item.category.as_str()) {
            out.push_str(&format!("\n{}\n", item.category));
            category = Some(item.category.as_str());
        }
        out.push_str(&format!(
            "  #{:<4} {:<28} {:>10}  GST {:>4}%{}\n",
            item.id,
            item.name,
            item.price.to_string(),
            item.tax_rate.percentage(),
            if item.available { "" } else { "  (unavailable)" }
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dish(id: i64, name: &str, category: &str, cents: i64, available: bool) -> MenuItem {
        MenuItem {
            id,
            name: name.to_string(),
            category: category.to_string(),
            price: Money::from_cents(cents),
            tax_rate: TaxRate::STANDARD_GST,
            available,
            created_at: NaiveDate::from_ymd_opt(2026, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn test_render_menu_groups_by_category() {
        let text = render_menu(&[
            dish(1, "Paneer Tikka", "Appetizers", 18000, true),
            dish(2, "Fish Fingers", "Appetizers", 20000, false),
            dish(3, "Kulfi", "Desserts", 9000, true),
        ]);

        assert_eq!(text.matches("Appetizers").count(), 1);
        assert!(text.contains("Paneer Tikka"));
        assert!(text.contains("₹180.00"));
        assert!(text.contains("(unavailable)"));
        assert!(text.find("Desserts").unwrap() > text.find("Fish Fingers").unwrap());
    }

    #[test]
    fn test_stats_line() {
        let stats = MenuStats::from_items(&[
            dish(1, "Paneer Tikka", "Appetizers", 18000, true),
            dish(2, "Fish Fingers", "Appetizers", 20000, false),
            dish(3, "Kulfi", "Desserts", 9000, true),
        ]);

        assert_eq!(
            render_stats(&stats),
            "3 item(s) in 2 categories, 2 available, average price ₹156.67"
        );
    }

    #[test]
    fn test_list_flags_parse_into_filter() {
        use clap::Parser;

        #[derive(Parser)]
        struct Wrapper {
            #[command(subcommand)]
            menu: MenuCommand,
        }

        let parsed = Wrapper::try_parse_from(["menu", "list", "--category", "Desserts", "--search", "kul"])
            .unwrap();
        let MenuCommand::List(args) = parsed.menu else {
            panic!("expected list");
        };
        let filter = MenuFilter::new(args.category.as_deref(), args.search.as_deref());

        assert!(filter.matches(&dish(3, "Kulfi", "Desserts", 9000, true)));
        assert!(!filter.matches(&dish(4, "Gulab Jamun", "Desserts", 9000, true)));
    }

    #[test]
    fn test_render_empty_menu() {
        assert!(render_menu(&[]).contains("seed"));
    }
}
