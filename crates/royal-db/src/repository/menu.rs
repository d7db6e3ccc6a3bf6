//! # Menu Repository
//!
//! Database operations for menu items.
//!
//! ## Key Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Menu management page          Order entry                              │
//! │  ─────────────────────         ───────────                              │
//! │  add()      ─► INSERT          list_available() ─► available = 1,      │
//! │  list_all() ─► all rows                             ORDER BY category, │
//! │  update()   ─► full overwrite                       name               │
//! │  delete()   ─► hard delete     get_by_id()      ─► pick a dish         │
//! │                                                                         │
//! │  seed_sample_menu() ─► 23 dishes, insert-if-absent by name             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Deleting an item never touches past orders: lines are copied by value
//! into each order at checkout.

use chrono::NaiveDateTime;
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use crate::repository::{local_timestamp, money_to_rupees, rupees_to_money};
use royal_core::{MenuItem, MenuItemUpdate, Money, NewMenuItem, TaxRate};

/// The sample catalog: (name, category, price in rupees). All at 5% GST.
pub const SAMPLE_MENU: &[(&str, &str, i64)] = &[
    ("Paneer Tikka", "Appetizers", 180),
    ("Chicken Wings", "Appetizers", 220),
    ("Veg Spring Rolls", "Appetizers", 150),
    ("Fish Fingers", "Appetizers", 200),
    ("Butter Chicken", "Main Course", 320),
    ("Paneer Butter Masala", "Main Course", 280),
    ("Biryani (Chicken)", "Main Course", 350),
    ("Biryani (Veg)", "Main Course", 280),
    ("Dal Makhani", "Main Course", 220),
    ("Rogan Josh", "Main Course", 340),
    ("Butter Naan", "Bread & Rice", 60),
    ("Garlic Naan", "Bread & Rice", 80),
    ("Basmati Rice", "Bread & Rice", 120),
    ("Jeera Rice", "Bread & Rice", 140),
    ("Lassi (Sweet)", "Beverages", 80),
    ("Fresh Lime Soda", "Beverages", 60),
    ("Masala Chai", "Beverages", 40),
    ("Cold Coffee", "Beverages", 100),
    ("Mango Juice", "Beverages", 90),
    ("Gulab Jamun", "Desserts", 120),
    ("Rasgulla", "Desserts", 100),
    ("Ice Cream", "Desserts", 80),
    ("Kulfi", "Desserts", 90),
];

/// A `menu` row as stored.
#[derive(Debug, sqlx::FromRow)]
struct MenuRow {
    id: i64,
    name: String,
    category: String,
    price: f64,
    gst_rate: f64,
    available: bool,
    created_at: NaiveDateTime,
}

impl From<MenuRow> for MenuItem {
    fn from(row: MenuRow) -> Self {
        MenuItem {
            id: row.id,
            name: row.name,
            category: row.category,
            price: rupees_to_money(row.price),
            tax_rate: TaxRate::from_percentage(row.gst_rate),
            available: row.available,
            created_at: row.created_at,
        }
    }
}

const SELECT_MENU: &str = r#"
    SELECT id, name, category, price, gst_rate, available, created_at
    FROM menu
"#;

/// Repository for menu database operations.
#[derive(Debug, Clone)]
pub struct MenuRepository {
    pool: SqlitePool,
}

impl MenuRepository {
    /// Creates a new MenuRepository.
    pub fn new(pool: SqlitePool) -> Self {
        MenuRepository { pool }
    }

    /// Inserts a new item, available by default.
    ///
    /// Duplicate names are allowed. Returns the new id.
    pub async fn add(&self, item: &NewMenuItem) -> DbResult<i64> {
        item.validate()?;

        debug!(name = %item.name, category = %item.category, "Adding menu item");

        let result = sqlx::query(
            r#"
            INSERT INTO menu (name, category, price, gst_rate, available, created_at)
            VALUES (?1, ?2, ?3, ?4, 1, ?5)
            "#,
        )
        .bind(item.name.trim())
        .bind(item.category.trim())
        .bind(money_to_rupees(item.price))
        .bind(item.tax_rate.percentage())
        .bind(local_timestamp())
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Items offered at the counter, ordered by category then name.
    pub async fn list_available(&self) -> DbResult<Vec<MenuItem>> {
        let sql = format!("{SELECT_MENU} WHERE available = 1 ORDER BY category, name");
        let rows = sqlx::query_as::<_, MenuRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = rows.len(), "Listed available menu items");
        Ok(rows.into_iter().map(MenuItem::from).collect())
    }

    /// Every item including unavailable ones, same ordering.
    pub async fn list_all(&self) -> DbResult<Vec<MenuItem>> {
        let sql = format!("{SELECT_MENU} ORDER BY category, name");
        let rows = sqlx::query_as::<_, MenuRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(MenuItem::from).collect())
    }

    /// Gets an item by id.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<MenuItem>> {
        let sql = format!("{SELECT_MENU} WHERE id = ?1");
        let row = sqlx::query_as::<_, MenuRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(MenuItem::from))
    }

    /// Overwrites every mutable field of an item.
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - No item with this id
    pub async fn update(&self, id: i64, update: &MenuItemUpdate) -> DbResult<()> {
        update.validate()?;

        debug!(id, name = %update.name, available = update.available, "Updating menu item");

        let result = sqlx::query(
            r#"
            UPDATE menu SET
                name = ?2,
                category = ?3,
                price = ?4,
                gst_rate = ?5,
                available = ?6
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(update.name.trim())
        .bind(update.category.trim())
        .bind(money_to_rupees(update.price))
        .bind(update.tax_rate.percentage())
        .bind(update.available)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Menu item", id));
        }

        Ok(())
    }

    /// Hard-deletes an item.
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - No item with this id
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting menu item");

        let result = sqlx::query("DELETE FROM menu WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Menu item", id));
        }

        Ok(())
    }

    /// Inserts the sample catalog, skipping names that already exist.
    ///
    /// Existing rows are never modified. Runs in one transaction and returns
    /// the number of items inserted.
    pub async fn seed_sample_menu(&self) -> DbResult<u64> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        let created_at = local_timestamp();
        let mut inserted = 0;
        for (name, category, rupees) in SAMPLE_MENU {
            let result = sqlx::query(
                r#"
                INSERT INTO menu (name, category, price, gst_rate, available, created_at)
                SELECT ?1, ?2, ?3, ?4, 1, ?5
                WHERE NOT EXISTS (SELECT 1 FROM menu WHERE name = ?1)
                "#,
            )
            .bind(*name)
            .bind(*category)
            .bind(money_to_rupees(Money::from_major_minor(*rupees, 0)))
            .bind(TaxRate::STANDARD_GST.percentage())
            .bind(&created_at)
            .execute(&mut *tx)
            .await?;

            inserted += result.rows_affected();
        }

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        info!(inserted, total = SAMPLE_MENU.len(), "Sample menu seeded");
        Ok(inserted)
    }

    /// Counts all menu rows (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM menu")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
