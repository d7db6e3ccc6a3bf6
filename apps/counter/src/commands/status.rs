//! Store diagnostics: connectivity, schema version and row counts.

use std::path::Path;

use anyhow::Result;

use royal_db::migrations::migration_status;
use royal_db::Database;

pub async fn run(db: &Database, database_path: &Path) -> Result<()> {
    let healthy = db.health_check().await;
    let (total, applied) = migration_status(db.pool()).await?;

    println!("Database:   {}", database_path.display());
    println!("Health:     {}", if healthy { "ok" } else { "unreachable" });
    println!("Migrations: {applied}/{total} applied");
    println!("Menu items: {}", db.menu().count().await?);
    println!("Orders:     {}", db.orders().count().await?);
    Ok(())
}
