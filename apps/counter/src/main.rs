//! # Royal Counter
//!
//! Front-desk terminal for Royal POS.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                               │
//! │                                                                         │
//! │  1. Parse arguments (clap)                                              │
//! │  2. Resolve configuration                                               │
//! │     • --db flag, else ROYAL_DB_PATH, else platform data directory       │
//! │     • ROYAL_LOG / RUST_LOG, else info,royal=debug,sqlx=warn             │
//! │  3. Initialize logging (stderr)                                         │
//! │  4. Connect to database & run migrations                                │
//! │  5. Run the command, close the pool                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod commands;
mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use commands::history::{BillArgs, HistoryArgs};
use commands::menu::MenuCommand;
use commands::order::OrderArgs;
use commands::report::ReportArgs;
use config::AppConfig;
use royal_db::{Database, DbConfig};

#[derive(Debug, Parser)]
#[command(name = "royal-counter", about = "Royal POS front-desk terminal", version)]
struct Cli {
    /// SQLite database file (overrides ROYAL_DB_PATH)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load the sample menu (existing names are left alone)
    Seed,
    /// Menu management
    #[command(subcommand)]
    Menu(MenuCommand),
    /// Take an order and print the bill
    Order(OrderArgs),
    /// Saved bills in a date range
    History(HistoryArgs),
    /// Reprint a saved bill
    Bill(BillArgs),
    /// Sales report for a date range
    Report(ReportArgs),
    /// Database health and counts
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::from_env(cli.db.as_deref())?;

    init_tracing(&config.log_filter);
    config.ensure_data_dir()?;

    info!(path = %config.database_path.display(), "Starting Royal counter");

    let db = Database::new(DbConfig::new(&config.database_path))
        .await
        .with_context(|| format!("opening database {}", config.database_path.display()))?;

    let result = match cli.command {
        Command::Seed => commands::menu::seed(&db).await,
        Command::Menu(command) => commands::menu::run(&db, command).await,
        Command::Order(args) => commands::order::run(&db, args).await,
        Command::History(args) => commands::history::run(&db, args).await,
        Command::Bill(args) => commands::history::reprint(&db, args).await,
        Command::Report(args) => commands::report::run(&db, args).await,
        Command::Status => commands::status::run(&db, &config.database_path).await,
    };

    db.close().await;
    result
}

/// Installs the stderr subscriber.
///
/// ## Log Levels
/// - `ROYAL_LOG=debug` - Show debug messages
/// - `ROYAL_LOG=royal_db=trace` - Trace for the storage crate only
fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter)
        .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_order_command() {
        let cli = Cli::try_parse_from([
            "royal-counter",
            "--db",
            "/tmp/royal.db",
            "order",
            "--mode",
            "takeaway",
            "--item",
            "Kulfi:2",
            "--item",
            "3",
            "--discount",
            "10",
            "--payment",
            "upi",
        ])
        .unwrap();

        assert_eq!(cli.db, Some(PathBuf::from("/tmp/royal.db")));
        let Command::Order(args) = cli.command else {
            panic!("expected order command");
        };
        assert_eq!(args.items.len(), 2);
        assert_eq!(args.mode, royal_core::ServiceMode::Takeaway);
        assert_eq!(args.payment, royal_core::PaymentMethod::Upi);
        assert_eq!(args.discount, 10.0);
    }

    #[test]
    fn test_period_conflicts_with_dates() {
        let parsed = Cli::try_parse_from([
            "royal-counter",
            "report",
            "--period",
            "today",
            "--from",
            "2026-04-01",
        ]);

        assert!(parsed.is_err());
    }
}
