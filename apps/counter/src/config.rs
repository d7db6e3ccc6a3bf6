//! # Counter Configuration
//!
//! Where the database lives and how chatty the logs are.
//!
//! ## Sources (Priority Order)
//! 1. `--db` flag
//! 2. Environment variables (`ROYAL_DB_PATH`, `ROYAL_LOG`)
//! 3. Defaults (platform data directory, `info,royal=debug,sqlx=warn`)

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

/// Log filter used when neither `ROYAL_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "info,royal=debug,sqlx=warn";

/// Resolved application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// SQLite file to open (created if missing).
    pub database_path: PathBuf,

    /// `tracing-subscriber` filter directive.
    pub log_filter: String,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    pub fn from_env(db_override: Option<&Path>) -> Result<Self> {
        Self::from_lookup(db_override, |key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    fn from_lookup(
        db_override: Option<&Path>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let database_path = match db_override {
            Some(path) => path.to_path_buf(),
            None => match lookup("ROYAL_DB_PATH").filter(|p| !p.trim().is_empty()) {
                Some(path) => PathBuf::from(path),
                None => default_database_path()?,
            },
        };

        let log_filter = lookup("ROYAL_LOG")
            .or_else(|| lookup("RUST_LOG"))
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(AppConfig {
            database_path,
            log_filter,
        })
    }

    /// Makes sure the database's parent directory exists.
    pub fn ensure_data_dir(&self) -> Result<()> {
        if let Some(dir) = self.database_path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating data directory {}", dir.display()))?;
        }
        Ok(())
    }
}

/// Platform data directory path for the database.
///
/// - **Linux**: `~/.local/share/royal-pos/royal.db`
/// - **macOS**: `~/Library/Application Support/com.royal.royal-pos/royal.db`
/// - **Windows**: `%APPDATA%\royal\royal-pos\data\royal.db`
fn default_database_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "royal", "royal-pos")
        .context("could not determine the app data directory; set ROYAL_DB_PATH")?;

    Ok(dirs.data_dir().join("royal.db"))
}
