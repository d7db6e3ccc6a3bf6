//! # Counter Commands
//!
//! One module per front-desk screen. Each exposes clap `Args` and an async
//! `run` that talks to [`royal_db::Database`] and prints to stdout.
//!
//! ## Command Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  royal-counter                                                         │
//! │  ├── seed                 ◄─── sample menu (insert-if-absent)          │
//! │  ├── menu list|add|update|delete                                       │
//! │  ├── order                ◄─── cart session → checkout → receipt       │
//! │  ├── history              ◄─── orders in a date range                  │
//! │  ├── bill <order-number>  ◄─── reprint a saved bill                    │
//! │  ├── report               ◄─── daily sales, top items, payment mix     │
//! │  └── status               ◄─── store health and counts                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Logs go to stderr so `--format csv|json` output can be piped.

pub mod history;
pub mod menu;
pub mod order;
pub mod report;
pub mod status;

use anyhow::Result;
use chrono::{Datelike, Duration, Local, NaiveDate};
use clap::{Args, ValueEnum};
use serde::Serialize;

use royal_core::export::to_json_pretty;
use royal_core::validation::{parse_date, parse_rupees, validate_discount_percent};
use royal_core::{Money, ValidationError};

/// How listings are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Json,
}

/// Quick date ranges offered next to the from/to pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Period {
    Today,
    Yesterday,
    ThisWeek,
    ThisMonth,
    #[value(name = "7d")]
    Last7Days,
    #[value(name = "30d")]
    Last30Days,
    #[value(name = "90d")]
    Last90Days,
}

impl Period {
    /// Inclusive `(from, to)` for this period as seen on `today`.
    pub fn range(self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        match self {
            Period::Today => (today, today),
            Period::Yesterday => {
                let y = today - Duration::days(1);
                (y, y)
            }
            Period::ThisWeek => (
                today - Duration::days(i64::from(today.weekday().num_days_from_monday())),
                today,
            ),
            Period::ThisMonth => (today.with_day(1).unwrap_or(today), today),
            Period::Last7Days => (today - Duration::days(7), today),
            Period::Last30Days => (today - Duration::days(30), today),
            Period::Last90Days => (today - Duration::days(90), today),
        }
    }
}

/// Shared `--from/--to/--period` flags for history and reports.
#[derive(Debug, Clone, Args)]
pub struct DateRangeArgs {
    /// First day to include (YYYY-MM-DD). Default: 30 days ago.
    #[arg(long, value_parser = date_arg, conflicts_with = "period")]
    pub from: Option<NaiveDate>,

    /// Last day to include (YYYY-MM-DD). Default: today.
    #[arg(long, value_parser = date_arg, conflicts_with = "period")]
    pub to: Option<NaiveDate>,

    /// Quick range instead of explicit dates.
    #[arg(long, value_enum)]
    pub period: Option<Period>,
}

impl DateRangeArgs {
    /// Resolves the flags into inclusive bounds relative to `today`.
    pub fn resolve(&self, today: NaiveDate) -> Result<(NaiveDate, NaiveDate)> {
        let (from, to) = match self.period {
            Some(period) => period.range(today),
            None => (
                self.from.unwrap_or(today - Duration::days(30)),
                self.to.unwrap_or(today),
            ),
        };

        if from > to {
            anyhow::bail!("--from ({from}) is after --to ({to})");
        }
        Ok((from, to))
    }
}

/// Today's local date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Prints any serializable value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", to_json_pretty(value)?);
    Ok(())
}

// =============================================================================
// clap value parsers
// =============================================================================

pub fn date_arg(value: &str) -> Result<NaiveDate, ValidationError> {
    parse_date("date", value)
}

pub fn price_arg(value: &str) -> Result<Money, ValidationError> {
    parse_rupees("price", value)
}

pub fn discount_arg(value: &str) -> Result<f64, String> {
    let pct: f64 = value
        .trim()
        .trim_end_matches('%')
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    validate_discount_percent(pct).map_err(|e| e.to_string())?;
    Ok(pct)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_period_ranges() {
        // 2026-04-16 is a Thursday
        let today = day(2026, 4, 16);

        assert_eq!(Period::Today.range(today), (today, today));
        assert_eq!(Period::Yesterday.range(today), (day(2026, 4, 15), day(2026, 4, 15)));
        assert_eq!(Period::ThisWeek.range(today), (day(2026, 4, 13), today));
        assert_eq!(Period::ThisMonth.range(today), (day(2026, 4, 1), today));
        assert_eq!(Period::Last7Days.range(today), (day(2026, 4, 9), today));
        assert_eq!(Period::Last90Days.range(today).0, day(2026, 1, 16));
    }

    #[test]
    fn test_default_range_is_last_30_days() {
        let args = DateRangeArgs {
            from: None,
            to: None,
            period: None,
        };

        let (from, to) = args.resolve(day(2026, 4, 16)).unwrap();
        assert_eq!(from, day(2026, 3, 17));
        assert_eq!(to, day(2026, 4, 16));
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let args = DateRangeArgs {
            from: Some(day(2026, 4, 20)),
            to: Some(day(2026, 4, 1)),
            period: None,
        };

        assert!(args.resolve(day(2026, 4, 30)).is_err());
    }

    #[test]
    fn test_discount_arg() {
        assert_eq!(discount_arg("10").unwrap(), 10.0);
        assert_eq!(discount_arg("12.5%").unwrap(), 12.5);
        assert!(discount_arg("60").is_err());
        assert!(discount_arg("ten").is_err());
    }
}
