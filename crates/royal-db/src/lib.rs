//! # royal-db: Storage Layer for Royal POS
//!
//! This crate owns the restaurant's SQLite file: the menu catalog, saved
//! orders with their line items, the sales reports read back from them, and
//! the checkout that ties a cart session to a stored bill.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Royal POS Data Flow                              │
//! │                                                                         │
//! │  royal-counter command (order, history, report, menu ...)              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     royal-db (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │  menu.rs      │    │  (embedded)  │  │   │
//! │  │   │               │    │  order.rs     │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│               │    │ 001_initial  │  │   │
//! │  │   └───────────────┘    └───────▲───────┘    └──────────────┘  │   │
//! │  │                                │                               │   │
//! │  │                        checkout.rs (session → saved order)     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │   ~/.local/share/royal-pos/royal.db (or ROYAL_DB_PATH)          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Menu and order repositories
//! - [`checkout`] - Cart session to saved order
//!
//! ## Usage
//!
//! ```rust,ignore
//! use royal_db::{checkout, Database, DbConfig, SystemClock};
//!
//! let db = Database::new(DbConfig::new("royal.db")).await?;
//! let menu = db.menu().list_available().await?;
//!
//! let mut session = CartSession::new(ServiceMode::DineIn);
//! session.add_item(&menu[0], 2)?;
//! let done = checkout(&db, &SystemClock, &mut session, PaymentMethod::Upi).await?;
//! println!("{}", done.receipt);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod checkout;
pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use checkout::{checkout, CheckoutError, Clock, CompletedOrder, FixedClock, SystemClock};
pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::menu::{MenuRepository, SAMPLE_MENU};
pub use repository::order::OrderRepository;
