//! # Validation Module
//!
//! Field-level input checks for menu maintenance and the counter.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Counter input (clap parsing, enum labels)                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE + pricing::validate_order                        │
//! │  ├── Menu fields (name, price, tax rate)                               │
//! │  └── Cart quantities and discount                                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL / UNIQUE (order_number)                                  │
//! │  └── CHECK (quantity > 0), foreign keys                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use royal_core::validation::{validate_item_name, validate_quantity};
//!
//! assert!(validate_item_name("Paneer Tikka").is_ok());
//! assert!(validate_quantity(5).is_ok());
//! ```

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::TaxRate;
use crate::{MAX_DISCOUNT_PERCENT, MAX_ITEM_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a menu item name.
///
/// ## Rules
/// - Must not be empty
/// - Must be between 1 and 200 characters
///
/// ## Example
/// ```rust
/// use royal_core::validation::validate_item_name;
///
/// assert!(validate_item_name("Biryani (Chicken)").is_ok());
/// assert!(validate_item_name("").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Parses a `YYYY-MM-DD` date filter.
pub fn parse_date(field: &str, value: &str) -> ValidationResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "expected YYYY-MM-DD".to_string(),
        }
    })
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a cart quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY (999)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a menu price in paise.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed when entering the item; billing rejects it later
///
/// ## Example
/// ```rust
/// use royal_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(18000).is_ok()); // ₹180.00
/// assert!(validate_price_cents(0).is_ok());
/// assert!(validate_price_cents(-100).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a tax rate in basis points.
///
/// ## Rules
/// - Must be between 0 and 2800 (0% to 28%, the top GST slab)
pub fn validate_tax_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps > TaxRate::MAX.bps() {
        return Err(ValidationError::OutOfRange {
            field: "tax rate".to_string(),
            min: 0,
            max: TaxRate::MAX.bps() as i64,
        });
    }

    Ok(())
}

/// Validates a discount percentage entered at the counter.
///
/// ## Rules
/// - Must be a finite number between 0 and MAX_DISCOUNT_PERCENT (50)
pub fn validate_discount_percent(pct: f64) -> ValidationResult<()> {
    if !pct.is_finite() || !(0.0..=MAX_DISCOUNT_PERCENT).contains(&pct) {
        return Err(ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: 0,
            max: MAX_DISCOUNT_PERCENT as i64,
        });
    }

    Ok(())
}

/// Parses a rupee amount as typed at the counter: `180`, `180.5`, `₹180.50`.
///
/// At most two decimal places; negative amounts are rejected.
pub fn parse_rupees(field: &str, value: &str) -> ValidationResult<Money> {
    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: reason.to_string(),
    };

    let raw = value.trim().trim_start_matches('₹').trim();
    let (whole, fraction) = raw.split_once('.').unwrap_or((raw, ""));

    if whole.is_empty() || !whole.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid("expected an amount like 180 or 180.50"));
    }
    if fraction.len() > 2 || !fraction.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid("at most two decimal places"));
    }

    let major: i64 = whole.parse().map_err(|_| invalid("amount too large"))?;
    let minor: i64 = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<i64>().map_err(|_| invalid("bad paise"))? * 10,
        _ => fraction.parse().map_err(|_| invalid("bad paise"))?,
    };

    major
        .checked_mul(100)
        .and_then(|c| c.checked_add(minor))
        .map(Money::from_cents)
        .ok_or_else(|| invalid("amount too large"))
}

// =============================================================================
// Unit Tests
// =============================================================================
