//! # Error Types
//!
//! Domain-specific error types for royal-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  royal-core errors (this file)                                         │
//! │  ├── CoreError             - Cart session rule violations              │
//! │  ├── OrderValidationError  - Why an order cannot be billed             │
//! │  └── ValidationError       - Field-level input failures                │
//! │                                                                         │
//! │  royal-db errors (separate crate)                                      │
//! │  ├── DbError               - Database operation failures               │
//! │  └── CheckoutError         - Validation or persistence at checkout     │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError / DbError → anyhow (counter app)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Cart session errors.
///
/// Raised while the cashier is building an order, before anything is billed.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The menu item is switched off and cannot be ordered.
    #[error("{0} is not available")]
    ItemUnavailable(String),

    /// No line for this menu item exists in the cart.
    #[error("Menu item {0} is not in the order")]
    LineNotFound(i64),

    /// Cart has exceeded maximum allowed lines.
    #[error("Order cannot have more than {max} items")]
    CartTooLarge { max: usize },

    /// Line quantity exceeds maximum allowed.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Order Validation Error
// =============================================================================

/// The first rule an order breaks, checked right before billing.
///
/// Messages are what the cashier sees, so they name the offending dish.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderValidationError {
    #[error("No items in the order")]
    EmptyOrder,

    #[error("Invalid quantity for {0}")]
    InvalidQuantity(String),

    #[error("Invalid price for {0}")]
    InvalidPrice(String),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., a date that does not parse).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
