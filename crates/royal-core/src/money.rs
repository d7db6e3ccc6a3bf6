//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With floats:                                                           │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A bill total computed in floats and re-rounded at display time can     │
//! │  disagree with the sum of its own printed lines by one paisa.           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer paise                                            │
//! │    ₹262.50 is stored as 26250 and every component is rounded once,     │
//! │    explicitly, at the point it is computed.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The smallest unit is called "cents" throughout the API (the same name the
//! rest of the stack uses for minor units); for rupees that is one paisa.
//!
//! ## Usage
//! ```rust
//! use royal_core::money::Money;
//!
//! let price = Money::from_cents(18000); // ₹180.00
//! let doubled = price * 2;              // ₹360.00
//! assert_eq!(doubled.to_string(), "₹360.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::types::TaxRate;
use crate::CURRENCY_SYMBOL;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (paise).
///
/// ## Design Decisions
/// - **i64 (signed)**: discounts are subtracted, out-of-range discount
///   percentages can legitimately drive a grand total negative
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Serde**: serializes as the bare integer
///
/// ## Where Money is Used
/// ```text
/// MenuItem.price ──► OrderLine.unit_price ──► OrderLine.line_total
///                                                   │
///                                     Σ ────────────┘
///                                     ▼
///                 subtotal ──► GST 5% ──► discount ──► grand total
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from the smallest currency unit.
    ///
    /// ## Example
    /// ```rust
    /// use royal_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // ₹10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole rupees and paise.
    ///
    /// ## Example
    /// ```rust
    /// use royal_core::money::Money;
    ///
    /// let price = Money::from_major_minor(262, 50);
    /// assert_eq!(price.cents(), 26250);
    ///
    /// let negative = Money::from_major_minor(-5, 50);
    /// assert_eq!(negative.cents(), -550);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in the smallest currency unit.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-rupee portion (truncated toward zero).
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the paise portion (always 0-99).
    ///
    /// ## Example
    /// ```rust
    /// use royal_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).minor(), 99);
    /// assert_eq!(Money::from_cents(-550).minor(), 50);
    /// ```
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.saturating_abs())
    }

    /// Calculates tax at the given rate, rounding half up to the nearest paisa.
    ///
    /// ## Implementation
    /// Integer math: `(amount * bps + 5000) / 10000`. The +5000 provides
    /// the rounding (5000/10000 = 0.5).
    ///
    /// ## Example
    /// ```rust
    /// use royal_core::money::Money;
    /// use royal_core::types::TaxRate;
    ///
    /// let subtotal = Money::from_cents(25000);      // ₹250.00
    /// let gst = subtotal.calculate_tax(TaxRate::STANDARD_GST);
    /// assert_eq!(gst.cents(), 1250);                 // ₹12.50
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        self.percentage_of_bps(rate.bps() as i64)
    }

    /// Returns `bps` basis points of this amount, rounded half away from zero.
    ///
    /// Accepts any rate, including negative or absurdly large ones: the
    /// product is computed in i128 and the result saturates at the i64 range
    /// instead of overflowing.
    ///
    /// ## Example
    /// ```rust
    /// use royal_core::money::Money;
    ///
    /// let subtotal = Money::from_cents(25000);
    /// assert_eq!(subtotal.percentage_of_bps(1000).cents(), 2500); // 10%
    /// ```
    pub fn percentage_of_bps(&self, bps: i64) -> Money {
        let product = self.0 as i128 * bps as i128;
        let rounded = if product >= 0 {
            (product + 5000) / 10000
        } else {
            (product - 5000) / 10000
        };
        Money(clamp_to_i64(rounded))
    }

    /// Returns `pct` percent of this amount at full precision, rounded half
    /// away from zero to the paisa.
    ///
    /// Used for counter discounts, which may carry more decimals than basis
    /// points can hold. NaN yields zero and the result saturates at the i64
    /// range.
    ///
    /// ## Example
    /// ```rust
    /// use royal_core::money::Money;
    ///
    /// let subtotal = Money::from_cents(33300);       // ₹333.00
    /// assert_eq!(subtotal.percentage_of(33.333).cents(), 11100);
    /// ```
    pub fn percentage_of(&self, pct: f64) -> Money {
        // `as` saturates and maps NaN to zero
        Money((self.0 as f64 * pct / 100.0).round() as i64)
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use royal_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(6000); // ₹60.00
    /// assert_eq!(unit_price.multiply_quantity(3).cents(), 18000);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Adds two amounts, saturating at the numeric bounds.
    #[inline]
    pub const fn saturating_add(self, other: Money) -> Self {
        Money(self.0.saturating_add(other.0))
    }

    /// Subtracts two amounts, saturating at the numeric bounds.
    #[inline]
    pub const fn saturating_sub(self, other: Money) -> Self {
        Money(self.0.saturating_sub(other.0))
    }

    /// Formats the amount with exactly two decimals and no currency symbol.
    ///
    /// ## Example
    /// ```rust
    /// use royal_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(26250).to_decimal_string(), "262.50");
    /// assert_eq!(Money::from_cents(-5).to_decimal_string(), "-0.05");
    /// ```
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.major().abs(), self.minor())
    }
}

fn clamp_to_i64(value: i128) -> i64 {
    if value > i64::MAX as i128 {
        i64::MAX
    } else if value < i64::MIN as i128 {
        i64::MIN
    } else {
        value as i64
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money the way it is printed on a bill: `₹262.50`, `-₹5.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}{}{}.{:02}",
            sign,
            CURRENCY_SYMBOL,
            self.major().abs(),
            self.minor()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by i64 (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

/// Saturating sum, so a runaway cart cannot panic the pricing path.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Money::saturating_add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
