//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  The original storefront computed bracelet totals in float dollars and  │
//! │  leaned on toFixed(2) to paper over drift.                              │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    $24.99 base + $6 weave = 2499 + 600 = 3099 cents, exactly           │
//! │    Psychological .99 rounding is exact integer math, no tolerance      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use braids_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(2499); // $24.99
//!
//! // Arithmetic operations
//! let with_clasp = price + Money::from_cents(500); // $29.99
//!
//! // NEVER do this:
//! // let bad = Money::from_float(24.99); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative intermediate values (e.g. subtotal
///   minus discount before the floor-at-zero cap is applied)
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support; serializes as a bare integer, which is
///   exactly the `unit_amount` shape the payment processor expects
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use braids_core::money::Money;
    ///
    /// let price = Money::from_cents(2499); // Represents $24.99
    /// assert_eq!(price.cents(), 2499);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
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

    /// Re-rounds a raw total to psychological .99 pricing.
    ///
    /// ## The Rule
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  PSYCHOLOGICAL PRICING                                              │
    /// │                                                                     │
    /// │  raw total ──► floor to whole dollars ──► add 99 cents             │
    /// │                                                                     │
    /// │  $30.99 → $30.00 → $30.99   (already .99, unchanged)               │
    /// │  $31.00 → $31.00 → $31.99   (pushed up to the next .99)            │
    /// │                                                                     │
    /// │  The bracelet base price ends in .99 and every pricing adjustment  │
    /// │  is a whole-dollar amount, so in practice this preserves the .99   │
    /// │  suffix rather than inventing a new price point.                   │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// This is NOT "round to nearest cent"; the exact floor-then-add rule is
    /// a pricing policy and is pinned by tests.
    ///
    /// ## Example
    /// ```rust
    /// use braids_core::money::Money;
    ///
    /// let raw = Money::from_cents(2499) + Money::from_cents(600);
    /// assert_eq!(raw.to_psychological().cents(), 3099); // $30.99
    /// ```
    #[inline]
    pub const fn to_psychological(self) -> Self {
        Money((self.0 / 100) * 100 + 99)
    }

    /// Calculates a percentage of this amount, given in basis points.
    ///
    /// ## Arguments
    /// * `bps` - Percentage in basis points (1000 = 10%)
    ///
    /// ## Implementation
    /// Integer math with round-half-up: `(cents * bps + 5000) / 10000`.
    /// i128 intermediate prevents overflow on large subtotals.
    ///
    /// ## Example
    /// ```rust
    /// use braids_core::money::Money;
    ///
    /// let subtotal = Money::from_cents(4000);      // $40.00
    /// let discount = subtotal.percentage(1000);    // 10%
    /// assert_eq!(discount.cents(), 400);           // $4.00
    /// ```
    pub fn percentage(&self, bps: u32) -> Money {
        let cents = (self.0 as i128 * bps as i128 + 5000) / 10000;
        Money::from_cents(cents as i64)
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use braids_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(1200); // $12.00
    /// let line_total = unit_price.multiply_quantity(2);
    /// assert_eq!(line_total.cents(), 2400); // $24.00
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging and error messages. The storefront formats prices
/// for display itself.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
