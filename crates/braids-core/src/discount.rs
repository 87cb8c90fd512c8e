//! # Discount Engine
//!
//! Applies a named discount code to an order subtotal.
//!
//! ## Registry
//! The code registry is fixed at process start:
//!
//! | Code     | Rule           |
//! |----------|----------------|
//! | BRAID10  | 10% off        |
//! | BRAID20  | 20% off        |
//! | WELCOME5 | $5 flat off    |
//! | SAVE15   | $15 flat off   |
//!
//! Codes are case-insensitive and whitespace-tolerant: `" welcome5 "`
//! resolves to `WELCOME5`.
//!
//! ## Invariant
//! A discount can never exceed the subtotal, so the discounted total is
//! never negative.

use crate::error::{CheckoutError, CheckoutResult};
use crate::money::Money;
use crate::types::{DiscountOutcome, DiscountRule};

/// Discount code registry. Codes are stored upper-case; lookup normalizes
/// the submitted code before matching.
pub const DISCOUNT_CODES: [(&str, DiscountRule); 4] = [
    ("BRAID10", DiscountRule::Percent { bps: 1000 }),
    ("BRAID20", DiscountRule::Percent { bps: 2000 }),
    (
        "WELCOME5",
        DiscountRule::Flat {
            amount: Money::from_cents(500),
        },
    ),
    (
        "SAVE15",
        DiscountRule::Flat {
            amount: Money::from_cents(1500),
        },
    ),
];

/// Looks up a discount rule by normalized (trimmed, upper-cased) code.
pub fn lookup_discount(code: &str) -> Option<DiscountRule> {
    let normalized = code.trim().to_uppercase();
    DISCOUNT_CODES
        .iter()
        .find(|(registered, _)| *registered == normalized)
        .map(|(_, rule)| *rule)
}

/// Applies a discount code to a subtotal.
///
/// ## Errors
/// - [`CheckoutError::DiscountCodeRequired`] for a blank code
/// - [`CheckoutError::InvalidSubtotal`] for a negative subtotal (a
///   programming error upstream; subtotals come from catalog prices)
/// - [`CheckoutError::UnknownDiscountCode`] when the normalized code is
///   not registered
///
/// ## Example
/// ```rust
/// use braids_core::discount::apply_discount;
/// use braids_core::money::Money;
///
/// let outcome = apply_discount("WELCOME5", Money::from_cents(4000)).unwrap();
/// assert_eq!(outcome.discount_amount.cents(), 500);
/// assert_eq!(outcome.total.cents(), 3500);
/// ```
pub fn apply_discount(code: &str, subtotal: Money) -> CheckoutResult<DiscountOutcome> {
    if code.trim().is_empty() {
        return Err(CheckoutError::DiscountCodeRequired);
    }

    if subtotal.is_negative() {
        return Err(CheckoutError::InvalidSubtotal);
    }

    let rule = lookup_discount(code).ok_or_else(|| CheckoutError::UnknownDiscountCode {
        code: code.to_string(),
    })?;

    let discount_amount = match rule {
        DiscountRule::Percent { bps } => subtotal.percentage(bps),
        // Flat discount: cannot exceed the subtotal.
        DiscountRule::Flat { amount } => amount.min(subtotal),
    };

    Ok(DiscountOutcome {
        discount_amount,
        total: subtotal - discount_amount,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
