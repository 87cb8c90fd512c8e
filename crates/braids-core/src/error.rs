//! # Error Types
//!
//! Domain-specific error types for the checkout core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  braids-core errors (this file)                                        │
//! │  ├── ConfigError    - Bracelet allowlist validation failures           │
//! │  ├── PricingError   - Malformed pricing-engine input (caller bug)      │
//! │  └── CheckoutError  - Everything the checkout pipeline reports         │
//! │                                                                         │
//! │  Flow: ConfigError ─┐                                                  │
//! │                     ├──► CheckoutError ──► HTTP layer ──► Shopper      │
//! │       PricingError ─┘                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, rejected value, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each variant's message is the exact user-facing text; the HTTP glue
//!    returns `to_string()` verbatim as the 4xx body
//!
//! ## Taxonomy
//! - Input-shape errors (`EmptyCart`, `ConfigError::Missing`) and policy
//!   violations (`InvalidQuantity`, `UnsupportedShippingRegion`) are
//!   reported to the caller and never fatal.
//! - Lookup errors (`ProductNotFound`, `UnknownDiscountCode`) are reported
//!   verbatim.
//! - Resource conflicts (`InsufficientStock`) are reported before any state
//!   is mutated.
//! - Data-integrity defects (`ConfigError::OptionsUnavailable`) indicate a
//!   broken catalog entry, not a user mistake, but still surface as a
//!   request failure rather than a crash.
//! - `PricingError` marks a programming error upstream (the pricing engine
//!   was handed something that is not a configuration object); it is never
//!   produced by shopper input that passed cart validation.

use thiserror::Error;

// =============================================================================
// Config Error
// =============================================================================

/// Bracelet configuration validation failures.
///
/// Every paracord-bracelet order must carry exactly five configuration
/// dimensions (color, style, length, material, clasp), each value taken
/// from the product's `config_options` allowlist. This validation is the
/// primary defense preventing arbitrary client strings from reaching
/// payment-processor metadata or fulfilment records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Configuration absent, or not a keyed JSON object (arrays and
    /// scalars are rejected).
    #[error("Bracelet configuration is required.")]
    Missing,

    /// The product's allowlist structure itself is missing.
    ///
    /// ## When This Occurs
    /// A catalog entry in the configurable category was seeded without its
    /// `config_options`. This is a catalog data defect, not a user error.
    #[error("Product configuration options are unavailable.")]
    OptionsUnavailable,

    /// A required configuration dimension was not submitted.
    #[error("Missing bracelet configuration option: \"{key}\".")]
    MissingKey { key: &'static str },

    /// The catalog defines no allowed values for this dimension.
    #[error("No allowed values defined for bracelet option \"{key}\".")]
    NoAllowedValues { key: &'static str },

    /// The submitted value is not a string or is not in the allowlist.
    ///
    /// The message enumerates the allowed values so the storefront can show
    /// the shopper exactly what the configurator accepts.
    #[error("Invalid value \"{value}\" for bracelet option \"{key}\". Allowed: {}.", .allowed.join(", "))]
    InvalidValue {
        key: &'static str,
        value: String,
        allowed: Vec<String>,
    },
}

// =============================================================================
// Pricing Error
// =============================================================================

/// Malformed input to the pricing engine.
///
/// ## When This Occurs
/// Only when a caller hands the engine something that is not a JSON object.
/// Cart validation guarantees every configurable item carries an object
/// config, so seeing this error means a bug upstream, never user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// Config is not a keyed JSON object.
    #[error("Bracelet configuration must be a plain object.")]
    InvalidConfigType,
}

// =============================================================================
// Checkout Error
// =============================================================================

/// Errors reported by the checkout pipeline.
///
/// These are the discriminated outcomes callers branch on to produce the
/// correct user-facing message. Nothing in this enum aborts the process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// Cart payload is not a non-empty JSON array.
    #[error("Cart must be a non-empty array.")]
    EmptyCart,

    /// Product id did not coerce to a positive integer.
    ///
    /// `raw` preserves the client's original value for the error message.
    #[error("Invalid product ID: {raw}")]
    InvalidProductId { raw: String },

    /// Quantity did not coerce to an integer in [1, 99].
    #[error("Invalid quantity for product {product_id}: must be between 1 and 99.")]
    InvalidQuantity { product_id: i64 },

    /// No catalog entry matches the requested id.
    #[error("Product not found: {id}")]
    ProductNotFound { id: i64 },

    /// A configurable product was ordered without a configuration.
    #[error("Bracelet configuration is required for product {product_id}.")]
    ConfigRequired { product_id: i64 },

    /// Bracelet configuration failed allowlist validation.
    /// Propagated verbatim from the configuration validator.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Shipping country absent or blank.
    #[error("Shipping country is required.")]
    ShippingCountryRequired,

    /// Destination is outside the allowed shipping region.
    #[error("Shipping is only available within the United States.")]
    UnsupportedShippingRegion,

    /// Discount code absent or blank.
    #[error("Discount code is required.")]
    DiscountCodeRequired,

    /// Subtotal handed to the discount engine was negative.
    #[error("Subtotal must be a non-negative amount.")]
    InvalidSubtotal,

    /// Discount code is not in the registry.
    #[error("Invalid discount code: {code}")]
    UnknownDiscountCode { code: String },

    /// Stock deduction called with no items.
    #[error("No items provided for stock deduction.")]
    NoItemsToDeduct,

    /// A deduction would oversell a product.
    ///
    /// ## Guarantee
    /// Reported from the check phase of the two-phase stock ledger, before
    /// any catalog entry has been decremented.
    #[error("Insufficient stock for \"{name}\": {available} available, {requested} requested.")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// Pricing engine rejected its input (wraps PricingError).
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CheckoutError.
pub type CheckoutResult<T> = Result<T, CheckoutError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_error_messages() {
        let err = CheckoutError::InsufficientStock {
            name: "Edge Control".to_string(),
            available: 3,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for \"Edge Control\": 3 available, 5 requested."
        );

        let err = CheckoutError::InvalidQuantity { product_id: 14 };
        assert_eq!(
            err.to_string(),
            "Invalid quantity for product 14: must be between 1 and 99."
        );
    }

    #[test]
    fn test_config_error_enumerates_allowed_values() {
        let err = ConfigError::InvalidValue {
            key: "clasp",
            value: "Magnetic".to_string(),
            allowed: vec![
                "Sliding Knot".to_string(),
                "Buckle Clasp".to_string(),
                "Shackle Clasp".to_string(),
            ],
        };
        assert_eq!(
            err.to_string(),
            "Invalid value \"Magnetic\" for bracelet option \"clasp\". \
             Allowed: Sliding Knot, Buckle Clasp, Shackle Clasp."
        );
    }

    #[test]
    fn test_config_error_converts_to_checkout_error() {
        let config_err = ConfigError::MissingKey { key: "color" };
        let checkout_err: CheckoutError = config_err.clone().into();
        assert!(matches!(checkout_err, CheckoutError::Config(_)));
        // Transparent wrapping: the user-facing message is unchanged.
        assert_eq!(checkout_err.to_string(), config_err.to_string());
    }

    #[test]
    fn test_pricing_error_converts_to_checkout_error() {
        let err: CheckoutError = PricingError::InvalidConfigType.into();
        assert!(matches!(err, CheckoutError::Pricing(_)));
    }
}
