//! # braids-core: Pure Business Logic for BlackhawkBraids
//!
//! This crate is the **heart** of the BlackhawkBraids checkout backend. It
//! contains all business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   BlackhawkBraids Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Storefront Frontend (JS)                       │   │
//! │  │   Catalog UI ──► Bracelet Configurator ──► Cart ──► Checkout   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ HTTP (JSON)                            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              braids-checkout (stateful layer)                   │   │
//! │  │   CatalogStore, validate_cart, deduct_stock, prepare_session   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ braids-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  pricing  │  │  config   │  │   │
//! │  │   │  Product  │  │   Money   │  │   rules   │  │ allowlist │  │   │
//! │  │   │ LineItem  │  │  .99 math │  │ breakdown │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO SHARED STATE • NO NETWORK • PURE FUNCTIONS       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, ValidatedItem, PriceBreakdown, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`config`] - Bracelet configuration allowlist validation
//! - [`pricing`] - Live bracelet pricing rules
//! - [`discount`] - Discount code registry and application
//! - [`shipping`] - US-only shipping policy
//! - [`lineitem`] - Payment-processor line-item construction
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, and shared state access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//! 5. **Catalog Is Authoritative**: Client-submitted prices are never trusted;
//!    every price flows from the catalog or the pricing engine
//!
//! ## Example Usage
//!
//! ```rust
//! use braids_core::pricing::calculate_bracelet_price;
//! use serde_json::json;
//!
//! let config = json!({
//!     "color": "Neon Blue",
//!     "style": "King Cobra Weave",
//!     "length": "7in",
//!     "material": "550 Paracord",
//!     "clasp": "Shackle Clasp",
//! });
//!
//! // $24.99 base + $6 weave + $5 clasp + $2 neon accent = $37.99
//! let breakdown = calculate_bracelet_price(&config).unwrap();
//! assert_eq!(breakdown.total.cents(), 3799);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod discount;
pub mod error;
pub mod lineitem;
pub mod money;
pub mod pricing;
pub mod shipping;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use braids_core::Money` instead of
// `use braids_core::money::Money`

pub use error::{CheckoutError, CheckoutResult, ConfigError, PricingError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity of a single line item in one order.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 100 instead of 10) and
/// keeps a single checkout session within a realistic fulfilment size.
pub const MAX_ITEM_QUANTITY: i64 = 99;

/// Minimum quantity of a single line item in one order.
pub const MIN_ITEM_QUANTITY: i64 = 1;

/// Stock level used to mark service products as effectively unlimited.
///
/// ## Why a sentinel?
/// Braiding appointments and similar services have no physical inventory.
/// The catalog uses a high stock count so the stock ledger can treat every
/// product uniformly instead of special-casing services.
pub const UNLIMITED_STOCK_SENTINEL: i64 = 999;

/// Settlement currency for all checkout sessions (ISO 4217, lowercase as
/// the payment processor expects it).
pub const CURRENCY: &str = "usd";
