//! # Domain Types
//!
//! Core domain types used throughout the checkout pipeline.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │  ValidatedItem  │   │    LineItem     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (i64)       │   │  product        │   │  price_data     │       │
//! │  │  category       │──►│  quantity       │──►│  quantity       │       │
//! │  │  price_cents    │   │  config?        │   │  (Stripe shape) │       │
//! │  │  config_options │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                   │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ PriceBreakdown  │   │  DiscountRule   │   │ ProductCategory │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  base           │   │  Percent{bps}   │   │  5 fixed tags   │       │
//! │  │  adjustments[]  │   │  Flat{amount}   │   │  kebab-case     │       │
//! │  │  total          │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Trust Boundary
//! Raw cart payloads stay as `serde_json::Value` until cart validation has
//! resolved them against the catalog; `ValidatedItem` is the first type in
//! the pipeline whose price and stock are guaranteed catalog-sourced.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product Category
// =============================================================================

/// Category tag for every catalog product.
///
/// Serialized kebab-case to match the storefront's category filter values
/// (`"braiding-services"`, `"paracord-bracelets"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum ProductCategory {
    /// Box braids, cornrows, twists and similar appointments.
    BraidingServices,
    /// Wash, press and treatment appointments.
    NaturalHair,
    /// Wig and extension installs.
    WigsExtensions,
    /// Physical retail products with real stock counts.
    HairProducts,
    /// Customisable paracord bracelets - the only configurable category.
    ParacordBracelets,
}

impl ProductCategory {
    /// Whether products in this category carry a `config_options` allowlist
    /// and are priced live at checkout.
    #[inline]
    pub const fn is_configurable(&self) -> bool {
        matches!(self, ProductCategory::ParacordBracelets)
    }

    /// The kebab-case tag, matching both the serde form and the
    /// storefront's filter values.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::BraidingServices => "braiding-services",
            ProductCategory::NaturalHair => "natural-hair",
            ProductCategory::WigsExtensions => "wigs-extensions",
            ProductCategory::HairProducts => "hair-products",
            ProductCategory::ParacordBracelets => "paracord-bracelets",
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product in the authoritative server-side catalog.
///
/// ## Invariant
/// The catalog is the single source of truth for price and stock. Client
/// payloads reference products by id only; any price a client submits is
/// ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique positive integer identifier.
    pub id: i64,

    /// Display name shown on the storefront and in line items.
    pub name: String,

    /// Category tag.
    pub category: ProductCategory,

    /// Base price in cents. For bracelets this is the minimum (no add-on)
    /// price; the live total comes from the pricing engine.
    pub price_cents: i64,

    /// Available units. Services use [`crate::UNLIMITED_STOCK_SENTINEL`].
    pub stock: i64,

    /// Display description; also the default line-item description.
    pub description: String,

    /// Allowlist of customer-selectable values per configuration dimension.
    /// Present only for the configurable category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_options: Option<HashMap<String, Vec<String>>>,
}

impl Product {
    /// Returns the base price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Whether this product requires a validated configuration at checkout.
    #[inline]
    pub fn is_configurable(&self) -> bool {
        self.category.is_configurable()
    }

    /// Whether stock is the service sentinel rather than a real count.
    #[inline]
    pub fn has_unlimited_stock(&self) -> bool {
        self.stock >= crate::UNLIMITED_STOCK_SENTINEL
    }
}

// =============================================================================
// Validated Item
// =============================================================================

/// A cart line that passed validation.
///
/// Pairs a clone of the authoritative catalog product with the checked
/// quantity and, for bracelets, the checked configuration.
///
/// ## Design Notes
/// - `product` is a catalog snapshot taken at validation time, never client
///   data. The stock ledger re-resolves against the live catalog anyway, so
///   a stale snapshot can never oversell.
/// - `config` stays a `serde_json::Value`; by this point every value in it
///   has passed the allowlist check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatedItem {
    /// Catalog product snapshot (authoritative price and description).
    pub product: Product,

    /// Checked quantity, always in [1, 99].
    pub quantity: i64,

    /// Checked bracelet configuration, when the item carried one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<Value>,
}

// =============================================================================
// Price Breakdown
// =============================================================================

/// One triggered pricing rule: a label and a strictly positive amount.
///
/// Zero-amount rules are never recorded; a breakdown lists only the add-ons
/// that actually cost something.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Adjustment {
    /// Human-readable rule label ("King Cobra Weave", "Neon Accent", ...).
    pub label: String,

    /// Surcharge amount in cents.
    pub amount: Money,
}

/// Full price breakdown for a configured bracelet.
///
/// Recomputed fresh on every pricing request; never cached or mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriceBreakdown {
    /// The fixed bracelet base price.
    pub base: Money,

    /// Triggered rules, in fixed evaluation order.
    pub adjustments: Vec<Adjustment>,

    /// Final price: base + adjustments, re-rounded to psychological .99.
    pub total: Money,
}

// =============================================================================
// Discount Types
// =============================================================================

/// A discount rule from the fixed registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum DiscountRule {
    /// Percentage off the subtotal, in basis points (1000 = 10%).
    Percent { bps: u32 },
    /// Fixed amount off the subtotal, capped at the subtotal itself.
    Flat { amount: Money },
}

/// Result of successfully applying a discount code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiscountOutcome {
    /// Amount taken off the subtotal. Never exceeds the subtotal.
    pub discount_amount: Money,

    /// Subtotal minus discount. Never negative.
    pub total: Money,
}

// =============================================================================
// Line Item (payment processor shape)
// =============================================================================

/// Name and description shown on the hosted checkout page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductData {
    pub name: String,
    pub description: String,
}

/// Price block of a checkout line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriceData {
    /// ISO 4217 currency code, lowercase ("usd").
    pub currency: String,

    pub product_data: ProductData,

    /// Unit price in the processor's minor-unit integer representation.
    /// Money serializes as bare cents, which is exactly that shape.
    pub unit_amount: Money,
}

/// A priced, described unit destined for the payment processor's checkout
/// session. Field layout mirrors the processor's `line_items` API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    pub price_data: PriceData,
    pub quantity: i64,
}

// =============================================================================
// Unit Tests
// =============================================================================
