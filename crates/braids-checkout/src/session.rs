//! # Checkout Session Preparation
//!
//! Runs the full validation-and-pricing pipeline and produces everything
//! the HTTP glue needs to create a payment-processor checkout session.
//!
//! The processor API call itself (and its webhook) live outside this
//! workspace; this module stops at the handoff boundary.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use braids_core::lineitem::{bracelet_metadata, build_line_items};
use braids_core::shipping::validate_shipping_country;
use braids_core::{CheckoutResult, LineItem};

use crate::cart::validate_cart;
use crate::catalog::CatalogStore;

/// Everything needed to create a checkout session with the payment
/// processor: priced line items plus the bracelet-configuration metadata
/// side channel for audit and fulfilment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionRequest {
    pub line_items: Vec<LineItem>,

    /// `bracelet_config_{n}` -> formatted configuration summary, keyed by
    /// 1-based cart position.
    pub metadata: BTreeMap<String, String>,
}

/// Validates a cart and shipping destination, then builds the session
/// request.
///
/// Mirrors the storefront checkout endpoint: cart validation (including
/// bracelet allowlist checks), US-only shipping enforcement, line-item
/// construction with live bracelet pricing, and metadata collection.
/// Stock is NOT deducted here; that happens on payment confirmation.
pub fn prepare_session(
    store: &CatalogStore,
    cart_payload: &Value,
    country: Option<&str>,
) -> CheckoutResult<SessionRequest> {
    let items = validate_cart(store, cart_payload)?;
    validate_shipping_country(country)?;

    let line_items = build_line_items(&items)?;
    let metadata = bracelet_metadata(&items);

    debug!(
        lines = line_items.len(),
        bracelets = metadata.len(),
        "Checkout session prepared"
    );

    Ok(SessionRequest {
        line_items,
        metadata,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
