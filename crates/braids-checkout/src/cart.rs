//! # Cart Validation
//!
//! Resolves an untrusted cart payload against the authoritative catalog.
//!
//! ## Validation Steps
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Cart Validation                                    │
//! │                                                                         │
//! │  payload                                                                │
//! │    ├── not a non-empty array? ────────► EmptyCart                      │
//! │    │                                                                    │
//! │  per item, in input order (fail-fast, first error wins):               │
//! │    ├── id not a positive integer? ────► InvalidProductId               │
//! │    ├── quantity outside 1..=99? ──────► InvalidQuantity                │
//! │    ├── no catalog entry? ─────────────► ProductNotFound                │
//! │    ├── bracelet without config? ──────► ConfigRequired                 │
//! │    ├── bracelet config fails                                           │
//! │    │   allowlist check? ──────────────► Config(...) verbatim           │
//! │    ▼                                                                    │
//! │  Vec<ValidatedItem>  (catalog-sourced products, checked quantities)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Coercion
//! Storefront clients send ids and quantities as numbers or numeric
//! strings. Both are accepted; integral floats pass, fractional values are
//! rejected as invalid.

use serde_json::Value;
use tracing::debug;

use braids_core::config::validate_bracelet_config;
use braids_core::{
    CheckoutError, CheckoutResult, ValidatedItem, MAX_ITEM_QUANTITY, MIN_ITEM_QUANTITY,
};

use crate::catalog::CatalogStore;

/// Coerces a JSON value to an integer, accepting numbers and numeric
/// strings. Fractional values (1.5, "1.5") are rejected.
fn coerce_integer(value: &Value) -> Option<i64> {
    let as_float = match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Some(i);
            }
            n.as_f64()
        }
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;

    (as_float.is_finite() && as_float.fract() == 0.0 && as_float.abs() < i64::MAX as f64)
        .then_some(as_float as i64)
}

/// Renders a raw JSON value for an error message: bare for strings,
/// JSON-encoded otherwise, "missing" when absent.
fn render_raw(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "missing".to_string(),
    }
}

/// Validates cart items against the authoritative product catalog.
///
/// Looks up each product by id and uses the catalog price, ignoring any
/// price submitted by the client. For paracord-bracelet products the
/// `config` field is required and validated against the product's
/// `config_options` allowlist.
///
/// On the first failure the whole cart is rejected with that single error;
/// there is no partial or aggregate error reporting.
///
/// ## Example
/// ```rust
/// use braids_checkout::{validate_cart, CatalogStore};
/// use serde_json::json;
///
/// let store = CatalogStore::with_seed_catalog();
/// let items = validate_cart(&store, &json!([{ "id": 14, "quantity": 2 }])).unwrap();
/// assert_eq!(items[0].product.name, "Edge Control");
/// ```
pub fn validate_cart(store: &CatalogStore, payload: &Value) -> CheckoutResult<Vec<ValidatedItem>> {
    let raw_items = match payload.as_array() {
        Some(items) if !items.is_empty() => items,
        _ => return Err(CheckoutError::EmptyCart),
    };

    debug!(items = raw_items.len(), "Validating cart");

    let mut validated = Vec::with_capacity(raw_items.len());

    for raw in raw_items {
        let id = coerce_integer(raw.get("id").unwrap_or(&Value::Null))
            .filter(|id| *id > 0)
            .ok_or_else(|| CheckoutError::InvalidProductId {
                raw: render_raw(raw.get("id")),
            })?;

        let quantity = coerce_integer(raw.get("quantity").unwrap_or(&Value::Null))
            .filter(|q| (MIN_ITEM_QUANTITY..=MAX_ITEM_QUANTITY).contains(q))
            .ok_or(CheckoutError::InvalidQuantity { product_id: id })?;

        let product = store
            .find_by_id(id)
            .ok_or(CheckoutError::ProductNotFound { id })?;

        let config = raw.get("config").filter(|c| !c.is_null()).cloned();

        if product.is_configurable() {
            let config = config
                .as_ref()
                .ok_or(CheckoutError::ConfigRequired { product_id: id })?;
            validate_bracelet_config(Some(config), product.config_options.as_ref())?;
        }

        validated.push(ValidatedItem {
            product,
            quantity,
            config,
        });
    }

    Ok(validated)
}

// =============================================================================
// Unit Tests
// =============================================================================
