//! # Bracelet Configuration Validation
//!
//! Paracord bracelet products support customer-selectable options (color,
//! style, length, material, clasp). This module provides server-side
//! validation that rejects any value not present in the product's
//! authoritative `config_options` allowlist, so client-submitted choices can
//! never inject arbitrary strings into payment-processor metadata or order
//! records.
//!
//! ## Validation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │              Configuration Validation                                   │
//! │                                                                         │
//! │  client config (untrusted JSON)                                        │
//! │       │                                                                 │
//! │       ├── not an object / an array? ──► ConfigError::Missing           │
//! │       │                                                                 │
//! │  product allowlist                                                      │
//! │       ├── absent? ──────────────────► ConfigError::OptionsUnavailable  │
//! │       │                                                                 │
//! │  for each of color, style, length, material, clasp (fixed order):      │
//! │       ├── key absent? ──────────────► ConfigError::MissingKey          │
//! │       ├── no allowlist for key? ────► ConfigError::NoAllowedValues     │
//! │       ├── not a string / not in                                        │
//! │       │   allowlist? ───────────────► ConfigError::InvalidValue        │
//! │       │                               (enumerates the allowed set)     │
//! │       ▼                                                                 │
//! │  Ok(()) - safe to price and to put in session metadata                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;

use serde_json::Value;

use crate::error::ConfigError;

/// Required configuration dimensions for every paracord-bracelet order, in
/// the fixed order they are validated and formatted.
///
/// No dimension may be omitted, even ones with no price effect (material
/// currently never changes the price but is still mandatory).
pub const REQUIRED_CONFIG_KEYS: [&str; 5] = ["color", "style", "length", "material", "clasp"];

/// Display labels matching `REQUIRED_CONFIG_KEYS` position for position.
const CONFIG_LABELS: [&str; 5] = ["Color", "Style", "Length", "Material", "Clasp"];

/// Renders a JSON value the way the shopper typed it: bare for strings,
/// JSON-encoded for everything else.
fn render_value(value: &Value) -> String {
    match value.as_str() {
        Some(s) => s.to_string(),
        None => value.to_string(),
    }
}

/// Validates a bracelet configuration against the product's allowlist.
///
/// ## Arguments
/// * `config` - The customer-submitted configuration, still raw JSON.
/// * `options` - The product's `config_options` allowlist from the catalog.
///
/// ## Errors
/// See the module-level flow diagram; every failure names the offending
/// dimension and, for rejected values, enumerates the allowed set.
/// `OptionsUnavailable` and `NoAllowedValues` indicate a catalog data
/// defect rather than a user error but still surface as request failures.
///
/// No side effects.
pub fn validate_bracelet_config(
    config: Option<&Value>,
    options: Option<&HashMap<String, Vec<String>>>,
) -> Result<(), ConfigError> {
    let config = match config {
        Some(Value::Object(map)) => map,
        _ => return Err(ConfigError::Missing),
    };

    let options = options.ok_or(ConfigError::OptionsUnavailable)?;

    for key in REQUIRED_CONFIG_KEYS {
        let value = config.get(key).ok_or(ConfigError::MissingKey { key })?;
        let allowed = options
            .get(key)
            .ok_or(ConfigError::NoAllowedValues { key })?;

        match value.as_str() {
            Some(chosen) if allowed.iter().any(|a| a == chosen) => {}
            _ => {
                return Err(ConfigError::InvalidValue {
                    key,
                    value: render_value(value),
                    allowed: allowed.clone(),
                });
            }
        }
    }

    Ok(())
}

/// Builds a human-readable summary of a validated bracelet configuration.
///
/// Used both for the checkout line-item description and for session
/// metadata, so fulfilment can read the order straight from the payment
/// processor's dashboard.
///
/// ## Example
/// ```rust
/// use braids_core::config::format_bracelet_config;
/// use serde_json::json;
///
/// let config = json!({
///     "color": "Black", "style": "Fishtail", "length": "7in",
///     "material": "550 Paracord", "clasp": "Sliding Knot",
/// });
/// assert_eq!(
///     format_bracelet_config(&config),
///     "Color: Black | Style: Fishtail | Length: 7in | \
///      Material: 550 Paracord | Clasp: Sliding Knot"
/// );
/// ```
pub fn format_bracelet_config(config: &Value) -> String {
    REQUIRED_CONFIG_KEYS
        .into_iter()
        .zip(CONFIG_LABELS)
        .map(|(key, label)| {
            let value = config.get(key).and_then(Value::as_str).unwrap_or("");
            format!("{label}: {value}")
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

// =============================================================================
// Unit Tests
// =============================================================================
