//! # Line-Item Builder
//!
//! Transforms a validated cart into payment-processor-ready line items.
//!
//! ## Pricing Substitution
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 Line-Item Construction                                  │
//! │                                                                         │
//! │  ValidatedItem                                                          │
//! │       │                                                                 │
//! │       ├── bracelet with config? ──► description = formatted config     │
//! │       │                             unit_amount = live pricing total   │
//! │       │                                                                 │
//! │       └── everything else ────────► description = catalog description  │
//! │                                     unit_amount = catalog price        │
//! │                                                                         │
//! │  Quantity carried through unchanged; output order = input order.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All prices are already integer cents (`Money`), which is the minor-unit
//! representation the processor's `unit_amount` field expects.

use std::collections::BTreeMap;

use crate::config::format_bracelet_config;
use crate::error::PricingError;
use crate::pricing::calculate_bracelet_price;
use crate::types::{LineItem, PriceData, ProductData, ValidatedItem};
use crate::CURRENCY;

/// Builds checkout line items from server-validated cart items.
///
/// For bracelet items the customer's validated configuration replaces the
/// catalog description and the live price replaces the static base price.
///
/// ## Errors
/// Propagates [`PricingError`] from the pricing engine. Unreachable for
/// items produced by cart validation, which guarantees every bracelet
/// config is an object.
pub fn build_line_items(items: &[ValidatedItem]) -> Result<Vec<LineItem>, PricingError> {
    items
        .iter()
        .map(|item| {
            let (description, unit_amount) = match &item.config {
                Some(config) if item.product.is_configurable() => {
                    let breakdown = calculate_bracelet_price(config)?;
                    (format_bracelet_config(config), breakdown.total)
                }
                _ => (item.product.description.clone(), item.product.price()),
            };

            Ok(LineItem {
                price_data: PriceData {
                    currency: CURRENCY.to_string(),
                    product_data: ProductData {
                        name: item.product.name.clone(),
                        description,
                    },
                    unit_amount,
                },
                quantity: item.quantity,
            })
        })
        .collect()
}

/// Collects bracelet configurations for session metadata.
///
/// Keys are `bracelet_config_{n}` where `n` is the 1-based cart position,
/// so fulfilment can match each summary back to its line item in the
/// processor dashboard.
pub fn bracelet_metadata(items: &[ValidatedItem]) -> BTreeMap<String, String> {
    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match &item.config {
            Some(config) if item.product.is_configurable() => Some((
                format!("bracelet_config_{}", index + 1),
                format_bracelet_config(config),
            )),
            _ => None,
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Product, ProductCategory};
    use serde_json::json;
    use std::collections::HashMap;

    fn bracelet_product() -> Product {
        let options: HashMap<String, Vec<String>> = [
            ("color", vec!["Black", "Neon Blue"]),
            ("style", vec!["Tactical Cobra Weave", "King Cobra Weave"]),
            ("length", vec!["7in", "9in"]),
            ("material", vec!["550 Paracord"]),
            ("clasp", vec!["Sliding Knot", "Shackle Clasp"]),
        ]
        .into_iter()
        .map(|(k, vs)| (k.to_string(), vs.into_iter().map(String::from).collect()))
        .collect();

        Product {
            id: 19,
            name: "Custom Paracord Bracelet".to_string(),
            category: ProductCategory::ParacordBracelets,
            price_cents: 2499,
            stock: 150,
            description: "Handcrafted paracord bracelet.".to_string(),
            config_options: Some(options),
        }
    }

    fn edge_control_product() -> Product {
        Product {
            id: 14,
            name: "Edge Control".to_string(),
            category: ProductCategory::HairProducts,
            price_cents: 1200,
            stock: 50,
            description: "Strong-hold edge control gel.".to_string(),
            config_options: None,
        }
    }

    fn base_config() -> serde_json::Value {
        json!({
            "color": "Black",
            "style": "Tactical Cobra Weave",
            "length": "7in",
            "material": "550 Paracord",
            "clasp": "Sliding Knot",
        })
    }

    #[test]
    fn test_bracelet_line_uses_live_price_and_formatted_description() {
        let items = vec![
            ValidatedItem {
                product: bracelet_product(),
                quantity: 1,
                config: Some(base_config()),
            },
            ValidatedItem {
                product: edge_control_product(),
                quantity: 2,
                config: None,
            },
        ];

        let lines = build_line_items(&items).unwrap();
        assert_eq!(lines.len(), 2);

        // Bracelet: live-priced, described by its configuration.
        assert_eq!(lines[0].price_data.unit_amount.cents(), 2499);
        assert!(lines[0]
            .price_data
            .product_data
            .description
            .starts_with("Color: Black | Style: Tactical Cobra Weave"));
        assert_eq!(lines[0].quantity, 1);

        // Standard product: catalog price and description pass through.
        assert_eq!(lines[1].price_data.unit_amount.cents(), 1200);
        assert_eq!(
            lines[1].price_data.product_data.description,
            "Strong-hold edge control gel."
        );
        assert_eq!(lines[1].quantity, 2);
        assert_eq!(lines[1].price_data.currency, "usd");
    }

    #[test]
    fn test_configured_bracelet_with_addons_is_repriced() {
        let config = json!({
            "color": "Neon Blue",
            "style": "King Cobra Weave",
            "length": "7in",
            "material": "550 Paracord",
            "clasp": "Shackle Clasp",
        });
        let items = vec![ValidatedItem {
            product: bracelet_product(),
            quantity: 1,
            config: Some(config),
        }];

        let lines = build_line_items(&items).unwrap();
        assert_eq!(lines[0].price_data.unit_amount.cents(), 3799);
    }

    #[test]
    fn test_config_on_non_configurable_product_is_ignored() {
        // A stray config on a standard product never overrides catalog data.
        let items = vec![ValidatedItem {
            product: edge_control_product(),
            quantity: 1,
            config: Some(base_config()),
        }];

        let lines = build_line_items(&items).unwrap();
        assert_eq!(lines[0].price_data.unit_amount.cents(), 1200);
        assert_eq!(
            lines[0].price_data.product_data.description,
            "Strong-hold edge control gel."
        );
    }

    #[test]
    fn test_metadata_maps_cart_positions_to_summaries() {
        let items = vec![
            ValidatedItem {
                product: edge_control_product(),
                quantity: 1,
                config: None,
            },
            ValidatedItem {
                product: bracelet_product(),
                quantity: 1,
                config: Some(base_config()),
            },
        ];

        let metadata = bracelet_metadata(&items);
        assert_eq!(metadata.len(), 1);
        // 1-based position: the bracelet is the second cart line.
        let summary = metadata.get("bracelet_config_2").unwrap();
        assert!(summary.contains("Clasp: Sliding Knot"));
    }

    #[test]
    fn test_metadata_is_empty_without_bracelets() {
        let items = vec![ValidatedItem {
            product: edge_control_product(),
            quantity: 3,
            config: None,
        }];
        assert!(bracelet_metadata(&items).is_empty());
    }
}
