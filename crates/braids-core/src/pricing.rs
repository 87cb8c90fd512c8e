//! # Live Bracelet Pricing Engine
//!
//! Computes the final price for a custom paracord bracelet from its
//! validated configuration.
//!
//! ## Rule Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Base price:            $24.99                                          │
//! │                                                                         │
//! │  Weave adjustments:                                                     │
//! │    Tactical Cobra Weave   +$0  (standard)                               │
//! │    King Cobra Weave       +$6  (double-layer weave, ~2x paracord)       │
//! │    Solomon Bar            +$3                                           │
//! │    Fishtail               +$3                                           │
//! │                                                                         │
//! │  Hardware adjustments:                                                  │
//! │    Sliding Knot           +$0  (standard)                               │
//! │    Buckle Clasp           +$0  (standard plastic buckle)                │
//! │    Shackle Clasp          +$5  (steel shackle, premium hardware)        │
//! │                                                                         │
//! │  Accent adjustment:                                                     │
//! │    Neon Accent            +$2  (color "Neon Blue" or                    │
//! │                                 "Black & Neon Blue")                    │
//! │                                                                         │
//! │  Oversize surcharge:                                                    │
//! │    Wrist > 8.5 in         +$3                                           │
//! │                                                                         │
//! │  Final total = psychological .99 rounding of base + adjustments,       │
//! │  never less than the base price.                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rule Evaluation Model
//! Each rule is a pure `fn(&config) -> Option<Adjustment>`; the engine folds
//! the fixed, ordered [`PRICING_RULES`] list. Adding a rule means writing
//! one function and appending it to the list.
//!
//! ## Permissive Fallbacks (deliberate policy)
//! Two rules fall through to zero instead of failing:
//! - an unrecognized style or clasp value contributes no surcharge
//! - an unparseable length string skips the oversize surcharge silently
//!
//! Cart validation already rejects values outside the catalog allowlist, so
//! these fallbacks only matter for callers pricing ad-hoc configurations.
//! Tests pin both fallbacks; changing them to hard errors is a product
//! decision, not a refactor.
//!
//! ## Backend Safety
//! The storefront may display a live-calculated price for UX purposes, but
//! the server always recalculates with this module before creating a
//! checkout session. No I/O, no randomness: a pure function of its input.

use serde_json::{Map, Value};

use crate::error::PricingError;
use crate::money::Money;
use crate::types::{Adjustment, PriceBreakdown};

// =============================================================================
// Rule Constants
// =============================================================================

/// Base price for any paracord bracelet before add-ons.
pub const BRACELET_BASE_PRICE: Money = Money::from_cents(2499);

/// Surcharge in cents for each weave style.
/// Keys must match the `style` values in the catalog allowlist.
const WEAVE_ADJUSTMENTS: [(&str, i64); 4] = [
    ("Tactical Cobra Weave", 0),
    ("King Cobra Weave", 600),
    ("Solomon Bar", 300),
    ("Fishtail", 300),
];

/// Surcharge in cents for each clasp/hardware option.
/// Keys must match the `clasp` values in the catalog allowlist.
const HARDWARE_ADJUSTMENTS: [(&str, i64); 3] = [
    ("Sliding Knot", 0),
    ("Buckle Clasp", 0),
    ("Shackle Clasp", 500),
];

/// Color values that trigger the neon-accent surcharge.
pub const NEON_ACCENT_COLORS: [&str; 2] = ["Neon Blue", "Black & Neon Blue"];

/// Surcharge in cents when a neon accent color is selected.
const NEON_ACCENT_ADJUSTMENT: i64 = 200;

/// Wrist size in inches above which the oversize surcharge applies.
const OVERSIZE_WRIST_THRESHOLD: f64 = 8.5;

/// Surcharge in cents for wrists larger than the threshold.
const OVERSIZE_ADJUSTMENT: i64 = 300;

// =============================================================================
// Pricing Rules
// =============================================================================

/// A single pricing rule: reads the configuration, returns an adjustment
/// only when it triggers with a strictly positive amount.
type PricingRule = fn(&Map<String, Value>) -> Option<Adjustment>;

/// The fixed, ordered rule set. Evaluation order is part of the contract:
/// the breakdown lists adjustments in exactly this order.
const PRICING_RULES: [PricingRule; 4] = [weave_rule, hardware_rule, neon_accent_rule, oversize_rule];

fn table_lookup(table: &[(&str, i64)], key: &str) -> i64 {
    table
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, cents)| *cents)
        .unwrap_or(0)
}

/// Weave style surcharge, labeled with the style itself.
fn weave_rule(config: &Map<String, Value>) -> Option<Adjustment> {
    let style = config.get("style").and_then(Value::as_str)?;
    let cents = table_lookup(&WEAVE_ADJUSTMENTS, style);
    (cents > 0).then(|| Adjustment {
        label: style.to_string(),
        amount: Money::from_cents(cents),
    })
}

/// Clasp/hardware surcharge, labeled with the clasp itself.
fn hardware_rule(config: &Map<String, Value>) -> Option<Adjustment> {
    let clasp = config.get("clasp").and_then(Value::as_str)?;
    let cents = table_lookup(&HARDWARE_ADJUSTMENTS, clasp);
    (cents > 0).then(|| Adjustment {
        label: clasp.to_string(),
        amount: Money::from_cents(cents),
    })
}

/// Flat surcharge when the selected color contains a neon accent.
fn neon_accent_rule(config: &Map<String, Value>) -> Option<Adjustment> {
    let color = config.get("color").and_then(Value::as_str)?;
    NEON_ACCENT_COLORS.contains(&color).then(|| Adjustment {
        label: "Neon Accent".to_string(),
        amount: Money::from_cents(NEON_ACCENT_ADJUSTMENT),
    })
}

/// Oversize surcharge, derived from the length option (e.g. "9in").
///
/// An unparseable length contributes nothing; see the module docs on
/// permissive fallbacks.
fn oversize_rule(config: &Map<String, Value>) -> Option<Adjustment> {
    let length = config.get("length").and_then(Value::as_str)?;
    let inches = parse_leading_inches(length)?;
    (inches > OVERSIZE_WRIST_THRESHOLD).then(|| Adjustment {
        label: "Oversize".to_string(),
        amount: Money::from_cents(OVERSIZE_ADJUSTMENT),
    })
}

/// Parses the leading decimal number from a length string ("9in" -> 9.0).
fn parse_leading_inches(length: &str) -> Option<f64> {
    let trimmed = length.trim_start();
    let end = trimmed
        .char_indices()
        .take_while(|(_, c)| c.is_ascii_digit() || *c == '.')
        .last()
        .map(|(i, c)| i + c.len_utf8())?;
    trimmed[..end].parse().ok()
}

// =============================================================================
// Engine
// =============================================================================

/// Calculates the live price for a custom paracord bracelet.
///
/// ## Arguments
/// * `config` - A bracelet configuration, normally already validated by
///   [`crate::config::validate_bracelet_config`].
///
/// ## Errors
/// [`PricingError::InvalidConfigType`] when `config` is not a JSON object.
/// This is the hard-failure channel for programmer error upstream; shopper
/// input that passed cart validation can never reach it.
///
/// ## Example
/// ```rust
/// use braids_core::pricing::calculate_bracelet_price;
/// use serde_json::json;
///
/// let breakdown = calculate_bracelet_price(&json!({
///     "color": "Black", "style": "King Cobra Weave", "length": "7in",
///     "material": "550 Paracord", "clasp": "Sliding Knot",
/// }))
/// .unwrap();
///
/// assert_eq!(breakdown.adjustments.len(), 1);
/// assert_eq!(breakdown.total.cents(), 3099); // $24.99 + $6 -> $30.99
/// ```
pub fn calculate_bracelet_price(config: &Value) -> Result<PriceBreakdown, PricingError> {
    let config = config.as_object().ok_or(PricingError::InvalidConfigType)?;

    let adjustments: Vec<Adjustment> = PRICING_RULES
        .iter()
        .filter_map(|rule| rule(config))
        .collect();

    let raw_total = adjustments
        .iter()
        .fold(BRACELET_BASE_PRICE, |sum, adj| sum + adj.amount);

    Ok(PriceBreakdown {
        base: BRACELET_BASE_PRICE,
        adjustments,
        total: raw_total.to_psychological(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Baseline config: no add-ons, produces the base price.
    fn base_config() -> Value {
        json!({
            "color": "Black",
            "style": "Tactical Cobra Weave",
            "length": "7in",
            "material": "550 Paracord",
            "clasp": "Sliding Knot",
        })
    }

    /// King Cobra + Neon accent + Steel Shackle: the primary scenario.
    fn king_cobra_neon_shackle_config() -> Value {
        json!({
            "color": "Neon Blue",
            "style": "King Cobra Weave",
            "length": "7in",
            "material": "550 Paracord",
            "clasp": "Shackle Clasp",
        })
    }

    fn with(base: Value, key: &str, value: &str) -> Value {
        let mut config = base;
        config[key] = json!(value);
        config
    }

    #[test]
    fn test_standard_config_is_base_price_with_no_adjustments() {
        let breakdown = calculate_bracelet_price(&base_config()).unwrap();
        assert_eq!(breakdown.base, BRACELET_BASE_PRICE);
        assert_eq!(breakdown.total.cents(), 2499);
        assert!(breakdown.adjustments.is_empty());
    }

    #[test]
    fn test_king_cobra_weave_adds_six_dollars() {
        let config = with(base_config(), "style", "King Cobra Weave");
        let breakdown = calculate_bracelet_price(&config).unwrap();
        assert_eq!(breakdown.adjustments.len(), 1);
        assert_eq!(breakdown.adjustments[0].label, "King Cobra Weave");
        assert_eq!(breakdown.adjustments[0].amount.cents(), 600);
        assert_eq!(breakdown.total.cents(), 3099);
    }

    #[test]
    fn test_mid_tier_weaves_add_three_dollars() {
        for style in ["Solomon Bar", "Fishtail"] {
            let config = with(base_config(), "style", style);
            let breakdown = calculate_bracelet_price(&config).unwrap();
            assert_eq!(breakdown.adjustments[0].amount.cents(), 300, "{style}");
            assert_eq!(breakdown.total.cents(), 2799, "{style}");
        }
    }

    #[test]
    fn test_shackle_clasp_adds_five_dollars() {
        let config = with(base_config(), "clasp", "Shackle Clasp");
        let breakdown = calculate_bracelet_price(&config).unwrap();
        assert_eq!(breakdown.adjustments[0].label, "Shackle Clasp");
        assert_eq!(breakdown.total.cents(), 2999);
    }

    #[test]
    fn test_standard_clasps_are_free() {
        for clasp in ["Sliding Knot", "Buckle Clasp"] {
            let config = with(base_config(), "clasp", clasp);
            let breakdown = calculate_bracelet_price(&config).unwrap();
            assert!(breakdown.adjustments.is_empty(), "{clasp}");
        }
    }

    #[test]
    fn test_neon_colors_add_two_dollars() {
        for color in NEON_ACCENT_COLORS {
            let config = with(base_config(), "color", color);
            let breakdown = calculate_bracelet_price(&config).unwrap();
            assert_eq!(breakdown.adjustments[0].label, "Neon Accent", "{color}");
            assert_eq!(breakdown.total.cents(), 2699, "{color}");
        }
    }

    #[test]
    fn test_oversize_length_adds_three_dollars() {
        let config = with(base_config(), "length", "9in");
        let breakdown = calculate_bracelet_price(&config).unwrap();
        assert_eq!(breakdown.adjustments[0].label, "Oversize");
        assert_eq!(breakdown.total.cents(), 2799);
    }

    #[test]
    fn test_length_at_threshold_is_not_oversize() {
        // Strictly greater than 8.5, so 8in and 8.5in stay standard.
        for length in ["8in", "8.5in"] {
            let config = with(base_config(), "length", length);
            let breakdown = calculate_bracelet_price(&config).unwrap();
            assert!(breakdown.adjustments.is_empty(), "{length}");
        }
    }

    #[test]
    fn test_all_adjustments_stack_in_rule_order() {
        // Scenario: King Cobra + Shackle + Neon = $24.99 + $6 + $5 + $2 = $37.99
        let breakdown = calculate_bracelet_price(&king_cobra_neon_shackle_config()).unwrap();
        let labels: Vec<&str> = breakdown
            .adjustments
            .iter()
            .map(|a| a.label.as_str())
            .collect();
        assert_eq!(labels, ["King Cobra Weave", "Shackle Clasp", "Neon Accent"]);
        assert_eq!(breakdown.total.cents(), 3799);
    }

    #[test]
    fn test_oversize_stacks_on_top_of_everything() {
        // Scenario: as above plus 9in length = $40.99
        let config = with(king_cobra_neon_shackle_config(), "length", "9in");
        let breakdown = calculate_bracelet_price(&config).unwrap();
        assert_eq!(breakdown.adjustments.len(), 4);
        assert_eq!(breakdown.adjustments[3].label, "Oversize");
        assert_eq!(breakdown.total.cents(), 4099);
    }

    #[test]
    fn test_pricing_is_idempotent() {
        let config = king_cobra_neon_shackle_config();
        let first = calculate_bracelet_price(&config).unwrap();
        let second = calculate_bracelet_price(&config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_clasp_upgrade_increases_total_by_exactly_its_amount() {
        // Monotonicity: switching the $0 clasp to the $5 clasp moves the
        // total by exactly $5, all else equal.
        let cheap = calculate_bracelet_price(&base_config()).unwrap();
        let premium =
            calculate_bracelet_price(&with(base_config(), "clasp", "Shackle Clasp")).unwrap();
        assert_eq!(premium.total.cents() - cheap.total.cents(), 500);
    }

    #[test]
    fn test_every_allowlisted_combination_ends_in_99() {
        let colors = ["Black", "Neon Blue", "Black & Neon Blue", "Olive Drab", "Desert Tan"];
        let styles = ["Tactical Cobra Weave", "King Cobra Weave", "Solomon Bar", "Fishtail"];
        let lengths = ["6in", "7in", "8in", "9in"];
        let clasps = ["Sliding Knot", "Buckle Clasp", "Shackle Clasp"];

        for color in colors {
            for style in styles {
                for length in lengths {
                    for clasp in clasps {
                        let config = json!({
                            "color": color, "style": style, "length": length,
                            "material": "550 Paracord", "clasp": clasp,
                        });
                        let breakdown = calculate_bracelet_price(&config).unwrap();
                        assert_eq!(
                            breakdown.total.cents() % 100,
                            99,
                            "psychological pricing broken for {config}"
                        );
                        assert!(breakdown.total >= breakdown.base);
                    }
                }
            }
        }
    }

    #[test]
    fn test_unrecognized_style_and_clasp_fall_through_to_zero() {
        // Deliberate permissive fallback: unknown values cost nothing and
        // produce no error. See the module docs before "fixing" this.
        let mut config = base_config();
        config["style"] = json!("Herringbone");
        config["clasp"] = json!("Velcro");
        let breakdown = calculate_bracelet_price(&config).unwrap();
        assert!(breakdown.adjustments.is_empty());
        assert_eq!(breakdown.total.cents(), 2499);
    }

    #[test]
    fn test_unparseable_length_silently_skips_oversize() {
        // Second permissive fallback: no parse, no surcharge, no error.
        for length in ["custom", "", "in9"] {
            let config = with(base_config(), "length", length);
            let breakdown = calculate_bracelet_price(&config).unwrap();
            assert!(breakdown.adjustments.is_empty(), "{length:?}");
        }
    }

    #[test]
    fn test_missing_dimensions_contribute_nothing() {
        // The engine itself is lenient about absent keys; allowlist
        // enforcement happens in cart validation.
        let breakdown = calculate_bracelet_price(&json!({})).unwrap();
        assert!(breakdown.adjustments.is_empty());
        assert_eq!(breakdown.total.cents(), 2499);
    }

    #[test]
    fn test_non_object_config_is_a_hard_error() {
        for bad in [json!(["Black"]), json!("Black"), json!(42), Value::Null] {
            assert_eq!(
                calculate_bracelet_price(&bad),
                Err(PricingError::InvalidConfigType),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_parse_leading_inches() {
        assert_eq!(parse_leading_inches("9in"), Some(9.0));
        assert_eq!(parse_leading_inches("8.5in"), Some(8.5));
        assert_eq!(parse_leading_inches(" 7 inches"), Some(7.0));
        assert_eq!(parse_leading_inches("custom"), None);
        assert_eq!(parse_leading_inches(""), None);
        assert_eq!(parse_leading_inches("."), None);
    }
}
