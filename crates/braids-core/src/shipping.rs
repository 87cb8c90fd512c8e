//! # Shipping Region Policy
//!
//! BlackhawkBraids ships physical products within the United States only.
//! The hosted checkout page enforces the same restriction on address
//! collection; this validator is the server-side backstop.

use crate::error::{CheckoutError, CheckoutResult};

/// Countries to which shipping is permitted (ISO 3166-1 alpha-2).
pub const ALLOWED_COUNTRIES: [&str; 1] = ["US"];

/// Validates that the shipping destination is within the allowed region.
///
/// The code is trimmed and upper-cased before comparison, so `"us"` and
/// `"  US  "` are accepted.
///
/// ## Errors
/// - [`CheckoutError::ShippingCountryRequired`] when absent or blank
/// - [`CheckoutError::UnsupportedShippingRegion`] for any other country
pub fn validate_shipping_country(country: Option<&str>) -> CheckoutResult<()> {
    let country = country
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .ok_or(CheckoutError::ShippingCountryRequired)?;

    if ALLOWED_COUNTRIES.contains(&country.to_uppercase().as_str()) {
        Ok(())
    } else {
        Err(CheckoutError::UnsupportedShippingRegion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_us_in_any_casing() {
        assert_eq!(validate_shipping_country(Some("US")), Ok(()));
        assert_eq!(validate_shipping_country(Some("us")), Ok(()));
        assert_eq!(validate_shipping_country(Some("  US  ")), Ok(()));
    }

    #[test]
    fn test_rejects_other_countries() {
        for country in ["CA", "GB", "MX", "usa"] {
            assert_eq!(
                validate_shipping_country(Some(country)),
                Err(CheckoutError::UnsupportedShippingRegion),
                "{country}"
            );
        }
    }

    #[test]
    fn test_absent_or_blank_country_is_required_error() {
        assert_eq!(
            validate_shipping_country(None),
            Err(CheckoutError::ShippingCountryRequired)
        );
        assert_eq!(
            validate_shipping_country(Some("   ")),
            Err(CheckoutError::ShippingCountryRequired)
        );
    }
}
