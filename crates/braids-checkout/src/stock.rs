//! # Stock Ledger
//!
//! All-or-nothing deduction of purchased quantities from catalog stock.
//!
//! ## Two-Phase Commit
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Stock Deduction                                      │
//! │                                                                         │
//! │  acquire catalog lock ─────────────────────────────┐                   │
//! │                                                     │                   │
//! │  Phase 1 (check, no mutation):                      │ lock held        │
//! │    re-resolve every item against the LIVE catalog   │ across both      │
//! │    any item would oversell? ──► InsufficientStock   │ phases           │
//! │                                 (nothing changed)   │                   │
//! │  Phase 2 (commit):                                  │                   │
//! │    decrement every catalog entry                    │                   │
//! │                                                     │                   │
//! │  release lock ─────────────────────────────────────┘                   │
//! │                                                                         │
//! │  The catalog is never left partially decremented from one order, and   │
//! │  holding the lock across check-then-commit means concurrent orders     │
//! │  cannot interleave and oversell.                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Service products are not special-cased: their sentinel stock simply
//! decrements from 999, which never runs out in practice.

use tracing::debug;

use braids_core::{CheckoutError, CheckoutResult, ValidatedItem};

use crate::catalog::CatalogStore;

/// Deducts ordered quantities from catalog stock, all-or-nothing.
///
/// ## Arguments
/// * `items` - Output of a successful `validate_cart` call. Quantities are
///   re-checked against the live catalog, not the validation-time snapshot,
///   so stock sold between validation and payment is accounted for.
///
/// ## Errors
/// - [`CheckoutError::NoItemsToDeduct`] on an empty item list
/// - [`CheckoutError::ProductNotFound`] if a product vanished from the
///   catalog since validation
/// - [`CheckoutError::InsufficientStock`] naming the product, available
///   count, and requested count; reported before any mutation
pub fn deduct_stock(store: &CatalogStore, items: &[ValidatedItem]) -> CheckoutResult<()> {
    if items.is_empty() {
        return Err(CheckoutError::NoItemsToDeduct);
    }

    store.with_products_mut(|products| {
        // Phase 1: check availability for all items before mutating anything.
        for item in items {
            let catalog = products
                .iter()
                .find(|p| p.id == item.product.id)
                .ok_or(CheckoutError::ProductNotFound {
                    id: item.product.id,
                })?;

            if catalog.stock < item.quantity {
                return Err(CheckoutError::InsufficientStock {
                    name: catalog.name.clone(),
                    available: catalog.stock,
                    requested: item.quantity,
                });
            }
        }

        // Phase 2: commit the deductions.
        for item in items {
            if let Some(catalog) = products.iter_mut().find(|p| p.id == item.product.id) {
                catalog.stock -= item.quantity;
                debug!(
                    id = catalog.id,
                    remaining = catalog.stock,
                    deducted = item.quantity,
                    "Stock deducted"
                );
            }
        }

        Ok(())
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::validate_cart;
    use serde_json::json;

    fn store() -> CatalogStore {
        CatalogStore::with_seed_catalog()
    }

    #[test]
    fn test_successful_deduction_decrements_stock() {
        let store = store();
        let items = validate_cart(&store, &json!([{ "id": 14, "quantity": 3 }])).unwrap();

        deduct_stock(&store, &items).unwrap();
        assert_eq!(store.find_by_id(14).unwrap().stock, 47);
    }

    #[test]
    fn test_insufficient_stock_names_product_and_counts() {
        let store = store();
        // Deep Conditioner has 25 in stock.
        let items = validate_cart(&store, &json!([{ "id": 16, "quantity": 26 }])).unwrap();

        let err = deduct_stock(&store, &items).unwrap_err();
        assert_eq!(
            err,
            CheckoutError::InsufficientStock {
                name: "Deep Conditioner (8 oz)".to_string(),
                available: 25,
                requested: 26,
            }
        );
        // Nothing changed.
        assert_eq!(store.find_by_id(16).unwrap().stock, 25);
    }

    #[test]
    fn test_all_or_nothing_across_items() {
        let store = store();
        // Item A (Edge Control, 50 in stock) is fine; item B (Braid Spray,
        // 30 in stock) would oversell. Neither may change.
        let items = validate_cart(
            &store,
            &json!([{ "id": 14, "quantity": 5 }, { "id": 15, "quantity": 31 }]),
        )
        .unwrap();

        let err = deduct_stock(&store, &items).unwrap_err();
        assert!(matches!(err, CheckoutError::InsufficientStock { .. }));
        assert_eq!(store.find_by_id(14).unwrap().stock, 50);
        assert_eq!(store.find_by_id(15).unwrap().stock, 30);
    }

    #[test]
    fn test_empty_items_are_rejected() {
        assert_eq!(
            deduct_stock(&store(), &[]),
            Err(CheckoutError::NoItemsToDeduct)
        );
    }

    #[test]
    fn test_deduction_uses_live_catalog_not_snapshot() {
        let store = store();
        let items = validate_cart(&store, &json!([{ "id": 14, "quantity": 10 }])).unwrap();

        // Stock drops to 5 after validation (e.g. a concurrent order).
        store.with_products_mut(|products| {
            products.iter_mut().find(|p| p.id == 14).unwrap().stock = 5;
        });

        let err = deduct_stock(&store, &items).unwrap_err();
        assert_eq!(
            err,
            CheckoutError::InsufficientStock {
                name: "Edge Control".to_string(),
                available: 5,
                requested: 10,
            }
        );
    }

    #[test]
    fn test_service_stock_decrements_from_sentinel() {
        // Services are not special-cased; the sentinel just counts down.
        let store = store();
        let items = validate_cart(&store, &json!([{ "id": 1, "quantity": 2 }])).unwrap();

        deduct_stock(&store, &items).unwrap();
        assert_eq!(store.find_by_id(1).unwrap().stock, 997);
    }

    #[test]
    fn test_vanished_product_is_reported() {
        let store = store();
        let items = validate_cart(&store, &json!([{ "id": 14, "quantity": 1 }])).unwrap();

        store.with_products_mut(|products| products.retain(|p| p.id != 14));

        assert_eq!(
            deduct_stock(&store, &items),
            Err(CheckoutError::ProductNotFound { id: 14 })
        );
    }
}
