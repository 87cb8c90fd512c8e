//! # Catalog Store
//!
//! The authoritative in-memory product catalog.
//!
//! ## Thread Safety
//! The catalog is process-wide shared mutable state: stock deductions
//! mutate it in place. It is wrapped in a `Mutex` and only the accessors
//! here touch the lock, so the stock ledger can hold it across its whole
//! check-then-commit sequence and the "never oversell" invariant survives
//! concurrent requests.
//!
//! ## Lifecycle
//! Seeded once at process start from [`seed_products`]; mutated only by
//! stock deductions. There is no persistence layer and no admin CRUD in
//! this core.

use std::sync::Mutex;

use thiserror::Error;
use tracing::debug;

use braids_core::{Money, Product, ProductCategory};

// =============================================================================
// Seed Data
// =============================================================================

/// Storefront category filter entries as (value, label) pairs.
pub const CATEGORIES: [(&str, &str); 6] = [
    ("all", "All Categories"),
    ("braiding-services", "Braiding Services"),
    ("natural-hair", "Natural Hair Services"),
    ("wigs-extensions", "Wigs & Extensions"),
    ("hair-products", "Hair Products"),
    ("paracord-bracelets", "Paracord Bracelets"),
];

fn product(
    id: i64,
    name: &str,
    category: ProductCategory,
    price_cents: i64,
    stock: i64,
    description: &str,
) -> Product {
    Product {
        id,
        name: name.to_string(),
        category,
        price_cents,
        stock,
        description: description.to_string(),
        config_options: None,
    }
}

/// The fixed product catalog.
///
/// Services use the unlimited-stock sentinel (999); retail products carry
/// real counts. The bracelet's `price_cents` is the minimum (base) price
/// only; its live price is calculated at checkout by the pricing engine.
pub fn seed_products() -> Vec<Product> {
    use ProductCategory::*;

    let mut products = vec![
        // Braiding Services
        product(1, "Box Braids", BraidingServices, 15000, 999, "Classic box braids, any length."),
        product(2, "Knotless Braids", BraidingServices, 18000, 999, "Gentle knotless technique for a natural look."),
        product(3, "Cornrows", BraidingServices, 8000, 999, "Straight-back or custom cornrow patterns."),
        product(4, "Senegalese Twists", BraidingServices, 16000, 999, "Smooth two-strand Senegalese twists."),
        product(5, "Butterfly Locs", BraidingServices, 20000, 999, "Trendy distressed butterfly locs."),
        // Natural Hair Services
        product(6, "Wash & Go", NaturalHair, 6000, 999, "Full wash, condition, and style."),
        product(7, "Twist Out", NaturalHair, 7000, 999, "Defined twist-out styling."),
        product(8, "Silk Press", NaturalHair, 9000, 999, "Heat-free silk press for a sleek finish."),
        product(9, "Deep Conditioning Treatment", NaturalHair, 4500, 999, "Intensive moisture and protein treatment."),
        // Wigs & Extensions
        product(10, "Wig Install (No Glue)", WigsExtensions, 7500, 999, "Secure wig install without adhesive."),
        product(11, "Closure Install", WigsExtensions, 12000, 999, "Lace closure install and blend."),
        product(12, "Frontal Install", WigsExtensions, 14000, 999, "Full frontal lace install."),
        product(13, "Tape-In Extensions", WigsExtensions, 20000, 999, "Seamless tape-in hair extensions."),
        // Hair Products
        product(14, "Edge Control", HairProducts, 1200, 50, "Strong-hold edge control gel."),
        product(15, "Braid Spray", HairProducts, 1500, 30, "Moisturizing spray for braids and twists."),
        product(16, "Deep Conditioner (8 oz)", HairProducts, 2200, 25, "Professional-grade deep conditioner."),
        product(17, "Hair Oil Blend", HairProducts, 1800, 40, "Nourishing oil blend for scalp health."),
        product(18, "Braiding Gel", HairProducts, 1000, 60, "Smooth braiding gel for all hair types."),
    ];

    // Paracord Bracelets
    let mut bracelet = product(
        19,
        "Custom Paracord Bracelet",
        ParacordBracelets,
        2499,
        150,
        "Handcrafted paracord bracelet - fully customisable weave, colour, length, \
         material, and clasp. Price adjusts live based on selected options.",
    );
    bracelet.config_options = Some(
        [
            ("color", &["Black", "Neon Blue", "Black & Neon Blue", "Olive Drab", "Desert Tan"][..]),
            ("style", &["Tactical Cobra Weave", "King Cobra Weave", "Solomon Bar", "Fishtail"][..]),
            ("length", &["6in", "7in", "8in", "9in"][..]),
            ("material", &["550 Paracord", "Type III Paracord", "Micro Cord"][..]),
            ("clasp", &["Sliding Knot", "Buckle Clasp", "Shackle Clasp"][..]),
        ]
        .into_iter()
        .map(|(key, values)| {
            (
                key.to_string(),
                values.iter().map(|v| v.to_string()).collect(),
            )
        })
        .collect(),
    );
    products.push(bracelet);

    products
}

// =============================================================================
// Filtering
// =============================================================================

/// Active storefront filter criteria.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    /// Category value to match; `None` or `"all"` includes all categories.
    pub category: Option<String>,

    /// Minimum price, inclusive. Defaults to zero.
    pub min_price: Option<Money>,

    /// Maximum price, inclusive. Defaults to unbounded.
    pub max_price: Option<Money>,
}

/// Malformed filter bounds. These indicate a caller bug (the storefront
/// builds filters from its own slider widget), so they are hard errors
/// rather than shopper-facing validation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("minimum price must be non-negative")]
    NegativeMinPrice,

    #[error("maximum price must be >= minimum price")]
    InvertedRange,
}

/// Filters a product list by category and/or inclusive price range.
pub fn filter_products(
    products: &[Product],
    filter: &ProductFilter,
) -> Result<Vec<Product>, FilterError> {
    let min = filter.min_price.unwrap_or(Money::zero());
    let max = filter.max_price.unwrap_or(Money::from_cents(i64::MAX));

    if min.is_negative() {
        return Err(FilterError::NegativeMinPrice);
    }
    if max < min {
        return Err(FilterError::InvertedRange);
    }

    let category = filter.category.as_deref().filter(|c| *c != "all");

    Ok(products
        .iter()
        .filter(|p| {
            let matches_category = category.map(|c| p.category.as_str() == c).unwrap_or(true);
            let matches_price = p.price() >= min && p.price() <= max;
            matches_category && matches_price
        })
        .cloned()
        .collect())
}

/// Returns the lowest and highest prices in a product list, or zeroes for
/// an empty list.
pub fn price_range(products: &[Product]) -> (Money, Money) {
    let mut prices = products.iter().map(Product::price);
    match prices.next() {
        None => (Money::zero(), Money::zero()),
        Some(first) => prices.fold((first, first), |(min, max), p| (min.min(p), max.max(p))),
    }
}

// =============================================================================
// Catalog Store
// =============================================================================

/// Explicitly owned, injectable catalog store.
///
/// ## Design Notes
/// The original design kept the catalog as a module-level singleton.
/// An owned store passed into the validators lets tests run in isolation
/// and gives concurrent deductions a single lock to serialize on.
///
/// ## Usage
/// ```rust
/// use braids_checkout::CatalogStore;
///
/// let store = CatalogStore::with_seed_catalog();
/// let bracelet = store.find_by_id(19).unwrap();
/// assert!(bracelet.is_configurable());
/// ```
#[derive(Debug)]
pub struct CatalogStore {
    products: Mutex<Vec<Product>>,
}

impl CatalogStore {
    /// Creates a store over an explicit product list (tests inject small
    /// catalogs here).
    pub fn new(products: Vec<Product>) -> Self {
        CatalogStore {
            products: Mutex::new(products),
        }
    }

    /// Creates a store seeded with the full storefront catalog.
    pub fn with_seed_catalog() -> Self {
        Self::new(seed_products())
    }

    /// Looks up a product by id, returning a snapshot clone.
    pub fn find_by_id(&self, id: i64) -> Option<Product> {
        let found = self.with_products(|products| products.iter().find(|p| p.id == id).cloned());
        debug!(id, found = found.is_some(), "Catalog lookup");
        found
    }

    /// Executes a function with read access to the catalog.
    pub fn with_products<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&[Product]) -> R,
    {
        let products = self.products.lock().expect("catalog mutex poisoned");
        f(&products)
    }

    /// Executes a function with write access to the catalog.
    ///
    /// The stock ledger runs its entire two-phase deduction inside one call
    /// so no other request can observe or interleave a partial commit.
    pub fn with_products_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Vec<Product>) -> R,
    {
        let mut products = self.products.lock().expect("catalog mutex poisoned");
        f(&mut products)
    }

    /// Filters the catalog by category and/or price range.
    pub fn filter(&self, filter: &ProductFilter) -> Result<Vec<Product>, FilterError> {
        self.with_products(|products| filter_products(products, filter))
    }

    /// Returns the lowest and highest catalog prices.
    pub fn price_range(&self) -> (Money, Money) {
        self.with_products(price_range)
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::with_seed_catalog()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
