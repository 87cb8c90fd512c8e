//! # braids-checkout: Catalog Store + Checkout Pipeline
//!
//! The stateful layer of the BlackhawkBraids checkout backend. Owns the
//! in-memory product catalog and every operation that reads or mutates it.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Checkout Pipeline                                  │
//! │                                                                         │
//! │  raw cart payload (untrusted JSON)                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_cart ──► allowlist check per bracelet (braids-core)          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_shipping_country (braids-core)                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  build_line_items ──► live pricing per bracelet (braids-core)          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SessionRequest { line_items, metadata } ──► payment processor         │
//! │                                                                         │
//! │  deduct_stock runs later, on payment confirmation (webhook), with      │
//! │  all-or-nothing semantics against the live catalog.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - `CatalogStore`, seed data, category/price filtering
//! - [`cart`] - cart resolution and validation against the catalog
//! - [`stock`] - two-phase, all-or-nothing stock deduction
//! - [`session`] - checkout session preparation for the payment processor

pub mod cart;
pub mod catalog;
pub mod session;
pub mod stock;

pub use cart::validate_cart;
pub use catalog::{CatalogStore, FilterError, ProductFilter};
pub use session::{prepare_session, SessionRequest};
pub use stock::deduct_stock;
