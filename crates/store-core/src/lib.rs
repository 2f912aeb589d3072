//! # store-core
//!
//! Domain logic shared by the storefront server and the browser front end.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   add / remove / adjust   ┌──────────────────────────┐
//! │  UI action   │──────────────────────────▶│          Cart            │
//! └──────────────┘                           │  items ──fold──▶ totals  │
//!                                            └────────────┬─────────────┘
//!                                                         │ snapshot (JSON)
//!                                                         ▼
//!                                            ┌──────────────────────────┐
//!                                            │  POST /api/checkout      │
//!                                            │  (store-payments)        │
//!                                            └──────────────────────────┘
//! ```
//!
//! The cart never tracks totals as independent counters: every mutation
//! recomputes them from the line items, so the aggregate always equals the
//! fold over the current items.

pub mod cart;
pub mod error;
pub mod image;
pub mod model;
pub mod quantity;

pub use cart::{Cart, CartTotals, QuantityChange};
pub use error::{CartError, ImageUrlError, Result};
pub use image::{AssetRef, ImageUrlBuilder, SANITY_CDN_URL};
pub use model::{CartLineItem, ImageAsset, Product, Slug};
pub use quantity::QuantitySelector;
