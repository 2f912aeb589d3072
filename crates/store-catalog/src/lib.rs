//! # store-catalog
//!
//! Product catalog for the storefront. Products live in a headless content
//! API and are only ever read: one product by slug for the detail page, all
//! products for the listing.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use store_catalog::{CatalogClient, SanityCatalog};
//!
//! let catalog = SanityCatalog::from_env()?;
//! let product = catalog.product_by_slug("headphones").await?;
//! ```

mod error;
mod memory;
mod sanity;

pub use error::{CatalogError, Result};
pub use memory::MemoryCatalog;
pub use sanity::{SanityCatalog, SanityConfig};

use async_trait::async_trait;
use store_core::Product;

/// Catalog client trait (Strategy pattern)
///
/// Implement this for each content backend.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// All products
    async fn products(&self) -> Result<Vec<Product>>;

    /// One product by its slug
    async fn product_by_slug(&self, slug: &str) -> Result<Option<Product>>;

    /// Check if the backend is reachable
    async fn health_check(&self) -> bool;

    /// Backend name
    fn name(&self) -> &str;
}
