//! In-Memory Catalog
//!
//! For development and tests. Seeded with a small static product range.

use async_trait::async_trait;
use rust_decimal_macros::dec;

use store_core::Product;

use crate::CatalogClient;
use crate::error::Result;

/// Catalog held in memory
pub struct MemoryCatalog {
    products: Vec<Product>,
}

impl Default for MemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryCatalog {
    /// Catalog seeded with demo products
    pub fn new() -> Self {
        Self::with_products(seed_products())
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self { products }
    }
}

#[async_trait]
impl CatalogClient for MemoryCatalog {
    async fn products(&self) -> Result<Vec<Product>> {
        Ok(self.products.clone())
    }

    async fn product_by_slug(&self, slug: &str) -> Result<Option<Product>> {
        Ok(self.products.iter().find(|p| p.slug.current == slug).cloned())
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "MemoryCatalog"
    }
}

fn seed_products() -> Vec<Product> {
    vec![
        Product::new("prod-headphones", "Studio Headphones", "studio-headphones", dec!(99.99))
            .with_details("Closed-back, 40mm drivers, detachable cable.")
            .with_image("image-5f2b1c9e0a7d4e3b8c6a-1000x1000-webp"),
        Product::new("prod-speaker", "Pocket Speaker", "pocket-speaker", dec!(45))
            .with_details("Water resistant, 12 hours of playback.")
            .with_image("image-a83c0d7f1e2b4c5d9e0f-800x800-webp"),
        Product::new("prod-earbuds", "Wireless Earbuds", "wireless-earbuds", dec!(59.5))
            .with_details("Noise cancelling with charging case.")
            .with_image("image-0b1c2d3e4f5a6b7c8d9e-600x600-png")
            .with_image("image-9e8d7c6b5a4f3e2d1c0b-600x600-png"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_catalog() {
        let catalog = MemoryCatalog::new();

        let products = catalog.products().await.unwrap();
        assert_eq!(products.len(), 3);

        let speaker = catalog.product_by_slug("pocket-speaker").await.unwrap();
        assert_eq!(speaker.map(|p| p.id), Some("prod-speaker".to_string()));
    }

    #[tokio::test]
    async fn test_unknown_slug() {
        let catalog = MemoryCatalog::new();
        assert!(catalog.product_by_slug("nothing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_seed_images_are_valid_refs() {
        let catalog = MemoryCatalog::new();
        for product in catalog.products().await.unwrap() {
            for image in &product.image {
                assert!(image.asset.parse().is_ok(), "{} has a bad ref", product.id);
            }
        }
    }

    #[tokio::test]
    async fn test_custom_products() {
        let catalog = MemoryCatalog::with_products(vec![Product::new("x", "Only", "only", dec!(2))]);

        assert_eq!(catalog.products().await.unwrap().len(), 1);
        assert!(catalog.product_by_slug("only").await.unwrap().is_some());
        assert!(catalog.product_by_slug("pocket-speaker").await.unwrap().is_none());
    }
}
