//! Domain Models
//!
//! Product documents as served by the content API and the cart line items
//! derived from them. Field names follow the content store's wire format
//! (`_id`, `slug.current`, `image[].asset._ref`).
//! Uses `rust_decimal` for all prices.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::image::AssetRef;

/// Reference to an image asset in the content store
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAsset {
    pub asset: AssetRef,
}

impl ImageAsset {
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            asset: AssetRef::new(reference),
        }
    }
}

/// URL slug of a product document
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slug {
    pub current: String,
}

/// A product in the catalog
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Document id, unique per product
    #[serde(rename = "_id")]
    pub id: String,

    pub name: String,

    pub slug: Slug,

    /// Unit price in major currency units
    pub price: Decimal,

    #[serde(default)]
    pub details: Option<String>,

    /// Product images, first one is the primary image
    #[serde(default, alias = "images")]
    pub image: Vec<ImageAsset>,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        slug: impl Into<String>,
        price: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slug: Slug {
                current: slug.into(),
            },
            price,
            details: None,
            image: Vec::new(),
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_image(mut self, reference: impl Into<String>) -> Self {
        self.image.push(ImageAsset::new(reference));
        self
    }

    /// Primary image asset reference, if any
    pub fn primary_image(&self) -> Option<&AssetRef> {
        self.image.first().map(|img| &img.asset)
    }

    /// Build a cart line item for this product
    pub fn line_item(&self, quantity: u32) -> CartLineItem {
        CartLineItem {
            id: self.id.clone(),
            name: self.name.clone(),
            price: self.price,
            quantity,
            image: self.image.clone(),
        }
    }
}

/// One product entry in the cart with its quantity
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    #[serde(rename = "_id")]
    pub id: String,

    pub name: String,

    /// Unit price in major currency units
    pub price: Decimal,

    pub quantity: u32,

    #[serde(default, alias = "images")]
    pub image: Vec<ImageAsset>,
}

impl CartLineItem {
    /// Price × quantity for this line, `None` when it overflows
    pub fn subtotal(&self) -> Option<Decimal> {
        self.price.checked_mul(Decimal::from(self.quantity))
    }

    /// Primary image asset reference, if any
    pub fn primary_image(&self) -> Option<&AssetRef> {
        self.image.first().map(|img| &img.asset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_line_item_subtotal() {
        let product = Product::new("p1", "Headphones", "headphones", dec!(19.99));
        let item = product.line_item(3);
        assert_eq!(item.subtotal(), Some(dec!(59.97)));
        assert_eq!(item.id, "p1");
    }

    #[test]
    fn test_subtotal_overflow_is_none() {
        let huge: CartLineItem = serde_json::from_str(
            r#"{ "_id": "big", "name": "Big", "price": "79228162514264337593543950335", "quantity": 2 }"#,
        )
        .unwrap();

        assert_eq!(huge.price, Decimal::MAX);
        assert_eq!(huge.subtotal(), None);
    }

    #[test]
    fn test_product_from_content_api_json() {
        let json = r#"{
            "_id": "a1b2",
            "_type": "product",
            "name": "Speaker",
            "slug": { "_type": "slug", "current": "speaker" },
            "price": 85,
            "details": "Loud",
            "image": [
                { "_key": "k1", "_type": "image",
                  "asset": { "_ref": "image-abc123-600x600-webp", "_type": "reference" } }
            ]
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, "a1b2");
        assert_eq!(product.slug.current, "speaker");
        assert_eq!(product.price, dec!(85));
        assert_eq!(
            product.primary_image().map(AssetRef::as_str),
            Some("image-abc123-600x600-webp")
        );
    }

    #[test]
    fn test_line_item_accepts_images_alias() {
        let json = r#"[{
            "_id": "1", "name": "A", "price": 10, "quantity": 2,
            "images": [{ "asset": { "_ref": "image-x1-10x10-png" } }]
        }]"#;

        let items: Vec<CartLineItem> = serde_json::from_str(json).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 2);
        assert_eq!(items[0].image.len(), 1);
    }
}
