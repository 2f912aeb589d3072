//! Checkout Payload
//!
//! Reshapes a cart snapshot into the processor's line-item schema:
//!
//! ```text
//! { _id, name, price, quantity, image[0].asset._ref }
//!   ──▶ { currency, product name, image URL, unit amount (cents),
//!         quantity, adjustable quantity ≥ 1 }
//! ```

use async_trait::async_trait;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use url::Url;

use store_core::{CartLineItem, ImageUrlBuilder};

use crate::config::CheckoutConfig;
use crate::error::{PaymentError, Result};

/// Currency of every checkout line
pub const CURRENCY: &str = "usd";

/// Quantity policy the buyer may change on the hosted page
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustableQuantity {
    pub enabled: bool,
    pub minimum: i64,
}

impl Default for AdjustableQuantity {
    fn default() -> Self {
        Self {
            enabled: true,
            minimum: 1,
        }
    }
}

/// One line on the hosted checkout page
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutLineItem {
    pub currency: String,
    pub product_name: String,
    pub image_url: Url,

    /// Unit price in minor currency units
    pub unit_amount: i64,

    pub quantity: u64,
    pub adjustable_quantity: AdjustableQuantity,
}

/// Everything needed to open one hosted checkout session
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSessionRequest {
    pub line_items: Vec<CheckoutLineItem>,
    pub success_url: Url,
    pub cancel_url: Url,
    pub shipping_rate: Option<String>,
}

impl CheckoutSessionRequest {
    /// Build a session request from a cart snapshot
    pub fn from_cart(
        items: &[CartLineItem],
        images: &ImageUrlBuilder,
        config: &CheckoutConfig,
    ) -> Result<Self> {
        if items.is_empty() {
            return Err(PaymentError::EmptyCart);
        }

        let line_items = items
            .iter()
            .map(|item| line_item(item, images))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            line_items,
            success_url: config.success_url()?,
            cancel_url: config.cancel_url()?,
            shipping_rate: config.shipping_rate.clone(),
        })
    }

    /// Σ unit amount × quantity, in minor units
    pub fn amount_total(&self) -> i64 {
        self.line_items
            .iter()
            .map(|line| line.unit_amount.saturating_mul(i64::try_from(line.quantity).unwrap_or(i64::MAX)))
            .fold(0_i64, i64::saturating_add)
    }
}

fn line_item(item: &CartLineItem, images: &ImageUrlBuilder) -> Result<CheckoutLineItem> {
    let invalid = |reason: String| PaymentError::InvalidLineItem {
        id: item.id.clone(),
        reason,
    };

    if item.quantity == 0 {
        return Err(invalid("quantity must be at least 1".into()));
    }

    let asset = item
        .primary_image()
        .ok_or_else(|| invalid("no image".into()))?;
    let image_url = images.url_for(asset).map_err(|e| invalid(e.to_string()))?;

    let unit_amount = to_minor_units(item.price).ok_or_else(|| invalid(format!("unusable price {}", item.price)))?;

    Ok(CheckoutLineItem {
        currency: CURRENCY.to_string(),
        product_name: item.name.clone(),
        image_url,
        unit_amount,
        quantity: u64::from(item.quantity),
        adjustable_quantity: AdjustableQuantity::default(),
    })
}

/// `round(price × 100)`, half away from zero; `None` for negative or oversized prices
pub fn to_minor_units(price: Decimal) -> Option<i64> {
    if price.is_sign_negative() {
        return None;
    }
    price
        .checked_mul(Decimal::ONE_HUNDRED)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
}

/// Result of creating a checkout session
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSession {
    /// Processor session id
    pub id: String,

    /// Hosted page to redirect the buyer to
    pub url: Option<String>,
}

/// Payment processor trait (Strategy pattern)
///
/// Implemented by the Stripe client; tests substitute their own.
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    /// Open a hosted checkout session
    async fn create_session(&self, request: &CheckoutSessionRequest) -> Result<CheckoutSession>;

    /// Processor name
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use store_core::ImageAsset;

    fn images() -> ImageUrlBuilder {
        ImageUrlBuilder::sanity("i3hpjxyf", "production").unwrap()
    }

    fn config() -> CheckoutConfig {
        CheckoutConfig::new("https://shop.example.com").unwrap()
    }

    fn item(id: &str, price: Decimal, quantity: u32) -> CartLineItem {
        CartLineItem {
            id: id.into(),
            name: "A".into(),
            price,
            quantity,
            image: vec![ImageAsset::new("image-abc123-600x600-webp")],
        }
    }

    #[test]
    fn test_single_item_payload() {
        let request = CheckoutSessionRequest::from_cart(&[item("1", dec!(10), 2)], &images(), &config()).unwrap();

        assert_eq!(request.line_items.len(), 1);
        let line = &request.line_items[0];
        assert_eq!(line.unit_amount, 1000);
        assert_eq!(line.quantity, 2);
        assert_eq!(line.currency, "usd");
        assert_eq!(line.product_name, "A");
        assert_eq!(
            line.image_url.as_str(),
            "https://cdn.sanity.io/images/i3hpjxyf/production/abc123-600x600.webp"
        );
        assert_eq!(line.adjustable_quantity, AdjustableQuantity { enabled: true, minimum: 1 });
        assert_eq!(request.amount_total(), 2000);
    }

    #[test]
    fn test_redirects_come_from_config() {
        let request = CheckoutSessionRequest::from_cart(&[item("1", dec!(1), 1)], &images(), &config()).unwrap();
        assert_eq!(request.success_url.as_str(), "https://shop.example.com/success");
        assert_eq!(request.cancel_url.as_str(), "https://shop.example.com/canceled");
        assert_eq!(request.shipping_rate, None);

        let with_rate = config().with_shipping_rate("shr_123");
        let request = CheckoutSessionRequest::from_cart(&[item("1", dec!(1), 1)], &images(), &with_rate).unwrap();
        assert_eq!(request.shipping_rate.as_deref(), Some("shr_123"));
    }

    #[test]
    fn test_order_is_preserved() {
        let items = [item("a", dec!(1), 1), item("b", dec!(2), 1), item("c", dec!(3), 1)];
        let request = CheckoutSessionRequest::from_cart(&items, &images(), &config()).unwrap();
        let amounts: Vec<i64> = request.line_items.iter().map(|l| l.unit_amount).collect();
        assert_eq!(amounts, vec![100, 200, 300]);
    }

    #[test]
    fn test_minor_unit_rounding() {
        assert_eq!(to_minor_units(dec!(19.99)), Some(1999));
        assert_eq!(to_minor_units(dec!(0.125)), Some(13));
        assert_eq!(to_minor_units(dec!(0.994)), Some(99));
        assert_eq!(to_minor_units(dec!(0)), Some(0));
        assert_eq!(to_minor_units(dec!(-1)), None);
    }

    #[test]
    fn test_oversized_price_is_none() {
        assert_eq!(to_minor_units(Decimal::MAX), None);
        assert_eq!(to_minor_units(dec!(92233720368547758.08)), None);
        assert_eq!(to_minor_units(dec!(92233720368547758.07)), Some(i64::MAX));
    }

    #[test]
    fn test_unusable_prices_rejected() {
        for price in [Decimal::MAX, dec!(-0.01)] {
            let err = CheckoutSessionRequest::from_cart(&[item("p", price, 1)], &images(), &config())
                .unwrap_err();
            assert!(matches!(err, PaymentError::InvalidLineItem { ref id, .. } if id == "p"));
            assert_eq!(err.status_code(), 400);
        }
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let items = [item("a", dec!(1), 1), item("z", dec!(1), 0)];
        let err = CheckoutSessionRequest::from_cart(&items, &images(), &config()).unwrap_err();

        assert_eq!(
            err,
            PaymentError::InvalidLineItem {
                id: "z".into(),
                reason: "quantity must be at least 1".into(),
            }
        );
        assert_eq!(err.code(), "INVALID_LINE_ITEM");
    }

    #[test]
    fn test_empty_cart_rejected() {
        assert_eq!(
            CheckoutSessionRequest::from_cart(&[], &images(), &config()),
            Err(PaymentError::EmptyCart)
        );
    }

    #[test]
    fn test_malformed_image_ref_rejected() {
        let mut bad = item("x", dec!(5), 1);
        bad.image = vec![ImageAsset::new("file-abc123-pdf")];

        let err = CheckoutSessionRequest::from_cart(&[bad], &images(), &config()).unwrap_err();
        assert!(matches!(err, PaymentError::InvalidLineItem { ref id, .. } if id == "x"));
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_missing_image_rejected() {
        let mut bare = item("y", dec!(5), 1);
        bare.image.clear();
        assert!(matches!(
            CheckoutSessionRequest::from_cart(&[bare], &images(), &config()),
            Err(PaymentError::InvalidLineItem { .. })
        ));
    }
}
