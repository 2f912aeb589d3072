//! Stripe Checkout Integration
//!
//! Implements [`PaymentProcessor`] with Stripe's hosted Checkout page.
//! Sessions are one-off card payments: the buyer may change quantities on
//! the hosted page (minimum one) and enters a billing address when Stripe
//! asks for it.

use async_trait::async_trait;
use stripe::{
    CheckoutSession as StripeCheckoutSession, CheckoutSessionBillingAddressCollection,
    CheckoutSessionMode, CheckoutSessionSubmitType, Client, CreateCheckoutSession,
    CreateCheckoutSessionLineItems, CreateCheckoutSessionLineItemsAdjustableQuantity,
    CreateCheckoutSessionLineItemsPriceData, CreateCheckoutSessionLineItemsPriceDataProductData,
    CreateCheckoutSessionPaymentMethodTypes, CreateCheckoutSessionShippingOptions, Currency,
    StripeError,
};

use crate::checkout::{CheckoutSession, CheckoutSessionRequest, PaymentProcessor};
use crate::error::{PaymentError, Result};

/// Stripe client wrapper
pub struct StripeClient {
    client: Client,
}

impl StripeClient {
    /// Create a new Stripe client
    pub fn new(secret_key: &str) -> Self {
        Self {
            client: Client::new(secret_key),
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        let secret_key = std::env::var("STRIPE_SECRET_KEY")
            .map_err(|_| PaymentError::Config("STRIPE_SECRET_KEY not set".into()))?;

        Ok(Self::new(&secret_key))
    }
}

#[async_trait]
impl PaymentProcessor for StripeClient {
    async fn create_session(&self, request: &CheckoutSessionRequest) -> Result<CheckoutSession> {
        let params = session_params(request);

        let session = StripeCheckoutSession::create(&self.client, params)
            .await
            .map_err(map_stripe_error)?;

        tracing::info!(
            session_id = %session.id,
            lines = request.line_items.len(),
            amount_total = request.amount_total(),
            "Created Stripe checkout session"
        );

        Ok(CheckoutSession {
            id: session.id.to_string(),
            url: session.url,
        })
    }

    fn name(&self) -> &str {
        "Stripe"
    }
}

/// Map a session request onto Stripe's create parameters
fn session_params(request: &CheckoutSessionRequest) -> CreateCheckoutSession<'_> {
    let mut params = CreateCheckoutSession::new();
    params.success_url = Some(request.success_url.as_str());
    params.cancel_url = Some(request.cancel_url.as_str());
    params.mode = Some(CheckoutSessionMode::Payment);
    params.submit_type = Some(CheckoutSessionSubmitType::Pay);
    params.payment_method_types = Some(vec![CreateCheckoutSessionPaymentMethodTypes::Card]);
    params.billing_address_collection = Some(CheckoutSessionBillingAddressCollection::Auto);

    if let Some(ref rate) = request.shipping_rate {
        params.shipping_options = Some(vec![CreateCheckoutSessionShippingOptions {
            shipping_rate: Some(rate.clone()),
            ..Default::default()
        }]);
    }

    params.line_items = Some(
        request
            .line_items
            .iter()
            .map(|line| CreateCheckoutSessionLineItems {
                quantity: Some(line.quantity),
                adjustable_quantity: Some(CreateCheckoutSessionLineItemsAdjustableQuantity {
                    enabled: line.adjustable_quantity.enabled,
                    minimum: Some(line.adjustable_quantity.minimum),
                    maximum: None,
                }),
                price_data: Some(CreateCheckoutSessionLineItemsPriceData {
                    currency: Currency::USD,
                    unit_amount: Some(line.unit_amount),
                    product_data: Some(CreateCheckoutSessionLineItemsPriceDataProductData {
                        name: line.product_name.clone(),
                        images: Some(vec![line.image_url.to_string()]),
                        ..Default::default()
                    }),
                    ..Default::default()
                }),
                ..Default::default()
            })
            .collect(),
    );

    params
}

fn map_stripe_error(err: StripeError) -> PaymentError {
    match err {
        StripeError::Stripe(req) => {
            tracing::warn!(status = req.http_status, error_type = ?req.error_type, "Stripe rejected checkout");
            PaymentError::Processor {
                status: Some(req.http_status),
                message: req
                    .message
                    .unwrap_or_else(|| format!("{:?}", req.error_type)),
            }
        }
        StripeError::Timeout | StripeError::ClientError(_) => {
            tracing::error!(error = %err, "Stripe unreachable");
            PaymentError::ProcessorUnavailable(err.to_string())
        }
        other => PaymentError::Processor {
            status: None,
            message: other.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::{AdjustableQuantity, CheckoutLineItem};

    fn request(shipping_rate: Option<&str>) -> CheckoutSessionRequest {
        CheckoutSessionRequest {
            line_items: vec![CheckoutLineItem {
                currency: "usd".into(),
                product_name: "A".into(),
                image_url: "https://cdn.sanity.io/images/p/production/abc-1x1.webp"
                    .parse()
                    .unwrap(),
                unit_amount: 1000,
                quantity: 2,
                adjustable_quantity: AdjustableQuantity::default(),
            }],
            success_url: "https://shop.example.com/success".parse().unwrap(),
            cancel_url: "https://shop.example.com/canceled".parse().unwrap(),
            shipping_rate: shipping_rate.map(String::from),
        }
    }

    #[test]
    fn test_session_params() {
        let req = request(Some("shr_1"));
        let params = session_params(&req);

        assert_eq!(params.mode, Some(CheckoutSessionMode::Payment));
        assert_eq!(params.submit_type, Some(CheckoutSessionSubmitType::Pay));
        assert_eq!(params.success_url, Some("https://shop.example.com/success"));
        assert_eq!(params.cancel_url, Some("https://shop.example.com/canceled"));

        let lines = params.line_items.unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, Some(2));

        let price = lines[0].price_data.as_ref().unwrap();
        assert_eq!(price.unit_amount, Some(1000));
        assert_eq!(price.currency, Currency::USD);

        let shipping = params.shipping_options.unwrap();
        assert_eq!(shipping[0].shipping_rate.as_deref(), Some("shr_1"));
    }

    #[test]
    fn test_no_shipping_rate() {
        let req = request(None);
        let params = session_params(&req);
        assert!(params.shipping_options.is_none());
    }

    #[test]
    fn test_timeout_is_unavailable() {
        let err = map_stripe_error(StripeError::Timeout);
        assert!(matches!(err, PaymentError::ProcessorUnavailable(_)));
        assert_eq!(err.status_code(), 502);
    }
}
