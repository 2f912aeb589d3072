//! # store-payments
//!
//! Checkout session creation for the storefront.
//!
//! Checkout uses the processor's hosted page: the server turns the cart
//! into a session request, the processor answers with a session id and a
//! URL, and the browser is sent there.
//!
//! ```text
//! ┌─────────────┐     ┌─────────────────┐     ┌─────────────────────┐
//! │  Storefront │────▶│  Stripe Hosted  │────▶│  Storefront         │
//! │  (cart)     │     │  Checkout Page  │     │  /success /canceled │
//! └─────────────┘     └─────────────────┘     └─────────────────────┘
//! ```
//!
//! Payment, fraud checks and card handling stay with the processor.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use store_payments::{CheckoutConfig, CheckoutSessionRequest, PaymentProcessor, StripeClient};
//!
//! let stripe = StripeClient::new("sk_test_xxx");
//! let config = CheckoutConfig::new("https://shop.example.com")?;
//!
//! let request = CheckoutSessionRequest::from_cart(cart.items(), &images, &config)?;
//! let session = stripe.create_session(&request).await?;
//!
//! // Redirect the buyer to: session.url
//! ```

mod checkout;
mod config;
mod error;
mod stripe_client;

pub use checkout::{
    AdjustableQuantity, CheckoutLineItem, CheckoutSession, CheckoutSessionRequest,
    CURRENCY, PaymentProcessor, to_minor_units,
};
pub use config::CheckoutConfig;
pub use error::{PaymentError, Result};
pub use stripe_client::StripeClient;
