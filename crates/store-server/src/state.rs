//! Application State

use std::sync::Arc;

use store_catalog::CatalogClient;
use store_core::ImageUrlBuilder;
use store_payments::{CheckoutConfig, PaymentProcessor};

/// Everything the checkout endpoint needs
#[derive(Clone)]
pub struct Checkout {
    /// Payment processor (Stripe)
    pub processor: Arc<dyn PaymentProcessor>,

    /// Pinned redirect targets and session options
    pub config: Arc<CheckoutConfig>,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Product catalog (Sanity or in-memory)
    pub catalog: Arc<dyn CatalogClient>,

    /// CDN URLs for product images
    pub images: Arc<ImageUrlBuilder>,

    /// Checkout (optional - None if payments are not configured)
    pub checkout: Option<Checkout>,
}
