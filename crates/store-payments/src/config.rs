//! Checkout Configuration
//!
//! Success and cancel pages are derived from a configured public base URL,
//! never from request headers.

use url::Url;

use crate::error::{PaymentError, Result};

/// Checkout settings independent of the processor
#[derive(Clone, Debug)]
pub struct CheckoutConfig {
    /// Public origin of the storefront, e.g. `https://shop.example.com`
    pub public_base_url: Url,

    /// Processor shipping rate id applied to every session
    pub shipping_rate: Option<String>,
}

impl CheckoutConfig {
    pub fn new(public_base_url: &str) -> Result<Self> {
        let public_base_url = Url::parse(public_base_url)
            .map_err(|e| PaymentError::Config(format!("PUBLIC_BASE_URL invalid: {e}")))?;
        if public_base_url.cannot_be_a_base() || !matches!(public_base_url.scheme(), "http" | "https") {
            return Err(PaymentError::Config(format!(
                "PUBLIC_BASE_URL must be an http(s) URL, got {public_base_url}"
            )));
        }

        Ok(Self {
            public_base_url,
            shipping_rate: None,
        })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        let base = std::env::var("PUBLIC_BASE_URL")
            .map_err(|_| PaymentError::Config("PUBLIC_BASE_URL not set".into()))?;

        let mut config = Self::new(&base)?;
        config.shipping_rate = std::env::var("STRIPE_SHIPPING_RATE")
            .ok()
            .filter(|rate| !rate.is_empty());
        Ok(config)
    }

    #[must_use]
    pub fn with_shipping_rate(mut self, rate: impl Into<String>) -> Self {
        self.shipping_rate = Some(rate.into());
        self
    }

    /// Page the processor returns to after payment
    pub fn success_url(&self) -> Result<Url> {
        self.page_url("success")
    }

    /// Page the processor returns to when the buyer backs out
    pub fn cancel_url(&self) -> Result<Url> {
        self.page_url("canceled")
    }

    fn page_url(&self, page: &str) -> Result<Url> {
        let mut url = self.public_base_url.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|()| PaymentError::Config("PUBLIC_BASE_URL cannot be a base".into()))?
            .pop_if_empty()
            .push(page);
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_urls() {
        let config = CheckoutConfig::new("https://shop.example.com").unwrap();
        assert_eq!(config.success_url().unwrap().as_str(), "https://shop.example.com/success");
        assert_eq!(config.cancel_url().unwrap().as_str(), "https://shop.example.com/canceled");
    }

    #[test]
    fn test_redirect_urls_under_subpath() {
        let config = CheckoutConfig::new("https://example.com/store/?ref=x").unwrap();
        assert_eq!(config.success_url().unwrap().as_str(), "https://example.com/store/success");
    }

    #[test]
    fn test_rejects_non_http_base() {
        assert!(CheckoutConfig::new("mailto:shop@example.com").is_err());
        assert!(CheckoutConfig::new("ftp://example.com").is_err());
        assert!(CheckoutConfig::new("not a url").is_err());
    }
}
