//! Sanity Content API Catalog
//!
//! Runs GROQ queries against the HTTP query endpoint:
//! `https://<project>.api.sanity.io/v<version>/data/query/<dataset>`.
//! The slug is passed as a query parameter (`$slug`), never spliced into
//! the query text.

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

use store_core::Product;

use crate::CatalogClient;
use crate::error::{CatalogError, Result};

const ALL_PRODUCTS_QUERY: &str = r#"*[_type == "product"]"#;
const PRODUCT_BY_SLUG_QUERY: &str = r#"*[_type == "product" && slug.current == $slug][0]"#;

/// Sanity connection settings
#[derive(Clone, Debug)]
pub struct SanityConfig {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,

    /// Read through the API CDN instead of the live API
    pub use_cdn: bool,

    /// Read token for private datasets
    pub token: Option<String>,
}

impl SanityConfig {
    pub fn new(project_id: impl Into<String>, dataset: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            dataset: dataset.into(),
            api_version: "2021-10-21".into(),
            use_cdn: true,
            token: None,
        }
    }

    pub fn from_env() -> Result<Self> {
        let project_id = std::env::var("SANITY_PROJECT_ID")
            .map_err(|_| CatalogError::Config("SANITY_PROJECT_ID not set".into()))?;
        let dataset = std::env::var("SANITY_DATASET").unwrap_or_else(|_| "production".into());

        let mut config = Self::new(project_id, dataset);
        if let Ok(version) = std::env::var("SANITY_API_VERSION") {
            config.api_version = version;
        }
        config.token = std::env::var("SANITY_TOKEN").ok();
        // tokens are not accepted by the API CDN
        config.use_cdn = config.token.is_none();

        Ok(config)
    }

    /// Query endpoint URL
    pub fn query_url(&self) -> Result<Url> {
        let host = if self.use_cdn { "apicdn" } else { "api" };
        let raw = format!(
            "https://{}.{host}.sanity.io/v{}/data/query/{}",
            self.project_id, self.api_version, self.dataset
        );
        Url::parse(&raw).map_err(|e| CatalogError::Config(format!("bad query URL {raw}: {e}")))
    }
}

#[derive(Debug, Deserialize)]
struct QueryResponse<T> {
    result: T,
}

/// Catalog backed by the Sanity HTTP API
pub struct SanityCatalog {
    client: reqwest::Client,
    config: SanityConfig,
    endpoint: Url,
}

impl SanityCatalog {
    pub fn new(config: SanityConfig) -> Result<Self> {
        let endpoint = config.query_url()?;
        Ok(Self {
            client: reqwest::Client::new(),
            config,
            endpoint,
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(SanityConfig::from_env()?)
    }

    pub const fn config(&self) -> &SanityConfig {
        &self.config
    }

    /// Full request URL for a query and its parameters
    fn request_url(&self, query: &str, params: &[(&str, &str)]) -> Result<Url> {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("query", query);
            for (name, value) in params {
                let encoded = serde_json::to_string(value)?;
                pairs.append_pair(&format!("${name}"), &encoded);
            }
        }
        Ok(url)
    }

    async fn fetch<T: DeserializeOwned>(&self, query: &str, params: &[(&str, &str)]) -> Result<T> {
        let url = self.request_url(query, params)?;
        tracing::debug!(query, "Querying content API");

        let mut request = self.client.get(url);
        if let Some(ref token) = self.config.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Content API query failed");
            return Err(CatalogError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await?;
        let parsed: QueryResponse<T> = serde_json::from_slice(&body)?;
        Ok(parsed.result)
    }
}

#[async_trait]
impl CatalogClient for SanityCatalog {
    async fn products(&self) -> Result<Vec<Product>> {
        self.fetch(ALL_PRODUCTS_QUERY, &[]).await
    }

    async fn product_by_slug(&self, slug: &str) -> Result<Option<Product>> {
        self.fetch(PRODUCT_BY_SLUG_QUERY, &[("slug", slug)]).await
    }

    async fn health_check(&self) -> bool {
        self.fetch::<serde_json::Value>("count(*[_type == \"product\"])", &[])
            .await
            .is_ok()
    }

    fn name(&self) -> &str {
        "Sanity"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_url() {
        let config = SanityConfig::new("i3hpjxyf", "production");
        assert_eq!(
            config.query_url().unwrap().as_str(),
            "https://i3hpjxyf.apicdn.sanity.io/v2021-10-21/data/query/production"
        );

        let live = SanityConfig {
            use_cdn: false,
            ..config
        };
        assert!(live.query_url().unwrap().as_str().starts_with("https://i3hpjxyf.api.sanity.io/"));
    }

    #[test]
    fn test_slug_is_a_parameter() {
        let catalog = SanityCatalog::new(SanityConfig::new("proj", "production")).unwrap();
        let url = catalog
            .request_url(PRODUCT_BY_SLUG_QUERY, &[("slug", "x' || true")])
            .unwrap();

        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs[0], ("query".to_string(), PRODUCT_BY_SLUG_QUERY.to_string()));
        assert_eq!(pairs[1], ("$slug".to_string(), "\"x' || true\"".to_string()));
    }

    #[test]
    fn test_decode_query_response() {
        let body = r#"{
            "ms": 3,
            "query": "*[_type == \"product\"]",
            "result": [
                { "_id": "1", "name": "A", "slug": { "current": "a" }, "price": 10 }
            ]
        }"#;
        let parsed: QueryResponse<Vec<Product>> = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.result.len(), 1);
        assert_eq!(parsed.result[0].slug.current, "a");

        let missing: QueryResponse<Option<Product>> =
            serde_json::from_str(r#"{ "result": null }"#).unwrap();
        assert!(missing.result.is_none());
    }
}
